//! Contact section: detail cards and social icon row.

use leptos::prelude::*;

use crate::components::icons::Icon;
use crate::data::profile::{CONTACT_BLURB, CONTACT_DETAILS, ContactDetail, SOCIAL_LINKS};

#[component]
pub fn Contact() -> impl IntoView {
    view! {
        <section id="contact" class="py-16 md:py-24 transition-colors duration-300">
            <div class="container mx-auto px-4 max-w-4xl text-center">
                <h2 class="text-3xl md:text-4xl font-bold mb-4 text-indigo-600 dark:text-indigo-400 drop-shadow-md">
                    "Get In Touch"
                </h2>
                <p class="text-lg text-gray-700 dark:text-gray-300 mb-12 max-w-2xl mx-auto">
                    {CONTACT_BLURB}
                </p>

                <div class="grid grid-cols-1 md:grid-cols-3 gap-8 mb-12">
                    {CONTACT_DETAILS
                        .iter()
                        .map(|detail| view! { <ContactCard detail=detail/> })
                        .collect::<Vec<_>>()}
                </div>

                <div>
                    <h3 class="text-xl font-semibold text-gray-800 dark:text-white mb-5">
                        "Connect with Me"
                    </h3>
                    <div class="flex justify-center space-x-6">
                        {SOCIAL_LINKS
                            .iter()
                            .map(|link| {
                                view! {
                                    <a
                                        href=link.href
                                        target="_blank"
                                        rel="noopener noreferrer"
                                        title=link.title
                                        class="text-gray-500 dark:text-gray-400 hover:text-blue-600 dark:hover:text-white transition duration-200 hover:-translate-y-1"
                                    >
                                        <Icon kind=link.icon class="text-4xl"/>
                                    </a>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn ContactCard(detail: &'static ContactDetail) -> impl IntoView {
    view! {
        <div class="bg-white dark:bg-white/5 dark:backdrop-blur-md border border-gray-200 dark:border-white/10 p-6 rounded-lg shadow-md dark:shadow-lg flex flex-col items-center transition-all duration-300 hover:-translate-y-1 hover:shadow-lg">
            <Icon kind=detail.icon class="text-4xl text-blue-600 dark:text-blue-300 mb-4"/>
            <h4 class="font-semibold text-lg text-gray-800 dark:text-white mb-1">
                {detail.title}
            </h4>
            {match detail.href {
                Some(href) => view! {
                    <a
                        href=href
                        class="text-blue-600 dark:text-blue-300 hover:text-blue-800 dark:hover:text-blue-200 hover:underline text-sm break-all"
                    >
                        {detail.value}
                    </a>
                }
                .into_any(),
                None => view! {
                    <p class="text-gray-700 dark:text-gray-300 text-sm">{detail.value}</p>
                }
                .into_any(),
            }}
        </div>
    }
}
