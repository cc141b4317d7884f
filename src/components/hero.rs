//! Full-height landing section with portrait, name, tagline, and links.

use leptos::prelude::*;

use crate::components::icons::Icon;
use crate::data::profile::{NAME, PROFILE_IMAGE, SOCIAL_LINKS, TAGLINE};

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section
            id="home"
            class="relative min-h-screen flex items-center justify-center px-4 py-20 md:py-0 overflow-hidden text-gray-800 dark:text-white dark:bg-transparent"
        >
            <div class="relative z-10 flex flex-col md:flex-row items-center justify-center gap-10 md:gap-16 max-w-5xl mx-auto">
                <div class="w-48 h-48 md:w-64 md:h-64 lg:w-80 lg:h-80 flex-shrink-0">
                    <img
                        src=PROFILE_IMAGE
                        alt=NAME
                        class="w-full h-full rounded-full object-cover border-4 border-gray-300 dark:border-gray-700 shadow-xl"
                    />
                </div>

                <div class="flex flex-col items-center md:items-start text-center md:text-left">
                    <h1 class="text-4xl sm:text-5xl lg:text-6xl font-bold mb-3 text-gray-900 dark:text-white drop-shadow-md">
                        {NAME}
                    </h1>

                    <p class="text-lg md:text-xl lg:text-2xl mb-6 text-gray-600 dark:text-gray-300 max-w-xl">
                        {TAGLINE}
                    </p>

                    <div class="flex justify-center md:justify-start space-x-5 mb-8">
                        {SOCIAL_LINKS
                            .iter()
                            .map(|link| {
                                view! {
                                    <a
                                        href=link.href
                                        target="_blank"
                                        rel="noopener noreferrer"
                                        title=link.title
                                        class="text-gray-500 dark:text-gray-400 hover:text-gray-900 dark:hover:text-white transition-colors duration-200"
                                    >
                                        <Icon kind=link.icon class="text-2xl"/>
                                    </a>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </div>

                    <a
                        href="#about"
                        class="bg-indigo-600 text-white hover:bg-indigo-700 dark:bg-indigo-500 dark:hover:bg-indigo-600 font-semibold py-3 px-8 rounded-md transition-all duration-300 ease-in-out cursor-pointer shadow-md hover:shadow-lg"
                    >
                        "Learn More About Me"
                    </a>
                </div>
            </div>
        </section>
    }
}
