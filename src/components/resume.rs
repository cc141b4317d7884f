//! Resume card: sectioned facts plus the PDF download link.

use leptos::prelude::*;

use crate::components::icons::{Icon, IconKind};
use crate::data::profile::{RESUME_PDF, RESUME_SECTIONS, ResumeItem, ResumeSection};

#[component]
pub fn Resume() -> impl IntoView {
    view! {
        <section id="resume" class="py-16 md:py-24 transition-colors duration-300">
            <div class="container mx-auto px-4 max-w-4xl">
                <h2 class="text-3xl md:text-4xl font-bold text-center mb-12 text-indigo-600 dark:text-indigo-400 drop-shadow-md">
                    "Resume"
                </h2>

                <div class="relative bg-white/60 dark:bg-white/5 backdrop-blur-lg border border-gray-200 dark:border-white/10 rounded-xl shadow-lg dark:shadow-black/30 p-6 md:p-10 transition-all duration-300 hover:shadow-xl dark:hover:shadow-blue-500/30 hover:border-gray-300 dark:hover:border-blue-400/50 transform hover:-translate-y-1">
                    {RESUME_SECTIONS
                        .iter()
                        .map(|section| view! { <ResumeSectionView section=section/> })
                        .collect::<Vec<_>>()}

                    <a
                        href=RESUME_PDF
                        download=""
                        class="mt-12 inline-block px-8 py-3 rounded-lg text-white font-semibold transition-all duration-300 bg-blue-600/90 dark:bg-blue-500/70 hover:bg-blue-700 dark:hover:bg-blue-600/80 shadow-lg hover:shadow-xl"
                    >
                        <Icon kind=IconKind::Download class="inline mr-2 -mt-1"/>
                        "Download Resume"
                    </a>
                </div>
            </div>
        </section>
    }
}

#[component]
fn ResumeSectionView(section: &'static ResumeSection) -> impl IntoView {
    view! {
        <div class="mb-12">
            <h3 class="text-2xl font-semibold text-gray-800 dark:text-white mb-6 flex items-center">
                <Icon
                    kind=section.icon
                    class="mr-4 text-blue-600 dark:text-blue-300 text-3xl flex-shrink-0"
                />
                <span>{section.title}</span>
            </h3>
            <div class="pl-6 border-l-2 border-blue-300 dark:border-white/20 ml-[1.8rem] space-y-6">
                {section
                    .items
                    .iter()
                    .map(|item| view! { <ResumeItemView item=item/> })
                    .collect::<Vec<_>>()}
            </div>
        </div>
    }
}

#[component]
fn ResumeItemView(item: &'static ResumeItem) -> impl IntoView {
    view! {
        <div class="relative pl-8 before:absolute before:left-[-0.7rem] before:top-[0.3rem] before:w-4 before:h-4 before:bg-white dark:before:bg-gray-900 before:border-2 before:border-blue-600 dark:before:border-blue-400 before:rounded-full">
            <h4 class="text-lg font-semibold text-gray-700 dark:text-white mb-0.5">
                {item.title}
            </h4>
            {item
                .subtitle
                .map(|subtitle| {
                    view! {
                        <p class="text-sm text-blue-700 dark:text-blue-300 font-medium mb-1">
                            {subtitle}
                        </p>
                    }
                })}
            {item
                .description
                .map(|description| {
                    view! {
                        <p class="text-gray-600 dark:text-gray-300 text-sm leading-relaxed">
                            {description}
                        </p>
                    }
                })}
        </div>
    }
}
