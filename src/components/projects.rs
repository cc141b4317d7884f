//! Featured projects section.
//!
//! Owns the modal selection state and drives the body scroll-lock from it:
//! whichever way the modal closes, the one effect below releases the lock.

use leptos::prelude::*;

use crate::components::icons::{Icon, IconKind};
use crate::components::project_modal::ProjectModal;
use crate::data::projects::{PROJECTS, Project};
use crate::state::modal::ModalState;
use crate::util::scroll_lock;

/// Shown in place of a project card image that fails to load.
const FALLBACK_IMAGE: &str =
    "https://via.placeholder.com/1200x800/e2e8f0/9ca3af?text=Image+Not+Found";

#[component]
pub fn Projects() -> impl IntoView {
    let modal = RwSignal::new(ModalState::default());

    Effect::new(move || scroll_lock::set(modal.get().is_open()));

    view! {
        <section id="projects" class="py-16 md:py-24 transition-colors duration-300">
            <div class="container mx-auto px-4 max-w-4xl lg:max-w-5xl">
                <h2 class="text-3xl md:text-4xl font-semibold text-center mb-16 text-indigo-600 dark:text-indigo-400 drop-shadow-lg">
                    "Featured Projects"
                </h2>

                <div class="space-y-16 md:space-y-20">
                    {PROJECTS
                        .iter()
                        .map(|project| view! { <ProjectBlock project=project modal=modal/> })
                        .collect::<Vec<_>>()}
                </div>
            </div>

            <ProjectModal modal=modal/>
        </section>
    }
}

/// One project card: image, summary, tags, links, and the modal trigger.
#[component]
fn ProjectBlock(project: &'static Project, modal: RwSignal<ModalState>) -> impl IntoView {
    // Swapped to the placeholder if the real image fails to load.
    let image_src = RwSignal::new(project.image_url);

    view! {
        <div class="overflow-hidden rounded-xl shadow-lg bg-white dark:bg-gray-800/60 border border-gray-200 dark:border-gray-700/50 transform-gpu">
            <div class="relative aspect-video overflow-hidden">
                <img
                    src=move || image_src.get()
                    alt=format!("{} screenshot", project.title)
                    class="absolute inset-0 w-full h-full object-cover transform-gpu"
                    on:error=move |_| image_src.set(FALLBACK_IMAGE)
                />
            </div>

            <div class="p-6 md:p-8">
                <h3 class="text-2xl md:text-3xl font-semibold mb-3 text-gray-900 dark:text-white">
                    {project.title}
                </h3>
                <p class="text-gray-600 dark:text-gray-300 mb-4 text-base leading-relaxed">
                    {project.description}
                </p>

                <div class="flex flex-wrap gap-2 mb-5">
                    {project
                        .tags
                        .iter()
                        .map(|&tag| {
                            view! {
                                <span class="bg-indigo-100 dark:bg-indigo-900/60 text-indigo-800 dark:text-indigo-200 text-xs font-semibold px-3 py-1 rounded-full shadow-sm">
                                    {tag}
                                </span>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>

                <div class="flex flex-wrap items-center justify-between gap-4">
                    <div class="flex gap-4">
                        {project
                            .live_link()
                            .map(|url| {
                                view! {
                                    <a
                                        href=url
                                        target="_blank"
                                        rel="noopener noreferrer"
                                        title="Live Demo"
                                        class="text-indigo-600 dark:text-indigo-300 hover:text-indigo-800 dark:hover:text-indigo-100 transition duration-200 flex items-center gap-1 text-sm font-medium"
                                    >
                                        <Icon kind=IconKind::Link/>
                                        " Live Demo"
                                    </a>
                                }
                            })}
                        {project
                            .repo_link()
                            .map(|url| {
                                view! {
                                    <a
                                        href=url
                                        target="_blank"
                                        rel="noopener noreferrer"
                                        title="GitHub Repo"
                                        class="text-gray-500 dark:text-gray-400 hover:text-gray-800 dark:hover:text-gray-100 transition duration-200 flex items-center gap-1 text-sm"
                                    >
                                        <Icon kind=IconKind::GitHub/>
                                        " View Code"
                                    </a>
                                }
                            })}
                    </div>

                    <button
                        class="inline-flex items-center gap-2 text-sm font-medium text-indigo-600 dark:text-indigo-400 hover:text-indigo-800 dark:hover:text-indigo-200 transition-colors duration-200"
                        on:click=move |_| modal.update(|m| m.open(project.id))
                    >
                        "Read More "
                        <Icon kind=IconKind::ArrowRight/>
                    </button>
                </div>
            </div>
        </div>
    }
}
