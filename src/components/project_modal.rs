//! Project detail modal: screenshot gallery, interpreted description, and
//! a full-screen lightbox.
//!
//! The modal renders nothing until a project is selected. Escape, the close
//! button, and a backdrop click all funnel through [`ModalState::close`].
//! The lightbox opens and closes independently of the surrounding modal.

use leptos::{ev, prelude::*};

use crate::components::icons::{Icon, IconKind};
use crate::data::projects::Project;
use crate::state::modal::ModalState;
use crate::util::markup::{self, Block, Inline};

#[component]
pub fn ProjectModal(modal: RwSignal<ModalState>) -> impl IntoView {
    // Escape while open is equivalent to an explicit close.
    let handle = window_event_listener(ev::keydown, move |ev| {
        if ev.key() == "Escape" && modal.with_untracked(ModalState::is_open) {
            modal.update(ModalState::close);
        }
    });
    on_cleanup(move || handle.remove());

    view! {
        <Show when=move || modal.get().is_open()>
            {move || {
                modal
                    .get()
                    .selected()
                    .and_then(Project::find)
                    .map(|project| view! { <ModalDialog project=project modal=modal/> })
            }}
        </Show>

        <Show when=move || modal.get().is_lightbox_open()>
            <Lightbox modal=modal/>
        </Show>
    }
}

#[component]
fn ModalDialog(project: &'static Project, modal: RwSignal<ModalState>) -> impl IntoView {
    let images = project.gallery_images();

    view! {
        <div
            class="fixed inset-0 bg-black/80 backdrop-blur-md z-40 flex items-center justify-center p-4 transform-gpu"
            on:click=move |_| modal.update(ModalState::close)
        >
            <div
                class="relative bg-white/95 dark:bg-gray-800/90 backdrop-blur-lg rounded-xl shadow-2xl w-full max-w-4xl lg:max-w-6xl max-h-[90vh] overflow-hidden flex flex-col border border-gray-200 dark:border-gray-700/50 transform-gpu"
                on:click=move |ev| ev.stop_propagation()
            >
                <div class="flex justify-between items-center p-4 md:p-5 border-b border-gray-200 dark:border-gray-700 flex-shrink-0">
                    <h3 class="text-xl md:text-2xl font-bold text-gray-900 dark:text-white tracking-tight">
                        {project.title}
                    </h3>
                    <button
                        class="text-gray-400 dark:text-gray-500 hover:bg-gray-200 dark:hover:bg-gray-700 hover:text-gray-900 dark:hover:text-white rounded-lg text-sm p-1.5 inline-flex items-center transition-colors duration-200"
                        aria-label="Close modal"
                        on:click=move |_| modal.update(ModalState::close)
                    >
                        <Icon kind=IconKind::Close class="w-5 h-5"/>
                    </button>
                </div>

                <div class="flex-grow overflow-y-auto">
                    <div class="p-4 md:p-6 lg:p-8 grid grid-cols-1 lg:grid-cols-2 lg:gap-8">
                        <div class="lg:sticky lg:top-6 mb-6 lg:mb-0 self-start space-y-4">
                            <Gallery project=project images=images modal=modal/>
                        </div>

                        <div class="space-y-6 transform-gpu">
                            <div>
                                <h4 class="text-lg font-semibold mb-2 text-gray-800 dark:text-gray-100 border-b border-gray-200 dark:border-gray-700 pb-1">
                                    "Project Overview"
                                </h4>
                                <div class="max-w-none mt-3 text-gray-600 dark:text-gray-300 text-left">
                                    {markup::parse(project.detailed_description)
                                        .iter()
                                        .map(render_block)
                                        .collect::<Vec<_>>()}
                                </div>
                            </div>

                            <div>
                                <h4 class="text-lg font-semibold mb-3 text-gray-800 dark:text-gray-100 border-b border-gray-200 dark:border-gray-700 pb-1">
                                    "Technologies Used"
                                </h4>
                                <div class="flex flex-wrap gap-2 mt-3">
                                    {project
                                        .tags
                                        .iter()
                                        .map(|&tag| {
                                            view! {
                                                <span class="bg-indigo-100 dark:bg-indigo-900/70 text-indigo-800 dark:text-indigo-200 text-xs font-medium px-3 py-1.5 rounded-md shadow-sm border border-indigo-200 dark:border-indigo-700/50">
                                                    {tag}
                                                </span>
                                            }
                                        })
                                        .collect::<Vec<_>>()}
                                </div>
                            </div>

                            <Links project=project/>
                        </div>
                    </div>
                </div>
            </div>
        </div>
    }
}

/// Vertical thumbnail stack; each image opens the lightbox.
#[component]
fn Gallery(
    project: &'static Project,
    images: Vec<&'static str>,
    modal: RwSignal<ModalState>,
) -> impl IntoView {
    if images.is_empty() {
        return view! {
            <div class="aspect-video bg-gray-200 dark:bg-gray-700 rounded-lg flex items-center justify-center text-gray-500 dark:text-gray-400">
                "No images available."
            </div>
        }
        .into_any();
    }

    images
        .into_iter()
        .enumerate()
        .map(|(index, src)| {
            view! {
                <div
                    class="relative w-full aspect-video bg-slate-100/80 dark:bg-gray-700/50 rounded-lg overflow-hidden shadow-md cursor-pointer group transform-gpu"
                    on:click=move |_| modal.update(|m| m.open_lightbox(src))
                >
                    <img
                        src=src
                        alt=format!("{} Screenshot {}", project.title, index + 1)
                        class="absolute w-full h-full object-contain"
                    />
                    <div class="absolute inset-0 bg-black/0 group-hover:bg-black/40 transition-colors duration-300 flex items-center justify-center opacity-0 group-hover:opacity-100 text-white text-5xl">
                        <Icon kind=IconKind::Magnify/>
                    </div>
                </div>
            }
        })
        .collect::<Vec<_>>()
        .into_any()
}

/// External links, or a notice when the project has none worth showing.
#[component]
fn Links(project: &'static Project) -> impl IntoView {
    view! {
        <div>
            <h4 class="text-lg font-semibold mb-3 text-gray-800 dark:text-gray-100 border-b border-gray-200 dark:border-gray-700 pb-1">
                "Links"
            </h4>
            <div class="flex flex-wrap gap-4 mt-3">
                {project
                    .live_link()
                    .map(|url| {
                        view! {
                            <a
                                href=url
                                target="_blank"
                                rel="noopener noreferrer"
                                title="Live Demo"
                                class="inline-flex items-center gap-2 text-sm font-medium text-white bg-blue-600 hover:bg-blue-700 dark:bg-blue-500 dark:hover:bg-blue-600 px-4 py-2 rounded-md shadow hover:shadow-md transition-all duration-200"
                            >
                                <Icon kind=IconKind::ExternalLink/>
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
                                class="inline-flex items-center gap-2 text-sm font-medium text-gray-700 dark:text-gray-300 bg-gray-200 hover:bg-gray-300 dark:bg-gray-700 dark:hover:bg-gray-600 px-4 py-2 rounded-md shadow hover:shadow-md transition-all duration-200"
                            >
                                <Icon kind=IconKind::GitHub/>
                                " View Code"
                            </a>
                        }
                    })}
            </div>
            <Show when=move || !project.has_links()>
                <p class="text-sm text-gray-500 dark:text-gray-400 mt-3 italic">
                    "No external links available for this project."
                </p>
            </Show>
        </div>
    }
}

/// Full-screen single-image overlay, independent of the modal's lifetime.
#[component]
fn Lightbox(modal: RwSignal<ModalState>) -> impl IntoView {
    view! {
        <div
            class="fixed inset-0 bg-black/95 z-50 flex items-center justify-center p-4 cursor-zoom-out"
            on:click=move |_| modal.update(ModalState::close_lightbox)
        >
            <img
                src=move || modal.get().lightbox_src().unwrap_or_default()
                alt="Lightbox view"
                class="max-w-full max-h-full object-contain rounded-lg shadow-xl"
                on:click=move |ev| ev.stop_propagation()
            />
            <button
                class="absolute top-4 right-4 text-white/70 hover:text-white bg-black/30 hover:bg-black/50 rounded-full p-2 transition-colors duration-200"
                aria-label="Close lightbox"
                on:click=move |ev| {
                    ev.stop_propagation();
                    modal.update(ModalState::close_lightbox);
                }
            >
                <Icon kind=IconKind::Close class="text-2xl"/>
            </button>
        </div>
    }
}

fn render_block(block: &Block) -> AnyView {
    match block {
        Block::Heading(text) => view! {
            <h3 class="text-xl font-semibold mt-5 mb-2 text-green-600 dark:text-green-400">
                {text.clone()}
            </h3>
        }
        .into_any(),
        Block::List(items) => view! {
            <ul class="list-none space-y-2 mt-2 mb-3 pl-0">
                {items
                    .iter()
                    .map(|item| {
                        view! { <li>{item.iter().map(render_inline).collect::<Vec<_>>()}</li> }
                    })
                    .collect::<Vec<_>>()}
            </ul>
        }
        .into_any(),
        Block::Paragraph(text) => view! {
            <p class="whitespace-pre-line mb-3">{text.clone()}</p>
        }
        .into_any(),
    }
}

fn render_inline(span: &Inline) -> AnyView {
    match span {
        Inline::Text(text) => text.clone().into_any(),
        Inline::Bold(text) => view! { <strong>{text.clone()}</strong> }.into_any(),
        Inline::Code(text) => view! {
            <code class="text-sm font-mono bg-gray-200 dark:bg-gray-700 px-1 py-0.5 rounded">
                {text.clone()}
            </code>
        }
        .into_any(),
    }
}
