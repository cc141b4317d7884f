//! Fixed top navigation bar.
//!
//! Styling is a pure function of the level-triggered scroll flag and the
//! current theme; the class tables live in [`crate::state::nav`]. The time
//! readout subscribes to the shared clock context.

use leptos::{ev, prelude::*};

use crate::components::icons::{Icon, IconKind};
use crate::data::profile::{NAV_ITEMS, NAVBAR_IMAGE};
use crate::state::clock::ClockState;
use crate::state::nav;
use crate::state::theme::Theme;
use crate::util::theme_pref;

#[component]
pub fn Navbar() -> impl IntoView {
    let theme = expect_context::<RwSignal<Theme>>();
    let clock = expect_context::<RwSignal<ClockState>>();
    let scrolled = RwSignal::new(false);
    let active = RwSignal::new("home");

    // Re-evaluated on every scroll event, 50px threshold.
    let handle = window_event_listener(ev::scroll, move |_| {
        let offset = window().scroll_y().unwrap_or(0.0);
        scrolled.set(nav::is_scrolled(offset));
    });
    on_cleanup(move || handle.remove());

    let on_toggle = move |_| theme.update(|t| *t = theme_pref::toggle(*t));
    let toggle_label = move || {
        if theme.get().is_dark() {
            "Switch to light theme"
        } else {
            "Switch to dark theme"
        }
    };

    view! {
        <nav class=move || format!("{} {}", nav::NAV_BASE, nav::container_class(scrolled.get()))>
            <div class="container mx-auto px-4 md:px-6 py-3 flex justify-between items-center">
                <img
                    src=NAVBAR_IMAGE
                    alt="Pavan Kishore N profile picture"
                    class="w-12 h-12 rounded-full object-cover border-2 border-gray-300 dark:border-gray-600 shadow-sm"
                />

                <div class="flex items-center space-x-4 md:space-x-6">
                    <ul class="hidden md:flex space-x-6 items-center">
                        {NAV_ITEMS
                            .iter()
                            .map(|&item| {
                                let link_class = move || {
                                    let base = nav::link_class(scrolled.get(), theme.get());
                                    if active.get() == item {
                                        format!(
                                            "capitalize cursor-pointer font-medium transition-colors duration-200 {base} {}",
                                            nav::active_link_class(scrolled.get(), theme.get())
                                        )
                                    } else {
                                        format!(
                                            "capitalize cursor-pointer font-medium transition-colors duration-200 {base}"
                                        )
                                    }
                                };
                                view! {
                                    <li>
                                        <a
                                            href=format!("#{item}")
                                            class=link_class
                                            on:click=move |_| active.set(item)
                                        >
                                            {item}
                                        </a>
                                    </li>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </ul>

                    <span class=move || {
                        format!(
                            "hidden md:inline text-sm font-mono {}",
                            nav::text_class(scrolled.get(), theme.get())
                        )
                    }>{move || clock.get().time}</span>

                    <button
                        class=move || {
                            format!(
                                "p-2 rounded-md transition-colors duration-300 focus:outline-none focus:ring-2 focus:ring-offset-2 focus:ring-offset-transparent {}",
                                nav::toggle_class(scrolled.get(), theme.get())
                            )
                        }
                        on:click=on_toggle
                        aria-label=toggle_label
                    >
                        {move || {
                            if theme.get().is_dark() {
                                view! { <Icon kind=IconKind::Sun class="text-xl"/> }
                            } else {
                                view! { <Icon kind=IconKind::Moon class="text-xl"/> }
                            }
                        }}
                    </button>
                </div>
            </div>
        </nav>
    }
}
