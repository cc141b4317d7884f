//! Radial-gradient halo following the pointer.

use leptos::{ev, prelude::*};

use crate::state::theme::Theme;

/// Halo diameter in CSS pixels (w-64 / h-64).
const SIZE: i32 = 256;

#[component]
pub fn CursorFader() -> impl IntoView {
    let theme = expect_context::<RwSignal<Theme>>();
    let position = RwSignal::new((0, 0));

    let handle = window_event_listener(ev::mousemove, move |ev| {
        position.set((ev.client_x(), ev.client_y()));
    });
    on_cleanup(move || handle.remove());

    let gradient_color = move || match theme.get() {
        Theme::Light => "rgba(170, 170, 220, 0.2)",
        Theme::Dark => "rgba(120, 120, 240, 0.2)",
    };

    view! {
        <div
            class="fixed top-0 left-0 w-64 h-64 rounded-full pointer-events-none z-50 mix-blend-multiply dark:mix-blend-screen transform-gpu"
            style:transform=move || {
                let (x, y) = position.get();
                format!("translate({}px, {}px)", x - SIZE / 2, y - SIZE / 2)
            }
            style:background=move || {
                format!("radial-gradient(circle, {} 0%, transparent 35%)", gradient_color())
            }
            style:filter="blur(1px)"
        ></div>
    }
}
