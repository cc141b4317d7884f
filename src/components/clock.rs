//! Floating wall-clock readout, bottom-right.

use leptos::prelude::*;

use crate::state::clock::ClockState;
use crate::state::theme::Theme;

#[component]
pub fn Clock() -> impl IntoView {
    let theme = expect_context::<RwSignal<Theme>>();
    let clock = expect_context::<RwSignal<ClockState>>();

    let text_color = move || match theme.get() {
        Theme::Light => "text-gray-700",
        Theme::Dark => "text-gray-300",
    };
    let bg_color = move || match theme.get() {
        Theme::Light => "bg-white/70 backdrop-blur-sm",
        Theme::Dark => "bg-black/50 backdrop-blur-sm",
    };

    view! {
        <div class=move || {
            format!(
                "fixed bottom-4 right-4 z-20 px-3 py-1.5 rounded-lg shadow-md {} {} text-sm font-mono",
                bg_color(),
                text_color()
            )
        }>{move || clock.get().time}</div>
    }
}
