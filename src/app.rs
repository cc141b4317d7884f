//! Root application component with theme and clock context providers.

use gloo_timers::callback::Interval;
use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};

use crate::components::about::About;
use crate::components::clock::Clock;
use crate::components::contact::Contact;
use crate::components::cursor_fader::CursorFader;
use crate::components::hero::Hero;
use crate::components::navbar::Navbar;
use crate::components::projects::Projects;
use crate::components::resume::Resume;
use crate::state::clock::ClockState;
use crate::state::theme::Theme;
use crate::util::theme_pref;

/// Root application component.
///
/// Provides the theme and shared clock contexts, starts the single
/// 1-second tick, and composes the page sections.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    // Theme: persisted preference, else OS preference. Applied to <html>
    // immediately so the first paint uses the right variant.
    let theme = RwSignal::new(theme_pref::initial());
    theme_pref::apply(theme.get_untracked());
    provide_context(theme);

    // One shared time source; the navbar and floating clock subscribe.
    let clock = RwSignal::new(ClockState::default());
    provide_context(clock);
    Interval::new(1_000, move || clock.set(ClockState::now())).forget();

    view! {
        <Title text="Pavan Kishore N | Portfolio"/>

        <div class="bg-slate-50 dark:bg-black dark:bg-[radial-gradient(ellipse_at_top_right,_var(--tw-gradient-stops))] dark:from-indigo-900/60 dark:via-black dark:to-black transition-colors duration-300 relative overflow-x-hidden">
            <CursorFader/>
            <Navbar/>
            <main>
                <Hero/>
                <About/>
                <Projects/>
                <Resume/>
                <Contact/>
            </main>
            <Clock/>
        </div>
    }
}
