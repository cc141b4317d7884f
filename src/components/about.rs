//! About section: bio card, education timeline, and skills grid.

use leptos::prelude::*;

use crate::components::bio_card::BioCard;
use crate::components::skills::Skills;
use crate::components::timeline::Timeline;

#[component]
pub fn About() -> impl IntoView {
    view! {
        <section id="about" class="py-16 md:py-24 transition-colors duration-300">
            <div class="container mx-auto px-4">
                <h2 class="text-3xl md:text-4xl font-bold text-center mb-12 text-indigo-600 dark:text-indigo-400 drop-shadow-md">
                    "About Me"
                </h2>

                <BioCard/>
                <Timeline/>
                <Skills/>
            </div>
        </section>
    }
}
