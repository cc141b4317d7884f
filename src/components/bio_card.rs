//! Bio paragraphs card.

use leptos::prelude::*;

use crate::data::profile::BIO_PARAGRAPHS;

#[component]
pub fn BioCard() -> impl IntoView {
    view! {
        <div class="max-w-4xl mx-auto bg-white dark:bg-white/5 dark:backdrop-blur-md dark:border dark:border-white/10 rounded-lg shadow-xl dark:shadow-lg p-8 md:p-10 mb-16 transition-colors duration-300">
            {BIO_PARAGRAPHS
                .iter()
                .enumerate()
                .map(|(i, &paragraph)| {
                    let spacing = if i + 1 == BIO_PARAGRAPHS.len() { "" } else { " mb-4" };
                    view! {
                        <p class=format!(
                            "text-gray-700 dark:text-gray-300 text-base md:text-lg leading-relaxed{spacing}"
                        )>{paragraph}</p>
                    }
                })
                .collect::<Vec<_>>()}
        </div>
    }
}
