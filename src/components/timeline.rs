//! Vertical education timeline with alternating cards.

use leptos::prelude::*;

use crate::components::icons::Icon;
use crate::data::profile::{TIMELINE, TimelineEntry};

#[component]
pub fn Timeline() -> impl IntoView {
    view! {
        <div class="relative wrap overflow-hidden p-4 md:p-10 h-full mb-16">
            <h3 class="text-2xl font-semibold text-center text-indigo-600 dark:text-indigo-400 mb-10 drop-shadow-md">
                "Education Timeline"
            </h3>
            <div
                class="absolute border-opacity-20 border-blue-400 dark:border-blue-700 h-full border"
                style="left: 50%"
            ></div>

            {TIMELINE
                .iter()
                .enumerate()
                .map(|(index, entry)| view! { <TimelineItem entry=entry index=index/> })
                .collect::<Vec<_>>()}
        </div>
    }
}

/// One timeline row; even rows put the card on the right, odd on the left.
#[component]
fn TimelineItem(entry: &'static TimelineEntry, index: usize) -> impl IntoView {
    let is_left = index % 2 == 0;
    let spacer_order = if is_left { "md:order-1" } else { "md:order-3" };
    let card_order = if is_left { "md:order-3" } else { "md:order-1" };

    view! {
        <div class="mb-8 flex justify-between items-center w-full">
            <div class=format!("order-1 w-5/12 {spacer_order}")></div>
            <div class="z-20 flex items-center justify-center order-2 bg-blue-600 dark:bg-blue-400 shadow-xl w-10 h-10 rounded-full text-white text-lg">
                <Icon kind=entry.icon/>
            </div>
            <div class=format!(
                "order-3 {card_order} w-5/12 px-6 py-4 bg-white dark:bg-white/5 dark:backdrop-blur-md dark:border dark:border-white/10 rounded-lg shadow-xl dark:shadow-lg transition-colors duration-300"
            )>
                <h3 class="mb-2 font-bold text-gray-800 dark:text-white text-lg md:text-xl">
                    {entry.title}
                </h3>
                <p class="text-sm font-medium leading-snug tracking-wide text-blue-600 dark:text-blue-300 mb-1">
                    {entry.institution}
                </p>
                <p class="text-xs leading-snug tracking-wide text-gray-500 dark:text-gray-400 mb-3">
                    {entry.date}
                </p>
                <p class="text-sm text-gray-700 dark:text-gray-300">{entry.description}</p>
            </div>
        </div>
    }
}
