//! Skills grid, one card per category.

use leptos::prelude::*;

use crate::components::icons::Icon;
use crate::data::profile::{SKILL_CATEGORIES, SkillCategory};

#[component]
pub fn Skills() -> impl IntoView {
    view! {
        <div class="mt-16">
            <h3 class="text-2xl font-semibold text-center text-indigo-600 dark:text-indigo-400 mb-10 drop-shadow-md">
                "Technical Skills"
            </h3>
            <div class="max-w-5xl mx-auto px-4 grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-4 gap-8">
                {SKILL_CATEGORIES
                    .iter()
                    .map(|category| view! { <SkillCategoryCard category=category/> })
                    .collect::<Vec<_>>()}
            </div>
        </div>
    }
}

#[component]
fn SkillCategoryCard(category: &'static SkillCategory) -> impl IntoView {
    view! {
        <div class="bg-white dark:bg-gray-700 p-6 rounded-lg shadow-lg transition-all duration-300 h-full hover:-translate-y-1 hover:shadow-xl">
            <div class="flex items-center mb-4 text-2xl text-blue-600 dark:text-blue-400">
                <Icon kind=category.icon class="mr-3 flex-shrink-0"/>
                <h4 class="text-lg font-semibold text-gray-800 dark:text-white">
                    {category.title}
                </h4>
            </div>
            <ul class="space-y-2">
                {category
                    .skills
                    .iter()
                    .map(|&skill| {
                        view! {
                            <li class="text-gray-600 dark:text-gray-300 text-sm">{skill}</li>
                        }
                    })
                    .collect::<Vec<_>>()}
            </ul>
        </div>
    }
}
