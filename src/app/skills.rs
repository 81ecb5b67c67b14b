use leptos::prelude::*;

use crate::portfolio::{CodingPlatform, SkillCategory, CODING_PLATFORMS, SKILL_CATEGORIES};

use super::{
    reveal::{fade_up, use_reveal, Reveal},
    SectionTitle,
};

#[component]
pub fn Skills() -> impl IntoView {
    let Reveal {
        node_ref,
        is_visible,
    } = use_reveal();

    view! {
        <section id="skills" node_ref=node_ref class="section-padding relative">
            <div class="container mx-auto px-4 sm:px-6 lg:px-8">
                <SectionTitle title="Technical Skills" />

                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-8 mb-16">
                    {SKILL_CATEGORIES
                        .iter()
                        .enumerate()
                        .map(|(index, category)| view! { <CategoryCard category index is_visible /> })
                        .collect_view()}
                </div>

                <div class="professional-card p-8">
                    <h3 class="text-2xl font-semibold mb-8 text-center">"Coding Platform Experience"</h3>
                    <div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-4 gap-6">
                        {CODING_PLATFORMS
                            .iter()
                            .enumerate()
                            .map(|(index, platform)| view! { <PlatformCard platform index is_visible /> })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn CategoryCard(
    category: &'static SkillCategory,
    index: usize,
    is_visible: Signal<bool>,
) -> impl IntoView {
    view! {
        <div
            class=move || {
                format!(
                    "professional-card p-6 transition-all duration-1000 ease-out {}",
                    fade_up(is_visible.get()),
                )
            }
            style=format!("transition-delay: {}ms", index * 150)
        >
            <h3 class="text-xl font-semibold mb-6 flex items-center gap-3">
                <span class="text-[#6C63FF]">{category.icon.glyph()}</span>
                <span>{category.title}</span>
            </h3>
            <div class="space-y-3">
                {category
                    .skills
                    .iter()
                    .enumerate()
                    .map(|(skill_index, skill)| {
                        view! {
                            <div
                                class=move || {
                                    format!(
                                        "transition-all duration-700 ease-out {}",
                                        if is_visible.get() {
                                            "opacity-100 translate-x-0"
                                        } else {
                                            "opacity-0 -translate-x-10"
                                        },
                                    )
                                }
                                style=format!(
                                    "transition-delay: {}ms",
                                    skill_index * 100 + index * 150 + 300,
                                )
                            >
                                <div class="flex items-center">
                                    <div class="w-2 h-2 bg-gradient-to-r from-[#6C63FF] to-[#2EC4B6] rounded-full mr-3"></div>
                                    <span class="font-medium">{skill.name}</span>
                                </div>
                                {skill
                                    .bar_width()
                                    .map(|width| {
                                        view! {
                                            <div class="mt-2 h-1.5 w-full bg-slate-700/40 rounded-full overflow-hidden">
                                                <div
                                                    class="h-full rounded-full bg-gradient-to-r from-[#6C63FF] to-[#2EC4B6]"
                                                    style=width
                                                ></div>
                                            </div>
                                        }
                                    })}
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

#[component]
fn PlatformCard(
    platform: &'static CodingPlatform,
    index: usize,
    is_visible: Signal<bool>,
) -> impl IntoView {
    view! {
        <div
            class=move || {
                format!(
                    "group p-6 border border-slate-500/50 rounded-xl hover:border-[#6C63FF] hover:bg-[#6C63FF]/5 transition-all duration-300 hover:-translate-y-2 hover:shadow-lg text-center {}",
                    fade_up(is_visible.get()),
                )
            }
            style=format!("transition-delay: {}ms", index * 150 + 800)
        >
            <div
                class="w-12 h-12 rounded-full mx-auto mb-4 flex items-center justify-center text-white font-bold text-lg"
                style=format!("background-color: {}", platform.color)
            >
                {platform.initial().to_string()}
            </div>
            <h4 class="font-semibold mb-2 group-hover:text-[#6C63FF] transition-colors duration-300">
                {platform.platform}
            </h4>
            <p class="text-sm text-slate-400">"Solved " {platform.problems} " problems"</p>
            <div class="mt-4 w-full h-1 bg-slate-700 rounded-full overflow-hidden">
                <div
                    class="h-full rounded-full transition-all duration-1000 ease-out scale-x-0 group-hover:scale-x-100 origin-left"
                    style=format!("background-color: {}", platform.color)
                ></div>
            </div>
        </div>
    }
}
