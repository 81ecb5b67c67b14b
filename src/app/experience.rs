use leptos::prelude::*;

use crate::portfolio::{ExperienceRecord, EXPERIENCE};

use super::{
    reveal::{fade_up, use_reveal, Reveal},
    SectionTitle,
};

#[component]
pub fn Experience() -> impl IntoView {
    let Reveal {
        node_ref,
        is_visible,
    } = use_reveal();

    view! {
        <section id="experience" node_ref=node_ref class="section-padding relative">
            <div class="container mx-auto px-4 sm:px-6 lg:px-8">
                <SectionTitle title="Experience" />
                <div class=move || {
                    format!(
                        "max-w-3xl mx-auto space-y-8 transition-all duration-1000 ease-out {}",
                        fade_up(is_visible.get()),
                    )
                }>{EXPERIENCE.iter().map(|record| view! { <ExperienceCard record /> }).collect_view()}</div>
            </div>
        </section>
    }
}

#[component]
fn ExperienceCard(record: &'static ExperienceRecord) -> impl IntoView {
    view! {
        <div class="card-hover p-8 rounded-xl shadow-xl bg-gradient-to-br from-gray-50 to-gray-100 dark:from-gray-800 dark:to-gray-900 relative overflow-hidden">
            <div class="absolute top-0 right-0 w-24 h-24 bg-gradient-to-br from-[#6C63FF] to-[#2EC4B6] opacity-10 rounded-bl-full"></div>
            <div class="flex flex-col md:flex-row md:items-start gap-6">
                <div class="w-16 h-16 flex-shrink-0 bg-gradient-to-br from-[#6C63FF] to-[#2EC4B6] rounded-lg shadow-lg flex items-center justify-center -rotate-3 text-3xl">
                    "💼"
                </div>
                <div class="flex-1">
                    <h3 class="text-2xl font-bold">{record.role}</h3>
                    <h4 class="text-xl font-semibold text-[#6C63FF] mb-3">{record.company}</h4>
                    <div class="flex flex-wrap items-center gap-4 text-sm mb-4 opacity-75">
                        <span>{record.duration}</span>
                        <span>{record.location}</span>
                    </div>
                    <div class="space-y-3 text-base">
                        {record.paragraphs.iter().map(|p| view! { <p>{*p}</p> }).collect_view()}
                    </div>
                    {record
                        .certificate
                        .map(|href| {
                            view! {
                                <div class="mt-4 mb-6">
                                    <a
                                        href=href
                                        target="_blank"
                                        rel="noopener noreferrer"
                                        aria-label=format!("View {} certificate", record.role)
                                        class="inline-flex items-center gap-2 px-4 py-2 border border-[#6C63FF]/30 rounded-full text-sm font-medium hover:border-[#6C63FF]/50 transition-all duration-300"
                                    >
                                        <span class="text-[#FFD700]">"🏅"</span>
                                        "View Certificate"
                                    </a>
                                </div>
                            }
                        })}
                    <div class="mt-6 flex flex-wrap gap-2">
                        {record
                            .technologies
                            .iter()
                            .map(|tech| {
                                view! {
                                    <span class="px-3 py-1 bg-gray-200 dark:bg-gray-700 rounded-full text-sm font-medium">
                                        {*tech}
                                    </span>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </div>
    }
}
