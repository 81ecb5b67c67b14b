use leptos::prelude::*;

use crate::portfolio::{ACHIEVEMENTS, CERTIFICATIONS};

use super::{
    reveal::{fade_up, use_reveal, Reveal},
    SectionTitle,
};

#[component]
pub fn Achievements() -> impl IntoView {
    let Reveal {
        node_ref,
        is_visible,
    } = use_reveal();
    let slide_in = move || {
        if is_visible.get() {
            "opacity-100 translate-x-0"
        } else {
            "opacity-0 -translate-x-10"
        }
    };

    view! {
        <section id="achievements" node_ref=node_ref class="section-padding relative">
            <div class="container mx-auto px-4 sm:px-6 lg:px-8">
                <SectionTitle title="Achievements & Certifications" />
                <div class="grid grid-cols-1 lg:grid-cols-2 gap-8">
                    <div class=move || {
                        format!("transition-all duration-1000 ease-out {}", fade_up(is_visible.get()))
                    }>
                        <div class="achievement-card p-4 rounded-lg">
                            <h3 class="text-lg font-semibold mb-4 flex items-center gap-2">
                                <span class="text-[#FFD700]">"🏆"</span>
                                "Competition Achievements"
                            </h3>
                            <div class="space-y-3">
                                {ACHIEVEMENTS
                                    .iter()
                                    .enumerate()
                                    .map(|(index, achievement)| {
                                        view! {
                                            <div
                                                class=move || {
                                                    format!(
                                                        "group p-3 rounded-lg border border-slate-500/50 hover:border-[#6C63FF]/50 transition-all duration-300 hover:bg-[#6C63FF]/5 hover:-translate-y-1 {}",
                                                        slide_in(),
                                                    )
                                                }
                                                style=format!("transition-delay: {}ms", index * 200)
                                            >
                                                <div class="flex items-start gap-3">
                                                    <div
                                                        class="p-1.5 rounded-lg bg-slate-700/40"
                                                        style=format!("color: {}", achievement.accent.hex())
                                                    >
                                                        "★"
                                                    </div>
                                                    <div class="flex-1">
                                                        <h4 class="text-sm font-semibold mb-0.5 group-hover:text-[#6C63FF] transition-colors duration-300">
                                                            {achievement.title}
                                                        </h4>
                                                        <div class=format!(
                                                            "inline-block px-2 py-0.5 rounded-full text-xs font-medium mb-1.5 bg-gradient-to-r text-white {}",
                                                            achievement.accent.gradient(),
                                                        )>{achievement.result}</div>
                                                        <p class="text-xs leading-relaxed text-slate-500 dark:text-slate-300">
                                                            {achievement.description}
                                                        </p>
                                                    </div>
                                                </div>
                                            </div>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        </div>
                    </div>

                    <div
                        class=move || {
                            format!("transition-all duration-1000 ease-out {}", fade_up(is_visible.get()))
                        }
                        style="transition-delay: 300ms"
                    >
                        <div class="certification-card p-6">
                            <h3 class="text-xl font-semibold mb-6 flex items-center gap-3">
                                <span class="text-[#2EC4B6]">"📜"</span>
                                "Professional Certifications"
                            </h3>
                            <div class="space-y-4">
                                {CERTIFICATIONS
                                    .iter()
                                    .enumerate()
                                    .map(|(index, certification)| {
                                        view! {
                                            <div
                                                class=move || {
                                                    format!(
                                                        "group p-4 rounded-xl border border-slate-500/50 hover:border-[#2EC4B6]/50 transition-all duration-300 hover:bg-[#2EC4B6]/5 hover:-translate-y-1 {}",
                                                        slide_in(),
                                                    )
                                                }
                                                style=format!("transition-delay: {}ms", index * 200 + 400)
                                            >
                                                <div class="flex items-start gap-4">
                                                    <div
                                                        class="p-2 rounded-lg bg-slate-700/40"
                                                        style=format!("color: {}", certification.accent.hex())
                                                    >
                                                        "✔"
                                                    </div>
                                                    <div class="flex-1">
                                                        <h4 class="text-base font-semibold mb-1 group-hover:text-[#2EC4B6] transition-colors duration-300">
                                                            {certification.title}
                                                        </h4>
                                                        <p class="text-[#2EC4B6] font-medium text-sm mb-2">
                                                            {certification.issuer}
                                                        </p>
                                                        <p class="text-sm leading-relaxed text-slate-500 dark:text-slate-300">
                                                            {certification.description}
                                                        </p>
                                                    </div>
                                                </div>
                                            </div>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}
