use leptos::prelude::*;

use crate::portfolio::{EducationStatus, EDUCATION, PROFILE};

use super::{
    reveal::{fade_up, use_reveal, Reveal},
    SectionTitle,
};

#[component]
pub fn About() -> impl IntoView {
    let Reveal {
        node_ref,
        is_visible,
    } = use_reveal();

    let personal_info = [
        ("☎", "Phone", PROFILE.phone, Some(PROFILE.phone_href.to_string())),
        ("✉", "Email", PROFILE.email, Some(format!("mailto:{}", PROFILE.email))),
        ("⌖", "Location", PROFILE.location, None),
    ];

    view! {
        <section id="about" node_ref=node_ref class="section-padding relative">
            <div class="container mx-auto px-4 sm:px-6 lg:px-8">
                <SectionTitle title="About Me" />

                <div class=move || {
                    format!(
                        "flex justify-center mb-16 transition-all duration-1000 ease-out {}",
                        fade_up(is_visible.get()),
                    )
                }>
                    <div class="relative group">
                        <div class="absolute inset-0 rounded-full bg-gradient-to-r from-[#6C63FF] via-[#2EC4B6] to-[#FFD700] p-1 animate-spin-slow">
                            <div class="w-full h-full rounded-full bg-slate-800"></div>
                        </div>
                        <div class="relative w-48 h-48 md:w-56 md:h-56 m-1">
                            <div class="w-full h-full rounded-full overflow-hidden shadow-2xl group-hover:scale-105 transition-all duration-500">
                                <img
                                    src=PROFILE.image
                                    alt=format!("{} - Professional Profile", PROFILE.name)
                                    class="w-full h-full object-cover"
                                />
                            </div>
                            <div class="absolute bottom-2 right-2 flex items-center gap-1">
                                <div class="w-3 h-3 bg-green-500 rounded-full animate-pulse shadow-lg shadow-green-500/50"></div>
                                <div class="hidden group-hover:block text-xs text-white bg-slate-800/80 px-2 py-1 rounded-md">
                                    {PROFILE.availability}
                                </div>
                            </div>
                        </div>
                    </div>
                </div>

                <div class="grid grid-cols-1 lg:grid-cols-2 gap-12 lg:gap-16">
                    <div class=move || {
                        format!(
                            "transition-all duration-1000 delay-300 ease-out {}",
                            fade_up(is_visible.get()),
                        )
                    }>
                        <div class="professional-card p-8">
                            <h3 class="text-2xl font-semibold mb-6">"Professional Profile"</h3>
                            <div class="space-y-6 mb-8 text-lg leading-relaxed text-slate-600 dark:text-slate-300">
                                <p>
                                    "I'm a passionate "
                                    <strong>{PROFILE.headline}</strong>
                                    " with a focus on creating impactful digital solutions. Currently pursuing my B.Tech in Information Technology, I specialize in mobile app development, web applications, and modern software engineering practices."
                                </p>
                                <p>
                                    "With hands-on experience in "
                                    <strong>"MERN stack development"</strong>
                                    " and "
                                    <strong>"Flutter mobile applications"</strong>
                                    ", I enjoy solving complex problems and building user-centric solutions."
                                </p>
                            </div>
                            <div class="space-y-4">
                                {personal_info
                                    .into_iter()
                                    .map(|(glyph, label, value, href)| {
                                        view! {
                                            <div class="flex items-center">
                                                <div class="p-2 mr-4 rounded-lg bg-[#6C63FF]/20 border border-[#6C63FF]/30 text-[#6C63FF]">
                                                    {glyph}
                                                </div>
                                                <div>
                                                    <p class="text-sm text-slate-400 mb-1">{label}</p>
                                                    {match href {
                                                        Some(href) => {
                                                            view! {
                                                                <a href=href class="font-medium hover:text-[#6C63FF] transition-colors">
                                                                    {value}
                                                                </a>
                                                            }
                                                                .into_any()
                                                        }
                                                        None => view! { <span class="font-medium">{value}</span> }.into_any(),
                                                    }}
                                                </div>
                                            </div>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        </div>
                    </div>

                    <div class=move || {
                        format!(
                            "transition-all duration-1000 delay-[600ms] ease-out {}",
                            fade_up(is_visible.get()),
                        )
                    }>
                        <div class="professional-card p-8">
                            <h3 class="text-2xl font-semibold mb-6">"Education"</h3>
                            <div class="space-y-8">
                                {EDUCATION
                                    .iter()
                                    .map(|item| {
                                        let badge = match item.status {
                                            EducationStatus::Current => {
                                                "bg-green-500/20 text-green-400 border-green-500/30"
                                            }
                                            EducationStatus::Completed => {
                                                "bg-blue-500/20 text-blue-400 border-blue-500/30"
                                            }
                                        };
                                        view! {
                                            <div class="relative pl-8 group">
                                                <div class="absolute left-0 top-0 bottom-0 w-px bg-gradient-to-b from-[#6C63FF] to-transparent opacity-30"></div>
                                                <div class="absolute left-0 top-0 w-3 h-3 rounded-full bg-[#6C63FF] -translate-x-1/2 shadow-lg shadow-[#6C63FF]/50"></div>
                                                <div class="space-y-2">
                                                    <div class="flex items-center justify-between flex-wrap gap-2">
                                                        <h4 class="text-xl font-semibold group-hover:text-[#6C63FF] transition-colors">
                                                            {item.degree}
                                                        </h4>
                                                        <span class=format!(
                                                            "px-3 py-1 rounded-full text-xs font-medium border {badge}",
                                                        )>{item.status.label()}</span>
                                                    </div>
                                                    <p class="text-sm text-slate-400">{item.duration}</p>
                                                    <p class="font-medium text-slate-600 dark:text-slate-300">
                                                        {item.institution}
                                                    </p>
                                                    <p class="text-sm text-slate-400">{item.details}</p>
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
