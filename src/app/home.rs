use leptos::prelude::*;

use crate::portfolio::PROFILE;

use super::reveal::{fade_up, use_reveal, Reveal};

#[component]
pub fn Home() -> impl IntoView {
    let Reveal {
        node_ref,
        is_visible,
    } = use_reveal();
    // each block fades in a little after the previous one
    let stage = move |delay: &str| {
        format!(
            "transition-all duration-1000 ease-out {delay} {}",
            fade_up(is_visible.get())
        )
    };

    view! {
        <section
            id="home"
            node_ref=node_ref
            class="relative min-h-screen flex items-center justify-center pt-20"
        >
            <div class="container mx-auto px-4 sm:px-6 lg:px-8 z-10 relative">
                <div class="text-center max-w-6xl mx-auto">
                    <h1 class=move || format!("text-5xl md:text-6xl lg:text-8xl font-bold mb-4 {}", stage(""))>
                        <span class="bg-clip-text text-transparent bg-gradient-to-r from-[#6C63FF] via-[#2EC4B6] to-[#FFD700]">
                            {PROFILE.name}
                        </span>
                    </h1>

                    <p class=move || {
                        format!(
                            "text-2xl md:text-3xl lg:text-4xl font-semibold mb-8 text-slate-800 dark:text-white {}",
                            stage("delay-300"),
                        )
                    }>{PROFILE.headline}</p>

                    <p class=move || {
                        format!(
                            "text-lg md:text-xl mb-8 max-w-4xl mx-auto leading-relaxed text-slate-600 dark:text-slate-300 {}",
                            stage("delay-500"),
                        )
                    }>
                        "Passionate about creating innovative mobile applications and web solutions. Specializing in "
                        <span class="text-[#6C63FF] font-semibold">"Flutter development"</span>
                        ", "
                        <span class="text-[#2EC4B6] font-semibold">"MERN stack"</span>
                        ", and modern software engineering practices."
                    </p>

                    <div class=move || format!("flex flex-wrap justify-center gap-3 mb-12 {}", stage("delay-700"))>
                        <SkillChip label="Flutter" glyph="📱" color="#6C63FF" />
                        <SkillChip label="React" glyph="🌐" color="#2EC4B6" />
                        <SkillChip label="JavaScript" glyph="</>" color="#FFD700" />
                    </div>

                    <div class=move || format!("mb-16 {}", stage("delay-[900ms]"))>
                        <div class="flex flex-col sm:flex-row gap-6 justify-center items-center">
                            <a
                                href="#projects"
                                aria-label="View my projects"
                                class="inline-flex items-center gap-3 py-4 px-8 bg-gradient-to-r from-[#6C63FF] to-[#2EC4B6] rounded-full font-semibold text-lg text-white hover:shadow-lg transition-all duration-300"
                            >
                                "View My Work"
                            </a>
                            <a
                                href="#contact"
                                aria-label="Get in touch"
                                class="inline-flex items-center gap-3 py-4 px-8 border-2 border-[#6C63FF] text-[#6C63FF] rounded-full font-semibold text-lg hover:bg-[#6C63FF] hover:text-white transition-all duration-300"
                            >
                                "Get In Touch"
                            </a>
                        </div>
                    </div>

                    <div class=move || format!("flex justify-center gap-6 {}", stage("delay-[1100ms]"))>
                        <SocialLink href=PROFILE.github label="GitHub Profile" icon="devicon-github-original" />
                        <SocialLink href=PROFILE.linkedin label="LinkedIn Profile" icon="devicon-linkedin-plain" />
                        <a
                            href=format!("mailto:{}", PROFILE.email)
                            aria-label="Email Contact"
                            class="p-4 rounded-full border border-slate-500/50 hover:bg-[#FFD700]/20 hover:border-[#FFD700]/50 transition-all duration-300"
                        >
                            "✉"
                        </a>
                    </div>
                </div>
            </div>

            <a
                href="#about"
                aria-label="Scroll to About section"
                class="absolute bottom-8 left-1/2 -translate-x-1/2 text-4xl text-[#6C63FF] hover:text-[#2EC4B6] transition-colors duration-300 animate-bounce"
            >
                "⌄"
            </a>
        </section>
    }
}

#[component]
fn SkillChip(label: &'static str, glyph: &'static str, color: &'static str) -> impl IntoView {
    view! {
        <div
            class="flex items-center gap-2 px-4 py-2 rounded-full border backdrop-blur-sm"
            style=format!("border-color: {color}4d; background-color: {color}22")
        >
            <span style=format!("color: {color}")>{glyph}</span>
            <span class="text-sm font-medium text-slate-800 dark:text-white">{label}</span>
        </div>
    }
}

#[component]
fn SocialLink(href: &'static str, label: &'static str, icon: &'static str) -> impl IntoView {
    view! {
        <a
            href=href
            target="_blank"
            rel="noopener noreferrer"
            aria-label=label
            class="p-4 rounded-full border border-slate-500/50 hover:bg-[#6C63FF]/20 hover:border-[#6C63FF]/50 transition-all duration-300 text-xl"
        >
            <i class=icon></i>
        </a>
    }
}
