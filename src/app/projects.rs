use std::time::Duration;

use leptos::{ev, prelude::*};

use crate::portfolio::{ProjectRecord, PROJECTS};

use super::{
    reveal::{fade_up, use_reveal, Reveal},
    SectionTitle,
};

const FADE_IN_AFTER: Duration = Duration::from_millis(100);
const FADE_OUT_FOR: Duration = Duration::from_millis(300);

#[component]
pub fn Projects(#[prop(into)] on_select: Callback<&'static ProjectRecord>) -> impl IntoView {
    let Reveal {
        node_ref,
        is_visible,
    } = use_reveal();
    let (hovered, set_hovered) = signal(None::<usize>);

    view! {
        <section id="projects" node_ref=node_ref class="section-padding relative">
            <div class="container mx-auto px-4 sm:px-6 lg:px-8">
                <SectionTitle title="Projects" />
                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-8">
                    {PROJECTS
                        .iter()
                        .enumerate()
                        .map(|(index, project)| {
                            view! {
                                <div
                                    class=move || {
                                        format!(
                                            "transition-all duration-1000 ease-out {}",
                                            fade_up(is_visible.get()),
                                        )
                                    }
                                    style=format!("transition-delay: {}ms", index * 200)
                                    on:mouseenter=move |_| set_hovered.set(Some(index))
                                    on:mouseleave=move |_| set_hovered.set(None)
                                >
                                    <ProjectCard
                                        project
                                        active=Signal::derive(move || hovered.get() == Some(index))
                                        on_select
                                    />
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn ProjectCard(
    project: &'static ProjectRecord,
    active: Signal<bool>,
    on_select: Callback<&'static ProjectRecord>,
) -> impl IntoView {
    view! {
        <div class=move || {
            format!(
                "card-hover rounded-xl overflow-hidden shadow-xl transition-all duration-500 {}",
                if active.get() { "scale-[1.02]" } else { "scale-100" },
            )
        }>
            <div class="relative h-48 overflow-hidden">
                <img
                    src=project.image
                    alt=project.title
                    class="w-full h-full object-cover transition-all duration-700 ease-in-out hover:scale-110"
                />
                <div class="absolute inset-0 bg-gradient-to-t from-black/70 to-transparent"></div>
                <div class="absolute bottom-0 left-0 w-full p-4 text-white">
                    <h3 class="text-xl font-bold">{project.title}</h3>
                </div>
            </div>
            <div class="p-6 bg-gradient-to-br from-gray-50 to-gray-100 dark:from-gray-800 dark:to-gray-900">
                <p class="text-sm mb-4 line-clamp-3">{project.description}</p>
                <TechList technologies=project.technologies small=true />
                <div class="flex justify-between mt-4">
                    <ExternalLink
                        href=project.code_link
                        label=format!("View {} code on GitHub", project.title)
                    >
                        "Code"
                    </ExternalLink>
                    <ExternalLink
                        href=project.live_link
                        label=format!("Visit {} live website", project.title)
                    >
                        "Live Demo"
                    </ExternalLink>
                    <button
                        class="flex items-center text-sm font-medium text-[#6C63FF] hover:underline"
                        aria-label=format!("View {} details", project.title)
                        on:click=move |_| on_select.run(project)
                    >
                        "Details"
                    </button>
                </div>
            </div>
        </div>
    }
}

#[component]
fn ExternalLink(href: &'static str, label: String, children: Children) -> impl IntoView {
    view! {
        <a
            href=href
            target="_blank"
            rel="noopener noreferrer"
            aria-label=label
            class="flex items-center text-sm font-medium text-[#6C63FF] hover:underline"
        >
            {children()}
        </a>
    }
}

#[component]
fn TechList(technologies: &'static [&'static str], #[prop(optional)] small: bool) -> impl IntoView {
    let chip = if small {
        "px-2 py-1 text-xs"
    } else {
        "px-4 py-2 text-sm shadow-md border border-gray-200 dark:border-gray-600 hover:border-[#6C63FF] hover:text-[#6C63FF]"
    };
    view! {
        <div class=if small { "flex flex-wrap gap-2" } else { "flex flex-wrap justify-center gap-3" }>
            {technologies
                .iter()
                .map(|tech| {
                    view! {
                        <span class=format!(
                            "bg-gray-200 dark:bg-gray-700 rounded-full font-medium transition-all duration-300 {chip}",
                        )>{*tech}</span>
                    }
                })
                .collect_view()}
        </div>
    }
}

/// Full page for one project. Fades in shortly after mounting and fades out
/// before handing control back through `on_back`.
#[component]
pub fn ProjectDetail(
    project: &'static ProjectRecord,
    #[prop(into)] on_back: Callback<()>,
) -> impl IntoView {
    let (is_visible, set_visible) = signal(false);

    Effect::new(move |_| {
        window().scroll_to_with_x_and_y(0.0, 0.0);
        set_timeout(
            move || {
                set_visible.try_set(true);
            },
            FADE_IN_AFTER,
        );
    });

    let back = move |_: ev::MouseEvent| {
        set_visible.set(false);
        set_timeout(move || on_back.run(()), FADE_OUT_FOR);
    };

    let slide = move |delay: &str, hidden: &str| {
        format!(
            "transition-all duration-700 {delay} {}",
            if is_visible.get() {
                "translate-x-0 translate-y-0 opacity-100"
            } else {
                hidden
            }
        )
    };

    view! {
        <div class=move || {
            format!(
                "relative z-10 min-h-screen transition-all duration-500 ease-out {}",
                if is_visible.get() { "opacity-100" } else { "opacity-0" },
            )
        }>
            <div class="sticky top-0 z-40 bg-white/80 dark:bg-gray-900/80 backdrop-blur-md border-b border-gray-200 dark:border-gray-700">
                <div class="container mx-auto px-4 sm:px-6 lg:px-8 py-4">
                    <button
                        on:click=back
                        class="flex items-center gap-2 text-[#6C63FF] hover:text-[#5A52D5] transition-colors duration-200 group"
                    >
                        <span class="group-hover:-translate-x-1 transition-transform duration-200">
                            "←"
                        </span>
                        <span class="font-medium">"Back to Projects"</span>
                    </button>
                </div>
            </div>

            <section class="relative py-12 lg:py-20">
                <div class="container mx-auto px-4 sm:px-6 lg:px-8">
                    <div class="grid grid-cols-1 lg:grid-cols-2 gap-8 lg:gap-16 items-center">
                        <div class=move || slide("delay-200", "-translate-x-10 opacity-0")>
                            <h1 class="text-3xl md:text-4xl lg:text-5xl font-bold mb-6 gradient-text">
                                {project.title}
                            </h1>
                            <p class="text-lg md:text-xl mb-8 text-gray-600 dark:text-gray-300 leading-relaxed">
                                {project.description}
                            </p>
                            <div class="flex flex-wrap gap-4 mb-8 text-sm text-gray-600 dark:text-gray-400">
                                {project.duration.map(|d| view! { <span>"📅 " {d}</span> })}
                                {project.team.map(|t| view! { <span>"👥 " {t}</span> })}
                            </div>
                            <div class="flex flex-col sm:flex-row gap-4">
                                <a
                                    href=project.live_link
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    class="inline-flex items-center justify-center gap-2 px-6 py-3 bg-[#6C63FF] text-white rounded-lg hover:bg-[#5A52D5] transition-all duration-300 hover:-translate-y-1 hover:shadow-lg font-medium"
                                >
                                    "View Live Demo"
                                </a>
                                <a
                                    href=project.code_link
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    class="inline-flex items-center justify-center gap-2 px-6 py-3 border-2 border-[#6C63FF] text-[#6C63FF] rounded-lg hover:bg-[#6C63FF] hover:text-white transition-all duration-300 hover:-translate-y-1 hover:shadow-lg font-medium"
                                >
                                    "View Source Code"
                                </a>
                            </div>
                        </div>
                        <div class=move || slide("delay-[400ms]", "translate-x-10 opacity-0")>
                            <div class="relative group">
                                <div class="absolute inset-0 bg-gradient-to-r from-[#6C63FF] to-[#2EC4B6] rounded-2xl rotate-3 group-hover:rotate-6 transition-transform duration-300"></div>
                                <img
                                    src=project.image
                                    alt=project.title
                                    class="relative w-full h-64 md:h-80 lg:h-96 object-cover rounded-2xl shadow-2xl group-hover:-translate-y-2 transition-all duration-300"
                                />
                            </div>
                        </div>
                    </div>
                </div>
            </section>

            <section class="py-12 bg-gray-50 dark:bg-gray-800/50">
                <div class=move || format!("container mx-auto px-4 {}", slide("delay-[600ms]", "translate-y-10 opacity-0"))>
                    <h2 class="text-2xl md:text-3xl font-bold mb-8 text-center">"Technologies Used"</h2>
                    <TechList technologies=project.technologies />
                </div>
            </section>

            <section class="py-16">
                <div class="container mx-auto px-4 sm:px-6 lg:px-8">
                    <div class="max-w-4xl mx-auto">
                        <div class=move || slide("delay-[800ms]", "translate-y-10 opacity-0")>
                            <h2 class="text-2xl md:text-3xl font-bold mb-8">"Project Overview"</h2>
                            {project
                                .paragraphs()
                                .map(|p| {
                                    view! {
                                        <p class="mb-6 text-lg leading-relaxed text-gray-600 dark:text-gray-300">
                                            {p}
                                        </p>
                                    }
                                })
                                .collect_view()}
                        </div>

                        {project
                            .features
                            .map(|features| {
                                view! {
                                    <div class=move || {
                                        format!("mt-16 {}", slide("delay-1000", "translate-y-10 opacity-0"))
                                    }>
                                        <h3 class="text-xl md:text-2xl font-bold mb-6">"Key Features"</h3>
                                        <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                                            {features
                                                .iter()
                                                .map(|feature| {
                                                    view! {
                                                        <div class="flex items-start gap-3 p-4 bg-gray-50 dark:bg-gray-800 rounded-lg">
                                                            <div class="w-2 h-2 rounded-full bg-[#6C63FF] mt-2 flex-shrink-0"></div>
                                                            <span class="text-gray-700 dark:text-gray-300">{*feature}</span>
                                                        </div>
                                                    }
                                                })
                                                .collect_view()}
                                        </div>
                                    </div>
                                }
                            })}

                        {project
                            .challenges
                            .map(|challenges| {
                                view! {
                                    <div class=move || {
                                        format!("mt-16 {}", slide("delay-[1200ms]", "translate-y-10 opacity-0"))
                                    }>
                                        <h3 class="text-xl md:text-2xl font-bold mb-6">"Challenges & Solutions"</h3>
                                        <div class="space-y-4">
                                            {challenges
                                                .iter()
                                                .map(|challenge| {
                                                    view! {
                                                        <div class="p-6 bg-gradient-to-r from-gray-50 to-gray-100 dark:from-gray-800 dark:to-gray-700 rounded-lg border-l-4 border-[#6C63FF]">
                                                            <p class="text-gray-700 dark:text-gray-300">{*challenge}</p>
                                                        </div>
                                                    }
                                                })
                                                .collect_view()}
                                        </div>
                                    </div>
                                }
                            })}
                    </div>
                </div>
            </section>

            <section class="py-16 bg-gradient-to-r from-[#6C63FF] to-[#2EC4B6]">
                <div class="container mx-auto px-4 text-center">
                    <h2 class="text-2xl md:text-3xl font-bold text-white mb-6">
                        "Interested in this project?"
                    </h2>
                    <p class="text-lg text-white/90 mb-8 max-w-2xl mx-auto">
                        "Feel free to explore the live demo or check out the source code."
                    </p>
                    <button
                        on:click=back
                        class="px-6 py-3 bg-white text-[#6C63FF] rounded-lg font-medium hover:-translate-y-1 transition-all duration-300"
                    >
                        "Back to Projects"
                    </button>
                </div>
            </section>
        </div>
    }
}
