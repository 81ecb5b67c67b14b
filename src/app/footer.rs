use chrono::{DateTime, Datelike, Utc};
use leptos::prelude::*;

use crate::portfolio::{NAV_LINKS, PROFILE};

#[component]
pub fn Footer() -> impl IntoView {
    let year = Utc::now().year();
    let built = DateTime::parse_from_rfc3339(env!("BUILD_TIME"))
        .map(|dt| dt.format("%b %-d, %Y").to_string())
        .ok();

    view! {
        <footer class="relative z-10 py-8 border-t border-gray-200 dark:border-gray-700">
            <div class="container mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex flex-col items-center">
                    <a href="#home" class="text-xl font-bold gradient-text mb-4" aria-label="Back to top">
                        {PROFILE.name}
                    </a>
                    <div class="flex gap-6 mb-6">
                        {NAV_LINKS
                            .iter()
                            .filter(|link| link.href != "#home")
                            .map(|link| {
                                view! {
                                    <a
                                        href=link.href
                                        class="text-sm hover:text-[#6C63FF] transition-colors duration-300"
                                    >
                                        {link.title}
                                    </a>
                                }
                            })
                            .collect_view()}
                    </div>
                    <p class="text-sm flex items-center gap-1">
                        {format!("© {year} {}. All rights reserved. Made with", PROFILE.name)}
                        <span class="text-red-500">"♥"</span>
                        "using Rust & Leptos"
                    </p>
                    {built.map(|date| view! { <p class="mt-2 text-xs text-slate-500">"Built " {date}</p> })}
                </div>
            </div>
        </footer>
    }
}
