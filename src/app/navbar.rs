use leptos::prelude::*;
use leptos_use::use_window_scroll;

use crate::portfolio::{NAV_LINKS, PROFILE};

use super::use_theme;

/// Scroll offset after which the bar gets its solid background.
const OPAQUE_AFTER: f64 = 50.0;

#[component]
pub fn Navbar() -> impl IntoView {
    let theme = use_theme();
    let (_, scroll_y) = use_window_scroll();
    let scrolled = Memo::new(move |_| scroll_y.get() > OPAQUE_AFTER);
    let (menu_open, set_menu_open) = signal(false);

    let bar_class = move || {
        let surface = match (scrolled.get(), theme.get().is_dark()) {
            (false, _) => "bg-transparent py-5",
            (true, true) => "bg-slate-900/90 backdrop-blur-md shadow-lg py-3",
            (true, false) => "bg-white/90 backdrop-blur-md shadow-lg py-3",
        };
        format!("fixed top-0 inset-x-0 z-40 transition-all duration-300 {surface}")
    };

    let links = move || {
        NAV_LINKS
            .iter()
            .map(|link| {
                view! {
                    <a
                        href=link.href
                        class="font-medium transition-colors hover:text-[#6C63FF]"
                        on:click=move |_| set_menu_open.set(false)
                    >
                        {link.title}
                    </a>
                }
            })
            .collect_view()
    };

    let toggle = move || {
        view! {
            <button
                class="w-10 h-10 rounded-full flex items-center justify-center border border-slate-500/40 hover:border-[#6C63FF] transition-colors"
                aria-label=move || theme.get().toggle_label()
                on:click=move |_| theme.toggle()
            >
                {move || if theme.get().is_dark() { "☀" } else { "☾" }}
            </button>
        }
    };

    view! {
        <nav class=bar_class>
            <div class="container mx-auto px-6 flex items-center justify-between">
                <a href="#home" class="text-2xl font-bold gradient-text">
                    {PROFILE.name}
                </a>

                <div class="hidden md:flex items-center gap-8">{links} {toggle}</div>

                <div class="md:hidden flex items-center gap-3">
                    {toggle}
                    <button
                        class="text-2xl"
                        aria-label="Toggle menu"
                        aria-expanded=move || menu_open.get().to_string()
                        on:click=move |_| set_menu_open.update(|open| *open = !*open)
                    >
                        {move || if menu_open.get() { "✕" } else { "☰" }}
                    </button>
                </div>
            </div>

            <Show when=move || menu_open.get()>
                <div class=move || {
                    format!(
                        "md:hidden flex flex-col items-center gap-6 py-6 {}",
                        if theme.get().is_dark() { "bg-slate-900/95" } else { "bg-white/95" },
                    )
                }>{links}</div>
            </Show>
        </nav>
    }
}
