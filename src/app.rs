mod about;
mod achievements;
mod canvas;
mod contact;
mod experience;
mod footer;
mod home;
mod navbar;
mod projects;
mod reveal;
mod skills;
mod theme;

use leptos::{either::Either, prelude::*};
use leptos_meta::*;
use leptos_router::{components::*, path};

use crate::portfolio::{ProjectRecord, PROFILE};
use crate::showcase::Showcase;

use about::About;
use achievements::Achievements;
use canvas::{ButterflyBackground, CursorStars, StarfieldBackground};
use contact::Contact;
use experience::Experience;
use footer::Footer;
use home::Home;
use navbar::Navbar;
use projects::{ProjectDetail, Projects};
use skills::Skills;
pub use theme::{provide_theme, use_theme, ThemeContext};

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <meta
                    name="description"
                    content="Portfolio of Mahaveer K, Flutter and full stack developer."
                />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <link
                    rel="stylesheet"
                    href="https://cdn.jsdelivr.net/gh/devicons/devicon@latest/devicon.min.css"
                />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body>
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();
    let theme = provide_theme();

    view! {
        <Html attr:class=move || theme.get().root_class() />
        <Body attr:class=move || {
            format!("font-sans antialiased {}", theme.get().body_class())
        } />
        <Title formatter=|title| format!("{} - {title}", PROFILE.name) />

        <Router>
            <Routes fallback=|| view! { <NotFound /> }>
                <Route path=path!("/") view=PortfolioPage />
            </Routes>
        </Router>
    }
}

/// The whole single-page site. Owns the selected project and swaps between
/// the section list and a project's detail page.
#[component]
fn PortfolioPage() -> impl IntoView {
    let showcase = RwSignal::new(Showcase::default());
    let on_select = Callback::new(move |project: &'static ProjectRecord| {
        showcase.update(|s| s.select(project));
    });
    let on_back = Callback::new(move |_: ()| showcase.update(Showcase::back));

    view! {
        <Title text="Portfolio" />
        <div class="relative overflow-hidden min-h-screen">
            <StarfieldBackground />
            <CursorStars />
            {move || match showcase.with(Showcase::selected) {
                Some(project) => Either::Left(view! { <ProjectDetail project on_back /> }),
                None => {
                    Either::Right(
                        view! {
                            <ButterflyBackground />
                            <Navbar />
                            <main class="relative z-10">
                                <Home />
                                <About />
                                <Experience />
                                <Projects on_select />
                                <Skills />
                                <Achievements />
                                <Contact />
                            </main>
                            <Footer />
                        },
                    )
                }
            }}
        </div>
    }
}

/// Heading shared by every section, with the accent underline.
#[component]
fn SectionTitle(#[prop(into)] title: String) -> impl IntoView {
    let theme = use_theme();
    view! {
        <h2 class=move || {
            format!(
                "text-3xl md:text-4xl font-bold text-center mb-16 relative after:content-[''] after:absolute after:-bottom-4 after:left-1/2 after:-translate-x-1/2 after:w-24 after:h-1 after:rounded-full after:bg-gradient-to-r {}",
                if theme.get().is_dark() {
                    "text-white after:from-[#6C63FF] after:to-[#2EC4B6]"
                } else {
                    "text-slate-800 after:from-[#3b82f6] after:to-[#2EC4B6]"
                },
            )
        }>{title}</h2>
    }
}

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <Title text="Not Found" />
        <div class="min-h-screen flex flex-col items-center justify-center gap-6">
            <h1 class="text-4xl font-bold gradient-text">"404"</h1>
            <p class="text-slate-400">"Nothing lives at this address."</p>
            <a href="/" class="px-6 py-3 rounded-full bg-[#6C63FF] text-white font-semibold">
                "Back home"
            </a>
        </div>
    }
}
