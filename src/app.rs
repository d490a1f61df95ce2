mod contact;
mod dom;
mod hero;
mod nav;
mod projects;
mod reveal;
mod scroll;
mod sdlc;
mod skills;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use crate::content::OWNER_NAME;
use contact::ContactSection;
use hero::HeroSection;
use nav::{NavigationBar, Navigator};
use projects::ProjectsSection;
use scroll::use_scroll_spy;
use sdlc::SdlcSection;
use skills::SkillsSection;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="dark" />
                <link rel="shortcut icon" type="image/ico" href="/favicon.ico" />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body class="scroll-smooth">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    view! {
        <Title formatter=|title| format!("{OWNER_NAME} - {title}") />

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=path!("/") view=Portfolio />
            </Routes>
        </Router>
    }
}

/// The whole site: navigation over the stacked sections.
#[component]
fn Portfolio() -> impl IntoView {
    let nav = Navigator::new();
    provide_context(nav);
    let active = use_scroll_spy();
    Effect::new(move |_| nav.follow_location_hash());

    view! {
        <Title text="Portfolio" />
        <Meta
            name="description"
            content="Software Engineer | Full-Stack | Problem Solver. Projects, skills and engineering practice."
        />
        <div class="min-h-screen bg-background">
            <NavigationBar active />
            <HeroSection />
            <SkillsSection />
            <ProjectsSection />
            <SdlcSection />
            <ContactSection />
        </div>
    }
}
