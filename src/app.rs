mod about;
mod contact;
mod footer;
mod hero;
mod loading;
pub mod motion;
mod navigation;
mod projects;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use crate::content::{Icon, OWNER, ROLE, TAGLINE};
use about::AboutSection;
use contact::ContactSection;
use footer::Footer;
use hero::HeroSection;
use loading::LoadingScreen;
use motion::provide_motion;
use navigation::Navigation;
use projects::ProjectsSection;

const DEVICON_CSS: &str = "https://cdn.jsdelivr.net/gh/devicons/devicon@latest/devicon.min.css";

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
                <meta name="description" content=TAGLINE />
                <link rel="shortcut icon" type="image/ico" href="/favicon.ico" />
                <link rel="stylesheet" href=DEVICON_CSS />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body class="bg-background text-foreground antialiased">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();
    provide_motion();

    view! {
        <Title formatter=|title| format!("{OWNER} - {title}") />

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=path!("/") view=PortfolioPage />
            </Routes>
        </Router>
    }
}

#[component]
fn PortfolioPage() -> impl IntoView {
    let (loaded, set_loaded) = signal(false);

    view! {
        <Title text=ROLE />
        <Show
            when=move || loaded.get()
            fallback=move || view! { <LoadingScreen on_complete=move |_: ()| set_loaded.set(true) /> }
        >
            <div class="min-h-screen overflow-x-hidden">
                <Navigation />
                <main>
                    <HeroSection />
                    <AboutSection />
                    <ProjectsSection />
                    <ContactSection />
                </main>
                <Footer />
            </div>
        </Show>
    }
}

#[component]
pub fn Glyph(icon: Icon, #[prop(optional)] class: &'static str) -> impl IntoView {
    view! { <i class=format!("{} {class}", icon.class()) aria-hidden="true"></i> }
}
