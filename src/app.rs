mod contact;
mod footer;
mod homepage;
mod icons;
mod navigation;
mod projects;
mod skills;
mod theme;
mod toaster;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use footer::Footer;
use homepage::HomePage;
use navigation::Navigation;
use theme::provide_theme;
use toaster::{provide_toasts, Toaster};

use crate::content::PROFILE;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="fr">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="dark light" />
                <link id="favicon" rel="icon" type="image/svg+xml" href="/favicon-light.svg" />
                <link
                    rel="stylesheet"
                    href="https://unpkg.com/lucide-static@0.460.0/font/lucide.css"
                />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body class="antialiased">
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
    provide_toasts();

    view! {
        <Title formatter=|title| format!("{} - {title}", PROFILE.name) />
        <Meta name="description" content=PROFILE.tagline />

        <Router>
            <div class=move || theme.get().root_class()>
                <div class="min-h-screen transition-colors duration-300 bg-gradient-to-br from-gray-50 via-white to-gray-50 text-gray-900 dark:from-[#0a0e27] dark:via-[#0f1419] dark:to-[#0a0e27] dark:text-gray-100">
                    <Navigation />
                    <main>
                        <Routes fallback=|| "Page introuvable.".into_view()>
                            <Route path=path!("/") view=HomePage />
                        </Routes>
                    </main>
                    <Footer />
                    <Toaster />
                </div>
            </div>
        </Router>
    }
}
