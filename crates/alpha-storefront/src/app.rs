//! Application root: routes and the SSR document shell.

use leptos::prelude::*;
use leptos_meta::{provide_meta_context, Stylesheet};
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use alpha_core::SiteConfig;

use crate::pages::{CategoryPage, HomePage, NotFound};

// ============================================================================
// Shell (SSR entry point)
// ============================================================================

#[cfg(feature = "ssr")]
pub fn shell(options: leptos::config::LeptosOptions) -> impl IntoView {
    use leptos::hydration::{AutoReload, HydrationScripts};
    use leptos_meta::MetaTags;

    view! {
        <!DOCTYPE html>
        <html lang="he" dir="rtl">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <meta name="theme-color" content="#4ECDC4"/>
                <link rel="icon" href="/favicon.ico"/>
                <link rel="manifest" href="/manifest.json"/>
                <link rel="preconnect" href="https://fonts.googleapis.com"/>
                <link
                    rel="stylesheet"
                    href="https://fonts.googleapis.com/css2?family=Heebo:wght@400;500;700&family=Inter:wght@400;600&display=swap"
                />
                <AutoReload options=options.clone() />
                <HydrationScripts options=options.clone() root=""/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

// ============================================================================
// App Component
// ============================================================================

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_context(SiteConfig::default());

    let fallback = || view! { <NotFound/> }.into_view();

    view! {
        <Stylesheet id="leptos" href="/pkg/alpha_storefront.css"/>

        <Router>
            <Routes fallback>
                <Route path=path!("") view=HomePage/>
                <Route path=path!("/men") view=|| view! { <CategoryPage id="men"/> }/>
                <Route path=path!("/women") view=|| view! { <CategoryPage id="women"/> }/>
                <Route path=path!("/kids") view=|| view! { <CategoryPage id="kids"/> }/>
                <Route path=path!("/sale") view=|| view! { <CategoryPage id="sale"/> }/>
                <Route path=path!("/new") view=|| view! { <CategoryPage id="new"/> }/>
                <Route path=path!("/*any") view=NotFound/>
            </Routes>
        </Router>
    }
}
