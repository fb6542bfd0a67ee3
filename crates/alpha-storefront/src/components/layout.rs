//! Page shell: document metadata plus the styled content container.

use leptos::prelude::*;
use leptos_meta::{Link, Meta, Title};
use leptos_router::hooks::use_location;

use alpha_core::{PageMeta, SiteConfig, StoreSchema};

use crate::components::{Footer, Header};

/// Wraps page content with head metadata and the storefront chrome.
///
/// Pages may override the title, description, and sharing image; absent
/// overrides fall back to the site defaults. The resolved title feeds
/// the head title, `og:title`, and `twitter:title` alike, and the
/// structured-data block describing the store is embedded alongside.
#[component]
pub fn PageShell(
    #[prop(optional, into)] title: Option<String>,
    #[prop(optional, into)] description: Option<String>,
    #[prop(optional, into)] og_image: Option<String>,
    children: Children,
) -> impl IntoView {
    let config = use_context::<SiteConfig>().unwrap_or_default();
    let path = use_location().pathname.get_untracked();

    let meta = PageMeta {
        title,
        description,
        og_image,
    }
    .resolve(&config, &path);

    let json_ld = match StoreSchema::new(&config, &meta).to_json() {
        Ok(json) => Some(json),
        Err(e) => {
            leptos::logging::error!("structured data unavailable: {e}");
            None
        }
    };

    view! {
        <Title text=meta.title.clone() />
        <Meta name="description" content=meta.description.clone() />
        <Link rel="canonical" href=meta.canonical_url.clone() />

        <Meta property="og:type" content="website" />
        <Meta property="og:url" content=meta.canonical_url.clone() />
        <Meta property="og:title" content=meta.title.clone() />
        <Meta property="og:description" content=meta.description.clone() />
        <Meta property="og:image" content=meta.og_image.clone() />
        <Meta property="og:locale" content=config.locale.clone() />

        <Meta name="twitter:card" content="summary_large_image" />
        <Meta name="twitter:title" content=meta.title />
        <Meta name="twitter:description" content=meta.description />
        <Meta name="twitter:image" content=meta.og_image />

        {json_ld.map(|json| view! { <script type="application/ld+json" inner_html=json></script> })}

        <div class="page">
            <Header />
            <main class="page__main">
                <div class="glass-panel">{children()}</div>
            </main>
            <Footer />
        </div>
    }
}
