//! 404 page.

use leptos::prelude::*;

use crate::components::PageShell;

#[component]
pub fn NotFound() -> impl IntoView {
    #[cfg(all(feature = "ssr", target_arch = "wasm32"))]
    {
        if let Some(resp) = use_context::<leptos_wasi::response::ResponseOptions>() {
            resp.set_status(leptos_wasi::prelude::StatusCode::NOT_FOUND);
        }
    }

    let title = String::from("הדף לא נמצא | חנות בגדים אלפא");

    view! {
        <PageShell title=title>
            <section class="not-found">
                <h2 class="not-found__code">"404"</h2>
                <p class="not-found__note">"הדף שחיפשת לא נמצא."</p>
                <a href="/" class="btn btn--primary">"חזרה לדף הבית"</a>
            </section>
        </PageShell>
    }
}
