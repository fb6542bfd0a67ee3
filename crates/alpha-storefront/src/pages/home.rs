//! Landing page.

use leptos::prelude::*;

use crate::components::PageShell;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <PageShell>
            <section class="hero">
                <h2 class="hero__title">"אופנה עכשווית בסגנון ישראלי"</h2>
                <p class="hero__lead">
                    "מגוון רחב של פריטי אופנה איכותיים לגברים, לנשים ולילדים."
                </p>
                <a href="/new" class="btn btn--primary">"לקולקציה החדשה"</a>
            </section>
        </PageShell>
    }
}
