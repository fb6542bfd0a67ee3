//! Category placeholder pages.
//!
//! The catalog itself lives elsewhere; these pages only give the five
//! category links a landing target with category-specific metadata.

use leptos::prelude::*;

use alpha_core::find_nav_item;

use crate::components::PageShell;

#[component]
pub fn CategoryPage(id: &'static str) -> impl IntoView {
    let label = find_nav_item(id).map(|item| item.label).unwrap_or(id);
    let title = format!("{label} | חנות בגדים אלפא");

    view! {
        <PageShell title=title>
            <section class="category">
                <h2 class="category__title">{label}</h2>
                <p class="category__note">"הקטלוג המלא לקטגוריה זו יעלה בקרוב."</p>
            </section>
        </PageShell>
    }
}
