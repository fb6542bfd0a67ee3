//! Site footer.

use leptos::prelude::*;

use alpha_core::NAV_ITEMS;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <div class="footer__inner">
                <p class="footer__brand">"חנות בגדים אלפא"</p>
                <nav class="footer__nav" aria-label="ניווט תחתון">
                    {NAV_ITEMS
                        .iter()
                        .map(|item| view! { <a href=item.href>{item.label}</a> })
                        .collect::<Vec<_>>()}
                </nav>
                <p class="footer__legal">"© חנות בגדים אלפא. כל הזכויות שמורות."</p>
            </div>
        </footer>
    }
}
