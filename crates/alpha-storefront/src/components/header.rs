//! Sticky site header with the mobile flyout menu.
//!
//! The interaction state lives in [`HeaderState`]; this component wraps
//! it in a signal, feeds it scroll offsets, and reconciles the page
//! scroll lock against the menu state. Class names come from the fixed
//! style tables, never from runtime concatenation.

use leptos::prelude::*;

use alpha_core::{
    HeaderState, HeaderStyle, MenuButtonStyle, MenuPanelStyle, MenuState, NavItem, NavLinkStyle,
    NAV_ITEMS,
};

use crate::components::icons::{CartIcon, CloseIcon, MenuIcon, SearchIcon, UserIcon};
use crate::dom::{use_scroll_offset, ScrollLock};

/// Sticky navigation header.
#[component]
pub fn Header() -> impl IntoView {
    let (state, set_state) = signal(HeaderState::default());

    // Track the window scroll position into the state machine.
    let offset = use_scroll_offset();
    Effect::new(move |_| {
        let y = offset.get();
        set_state.update(|s| s.observe_scroll(y));
    });

    // The guard is held exactly while the menu is open; dropping it on
    // close or unmount restores page scrolling.
    let lock = StoredValue::new_local(None::<ScrollLock>);
    Effect::new(move |_| {
        if state.get().requires_scroll_lock() {
            if lock.with_value(|l| l.is_none()) {
                match ScrollLock::acquire() {
                    Ok(guard) => lock.set_value(Some(guard)),
                    Err(e) => leptos::logging::warn!("page scroll lock unavailable: {e}"),
                }
            }
        } else {
            lock.set_value(None);
        }
    });

    let header_classes = move || HeaderStyle::from_scroll(state.get().scroll).classes();
    let toggle_classes = move || MenuButtonStyle::from_menu(state.get().menu).classes();
    let menu_open = move || state.get().menu == MenuState::Open;

    view! {
        <header class=header_classes>
            <div class="header__inner">
                <a href="/" class="header__logo">
                    <h1 class="header__brand">"חנות בגדים אלפא"</h1>
                </a>

                <nav class="header__nav" aria-label="ניווט ראשי">
                    {NAV_ITEMS
                        .iter()
                        .map(|item| view! { <NavLink item state set_state /> })
                        .collect::<Vec<_>>()}
                </nav>

                <div class="header__actions">
                    <button class="icon-button" aria-label="חיפוש">
                        <SearchIcon />
                    </button>

                    <a href="/cart" class="icon-button icon-button--cart" aria-label="עגלת קניות">
                        <CartIcon />
                        <span class="icon-button__badge">"3"</span>
                    </a>

                    <a href="/account" class="icon-button" aria-label="החשבון שלי">
                        <UserIcon />
                    </a>

                    <button
                        class=toggle_classes
                        aria-expanded=move || menu_open().to_string()
                        aria-label=move || if menu_open() { "סגור תפריט" } else { "פתח תפריט" }
                        on:click=move |_| set_state.update(|s| { s.toggle_menu(); })
                    >
                        {move || {
                            if menu_open() {
                                view! { <CloseIcon /> }.into_any()
                            } else {
                                view! { <MenuIcon /> }.into_any()
                            }
                        }}
                    </button>
                </div>
            </div>

            <MobileMenu state set_state />
        </header>
    }
}

/// One desktop navigation link.
#[component]
fn NavLink(
    item: &'static NavItem,
    state: ReadSignal<HeaderState>,
    set_state: WriteSignal<HeaderState>,
) -> impl IntoView {
    view! {
        <a
            href=item.href
            class=move || NavLinkStyle::for_item(state.get().active, item.id).classes()
            aria-current=move || (state.get().active == item.id).then_some("page")
            on:click=move |_| set_state.update(|s| { s.select(item.id); })
        >
            {item.label}
        </a>
    }
}

/// Full-screen flyout menu for small viewports.
///
/// Stays mounted; the open modifier drives the slide transition and the
/// per-entry delays produce the cascade.
#[component]
fn MobileMenu(
    state: ReadSignal<HeaderState>,
    set_state: WriteSignal<HeaderState>,
) -> impl IntoView {
    let panel_classes = move || MenuPanelStyle::from_menu(state.get().menu).classes();
    let hidden = move || (state.get().menu == MenuState::Closed).to_string();

    view! {
        <div class=panel_classes aria-hidden=hidden>
            <nav class="mobile-menu__nav" aria-label="תפריט נייד">
                {NAV_ITEMS
                    .iter()
                    .enumerate()
                    .map(|(index, item)| {
                        let delay = format!("transition-delay: {}ms", index * 100);
                        view! {
                            <a
                                href=item.href
                                class=move || {
                                    NavLinkStyle::for_item(state.get().active, item.id)
                                        .menu_classes()
                                }
                                style=delay
                                aria-current=move || {
                                    (state.get().active == item.id).then_some("page")
                                }
                                on:click=move |_| set_state.update(|s| { s.select(item.id); })
                            >
                                {item.label}
                            </a>
                        }
                    })
                    .collect::<Vec<_>>()}
            </nav>
        </div>
    }
}
