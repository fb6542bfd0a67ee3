//! Fixed style tables.
//!
//! Each visual state maps to one fixed class list. The components never
//! concatenate class fragments at runtime; they pick a row from these
//! tables, and `style/main.css` defines what the classes look like.

use crate::state::{MenuState, ScrollState};

/// Visual state of the sticky header bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderStyle {
    Top,
    Scrolled,
}

impl HeaderStyle {
    pub fn from_scroll(scroll: ScrollState) -> Self {
        match scroll {
            ScrollState::Top => Self::Top,
            ScrollState::Scrolled => Self::Scrolled,
        }
    }

    pub const fn classes(self) -> &'static str {
        match self {
            Self::Top => "header",
            Self::Scrolled => "header header--scrolled",
        }
    }
}

/// Visual state of one navigation link.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavLinkStyle {
    Active,
    Inactive,
}

impl NavLinkStyle {
    /// Style for the entry `id` given the currently active entry.
    pub fn for_item(active: &str, id: &str) -> Self {
        if active == id {
            Self::Active
        } else {
            Self::Inactive
        }
    }

    /// Desktop bar link classes.
    pub const fn classes(self) -> &'static str {
        match self {
            Self::Active => "nav-link nav-link--active",
            Self::Inactive => "nav-link",
        }
    }

    /// Flyout menu link classes.
    pub const fn menu_classes(self) -> &'static str {
        match self {
            Self::Active => "mobile-menu__link mobile-menu__link--active",
            Self::Inactive => "mobile-menu__link",
        }
    }
}

/// Visual state of the menu toggle button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuButtonStyle {
    Idle,
    Pressed,
}

impl MenuButtonStyle {
    pub fn from_menu(menu: MenuState) -> Self {
        match menu {
            MenuState::Closed => Self::Idle,
            MenuState::Open => Self::Pressed,
        }
    }

    pub const fn classes(self) -> &'static str {
        match self {
            Self::Idle => "icon-button icon-button--menu",
            Self::Pressed => "icon-button icon-button--menu icon-button--pressed",
        }
    }
}

/// Visual state of the flyout panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuPanelStyle {
    Closed,
    Open,
}

impl MenuPanelStyle {
    pub fn from_menu(menu: MenuState) -> Self {
        match menu {
            MenuState::Closed => Self::Closed,
            MenuState::Open => Self::Open,
        }
    }

    pub const fn classes(self) -> &'static str {
        match self {
            Self::Closed => "mobile-menu",
            Self::Open => "mobile-menu mobile-menu--open",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_styles_share_block_class() {
        assert_eq!(HeaderStyle::Top.classes(), "header");
        assert!(HeaderStyle::Scrolled.classes().starts_with("header "));
        assert_ne!(HeaderStyle::Top.classes(), HeaderStyle::Scrolled.classes());
    }

    #[test]
    fn test_header_style_follows_scroll() {
        assert_eq!(
            HeaderStyle::from_scroll(ScrollState::Top),
            HeaderStyle::Top
        );
        assert_eq!(
            HeaderStyle::from_scroll(ScrollState::Scrolled),
            HeaderStyle::Scrolled
        );
    }

    #[test]
    fn test_nav_link_style_for_item() {
        assert_eq!(NavLinkStyle::for_item("men", "men"), NavLinkStyle::Active);
        assert_eq!(
            NavLinkStyle::for_item("men", "sale"),
            NavLinkStyle::Inactive
        );
    }

    #[test]
    fn test_nav_link_tables_are_distinct() {
        assert_ne!(
            NavLinkStyle::Active.classes(),
            NavLinkStyle::Inactive.classes()
        );
        assert_ne!(
            NavLinkStyle::Active.menu_classes(),
            NavLinkStyle::Inactive.menu_classes()
        );
        assert!(NavLinkStyle::Inactive.menu_classes().starts_with("mobile-menu__link"));
    }

    #[test]
    fn test_menu_button_and_panel_follow_menu_state() {
        assert_eq!(
            MenuButtonStyle::from_menu(MenuState::Open),
            MenuButtonStyle::Pressed
        );
        assert_eq!(
            MenuPanelStyle::from_menu(MenuState::Open).classes(),
            "mobile-menu mobile-menu--open"
        );
        assert_eq!(
            MenuPanelStyle::from_menu(MenuState::Closed).classes(),
            "mobile-menu"
        );
    }
}
