//! Header interaction state.
//!
//! The header's transient UI state as a plain state machine: the mobile
//! menu, the scroll position relative to the compact-style threshold, and
//! the active navigation entry. Every transition is a total function of
//! the current state and the triggering event; the Leptos component wraps
//! this in a signal and reacts to the returned [`MenuState`] by acquiring
//! or releasing the page scroll lock.

/// Scroll offset in pixels at which the header switches to its compact
/// style.
pub const SCROLL_THRESHOLD_PX: f64 = 20.0;

/// Mobile flyout menu state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

/// Page scroll position relative to [`SCROLL_THRESHOLD_PX`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScrollState {
    #[default]
    Top,
    Scrolled,
}

impl ScrollState {
    /// Classify a vertical scroll offset.
    pub fn from_offset(offset: f64) -> Self {
        if offset >= SCROLL_THRESHOLD_PX {
            Self::Scrolled
        } else {
            Self::Top
        }
    }
}

/// Transient UI state owned by one mounted header.
///
/// Discarded on unmount; a fresh mount starts over from the default.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeaderState {
    pub menu: MenuState,
    pub scroll: ScrollState,
    pub active: &'static str,
}

impl Default for HeaderState {
    fn default() -> Self {
        Self {
            menu: MenuState::Closed,
            scroll: ScrollState::Top,
            active: "home",
        }
    }
}

impl HeaderState {
    /// Toggle the mobile menu, returning the resulting menu state.
    pub fn toggle_menu(&mut self) -> MenuState {
        self.menu = match self.menu {
            MenuState::Closed => MenuState::Open,
            MenuState::Open => MenuState::Closed,
        };
        self.menu
    }

    /// Record a new vertical scroll offset.
    pub fn observe_scroll(&mut self, offset: f64) {
        self.scroll = ScrollState::from_offset(offset);
    }

    /// Activate a navigation entry, returning the resulting menu state.
    ///
    /// Activating an entry from the open flyout also closes it; from the
    /// desktop bar the menu is already closed and stays closed.
    pub fn select(&mut self, id: &'static str) -> MenuState {
        self.active = id;
        self.menu = MenuState::Closed;
        self.menu
    }

    /// Whether page scrolling must currently be suppressed.
    pub fn requires_scroll_lock(&self) -> bool {
        self.menu == MenuState::Open
    }
}
