//! Page scroll suppression while the flyout menu is open.

use web_sys::HtmlElement;

use crate::error::DomError;

/// Guard that suppresses page scrolling for as long as it is held.
///
/// Acquiring the lock sets `overflow: hidden` on the document body and
/// remembers the previous inline value; dropping the guard restores it,
/// so release is guaranteed whether the menu closes or the header
/// unmounts.
#[derive(Debug)]
pub struct ScrollLock {
    body: HtmlElement,
    previous_overflow: String,
}

impl ScrollLock {
    /// Suppress page scrolling until the returned guard is dropped.
    pub fn acquire() -> Result<Self, DomError> {
        let body = web_sys::window()
            .ok_or(DomError::NoWindow)?
            .document()
            .ok_or(DomError::NoDocument)?
            .body()
            .ok_or(DomError::NoBody)?;

        let style = body.style();
        let previous_overflow = style.get_property_value("overflow").unwrap_or_default();
        style
            .set_property("overflow", "hidden")
            .map_err(|_| DomError::Style("overflow"))?;

        Ok(Self {
            body,
            previous_overflow,
        })
    }
}

impl Drop for ScrollLock {
    fn drop(&mut self) {
        let style = self.body.style();
        let restored = if self.previous_overflow.is_empty() {
            style.remove_property("overflow").map(|_| ())
        } else {
            style.set_property("overflow", &self.previous_overflow)
        };
        if restored.is_err() {
            leptos::logging::warn!("scroll lock release could not restore body overflow");
        }
    }
}
