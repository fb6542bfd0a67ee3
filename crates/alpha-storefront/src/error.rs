//! Error types for the storefront app crate.

use thiserror::Error;

/// DOM access failures from the browser-facing hooks.
///
/// These only occur outside a browser (or in a document with no body);
/// callers degrade to inert behavior and log instead of panicking.
#[derive(Error, Debug)]
pub enum DomError {
    #[error("no window object available")]
    NoWindow,

    #[error("window has no document")]
    NoDocument,

    #[error("document has no body")]
    NoBody,

    #[error("failed to set {0} on the body style")]
    Style(&'static str),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages_name_the_failure() {
        assert_eq!(DomError::NoWindow.to_string(), "no window object available");
        assert_eq!(
            DomError::Style("overflow").to_string(),
            "failed to set overflow on the body style"
        );
    }
}
