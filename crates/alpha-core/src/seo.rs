//! Page metadata resolution.
//!
//! Pages supply optional overrides; the shell resolves them against the
//! site defaults so that the head title, Open Graph tags, and Twitter
//! tags all carry the same values.

use crate::config::SiteConfig;

/// Optional per-page metadata overrides.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PageMeta {
    pub title: Option<String>,
    pub description: Option<String>,
    pub og_image: Option<String>,
}

impl PageMeta {
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_og_image(mut self, og_image: impl Into<String>) -> Self {
        self.og_image = Some(og_image.into());
        self
    }

    /// Resolve overrides against the site defaults for the given route
    /// path.
    pub fn resolve(&self, config: &SiteConfig, path: &str) -> ResolvedMeta {
        ResolvedMeta {
            title: self
                .title
                .clone()
                .unwrap_or_else(|| config.default_title.clone()),
            description: self
                .description
                .clone()
                .unwrap_or_else(|| config.default_description.clone()),
            og_image: self
                .og_image
                .clone()
                .unwrap_or_else(|| config.default_og_image.clone()),
            canonical_url: config.canonical_url(path),
        }
    }
}

/// Fully resolved head metadata for one page.
///
/// The single `title` here is what every emitted tag uses: head title,
/// `og:title`, and `twitter:title` are equal by construction.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedMeta {
    pub title: String,
    pub description: String,
    pub og_image: String,
    pub canonical_url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_defaults() {
        let config = SiteConfig::default();
        let meta = PageMeta::default().resolve(&config, "/");

        assert_eq!(meta.title, config.default_title);
        assert_eq!(meta.description, config.default_description);
        assert_eq!(meta.og_image, config.default_og_image);
        assert_eq!(meta.canonical_url, "https://www.alpha-clothing.co.il/");
    }

    #[test]
    fn test_resolve_overrides() {
        let config = SiteConfig::default();
        let meta = PageMeta::default()
            .with_title("מבצעים | חנות בגדים אלפא")
            .with_description("כל המבצעים")
            .with_og_image("/images/sale.jpg")
            .resolve(&config, "/sale");

        assert_eq!(meta.title, "מבצעים | חנות בגדים אלפא");
        assert_eq!(meta.description, "כל המבצעים");
        assert_eq!(meta.og_image, "/images/sale.jpg");
        assert_eq!(meta.canonical_url, "https://www.alpha-clothing.co.il/sale");
    }

    #[test]
    fn test_resolve_partial_override() {
        let config = SiteConfig::default();
        let meta = PageMeta::default()
            .with_title("גברים")
            .resolve(&config, "/men");

        assert_eq!(meta.title, "גברים");
        // Unset fields still fall back to the site defaults
        assert_eq!(meta.description, config.default_description);
        assert_eq!(meta.og_image, config.default_og_image);
    }
}
