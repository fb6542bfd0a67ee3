//! Site configuration for the storefront shell.

/// Physical store location, as published in the structured-data block.
#[derive(Debug, Clone, PartialEq)]
pub struct StoreLocation {
    pub street_address: String,
    pub locality: String,
    pub postal_code: String,
    pub country: String,
    pub latitude: f64,
    pub longitude: f64,
}

/// One weekly opening-hours entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpeningHours {
    /// English day names, as schema.org expects them.
    pub days: &'static [&'static str],
    pub opens: &'static str,
    pub closes: &'static str,
}

/// Configuration for the storefront shell.
///
/// Holds the store identity and the site-wide metadata defaults that the
/// page shell falls back to when a page supplies no overrides.
#[derive(Debug, Clone)]
pub struct SiteConfig {
    /// Store display name.
    pub store_name: String,
    /// Absolute site origin used to build canonical URLs.
    pub base_url: String,
    /// Default page title.
    pub default_title: String,
    /// Default meta description.
    pub default_description: String,
    /// Default social-sharing image path.
    pub default_og_image: String,
    /// Open Graph locale tag.
    pub locale: String,
    pub telephone: String,
    pub location: StoreLocation,
    pub opening_hours: Vec<OpeningHours>,
    pub price_range: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            store_name: "חנות בגדים אלפא".to_string(),
            base_url: "https://www.alpha-clothing.co.il".to_string(),
            default_title: "חנות בגדים אלפא - אופנה עכשווית בסגנון ישראלי".to_string(),
            default_description: "חנות בגדים אלפא - המקום הטוב ביותר לקנות בגדים איכותיים \
                                  בסגנון ישראלי מודרני. מגוון רחב של פריטי אופנה לגברים ונשים."
                .to_string(),
            default_og_image: "/images/og-image.jpg".to_string(),
            locale: "he_IL".to_string(),
            telephone: "+972-3-1234567".to_string(),
            location: StoreLocation {
                street_address: "רחוב אלנבי 123".to_string(),
                locality: "תל אביב".to_string(),
                postal_code: "6123402".to_string(),
                country: "IL".to_string(),
                latitude: 32.0853,
                longitude: 34.7818,
            },
            opening_hours: vec![
                OpeningHours {
                    days: &["Sunday", "Monday", "Tuesday", "Wednesday", "Thursday"],
                    opens: "09:00",
                    closes: "21:00",
                },
                OpeningHours {
                    days: &["Friday"],
                    opens: "09:00",
                    closes: "14:00",
                },
            ],
            price_range: "₪₪-₪₪₪".to_string(),
        }
    }
}

impl SiteConfig {
    /// Create a configuration with the given store name and site origin.
    pub fn new(store_name: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            store_name: store_name.into(),
            base_url: base_url.into(),
            ..Default::default()
        }
    }

    /// Set the default page title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.default_title = title.into();
        self
    }

    /// Set the default meta description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.default_description = description.into();
        self
    }

    /// Set the default social-sharing image.
    pub fn with_og_image(mut self, og_image: impl Into<String>) -> Self {
        self.default_og_image = og_image.into();
        self
    }

    /// Join the site origin and a route path into a canonical URL.
    ///
    /// The root path keeps its trailing slash; any other path is joined
    /// with exactly one separator regardless of how the inputs are
    /// slashed.
    pub fn canonical_url(&self, path: &str) -> String {
        let base = self.base_url.trim_end_matches('/');
        let path = path.trim_start_matches('/');
        if path.is_empty() {
            format!("{base}/")
        } else {
            format!("{base}/{path}")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_identity() {
        let config = SiteConfig::default();

        assert_eq!(config.store_name, "חנות בגדים אלפא");
        assert_eq!(config.base_url, "https://www.alpha-clothing.co.il");
        assert_eq!(config.locale, "he_IL");
        assert_eq!(config.price_range, "₪₪-₪₪₪");
        assert_eq!(config.opening_hours.len(), 2);
    }

    #[test]
    fn test_config_new() {
        let config = SiteConfig::new("Store", "https://example.com");

        assert_eq!(config.store_name, "Store");
        assert_eq!(config.base_url, "https://example.com");
        // Unrelated defaults are preserved
        assert_eq!(config.locale, "he_IL");
    }

    #[test]
    fn test_config_builder_chain() {
        let config = SiteConfig::new("Store", "https://example.com")
            .with_title("Title")
            .with_description("Description")
            .with_og_image("/og.jpg");

        assert_eq!(config.default_title, "Title");
        assert_eq!(config.default_description, "Description");
        assert_eq!(config.default_og_image, "/og.jpg");
    }

    #[test]
    fn test_canonical_url_root() {
        let config = SiteConfig::default();

        assert_eq!(
            config.canonical_url("/"),
            "https://www.alpha-clothing.co.il/"
        );
        assert_eq!(
            config.canonical_url(""),
            "https://www.alpha-clothing.co.il/"
        );
    }

    #[test]
    fn test_canonical_url_joins_single_slash() {
        let config = SiteConfig::new("Store", "https://example.com/");

        assert_eq!(config.canonical_url("/men"), "https://example.com/men");
        assert_eq!(config.canonical_url("men"), "https://example.com/men");
    }

    #[test]
    fn test_friday_hours_close_early() {
        let config = SiteConfig::default();
        let friday = &config.opening_hours[1];

        assert_eq!(friday.days, &["Friday"]);
        assert_eq!(friday.closes, "14:00");
    }
}
