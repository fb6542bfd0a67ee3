//! schema.org structured data for the physical store.
//!
//! Builds the `ClothingStore` JSON-LD document the page shell embeds for
//! search engines. The shape is fixed; all values come from
//! [`SiteConfig`] and the resolved page metadata.

use serde::Serialize;

use crate::config::SiteConfig;
use crate::error::Error;
use crate::seo::ResolvedMeta;

const SCHEMA_CONTEXT: &str = "https://schema.org";

/// schema.org `ClothingStore` document.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreSchema {
    #[serde(rename = "@context")]
    context: &'static str,
    #[serde(rename = "@type")]
    schema_type: &'static str,
    name: String,
    image: String,
    #[serde(rename = "@id")]
    id: String,
    url: String,
    telephone: String,
    address: PostalAddress,
    geo: GeoCoordinates,
    opening_hours_specification: Vec<OpeningHoursSpecification>,
    price_range: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
struct PostalAddress {
    #[serde(rename = "@type")]
    schema_type: &'static str,
    street_address: String,
    address_locality: String,
    postal_code: String,
    address_country: String,
}

#[derive(Debug, Clone, Serialize)]
struct GeoCoordinates {
    #[serde(rename = "@type")]
    schema_type: &'static str,
    latitude: f64,
    longitude: f64,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
struct OpeningHoursSpecification {
    #[serde(rename = "@type")]
    schema_type: &'static str,
    day_of_week: Vec<&'static str>,
    opens: &'static str,
    closes: &'static str,
}

impl StoreSchema {
    /// Assemble the document from the store identity and the page's
    /// resolved metadata.
    pub fn new(config: &SiteConfig, meta: &ResolvedMeta) -> Self {
        Self {
            context: SCHEMA_CONTEXT,
            schema_type: "ClothingStore",
            name: config.store_name.clone(),
            image: meta.og_image.clone(),
            id: meta.canonical_url.clone(),
            url: meta.canonical_url.clone(),
            telephone: config.telephone.clone(),
            address: PostalAddress {
                schema_type: "PostalAddress",
                street_address: config.location.street_address.clone(),
                address_locality: config.location.locality.clone(),
                postal_code: config.location.postal_code.clone(),
                address_country: config.location.country.clone(),
            },
            geo: GeoCoordinates {
                schema_type: "GeoCoordinates",
                latitude: config.location.latitude,
                longitude: config.location.longitude,
            },
            opening_hours_specification: config
                .opening_hours
                .iter()
                .map(|hours| OpeningHoursSpecification {
                    schema_type: "OpeningHoursSpecification",
                    day_of_week: hours.days.to_vec(),
                    opens: hours.opens,
                    closes: hours.closes,
                })
                .collect(),
            price_range: config.price_range.clone(),
        }
    }

    /// Serialize for embedding in a `application/ld+json` script tag.
    pub fn to_json(&self) -> Result<String, Error> {
        Ok(serde_json::to_string(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seo::PageMeta;
    use serde_json::Value;

    fn schema_value() -> Value {
        let config = SiteConfig::default();
        let meta = PageMeta::default().resolve(&config, "/");
        let json = StoreSchema::new(&config, &meta).to_json().unwrap();
        serde_json::from_str(&json).unwrap()
    }

    #[test]
    fn test_schema_identity() {
        let value = schema_value();

        assert_eq!(value["@context"], "https://schema.org");
        assert_eq!(value["@type"], "ClothingStore");
        assert_eq!(value["name"], "חנות בגדים אלפא");
        assert_eq!(value["url"], "https://www.alpha-clothing.co.il/");
        assert_eq!(value["@id"], value["url"]);
        assert_eq!(value["telephone"], "+972-3-1234567");
        assert_eq!(value["priceRange"], "₪₪-₪₪₪");
    }

    #[test]
    fn test_schema_address_and_geo() {
        let value = schema_value();

        assert_eq!(value["address"]["@type"], "PostalAddress");
        assert_eq!(value["address"]["streetAddress"], "רחוב אלנבי 123");
        assert_eq!(value["address"]["addressLocality"], "תל אביב");
        assert_eq!(value["address"]["postalCode"], "6123402");
        assert_eq!(value["address"]["addressCountry"], "IL");
        assert_eq!(value["geo"]["@type"], "GeoCoordinates");
        assert_eq!(value["geo"]["latitude"], 32.0853);
        assert_eq!(value["geo"]["longitude"], 34.7818);
    }

    #[test]
    fn test_schema_opening_hours() {
        let value = schema_value();
        let hours = value["openingHoursSpecification"].as_array().unwrap();

        assert_eq!(hours.len(), 2);
        assert_eq!(hours[0]["dayOfWeek"].as_array().unwrap().len(), 5);
        assert_eq!(hours[0]["opens"], "09:00");
        assert_eq!(hours[0]["closes"], "21:00");
        assert_eq!(hours[1]["dayOfWeek"][0], "Friday");
        assert_eq!(hours[1]["closes"], "14:00");
    }

    #[test]
    fn test_schema_image_follows_page_meta() {
        let config = SiteConfig::default();
        let meta = PageMeta::default()
            .with_og_image("/images/storefront.jpg")
            .resolve(&config, "/");
        let json = StoreSchema::new(&config, &meta).to_json().unwrap();
        let value: Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["image"], "/images/storefront.jpg");
    }
}
