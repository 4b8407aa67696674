use std::collections::BTreeSet;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use serde::Deserialize;
use tracing::warn;

use super::{fetch_body, lenient_coord};
use crate::http_client::HttpClient;
use crate::normalize::{clean_coord, clean_text, format_amenities};
use crate::{
    Amenities, Hotel, HotelId, Image, Images, Location, SourceError, SupplierId, SupplierSource,
};

const ENDPOINT: &str = "https://5f2be0b4ffc88500167b85a0.mockapi.io/suppliers/paperflies";

/// Adapter for the Paperflies feed.
///
/// The richest of the three sources: nested `location`, amenities already
/// split into `general`/`room`, images keyed `link`/`caption`, and the only
/// feed that carries booking conditions.
pub struct PaperfliesSupplier {
    http_client: Arc<dyn HttpClient>,
    timeout_ms: u64,
}

impl PaperfliesSupplier {
    pub fn new(http_client: Arc<dyn HttpClient>) -> Self {
        Self {
            http_client,
            timeout_ms: 10_000,
        }
    }

    pub fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }

    /// Map a feed body into canonical records.
    pub fn parse_records(body: &str) -> Result<Vec<Hotel>, SourceError> {
        let records: Vec<PaperfliesRecord> = serde_json::from_str(body).map_err(|error| {
            SourceError::invalid_payload(format!("paperflies payload did not parse: {error}"))
        })?;

        Ok(records
            .into_iter()
            .filter_map(|record| {
                let hotel = record.into_hotel();
                if hotel.is_none() {
                    warn!(supplier = %SupplierId::Paperflies, "skipping record with missing identity fields");
                }
                hotel
            })
            .collect())
    }
}

impl SupplierSource for PaperfliesSupplier {
    fn id(&self) -> SupplierId {
        SupplierId::Paperflies
    }

    fn endpoint(&self) -> &'static str {
        ENDPOINT
    }

    fn fetch<'a>(
        &'a self,
    ) -> Pin<Box<dyn Future<Output = Result<Vec<Hotel>, SourceError>> + Send + 'a>> {
        Box::pin(async move {
            let body = fetch_body(
                self.http_client.as_ref(),
                self.id(),
                self.endpoint(),
                self.timeout_ms,
            )
            .await?;
            Self::parse_records(&body)
        })
    }
}

#[derive(Debug, Deserialize)]
struct PaperfliesRecord {
    hotel_id: Option<String>,
    destination_id: Option<i64>,
    name: Option<String>,
    description: Option<String>,
    #[serde(default)]
    location: Option<PaperfliesLocation>,
    #[serde(default)]
    amenities: Option<PaperfliesAmenities>,
    #[serde(default)]
    images: Option<PaperfliesImages>,
    #[serde(default)]
    booking_conditions: Option<Vec<String>>,
}

#[derive(Debug, Default, Deserialize)]
struct PaperfliesLocation {
    address: Option<String>,
    city: Option<String>,
    country: Option<String>,
    #[serde(default, deserialize_with = "lenient_coord")]
    lat: Option<f64>,
    #[serde(default, deserialize_with = "lenient_coord")]
    lng: Option<f64>,
}

#[derive(Debug, Default, Deserialize)]
struct PaperfliesAmenities {
    #[serde(default)]
    general: Option<Vec<String>>,
    #[serde(default)]
    room: Option<Vec<String>>,
}

#[derive(Debug, Default, Deserialize)]
struct PaperfliesImages {
    #[serde(default)]
    rooms: Option<Vec<PaperfliesImage>>,
    #[serde(default)]
    site: Option<Vec<PaperfliesImage>>,
    #[serde(default)]
    amenities: Option<Vec<PaperfliesImage>>,
}

#[derive(Debug, Deserialize)]
struct PaperfliesImage {
    link: Option<String>,
    caption: Option<String>,
}

impl PaperfliesImage {
    fn into_image(self) -> Image {
        Image::from_parts(self.link, self.caption)
    }
}

impl PaperfliesRecord {
    fn into_hotel(self) -> Option<Hotel> {
        let id = self
            .hotel_id
            .as_deref()
            .and_then(|raw| HotelId::parse(raw).ok())?;
        let destination_id = self.destination_id?;
        let location = self.location.unwrap_or_default();
        let amenities = self.amenities.unwrap_or_default();
        let images = self.images.unwrap_or_default();

        Some(Hotel {
            id,
            destination_id,
            name: clean_text(self.name),
            location: Location {
                address: clean_text(location.address),
                city: clean_text(location.city),
                country: clean_text(location.country),
                lat: clean_coord(location.lat),
                lng: clean_coord(location.lng),
            },
            description: clean_text(self.description),
            amenities: Amenities {
                general: format_amenities(amenities.general.unwrap_or_default()),
                room: format_amenities(amenities.room.unwrap_or_default()),
            },
            images: Images {
                rooms: into_images(images.rooms),
                site: into_images(images.site),
                amenities: into_images(images.amenities),
            },
            booking_conditions: self
                .booking_conditions
                .unwrap_or_default()
                .into_iter()
                .collect(),
        })
    }
}

fn into_images(raw: Option<Vec<PaperfliesImage>>) -> Vec<Image> {
    raw.unwrap_or_default()
        .into_iter()
        .map(PaperfliesImage::into_image)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIXTURE: &str = r#"[
        {
            "hotel_id": "iJhz",
            "destination_id": 5432,
            "name": "Beach Villas Singapore",
            "location": {
                "address": "8 Sentosa Gateway, Beach Villas, 098269",
                "country": "Singapore"
            },
            "description": "Surrounded by tropical gardens, these upscale villas feature sundecks and pool views.",
            "amenities": {
                "general": ["outdoor pool", "indoor pool", "business center", "childcare"],
                "room": ["tv", "coffee machine", "kettle", "hair dryer", "iron"]
            },
            "images": {
                "rooms": [
                    {"link": "https://d2ey9sqrvkqdfs.cloudfront.net/0qZF/2.jpg", "caption": "Double room"},
                    {"link": "https://d2ey9sqrvkqdfs.cloudfront.net/0qZF/4.jpg", "caption": "Bathroom"}
                ],
                "site": [
                    {"link": "https://d2ey9sqrvkqdfs.cloudfront.net/0qZF/1.jpg", "caption": "Front"}
                ]
            },
            "booking_conditions": [
                "All children are welcome.",
                "Pets are not allowed.",
                "WiFi is available in all areas and is free of charge."
            ]
        }
    ]"#;

    #[test]
    fn parses_and_normalizes_feed_records() {
        let hotels = PaperfliesSupplier::parse_records(FIXTURE).expect("fixture should parse");
        assert_eq!(hotels.len(), 1);

        let hotel = &hotels[0];
        assert_eq!(hotel.id.as_str(), "iJhz");
        assert_eq!(hotel.destination_id, 5432);
        assert_eq!(
            hotel.location.address.as_deref(),
            Some("8 Sentosa Gateway, Beach Villas, 098269")
        );
        assert_eq!(hotel.location.city, None);
        assert_eq!(hotel.location.lat, None);
        assert_eq!(
            hotel.amenities.room,
            vec!["tv", "coffee machine", "kettle", "hair dryer", "iron"]
        );
        assert_eq!(hotel.images.rooms.len(), 2);
        assert_eq!(hotel.images.site[0].description.as_deref(), Some("Front"));
        assert_eq!(hotel.booking_conditions.len(), 3);
        assert!(hotel
            .booking_conditions
            .contains("Pets are not allowed."));
    }

    #[test]
    fn missing_optional_sections_degrade_to_empty() {
        let body = r#"[{"hotel_id": "SjyX", "destination_id": 5432}]"#;
        let hotels = PaperfliesSupplier::parse_records(body).expect("body should parse");
        assert_eq!(hotels.len(), 1);
        let hotel = &hotels[0];
        assert_eq!(hotel.name, None);
        assert_eq!(hotel.location, crate::Location::default());
        assert!(hotel.amenities.general.is_empty());
        assert!(hotel.booking_conditions.is_empty());
    }

    #[test]
    fn booking_conditions_collapse_duplicates_without_case_folding() {
        let body = r#"[{
            "hotel_id": "iJhz",
            "destination_id": 5432,
            "booking_conditions": ["Pets are not allowed.", "Pets are not allowed.", "pets are not allowed."]
        }]"#;
        let hotels = PaperfliesSupplier::parse_records(body).expect("body should parse");
        // exact duplicates collapse; case variants are distinct entries
        assert_eq!(hotels[0].booking_conditions.len(), 2);
    }
}
