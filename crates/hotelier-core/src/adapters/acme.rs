use std::collections::BTreeSet;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use serde::Deserialize;
use tracing::warn;

use super::{fetch_body, lenient_coord};
use crate::http_client::HttpClient;
use crate::normalize::{clean_coord, clean_text, format_amenities};
use crate::{Amenities, Hotel, HotelId, Images, Location, SourceError, SupplierId, SupplierSource};

const ENDPOINT: &str = "https://5f2be0b4ffc88500167b85a0.mockapi.io/suppliers/acme";

/// Adapter for the Acme feed.
///
/// Acme uses PascalCase field names, a flat location, and a single
/// `Facilities` list that maps to general amenities. The feed carries no
/// images and no booking conditions.
pub struct AcmeSupplier {
    http_client: Arc<dyn HttpClient>,
    timeout_ms: u64,
}

impl AcmeSupplier {
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
        let records: Vec<AcmeRecord> = serde_json::from_str(body).map_err(|error| {
            SourceError::invalid_payload(format!("acme payload did not parse: {error}"))
        })?;

        Ok(records
            .into_iter()
            .filter_map(|record| {
                let hotel = record.into_hotel();
                if hotel.is_none() {
                    warn!(supplier = %SupplierId::Acme, "skipping record with missing identity fields");
                }
                hotel
            })
            .collect())
    }
}

impl SupplierSource for AcmeSupplier {
    fn id(&self) -> SupplierId {
        SupplierId::Acme
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
#[serde(rename_all = "PascalCase")]
struct AcmeRecord {
    id: Option<String>,
    destination_id: Option<i64>,
    name: Option<String>,
    description: Option<String>,
    address: Option<String>,
    city: Option<String>,
    country: Option<String>,
    #[serde(default, deserialize_with = "lenient_coord")]
    latitude: Option<f64>,
    #[serde(default, deserialize_with = "lenient_coord")]
    longitude: Option<f64>,
    #[serde(default)]
    facilities: Option<Vec<String>>,
}

impl AcmeRecord {
    fn into_hotel(self) -> Option<Hotel> {
        let id = self.id.as_deref().and_then(|raw| HotelId::parse(raw).ok())?;
        let destination_id = self.destination_id?;

        Some(Hotel {
            id,
            destination_id,
            name: clean_text(self.name),
            location: Location {
                address: clean_text(self.address),
                city: clean_text(self.city),
                country: clean_text(self.country),
                lat: clean_coord(self.latitude),
                lng: clean_coord(self.longitude),
            },
            description: clean_text(self.description),
            amenities: Amenities {
                general: format_amenities(self.facilities.unwrap_or_default()),
                room: Vec::new(),
            },
            images: Images::default(),
            booking_conditions: BTreeSet::new(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIXTURE: &str = r#"[
        {
            "Id": "iJhz",
            "DestinationId": 5432,
            "Name": "Beach Villas Singapore",
            "Latitude": 1.264751,
            "Longitude": 103.824006,
            "Address": " 8 Sentosa Gateway, Beach Villas ",
            "City": "Singapore",
            "Country": "SG",
            "PostalCode": "098269",
            "Description": "  This 5 star hotel is located on the coastline of Singapore.",
            "Facilities": ["Pool", "BusinessCenter", "WiFi ", "DryCleaning", " Breakfast"]
        },
        {
            "Id": "f8c9",
            "DestinationId": 1122,
            "Name": "Hilton Tokio",
            "Latitude": "",
            "Longitude": "",
            "Address": "160-0023, SHINJUKU-KU, 6-6-2 NISHI-SHINJUKU, JAPAN",
            "City": "Tokyo",
            "Country": "JP",
            "Description": "Hilton Tokyo is located in Shinjuku.",
            "Facilities": ["Pool", "WiFi ", "BusinessCenter"]
        }
    ]"#;

    #[test]
    fn parses_and_normalizes_feed_records() {
        let hotels = AcmeSupplier::parse_records(FIXTURE).expect("fixture should parse");
        assert_eq!(hotels.len(), 2);

        let first = &hotels[0];
        assert_eq!(first.id.as_str(), "iJhz");
        assert_eq!(first.destination_id, 5432);
        assert_eq!(
            first.location.address.as_deref(),
            Some("8 Sentosa Gateway, Beach Villas")
        );
        assert_eq!(first.location.lat, Some(1.264751));
        assert_eq!(
            first.amenities.general,
            vec!["pool", "business center", "wi fi", "dry cleaning", "breakfast"]
        );
        assert!(first.amenities.room.is_empty());
        assert!(first.images.rooms.is_empty());

        // empty-string coordinates degrade to absent
        let second = &hotels[1];
        assert_eq!(second.location.lat, None);
        assert_eq!(second.location.lng, None);
    }

    #[test]
    fn skips_records_without_identity() {
        let body = r#"[{"Name": "Orphan"}, {"Id": "iJhz", "DestinationId": 5432}]"#;
        let hotels = AcmeSupplier::parse_records(body).expect("body should parse");
        assert_eq!(hotels.len(), 1);
        assert_eq!(hotels[0].id.as_str(), "iJhz");
    }

    #[test]
    fn rejects_non_list_payload() {
        let error = AcmeSupplier::parse_records("{}").expect_err("must fail");
        assert_eq!(error.kind(), crate::SourceErrorKind::InvalidPayload);
    }
}
