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

const ENDPOINT: &str = "https://5f2be0b4ffc88500167b85a0.mockapi.io/suppliers/patagonia";

/// Adapter for the Patagonia feed.
///
/// Patagonia nests images under `images.rooms` / `images.amenities` with
/// `url`/`description` fields, calls the description `info`, and may send
/// `amenities: null`. Site images arrive best-effort under `images.url`.
pub struct PatagoniaSupplier {
    http_client: Arc<dyn HttpClient>,
    timeout_ms: u64,
}

impl PatagoniaSupplier {
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
        let records: Vec<PatagoniaRecord> = serde_json::from_str(body).map_err(|error| {
            SourceError::invalid_payload(format!("patagonia payload did not parse: {error}"))
        })?;

        Ok(records
            .into_iter()
            .filter_map(|record| {
                let hotel = record.into_hotel();
                if hotel.is_none() {
                    warn!(supplier = %SupplierId::Patagonia, "skipping record with missing identity fields");
                }
                hotel
            })
            .collect())
    }
}

impl SupplierSource for PatagoniaSupplier {
    fn id(&self) -> SupplierId {
        SupplierId::Patagonia
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
struct PatagoniaRecord {
    id: Option<String>,
    destination: Option<i64>,
    name: Option<String>,
    info: Option<String>,
    address: Option<String>,
    city: Option<String>,
    country: Option<String>,
    #[serde(default, deserialize_with = "lenient_coord")]
    lat: Option<f64>,
    #[serde(default, deserialize_with = "lenient_coord")]
    lng: Option<f64>,
    #[serde(default)]
    amenities: Option<Vec<String>>,
    #[serde(default)]
    images: Option<PatagoniaImages>,
}

#[derive(Debug, Default, Deserialize)]
struct PatagoniaImages {
    #[serde(default)]
    rooms: Option<Vec<PatagoniaImage>>,
    #[serde(default)]
    amenities: Option<Vec<PatagoniaImage>>,
    /// Site images, when present, arrive under this key.
    #[serde(default)]
    url: Option<Vec<PatagoniaImage>>,
}

#[derive(Debug, Deserialize)]
struct PatagoniaImage {
    url: Option<String>,
    description: Option<String>,
}

impl PatagoniaImage {
    fn into_image(self) -> Image {
        Image::from_parts(self.url, self.description)
    }
}

impl PatagoniaRecord {
    fn into_hotel(self) -> Option<Hotel> {
        let id = self.id.as_deref().and_then(|raw| HotelId::parse(raw).ok())?;
        let destination_id = self.destination?;
        let images = self.images.unwrap_or_default();

        Some(Hotel {
            id,
            destination_id,
            name: clean_text(self.name),
            location: Location {
                address: clean_text(self.address),
                city: clean_text(self.city),
                country: clean_text(self.country),
                lat: clean_coord(self.lat),
                lng: clean_coord(self.lng),
            },
            description: clean_text(self.info),
            amenities: Amenities {
                general: format_amenities(self.amenities.unwrap_or_default()),
                room: Vec::new(),
            },
            images: Images {
                rooms: into_images(images.rooms),
                site: into_images(images.url),
                amenities: into_images(images.amenities),
            },
            booking_conditions: BTreeSet::new(),
        })
    }
}

fn into_images(raw: Option<Vec<PatagoniaImage>>) -> Vec<Image> {
    raw.unwrap_or_default()
        .into_iter()
        .map(PatagoniaImage::into_image)
        .collect()
}
