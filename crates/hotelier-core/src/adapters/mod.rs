//! Supplier adapters.
//!
//! One adapter per source format: each fetches its supplier's feed, maps the
//! raw records into canonical [`Hotel`](crate::Hotel)s through typed serde
//! DTOs, and routes every extracted scalar through the normalizer. Field
//! mapping differences between suppliers (PascalCase vs snake_case, `url`
//! vs `link`, `caption` vs `description`) live entirely inside the DTOs.

mod acme;
mod paperflies;
mod patagonia;

pub use acme::AcmeSupplier;
pub use paperflies::PaperfliesSupplier;
pub use patagonia::PatagoniaSupplier;

use serde::{Deserialize, Deserializer};

use crate::http_client::{HttpClient, HttpRequest};
use crate::{SourceError, SupplierId};

/// Fetch a supplier feed body, mapping transport and upstream status
/// failures to fatal [`SourceError`]s.
pub(crate) async fn fetch_body(
    client: &dyn HttpClient,
    supplier: SupplierId,
    endpoint: &str,
    timeout_ms: u64,
) -> Result<String, SourceError> {
    let request = HttpRequest::get(endpoint).with_timeout_ms(timeout_ms);
    let response = client.execute(request).await.map_err(|error| {
        let message = format!("{supplier} transport error: {}", error.message());
        if error.retryable() {
            SourceError::unavailable(message)
        } else {
            SourceError::internal(message)
        }
    })?;

    if !response.is_success() {
        return Err(SourceError::unavailable(format!(
            "{supplier} upstream returned status {}",
            response.status
        )));
    }

    Ok(response.body)
}

/// Best-effort coordinate extraction.
///
/// Feeds send coordinates as numbers, numeric strings, `""`, or `null`;
/// anything unusable degrades to `None` rather than failing the batch.
pub(crate) fn lenient_coord<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::Number(number) => number.as_f64(),
        serde_json::Value::String(text) => text.trim().parse::<f64>().ok(),
        _ => None,
    })
}
