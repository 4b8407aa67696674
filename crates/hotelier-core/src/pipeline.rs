//! Fetch-and-reconcile pipeline.
//!
//! Suppliers are fetched and ingested strictly in the order of
//! [`SupplierId::ALL`]. Merge ties keep the first arrival, so the order is
//! observable through the reconciled output and must stay fixed.

use std::sync::Arc;

use tracing::debug;

use crate::adapters::{AcmeSupplier, PaperfliesSupplier, PatagoniaSupplier};
use crate::http_client::HttpClient;
use crate::{Catalogue, SourceError, SupplierSource};

/// Build the default supplier set in the fixed ingestion order.
pub fn default_sources(
    client: Arc<dyn HttpClient>,
    timeout_ms: u64,
) -> Vec<Arc<dyn SupplierSource>> {
    vec![
        Arc::new(AcmeSupplier::new(Arc::clone(&client)).with_timeout_ms(timeout_ms)),
        Arc::new(PatagoniaSupplier::new(Arc::clone(&client)).with_timeout_ms(timeout_ms)),
        Arc::new(PaperfliesSupplier::new(client).with_timeout_ms(timeout_ms)),
    ]
}

/// Fetch every supplier and fold all records into one catalogue.
///
/// Each supplier's full batch is ingested before the next supplier is
/// fetched. A failed fetch aborts the whole collection — no retry, no
/// partial result.
pub async fn collect_catalogue(
    sources: &[Arc<dyn SupplierSource>],
) -> Result<Catalogue, SourceError> {
    let mut catalogue = Catalogue::new();
    for source in sources {
        let records = source.fetch().await?;
        debug!(
            supplier = %source.id(),
            records = records.len(),
            "ingesting supplier batch"
        );
        catalogue.ingest(records);
    }
    Ok(catalogue)
}
