//! # Hotelier Core
//!
//! Canonical hotel records, supplier adapters and reconciliation rules.
//!
//! ## Overview
//!
//! Hotelier ingests hotel data from independently-formatted suppliers,
//! reconciles records describing the same physical hotel into one canonical
//! record, and serves filtered lookups over the merged catalogue. This crate
//! holds everything except the CLI surface:
//!
//! - **Canonical domain models** for hotels, locations, amenities and images
//! - **Normalization routines** that make cross-supplier values comparable
//! - **Merge operators** with explicit, per-field precedence rules
//! - **Supplier adapters** mapping each source format into canonical records
//! - **Reconciliation catalogue** keyed by hotel identifier
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`adapters`] | Supplier adapters (Acme, Patagonia, Paperflies) |
//! | [`catalogue`] | Reconciliation store and query filters |
//! | [`domain`] | Canonical records and merge operators |
//! | [`http_client`] | HTTP transport abstraction |
//! | [`normalize`] | String, amenity and coordinate canonicalization |
//! | [`pipeline`] | Ordered fetch-and-ingest collection |
//! | [`supplier`] | Adapter contract and source errors |
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use hotelier_core::{collect_catalogue, default_sources, ReqwestHttpClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = Arc::new(ReqwestHttpClient::new());
//!     let sources = default_sources(client, 10_000);
//!
//!     let catalogue = collect_catalogue(&sources).await?;
//!     let hotels = catalogue.find(&[], &[]);
//!     println!("{}", serde_json::to_string_pretty(&hotels)?);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Data Flow
//!
//! ```text
//! raw supplier feeds
//!        │
//!        ▼
//! ┌─────────────────┐     ┌──────────────────┐
//! │ Supplier        │────▶│ Normalizer       │
//! │ Adapters        │     │ (tokens, scalars)│
//! └────────┬────────┘     └──────────────────┘
//!          │ canonical Hotel records
//!          ▼
//! ┌─────────────────┐
//! │ Catalogue       │  merge by hotel id, arrival order observable
//! └────────┬────────┘
//!          │ filtered lookup
//!          ▼
//!    JSON presentation
//! ```

pub mod adapters;
pub mod catalogue;
pub mod domain;
pub mod error;
pub mod http_client;
pub mod normalize;
pub mod pipeline;
pub mod source;
pub mod supplier;

// Re-export commonly used types at crate root for convenience

// Adapter implementations
pub use adapters::{AcmeSupplier, PaperfliesSupplier, PatagoniaSupplier};

// Reconciliation store
pub use catalogue::Catalogue;

// Domain models
pub use domain::{merge_text, Amenities, Hotel, HotelId, Image, Images, Location};

// Error types
pub use error::ValidationError;

// HTTP client types
pub use http_client::{
    HttpClient, HttpError, HttpRequest, HttpResponse, NoopHttpClient, ReqwestHttpClient,
};

// Collection pipeline
pub use pipeline::{collect_catalogue, default_sources};

// Supplier identifiers and contract
pub use source::SupplierId;
pub use supplier::{SourceError, SourceErrorKind, SupplierSource};
