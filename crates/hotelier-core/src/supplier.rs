//! Supplier adapter contract.
//!
//! Every data supplier implements [`SupplierSource`]: fetch the raw feed,
//! map each record into the canonical [`Hotel`] shape, and report failures
//! as structured [`SourceError`]s. The reconciliation core depends only on
//! this trait — it never sees supplier-specific field names.
//!
//! Adapters are expected to route every scalar extraction through
//! [`clean_text`](crate::normalize::clean_text) /
//! [`clean_coord`](crate::normalize::clean_coord) and every amenity token
//! through [`amenity_token`](crate::normalize::amenity_token) so records are
//! comparable across suppliers.

use std::fmt::{Display, Formatter};
use std::future::Future;
use std::pin::Pin;

use crate::{Hotel, SupplierId};

/// Adapter-level error classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceErrorKind {
    /// Transport failure or non-2xx upstream status.
    Unavailable,
    /// The feed body could not be parsed as the supplier's record shape.
    InvalidPayload,
    Internal,
}

/// Structured supplier error.
///
/// A fetch failure is fatal for the whole invocation — there is no retry and
/// no partial-result recovery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceError {
    kind: SourceErrorKind,
    message: String,
    retryable: bool,
}

impl SourceError {
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self {
            kind: SourceErrorKind::Unavailable,
            message: message.into(),
            retryable: true,
        }
    }

    pub fn invalid_payload(message: impl Into<String>) -> Self {
        Self {
            kind: SourceErrorKind::InvalidPayload,
            message: message.into(),
            retryable: false,
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            kind: SourceErrorKind::Internal,
            message: message.into(),
            retryable: false,
        }
    }

    pub const fn kind(&self) -> SourceErrorKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub const fn retryable(&self) -> bool {
        self.retryable
    }

    pub const fn code(&self) -> &'static str {
        match self.kind {
            SourceErrorKind::Unavailable => "source.unavailable",
            SourceErrorKind::InvalidPayload => "source.invalid_payload",
            SourceErrorKind::Internal => "source.internal",
        }
    }
}

impl Display for SourceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.message, self.code())
    }
}

impl std::error::Error for SourceError {}

/// Supplier adapter contract.
///
/// Implementations must be `Send + Sync`; the fetch pipeline holds them
/// behind `Arc<dyn SupplierSource>`.
pub trait SupplierSource: Send + Sync {
    /// Returns the unique supplier identifier.
    fn id(&self) -> SupplierId;

    /// Returns the feed URL this adapter fetches.
    fn endpoint(&self) -> &'static str;

    /// Fetches the supplier feed and maps it into canonical records.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError`] if the transport fails, the upstream answers
    /// with a non-2xx status, or the body is not the supplier's record
    /// shape. Records missing descriptive fields do NOT error — absent
    /// fields degrade to `None` during normalization.
    fn fetch<'a>(
        &'a self,
    ) -> Pin<Box<dyn Future<Output = Result<Vec<Hotel>, SourceError>> + Send + 'a>>;
}
