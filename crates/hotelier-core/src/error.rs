use thiserror::Error;

/// Validation errors exposed by `hotelier-core`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("hotel id cannot be empty")]
    EmptyHotelId,
}
