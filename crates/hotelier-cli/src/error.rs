use thiserror::Error;

/// CLI-level error categories mapped to exit codes.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Validation(#[from] hotelier_core::ValidationError),

    #[error("destination_ids must be a comma-separated list of integers or 'none', got '{value}'")]
    InvalidDestinationId { value: String },

    #[error(transparent)]
    Source(#[from] hotelier_core::SourceError),

    #[error(transparent)]
    Serialization(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl CliError {
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::Validation(_) => 2,
            Self::InvalidDestinationId { .. } => 2,
            Self::Source(_) => 3,
            Self::Serialization(_) => 4,
            Self::Io(_) => 10,
        }
    }
}
