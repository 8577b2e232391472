use payables_core::{FetchError, FetchErrorKind, ValidationError};
use thiserror::Error;

/// CLI-level error categories mapped to exit codes.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    Serialization(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl CliError {
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::Validation(_) => 2,
            Self::Fetch(error) => match error.kind() {
                FetchErrorKind::Validation => 2,
                FetchErrorKind::Connectivity => 3,
                FetchErrorKind::Auth => 4,
                FetchErrorKind::NotFound => 5,
                FetchErrorKind::Server => 6,
                FetchErrorKind::Parse => 7,
                FetchErrorKind::Rejected => 8,
            },
            Self::Serialization(_) | Self::Io(_) => 10,
        }
    }

    pub const fn hint(&self) -> Option<&'static str> {
        match self {
            Self::Validation(_) => Some(FetchErrorKind::Validation.hint()),
            Self::Fetch(error) => Some(error.kind().hint()),
            Self::Serialization(_) | Self::Io(_) => None,
        }
    }
}
