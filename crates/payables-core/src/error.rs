use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Input validation failures. Each variant names the offending field.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("ticker cannot be empty")]
    EmptyTicker,
    #[error("ticker length {len} exceeds max {max}")]
    TickerTooLong { len: usize, max: usize },
    #[error("ticker must start with an ASCII letter or digit: '{ch}'")]
    TickerInvalidStart { ch: char },
    #[error("ticker contains invalid character '{ch}' at index {index}")]
    TickerInvalidChar { ch: char, index: usize },

    #[error("invalid exchange '{value}', expected one of nse, bse")]
    InvalidExchange { value: String },
    #[error("ticker suffix implies {implied} but exchange {requested} was requested")]
    ExchangeMismatch {
        implied: &'static str,
        requested: &'static str,
    },

    #[error("fiscal year must be a 4-digit integer: '{value}'")]
    FiscalYearNotFourDigits { value: String },
    #[error("fiscal year {value} is outside the supported range {min}..={max}")]
    FiscalYearOutOfRange { value: i32, min: i32, max: i32 },

    #[error("API key is missing; pass --api-key or set PAYABLES_API_KEY")]
    MissingApiKey,

    #[error("currency must be a 3-letter ISO code: '{value}'")]
    InvalidCurrency { value: String },
    #[error("field '{field}' must be finite")]
    NonFiniteValue { field: &'static str },

    #[error("timeout must be greater than zero")]
    ZeroTimeout,
    #[error("base URL must be an absolute http:// or https:// URL: '{value}'")]
    InvalidBaseUrl { value: String },
}

/// Terminal failure categories for a single fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FetchErrorKind {
    Validation,
    Connectivity,
    Auth,
    NotFound,
    Server,
    Parse,
    Rejected,
}

impl FetchErrorKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Validation => "validation",
            Self::Connectivity => "connectivity",
            Self::Auth => "auth",
            Self::NotFound => "not_found",
            Self::Server => "server",
            Self::Parse => "parse",
            Self::Rejected => "rejected",
        }
    }

    /// Actionable follow-up shown to the user alongside the error message.
    pub const fn hint(self) -> &'static str {
        match self {
            Self::Validation => "check the ticker, exchange, fiscal year and API key arguments",
            Self::Connectivity => {
                "check your network connection or raise --timeout-ms, then try again"
            }
            Self::Auth => "the API key was refused; verify PAYABLES_API_KEY or --api-key",
            Self::NotFound => "verify the ticker symbol and exchange, or try another fiscal year",
            Self::Server => "the data provider is failing; try again later",
            Self::Parse => "the data provider returned an unexpected payload",
            Self::Rejected => "the data provider rejected the request",
        }
    }
}

impl Display for FetchErrorKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classified error returned by [`crate::PayablesClient`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchError {
    kind: FetchErrorKind,
    message: String,
    status: Option<u16>,
}

impl FetchError {
    pub fn connectivity(message: impl Into<String>) -> Self {
        Self::new(FetchErrorKind::Connectivity, message, None)
    }

    pub fn auth(status: u16) -> Self {
        Self::new(
            FetchErrorKind::Auth,
            format!("authentication failed with status {status}"),
            Some(status),
        )
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(FetchErrorKind::NotFound, message, None)
    }

    pub fn server(status: u16) -> Self {
        Self::new(
            FetchErrorKind::Server,
            format!("data provider returned status {status}"),
            Some(status),
        )
    }

    pub fn parse(message: impl Into<String>) -> Self {
        Self::new(FetchErrorKind::Parse, message, None)
    }

    pub fn rejected(message: impl Into<String>, status: Option<u16>) -> Self {
        Self::new(FetchErrorKind::Rejected, message, status)
    }

    fn new(kind: FetchErrorKind, message: impl Into<String>, status: Option<u16>) -> Self {
        Self {
            kind,
            message: message.into(),
            status,
        }
    }

    /// Attach the HTTP status to an error created without one.
    pub fn with_status(mut self, status: u16) -> Self {
        self.status = Some(status);
        self
    }

    pub const fn kind(&self) -> FetchErrorKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub const fn status(&self) -> Option<u16> {
        self.status
    }

    pub const fn code(&self) -> &'static str {
        self.kind.as_str()
    }
}

impl Display for FetchError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.message, self.code())
    }
}

impl std::error::Error for FetchError {}

impl From<ValidationError> for FetchError {
    fn from(error: ValidationError) -> Self {
        Self::new(FetchErrorKind::Validation, error.to_string(), None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_errors_convert_to_validation_kind() {
        let error = FetchError::from(ValidationError::MissingApiKey);
        assert_eq!(error.kind(), FetchErrorKind::Validation);
        assert!(error.message().contains("API key"));
    }

    #[test]
    fn display_appends_error_code() {
        let error = FetchError::server(502);
        assert_eq!(
            error.to_string(),
            "data provider returned status 502 (server)"
        );
        assert_eq!(error.status(), Some(502));
    }

    #[test]
    fn every_kind_has_a_distinct_hint() {
        let kinds = [
            FetchErrorKind::Validation,
            FetchErrorKind::Connectivity,
            FetchErrorKind::Auth,
            FetchErrorKind::NotFound,
            FetchErrorKind::Server,
            FetchErrorKind::Parse,
            FetchErrorKind::Rejected,
        ];
        let mut hints = kinds.iter().map(|kind| kind.hint()).collect::<Vec<_>>();
        hints.sort_unstable();
        hints.dedup();
        assert_eq!(hints.len(), kinds.len());
    }
}
