//! # Payables Core
//!
//! Validation, transport and parsing for looking up a listed Indian company's
//! account payables in a given fiscal year.
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`client`] | Issues the provider request and classifies failures |
//! | [`config`] | Base URL, timeout and user agent |
//! | [`domain`] | Ticker, exchange, fiscal year, API key, query and result |
//! | [`error`] | Validation errors and the fetch error taxonomy |
//! | [`format`] | Thousands-separated amount rendering |
//! | [`http_client`] | Transport trait and reqwest implementation |
//! | [`parser`] | Provider JSON decoding |
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use payables_core::{ClientConfig, PayablesClient, Query};
//!
//! let query = Query::new("RELIANCE.NS", None, "2024", Some("my-key"))?;
//! let client = PayablesClient::new(ClientConfig::default());
//! let payables = client.fetch(&query).await?;
//! println!("{}", payables.display_amount());
//! ```
//!
//! ## Security
//!
//! The API key travels in the `x-api-key` header, never in the URL, and is
//! redacted from `Debug` output and logs.

pub mod client;
pub mod config;
pub mod domain;
pub mod error;
pub mod format;
pub mod http_client;
pub mod parser;

pub use client::{classify_status, PayablesClient};
pub use config::{ClientConfig, DEFAULT_BASE_URL, DEFAULT_TIMEOUT_MS};
pub use domain::{
    validate_currency_code, AccountPayables, ApiKey, Exchange, FiscalYear, Query, Ticker,
};
pub use error::{FetchError, FetchErrorKind, ValidationError};
pub use format::format_amount;
pub use http_client::{
    HttpClient, HttpError, HttpErrorKind, HttpRequest, HttpResponse, ReqwestHttpClient,
};
pub use parser::parse_payables;
