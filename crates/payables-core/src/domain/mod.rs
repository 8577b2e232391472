//! # Domain Models
//!
//! Validated building blocks for a payables lookup.
//!
//! | Type | Description |
//! |------|-------------|
//! | [`Ticker`] | Normalized exchange ticker |
//! | [`Exchange`] | NSE or BSE, with provider suffix |
//! | [`FiscalYear`] | Four-digit year in `1900..=2100` |
//! | [`ApiKey`] | Redacted provider key |
//! | [`Query`] | All of the above, validated together |
//! | [`AccountPayables`] | Parsed provider figure |

mod api_key;
mod exchange;
mod fiscal_year;
mod payables;
mod query;
mod ticker;

pub use api_key::ApiKey;
pub use exchange::Exchange;
pub use fiscal_year::FiscalYear;
pub use payables::{validate_currency_code, AccountPayables};
pub use query::Query;
pub use ticker::Ticker;
