use crate::domain::{ApiKey, Exchange, FiscalYear, Ticker};
use crate::ValidationError;

/// Fully validated request for one company's payables in one fiscal year.
///
/// The only way to build a `Query` is through [`Query::new`], so a client
/// holding one never sees unchecked input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    ticker: Ticker,
    exchange: Exchange,
    fiscal_year: FiscalYear,
    api_key: ApiKey,
}

impl Query {
    /// Validate raw inputs in field order: ticker, exchange, year, API key.
    ///
    /// A ticker may carry its exchange suffix (`RELIANCE.NS`). When `exchange`
    /// is also given it must agree with the suffix; when neither is present
    /// the exchange defaults to NSE.
    pub fn new(
        raw_ticker: &str,
        exchange: Option<Exchange>,
        raw_year: &str,
        api_key: Option<&str>,
    ) -> Result<Self, ValidationError> {
        let (base, implied) = Exchange::split_suffix(raw_ticker);
        let ticker = Ticker::parse(base)?;

        let exchange = match (implied, exchange) {
            (Some(implied), Some(requested)) if implied != requested => {
                return Err(ValidationError::ExchangeMismatch {
                    implied: implied.as_str(),
                    requested: requested.as_str(),
                });
            }
            (Some(implied), _) => implied,
            (None, Some(requested)) => requested,
            (None, None) => Exchange::default(),
        };

        let fiscal_year = FiscalYear::parse(raw_year)?;
        let api_key = ApiKey::parse(api_key.unwrap_or_default())?;

        Ok(Self {
            ticker,
            exchange,
            fiscal_year,
            api_key,
        })
    }

    pub fn ticker(&self) -> &Ticker {
        &self.ticker
    }

    pub const fn exchange(&self) -> Exchange {
        self.exchange
    }

    pub const fn fiscal_year(&self) -> FiscalYear {
        self.fiscal_year
    }

    pub fn api_key(&self) -> &ApiKey {
        &self.api_key
    }

    /// Provider symbol including the exchange suffix, e.g. `TCS.NS`.
    pub fn provider_symbol(&self) -> String {
        format!("{}{}", self.ticker, self.exchange.suffix())
    }
}
