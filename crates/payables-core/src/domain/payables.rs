use serde::{Deserialize, Serialize};

use crate::domain::{Exchange, FiscalYear, Ticker};
use crate::format::format_amount;
use crate::ValidationError;

/// Account payables figure reported by a company for one fiscal year.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountPayables {
    pub ticker: Ticker,
    pub exchange: Exchange,
    pub company_name: String,
    pub fiscal_year: FiscalYear,
    pub account_payables: f64,
    pub currency: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub period: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filing_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accepted_date: Option<String>,
}

impl AccountPayables {
    pub fn new(
        ticker: Ticker,
        exchange: Exchange,
        company_name: impl Into<String>,
        fiscal_year: FiscalYear,
        account_payables: f64,
        currency: &str,
    ) -> Result<Self, ValidationError> {
        if !account_payables.is_finite() {
            return Err(ValidationError::NonFiniteValue {
                field: "account_payables",
            });
        }

        Ok(Self {
            ticker,
            exchange,
            company_name: company_name.into(),
            fiscal_year,
            account_payables,
            currency: validate_currency_code(currency)?,
            period: None,
            filing_date: None,
            accepted_date: None,
        })
    }

    pub fn with_period(mut self, period: Option<String>) -> Self {
        self.period = period;
        self
    }

    pub fn with_filing_dates(
        mut self,
        filing_date: Option<String>,
        accepted_date: Option<String>,
    ) -> Self {
        self.filing_date = filing_date;
        self.accepted_date = accepted_date;
        self
    }

    /// Amount with thousands separators and currency label, e.g. `1,234,567 INR`.
    pub fn display_amount(&self) -> String {
        format!("{} {}", format_amount(self.account_payables), self.currency)
    }
}

pub fn validate_currency_code(input: &str) -> Result<String, ValidationError> {
    let normalized = input.trim().to_ascii_uppercase();
    let is_valid = normalized.len() == 3 && normalized.chars().all(|ch| ch.is_ascii_alphabetic());

    if !is_valid {
        return Err(ValidationError::InvalidCurrency {
            value: input.to_owned(),
        });
    }

    Ok(normalized)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(amount: f64, currency: &str) -> Result<AccountPayables, ValidationError> {
        AccountPayables::new(
            Ticker::parse("RELIANCE").expect("valid ticker"),
            Exchange::Nse,
            "Reliance Industries Limited",
            FiscalYear::new(2024).expect("valid year"),
            amount,
            currency,
        )
    }

    #[test]
    fn display_amount_includes_separators_and_currency() {
        let payables = sample(1_234_567_890.0, "inr").expect("valid payables");
        assert_eq!(payables.currency, "INR");
        assert_eq!(payables.display_amount(), "1,234,567,890 INR");
    }

    #[test]
    fn rejects_non_finite_amount() {
        let err = sample(f64::NAN, "INR").expect_err("must fail");
        assert!(matches!(err, ValidationError::NonFiniteValue { .. }));
    }

    #[test]
    fn rejects_bad_currency() {
        let err = sample(1.0, "RUPEES").expect_err("must fail");
        assert!(matches!(err, ValidationError::InvalidCurrency { .. }));
    }

    #[test]
    fn serializes_without_empty_optional_fields() {
        let payables = sample(10.0, "INR").expect("valid payables");
        let json = serde_json::to_value(&payables).expect("serializable");
        assert_eq!(json["ticker"], "RELIANCE");
        assert_eq!(json["exchange"], "NSE");
        assert_eq!(json["fiscal_year"], 2024);
        assert!(json.get("period").is_none());
    }
}
