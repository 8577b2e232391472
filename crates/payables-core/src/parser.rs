//! Decoding of the provider's company-financials payload.

use serde::Deserialize;
use serde_json::Value;

use crate::domain::{AccountPayables, Query};
use crate::error::FetchError;

const SUCCESS_STATUS: &str = "success";
const YEAR_FIELD: &str = "calendarYear";

#[derive(Debug, Deserialize)]
struct ProviderEnvelope {
    #[serde(default)]
    status: Option<String>,
    // Only the record for the requested year is type-checked.
    #[serde(default)]
    data: Option<Vec<Value>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ProviderRecord {
    #[serde(default)]
    symbol: Option<String>,
    #[serde(default, rename = "company_name")]
    company_name: Option<String>,
    #[serde(default)]
    period: Option<String>,
    // Provider spelling.
    #[serde(default, rename = "fillingDate")]
    filing_date: Option<String>,
    #[serde(default)]
    accepted_date: Option<String>,
    #[serde(default)]
    account_payables: Option<f64>,
    #[serde(default)]
    reported_currency: Option<String>,
}

/// Year of a raw record, accepting integers, integral floats and numeric strings.
fn record_year(record: &Value) -> Option<i32> {
    match record.get(YEAR_FIELD)? {
        Value::Number(number) => match number.as_i64() {
            Some(year) => i32::try_from(year).ok(),
            None => number
                .as_f64()
                .filter(|year| year.fract() == 0.0 && year.abs() <= f64::from(i32::MAX))
                .map(|year| year as i32),
        },
        Value::String(text) => text.trim().parse::<i32>().ok(),
        _ => None,
    }
}

/// Extract the payables figure for `query`'s fiscal year from a 2xx body.
pub fn parse_payables(body: &str, query: &Query) -> Result<AccountPayables, FetchError> {
    let envelope: ProviderEnvelope = serde_json::from_str(body)
        .map_err(|error| FetchError::parse(format!("failed to parse provider response: {error}")))?;

    match envelope.status.as_deref() {
        Some(SUCCESS_STATUS) => {}
        Some(other) => {
            return Err(FetchError::rejected(
                format!("data provider reported status '{other}'"),
                None,
            ));
        }
        None => return Err(FetchError::parse("provider response is missing 'status'")),
    }

    let symbol = query.provider_symbol();
    let year = query.fiscal_year();
    let records = envelope.data.unwrap_or_default();
    if records.is_empty() {
        return Err(FetchError::not_found(format!(
            "no financial records returned for {symbol}"
        )));
    }

    let raw_record = records
        .into_iter()
        .find(|record| record_year(record) == Some(year.value()))
        .ok_or_else(|| {
            FetchError::not_found(format!("no record for {symbol} in fiscal year {year}"))
        })?;
    let record: ProviderRecord = serde_json::from_value(raw_record).map_err(|error| {
        FetchError::parse(format!("record for fiscal year {year} is malformed: {error}"))
    })?;

    let amount = record.account_payables.ok_or_else(|| {
        FetchError::parse(format!(
            "record for fiscal year {year} is missing 'accountPayables'"
        ))
    })?;
    let currency = record.reported_currency.ok_or_else(|| {
        FetchError::parse(format!(
            "record for fiscal year {year} is missing 'reportedCurrency'"
        ))
    })?;
    let company_name = record
        .company_name
        .filter(|name| !name.trim().is_empty())
        .or(record.symbol)
        .unwrap_or(symbol);

    let payables = AccountPayables::new(
        query.ticker().clone(),
        query.exchange(),
        company_name,
        year,
        amount,
        &currency,
    )
    .map_err(|error| FetchError::parse(error.to_string()))?;

    Ok(payables
        .with_period(record.period)
        .with_filing_dates(record.filing_date, record.accepted_date))
}
