use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::ValidationError;

const MAX_TICKER_LEN: usize = 20;

/// Normalized exchange ticker without its exchange suffix.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Ticker(String);

impl Ticker {
    /// Parse and normalize a ticker to uppercase.
    ///
    /// BSE scrip codes are numeric, so a leading digit is accepted. Suffixes
    /// such as `.NS` must be split off before calling this.
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::EmptyTicker);
        }

        let normalized = trimmed.to_ascii_uppercase();
        let len = normalized.chars().count();
        if len > MAX_TICKER_LEN {
            return Err(ValidationError::TickerTooLong {
                len,
                max: MAX_TICKER_LEN,
            });
        }

        if let Some(first) = normalized.chars().next() {
            if !first.is_ascii_alphanumeric() {
                return Err(ValidationError::TickerInvalidStart { ch: first });
            }
        }

        for (index, ch) in normalized.chars().enumerate() {
            let valid = ch.is_ascii_alphanumeric() || matches!(ch, '-' | '&' | '_');
            if !valid {
                return Err(ValidationError::TickerInvalidChar { ch, index });
            }
        }

        Ok(Self(normalized))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for Ticker {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<String> for Ticker {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Ticker> for String {
    fn from(value: Ticker) -> Self {
        value.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_and_normalizes_ticker() {
        let parsed = Ticker::parse(" reliance ").expect("ticker should parse");
        assert_eq!(parsed.as_str(), "RELIANCE");
    }

    #[test]
    fn accepts_exchange_style_punctuation_and_scrip_codes() {
        assert_eq!(Ticker::parse("m&m").expect("valid").as_str(), "M&M");
        assert_eq!(
            Ticker::parse("bajaj-auto").expect("valid").as_str(),
            "BAJAJ-AUTO"
        );
        assert_eq!(Ticker::parse("500325").expect("valid").as_str(), "500325");
    }

    #[test]
    fn rejects_empty_ticker() {
        let err = Ticker::parse("   ").expect_err("must fail");
        assert_eq!(err, ValidationError::EmptyTicker);
    }

    #[test]
    fn rejects_invalid_start() {
        let err = Ticker::parse("-TCS").expect_err("must fail");
        assert!(matches!(err, ValidationError::TickerInvalidStart { ch: '-' }));
    }

    #[test]
    fn rejects_invalid_chars() {
        let err = Ticker::parse("TCS$").expect_err("must fail");
        assert!(matches!(
            err,
            ValidationError::TickerInvalidChar { ch: '$', index: 3 }
        ));
    }

    #[test]
    fn rejects_overlong_ticker() {
        let err = Ticker::parse(&"A".repeat(21)).expect_err("must fail");
        assert!(matches!(err, ValidationError::TickerTooLong { len: 21, .. }));
    }
}
