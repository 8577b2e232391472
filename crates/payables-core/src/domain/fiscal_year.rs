use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::ValidationError;

/// Calendar year a filing is reported under, bounded to a plausible range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "i32")]
pub struct FiscalYear(i32);

impl FiscalYear {
    pub const MIN: i32 = 1900;
    pub const MAX: i32 = 2100;

    pub fn new(value: i32) -> Result<Self, ValidationError> {
        if !(Self::MIN..=Self::MAX).contains(&value) {
            return Err(ValidationError::FiscalYearOutOfRange {
                value,
                min: Self::MIN,
                max: Self::MAX,
            });
        }
        Ok(Self(value))
    }

    /// Parse user input that must be exactly four ASCII digits.
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        let trimmed = input.trim();
        if trimmed.len() != 4 || !trimmed.bytes().all(|byte| byte.is_ascii_digit()) {
            return Err(ValidationError::FiscalYearNotFourDigits {
                value: trimmed.to_owned(),
            });
        }

        let value = trimmed
            .parse::<i32>()
            .map_err(|_| ValidationError::FiscalYearNotFourDigits {
                value: trimmed.to_owned(),
            })?;
        Self::new(value)
    }

    pub const fn value(self) -> i32 {
        self.0
    }
}

impl Display for FiscalYear {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for FiscalYear {
    type Err = ValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::parse(value)
    }
}

impl TryFrom<i32> for FiscalYear {
    type Error = ValidationError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<FiscalYear> for i32 {
    fn from(value: FiscalYear) -> Self {
        value.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_four_digit_year() {
        let year = FiscalYear::parse(" 2024 ").expect("must parse");
        assert_eq!(year.value(), 2024);
    }

    #[test]
    fn rejects_non_numeric_and_wrong_width() {
        for input in ["", "24", "20245", "20a4", "-202", "+2024"] {
            let err = FiscalYear::parse(input).expect_err("must fail");
            assert!(
                matches!(err, ValidationError::FiscalYearNotFourDigits { .. }),
                "{input:?} should be rejected as malformed"
            );
        }
    }

    #[test]
    fn rejects_years_outside_range() {
        let err = FiscalYear::parse("1899").expect_err("must fail");
        assert!(matches!(
            err,
            ValidationError::FiscalYearOutOfRange { value: 1899, .. }
        ));
        assert!(FiscalYear::new(2101).is_err());
        assert!(FiscalYear::new(1900).is_ok());
        assert!(FiscalYear::new(2100).is_ok());
    }
}
