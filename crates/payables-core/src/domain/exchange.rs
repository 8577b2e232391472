use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::ValidationError;

/// Indian exchanges the data provider lists companies under.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Exchange {
    #[default]
    Nse,
    Bse,
}

impl Exchange {
    pub const ALL: [Self; 2] = [Self::Nse, Self::Bse];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Nse => "NSE",
            Self::Bse => "BSE",
        }
    }

    /// Symbol suffix the provider expects, e.g. `RELIANCE.NS`.
    pub const fn suffix(self) -> &'static str {
        match self {
            Self::Nse => ".NS",
            Self::Bse => ".BO",
        }
    }

    /// Split a known exchange suffix off a raw ticker, case-insensitively.
    pub fn split_suffix(raw: &str) -> (&str, Option<Self>) {
        let trimmed = raw.trim();
        for exchange in Self::ALL {
            let suffix = exchange.suffix();
            let Some(split) = trimmed.len().checked_sub(suffix.len()) else {
                continue;
            };
            if split > 0 && trimmed.is_char_boundary(split) {
                let (head, tail) = trimmed.split_at(split);
                if tail.eq_ignore_ascii_case(suffix) {
                    return (head, Some(exchange));
                }
            }
        }
        (trimmed, None)
    }
}

impl Display for Exchange {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Exchange {
    type Err = ValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "nse" | "ns" => Ok(Self::Nse),
            "bse" | "bo" => Ok(Self::Bse),
            other => Err(ValidationError::InvalidExchange {
                value: other.to_owned(),
            }),
        }
    }
}
