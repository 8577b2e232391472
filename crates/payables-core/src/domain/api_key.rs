use std::fmt::{Debug, Formatter};

use crate::ValidationError;

/// Static API key sent to the provider. Never rendered by `Debug`.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::MissingApiKey);
        }
        Ok(Self(trimmed.to_owned()))
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl Debug for ApiKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str("ApiKey(***)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_blank_key() {
        assert_eq!(ApiKey::parse(" \t").expect_err("must fail"), ValidationError::MissingApiKey);
    }

    #[test]
    fn debug_output_is_redacted() {
        let key = ApiKey::parse("secret-123").expect("valid key");
        assert_eq!(key.expose(), "secret-123");
        assert!(!format!("{key:?}").contains("secret"));
    }
}
