use crate::ValidationError;

pub const DEFAULT_BASE_URL: &str = "https://ac-api-server.vercel.app";
pub const DEFAULT_TIMEOUT_MS: u64 = 10_000;
pub const DEFAULT_USER_AGENT: &str = concat!("payables/", env!("CARGO_PKG_VERSION"));

/// Connection settings for [`crate::PayablesClient`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    base_url: String,
    timeout_ms: u64,
    user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: String::from(DEFAULT_BASE_URL),
            timeout_ms: DEFAULT_TIMEOUT_MS,
            user_agent: String::from(DEFAULT_USER_AGENT),
        }
    }
}

impl ClientConfig {
    pub fn new(base_url: &str, timeout_ms: u64) -> Result<Self, ValidationError> {
        Self::default()
            .with_base_url(base_url)?
            .with_timeout_ms(timeout_ms)
    }

    pub fn with_base_url(mut self, base_url: &str) -> Result<Self, ValidationError> {
        let trimmed = base_url.trim().trim_end_matches('/');
        let parses = reqwest::Url::parse(trimmed)
            .map(|url| matches!(url.scheme(), "http" | "https") && url.has_host())
            .unwrap_or(false);
        if !parses {
            return Err(ValidationError::InvalidBaseUrl {
                value: base_url.to_owned(),
            });
        }
        self.base_url = trimmed.to_owned();
        Ok(self)
    }

    pub fn with_timeout_ms(mut self, timeout_ms: u64) -> Result<Self, ValidationError> {
        if timeout_ms == 0 {
            return Err(ValidationError::ZeroTimeout);
        }
        self.timeout_ms = timeout_ms;
        Ok(self)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub const fn timeout_ms(&self) -> u64 {
        self.timeout_ms
    }

    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_trailing_slashes() {
        let config = ClientConfig::new("http://127.0.0.1:8080//", 500).expect("valid config");
        assert_eq!(config.base_url(), "http://127.0.0.1:8080");
        assert_eq!(config.timeout_ms(), 500);
    }

    #[test]
    fn rejects_missing_scheme() {
        let err = ClientConfig::new("ac-api-server.vercel.app", 500).expect_err("must fail");
        assert!(matches!(err, ValidationError::InvalidBaseUrl { .. }));
        assert!(ClientConfig::new("https://", 500).is_err());
        assert!(ClientConfig::new("ftp://example.test", 500).is_err());
    }

    #[test]
    fn rejects_urls_the_transport_cannot_parse() {
        for input in ["http://bad host", "http://[::1", "http://exa mple.test/path"] {
            let err = ClientConfig::new(input, 500).expect_err("must fail");
            assert!(
                matches!(err, ValidationError::InvalidBaseUrl { .. }),
                "{input:?} should be rejected"
            );
        }
    }

    #[test]
    fn rejects_zero_timeout() {
        let err = ClientConfig::new(DEFAULT_BASE_URL, 0).expect_err("must fail");
        assert_eq!(err, ValidationError::ZeroTimeout);
    }
}
