use std::sync::Arc;
use std::time::Instant;

use tracing::{debug, warn};

use crate::config::ClientConfig;
use crate::domain::{AccountPayables, Query};
use crate::error::FetchError;
use crate::http_client::{HttpClient, HttpError, HttpErrorKind, HttpRequest, ReqwestHttpClient};
use crate::parser::parse_payables;

const API_KEY_HEADER: &str = "x-api-key";

/// Fetches account payables for one validated [`Query`] per call.
#[derive(Clone)]
pub struct PayablesClient {
    http_client: Arc<dyn HttpClient>,
    config: ClientConfig,
}

impl PayablesClient {
    pub fn new(config: ClientConfig) -> Self {
        let http_client = Arc::new(ReqwestHttpClient::new(config.user_agent()));
        Self::with_http_client(http_client, config)
    }

    pub fn with_http_client(http_client: Arc<dyn HttpClient>, config: ClientConfig) -> Self {
        Self {
            http_client,
            config,
        }
    }

    /// Build the single GET issued for `query`.
    pub fn request_for(&self, query: &Query) -> HttpRequest {
        let symbol = query.provider_symbol();
        let url = format!(
            "{}/server/company/{}?year={}",
            self.config.base_url(),
            urlencoding::encode(&symbol),
            query.fiscal_year()
        );

        HttpRequest::get(url)
            .with_header(API_KEY_HEADER, query.api_key().expose())
            .with_header("accept", "application/json")
            .with_timeout_ms(self.config.timeout_ms())
    }

    pub async fn fetch(&self, query: &Query) -> Result<AccountPayables, FetchError> {
        let request = self.request_for(query);
        debug!(
            symbol = %query.provider_symbol(),
            fiscal_year = %query.fiscal_year(),
            timeout_ms = request.timeout_ms,
            "requesting account payables"
        );

        let started = Instant::now();
        let response = match self.http_client.execute(request).await {
            Ok(response) => response,
            Err(error) => {
                let error = transport_to_error(error);
                warn!(code = error.code(), "transport failure: {}", error.message());
                return Err(error);
            }
        };
        let latency_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);

        debug!(
            status = response.status,
            bytes = response.body.len(),
            latency_ms,
            "received provider response"
        );

        if let Err(error) = classify_status(response.status) {
            warn!(
                code = error.code(),
                status = response.status,
                "provider returned an error status"
            );
            return Err(error);
        }

        parse_payables(&response.body, query).map_err(|error| {
            warn!(code = error.code(), "unusable provider payload: {}", error.message());
            error.with_status(response.status)
        })
    }
}

/// Map a non-2xx HTTP status onto the error taxonomy.
pub fn classify_status(status: u16) -> Result<(), FetchError> {
    match status {
        200..=299 => Ok(()),
        401 | 403 => Err(FetchError::auth(status)),
        404 => Err(FetchError::not_found(format!(
            "data provider has no such company (status {status})"
        ))
        .with_status(status)),
        500..=599 => Err(FetchError::server(status)),
        _ => Err(FetchError::rejected(
            format!("data provider rejected the request with status {status}"),
            Some(status),
        )),
    }
}

fn transport_to_error(error: HttpError) -> FetchError {
    match error.kind() {
        HttpErrorKind::Timeout => FetchError::connectivity(format!("timed out: {}", error.message())),
        HttpErrorKind::Connect | HttpErrorKind::Other => FetchError::connectivity(error.message()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FetchErrorKind;

    #[test]
    fn classifies_statuses() {
        assert!(classify_status(200).is_ok());
        assert_eq!(classify_status(401).map_err(|e| e.kind()), Err(FetchErrorKind::Auth));
        assert_eq!(classify_status(403).map_err(|e| e.kind()), Err(FetchErrorKind::Auth));
        assert_eq!(classify_status(404).map_err(|e| e.kind()), Err(FetchErrorKind::NotFound));
        assert_eq!(classify_status(500).map_err(|e| e.kind()), Err(FetchErrorKind::Server));
        assert_eq!(classify_status(503).map_err(|e| e.kind()), Err(FetchErrorKind::Server));
        assert_eq!(classify_status(429).map_err(|e| e.kind()), Err(FetchErrorKind::Rejected));
        assert_eq!(classify_status(302).map_err(|e| e.kind()), Err(FetchErrorKind::Rejected));
    }

    #[test]
    fn request_targets_company_endpoint_with_key_header() {
        let config = ClientConfig::new("http://127.0.0.1:9", 1_500).expect("valid config");
        let client = PayablesClient::new(config);
        let query = Query::new("m&m", None, "2024", Some("secret")).expect("valid query");

        let request = client.request_for(&query);
        assert_eq!(
            request.url,
            "http://127.0.0.1:9/server/company/M%26M.NS?year=2024"
        );
        assert_eq!(
            request.headers.get("x-api-key").map(String::as_str),
            Some("secret")
        );
        assert!(!request.url.contains("secret"));
        assert_eq!(request.timeout_ms, 1_500);
    }

    #[test]
    fn transport_errors_become_connectivity() {
        let error = transport_to_error(HttpError::timeout("deadline elapsed"));
        assert_eq!(error.kind(), FetchErrorKind::Connectivity);
        assert!(error.message().contains("timed out"));

        let error = transport_to_error(HttpError::connect("refused"));
        assert_eq!(error.kind(), FetchErrorKind::Connectivity);
    }
}
