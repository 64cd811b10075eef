//! Domainr status API client (served through RapidAPI)

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

use super::AvailabilityCheck;
use crate::error::{Result, SweepError};
use crate::types::AvailabilityResult;

/// Host header value expected by RapidAPI
pub const RAPIDAPI_HOST: &str = "domainr.p.rapidapi.com";

/// Only this summary means the domain can be registered
const AVAILABLE_SUMMARY: &str = "inactive";

/// HTTP client for `GET {endpoint}?domain=<domain>`
pub struct DomainrClient {
    client: Client,
    api_key: String,
    endpoint: String,
}

impl DomainrClient {
    /// Create a client.
    ///
    /// Without a `timeout` the request waits as long as reqwest's default.
    pub fn new(
        api_key: impl Into<String>,
        endpoint: impl Into<String>,
        timeout: Option<Duration>,
    ) -> Result<Self> {
        let api_key = api_key.into();
        if api_key.is_empty() {
            return Err(SweepError::credential("Domainr API key is required"));
        }

        let mut builder = Client::builder().user_agent(concat!("domain-sweep/", env!("CARGO_PKG_VERSION")));
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;

        Ok(Self {
            client,
            api_key,
            endpoint: endpoint.into(),
        })
    }

    /// Fetch the first status summary reported for `domain`
    async fn fetch_summary(&self, domain: &str) -> Result<String> {
        let response = self
            .client
            .get(&self.endpoint)
            .query(&[("domain", domain)])
            .header("x-rapidapi-key", &self.api_key)
            .header("x-rapidapi-host", RAPIDAPI_HOST)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let error_msg = match status.as_u16() {
                401 | 403 => format!("Authentication failed ({}). Check your RapidAPI key", status),
                429 => "Rate limit exceeded (429)".to_string(),
                500..=599 => format!("Status API server error ({})", status),
                _ => format!("Status API request failed ({})", status),
            };
            return Err(SweepError::network(
                error_msg,
                Some(status.as_u16()),
                Some(self.endpoint.clone()),
            ));
        }

        let text = response.text().await?;

        parse_summary(&text)
    }
}

#[async_trait]
impl AvailabilityCheck for DomainrClient {
    async fn check_availability(&self, domain: &str) -> AvailabilityResult {
        match self.fetch_summary(domain).await {
            Ok(summary) => {
                let result = judge_summary(domain, &summary);
                tracing::debug!(
                    domain = %domain,
                    summary = %summary,
                    status = %result.status,
                    checked_at = %result.checked_at,
                    "Domain check completed"
                );
                result
            }
            Err(e) => {
                let result = AvailabilityResult::error(domain, e.to_string());
                tracing::debug!(
                    domain = %domain,
                    error = %e,
                    checked_at = %result.checked_at,
                    "Domain check failed"
                );
                result
            }
        }
    }
}

/// Turn an API summary into a verdict: exactly "inactive" is available,
/// every other value (known or not) is taken.
pub fn judge_summary(domain: &str, summary: &str) -> AvailabilityResult {
    if summary == AVAILABLE_SUMMARY {
        AvailabilityResult::available(domain, summary)
    } else {
        AvailabilityResult::taken(domain, summary)
    }
}

/// Extract `status[0].summary` from a response body
pub fn parse_summary(body: &str) -> Result<String> {
    let response: StatusResponse = serde_json::from_str(body)?;

    response
        .status
        .into_iter()
        .next()
        .map(|entry| entry.summary)
        .ok_or_else(|| SweepError::parse("Response has an empty status list"))
}

// Status API structures
#[derive(Debug, Deserialize)]
struct StatusResponse {
    status: Vec<StatusEntry>,
}

#[derive(Debug, Deserialize)]
struct StatusEntry {
    summary: String,
}
