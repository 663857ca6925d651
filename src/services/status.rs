// SPDX-License-Identifier: BSD-3-Clause
// Copyright (c) 2026 Aleksandr Ptakhin

use crate::models::status::HealthResponse;
use crate::models::version::VersionInfo;
use anyhow::{bail, Context, Result};
use reqwest::StatusCode;
use std::time::Duration;
use url::Url;

/// Per-request timeout for all probes against the status service.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(5);

/// Thin HTTP client for the status service's `/api/*` endpoints.
///
/// A non-200 response and a transport error are both surfaced as errors;
/// callers fold either case into an "unhealthy" verdict.
pub struct StatusClient {
    http: reqwest::Client,
    base_url: Url,
}

impl StatusClient {
    /// Create a client for the service at `base_url` (e.g. "http://localhost:5000").
    pub fn new(base_url: &str) -> Result<Self> {
        let base_url = Url::parse(base_url)
            .with_context(|| format!("Invalid status service URL: {}", base_url))?;

        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self { http, base_url })
    }

    /// The base URL this client probes.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// `GET /api/health`
    pub async fn fetch_health(&self) -> Result<HealthResponse> {
        let url = self.endpoint("/api/health")?;
        let response = self
            .http
            .get(url)
            .send()
            .await
            .context("Failed to reach the health endpoint")?;

        if response.status() != StatusCode::OK {
            bail!("Health endpoint returned status {}", response.status());
        }

        response
            .json::<HealthResponse>()
            .await
            .context("Health endpoint returned malformed JSON")
    }

    /// `GET /api/version`
    pub async fn fetch_version(&self) -> Result<VersionInfo> {
        let url = self.endpoint("/api/version")?;
        let response = self
            .http
            .get(url)
            .send()
            .await
            .context("Failed to reach the version endpoint")?;

        if response.status() != StatusCode::OK {
            bail!("Version endpoint returned status {}", response.status());
        }

        response
            .json::<VersionInfo>()
            .await
            .context("Version endpoint returned malformed JSON")
    }

    fn endpoint(&self, path: &str) -> Result<Url> {
        self.base_url
            .join(path)
            .with_context(|| format!("Failed to build URL for {}", path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_invalid_base_url() {
        assert!(StatusClient::new("not-a-valid-url").is_err());
    }

    #[test]
    fn test_endpoint_joins_api_paths() {
        let client = StatusClient::new("http://localhost:5000").unwrap();
        let url = client.endpoint("/api/health").unwrap();
        assert_eq!(url.as_str(), "http://localhost:5000/api/health");
    }

    #[tokio::test]
    async fn test_fetch_health_fails_when_unreachable() {
        // Port 9 (discard) is not expected to speak HTTP anywhere we run tests
        let client = StatusClient::new("http://127.0.0.1:9").unwrap();
        assert!(client.fetch_health().await.is_err());
    }
}
