//! HTTP client for outbound provider requests

use crate::config::OutgoingSettings;
use anyhow::{Context, Result};
use reqwest::{Client, Response};
use serde::Serialize;
use std::time::Duration;

/// HTTP response from a provider request
#[derive(Debug)]
pub struct HttpResponse {
    /// HTTP status code
    pub status: u16,
    /// Response body as text
    pub text: String,
    /// Response URL (after redirects)
    pub url: String,
}

impl HttpResponse {
    /// Parse response as JSON
    pub fn json<T: serde::de::DeserializeOwned>(&self) -> Result<T> {
        Ok(serde_json::from_str(&self.text)?)
    }

    /// Check if response is successful (2xx)
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Turn a non-2xx response into an error carrying the status and body
    pub fn error_for_status(self) -> Result<Self> {
        if self.is_success() {
            Ok(self)
        } else {
            Err(anyhow::anyhow!(
                "HTTP status {} for url ({}): {}",
                self.status,
                self.url,
                self.text.trim()
            ))
        }
    }
}

/// HTTP client wrapper shared by all provider components
#[derive(Clone, Debug)]
pub struct HttpClient {
    client: Client,
    default_timeout: Duration,
    user_agent: String,
}

impl HttpClient {
    /// Create a new HTTP client with default settings
    pub fn new() -> Result<Self> {
        Self::with_settings(&OutgoingSettings::default())
    }

    /// Create a new HTTP client with custom settings. Fails when the timeout
    /// is negative, NaN or too large.
    pub fn with_settings(settings: &OutgoingSettings) -> Result<Self> {
        let timeout = Duration::try_from_secs_f64(settings.request_timeout).with_context(|| {
            format!("invalid request_timeout: {}", settings.request_timeout)
        })?;

        let client = Client::builder()
            .timeout(timeout)
            .pool_max_idle_per_host(settings.pool_maxsize)
            .gzip(true)
            .brotli(true)
            .build()?;

        Ok(Self {
            client,
            default_timeout: timeout,
            user_agent: format!("enterprise-assistant/{}", crate::VERSION),
        })
    }

    /// POST a JSON body with extra headers
    pub async fn post_json<B>(
        &self,
        url: &str,
        headers: &[(&str, &str)],
        body: &B,
    ) -> Result<HttpResponse>
    where
        B: Serialize + ?Sized,
    {
        let mut req_builder = self
            .client
            .post(url)
            .timeout(self.default_timeout)
            .header("User-Agent", &self.user_agent)
            .header("Accept", "application/json")
            .header("Content-Type", "application/json");

        for (key, value) in headers {
            req_builder = req_builder.header(*key, *value);
        }

        let response = req_builder.json(body).send().await?;

        Self::parse_response(response).await
    }

    /// Parse response into HttpResponse
    async fn parse_response(response: Response) -> Result<HttpResponse> {
        let status = response.status().as_u16();
        let url = response.url().to_string();
        let text = response.text().await?;

        Ok(HttpResponse { status, text, url })
    }

    /// Timeout applied to every request
    pub fn timeout(&self) -> Duration {
        self.default_timeout
    }

    /// Current user agent
    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }
}
