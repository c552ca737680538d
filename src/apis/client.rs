/// Base HTTP client for the upstream market API
///
/// Builds request URLs, attaches the API key, enforces a hard deadline and
/// classifies every outcome into a JSON value or a typed `RequestError`.
use crate::config::Config;
use crate::constants::{DEMO_API_KEY_HEADER, PRO_API_KEY_HEADER};
use crate::errors::{RequestError, RequestErrorKind};
use crate::logger::{self, LogTag};
use anyhow::{Context, Result};
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;
use url::Url;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HttpMethod {
    #[default]
    Get,
    Post,
    Put,
    Delete,
}

impl HttpMethod {
    fn as_reqwest(&self) -> reqwest::Method {
        match self {
            HttpMethod::Get => reqwest::Method::GET,
            HttpMethod::Post => reqwest::Method::POST,
            HttpMethod::Put => reqwest::Method::PUT,
            HttpMethod::Delete => reqwest::Method::DELETE,
        }
    }
}

impl std::fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
        };
        write!(f, "{}", name)
    }
}

/// Method, query string and body of a single request
///
/// Query parameters keep their insertion order; `None` values are dropped
/// when the URL is built.
#[derive(Debug, Clone, Default)]
pub struct RequestOptions {
    pub method: HttpMethod,
    pub query: Vec<(String, Option<String>)>,
    pub body: Option<Value>,
}

impl RequestOptions {
    pub fn get() -> Self {
        Self::default()
    }

    pub fn post(body: Value) -> Self {
        Self {
            method: HttpMethod::Post,
            body: Some(body),
            ..Self::default()
        }
    }

    pub fn put(body: Value) -> Self {
        Self {
            method: HttpMethod::Put,
            body: Some(body),
            ..Self::default()
        }
    }

    pub fn delete() -> Self {
        Self {
            method: HttpMethod::Delete,
            ..Self::default()
        }
    }

    pub fn param(self, key: &str, value: impl ToString) -> Self {
        self.opt_param(key, Some(value))
    }

    pub fn opt_param<T: ToString>(mut self, key: &str, value: Option<T>) -> Self {
        self.query
            .push((key.to_string(), value.map(|v| v.to_string())));
        self
    }
}

/// HTTP client wrapper with timeout and error classification
pub struct HttpClient {
    client: Client,
    base_url: String,
    api_key: Option<String>,
    timeout: Duration,
}

impl HttpClient {
    pub fn new(base_url: &str, api_key: Option<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
            timeout,
        })
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(
            &config.base_url,
            config.api_key.clone(),
            config.request_timeout(),
        )
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Header carrying the API key; the pro host uses its own header name
    pub fn auth_header(&self) -> &'static str {
        if self.base_url.contains("pro-api.") {
            PRO_API_KEY_HEADER
        } else {
            DEMO_API_KEY_HEADER
        }
    }

    /// Join base URL and path, then append the present query parameters
    pub fn build_url(&self, path: &str, query: &[(String, Option<String>)]) -> Result<Url, RequestError> {
        let raw = if path.starts_with("http://") || path.starts_with("https://") {
            path.to_string()
        } else if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        };

        let mut url = Url::parse(&raw)
            .map_err(|e| RequestError::api(None, format!("Invalid request URL {}: {}", raw, e)))?;

        let present: Vec<(&str, &str)> = query
            .iter()
            .filter_map(|(key, value)| value.as_deref().map(|v| (key.as_str(), v)))
            .collect();
        if !present.is_empty() {
            let mut pairs = url.query_pairs_mut();
            for (key, value) in present {
                pairs.append_pair(key, value);
            }
        }

        Ok(url)
    }

    /// Execute a request and return the JSON body verbatim
    pub async fn execute(&self, path: &str, options: RequestOptions) -> Result<Value, RequestError> {
        let url = self.build_url(path, &options.query)?;
        let method = options.method;

        logger::debug(LogTag::Api, &format!("API Request: {} {}", method, url));

        let mut builder = self
            .client
            .request(method.as_reqwest(), url.clone())
            .header(CONTENT_TYPE, "application/json")
            .header(ACCEPT, "application/json");
        if let Some(key) = &self.api_key {
            builder = builder.header(self.auth_header(), key.as_str());
        }
        if let Some(body) = &options.body {
            builder = builder.json(body);
        }

        // Dropping the send future on expiry cancels the in-flight request
        let result = match tokio::time::timeout(self.timeout, self.send(builder, &url)).await {
            Ok(result) => result,
            Err(_) => Err(RequestError::timeout(self.timeout.as_millis() as u64)),
        };

        if let Err(err) = &result {
            logger::warning(
                LogTag::Api,
                &format!("{} {} failed [{}]: {}", method, url, err.code(), err),
            );
        }
        result
    }

    async fn send(&self, builder: reqwest::RequestBuilder, url: &Url) -> Result<Value, RequestError> {
        let response = builder
            .send()
            .await
            .map_err(|e| self.classify_transport_error(e))?;
        let status = response.status();

        logger::debug(
            LogTag::Api,
            &format!("API Response: {} {}", status.as_u16(), url),
        );

        let body = response
            .bytes()
            .await
            .map_err(|e| self.classify_transport_error(e))?;

        if !status.is_success() {
            let message = extract_error_message(&body).unwrap_or_else(|| {
                status
                    .canonical_reason()
                    .unwrap_or("Unknown error")
                    .to_string()
            });
            return Err(RequestError::from_status(status.as_u16(), &message));
        }

        serde_json::from_slice(&body).map_err(|e| {
            RequestError::new(
                RequestErrorKind::NetworkError,
                Some(status.as_u16()),
                format!("Invalid JSON response: {}", e),
            )
        })
    }

    fn classify_transport_error(&self, err: reqwest::Error) -> RequestError {
        if err.is_timeout() {
            return RequestError::timeout(self.timeout.as_millis() as u64);
        }
        logger::debug(LogTag::Api, &format!("Transport failure: {}", err));
        RequestError::network("Network error. Please check your connection.")
    }
}

/// Pull a human-readable message out of an upstream error body
fn extract_error_message(body: &[u8]) -> Option<String> {
    let value: Value = serde_json::from_slice(body).ok()?;

    let candidates = [
        value.get("error"),
        value.get("message"),
        value.get("status").and_then(|s| s.get("error_message")),
    ];

    let message = candidates
        .into_iter()
        .flatten()
        .filter_map(Value::as_str)
        .map(str::trim)
        .find(|msg| !msg.is_empty())
        .map(str::to_string);
    message
}
