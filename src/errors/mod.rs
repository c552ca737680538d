/// Structured error types for the market data layer
///
/// Every upstream failure surfaces as a `RequestError` tagged with a kind,
/// the optional HTTP status and a message that is safe to show to a user.
/// The highlights aggregation adds `HighlightsError` for the case where
/// every concurrent query failed.
use serde::Serialize;
use thiserror::Error;

// =============================================================================
// REQUEST ERRORS
// =============================================================================

/// Classification of a failed upstream request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum RequestErrorKind {
    /// Upstream did not answer before the configured deadline
    Timeout,
    /// Upstream throttled us (HTTP 429)
    RateLimited,
    /// Resource does not exist (HTTP 404)
    NotFound,
    /// Upstream internal failure (HTTP 500)
    ServerError,
    /// Transport-level failure (DNS, refused connection, reset, unreadable body)
    NetworkError,
    /// Any other non-success status or unusable payload
    ApiError,
}

impl RequestErrorKind {
    /// Stable machine-readable code
    pub fn code(&self) -> &'static str {
        match self {
            RequestErrorKind::Timeout => "TIMEOUT_ERROR",
            RequestErrorKind::RateLimited => "RATE_LIMIT",
            RequestErrorKind::NotFound => "NOT_FOUND",
            RequestErrorKind::ServerError => "SERVER_ERROR",
            RequestErrorKind::NetworkError => "NETWORK_ERROR",
            RequestErrorKind::ApiError => "API_ERROR",
        }
    }
}

impl std::fmt::Display for RequestErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A failed request, as seen by callers of the data layer
#[derive(Debug, Clone, PartialEq, Error, Serialize)]
#[error("{message}")]
pub struct RequestError {
    pub kind: RequestErrorKind,
    pub status: Option<u16>,
    pub message: String,
}

impl RequestError {
    pub fn new(kind: RequestErrorKind, status: Option<u16>, message: impl Into<String>) -> Self {
        Self {
            kind,
            status,
            message: message.into(),
        }
    }

    pub fn timeout(timeout_ms: u64) -> Self {
        Self::new(
            RequestErrorKind::Timeout,
            None,
            format!("Request timeout after {}ms. Please try again.", timeout_ms),
        )
    }

    pub fn network(message: impl Into<String>) -> Self {
        Self::new(RequestErrorKind::NetworkError, None, message)
    }

    pub fn api(status: Option<u16>, message: impl Into<String>) -> Self {
        Self::new(RequestErrorKind::ApiError, status, message)
    }

    /// Map a non-success HTTP status to its error kind.
    ///
    /// `upstream_message` is what the error body (or the reason phrase) said;
    /// it is only surfaced for statuses without a dedicated kind.
    pub fn from_status(status: u16, upstream_message: &str) -> Self {
        match status {
            429 => Self::new(
                RequestErrorKind::RateLimited,
                Some(status),
                "Rate limit exceeded. Please try again later.",
            ),
            404 => Self::new(
                RequestErrorKind::NotFound,
                Some(status),
                "Requested resource not found.",
            ),
            500 => Self::new(
                RequestErrorKind::ServerError,
                Some(status),
                "Internal server error. Please try again later.",
            ),
            _ => Self::api(Some(status), upstream_message),
        }
    }

    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    /// Whether a manual "try again" has a reasonable chance of succeeding
    pub fn is_retryable(&self) -> bool {
        matches!(
            self.kind,
            RequestErrorKind::Timeout
                | RequestErrorKind::RateLimited
                | RequestErrorKind::ServerError
                | RequestErrorKind::NetworkError
        )
    }
}

// =============================================================================
// HIGHLIGHTS ERRORS
// =============================================================================

#[derive(Debug, Clone, Error)]
pub enum HighlightsError {
    /// Every highlight query failed; the data layer is effectively down
    #[error("All highlight requests failed")]
    AllFailed { errors: Vec<RequestError> },
}

impl HighlightsError {
    pub fn errors(&self) -> &[RequestError] {
        match self {
            HighlightsError::AllFailed { errors } => errors,
        }
    }
}
