//! Error taxonomy for API requests and session persistence.
//!
//! DESIGN
//! ======
//! Every request resolves to a [`RequestOutcome`]. Failures are values, never
//! panics: pages turn them into a [`crate::Feedback`] line and move on. The
//! `Display` text of each variant is the exact message shown to the user.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use serde::Deserialize;

use crate::transport::ApiResponse;
use crate::validation::ValidationError;

/// Result of one user-triggered API call.
///
/// `Ok` is the success payload. `Err` carries either a client-side error
/// (validation, HTTP status, undecodable body) or a network failure; see
/// [`RequestError::is_network_failure`].
pub type RequestOutcome<T> = Result<T, RequestError>;

/// The API call a failure belongs to. Selects the user-facing wording.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    Login,
    Register,
    Profile,
    Users,
}

impl Action {
    /// Prefix used in every failure message for this action.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Login => "Login failed",
            Self::Register => "Registration failed",
            Self::Profile => "Failed to load profile data",
            Self::Users => "Failed to load users data",
        }
    }

    /// Whether this action is a form submission (`POST`).
    #[must_use]
    pub fn is_submit(self) -> bool {
        matches!(self, Self::Login | Self::Register)
    }

    /// Message for an error body that parsed but named no reason.
    #[must_use]
    pub fn fallback_message(self, status: u16) -> String {
        if self.is_submit() {
            format!("{} ({status})", self.label())
        } else {
            self.label().to_owned()
        }
    }
}

/// Why a request did not produce a payload.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RequestError {
    /// Rejected locally; no request was sent.
    #[error("{0}")]
    Validation(#[from] ValidationError),
    /// The endpoint refused the `POST`. The body is never read.
    #[error(
        "{}: Method not allowed (405). The server does not accept POST requests on this endpoint.",
        .action.label()
    )]
    MethodNotAllowed { action: Action },
    /// Any other non-2xx status, with the server's reason or a fallback.
    #[error("{message}")]
    Http { status: u16, message: String },
    /// 2xx status whose body did not match the expected shape.
    #[error("Unexpected response from server: {0}")]
    InvalidResponse(String),
    /// The configured API endpoint is unusable.
    #[error("Invalid API endpoint: {0}")]
    InvalidEndpoint(String),
    /// No response was received (DNS, refused connection, timeout).
    #[error("Could not connect to the server. Error: {0}")]
    Transport(String),
}

impl RequestError {
    /// HTTP status attached to this error, if a response was received.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::MethodNotAllowed { .. } => Some(405),
            Self::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// `true` for a 401, which invalidates the local session.
    #[must_use]
    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(401)
    }

    /// `true` when no response was received at all.
    #[must_use]
    pub fn is_network_failure(&self) -> bool {
        matches!(self, Self::Transport(_))
    }
}

impl From<ConfigError> for RequestError {
    fn from(error: ConfigError) -> Self {
        Self::InvalidEndpoint(error.to_string())
    }
}

/// Invalid API base configuration.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid base URL `{url}`: {reason}")]
    InvalidBaseUrl { url: String, reason: String },
}

/// Failure to persist the session.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SessionStoreError {
    #[error("session storage is unavailable")]
    Unavailable,
    #[error("failed to write session entry `{key}`: {reason}")]
    Write { key: String, reason: String },
    #[error("session file error: {0}")]
    Io(String),
}

/// JSON error body. Either field may carry the reason.
#[derive(Debug, Default, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    message: Option<String>,
}

impl ErrorBody {
    fn into_reason(self) -> Option<String> {
        self.error
            .filter(|value| !value.is_empty())
            .or(self.message.filter(|value| !value.is_empty()))
    }
}

/// Turn a non-2xx response into a [`RequestError`].
///
/// A 405 on a form submission short-circuits before the body is touched.
/// Otherwise the body is parsed as an [`ErrorBody`]; an unparseable body
/// falls back to the status line.
pub(crate) fn classify_failure(action: Action, response: &ApiResponse) -> RequestError {
    if response.status == 405 && action.is_submit() {
        return RequestError::MethodNotAllowed { action };
    }
    let message = match serde_json::from_str::<ErrorBody>(&response.body) {
        Ok(body) => body
            .into_reason()
            .unwrap_or_else(|| action.fallback_message(response.status)),
        Err(_) => format!(
            "{}: Server returned {} {}",
            action.label(),
            response.status,
            response.status_text
        )
        .trim_end()
        .to_owned(),
    };
    RequestError::Http { status: response.status, message }
}
