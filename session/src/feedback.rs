//! User-visible status line: a message and its severity.

use crate::error::RequestError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Severity {
    Error,
    Success,
}

impl Severity {
    /// CSS color for the message element.
    #[must_use]
    pub fn css_color(self) -> &'static str {
        match self {
            Self::Error => "var(--error-color)",
            Self::Success => "var(--success-color)",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Feedback {
    pub message: String,
    pub severity: Severity,
}

impl Feedback {
    pub fn error(message: impl Into<String>) -> Self {
        Self { message: message.into(), severity: Severity::Error }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self { message: message.into(), severity: Severity::Success }
    }

    #[must_use]
    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

impl From<&RequestError> for Feedback {
    fn from(error: &RequestError) -> Self {
        Self::error(error.to_string())
    }
}
