//! Uniform result of an API call.

use serde::Serialize;

use crate::{ErrorSource, Errors};

/// Outcome of a call that reached the API.
///
/// `status` is always the literal HTTP status of the underlying response,
/// including when decoding failed. Transport failures and other unexpected
/// errors are not represented here: they surface as [`crate::Error`].
///
/// Serializes as `{"type": "success", ...}` / `{"type": "error", ...}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ApiResult<T> {
    /// 2xx response whose body was decoded.
    Success {
        /// HTTP status code.
        status: u16,
        /// Decoded body.
        response: T,
    },
    /// Non-2xx response, or a body that could not be decoded.
    Error {
        /// HTTP status code.
        status: u16,
        /// Where the error comes from.
        source: ErrorSource,
        /// Messages in discovery order.
        errors: Errors,
    },
}

impl<T> ApiResult<T> {
    /// HTTP status code.
    #[must_use]
    pub const fn status(&self) -> u16 {
        match self {
            Self::Success { status, .. } | Self::Error { status, .. } => *status,
        }
    }

    /// Returns `true` for [`ApiResult::Success`].
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    /// Decoded body, if successful.
    #[must_use]
    pub const fn response(&self) -> Option<&T> {
        match self {
            Self::Success { response, .. } => Some(response),
            Self::Error { .. } => None,
        }
    }

    /// Error messages, if not successful.
    #[must_use]
    pub fn errors(&self) -> Option<&[String]> {
        match self {
            Self::Success { .. } => None,
            Self::Error { errors, .. } => Some(errors),
        }
    }

    /// Error source, if not successful.
    #[must_use]
    pub const fn source(&self) -> Option<ErrorSource> {
        match self {
            Self::Success { .. } => None,
            Self::Error { source, .. } => Some(*source),
        }
    }

    /// Transform the decoded body.
    pub fn map<U, F>(self, f: F) -> ApiResult<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Success { status, response } => ApiResult::Success {
                status,
                response: f(response),
            },
            Self::Error {
                status,
                source,
                errors,
            } => ApiResult::Error {
                status,
                source,
                errors,
            },
        }
    }

    /// Convert into a standard [`Result`](std::result::Result), dropping the status of successes.
    pub fn into_result(self) -> std::result::Result<T, (ErrorSource, Errors)> {
        match self {
            Self::Success { response, .. } => Ok(response),
            Self::Error { source, errors, .. } => Err((source, errors)),
        }
    }
}
