//! Error types for splash.
//!
//! Two families live here:
//! - [`Error`]: everything that can go wrong while composing, dispatching or
//!   decoding a call. Only [`Error::Decoding`] is recoverable; the response
//!   classifier folds it into an [`ApiResult`](crate::ApiResult).
//! - [`ErrorClassifier`]: maps the JSON body of a non-2xx response to an
//!   [`ErrorSource`] and a list of human-readable [`Errors`].

use derive_more::{Display, Error, From};
use serde_json::Value;

/// Ordered list of human-readable error messages.
///
/// The order is the discovery order in the raw error payload.
pub type Errors = Vec<String>;

/// Message used when a non-2xx body does not follow the `{"errors": [...]}` shape.
pub const UNRECOGNISED_ERROR_BODY: &str = "Responded with a status code outside the 2xx range, and the response body is not recognisable.";

// ============================================================================
// Error Source
// ============================================================================

/// Origin of an error result.
///
/// Callers use it to decide how to handle an [`ApiResult::Error`](crate::ApiResult::Error).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum ErrorSource {
    /// The API described the failure in its error payload.
    #[display("api")]
    Api,
    /// The response body could not be decoded as expected.
    #[display("decoding")]
    Decoding,
}

impl serde::Serialize for ErrorSource {
    fn serialize<S: serde::Serializer>(
        &self,
        serializer: S,
    ) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

// ============================================================================
// Error Classifier Trait
// ============================================================================

/// Trait for classifying the decoded body of a non-2xx response.
///
/// The classifier receives the HTTP status code and the JSON body, and returns
/// where the failure comes from together with the messages to surface.
///
/// # Example
///
/// ```
/// use splash_core::{ErrorClassifier, ErrorSource, Errors};
/// use serde_json::Value;
///
/// struct StatusOnly;
///
/// impl ErrorClassifier for StatusOnly {
///     fn classify(&self, status: u16, _body: &Value) -> (ErrorSource, Errors) {
///         (ErrorSource::Api, vec![format!("status {status}")])
///     }
/// }
///
/// let (source, errors) = StatusOnly.classify(404, &Value::Null);
/// assert_eq!(source, ErrorSource::Api);
/// assert_eq!(errors, vec!["status 404".to_string()]);
/// ```
pub trait ErrorClassifier: Send + Sync + 'static {
    /// Classify a non-2xx response body.
    fn classify(&self, status: u16, body: &Value) -> (ErrorSource, Errors);
}

/// Default classifier for payloads shaped like `{"errors": ["...", ...]}`.
///
/// Any other body is reported as a [`ErrorSource::Decoding`] failure with
/// [`UNRECOGNISED_ERROR_BODY`].
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultErrorClassifier;

impl ErrorClassifier for DefaultErrorClassifier {
    fn classify(&self, _status: u16, body: &Value) -> (ErrorSource, Errors) {
        let errors = body
            .get("errors")
            .and_then(Value::as_array)
            .and_then(|items| {
                items
                    .iter()
                    .map(|item| item.as_str().map(ToString::to_string))
                    .collect::<Option<Errors>>()
            });

        match errors {
            Some(errors) => (ErrorSource::Api, errors),
            None => (
                ErrorSource::Decoding,
                vec![UNRECOGNISED_ERROR_BODY.to_string()],
            ),
        }
    }
}

// ============================================================================
// Error Type
// ============================================================================

/// Main error type for splash operations.
#[derive(Debug, Display, Error, From)]
pub enum Error {
    /// The response body could not be parsed or decoded.
    ///
    /// This is the only recoverable kind: the classifier turns it into an
    /// `ApiResult::Error` with [`ErrorSource::Decoding`].
    #[display("{_0}")]
    #[from(skip)]
    Decoding(#[error(not(source))] String),

    /// Network/connection errors.
    #[display("connection error: {_0}")]
    #[from(skip)]
    Connection(#[error(not(source))] String),

    /// TLS/SSL errors.
    #[display("TLS error: {_0}")]
    #[from(skip)]
    Tls(#[error(not(source))] String),

    /// Request timeout.
    #[display("request timeout")]
    #[from(skip)]
    Timeout,

    /// The request was cancelled through its signal.
    #[display("request aborted")]
    #[from(skip)]
    Aborted,

    /// Invalid request configuration.
    #[display("invalid request: {_0}")]
    #[from(skip)]
    InvalidRequest(#[error(not(source))] String),

    /// A response handler failed for a reason other than decoding.
    #[display("response handler failed: {_0}")]
    #[from(skip)]
    Handler(#[error(not(source))] String),

    /// JSON serialization error.
    #[display("JSON serialization error: {_0}")]
    #[from]
    JsonSerialization(serde_json::Error),

    /// Form URL-encoded serialization error.
    #[display("form serialization error: {_0}")]
    #[from]
    FormSerialization(serde_html_form::ser::Error),

    /// URL parsing error.
    #[display("invalid URL: {_0}")]
    #[from]
    InvalidUrl(url::ParseError),
}

/// Result type alias using [`crate::Error`].
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create a decoding error.
    #[must_use]
    pub fn decoding(message: impl Into<String>) -> Self {
        Self::Decoding(message.into())
    }

    /// Create a decoding error with the JSON path where decoding stopped.
    #[must_use]
    pub fn decoding_at(path: impl AsRef<str>, message: impl AsRef<str>) -> Self {
        let path = path.as_ref();
        if path.is_empty() || path == "." {
            Self::Decoding(message.as_ref().to_string())
        } else {
            Self::Decoding(format!("at '{path}': {}", message.as_ref()))
        }
    }

    /// Create a connection error.
    #[must_use]
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection(message.into())
    }

    /// Create a TLS error.
    #[must_use]
    pub fn tls(message: impl Into<String>) -> Self {
        Self::Tls(message.into())
    }

    /// Create an invalid request error.
    #[must_use]
    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::InvalidRequest(message.into())
    }

    /// Create a handler error.
    #[must_use]
    pub fn handler(message: impl Into<String>) -> Self {
        Self::Handler(message.into())
    }

    /// Returns `true` if this is a recoverable decoding error.
    #[must_use]
    pub const fn is_decoding(&self) -> bool {
        matches!(self, Self::Decoding(_))
    }

    /// Returns `true` if this is a timeout error.
    #[must_use]
    pub const fn is_timeout(&self) -> bool {
        matches!(self, Self::Timeout)
    }

    /// Returns `true` if the request was aborted.
    #[must_use]
    pub const fn is_aborted(&self) -> bool {
        matches!(self, Self::Aborted)
    }

    /// Returns `true` if this is a connection error.
    #[must_use]
    pub const fn is_connection(&self) -> bool {
        matches!(self, Self::Connection(_))
    }
}
