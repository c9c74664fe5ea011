//! Body serialization and JSON decoding.

use bytes::Bytes;
use serde_json::Value;

use crate::{Error, Response, Result};

/// Message used when a response does not advertise a JSON content type.
pub const EXPECTED_JSON_RESPONSE: &str = "expected JSON response from server.";

/// Message used when a JSON response body cannot be parsed.
pub const UNPARSABLE_JSON_RESPONSE: &str = "unable to parse JSON response.";

/// Content type for request bodies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContentType {
    /// JSON content type (`application/json`).
    Json,
    /// Form URL-encoded content type (`application/x-www-form-urlencoded`).
    FormUrlEncoded,
}

impl ContentType {
    /// Get the MIME type string.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Json => "application/json",
            Self::FormUrlEncoded => "application/x-www-form-urlencoded",
        }
    }
}

impl std::fmt::Display for ContentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Serialize a value to JSON bytes.
///
/// # Example
///
/// ```
/// use splash_core::to_json;
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct Collection { title: String }
///
/// let bytes = to_json(&Collection { title: "Dogs".to_string() }).expect("serialize");
/// assert_eq!(bytes.as_ref(), br#"{"title":"Dogs"}"#);
/// ```
pub fn to_json<T: serde::Serialize>(value: &T) -> Result<Bytes> {
    serde_json::to_vec(value)
        .map(Bytes::from)
        .map_err(Into::into)
}

/// Serialize a value to form URL-encoded bytes.
///
/// `Vec<T>` fields become repeated keys (`tags=a&tags=b`).
pub fn to_form<T: serde::Serialize>(value: &T) -> Result<Bytes> {
    serde_html_form::to_string(value)
        .map(|s| Bytes::from(s.into_bytes()))
        .map_err(Into::into)
}

/// Deserialize JSON bytes to a value with path-aware error messages.
///
/// Any failure is a recoverable [`Error::Decoding`].
///
/// # Example
///
/// ```
/// use splash_core::from_json;
/// use serde::Deserialize;
///
/// #[derive(Debug, PartialEq, Deserialize)]
/// struct Photo { id: String }
///
/// let photo: Photo = from_json(br#"{"id":"Dwu85P9SOIk"}"#).expect("deserialize");
/// assert_eq!(photo, Photo { id: "Dwu85P9SOIk".to_string() });
/// ```
pub fn from_json<T: serde::de::DeserializeOwned>(bytes: &[u8]) -> Result<T> {
    let mut deserializer = serde_json::Deserializer::from_slice(bytes);
    serde_path_to_error::deserialize(&mut deserializer)
        .map_err(|e| Error::decoding_at(e.path().to_string(), e.inner().to_string()))
}

/// Deserialize an already parsed JSON value, with path-aware error messages.
pub fn from_json_value<T: serde::de::DeserializeOwned>(value: Value) -> Result<T> {
    serde_path_to_error::deserialize(value)
        .map_err(|e| Error::decoding_at(e.path().to_string(), e.inner().to_string()))
}

/// Returns `true` if the response advertises a JSON body.
#[must_use]
pub fn is_json_response(response: &Response) -> bool {
    response.content_type().is_some_and(|content_type| {
        content_type
            .trim_start()
            .to_ascii_lowercase()
            .starts_with(ContentType::Json.as_str())
    })
}

/// Read the response body as untyped JSON.
///
/// Fails with [`Error::Decoding`] when the response is not advertised as JSON
/// or when the body (including an empty one) is not valid JSON.
pub fn get_json_response(response: &Response) -> Result<Value> {
    if !is_json_response(response) {
        return Err(Error::decoding(EXPECTED_JSON_RESPONSE));
    }

    serde_json::from_slice(response.body()).map_err(|_| Error::decoding(UNPARSABLE_JSON_RESPONSE))
}
