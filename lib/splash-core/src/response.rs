//! Raw HTTP response returned by the transport.
//!
//! The body is fully buffered; decoding it is the job of a
//! [`HandleResponse`](crate::HandleResponse) or of [`get_json_response`](crate::get_json_response).

use bytes::Bytes;

use crate::Headers;

/// HTTP response with status, headers, and buffered body.
#[derive(Debug, Clone)]
pub struct Response {
    status: u16,
    headers: Headers,
    body: Bytes,
}

impl Response {
    /// Creates a new response.
    #[must_use]
    pub fn new(status: u16, headers: Headers, body: impl Into<Bytes>) -> Self {
        Self {
            status,
            headers,
            body: body.into(),
        }
    }

    /// HTTP status code.
    #[must_use]
    pub const fn status(&self) -> u16 {
        self.status
    }

    /// Response headers.
    #[must_use]
    pub fn headers(&self) -> &Headers {
        &self.headers
    }

    /// Single header value by name (case-insensitive).
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name)
    }

    /// `Content-Type` header, if any.
    #[must_use]
    pub fn content_type(&self) -> Option<&str> {
        self.header("content-type")
    }

    /// Response body.
    #[must_use]
    pub const fn body(&self) -> &Bytes {
        &self.body
    }

    /// Consume into body.
    #[must_use]
    pub fn into_body(self) -> Bytes {
        self.body
    }

    /// Status is 2xx, the classifier's notion of `ok`.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.status >= 200 && self.status < 300
    }

    /// Status is 4xx.
    #[must_use]
    pub const fn is_client_error(&self) -> bool {
        self.status >= 400 && self.status < 500
    }

    /// Status is 5xx.
    #[must_use]
    pub const fn is_server_error(&self) -> bool {
        self.status >= 500 && self.status < 600
    }

    /// Body as text, lossily decoded.
    #[must_use]
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn response_basic() {
        let headers: Headers = [("Content-Type", "application/json")].into_iter().collect();
        let response = Response::new(200, headers, r#"{"id":1}"#);

        assert_eq!(response.status(), 200);
        assert_eq!(response.content_type(), Some("application/json"));
        assert!(response.is_ok());
        assert!(!response.is_client_error());
        assert_eq!(response.text(), r#"{"id":1}"#);
    }

    #[test]
    fn response_status_checks() {
        assert!(!Response::new(304, Headers::new(), Bytes::new()).is_ok());
        assert!(Response::new(404, Headers::new(), Bytes::new()).is_client_error());
        assert!(Response::new(503, Headers::new(), Bytes::new()).is_server_error());
        assert!(Response::new(299, Headers::new(), Bytes::new()).is_ok());
    }
}
