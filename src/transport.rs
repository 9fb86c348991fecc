//! Blocking HTTP transport for the iTunes web services.
//!
//! A transport performs a single GET against a fully assembled URL and hands
//! back the parsed JSON body. There are no retries and no caching; every call
//! is independent.

use serde_json::Value;
use thiserror::Error;
use url::Url;

/// Errors that can occur while talking to the remote service.
#[derive(Debug, Error)]
pub enum TransportError {
    /// The HTTP client could not be constructed
    #[error("Failed to build HTTP client: {0}")]
    ClientBuildFailed(#[source] reqwest::Error),

    /// The request could not be sent or the body could not be read
    #[error("Request to {url} failed: {source}")]
    RequestFailed {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The service answered with a non-success status code
    #[error("HTTP {status} {reason} from {url}")]
    HttpStatus {
        url: String,
        status: u16,
        reason: String,
    },

    /// The response body is not valid JSON
    #[error("Failed to parse response from {url}: {source}")]
    InvalidJson {
        url: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Something that can fetch a JSON document from a URL.
///
/// The crate ships [`HttpTransport`]; other implementations can be plugged
/// into [`crate::ItunesClient`] to redirect or record requests.
pub trait Transport {
    /// Performs a GET request and returns the parsed JSON body.
    ///
    /// # Errors
    ///
    /// Returns a [`TransportError`] on connection failures, non-2xx status
    /// codes, or bodies that are not valid JSON.
    fn get_json(&self, url: &Url) -> Result<Value, TransportError>;
}

impl<T> Transport for &T
where
    T: Transport + ?Sized,
{
    fn get_json(&self, url: &Url) -> Result<Value, TransportError> {
        (**self).get_json(url)
    }
}

/// Transport backed by a blocking `reqwest` client.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::blocking::Client,
}

impl HttpTransport {
    /// Creates a transport that sends the given `User-Agent` header.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError::ClientBuildFailed`] if the TLS backend or
    /// the client configuration cannot be initialized.
    pub fn new(user_agent: &str) -> Result<Self, TransportError> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(user_agent)
            .build()
            .map_err(TransportError::ClientBuildFailed)?;

        Ok(Self { client })
    }

    /// Wraps an already configured blocking client.
    pub fn from_client(client: reqwest::blocking::Client) -> Self {
        Self { client }
    }
}

impl Transport for HttpTransport {
    fn get_json(&self, url: &Url) -> Result<Value, TransportError> {
        let response = self
            .client
            .get(url.clone())
            .send()
            .map_err(|e| TransportError::RequestFailed {
                url: url.to_string(),
                source: e,
            })?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(url = %url, status = status.as_u16(), "iTunes request rejected");
            return Err(TransportError::HttpStatus {
                url: url.to_string(),
                status: status.as_u16(),
                reason: status.canonical_reason().unwrap_or("Unknown").to_string(),
            });
        }

        // Read first so a truncated body and a malformed body stay distinct.
        let body = response.text().map_err(|e| TransportError::RequestFailed {
            url: url.to_string(),
            source: e,
        })?;

        serde_json::from_str(&body).map_err(|e| TransportError::InvalidJson {
            url: url.to_string(),
            source: e,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    struct CountingTransport {
        calls: Cell<usize>,
    }

    impl Transport for CountingTransport {
        fn get_json(&self, _url: &Url) -> Result<Value, TransportError> {
            self.calls.set(self.calls.get() + 1);
            Ok(Value::Null)
        }
    }

    fn fetch_twice<T: Transport>(transport: T, url: &Url) {
        transport.get_json(url).unwrap();
        transport.get_json(url).unwrap();
    }

    #[test]
    fn test_reference_forwards_to_transport() {
        let transport = CountingTransport {
            calls: Cell::new(0),
        };
        let url = Url::parse("https://itunes.apple.com/search").unwrap();

        fetch_twice(&transport, &url);

        assert_eq!(transport.calls.get(), 2);
    }

    #[test]
    fn test_http_status_error_message() {
        let error = TransportError::HttpStatus {
            url: "https://itunes.apple.com/search?term=x".to_string(),
            status: 503,
            reason: "Service Unavailable".to_string(),
        };

        assert_eq!(
            error.to_string(),
            "HTTP 503 Service Unavailable from https://itunes.apple.com/search?term=x"
        );
    }

    #[test]
    fn test_http_transport_builds() {
        assert!(HttpTransport::new("itunes_search-test/0.0.0").is_ok());

        let client = reqwest::blocking::Client::new();
        let transport = HttpTransport::from_client(client);
        assert!(format!("{:?}", transport).starts_with("HttpTransport"));
    }
}
