//! HTTP request/response values and the transport seam.
//!
//! # Design
//! Requests and responses are plain data. `SteamClient::build_request`
//! produces an [`HttpRequest`] and `SteamClient::parse_response` consumes an
//! [`HttpResponse`], so a caller can run the round-trip on any HTTP stack it
//! likes. [`Transport`] is the one place the client itself performs I/O; the
//! core never retries, pools or caches.
//!
//! Every Steam Web API call is a GET, so a request is fully described by its
//! URL.

use std::sync::Arc;

use crate::endpoint::EndpointDescriptor;
use crate::error::TransportError;

/// A GET request described as plain data.
///
/// The URL carries the API key when the client has one; do not log it.
#[derive(Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub endpoint: EndpointDescriptor,
    pub url: String,
}

impl std::fmt::Debug for HttpRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpRequest")
            .field("endpoint", &self.endpoint)
            .field("url", &"<redacted>")
            .finish()
    }
}

/// An HTTP response described as plain data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl HttpResponse {
    /// A response with no headers.
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            headers: Vec::new(),
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// First header named `name`, compared case-insensitively.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

/// Performs a GET and hands back the response, whatever its status.
///
/// Non-2xx statuses must be returned as `Ok`; only failures to obtain a
/// response at all are `Err`.
pub trait Transport {
    fn get(&self, url: &str) -> Result<HttpResponse, TransportError>;
}

impl<T: Transport + ?Sized> Transport for &T {
    fn get(&self, url: &str) -> Result<HttpResponse, TransportError> {
        (**self).get(url)
    }
}

impl<T: Transport + ?Sized> Transport for Box<T> {
    fn get(&self, url: &str) -> Result<HttpResponse, TransportError> {
        (**self).get(url)
    }
}

impl<T: Transport + ?Sized> Transport for Arc<T> {
    fn get(&self, url: &str) -> Result<HttpResponse, TransportError> {
        (**self).get(url)
    }
}

#[cfg(feature = "ureq")]
pub use self::ureq_transport::UreqTransport;

#[cfg(feature = "ureq")]
mod ureq_transport {
    use super::{HttpResponse, Transport};
    use crate::error::TransportError;

    /// Blocking transport backed by a `ureq::Agent`.
    ///
    /// The agent is configured with `http_status_as_error(false)` so 4xx/5xx
    /// responses come back as data and the client maps them itself.
    #[derive(Debug, Clone)]
    pub struct UreqTransport {
        agent: ureq::Agent,
    }

    impl UreqTransport {
        pub fn new() -> Self {
            let agent = ureq::Agent::config_builder()
                .http_status_as_error(false)
                .build()
                .new_agent();
            Self { agent }
        }

        /// Use a caller-configured agent. It must not turn HTTP statuses into
        /// errors.
        pub fn with_agent(agent: ureq::Agent) -> Self {
            Self { agent }
        }
    }

    impl Default for UreqTransport {
        fn default() -> Self {
            Self::new()
        }
    }

    impl Transport for UreqTransport {
        fn get(&self, url: &str) -> Result<HttpResponse, TransportError> {
            let mut response = self.agent.get(url).call().map_err(TransportError::new)?;
            let status = response.status().as_u16();
            let headers = response
                .headers()
                .iter()
                .filter_map(|(name, value)| {
                    value
                        .to_str()
                        .ok()
                        .map(|value| (name.as_str().to_string(), value.to_string()))
                })
                .collect();
            let body = response
                .body_mut()
                .read_to_string()
                .map_err(TransportError::new)?;
            Ok(HttpResponse {
                status,
                headers,
                body,
            })
        }
    }
}
