//! Error types for the Steam Web API client.
//!
//! # Design
//! Every failure a call can hit maps to exactly one `ApiError` variant, so
//! callers can tell apart problems caught before the network round-trip
//! (`AuthenticationRequired`, `Validation`, `UnsupportedFormat`) from the ones
//! that happen after it (`Transport`, `HttpStatus`, `Decode`).

use crate::endpoint::EndpointDescriptor;
use crate::format::OutputFormat;

/// Errors returned by `SteamClient` operations.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The endpoint needs an API key and the client was built without one.
    #[error("an API key is required to call {endpoint}")]
    AuthenticationRequired { endpoint: EndpointDescriptor },

    /// A parameter broke a documented constraint.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// A structured query parameter could not be encoded as JSON.
    #[error("failed to encode input_json: {0}")]
    Serialization(#[source] serde_json::Error),

    /// The transport could not complete the request.
    #[error("transport failed: {0}")]
    Transport(#[from] TransportError),

    /// The server answered with a non-2xx status. The body is kept as-is.
    #[error("HTTP {status}: {body}")]
    HttpStatus { status: u16, body: String },

    /// The body did not parse as the requested format.
    #[error("failed to decode {format} response: {source}")]
    Decode {
        format: OutputFormat,
        #[source]
        source: DecodeError,
    },

    /// No encode or decode rule exists for the named format.
    #[error("unsupported format requested: {0}")]
    UnsupportedFormat(String),
}

/// Parameter constraint violations, detected before any request is sent.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("too many values for `{key}`: got {len}, at most {max} are allowed")]
    TooMany {
        key: &'static str,
        len: usize,
        max: usize,
    },
    #[error("`{key}` needs at least one value")]
    Empty { key: &'static str },
}

/// The underlying parser failure for a [`ApiError::Decode`].
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Xml(#[from] quick_xml::de::DeError),
}

/// An opaque failure reported by a [`Transport`](crate::http::Transport).
#[derive(Debug, thiserror::Error)]
#[error(transparent)]
pub struct TransportError(Box<dyn std::error::Error + Send + Sync>);

impl TransportError {
    pub fn new<E>(error: E) -> Self
    where
        E: Into<Box<dyn std::error::Error + Send + Sync>>,
    {
        Self(error.into())
    }

    /// Consume the wrapper and return the transport's own error.
    pub fn into_inner(self) -> Box<dyn std::error::Error + Send + Sync> {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::endpoint::GET_FRIEND_LIST;

    #[test]
    fn authentication_error_names_the_endpoint() {
        let err = ApiError::AuthenticationRequired {
            endpoint: GET_FRIEND_LIST,
        };
        assert_eq!(
            err.to_string(),
            "an API key is required to call ISteamUser/GetFriendList/v1"
        );
    }

    #[test]
    fn unsupported_format_names_the_format() {
        let err = ApiError::UnsupportedFormat("vdf".to_string());
        assert_eq!(err.to_string(), "unsupported format requested: vdf");
    }

    #[test]
    fn validation_error_is_transparent() {
        let err = ApiError::from(ValidationError::TooMany {
            key: "steamids",
            len: 101,
            max: 100,
        });
        assert_eq!(
            err.to_string(),
            "too many values for `steamids`: got 101, at most 100 are allowed"
        );
    }

    #[test]
    fn empty_list_names_the_parameter() {
        let err = ApiError::from(ValidationError::Empty { key: "steamids" });
        assert_eq!(err.to_string(), "`steamids` needs at least one value");
    }

    #[test]
    fn transport_error_keeps_the_message() {
        let err = ApiError::from(TransportError::new("connection refused"));
        assert_eq!(err.to_string(), "transport failed: connection refused");
    }
}
