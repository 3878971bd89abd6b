//! Synchronous client core for the Steam Web API.
//!
//! # Overview
//! Turns typed parameter structs into versioned GET requests, sends them
//! through a pluggable [`Transport`], and decodes JSON or XML bodies into
//! typed results with the outer envelope removed.
//!
//! ```no_run
//! # #[cfg(feature = "ureq")]
//! # fn main() -> Result<(), steamapi_core::ApiError> {
//! use steamapi_core::{endpoints::GetNewsForApp, SteamClient, UreqTransport};
//!
//! let client = SteamClient::new(UreqTransport::new());
//! let news = client.get_news_for_app(&GetNewsForApp::new(440))?;
//! println!("{} posts", news.news_items.len());
//! # Ok(())
//! # }
//! # #[cfg(not(feature = "ureq"))]
//! # fn main() {}
//! ```
//!
//! # Design
//! - One generic executor, `SteamClient::call`, driven by the [`Endpoint`]
//!   trait. Each endpoint is a parameter struct with a `const` descriptor.
//! - The host-does-IO split is kept: `build_request` and `parse_response`
//!   never touch the network, so any HTTP stack can sit between them.
//! - Format branching happens only in [`decode`]; the format that picks the
//!   decoder is the same value sent as `format=` on the wire.
//! - The API key never reaches a log line or a `Debug` output.

pub mod client;
pub mod config;
pub mod decode;
pub mod endpoint;
pub mod endpoints;
pub mod error;
pub mod format;
pub mod http;
pub mod query;
pub mod types;

pub use client::SteamClient;
pub use config::ClientConfig;
pub use endpoint::{Auth, Endpoint, EndpointDescriptor, ALL_ENDPOINTS, STEAM_API_BASE_URL};
pub use error::{ApiError, DecodeError, TransportError, ValidationError};
pub use format::{Language, OutputFormat, Relationship};
pub use http::{HttpRequest, HttpResponse, Transport};
#[cfg(feature = "ureq")]
pub use http::UreqTransport;
pub use query::Query;
