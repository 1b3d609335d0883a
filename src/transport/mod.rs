//! Backend request/response plumbing.
//!
//! # Data Flow
//! ```text
//! handler
//!     → api.rs (typed request → JSON body)
//!     → Transport::post (one round trip, opaque)
//!     → api.rs (JSON payload → typed response)
//! ```
//!
//! # Design Decisions
//! - `Transport` is the only seam to the network; tests script it in memory
//! - Calls are never retried here; a failure ends the resolution
//! - Access levels are sent as request parameters and enforced by the server

pub mod api;
pub mod http;
pub mod types;

use futures_util::future::BoxFuture;
use serde_json::Value;
use std::fmt;
use thiserror::Error;

pub use api::IssuesApi;
pub use http::HttpTransport;

/// Backend operations issued by routes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    FindItem,
    LoadIssue,
    LoadComment,
    LoadFile,
}

impl Endpoint {
    pub fn path(self) -> &'static str {
        match self {
            Endpoint::FindItem => "issues/find",
            Endpoint::LoadIssue => "issues/load",
            Endpoint::LoadComment => "issues/comments/load",
            Endpoint::LoadFile => "issues/files/load",
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

/// Network-level failures. Never converted into route errors.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("Request to {endpoint} failed: {message}")]
    Request { endpoint: Endpoint, message: String },

    #[error("{endpoint} returned HTTP status {status}")]
    Status { endpoint: Endpoint, status: u16 },

    /// The server rejected the request (access denied, unknown item, ...).
    #[error("Server error {code}: {message}")]
    Api { code: i64, message: String },

    #[error("Failed to encode request for {endpoint}: {source}")]
    Encode {
        endpoint: Endpoint,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid response from {endpoint}: {source}")]
    Decode {
        endpoint: Endpoint,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid server URL: {0}")]
    Url(#[from] url::ParseError),

    #[error("Failed to build HTTP client: {0}")]
    Client(String),
}

/// A single request/response round trip to the backend.
pub trait Transport: Send + Sync {
    fn post(&self, endpoint: Endpoint, body: Value) -> BoxFuture<'_, Result<Value, TransportError>>;
}
