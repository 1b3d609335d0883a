//! Route and resolution error types.
//!
//! # Taxonomy
//! - Authorization failures: `Route(LoginRequired)`, raised before any I/O
//! - Resource-state failures: `Route(UnknownDescription | DescriptionAlreadyExists | UnknownType)`
//! - Transport failures: passed through untouched as `Transport(..)`
//! - Resolver failures: no match, unknown route name, malformed parameter

use serde::ser::{Serialize, SerializeStruct, Serializer};
use std::fmt;
use thiserror::Error;

use crate::transport::TransportError;

/// Reason tag carried by every [`RouteError`].
pub const API_ERROR_REASON: &str = "APIError";

/// Stable application-level error codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    /// The route requires an authenticated session.
    LoginRequired,
    /// The requested issue type is not known to the session.
    UnknownType,
    /// The issue already has a description.
    DescriptionAlreadyExists,
    /// The issue has no description.
    UnknownDescription,
}

impl ErrorCode {
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorCode::LoginRequired => "LoginRequired",
            ErrorCode::UnknownType => "UnknownType",
            ErrorCode::DescriptionAlreadyExists => "DescriptionAlreadyExists",
            ErrorCode::UnknownDescription => "UnknownDescription",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for ErrorCode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// An application-level routing failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Route error: {error_code}")]
pub struct RouteError {
    pub error_code: ErrorCode,
}

impl RouteError {
    pub fn new(error_code: ErrorCode) -> Self {
        Self { error_code }
    }

    /// Always [`API_ERROR_REASON`]; lets callers tell these apart from network failures.
    pub fn reason(&self) -> &'static str {
        API_ERROR_REASON
    }
}

impl From<ErrorCode> for RouteError {
    fn from(error_code: ErrorCode) -> Self {
        Self::new(error_code)
    }
}

impl Serialize for RouteError {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("RouteError", 2)?;
        state.serialize_field("reason", self.reason())?;
        state.serialize_field("errorCode", &self.error_code)?;
        state.end()
    }
}

/// Errors that abort a resolution.
#[derive(Debug, Error)]
pub enum ResolveError {
    /// Application-level failure with a stable error code.
    #[error(transparent)]
    Route(#[from] RouteError),

    /// Network or server failure, passed through unmodified.
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// No registered pattern matches the path.
    #[error("No route matches path '{0}'")]
    NotFound(String),

    /// A redirect or named dispatch referenced an unregistered route.
    #[error("Unknown route '{0}'")]
    UnknownRoute(String),

    /// A required parameter was not supplied.
    #[error("Missing parameter '{0}'")]
    MissingParameter(String),

    /// A parameter could not be parsed as an identifier.
    #[error("Invalid value '{value}' for parameter '{name}'")]
    InvalidParameter { name: String, value: String },

    /// Redirect chain exceeded the configured depth.
    #[error("Redirect limit of {0} exceeded")]
    TooManyRedirects(usize),

    /// The desktop attachment bridge failed.
    #[error("Attachment lookup failed: {0}")]
    Attachment(#[from] std::io::Error),
}

impl ResolveError {
    /// The application error code, if this is a [`RouteError`].
    pub fn error_code(&self) -> Option<ErrorCode> {
        match self {
            ResolveError::Route(e) => Some(e.error_code),
            _ => None,
        }
    }

    /// Short label used for metrics.
    pub fn kind(&self) -> &'static str {
        match self {
            ResolveError::Route(_) => "route_error",
            ResolveError::Transport(_) => "transport_error",
            ResolveError::NotFound(_) => "not_found",
            ResolveError::UnknownRoute(_) => "unknown_route",
            ResolveError::MissingParameter(_) | ResolveError::InvalidParameter { .. } => {
                "bad_parameter"
            }
            ResolveError::TooManyRedirects(_) => "too_many_redirects",
            ResolveError::Attachment(_) => "attachment_error",
        }
    }
}

impl From<ErrorCode> for ResolveError {
    fn from(code: ErrorCode) -> Self {
        ResolveError::Route(RouteError::new(code))
    }
}

/// Result type for route resolution.
pub type ResolveResult<T> = Result<T, ResolveError>;
