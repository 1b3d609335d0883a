//! Per-route authorization preconditions.
//!
//! Checked synchronously against the session snapshot before the handler
//! is invoked, so a failing gate never reaches the network.

use crate::outcome::{ErrorCode, RouteError};
use crate::session::Session;

/// Precondition a route declares at registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Gate {
    /// No client-side check; the server enforces any access level.
    #[default]
    Public,
    /// Requires an authenticated session.
    Authenticated,
}

impl Gate {
    pub fn check(self, session: &Session) -> Result<(), RouteError> {
        match self {
            Gate::Public => Ok(()),
            Gate::Authenticated if session.is_authenticated() => Ok(()),
            Gate::Authenticated => Err(RouteError::new(ErrorCode::LoginRequired)),
        }
    }
}
