//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Incoming path
//!     → router.rs (route lookup, registration order)
//!     → pattern.rs (segment match, parameter capture)
//!     → gate.rs (synchronous session precondition)
//!     → handler (prefetch pipeline, see `routes`)
//!     → Outcome or ResolveError
//!
//! Redirects:
//!     navigator.rs → router.rs (dispatch by name) → ... until a view
//!
//! Route Compilation (at startup):
//!     register(name, template, gate, handler)
//!     → reject duplicate names / malformed templates
//!     → Freeze as immutable Router
//! ```
//!
//! # Design Decisions
//! - Routes compiled at startup, immutable at runtime
//! - No regex in hot path (segment comparison only)
//! - Deterministic: same input always matches same route
//! - First match wins (registration order)

pub mod context;
pub mod gate;
pub mod navigator;
pub mod params;
pub mod pattern;
pub mod router;

pub use context::{RouteContext, Services};
pub use gate::Gate;
pub use navigator::{Navigator, Resolved};
pub use params::RouteParams;
pub use pattern::{Pattern, PatternError};
pub use router::{Route, RouteConfigError, RouteMatch, Router, RouterBuilder};
