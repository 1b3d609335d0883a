//! Issue tracker route resolver library.
//!
//! Maps URL paths to view descriptors, checking authorization and
//! prefetching server data before a view is allowed to render.

pub mod config;
pub mod desktop;
pub mod i18n;
pub mod lifecycle;
pub mod observability;
pub mod outcome;
pub mod routes;
pub mod routing;
pub mod session;
pub mod transport;

pub use config::ClientConfig;
pub use lifecycle::{build_navigator, build_navigator_with};
pub use outcome::{ErrorCode, Outcome, ResolveError, RouteError, ViewDescriptor};
pub use routing::{Navigator, Router};
pub use session::{Session, SessionHandle};
