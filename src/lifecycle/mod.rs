//! Lifecycle management.
//!
//! # Data Flow
//! ```text
//! Startup:
//!     validated ClientConfig + session
//!     → startup.rs (transport, route table, services)
//!     → Navigator ready to resolve paths
//! ```

pub mod startup;

pub use startup::{build_navigator, build_navigator_with, StartupError};
