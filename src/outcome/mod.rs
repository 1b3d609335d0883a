//! Resolution outcomes.
//!
//! # Data Flow
//! ```text
//! handler
//!     → Ok(Outcome::View(ViewDescriptor))        render the screen
//!     → Ok(Outcome::Redirect(RedirectInstruction)) resolve another route instead
//!     → Err(ResolveError)                        show login / error / offline page
//! ```
//!
//! # Design Decisions
//! - Exactly one outcome per resolution; no partial descriptors
//! - Application errors (`RouteError`) are distinct from transport errors

pub mod error;
pub mod view;

pub use error::{ErrorCode, ResolveError, ResolveResult, RouteError, API_ERROR_REASON};
pub use view::{FormMode, IssueFormMode, Outcome, RedirectInstruction, ViewDescriptor, ViewSize};
