//! Client session state.
//!
//! # Data Flow
//! ```text
//! login / settings refresh
//!     → SessionHandle::replace (atomic swap)
//!
//! resolution start
//!     → SessionHandle::snapshot (Arc<Session>, read-only)
//!     → gate check, AddIssue defaults, quote formats
//!
//! IssueDetails / IssueItem
//!     → IssueStore::reset (clear + select, one step)
//!     → IssueStore::load
//! ```
//!
//! # Design Decisions
//! - Handlers never mutate the session; only the issue slot is writable
//! - A stale reload never overwrites a newer selection

pub mod cache;
pub mod parser;
pub mod state;

pub use cache::{IssueCache, IssueSlot, IssueStore};
pub use parser::{DefaultValueParser, ValueParser};
pub use state::{
    AttributeKind, AttributeSchema, IssueType, Location, Session, SessionHandle, Settings,
    TextFormat,
};
