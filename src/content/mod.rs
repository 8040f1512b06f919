//! Content model subsystem.
//!
//! # Data Flow
//! ```text
//! CMS resolves URL → content (external)
//!     → embedding layer snapshots the result per request
//!     → QueryContext { flags, queried content, result set }
//!     → threaded into the URI validator and the action resolver
//! ```
//!
//! # Design Decisions
//! - The bridge never queries the CMS itself; it consumes one immutable
//!   snapshot per request
//! - Predicate flags and the queried entity can disagree; consumers skip
//!   defensively instead of faulting

pub mod model;
pub mod query;

pub use model::{Author, Post, PostType, Term};
pub use query::{QueriedContent, QueryContext, QueryFlags};
