//! HTTP integration subsystem.
//!
//! # Data Flow
//! ```text
//! incoming request
//!     → application's explicit axum routes (untouched by the bridge)
//!     → no match: kernel.rs fallback handler
//!     → request.rs snapshot + QuerySource resolution
//!     → FallbackRouter dispatch (routing subsystem)
//!     → response, or the host 404/500 path
//! ```

pub mod kernel;
pub mod request;

pub use kernel::{Bridge, QuerySource};
pub use request::{RequestContext, X_REQUEST_ID};
