//! Error definitions for the bridge.
//!
//! # Design Decisions
//! - Expected no-match conditions are `bool`/`Option` returns in the
//!   validators and the resolver; only dispatch surfaces them as an error
//!   so the kernel can map them to the host 404 path.
//! - Configuration mistakes (malformed patterns, actions naming controllers
//!   that were never registered) are surfaced, never suppressed.

use thiserror::Error;

/// Errors produced while registering or dispatching fallback routes.
#[derive(Debug, Error)]
pub enum BridgeError {
    /// A route was registered with an empty URI or an empty segment.
    #[error("malformed route pattern `{pattern}`: {reason}")]
    MalformedPattern { pattern: String, reason: &'static str },

    /// A route action names a controller that is not in the registry.
    #[error("no controller named `{0}` is registered")]
    UnknownController(String),

    /// No fallback route matched the request.
    #[error("no fallback route matched the request")]
    NoMatch,

    /// A view template failed to render.
    #[error("view `{view}` failed to render: {reason}")]
    Render { view: String, reason: String },

    /// Configuration failed to parse or validate.
    #[error("invalid configuration: {0}")]
    Config(String),

    /// Filesystem error while loading configuration.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Result type for bridge operations.
pub type BridgeResult<T> = Result<T, BridgeError>;
