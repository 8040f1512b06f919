//! MVC application layer behind a CMS front controller.
//!
//! The CMS owns URL-to-content resolution; this crate turns the result of
//! that resolution into a conventional controller/view action and serves it
//! through the host framework's fallback slot.
//!
//! # Architecture Overview
//!
//! ```text
//!   request ──▶ application's explicit routes ──▶ handled, bridge untouched
//!                      │ no match
//!                      ▼
//!              http::kernel (fallback handler, admin guard)
//!                      │
//!                      ▼
//!              content::QueryContext (per-request CMS snapshot)
//!                      │
//!                      ▼
//!              routing::FallbackRouter
//!                ├─ declared routes, matched by
//!                │    {method, scheme, host, content-type-uri}
//!                │    (hierarchy matcher for page/term ancestry)
//!                └─ auto-discovery via routing::ActionResolver
//!                     (nine content-type branches, controller before view,
//!                      most specific candidate first)
//!                      │
//!                      ▼
//!              catalogs: ControllerRegistry / ViewRegistry
//! ```

pub mod config;
pub mod content;
pub mod error;
pub mod http;
pub mod observability;
pub mod routing;
pub mod support;

pub use config::schema::BridgeConfig;
pub use error::{BridgeError, BridgeResult};
pub use http::kernel::{Bridge, QuerySource};
pub use routing::resolver::ActionResolver;
pub use routing::router::FallbackRouter;
