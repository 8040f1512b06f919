//! Routing subsystem: the fallback route table, its matching rules, and
//! convention-based action discovery.
//!
//! # Data Flow
//! ```text
//! host router has no explicit match
//!     → kernel builds a FallbackRouter for the request
//!     → route file registers fallback routes (or auto_discovery installs
//!       the resolver's result as a catch-all)
//!     → dispatch matches with {method, scheme, host, content-type-uri}
//!     → first matching route runs: handler, controller, or view render
//! ```
//!
//! # Design Decisions
//! - Matching rules are explicit validator values passed to dispatch, never
//!   shared mutable state
//! - Existence of controllers and views is answered by injected catalogs,
//!   not runtime reflection
//! - Hierarchy-aware matching is a pure function over decoded slug chains

pub mod catalog;
pub mod hierarchy;
pub mod resolver;
pub mod route;
pub mod router;
pub mod validator;

pub use catalog::{
    ControllerCatalog, ControllerRegistry, NoControllers, ViewCatalog, ViewRegistry,
    EMPTY_CONTROLLERS,
};
pub use hierarchy::is_self_or_descendant;
pub use resolver::{ActionResolver, Candidate};
pub use route::{
    ActionTarget, DispatchContext, ResolvedAction, RouteAction, RouteDefinition, ViewData,
};
pub use router::FallbackRouter;
pub use validator::{
    ContentTypeUriValidator, HostValidator, MethodValidator, RouteValidator, SchemeValidator,
};
