//! Route definitions and resolved actions.
//!
//! # Responsibilities
//! - Represent one declared fallback route (pattern, action, constraints)
//! - Represent the output of action resolution
//! - Carry the view data injected into the eventual controller or view
//!
//! # Design Decisions
//! - Routes are data, parsed once at registration; malformed patterns fail
//!   fast instead of silently never matching
//! - Empty `methods` means any verb (the catch-all case); everything else
//!   defaults to GET/HEAD at registration time
//! - View data is a typed bag, not a string map; application defaults go
//!   into `extra`

use std::fmt;
use std::sync::Arc;

use axum::http::Method;
use axum::response::Response;
use serde::Serialize;

use crate::content::model::{Author, Post, Term};
use crate::content::query::QueryContext;
use crate::error::{BridgeError, BridgeResult};
use crate::http::request::RequestContext;
use crate::support::split_dot_path;

/// Data handed to the controller or view that ends up handling the request.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ViewData {
    /// Resolved view path, set for view actions.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub view: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub post: Option<Post>,
    /// The already-executed main query's result set, for archive-like pages.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub posts: Option<Vec<Post>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub term: Option<Term>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<Author>,
    /// The literal search keyword, for search results.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keyword: Option<String>,
    /// Application-supplied defaults, keyed by name.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl ViewData {
    pub fn is_empty(&self) -> bool {
        self.view.is_none()
            && self.post.is_none()
            && self.posts.is_none()
            && self.term.is_none()
            && self.author.is_none()
            && self.keyword.is_none()
            && self.extra.is_empty()
    }
}

/// Everything an inline handler or controller can see while running.
pub struct DispatchContext<'a> {
    pub request: &'a RequestContext,
    pub query: &'a QueryContext,
    pub data: &'a ViewData,
}

type HandlerFn = Arc<dyn Fn(&DispatchContext<'_>) -> Response + Send + Sync>;

/// What a declared route dispatches to.
#[derive(Clone)]
pub enum RouteAction {
    /// A named controller in the registry plus the method to call.
    Controller { name: String, method: String },
    /// A view template rendered directly, with no controller in between.
    View { path: String },
    /// An inline handler closure.
    Handler(HandlerFn),
}

impl RouteAction {
    pub fn controller(name: impl Into<String>, method: impl Into<String>) -> Self {
        Self::Controller {
            name: name.into(),
            method: method.into(),
        }
    }

    pub fn view(path: impl Into<String>) -> Self {
        Self::View { path: path.into() }
    }

    pub fn handler<F>(f: F) -> Self
    where
        F: Fn(&DispatchContext<'_>) -> Response + Send + Sync + 'static,
    {
        Self::Handler(Arc::new(f))
    }
}

impl fmt::Debug for RouteAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Controller { name, method } => {
                write!(f, "Controller({name}@{method})")
            }
            Self::View { path } => write!(f, "View({path})"),
            Self::Handler(_) => write!(f, "Handler(..)"),
        }
    }
}

/// One declared fallback route. Immutable after registration apart from the
/// chainable constraint/default setters the registration call returns.
#[derive(Debug, Clone)]
pub struct RouteDefinition {
    uri: String,
    segments: Vec<String>,
    action: RouteAction,
    methods: Vec<Method>,
    scheme: Option<String>,
    host: Option<String>,
    catch_all: bool,
    defaults: ViewData,
}

impl RouteDefinition {
    /// Parse and validate a dot-delimited URI into a route. An empty URI or
    /// an empty segment is a configuration error, surfaced immediately.
    pub fn new(uri: &str, action: RouteAction, methods: Vec<Method>) -> BridgeResult<Self> {
        let segments = split_dot_path(uri);
        if segments.is_empty() {
            return Err(BridgeError::MalformedPattern {
                pattern: uri.to_string(),
                reason: "URI must contain at least one segment",
            });
        }
        if segments.iter().any(String::is_empty) {
            return Err(BridgeError::MalformedPattern {
                pattern: uri.to_string(),
                reason: "URI contains an empty segment",
            });
        }
        Ok(Self {
            uri: uri.to_string(),
            segments,
            action,
            methods,
            scheme: None,
            host: None,
            catch_all: false,
            defaults: ViewData::default(),
        })
    }

    /// A route matching any URI and any method.
    pub(crate) fn catch_all(action: RouteAction) -> Self {
        Self {
            uri: "**".to_string(),
            segments: vec!["**".to_string()],
            action,
            methods: Vec::new(),
            scheme: None,
            host: None,
            catch_all: true,
            defaults: ViewData::default(),
        }
    }

    pub fn uri(&self) -> &str {
        &self.uri
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    pub fn action(&self) -> &RouteAction {
        &self.action
    }

    /// Allowed HTTP verbs. Empty means any.
    pub fn methods(&self) -> &[Method] {
        &self.methods
    }

    pub fn scheme(&self) -> Option<&str> {
        self.scheme.as_deref()
    }

    pub fn host(&self) -> Option<&str> {
        self.host.as_deref()
    }

    pub fn is_catch_all(&self) -> bool {
        self.catch_all
    }

    pub fn defaults(&self) -> &ViewData {
        &self.defaults
    }

    /// Constrain the route to one URI scheme.
    pub fn require_scheme(&mut self, scheme: impl Into<String>) -> &mut Self {
        self.scheme = Some(scheme.into());
        self
    }

    /// Constrain the route to one host, compared case-insensitively.
    pub fn require_host(&mut self, host: impl Into<String>) -> &mut Self {
        self.host = Some(host.into());
        self
    }

    /// Replace the route's default view data.
    pub fn set_defaults(&mut self, defaults: ViewData) -> &mut Self {
        self.defaults = defaults;
        self
    }

    /// Attach one application default, available to the action as view data.
    pub fn default_extra(
        &mut self,
        key: impl Into<String>,
        value: serde_json::Value,
    ) -> &mut Self {
        self.defaults.extra.insert(key.into(), value);
        self
    }
}

/// Where resolution landed: a registered controller, or a view rendered
/// through the view-controller path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionTarget {
    Controller { name: String, method: String },
    View { path: String },
}

/// Output of the action resolver.
#[derive(Debug, Clone)]
pub struct ResolvedAction {
    pub target: ActionTarget,
    pub data: ViewData,
}
