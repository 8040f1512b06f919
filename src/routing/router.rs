//! Fallback route table and dispatch.
//!
//! # Responsibilities
//! - Hold the declarative fallback routes for one request
//! - Offer per-content-type registration shorthands over a generic
//!   `add_route`
//! - Install the action resolver's result as a catch-all on auto-discovery
//! - Match and execute the first route that passes the validator set
//!
//! # Design Decisions
//! - The table is private to this router and populated fresh per request;
//!   the host framework's route table is never touched
//! - The validator set used for matching is built explicitly per dispatch
//!   call, so there is no shared state to swap and restore
//! - Routes are scanned in registration order; first match wins
//! - Explicit no-match is an error the kernel maps to the host 404 path

use axum::http::Method;
use axum::response::Response;

use crate::config::schema::ResolverConfig;
use crate::content::query::QueryContext;
use crate::error::{BridgeError, BridgeResult};
use crate::http::request::RequestContext;
use crate::routing::catalog::{ControllerCatalog, ViewCatalog};
use crate::routing::resolver::ActionResolver;
use crate::routing::route::{ActionTarget, DispatchContext, RouteAction, RouteDefinition};
use crate::routing::validator::{
    ContentTypeUriValidator, HostValidator, MethodValidator, RouteValidator, SchemeValidator,
};

fn default_methods() -> Vec<Method> {
    vec![Method::GET, Method::HEAD]
}

/// Secondary route table consulted when the host framework's primary
/// routing had no explicit match.
pub struct FallbackRouter<'a> {
    query: &'a QueryContext,
    controllers: &'a dyn ControllerCatalog,
    views: &'a dyn ViewCatalog,
    resolver: ResolverConfig,
    routes: Vec<RouteDefinition>,
}

impl<'a> FallbackRouter<'a> {
    pub fn new(
        query: &'a QueryContext,
        controllers: &'a dyn ControllerCatalog,
        views: &'a dyn ViewCatalog,
        resolver: ResolverConfig,
    ) -> Self {
        Self {
            query,
            controllers,
            views,
            resolver,
            routes: Vec::new(),
        }
    }

    /// Generic registration underlying all the shorthands. `None` methods
    /// means the GET/HEAD default.
    pub fn add_route(
        &mut self,
        uri: &str,
        action: RouteAction,
        methods: Option<Vec<Method>>,
    ) -> BridgeResult<&mut RouteDefinition> {
        let route = RouteDefinition::new(uri, action, methods.unwrap_or_else(default_methods))?;
        tracing::debug!(uri = route.uri(), "fallback route registered");
        self.routes.push(route);
        let index = self.routes.len() - 1;
        Ok(&mut self.routes[index])
    }

    /// Route for the front page / posts index.
    pub fn home(&mut self, action: RouteAction) -> BridgeResult<&mut RouteDefinition> {
        self.add_route("home", action, None)
    }

    /// Route for generic archive pages.
    pub fn archive(&mut self, action: RouteAction) -> BridgeResult<&mut RouteDefinition> {
        self.add_route("archive", action, None)
    }

    /// Route for search result pages.
    pub fn search(&mut self, action: RouteAction) -> BridgeResult<&mut RouteDefinition> {
        self.add_route("search", action, None)
    }

    /// Route for the not-found page.
    pub fn not_found(&mut self, action: RouteAction) -> BridgeResult<&mut RouteDefinition> {
        self.add_route("404", action, None)
    }

    /// Route for any page.
    pub fn page(&mut self, action: RouteAction) -> BridgeResult<&mut RouteDefinition> {
        self.add_route("page", action, None)
    }

    /// Route for a specific page or page subtree, e.g. `about.team`.
    pub fn page_matching(
        &mut self,
        selector: &str,
        action: RouteAction,
    ) -> BridgeResult<&mut RouteDefinition> {
        self.add_route(&format!("page.{selector}"), action, None)
    }

    /// Route for single posts of a post type.
    pub fn post(&mut self, post_type: &str, action: RouteAction) -> BridgeResult<&mut RouteDefinition> {
        self.add_route(&format!("singular.{post_type}"), action, None)
    }

    /// Route for a post type's archive page.
    pub fn post_archive(
        &mut self,
        post_type: &str,
        action: RouteAction,
    ) -> BridgeResult<&mut RouteDefinition> {
        self.add_route(&format!("post_type_archive.{post_type}"), action, None)
    }

    /// Route for taxonomy term pages. The selector's first segment picks
    /// the base URI: `category` keeps its own base and drops the taxonomy
    /// name, `post_tag` shortens to `tag`, and every other taxonomy is
    /// addressed as `taxonomy.<selector>`.
    pub fn taxonomy(
        &mut self,
        selector: &str,
        action: RouteAction,
    ) -> BridgeResult<&mut RouteDefinition> {
        let (taxonomy, rest) = match selector.split_once('.') {
            Some((first, rest)) => (first, Some(rest)),
            None => (selector, None),
        };
        let uri = match taxonomy {
            "category" | "post_tag" => {
                let base = if taxonomy == "category" { "category" } else { "tag" };
                match rest {
                    Some(rest) => format!("{base}.{rest}"),
                    None => base.to_string(),
                }
            }
            _ => format!("taxonomy.{selector}"),
        };
        self.add_route(&uri, action, None)
    }

    /// Route for any author archive.
    pub fn author(&mut self, action: RouteAction) -> BridgeResult<&mut RouteDefinition> {
        self.add_route("author", action, None)
    }

    /// Route for a specific author's archive.
    pub fn author_matching(
        &mut self,
        nickname: &str,
        action: RouteAction,
    ) -> BridgeResult<&mut RouteDefinition> {
        self.add_route(&format!("author.{nickname}"), action, None)
    }

    /// Catch-all route matching any URI and any method.
    pub fn match_all(&mut self, action: RouteAction) -> &mut RouteDefinition {
        tracing::debug!("catch-all fallback route registered");
        self.routes.push(RouteDefinition::catch_all(action));
        let index = self.routes.len() - 1;
        &mut self.routes[index]
    }

    /// Run the action resolver and install its result as a catch-all route
    /// carrying the resolved view data as route defaults. Does nothing when
    /// nothing resolves.
    pub fn auto_discovery(&mut self) {
        let resolver = ActionResolver::new(
            self.query,
            self.controllers,
            self.views,
            self.resolver.clone(),
        );
        let Some(resolved) = resolver.resolve() else {
            tracing::debug!(kind = self.query.kind(), "auto-discovery resolved no action");
            return;
        };
        let action = match &resolved.target {
            ActionTarget::Controller { name, method } => RouteAction::controller(name, method),
            ActionTarget::View { path } => RouteAction::view(path),
        };
        self.match_all(action).set_defaults(resolved.data);
    }

    pub fn routes(&self) -> &[RouteDefinition] {
        &self.routes
    }

    /// Match the request against the table with the explicit validator set
    /// `{method, scheme, host, content-type-uri}` and execute the first
    /// matching route's action.
    pub fn dispatch(&self, request: &RequestContext) -> BridgeResult<Response> {
        let uri_validator = ContentTypeUriValidator::new(self.query);
        let validators: [&dyn RouteValidator; 4] = [
            &MethodValidator,
            &SchemeValidator,
            &HostValidator,
            &uri_validator,
        ];

        for route in &self.routes {
            if validators.iter().all(|v| v.matches(route, request)) {
                tracing::debug!(
                    uri = route.uri(),
                    action = ?route.action(),
                    path = %request.path,
                    "fallback route matched"
                );
                return self.run(route, request);
            }
        }

        tracing::warn!(path = %request.path, "no fallback route matched");
        Err(BridgeError::NoMatch)
    }

    fn run(&self, route: &RouteDefinition, request: &RequestContext) -> BridgeResult<Response> {
        match route.action() {
            RouteAction::Handler(handler) => {
                let cx = DispatchContext {
                    request,
                    query: self.query,
                    data: route.defaults(),
                };
                Ok(handler(&cx))
            }
            RouteAction::Controller { name, method } => {
                let cx = DispatchContext {
                    request,
                    query: self.query,
                    data: route.defaults(),
                };
                self.controllers.invoke(name, method, &cx)
            }
            RouteAction::View { path } => {
                let mut data = route.defaults().clone();
                if data.view.is_none() {
                    data.view = Some(path.clone());
                }
                self.views.render(path, &data)
            }
        }
    }
}
