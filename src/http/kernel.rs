//! Kernel wiring: the bridge as the host framework's fallback.
//!
//! # Responsibilities
//! - Build the axum router whose fallback handler runs the bridge
//! - Guard administration paths so they stay with the CMS
//! - Resolve the per-request query state and populate a fresh fallback
//!   route table on every request
//! - Map dispatch outcomes onto the host response path
//! - Wire up middleware (request ID, tracing, timeout) and metrics
//!
//! # Design Decisions
//! - The bridge answers only when no explicit application route matched;
//!   application routes merge in front of this router untouched
//! - Route declarations run per request, so two dispatches share no route
//!   table or memoized state
//! - No-match maps to 404; configuration errors map to 500 and are logged,
//!   never suppressed

use std::sync::Arc;
use std::time::{Duration, Instant};

use axum::body::Body;
use axum::extract::State;
use axum::http::{Request, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Router;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::config::schema::BridgeConfig;
use crate::content::query::QueryContext;
use crate::error::{BridgeError, BridgeResult};
use crate::http::request::RequestContext;
use crate::observability::metrics;
use crate::routing::catalog::{ControllerCatalog, ControllerRegistry, ViewCatalog, ViewRegistry};
use crate::routing::router::FallbackRouter;

/// The CMS URL-to-content resolution, seen from the bridge: one immutable
/// query snapshot per request.
pub trait QuerySource: Send + Sync {
    fn resolve(&self, request: &RequestContext) -> QueryContext;
}

/// Query source for environments with no CMS attached; every request
/// resolves to nothing.
struct EmptyQuerySource;

impl QuerySource for EmptyQuerySource {
    fn resolve(&self, _request: &RequestContext) -> QueryContext {
        QueryContext::default()
    }
}

type RouteDeclarations = Arc<dyn Fn(&mut FallbackRouter<'_>) -> BridgeResult<()> + Send + Sync>;

/// Builder wiring the bridge into an axum application.
pub struct Bridge {
    config: BridgeConfig,
    controllers: Arc<dyn ControllerCatalog>,
    views: Arc<dyn ViewCatalog>,
    query_source: Arc<dyn QuerySource>,
    declare_routes: RouteDeclarations,
}

impl Bridge {
    pub fn new(config: BridgeConfig) -> Self {
        Self {
            config,
            controllers: Arc::new(ControllerRegistry::new()),
            views: Arc::new(ViewRegistry::new()),
            query_source: Arc::new(EmptyQuerySource),
            declare_routes: Arc::new(|router: &mut FallbackRouter<'_>| {
                router.auto_discovery();
                Ok(())
            }),
        }
    }

    pub fn with_controllers(mut self, controllers: impl ControllerCatalog + 'static) -> Self {
        self.controllers = Arc::new(controllers);
        self
    }

    pub fn with_views(mut self, views: impl ViewCatalog + 'static) -> Self {
        self.views = Arc::new(views);
        self
    }

    pub fn with_query_source(mut self, source: impl QuerySource + 'static) -> Self {
        self.query_source = Arc::new(source);
        self
    }

    /// Replace the default auto-discovery declarations with an explicit
    /// route file. The closure runs once per request against a fresh table.
    pub fn with_routes<F>(mut self, declare: F) -> Self
    where
        F: Fn(&mut FallbackRouter<'_>) -> BridgeResult<()> + Send + Sync + 'static,
    {
        self.declare_routes = Arc::new(declare);
        self
    }

    /// Build the axum router. Application routes merge in front; the bridge
    /// handles only what they did not.
    pub fn into_router(self) -> Router {
        let timeout = Duration::from_secs(self.config.kernel.request_timeout_secs);
        Router::new()
            .fallback(bridge_fallback)
            .with_state(BridgeState(Arc::new(self)))
            .layer(TimeoutLayer::new(timeout))
            .layer(PropagateRequestIdLayer::x_request_id())
            .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
            .layer(TraceLayer::new_for_http())
    }
}

#[derive(Clone)]
struct BridgeState(Arc<Bridge>);

/// Fallback handler: everything the application's explicit routes did not
/// claim ends up here.
async fn bridge_fallback(State(state): State<BridgeState>, request: Request<Body>) -> Response {
    let start = Instant::now();
    let bridge = &state.0;
    let cx = RequestContext::from_request(&request);

    // Administration screens belong to the CMS, not the bridge.
    if !bridge.config.kernel.admin_prefix.is_empty()
        && cx.path.starts_with(&bridge.config.kernel.admin_prefix)
    {
        tracing::debug!(path = %cx.path, "administration path left to the host");
        return StatusCode::NOT_FOUND.into_response();
    }

    let query = bridge.query_source.resolve(&cx);
    let kind = query.kind();

    tracing::debug!(
        request_id = %cx.request_id,
        method = %cx.method,
        path = %cx.path,
        kind,
        "bridging request"
    );

    let mut router = FallbackRouter::new(
        &query,
        bridge.controllers.as_ref(),
        bridge.views.as_ref(),
        bridge.config.resolver.clone(),
    );

    let response = match (bridge.declare_routes)(&mut router) {
        Ok(()) => match router.dispatch(&cx) {
            Ok(response) => response,
            Err(BridgeError::NoMatch) => StatusCode::NOT_FOUND.into_response(),
            Err(e) => {
                tracing::error!(request_id = %cx.request_id, error = %e, "fallback dispatch failed");
                StatusCode::INTERNAL_SERVER_ERROR.into_response()
            }
        },
        Err(e) => {
            tracing::error!(request_id = %cx.request_id, error = %e, "fallback route declaration failed");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    };

    metrics::record_dispatch(kind, response.status().as_u16(), start);
    response
}
