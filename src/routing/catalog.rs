//! Controller and view catalogs.
//!
//! # Responsibilities
//! - Answer existence probes during action resolution
//! - Invoke a registered controller method
//! - Render a registered view template with its view data
//!
//! # Design Decisions
//! - Catalogs are injected capabilities, not reflection: the resolver asks
//!   an interface whether a name exists, never the language runtime
//! - The default view renderer produces an HTML shell embedding the view
//!   name and its JSON-serialized data; a real template engine plugs in per
//!   path via `register_with`

use std::collections::HashMap;
use std::sync::Arc;

use axum::response::{Html, IntoResponse, Response};

use crate::error::{BridgeError, BridgeResult};
use crate::routing::route::{DispatchContext, ViewData};

/// Lookup and invocation surface for application controllers.
pub trait ControllerCatalog: Send + Sync {
    /// Returns true if a controller of this name is registered.
    fn exists(&self, name: &str) -> bool;

    /// Invoke a controller method. A missing controller is a configuration
    /// error, surfaced as [`BridgeError::UnknownController`].
    fn invoke(&self, name: &str, method: &str, cx: &DispatchContext<'_>) -> BridgeResult<Response>;
}

/// Lookup and rendering surface for view templates.
pub trait ViewCatalog: Send + Sync {
    /// Returns true if a template exists at this dot-delimited path.
    fn exists(&self, path: &str) -> bool;

    /// Render the template at `path` with the given data.
    fn render(&self, path: &str, data: &ViewData) -> BridgeResult<Response>;
}

type ControllerFn = Arc<dyn Fn(&str, &DispatchContext<'_>) -> Response + Send + Sync>;

/// Name → handler map standing in for a controller namespace.
#[derive(Clone, Default)]
pub struct ControllerRegistry {
    handlers: HashMap<String, ControllerFn>,
}

impl ControllerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a controller under a name. The closure receives the method
    /// name and the dispatch context.
    pub fn register<F>(&mut self, name: impl Into<String>, handler: F) -> &mut Self
    where
        F: Fn(&str, &DispatchContext<'_>) -> Response + Send + Sync + 'static,
    {
        self.handlers.insert(name.into(), Arc::new(handler));
        self
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}

impl ControllerCatalog for ControllerRegistry {
    fn exists(&self, name: &str) -> bool {
        self.handlers.contains_key(name)
    }

    fn invoke(&self, name: &str, method: &str, cx: &DispatchContext<'_>) -> BridgeResult<Response> {
        match self.handlers.get(name) {
            Some(handler) => Ok(handler(method, cx)),
            None => Err(BridgeError::UnknownController(name.to_string())),
        }
    }
}

/// The always-absent controller catalog, for view-only resolution.
pub struct NoControllers;

/// Shared instance of [`NoControllers`].
pub const EMPTY_CONTROLLERS: NoControllers = NoControllers;

impl ControllerCatalog for NoControllers {
    fn exists(&self, _name: &str) -> bool {
        false
    }

    fn invoke(
        &self,
        name: &str,
        _method: &str,
        _cx: &DispatchContext<'_>,
    ) -> BridgeResult<Response> {
        Err(BridgeError::UnknownController(name.to_string()))
    }
}

type TemplateFn = Arc<dyn Fn(&str, &ViewData) -> BridgeResult<Response> + Send + Sync>;

/// Path → template map standing in for a view directory.
#[derive(Clone, Default)]
pub struct ViewRegistry {
    templates: HashMap<String, TemplateFn>,
}

impl ViewRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a template rendered by the default renderer.
    pub fn register(&mut self, path: impl Into<String>) -> &mut Self {
        self.templates.insert(path.into(), Arc::new(default_render));
        self
    }

    /// Register a template with its own render closure.
    pub fn register_with<F>(&mut self, path: impl Into<String>, render: F) -> &mut Self
    where
        F: Fn(&str, &ViewData) -> BridgeResult<Response> + Send + Sync + 'static,
    {
        self.templates.insert(path.into(), Arc::new(render));
        self
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}

impl ViewCatalog for ViewRegistry {
    fn exists(&self, path: &str) -> bool {
        self.templates.contains_key(path)
    }

    fn render(&self, path: &str, data: &ViewData) -> BridgeResult<Response> {
        match self.templates.get(path) {
            Some(template) => template(path, data),
            None => Err(BridgeError::Render {
                view: path.to_string(),
                reason: "no template registered at this path".to_string(),
            }),
        }
    }
}

/// HTML shell carrying the view name and its data as embedded JSON.
fn default_render(path: &str, data: &ViewData) -> BridgeResult<Response> {
    let json = serde_json::to_string(data).map_err(|e| BridgeError::Render {
        view: path.to_string(),
        reason: e.to_string(),
    })?;
    let body = format!(
        "<!doctype html><html><body data-view=\"{path}\">\
         <script type=\"application/json\" id=\"view-data\">{json}</script>\
         </body></html>"
    );
    Ok(Html(body).into_response())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::query::QueryContext;
    use crate::http::request::RequestContext;

    #[test]
    fn test_registry_existence_probes() {
        let mut controllers = ControllerRegistry::new();
        controllers.register("PageAbout", |_, _| "about".into_response());
        assert!(controllers.exists("PageAbout"));
        assert!(!controllers.exists("PageContact"));

        let mut views = ViewRegistry::new();
        views.register("wp.page.about");
        assert!(views.exists("wp.page.about"));
        assert!(!views.exists("wp.page.contact"));
    }

    #[test]
    fn test_unknown_controller_is_surfaced() {
        let controllers = ControllerRegistry::new();
        let request = RequestContext::get("/about");
        let query = QueryContext::default();
        let data = ViewData::default();
        let cx = DispatchContext {
            request: &request,
            query: &query,
            data: &data,
        };
        let err = controllers.invoke("Missing", "index", &cx).unwrap_err();
        assert!(matches!(err, BridgeError::UnknownController(name) if name == "Missing"));
        assert!(!EMPTY_CONTROLLERS.exists("Anything"));
    }

    #[test]
    fn test_default_render_embeds_view_data() {
        let mut views = ViewRegistry::new();
        views.register("wp.home");
        let mut data = ViewData::default();
        data.view = Some("wp.home".to_string());
        let response = views.render("wp.home", &data).unwrap();
        assert_eq!(response.status(), axum::http::StatusCode::OK);
    }

    #[test]
    fn test_render_missing_template_is_an_error() {
        let views = ViewRegistry::new();
        let err = views.render("wp.nope", &ViewData::default()).unwrap_err();
        assert!(matches!(err, BridgeError::Render { .. }));
    }
}
