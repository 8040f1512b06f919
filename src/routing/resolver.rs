//! Convention-based action discovery.
//!
//! # Responsibilities
//! - Compute the most specific existing controller or view for the current
//!   queried content
//! - Try the nine content-type categories in a fixed priority order
//! - Walk each candidate hierarchy from full length down to one segment
//! - Inject the content-type's default view data into the winning action
//!
//! # Design Decisions
//! - Each branch is guarded by a predicate flag AND a runtime check that the
//!   queried object is of the concrete type the flag claims; disagreement
//!   skips the branch rather than faulting
//! - At each hierarchy depth the controller is probed before the view, and a
//!   hit stops the walk immediately
//! - A branch that resolves nothing falls through to the next branch; an
//!   archive-like branch additionally consults its generic fallback exactly
//!   once, and the fallback itself has no further fallback
//! - A custom page template replaces the ancestry hierarchy with a fixed
//!   two-element candidate; templates do not cascade

use crate::config::schema::ResolverConfig;
use crate::content::model::{Author, Post, Term};
use crate::content::query::QueryContext;
use crate::routing::catalog::{ControllerCatalog, ViewCatalog};
use crate::routing::route::{ActionTarget, ResolvedAction, ViewData};
use crate::support::{pascal_case, slugify, url_decode};

/// One controller or view probe, in the order resolution would try it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Candidate {
    Controller(String),
    View(String),
}

/// Resolves the current queried content to a controller or view action.
pub struct ActionResolver<'a> {
    query: &'a QueryContext,
    controllers: &'a dyn ControllerCatalog,
    views: &'a dyn ViewCatalog,
    config: ResolverConfig,
}

impl<'a> ActionResolver<'a> {
    pub fn new(
        query: &'a QueryContext,
        controllers: &'a dyn ControllerCatalog,
        views: &'a dyn ViewCatalog,
        config: ResolverConfig,
    ) -> Self {
        Self {
            query,
            controllers,
            views,
            config,
        }
    }

    /// Find the most specific existing action for the queried content, or
    /// `None` when nothing resolves at any depth.
    pub fn resolve(&self) -> Option<ResolvedAction> {
        for (hierarchy, data, fallback) in self.candidate_plans() {
            if let Some(action) = self.action_by_hierarchy(&hierarchy, data, fallback) {
                tracing::debug!(action = ?action.target, "action resolved");
                return Some(action);
            }
        }
        tracing::debug!(kind = self.query.kind(), "no action resolved");
        None
    }

    /// The ordered list of controller names and view paths a [`resolve`]
    /// call probes, for diagnostics.
    ///
    /// [`resolve`]: Self::resolve
    pub fn explain(&self) -> Vec<Candidate> {
        let mut probes = Vec::new();
        for (hierarchy, _, fallback) in self.candidate_plans() {
            self.push_probes(&hierarchy, &mut probes);
            if let Some(kind) = fallback {
                self.push_probes(&[kind.to_string()], &mut probes);
            }
        }
        probes
    }

    /// View-only resolution. Returns the resolved view path and its data,
    /// or the supplied default when nothing resolves. `extra` is merged
    /// into the data either way.
    pub fn resolve_view(
        &self,
        default_view: &str,
        extra: serde_json::Map<String, serde_json::Value>,
    ) -> (String, ViewData) {
        let view_only = ActionResolver {
            query: self.query,
            controllers: self.controllers,
            views: self.views,
            config: ResolverConfig {
                resolve_controllers: false,
                ..self.config.clone()
            },
        };
        match view_only.resolve() {
            Some(ResolvedAction {
                target: ActionTarget::View { path },
                mut data,
            }) => {
                data.extra.extend(extra);
                (path, data)
            }
            _ => {
                let mut data = ViewData::default();
                data.view = Some(default_view.to_string());
                data.extra = extra;
                (default_view.to_string(), data)
            }
        }
    }

    /// The candidate hierarchies for every content-type branch whose guard
    /// passes, in priority order, with their view data and generic fallback.
    fn candidate_plans(&self) -> Vec<(Vec<String>, ViewData, Option<&'static str>)> {
        let q = self.query;
        let mut plans = Vec::new();

        if q.is_home() || q.is_front_page() {
            plans.push((vec!["home".to_string()], self.home_data(), None));
        }
        if q.is_page() {
            if let Some(post) = q.queried_post() {
                plans.push((self.page_hierarchy(post), self.post_data(post), None));
            }
        }
        if q.is_singular() {
            if let Some(post) = q.queried_post() {
                plans.push((self.singular_hierarchy(post), self.post_data(post), None));
            }
        }
        if q.is_post_type_archive() {
            plans.push((
                vec!["post-archive".to_string(), q.post_type()],
                self.archive_data(),
                Some("archive"),
            ));
        }
        if q.is_category() || q.is_tag() || q.is_tax() {
            if let Some(term) = q.queried_term() {
                plans.push((self.term_hierarchy(term), self.term_data(term), Some("archive")));
            }
        }
        if q.is_author() {
            if let Some(author) = q.queried_author() {
                plans.push((
                    vec!["author".to_string(), author.nickname.clone()],
                    self.author_data(author),
                    Some("archive"),
                ));
            }
        }
        if q.is_search() {
            plans.push((vec!["search".to_string()], self.search_data(), Some("archive")));
        }
        if q.is_archive() {
            plans.push((vec!["archive".to_string()], self.archive_data(), None));
        }
        if q.is_404() {
            plans.push((vec!["not-found".to_string()], ViewData::default(), None));
        }

        plans
    }

    /// Walk the hierarchy from full length down to one segment; on a hit,
    /// attach the data and stop. When the walk exhausts, consult the
    /// generic fallback once.
    fn action_by_hierarchy(
        &self,
        hierarchy: &[String],
        data: ViewData,
        fallback: Option<&str>,
    ) -> Option<ResolvedAction> {
        if let Some(target) = self.target_by_hierarchy(hierarchy) {
            let mut data = data;
            if let ActionTarget::View { path } = &target {
                data.view = Some(path.clone());
            }
            return Some(ResolvedAction { target, data });
        }
        if let Some(kind) = fallback {
            return self.action_by_hierarchy(&[kind.to_string()], data, None);
        }
        None
    }

    fn target_by_hierarchy(&self, hierarchy: &[String]) -> Option<ActionTarget> {
        let mut len = hierarchy.len();
        while len > 0 {
            let prefix = &hierarchy[..len];
            if self.config.resolve_controllers {
                let name = self.controller_name(prefix);
                tracing::trace!(controller = %name, "probing controller");
                if self.controllers.exists(&name) {
                    return Some(ActionTarget::Controller {
                        name,
                        method: "index".to_string(),
                    });
                }
            }
            let path = self.view_path(prefix);
            tracing::trace!(view = %path, "probing view");
            if self.views.exists(&path) {
                return Some(ActionTarget::View { path });
            }
            len -= 1;
        }
        None
    }

    fn push_probes(&self, hierarchy: &[String], probes: &mut Vec<Candidate>) {
        let mut len = hierarchy.len();
        while len > 0 {
            let prefix = &hierarchy[..len];
            if self.config.resolve_controllers {
                probes.push(Candidate::Controller(self.controller_name(prefix)));
            }
            probes.push(Candidate::View(self.view_path(prefix)));
            len -= 1;
        }
    }

    fn controller_name(&self, segments: &[String]) -> String {
        let base: String = segments.iter().map(|s| pascal_case(s)).collect();
        format!("{}{}", self.config.controller_prefix, base)
    }

    fn view_path(&self, segments: &[String]) -> String {
        format!("{}.{}", self.config.view_root, segments.join("."))
    }

    /// `["template", <slugified name>]` when a custom template is assigned,
    /// otherwise `["page"]` plus the decoded root-first ancestry.
    fn page_hierarchy(&self, post: &Post) -> Vec<String> {
        if let Some(template) = &post.template {
            return vec!["template".to_string(), slugify(template)];
        }
        let mut hierarchy = vec!["page".to_string()];
        hierarchy.extend(post.ancestry_slugs());
        hierarchy
    }

    fn singular_hierarchy(&self, post: &Post) -> Vec<String> {
        if let Some(template) = &post.template {
            return vec!["template".to_string(), slugify(template)];
        }
        vec!["post".to_string(), self.query.post_type()]
    }

    /// Term candidates live under the archive root. The built-in category
    /// taxonomy omits its taxonomy name; every other taxonomy, `post_tag`
    /// included, spells `taxonomy.<name>`.
    fn term_hierarchy(&self, term: &Term) -> Vec<String> {
        let taxonomy = url_decode(&term.taxonomy);
        let mut hierarchy = vec!["archive".to_string()];
        if taxonomy == "category" {
            hierarchy.push("category".to_string());
        } else {
            hierarchy.push("taxonomy".to_string());
            hierarchy.push(taxonomy);
        }
        hierarchy.extend(term.ancestry_slugs());
        hierarchy
    }

    fn home_data(&self) -> ViewData {
        let mut data = ViewData::default();
        if self.config.inject_default_data {
            data.post = self.query.queried_post().cloned();
        }
        data
    }

    fn post_data(&self, post: &Post) -> ViewData {
        let mut data = ViewData::default();
        if self.config.inject_default_data {
            data.post = Some(post.clone());
        }
        data
    }

    fn archive_data(&self) -> ViewData {
        let mut data = ViewData::default();
        if self.config.inject_default_data {
            data.posts = Some(self.query.posts().to_vec());
        }
        data
    }

    fn term_data(&self, term: &Term) -> ViewData {
        let mut data = self.archive_data();
        if self.config.inject_default_data {
            data.term = Some(term.clone());
        }
        data
    }

    fn author_data(&self, author: &Author) -> ViewData {
        let mut data = self.archive_data();
        if self.config.inject_default_data {
            data.author = Some(author.clone());
        }
        data
    }

    fn search_data(&self) -> ViewData {
        let mut data = self.archive_data();
        if self.config.inject_default_data {
            data.keyword = Some(self.query.search_keyword().to_string());
        }
        data
    }
}
