//! Route validation during fallback dispatch.
//!
//! # Responsibilities
//! - Decide whether a declared route matches the current request
//! - Classify routes by their content-type prefix and consult the CMS
//!   predicates for that type
//! - Delegate hierarchy decisions to the hierarchy matcher
//! - Fall back to plain URI equality for routes that are not CMS routes
//!
//! # Design Decisions
//! - The validator set is an explicit argument to the matching call; the
//!   host framework's own routing is never mutated
//! - A recognized content type whose predicate fails returns false outright,
//!   so a generic matcher cannot steal a CMS route
//! - Ancestry hierarchies are memoized per dispatch pass since many
//!   candidate routes are checked against the same content
//! - Every branch reduces to a boolean; no panics, no errors

use std::sync::OnceLock;

use crate::content::query::QueryContext;
use crate::http::request::RequestContext;
use crate::routing::hierarchy::is_self_or_descendant;
use crate::routing::route::RouteDefinition;
use crate::support::url_decode;

/// A single matching rule applied to a candidate route during dispatch.
pub trait RouteValidator: Send + Sync {
    /// Returns true if the route passes this rule for the request.
    fn matches(&self, route: &RouteDefinition, request: &RequestContext) -> bool;
}

/// Matches the request's HTTP verb against the route's allowed set.
/// An empty set means any verb.
pub struct MethodValidator;

impl RouteValidator for MethodValidator {
    fn matches(&self, route: &RouteDefinition, request: &RequestContext) -> bool {
        route.methods().is_empty() || route.methods().contains(&request.method)
    }
}

/// Matches the URI scheme when the route constrains one.
pub struct SchemeValidator;

impl RouteValidator for SchemeValidator {
    fn matches(&self, route: &RouteDefinition, request: &RequestContext) -> bool {
        match route.scheme() {
            Some(scheme) => scheme.eq_ignore_ascii_case(&request.scheme),
            None => true,
        }
    }
}

/// Matches the Host header when the route constrains one.
/// Hosts compare case-insensitively.
pub struct HostValidator;

impl RouteValidator for HostValidator {
    fn matches(&self, route: &RouteDefinition, request: &RequestContext) -> bool {
        match route.host() {
            Some(host) => host.eq_ignore_ascii_case(&request.host),
            None => true,
        }
    }
}

/// The content-type URI validator. Classifies the route's dot-delimited URI
/// by its first segment and asks the per-request query state whether the
/// current content is of that type; `page`, `category` and `taxonomy`
/// routes with hierarchy segments additionally walk the content ancestry.
pub struct ContentTypeUriValidator<'a> {
    query: &'a QueryContext,
    page_hierarchy: OnceLock<Option<Vec<String>>>,
    term_hierarchy: OnceLock<Option<Vec<String>>>,
}

impl<'a> ContentTypeUriValidator<'a> {
    pub fn new(query: &'a QueryContext) -> Self {
        Self {
            query,
            page_hierarchy: OnceLock::new(),
            term_hierarchy: OnceLock::new(),
        }
    }

    /// Decoded root-first ancestry of the queried page, including the page
    /// itself. `None` when the queried content is not a post.
    fn page_hierarchy(&self) -> Option<&[String]> {
        self.page_hierarchy
            .get_or_init(|| self.query.queried_post().map(|p| p.ancestry_slugs()))
            .as_deref()
    }

    /// Decoded root-first ancestry of the queried term, including the term
    /// itself. `None` when the queried content is not a term.
    fn term_hierarchy(&self) -> Option<&[String]> {
        self.term_hierarchy
            .get_or_init(|| self.query.queried_term().map(|t| t.ancestry_slugs()))
            .as_deref()
    }

    /// Plain string-equality URI matching for routes that are not CMS
    /// routes (AJAX endpoints, asset routes). Slash-trimmed on both sides.
    fn plain_uri_matches(&self, route: &RouteDefinition, request: &RequestContext) -> bool {
        request.path.trim_matches('/') == route.uri().trim_matches('/')
    }
}

impl RouteValidator for ContentTypeUriValidator<'_> {
    fn matches(&self, route: &RouteDefinition, request: &RequestContext) -> bool {
        if route.is_catch_all() {
            return true;
        }

        let segments = route.segments();

        // Single-segment routes are generic page types, classified purely
        // by the predicate table; unknown names get plain URI matching.
        if segments.len() == 1 {
            return match self.query.generic_predicate(&segments[0]) {
                Some(matched) => matched,
                None => self.plain_uri_matches(route, request),
            };
        }

        let page_type = segments[0].as_str();
        let selector = segments[1].as_str();

        // Hierarchical content types with more than one selector segment
        // walk the ancestry chain. Two-segment forms match on the item's
        // own slug (or taxonomy name) alone, like the other selectors.
        match page_type {
            "category" if segments.len() > 2 => {
                self.query.is_category()
                    && self
                        .term_hierarchy()
                        .is_some_and(|h| is_self_or_descendant(&segments[1..], h))
            }
            "taxonomy" if segments.len() > 2 => {
                // Taxonomy routes carry the taxonomy name as the first
                // hierarchy element; category routes above omit it.
                self.query.is_tax()
                    && self.query.queried_term().is_some_and(|term| {
                        let mut hierarchy = vec![url_decode(&term.taxonomy)];
                        if let Some(slugs) = self.term_hierarchy() {
                            hierarchy.extend_from_slice(slugs);
                        }
                        is_self_or_descendant(&segments[1..], &hierarchy)
                    })
            }
            "page" if segments.len() > 2 => {
                self.query.is_page()
                    && self
                        .page_hierarchy()
                        .is_some_and(|h| is_self_or_descendant(&segments[1..], h))
            }
            _ => match self.query.selector_predicate(page_type, selector) {
                Some(matched) => matched,
                None => self.plain_uri_matches(route, request),
            },
        }
    }
}
