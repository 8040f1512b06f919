//! Shared fixtures for the resolution and dispatch tests.

use std::collections::HashMap;

use axum::response::IntoResponse;
use wp_bridge::content::{Author, Post, QueriedContent, QueryContext, QueryFlags, Term};
use wp_bridge::http::{QuerySource, RequestContext};
use wp_bridge::routing::{ControllerRegistry, ViewRegistry};

/// Query state for a page request.
#[allow(dead_code)]
pub fn page_query(post: Post) -> QueryContext {
    QueryContext::new(
        QueryFlags {
            is_page: true,
            is_singular: true,
            ..QueryFlags::default()
        },
        QueriedContent::Post(post),
    )
}

/// Query state for a taxonomy term request; flags follow the taxonomy.
#[allow(dead_code)]
pub fn term_query(term: Term, posts: Vec<Post>) -> QueryContext {
    let flags = match term.taxonomy.as_str() {
        "category" => QueryFlags {
            is_category: true,
            is_archive: true,
            ..QueryFlags::default()
        },
        "post_tag" => QueryFlags {
            is_tag: true,
            is_archive: true,
            ..QueryFlags::default()
        },
        _ => QueryFlags {
            is_tax: true,
            is_archive: true,
            ..QueryFlags::default()
        },
    };
    QueryContext::new(flags, QueriedContent::Term(term)).with_posts(posts)
}

/// Query state for a search request.
#[allow(dead_code)]
pub fn search_query(keyword: &str, posts: Vec<Post>) -> QueryContext {
    QueryContext::new(
        QueryFlags {
            is_search: true,
            ..QueryFlags::default()
        },
        QueriedContent::None,
    )
    .with_posts(posts)
    .with_search_keyword(keyword)
}

/// Query state for an author archive request.
#[allow(dead_code)]
pub fn author_query(author: Author, posts: Vec<Post>) -> QueryContext {
    QueryContext::new(
        QueryFlags {
            is_author: true,
            is_archive: true,
            ..QueryFlags::default()
        },
        QueriedContent::Author(author),
    )
    .with_posts(posts)
}

/// A view registry with default-rendered templates at the given paths.
#[allow(dead_code)]
pub fn views(paths: &[&str]) -> ViewRegistry {
    let mut registry = ViewRegistry::new();
    for path in paths {
        registry.register(*path);
    }
    registry
}

/// A controller registry whose controllers respond with their own name.
#[allow(dead_code)]
pub fn controllers(names: &[&str]) -> ControllerRegistry {
    let mut registry = ControllerRegistry::new();
    for name in names {
        let body = name.to_string();
        registry.register(*name, move |_, _| body.clone().into_response());
    }
    registry
}

/// Query source backed by a path → query map, standing in for the CMS's
/// URL resolution. Unknown paths resolve to a not-found query.
#[allow(dead_code)]
pub struct PathQuerySource {
    by_path: HashMap<String, QueryContext>,
}

#[allow(dead_code)]
impl PathQuerySource {
    pub fn new() -> Self {
        Self {
            by_path: HashMap::new(),
        }
    }

    pub fn insert(mut self, path: &str, query: QueryContext) -> Self {
        self.by_path.insert(path.to_string(), query);
        self
    }
}

impl QuerySource for PathQuerySource {
    fn resolve(&self, request: &RequestContext) -> QueryContext {
        self.by_path.get(&request.path).cloned().unwrap_or_else(|| {
            QueryContext::new(
                QueryFlags {
                    is_404: true,
                    ..QueryFlags::default()
                },
                QueriedContent::None,
            )
        })
    }
}
