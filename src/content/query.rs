//! Per-request query state: predicates plus the resolved content object.
//!
//! # Responsibilities
//! - Carry the CMS conditional flags and the queried content for one request
//! - Answer the fixed page-type → predicate table used by the URI validator
//! - Answer the single-argument predicate forms (`page.<slug>`, `tag.<slug>`, …)
//!
//! # Design Decisions
//! - Flags and the queried object are separate fields on purpose: the CMS
//!   can claim a content type while handing over an object of another kind,
//!   and callers must be able to observe the disagreement and skip.
//! - One `QueryContext` is built per request by the embedding layer and
//!   threaded explicitly into the validator and resolver; nothing in the
//!   bridge reads process-global request state.

use serde::{Deserialize, Serialize};

use crate::content::model::{Author, Post, PostType, Term};
use crate::support::url_decode;

/// The CMS conditional predicates for the current request, as plain flags.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QueryFlags {
    pub is_404: bool,
    pub is_search: bool,
    pub is_front_page: bool,
    pub is_home: bool,
    pub is_archive: bool,
    pub is_attachment: bool,
    pub is_date: bool,
    pub is_paged: bool,
    pub is_single: bool,
    pub is_singular: bool,
    pub is_page: bool,
    pub is_category: bool,
    pub is_post_type_archive: bool,
    pub is_tax: bool,
    pub is_tag: bool,
    pub is_author: bool,
}

/// The single entity the CMS resolved the current URL to.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum QueriedContent {
    Post(Post),
    Term(Term),
    Author(Author),
    PostType(PostType),
    /// Search results, 404 and plain archives resolve to no entity.
    #[default]
    None,
}

/// Read-only query state for one request.
#[derive(Debug, Clone, Default)]
pub struct QueryContext {
    flags: QueryFlags,
    queried: QueriedContent,
    posts: Vec<Post>,
    search_keyword: Option<String>,
    post_type: Option<String>,
}

impl QueryContext {
    pub fn new(flags: QueryFlags, queried: QueriedContent) -> Self {
        Self {
            flags,
            queried,
            ..Self::default()
        }
    }

    /// Attach the already-executed main query's result set.
    pub fn with_posts(mut self, posts: Vec<Post>) -> Self {
        self.posts = posts;
        self
    }

    pub fn with_search_keyword(mut self, keyword: impl Into<String>) -> Self {
        self.search_keyword = Some(keyword.into());
        self
    }

    /// Override the current post type name (otherwise derived from the
    /// queried content or the result set).
    pub fn with_post_type(mut self, post_type: impl Into<String>) -> Self {
        self.post_type = Some(post_type.into());
        self
    }

    pub fn flags(&self) -> &QueryFlags {
        &self.flags
    }

    pub fn queried(&self) -> &QueriedContent {
        &self.queried
    }

    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    pub fn search_keyword(&self) -> &str {
        self.search_keyword.as_deref().unwrap_or("")
    }

    pub fn queried_post(&self) -> Option<&Post> {
        match &self.queried {
            QueriedContent::Post(post) => Some(post),
            _ => None,
        }
    }

    pub fn queried_term(&self) -> Option<&Term> {
        match &self.queried {
            QueriedContent::Term(term) => Some(term),
            _ => None,
        }
    }

    pub fn queried_author(&self) -> Option<&Author> {
        match &self.queried {
            QueriedContent::Author(author) => Some(author),
            _ => None,
        }
    }

    /// Current post type name; falls back to the queried content, then the
    /// result set, then `post`.
    pub fn post_type(&self) -> String {
        if let Some(post_type) = &self.post_type {
            return post_type.clone();
        }
        match &self.queried {
            QueriedContent::Post(post) => post.post_type.clone(),
            QueriedContent::PostType(post_type) => post_type.name.clone(),
            _ => self
                .posts
                .first()
                .map(|p| p.post_type.clone())
                .unwrap_or_else(|| "post".to_string()),
        }
    }

    pub fn is_404(&self) -> bool {
        self.flags.is_404
    }

    pub fn is_search(&self) -> bool {
        self.flags.is_search
    }

    pub fn is_front_page(&self) -> bool {
        self.flags.is_front_page
    }

    pub fn is_home(&self) -> bool {
        self.flags.is_home
    }

    pub fn is_archive(&self) -> bool {
        self.flags.is_archive
    }

    pub fn is_single(&self) -> bool {
        self.flags.is_single
    }

    pub fn is_singular(&self) -> bool {
        self.flags.is_singular
    }

    pub fn is_page(&self) -> bool {
        self.flags.is_page
    }

    pub fn is_category(&self) -> bool {
        self.flags.is_category
    }

    pub fn is_post_type_archive(&self) -> bool {
        self.flags.is_post_type_archive
    }

    pub fn is_tax(&self) -> bool {
        self.flags.is_tax
    }

    pub fn is_tag(&self) -> bool {
        self.flags.is_tag
    }

    pub fn is_author(&self) -> bool {
        self.flags.is_author
    }

    /// The fixed page-type → predicate table. `None` means the name is not
    /// a recognized page type and generic URI matching should apply.
    pub fn generic_predicate(&self, page_type: &str) -> Option<bool> {
        let flags = &self.flags;
        let value = match page_type {
            "404" => flags.is_404,
            "search" => flags.is_search,
            "front_page" => flags.is_front_page,
            "home" => flags.is_home,
            "archive" => flags.is_archive,
            "attachment" => flags.is_attachment,
            "date" => flags.is_date,
            "paged" => flags.is_paged,
            "single" => flags.is_single,
            "singular" => flags.is_singular,
            "page" => flags.is_page,
            "category" => flags.is_category,
            "post_type_archive" => flags.is_post_type_archive,
            "taxonomy" => flags.is_tax,
            "tag" => flags.is_tag,
            "author" => flags.is_author,
            _ => return None,
        };
        Some(value)
    }

    /// Single-argument predicate forms: `page.<slug>`, `category.<slug>`,
    /// `tag.<slug>`, `taxonomy.<taxonomy>`, `single.<slug>`,
    /// `singular.<post-type>`, `post_type_archive.<post-type>`,
    /// `author.<nickname>`. Page types that take no argument ignore the
    /// selector. `None` means the page type is not recognized at all.
    pub fn selector_predicate(&self, page_type: &str, selector: &str) -> Option<bool> {
        let value = match page_type {
            "page" => {
                self.flags.is_page
                    && self
                        .queried_post()
                        .is_some_and(|p| url_decode(&p.slug) == selector)
            }
            "single" => {
                self.flags.is_single
                    && self
                        .queried_post()
                        .is_some_and(|p| url_decode(&p.slug) == selector)
            }
            "singular" => self.flags.is_singular && self.post_type() == selector,
            "category" => {
                self.flags.is_category
                    && self
                        .queried_term()
                        .is_some_and(|t| url_decode(&t.slug) == selector)
            }
            "tag" => {
                self.flags.is_tag
                    && self
                        .queried_term()
                        .is_some_and(|t| url_decode(&t.slug) == selector)
            }
            "taxonomy" => {
                self.flags.is_tax
                    && self
                        .queried_term()
                        .is_some_and(|t| url_decode(&t.taxonomy) == selector)
            }
            "post_type_archive" => self.flags.is_post_type_archive && self.post_type() == selector,
            "author" => {
                self.flags.is_author
                    && self
                        .queried_author()
                        .is_some_and(|a| a.nickname == selector)
            }
            _ => return self.generic_predicate(page_type),
        };
        Some(value)
    }

    /// Coarse content-type label for logs and metrics, in resolution
    /// priority order.
    pub fn kind(&self) -> &'static str {
        let flags = &self.flags;
        if flags.is_home || flags.is_front_page {
            "home"
        } else if flags.is_page {
            "page"
        } else if flags.is_singular {
            "post"
        } else if flags.is_post_type_archive {
            "post-archive"
        } else if flags.is_category || flags.is_tag || flags.is_tax {
            "term"
        } else if flags.is_author {
            "author"
        } else if flags.is_search {
            "search"
        } else if flags.is_archive {
            "archive"
        } else if flags.is_404 {
            "not-found"
        } else {
            "unknown"
        }
    }
}
