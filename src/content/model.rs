//! Content snapshots handed to the bridge by the embedding layer.
//!
//! # Responsibilities
//! - Carry the resolved content entity for the current request
//! - Walk parent links to produce root-first ancestry chains
//! - Decode slugs exactly once, at hierarchy-building time
//!
//! # Design Decisions
//! - Snapshots are plain owned data; the bridge never calls back into the
//!   CMS while matching or resolving.
//! - Ancestry is represented as parent links, not pre-flattened lists, so
//!   the chain is derived the same way the CMS derives it.

use serde::{Deserialize, Serialize};

use crate::support::url_decode;

/// A single content item (page or post of any post type).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Post {
    pub id: u64,
    /// Raw slug as stored by the CMS; possibly percent-encoded.
    pub slug: String,
    pub title: String,
    /// Post type name, e.g. `page`, `post`, `book`.
    pub post_type: String,
    /// Custom page-template name, when one is assigned.
    pub template: Option<String>,
    /// Parent item, for hierarchical post types.
    pub parent: Option<Box<Post>>,
}

impl Post {
    pub fn new(id: u64, slug: impl Into<String>, post_type: impl Into<String>) -> Self {
        Self {
            id,
            slug: slug.into(),
            post_type: post_type.into(),
            ..Self::default()
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_template(mut self, template: impl Into<String>) -> Self {
        self.template = Some(template.into());
        self
    }

    pub fn with_parent(mut self, parent: Post) -> Self {
        self.parent = Some(Box::new(parent));
        self
    }

    /// Ancestors of this item, root-first, not including the item itself.
    pub fn ancestors(&self) -> Vec<&Post> {
        let mut chain = Vec::new();
        let mut current = self.parent.as_deref();
        while let Some(parent) = current {
            chain.push(parent);
            current = parent.parent.as_deref();
        }
        chain.reverse();
        chain
    }

    /// Root-first decoded slugs from the topmost ancestor down to this item.
    pub fn ancestry_slugs(&self) -> Vec<String> {
        let mut slugs: Vec<String> = self
            .ancestors()
            .iter()
            .map(|p| url_decode(&p.slug))
            .collect();
        slugs.push(url_decode(&self.slug));
        slugs
    }
}

/// A taxonomy term (category, tag, or custom taxonomy).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Term {
    pub id: u64,
    /// Raw slug as stored by the CMS; possibly percent-encoded.
    pub slug: String,
    pub name: String,
    /// Taxonomy this term belongs to, e.g. `category`, `post_tag`.
    pub taxonomy: String,
    pub parent: Option<Box<Term>>,
}

impl Term {
    pub fn new(id: u64, slug: impl Into<String>, taxonomy: impl Into<String>) -> Self {
        Self {
            id,
            slug: slug.into(),
            taxonomy: taxonomy.into(),
            ..Self::default()
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_parent(mut self, parent: Term) -> Self {
        self.parent = Some(Box::new(parent));
        self
    }

    /// Ancestors of this term, root-first. A parent whose id equals the
    /// child's own id ends the walk; that shape occurs in corrupted term
    /// tables and must not loop.
    pub fn ancestors(&self) -> Vec<&Term> {
        let mut chain = Vec::new();
        let mut child_id = self.id;
        let mut current = self.parent.as_deref();
        while let Some(parent) = current {
            if parent.id == child_id {
                break;
            }
            chain.push(parent);
            child_id = parent.id;
            current = parent.parent.as_deref();
        }
        chain.reverse();
        chain
    }

    /// Root-first decoded slugs from the topmost ancestor down to this term.
    pub fn ancestry_slugs(&self) -> Vec<String> {
        let mut slugs: Vec<String> = self
            .ancestors()
            .iter()
            .map(|t| url_decode(&t.slug))
            .collect();
        slugs.push(url_decode(&self.slug));
        slugs
    }
}

/// An author whose archive is being viewed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Author {
    pub id: u64,
    pub nickname: String,
    pub display_name: String,
}

impl Author {
    pub fn new(id: u64, nickname: impl Into<String>) -> Self {
        Self {
            id,
            nickname: nickname.into(),
            ..Self::default()
        }
    }
}

/// Descriptor for a post type whose archive is being viewed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PostType {
    pub name: String,
    pub label: String,
}

impl PostType {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }
}
