//! Action-resolution scenarios against synthetic query fixtures.

use wp_bridge::config::ResolverConfig;
use wp_bridge::content::{Author, Post, QueriedContent, QueryContext, QueryFlags, Term};
use wp_bridge::routing::{ActionResolver, ActionTarget, Candidate, ViewRegistry, EMPTY_CONTROLLERS};

mod common;

#[test]
fn test_most_specific_controller_wins() {
    let post = Post::new(3, "child", "page").with_parent(Post::new(2, "parent", "page"));
    let query = common::page_query(post);
    let c = common::controllers(&["PageParent", "PageParentChild"]);
    let v = ViewRegistry::new();
    let resolver = ActionResolver::new(&query, &c, &v, ResolverConfig::default());

    let action = resolver.resolve().expect("should resolve");
    assert_eq!(
        action.target,
        ActionTarget::Controller {
            name: "PageParentChild".to_string(),
            method: "index".to_string(),
        }
    );
}

#[test]
fn test_controller_chosen_over_view_at_same_depth() {
    let post = Post::new(1, "about", "page");
    let query = common::page_query(post);
    let c = common::controllers(&["PageAbout"]);
    let v = common::views(&["wp.page.about"]);
    let resolver = ActionResolver::new(&query, &c, &v, ResolverConfig::default());

    let action = resolver.resolve().expect("should resolve");
    assert!(matches!(
        action.target,
        ActionTarget::Controller { ref name, .. } if name == "PageAbout"
    ));
}

#[test]
fn test_page_resolves_to_view_when_no_controller_exists() {
    // page `about`, no ancestors, no custom template,
    // view `wp.page.about` exists, controller `PageAbout` does not
    let post = Post::new(1, "about", "page");
    let query = common::page_query(post.clone());
    let v = common::views(&["wp.page.about"]);
    let resolver = ActionResolver::new(&query, &EMPTY_CONTROLLERS, &v, ResolverConfig::default());

    let action = resolver.resolve().expect("should resolve");
    assert_eq!(
        action.target,
        ActionTarget::View {
            path: "wp.page.about".to_string()
        }
    );
    assert_eq!(action.data.view.as_deref(), Some("wp.page.about"));
    assert_eq!(action.data.post, Some(post));
}

#[test]
fn test_term_walk_stops_at_first_existing_view() {
    // term `cat-food` under `pet-category` with ancestor `food`; the
    // full-depth view is missing, the one-shorter view exists
    let term =
        Term::new(2, "cat-food", "pet-category").with_parent(Term::new(1, "food", "pet-category"));
    let posts = vec![Post::new(10, "kibble-review", "post")];
    let query = common::term_query(term, posts);
    let v = common::views(&["wp.archive.taxonomy.pet-category.food"]);
    let resolver = ActionResolver::new(&query, &EMPTY_CONTROLLERS, &v, ResolverConfig::default());

    let action = resolver.resolve().expect("should resolve");
    assert_eq!(
        action.target,
        ActionTarget::View {
            path: "wp.archive.taxonomy.pet-category.food".to_string()
        }
    );
    assert_eq!(action.data.posts.as_ref().map(Vec::len), Some(1));
    assert!(action.data.term.is_some());
}

#[test]
fn test_category_candidates_omit_taxonomy_name() {
    let term = Term::new(2, "cat", "category").with_parent(Term::new(1, "animal", "category"));
    let query = common::term_query(term, Vec::new());
    let v = common::views(&["wp.archive.category.animal.cat"]);
    let resolver = ActionResolver::new(&query, &EMPTY_CONTROLLERS, &v, ResolverConfig::default());

    let action = resolver.resolve().expect("should resolve");
    assert_eq!(
        action.target,
        ActionTarget::View {
            path: "wp.archive.category.animal.cat".to_string()
        }
    );
}

#[test]
fn test_post_tag_candidates_use_taxonomy_form() {
    let term = Term::new(5, "featured", "post_tag");
    let query = common::term_query(term, Vec::new());
    let v = common::views(&["wp.archive.taxonomy.post_tag.featured"]);
    let resolver = ActionResolver::new(&query, &EMPTY_CONTROLLERS, &v, ResolverConfig::default());

    let action = resolver.resolve().expect("should resolve");
    assert_eq!(
        action.target,
        ActionTarget::View {
            path: "wp.archive.taxonomy.post_tag.featured".to_string()
        }
    );
}

#[test]
fn test_fallback_chain_terminates_after_one_generic_step() {
    // archive-like content type with a declared generic fallback, nothing
    // registered anywhere: resolution must return None, not loop
    let query = QueryContext::new(
        QueryFlags {
            is_post_type_archive: true,
            is_archive: true,
            ..QueryFlags::default()
        },
        QueriedContent::None,
    )
    .with_post_type("book");
    let v = ViewRegistry::new();
    let resolver = ActionResolver::new(&query, &EMPTY_CONTROLLERS, &v, ResolverConfig::default());
    assert!(resolver.resolve().is_none());
}

#[test]
fn test_post_type_archive_falls_back_to_generic_archive() {
    let query = QueryContext::new(
        QueryFlags {
            is_post_type_archive: true,
            is_archive: true,
            ..QueryFlags::default()
        },
        QueriedContent::None,
    )
    .with_post_type("book")
    .with_posts(vec![Post::new(1, "dune", "book")]);
    let v = common::views(&["wp.archive"]);
    let resolver = ActionResolver::new(&query, &EMPTY_CONTROLLERS, &v, ResolverConfig::default());

    let action = resolver.resolve().expect("should resolve");
    assert_eq!(
        action.target,
        ActionTarget::View {
            path: "wp.archive".to_string()
        }
    );
    assert_eq!(action.data.posts.as_ref().map(Vec::len), Some(1));
}

#[test]
fn test_search_injects_keyword_and_posts() {
    let query = common::search_query("rust", vec![Post::new(1, "intro", "post")]);
    let v = common::views(&["wp.search"]);
    let resolver = ActionResolver::new(&query, &EMPTY_CONTROLLERS, &v, ResolverConfig::default());

    let action = resolver.resolve().expect("should resolve");
    assert_eq!(action.data.keyword.as_deref(), Some("rust"));
    assert_eq!(action.data.posts.as_ref().map(Vec::len), Some(1));
}

#[test]
fn test_author_archive_resolution() {
    let query = common::author_query(Author::new(7, "alice"), Vec::new());
    let v = common::views(&["wp.author.alice"]);
    let resolver = ActionResolver::new(&query, &EMPTY_CONTROLLERS, &v, ResolverConfig::default());

    let action = resolver.resolve().expect("should resolve");
    assert_eq!(
        action.target,
        ActionTarget::View {
            path: "wp.author.alice".to_string()
        }
    );
    assert!(action.data.author.is_some());
}

#[test]
fn test_home_resolution_injects_front_page_post() {
    let front = Post::new(1, "front", "page");
    let query = QueryContext::new(
        QueryFlags {
            is_front_page: true,
            ..QueryFlags::default()
        },
        QueriedContent::Post(front.clone()),
    );
    let v = common::views(&["wp.home"]);
    let resolver = ActionResolver::new(&query, &EMPTY_CONTROLLERS, &v, ResolverConfig::default());

    let action = resolver.resolve().expect("should resolve");
    assert_eq!(action.data.post, Some(front));
}

#[test]
fn test_type_mismatch_skips_branch() {
    // the flag claims a page, the queried object is a term: the page and
    // singular branches are skipped and nothing resolves
    let query = QueryContext::new(
        QueryFlags {
            is_page: true,
            is_singular: true,
            ..QueryFlags::default()
        },
        QueriedContent::Term(Term::new(1, "about", "category")),
    );
    let v = common::views(&["wp.page.about"]);
    let resolver = ActionResolver::new(&query, &EMPTY_CONTROLLERS, &v, ResolverConfig::default());
    assert!(resolver.resolve().is_none());
}

#[test]
fn test_explain_lists_candidates_most_specific_first() {
    let post = Post::new(3, "team", "page").with_parent(Post::new(2, "about", "page"));
    let query = common::page_query(post);
    let v = ViewRegistry::new();
    let resolver = ActionResolver::new(&query, &EMPTY_CONTROLLERS, &v, ResolverConfig::default());

    let probes = resolver.explain();
    assert_eq!(
        probes[..6],
        [
            Candidate::Controller("PageAboutTeam".to_string()),
            Candidate::View("wp.page.about.team".to_string()),
            Candidate::Controller("PageAbout".to_string()),
            Candidate::View("wp.page.about".to_string()),
            Candidate::Controller("Page".to_string()),
            Candidate::View("wp.page".to_string()),
        ]
    );
    // the singular branch's candidates follow the page branch's
    assert!(probes[6..].contains(&Candidate::View("wp.post.page".to_string())));
}

#[test]
fn test_resolve_view_returns_default_when_nothing_resolves() {
    let query = QueryContext::new(
        QueryFlags {
            is_404: true,
            ..QueryFlags::default()
        },
        QueriedContent::None,
    );
    let v = ViewRegistry::new();
    let resolver = ActionResolver::new(&query, &EMPTY_CONTROLLERS, &v, ResolverConfig::default());

    let mut extra = serde_json::Map::new();
    extra.insert("locale".to_string(), serde_json::json!("en"));
    let (view, data) = resolver.resolve_view("wp.fallback", extra);
    assert_eq!(view, "wp.fallback");
    assert_eq!(data.view.as_deref(), Some("wp.fallback"));
    assert_eq!(data.extra["locale"], "en");
}

#[test]
fn test_resolve_view_ignores_controllers() {
    let post = Post::new(1, "about", "page");
    let query = common::page_query(post);
    let c = common::controllers(&["PageAbout"]);
    let v = common::views(&["wp.page.about"]);
    let resolver = ActionResolver::new(&query, &c, &v, ResolverConfig::default());

    let (view, data) = resolver.resolve_view("wp.fallback", serde_json::Map::new());
    assert_eq!(view, "wp.page.about");
    assert!(data.post.is_some());
}
