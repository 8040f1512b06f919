//! Hierarchy-aware pattern matching.
//!
//! # Responsibilities
//! - Decide whether a routing pattern covers a content item or one of its
//!   descendants
//! - Support `*` (any single level) and `**` (any remaining levels)
//!
//! # Design Decisions
//! - Comparison is exact and case-sensitive; slugs are decoded before they
//!   get here
//! - A hierarchy shorter than the pattern is viewing an ancestor of the
//!   target, which never matches
//! - Pure function, total over finite inputs; no regex

/// Returns true when the content at `hierarchy` is the item the routing
/// segments describe, or a descendant of it.
///
/// `hierarchy` is the root-first ancestry chain of the current content,
/// ending with the item itself. `routing` is the pattern's segment list:
/// literals, `*`, or a terminating `**`. Segments after a `**` are never
/// compared.
///
/// ```
/// use wp_bridge::routing::is_self_or_descendant;
///
/// let h = |s: &[&str]| s.iter().map(|x| x.to_string()).collect::<Vec<_>>();
/// assert!(is_self_or_descendant(&h(&["about"]), &h(&["about", "team"])));
/// assert!(is_self_or_descendant(&h(&["a", "*", "c"]), &h(&["a", "b", "c"])));
/// assert!(!is_self_or_descendant(&h(&["a", "b"]), &h(&["a"])));
/// ```
pub fn is_self_or_descendant(routing: &[String], hierarchy: &[String]) -> bool {
    if hierarchy.len() < routing.len() {
        return false;
    }
    for (pattern, actual) in routing.iter().zip(hierarchy.iter()) {
        match pattern.as_str() {
            "**" => return true,
            "*" => continue,
            literal => {
                if literal != actual {
                    return false;
                }
            }
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    fn segs(parts: &[&str]) -> Vec<String> {
        parts.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_empty_pattern_matches_anything() {
        assert!(is_self_or_descendant(&[], &segs(&["x"])));
        assert!(is_self_or_descendant(&[], &[]));
    }

    #[test]
    fn test_ancestor_view_never_matches() {
        assert!(!is_self_or_descendant(&segs(&["a", "b"]), &segs(&["a"])));
    }

    #[test]
    fn test_exact_and_descendant_matches() {
        assert!(is_self_or_descendant(&segs(&["a", "b"]), &segs(&["a", "b"])));
        assert!(is_self_or_descendant(&segs(&["a"]), &segs(&["a", "b", "c"])));
        assert!(!is_self_or_descendant(&segs(&["a", "b"]), &segs(&["a", "c"])));
    }

    #[test]
    fn test_single_level_wildcard() {
        assert!(is_self_or_descendant(
            &segs(&["a", "*", "c"]),
            &segs(&["a", "b", "c"])
        ));
        assert!(!is_self_or_descendant(
            &segs(&["a", "*", "c"]),
            &segs(&["a", "b", "d"])
        ));
    }

    #[test]
    fn test_rest_wildcard_short_circuits() {
        assert!(is_self_or_descendant(
            &segs(&["a", "**"]),
            &segs(&["a", "b", "c", "d"])
        ));
        // segments after ** are never compared
        assert!(is_self_or_descendant(
            &segs(&["a", "**", "zzz"]),
            &segs(&["a", "b", "c"])
        ));
        // but ** still needs its own position to exist
        assert!(!is_self_or_descendant(&segs(&["a", "**"]), &segs(&["a"])));
    }

    #[test]
    fn test_comparison_is_case_sensitive() {
        assert!(!is_self_or_descendant(&segs(&["About"]), &segs(&["about"])));
    }
}
