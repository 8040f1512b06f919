//! String helpers shared by the routing subsystem.
//!
//! Slugs arrive from the CMS possibly percent-encoded; they are decoded once
//! when hierarchies are built, and all comparisons downstream are exact and
//! case-sensitive.

use percent_encoding::percent_decode_str;

/// Percent-decode a slug. Invalid UTF-8 sequences are replaced rather than
/// rejected; a slug that fails to decode still has to compare as *something*.
pub fn url_decode(slug: &str) -> String {
    percent_decode_str(slug).decode_utf8_lossy().into_owned()
}

/// Split a dot-delimited routing URI into its segments.
///
/// `"page.about.team"` becomes `["page", "about", "team"]`. An empty string
/// yields no segments.
pub fn split_dot_path(uri: &str) -> Vec<String> {
    if uri.is_empty() {
        Vec::new()
    } else {
        uri.split('.').map(String::from).collect()
    }
}

/// PascalCase a slug for use in a controller identifier.
///
/// `"cat-food"` becomes `"CatFood"`; any non-alphanumeric run separates
/// words. Characters after the first of each word keep their case.
pub fn pascal_case(slug: &str) -> String {
    slug.split(|c: char| !c.is_alphanumeric())
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect()
}

/// Reduce a free-form name (e.g. a page-template name) to a slug:
/// lowercase, alphanumeric runs joined by single dashes.
pub fn slugify(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut pending_dash = false;
    for c in name.chars() {
        if c.is_alphanumeric() {
            if pending_dash && !out.is_empty() {
                out.push('-');
            }
            pending_dash = false;
            out.extend(c.to_lowercase());
        } else {
            pending_dash = true;
        }
    }
    out
}
