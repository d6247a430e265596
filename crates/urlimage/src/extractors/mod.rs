// ABOUTME: Document lookups that pull raw image references out of a parsed page.
// ABOUTME: Includes meta-tag, link-icon, and inline-image lookups plus token-list matching.

//! Extraction lookups.
//!
//! Each lookup inspects a parsed document and returns the raw attribute value
//! it found, without resolving it against the page URL.
//!
//! Submodules:
//! - `tokens`: exact-membership matching for whitespace-separated attributes.
//! - `meta`: `<meta ... content>` lookups.
//! - `links`: `<link rel=... href>` icon lookups with size tie-breaking.
//! - `inline`: the image following the page's first heading.

pub mod inline;
pub mod links;
pub mod meta;
pub mod tokens;

/// Trim a raw attribute value, treating an empty result as absent.
pub(crate) fn non_empty(value: Option<&str>) -> Option<String> {
    let trimmed = value?.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
