// ABOUTME: Meta-tag lookups reading the content attribute of the first matching <meta>.
// ABOUTME: Matching is by token-list membership on a chosen attribute (itemprop, property, name).

use once_cell::sync::Lazy;
use scraper::{Html, Selector};

use super::non_empty;
use super::tokens::contains_token;

static META: Lazy<Selector> = Lazy::new(|| Selector::parse("meta").unwrap());

/// Returns the `content` of the first `<meta>` whose `attr` contains `token`.
///
/// Only the first match is consulted. If it carries no usable `content`, the
/// lookup is absent even when a later tag would have matched.
pub fn meta_content(doc: &Html, attr: &str, token: &str) -> Option<String> {
    let meta = doc.select(&META).find(|el| {
        el.value()
            .attr(attr)
            .is_some_and(|value| contains_token(value, token))
    })?;
    non_empty(meta.value().attr("content"))
}

/// Tries each `(attr, token)` pair in order, returning the first hit.
pub fn first_meta_content(doc: &Html, candidates: &[(&str, &str)]) -> Option<String> {
    candidates
        .iter()
        .find_map(|(attr, token)| meta_content(doc, attr, token))
}
