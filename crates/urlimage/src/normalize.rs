// ABOUTME: Converts a raw image reference into an absolute URL using the page URL as base.
// ABOUTME: References that already carry a scheme and host pass through untouched.

use url::Url;

/// Resolve `raw` against `base`.
///
/// A reference that already has both a scheme and a host is returned
/// byte-for-byte. Anything else (scheme-relative, path-relative,
/// query- or fragment-only) goes through standard relative resolution.
/// Returns `None` if the reference cannot be joined to `base`.
pub fn normalize(base: &Url, raw: &str) -> Option<String> {
    if let Ok(parsed) = Url::parse(raw) {
        if parsed.host_str().is_some_and(|host| !host.is_empty()) {
            return Some(raw.to_string());
        }
    }

    match base.join(raw) {
        Ok(joined) => Some(joined.to_string()),
        Err(err) => {
            tracing::debug!(base = %base, raw, error = %err, "could not resolve reference");
            None
        }
    }
}
