// ABOUTME: Token-list attribute matching for rel, itemprop, property, and name attributes.
// ABOUTME: Splits on whitespace and compares lowercased tokens by exact equality.

/// Returns true if the whitespace-separated `value` contains `token`.
///
/// Comparison is case-insensitive and exact: `"shortcut icon"` contains
/// `"icon"`, `"iconography"` does not.
pub fn contains_token(value: &str, token: &str) -> bool {
    let token = token.to_lowercase();
    value
        .split_whitespace()
        .any(|candidate| candidate.to_lowercase() == token)
}
