// ABOUTME: Link-tag icon lookups that pick the largest declared icon among matching <link> tags.
// ABOUTME: Scores the sizes attribute ("any" beats any dimension) and breaks ties by document order.

use std::cmp::Reverse;

use once_cell::sync::Lazy;
use scraper::{ElementRef, Html, Selector};

use super::non_empty;
use super::tokens::contains_token;

static LINK: Lazy<Selector> = Lazy::new(|| Selector::parse("link").unwrap());

/// Declared size of an icon, ordered so that `Any` outranks every dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum IconSize {
    Declared(u64),
    Any,
}

/// Scores a `sizes` attribute value by its first token.
///
/// `"any"` scores [`IconSize::Any`]. `"WxH"` scores the smaller of W and H.
/// A missing, empty, or malformed value scores `Declared(0)`.
pub fn icon_size(sizes: Option<&str>) -> IconSize {
    let Some(first) = sizes.and_then(|s| s.split_whitespace().next()) else {
        return IconSize::Declared(0);
    };

    let first = first.to_lowercase();
    if first == "any" {
        return IconSize::Any;
    }

    let dimensions: Result<Vec<u64>, _> = first.split('x').map(str::parse::<u64>).collect();
    match dimensions {
        Ok(dims) => IconSize::Declared(dims.into_iter().min().unwrap_or(0)),
        Err(_) => IconSize::Declared(0),
    }
}

/// Returns the `href` of the largest `<link>` whose `rel` contains `rel`.
pub fn icon_href(doc: &Html, rel: &str) -> Option<String> {
    let mut candidates: Vec<ElementRef> = doc
        .select(&LINK)
        .filter(|el| {
            el.value()
                .attr("rel")
                .is_some_and(|value| contains_token(value, rel))
        })
        .collect();

    // sort_by_key is stable, so equal sizes keep document order.
    candidates.sort_by_key(|el| Reverse(icon_size(el.value().attr("sizes"))));

    let best = candidates.first()?;
    non_empty(best.value().attr("href"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(links: &str) -> Html {
        Html::parse_document(&format!("<html><head>{}</head><body></body></html>", links))
    }

    #[test]
    fn icon_size_scores() {
        assert_eq!(icon_size(None), IconSize::Declared(0));
        assert_eq!(icon_size(Some("")), IconSize::Declared(0));
        assert_eq!(icon_size(Some("32x32")), IconSize::Declared(32));
        assert_eq!(icon_size(Some("57X72")), IconSize::Declared(57));
        assert_eq!(icon_size(Some("ANY")), IconSize::Any);
        assert_eq!(icon_size(Some("big")), IconSize::Declared(0));
        assert_eq!(icon_size(Some("16x")), IconSize::Declared(0));
    }

    #[test]
    fn icon_size_uses_first_token() {
        assert_eq!(icon_size(Some("16x16 64x64")), IconSize::Declared(16));
        assert_eq!(icon_size(Some("any 16x16")), IconSize::Any);
    }

    #[test]
    fn any_outranks_dimensions() {
        assert!(IconSize::Any > IconSize::Declared(u64::MAX));
        assert!(IconSize::Declared(32) > IconSize::Declared(16));
    }

    #[test]
    fn picks_any_over_sized() {
        let d = doc(r#"
            <link rel="icon" href="/16.png" sizes="16x16">
            <link rel="icon" href="/32.png" sizes="32x32">
            <link rel="icon" href="/any.svg" sizes="any">
            <link rel="icon" href="/plain.ico">
        "#);
        assert_eq!(icon_href(&d, "icon"), Some("/any.svg".to_string()));
    }

    #[test]
    fn picks_largest_without_any() {
        let d = doc(r#"
            <link rel="icon" href="/16.png" sizes="16x16">
            <link rel="icon" href="/32.png" sizes="32x32">
            <link rel="icon" href="/plain.ico">
        "#);
        assert_eq!(icon_href(&d, "icon"), Some("/32.png".to_string()));
    }

    #[test]
    fn huge_dimensions_still_score() {
        assert_eq!(
            icon_size(Some("5000000000x5000000000")),
            IconSize::Declared(5_000_000_000)
        );
        let d = doc(r#"
            <link rel="icon" href="/small.png" sizes="16x16">
            <link rel="icon" href="/huge.png" sizes="5000000000x5000000000">
        "#);
        assert_eq!(icon_href(&d, "icon"), Some("/huge.png".to_string()));
    }

    #[test]
    fn ties_keep_document_order() {
        let d = doc(r#"
            <link rel="icon" href="/first.png">
            <link rel="icon" href="/second.png" sizes="bogus">
        "#);
        assert_eq!(icon_href(&d, "icon"), Some("/first.png".to_string()));
    }

    #[test]
    fn shortcut_icon_matches() {
        let d = doc(r#"<link rel="shortcut icon" href="/favicon.png">"#);
        assert_eq!(icon_href(&d, "icon"), Some("/favicon.png".to_string()));
    }

    #[test]
    fn iconography_does_not_match() {
        let d = doc(r#"<link rel="iconography" href="/nope.png">"#);
        assert_eq!(icon_href(&d, "icon"), None);
    }

    #[test]
    fn apple_touch_icon_is_separate_token() {
        let d = doc(r#"
            <link rel="icon" href="/icon.png" sizes="512x512">
            <link rel="apple-touch-icon" href="/apple.png" sizes="180x180">
        "#);
        assert_eq!(icon_href(&d, "apple-touch-icon"), Some("/apple.png".to_string()));
        assert_eq!(icon_href(&d, "icon"), Some("/icon.png".to_string()));
    }

    #[test]
    fn winner_without_href_is_absent() {
        let d = doc(r#"
            <link rel="icon" sizes="64x64">
            <link rel="icon" href="/small.png" sizes="16x16">
        "#);
        assert_eq!(icon_href(&d, "icon"), None);
    }
}
