// ABOUTME: Heuristic lookup for an inline image placed right after the page's first <h1>.
// ABOUTME: Walks the heading's following siblings to the first <img> and reads its src.

use once_cell::sync::Lazy;
use scraper::{ElementRef, Html, Selector};

use super::non_empty;

static H1: Lazy<Selector> = Lazy::new(|| Selector::parse("h1").unwrap());

/// Returns the `src` of the first `<img>` sibling following the first `<h1>`.
pub fn image_after_heading(doc: &Html) -> Option<String> {
    let heading = doc.select(&H1).next()?;
    let image = heading
        .next_siblings()
        .filter_map(ElementRef::wrap)
        .find(|el| el.value().name() == "img")?;
    non_empty(image.value().attr("src"))
}
