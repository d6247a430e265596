// ABOUTME: Strategy registry mapping each Strategy to the lookup that implements it.
// ABOUTME: Built once on first use; lookups run against a shared read-only PageContext.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use scraper::Html;
use url::Url;

use crate::extractors::inline::image_after_heading;
use crate::extractors::links::icon_href;
use crate::extractors::meta::{first_meta_content, meta_content};
use crate::resource::head_status;
use crate::strategy::Strategy;

/// Everything a lookup may inspect for one page.
pub struct PageContext<'a> {
    pub url: &'a Url,
    pub doc: &'a Html,
    pub http: &'a reqwest::blocking::Client,
}

/// How a strategy finds its raw reference. Variants with a field are the
/// same lookup specialised by a fixed token or tag name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lookup {
    Schema,
    OpenGraph,
    Twitter,
    LinkIcon(&'static str),
    TileMeta(&'static str),
    Favicon,
    ImageAfterHeading,
}

impl Lookup {
    /// Run the lookup, returning the raw (unresolved) reference.
    pub fn run(&self, page: &PageContext<'_>) -> Option<String> {
        match self {
            Lookup::Schema => {
                first_meta_content(page.doc, &[("itemprop", "image"), ("property", "image")])
            }
            Lookup::OpenGraph => first_meta_content(
                page.doc,
                &[
                    ("property", "og:image:secure_url"),
                    ("property", "og:image"),
                ],
            ),
            Lookup::Twitter => meta_content(page.doc, "name", "twitter:image"),
            Lookup::LinkIcon(rel) => icon_href(page.doc, rel),
            Lookup::TileMeta(name) => meta_content(page.doc, "name", name),
            Lookup::Favicon => check_favicon(page),
            Lookup::ImageAfterHeading => image_after_heading(page.doc),
        }
    }
}

static REGISTRY: Lazy<HashMap<Strategy, Lookup>> = Lazy::new(|| {
    HashMap::from([
        (Strategy::SchemaImage, Lookup::Schema),
        (Strategy::OgImage, Lookup::OpenGraph),
        (Strategy::TwitterImage, Lookup::Twitter),
        (Strategy::Icon, Lookup::LinkIcon("icon")),
        (Strategy::AppleTouchIcon, Lookup::LinkIcon("apple-touch-icon")),
        (Strategy::FavIcon, Lookup::Favicon),
        (Strategy::FirstImage, Lookup::ImageAfterHeading),
        (
            Strategy::MsSquare70,
            Lookup::TileMeta("msapplication-square70x70logo"),
        ),
        (
            Strategy::MsSquare150,
            Lookup::TileMeta("msapplication-square150x150logo"),
        ),
        (
            Strategy::MsSquare310,
            Lookup::TileMeta("msapplication-square310x310logo"),
        ),
        (
            Strategy::MsWide310,
            Lookup::TileMeta("msapplication-wide310x150logo"),
        ),
    ])
});

/// Returns the lookup registered for `strategy`.
pub fn lookup(strategy: Strategy) -> Option<&'static Lookup> {
    REGISTRY.get(&strategy)
}

/// Run `strategy` against `page`.
pub fn run(strategy: Strategy, page: &PageContext<'_>) -> Option<String> {
    let result = lookup(strategy)?.run(page);
    tracing::debug!(
        strategy = %strategy,
        found = result.is_some(),
        "strategy checked"
    );
    result
}

/// Site-root favicon for `page`, e.g. `https://host:8443/favicon.ico`.
pub fn favicon_url(page: &Url) -> Option<Url> {
    page.join("/favicon.ico").ok()
}

fn check_favicon(page: &PageContext<'_>) -> Option<String> {
    let icon_url = favicon_url(page.url)?;
    match head_status(page.http, icon_url.as_str()) {
        Ok(head) if head.is_ok_at_url() => Some(icon_url.to_string()),
        Ok(head) => {
            tracing::debug!(
                url = %icon_url,
                status = head.status,
                redirected = head.redirected,
                "no favicon"
            );
            None
        }
        Err(err) => {
            tracing::debug!(url = %icon_url, error = %err, "favicon check failed");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;

    fn client() -> reqwest::blocking::Client {
        reqwest::blocking::Client::new()
    }

    fn run_on(strategy: Strategy, html: &str, url: &str) -> Option<String> {
        let doc = Html::parse_document(html);
        let url = Url::parse(url).unwrap();
        let http = client();
        let page = PageContext {
            url: &url,
            doc: &doc,
            http: &http,
        };
        run(strategy, &page)
    }

    #[test]
    fn every_strategy_is_registered() {
        for strategy in Strategy::ALL {
            assert!(lookup(strategy).is_some(), "{} missing", strategy);
        }
    }

    #[test]
    fn schema_prefers_itemprop() {
        let html = r#"
            <meta property="image" content="/property.png">
            <meta itemprop="image" content="/itemprop.png">
        "#;
        assert_eq!(
            run_on(Strategy::SchemaImage, html, "https://example.com"),
            Some("/itemprop.png".to_string())
        );
    }

    #[test]
    fn schema_falls_back_to_property() {
        let html = r#"<meta property="image" content="/property.png">"#;
        assert_eq!(
            run_on(Strategy::SchemaImage, html, "https://example.com"),
            Some("/property.png".to_string())
        );
    }

    #[test]
    fn open_graph_prefers_secure_url() {
        let html = r#"
            <meta property="og:image" content="http://example.com/plain.png">
            <meta property="og:image:secure_url" content="https://example.com/secure.png">
        "#;
        assert_eq!(
            run_on(Strategy::OgImage, html, "https://example.com"),
            Some("https://example.com/secure.png".to_string())
        );
    }

    #[test]
    fn open_graph_plain() {
        let html = r#"<meta property="og:image" content="http://example.com/plain.png">"#;
        assert_eq!(
            run_on(Strategy::OgImage, html, "https://example.com"),
            Some("http://example.com/plain.png".to_string())
        );
    }

    #[test]
    fn tile_names_are_distinct() {
        let html = r#"
            <meta name="msapplication-square70x70logo" content="/70.png">
            <meta name="msapplication-square150x150logo" content="/150.png">
            <meta name="msapplication-square310x310logo" content="/310.png">
            <meta name="msapplication-wide310x150logo" content="/wide.png">
        "#;
        let url = "https://example.com";
        assert_eq!(run_on(Strategy::MsSquare70, html, url), Some("/70.png".into()));
        assert_eq!(run_on(Strategy::MsSquare150, html, url), Some("/150.png".into()));
        assert_eq!(run_on(Strategy::MsSquare310, html, url), Some("/310.png".into()));
        assert_eq!(run_on(Strategy::MsWide310, html, url), Some("/wide.png".into()));
    }

    #[test]
    fn favicon_url_keeps_port_and_drops_path() {
        let page = Url::parse("http://example.com:8080/a/b?q=1#frag").unwrap();
        assert_eq!(
            favicon_url(&page).unwrap().as_str(),
            "http://example.com:8080/favicon.ico"
        );
    }

    #[test]
    fn favicon_present() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method("HEAD").path("/favicon.ico");
            then.status(200);
        });

        let result = run_on(Strategy::FavIcon, "<html></html>", &server.url("/some/page"));
        mock.assert();
        assert_eq!(result, Some(server.url("/favicon.ico")));
    }

    #[test]
    fn favicon_missing() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method("HEAD").path("/favicon.ico");
            then.status(404);
        });

        let result = run_on(Strategy::FavIcon, "<html></html>", &server.url("/"));
        mock.assert();
        assert_eq!(result, None);
    }

    #[test]
    fn favicon_requires_exact_200() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method("HEAD").path("/favicon.ico");
            then.status(204);
        });

        assert_eq!(
            run_on(Strategy::FavIcon, "<html></html>", &server.url("/")),
            None
        );
    }

    #[test]
    fn favicon_redirect_is_not_a_hit() {
        let server = MockServer::start();
        let target = server.url("/assets/favicon.png");
        let redirect = server.mock(|when, then| {
            when.method("HEAD").path("/favicon.ico");
            then.status(301).header("location", target.as_str());
        });
        server.mock(|when, then| {
            when.method("HEAD").path("/assets/favicon.png");
            then.status(200);
        });

        let result = run_on(Strategy::FavIcon, "<html></html>", &server.url("/"));
        redirect.assert();
        assert_eq!(result, None);
    }

    #[test]
    fn favicon_unreachable_host() {
        assert_eq!(
            run_on(Strategy::FavIcon, "<html></html>", "http://127.0.0.1:1/"),
            None
        );
    }
}
