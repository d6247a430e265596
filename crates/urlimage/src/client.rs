// ABOUTME: The Resolver that fetches a page once and walks the strategy chain over it.
// ABOUTME: Provides resolve(), resolve_html(), and extract() plus the get_image_for_url() shortcut.

use std::time::Duration;

use scraper::Html;
use url::Url;

use crate::error::{ErrorCode, ResolveError};
use crate::normalize::normalize;
use crate::options::{Options, ResolverBuilder};
use crate::registry::{self, PageContext};
use crate::resource::{fetch, FetchOptions};
use crate::strategy::{Strategy, DEFAULT_ORDER};

/// Infers a preview image URL for web pages.
pub struct Resolver {
    opts: Options,
    http_client: reqwest::blocking::Client,
}

impl Resolver {
    /// Create a new ResolverBuilder for configuring the resolver.
    pub fn builder() -> ResolverBuilder {
        ResolverBuilder::new()
    }

    /// Create a new Resolver with the given options.
    pub fn new(opts: Options) -> Self {
        let http_client = opts.http_client.clone().unwrap_or_else(|| {
            reqwest::blocking::Client::builder()
                .user_agent(&opts.user_agent)
                .timeout(None::<Duration>)
                .gzip(true)
                .brotli(true)
                .deflate(true)
                .build()
                .expect("failed to build HTTP client")
        });

        Self { opts, http_client }
    }

    /// Resolve the preview image for `url`.
    ///
    /// Strategies run in `ordering` (or [`DEFAULT_ORDER`] when `None`) and the
    /// first hit is returned as an absolute URL. An unreachable page yields
    /// `Ok(None)`; a 404 yields a `NotFound` error.
    pub fn resolve(
        &self,
        url: &str,
        ordering: Option<&[Strategy]>,
    ) -> Result<Option<String>, ResolveError> {
        let Some((page_url, doc)) = self.load(url, "Resolve")? else {
            return Ok(None);
        };
        Ok(self.run_chain(&page_url, &doc, ordering))
    }

    /// Resolve the preview image from markup the caller already holds.
    ///
    /// No page fetch is made, but a `FavIcon` strategy still sends a HEAD to the site.
    pub fn resolve_html(
        &self,
        html: &str,
        url: &str,
        ordering: Option<&[Strategy]>,
    ) -> Result<Option<String>, ResolveError> {
        let page_url = parse_page_url(url, "ResolveHtml")?;
        let doc = Html::parse_document(html);
        Ok(self.run_chain(&page_url, &doc, ordering))
    }

    /// Fetch `url` and run a single strategy, returning its raw reference
    /// without resolving it against the page URL.
    pub fn extract(&self, strategy: Strategy, url: &str) -> Result<Option<String>, ResolveError> {
        let Some((page_url, doc)) = self.load(url, "Extract")? else {
            return Ok(None);
        };
        let page = PageContext {
            url: &page_url,
            doc: &doc,
            http: &self.http_client,
        };
        Ok(registry::run(strategy, &page))
    }

    /// Validate and fetch `url`. Unreachable pages come back as `Ok(None)`.
    fn load(&self, url: &str, op: &str) -> Result<Option<(Url, Html)>, ResolveError> {
        if url.trim().is_empty() {
            return Err(ResolveError::invalid_url(
                url,
                op,
                Some(anyhow::anyhow!("empty URL")),
            ));
        }

        let page_url = match Url::parse(url) {
            Ok(page_url) => page_url,
            Err(err) => {
                tracing::warn!(url, error = %err, "page unreachable: malformed URL");
                return Ok(None);
            }
        };

        let fetch_opts = FetchOptions {
            headers: self.opts.headers.clone(),
            timeout: self.opts.timeout,
        };

        match fetch(&self.http_client, url, &fetch_opts) {
            Ok(fetched) => Ok(Some((page_url, fetched.document()))),
            Err(err) if err.code == ErrorCode::Unreachable => {
                tracing::warn!(url, error = %err, "page unreachable");
                Ok(None)
            }
            Err(err) => Err(err),
        }
    }

    fn run_chain(&self, page_url: &Url, doc: &Html, ordering: Option<&[Strategy]>) -> Option<String> {
        let page = PageContext {
            url: page_url,
            doc,
            http: &self.http_client,
        };

        let ordering = ordering.unwrap_or(DEFAULT_ORDER);
        let (strategy, raw) = ordering
            .iter()
            .find_map(|&strategy| registry::run(strategy, &page).map(|raw| (strategy, raw)))?;

        let resolved = normalize(page_url, &raw)?;
        tracing::info!(url = %page_url, strategy = %strategy, image = %resolved, "resolved image");
        Some(resolved)
    }
}

impl Default for Resolver {
    fn default() -> Self {
        Self::new(Options::default())
    }
}

fn parse_page_url(url: &str, op: &str) -> Result<Url, ResolveError> {
    if url.trim().is_empty() {
        return Err(ResolveError::invalid_url(
            url,
            op,
            Some(anyhow::anyhow!("empty URL")),
        ));
    }
    Url::parse(url).map_err(|e| {
        ResolveError::invalid_url(url, op, Some(anyhow::anyhow!("malformed URL: {}", e)))
    })
}

/// Resolve the preview image for `url` with a default [`Resolver`].
pub fn get_image_for_url(
    url: &str,
    ordering: Option<&[Strategy]>,
) -> Result<Option<String>, ResolveError> {
    Resolver::default().resolve(url, ordering)
}
