// ABOUTME: Resource handling module for fetching pages and probing resources over HTTP.
// ABOUTME: Classifies 404 and transport failures, decodes charsets, and parses the page into a document.

use std::collections::HashMap;
use std::time::Duration;

use scraper::Html;

use crate::error::ResolveError;

/// Options for fetching a page.
#[derive(Debug, Clone, Default)]
pub struct FetchOptions {
    pub headers: HashMap<String, String>,
    pub timeout: Option<Duration>,
}

/// Result of a completed fetch. Any status other than 404 lands here.
#[derive(Debug, Clone)]
pub struct FetchResult {
    pub status: u16,
    pub content_type: Option<String>,
    pub body: Vec<u8>,
}

impl FetchResult {
    /// Decode the body as UTF-8 text, using charset hints from content-type header.
    pub fn text_utf8(&self) -> String {
        decode_body(&self.body, self.content_type.as_deref())
    }

    /// Decode and parse the body into a document.
    pub fn document(&self) -> Html {
        Html::parse_document(&self.text_utf8())
    }
}

/// Decode body bytes to a String using charset from content-type header or detection.
fn decode_body(body: &[u8], content_type: Option<&str>) -> String {
    if let Some(ct) = content_type {
        if let Some(charset) = extract_charset(ct) {
            if let Some(encoding) = encoding_rs::Encoding::for_label(charset.as_bytes()) {
                let (decoded, _, _) = encoding.decode(body);
                return decoded.into_owned();
            }
        }
    }

    let mut detector = chardetng::EncodingDetector::new();
    detector.feed(body, true);
    let encoding = detector.guess(None, true);
    let (decoded, _, _) = encoding.decode(body);
    decoded.into_owned()
}

/// Extract charset value from Content-Type header.
fn extract_charset(content_type: &str) -> Option<String> {
    let lower = content_type.to_lowercase();
    for part in lower.split(';') {
        let trimmed = part.trim();
        if let Some(charset) = trimmed.strip_prefix("charset=") {
            let charset = charset.trim_matches('"').trim_matches('\'');
            return Some(charset.to_string());
        }
    }
    None
}

/// Fetch a page with a single GET.
///
/// A 404 yields `NotFound`. Any transport failure (timeout, DNS, refused
/// connection, truncated body) yields `Unreachable`. No retries.
pub fn fetch(
    client: &reqwest::blocking::Client,
    url: &str,
    opts: &FetchOptions,
) -> Result<FetchResult, ResolveError> {
    let mut request = client.get(url);
    for (key, value) in &opts.headers {
        request = request.header(key, value);
    }
    if let Some(timeout) = opts.timeout {
        request = request.timeout(timeout);
    }

    let response = request.send().map_err(|e| {
        ResolveError::unreachable(url, "Fetch", Some(anyhow::anyhow!("request failed: {}", e)))
    })?;

    let status = response.status().as_u16();
    if status == 404 {
        return Err(ResolveError::not_found(
            url,
            "Fetch",
            Some(anyhow::anyhow!("the web page does not exist")),
        ));
    }

    let content_type = response
        .headers()
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .map(|s| s.to_lowercase());

    let body = response.bytes().map_err(|e| {
        ResolveError::unreachable(
            url,
            "Fetch",
            Some(anyhow::anyhow!("failed to read body: {}", e)),
        )
    })?;

    tracing::debug!(url, status, bytes = body.len(), "fetched page");

    Ok(FetchResult {
        status,
        content_type,
        body: body.to_vec(),
    })
}

/// Outcome of a HEAD request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeadResult {
    pub status: u16,
    /// The client followed a redirect, so `status` belongs to another URL.
    pub redirected: bool,
}

impl HeadResult {
    /// True only when `url` itself answered 200.
    pub fn is_ok_at_url(&self) -> bool {
        self.status == 200 && !self.redirected
    }
}

/// Issue a HEAD request and report the response status.
///
/// Sent without the page fetch's timeout or custom headers.
pub fn head_status(
    client: &reqwest::blocking::Client,
    url: &str,
) -> Result<HeadResult, ResolveError> {
    let response = client.head(url).send().map_err(|e| {
        ResolveError::unreachable(url, "Head", Some(anyhow::anyhow!("request failed: {}", e)))
    })?;
    let redirected = response.url().as_str() != url;
    Ok(HeadResult {
        status: response.status().as_u16(),
        redirected,
    })
}
