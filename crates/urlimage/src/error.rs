// ABOUTME: Error types for image resolution including the ErrorCode enum and ResolveError struct.
// ABOUTME: Provides categorized errors with convenience constructors and boolean helpers.

use std::fmt;

/// Error codes representing the categories of resolution failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    InvalidUrl,
    NotFound,
    Unreachable,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorCode::InvalidUrl => "invalid URL",
            ErrorCode::NotFound => "page not found",
            ErrorCode::Unreachable => "unreachable",
        };
        write!(f, "{}", s)
    }
}

/// The main error type for resolve operations.
///
/// Only `InvalidUrl` and `NotFound` ever escape [`Resolver::resolve`];
/// `Unreachable` is produced by the fetcher and absorbed by the resolver.
///
/// [`Resolver::resolve`]: crate::Resolver::resolve
#[derive(Debug, thiserror::Error)]
pub struct ResolveError {
    pub code: ErrorCode,
    pub url: String,
    pub op: String,
    #[source]
    pub source: Option<anyhow::Error>,
}

impl fmt::Display for ResolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "urlimage: {} {}: {}", self.op, self.url, self.code)?;
        if let Some(ref src) = self.source {
            write!(f, ": {}", src)?;
        }
        Ok(())
    }
}

impl ResolveError {
    /// Create an InvalidUrl error.
    pub fn invalid_url(
        url: impl Into<String>,
        op: impl Into<String>,
        source: Option<anyhow::Error>,
    ) -> Self {
        Self {
            code: ErrorCode::InvalidUrl,
            url: url.into(),
            op: op.into(),
            source,
        }
    }

    /// Create a NotFound error.
    pub fn not_found(
        url: impl Into<String>,
        op: impl Into<String>,
        source: Option<anyhow::Error>,
    ) -> Self {
        Self {
            code: ErrorCode::NotFound,
            url: url.into(),
            op: op.into(),
            source,
        }
    }

    /// Create an Unreachable error.
    pub fn unreachable(
        url: impl Into<String>,
        op: impl Into<String>,
        source: Option<anyhow::Error>,
    ) -> Self {
        Self {
            code: ErrorCode::Unreachable,
            url: url.into(),
            op: op.into(),
            source,
        }
    }

    /// Returns true if this is an InvalidUrl error.
    pub fn is_invalid_url(&self) -> bool {
        self.code == ErrorCode::InvalidUrl
    }

    /// Returns true if this is a NotFound error.
    pub fn is_not_found(&self) -> bool {
        self.code == ErrorCode::NotFound
    }

    /// Returns true if this is an Unreachable error.
    pub fn is_unreachable(&self) -> bool {
        self.code == ErrorCode::Unreachable
    }
}
