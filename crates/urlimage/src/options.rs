// ABOUTME: Configuration options for the resolver including Options and ResolverBuilder.
// ABOUTME: ResolverBuilder provides a fluent API for constructing Resolver instances with custom settings.

use std::collections::HashMap;
use std::time::Duration;

use crate::client::Resolver;

/// Default User-Agent sent with every request.
pub const DEFAULT_USER_AGENT: &str = "urlimage/0.1";

/// Configuration options for the resolver.
///
/// `timeout` and `headers` apply to the page fetch only. The favicon check
/// goes out with neither.
#[derive(Debug, Clone)]
pub struct Options {
    pub timeout: Option<Duration>,
    pub user_agent: String,
    pub headers: HashMap<String, String>,
    pub http_client: Option<reqwest::blocking::Client>,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            timeout: None,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            headers: HashMap::new(),
            http_client: None,
        }
    }
}

/// Builder for constructing Resolver instances with custom configuration.
#[derive(Debug, Clone)]
pub struct ResolverBuilder {
    opts: Options,
}

impl ResolverBuilder {
    /// Create a new ResolverBuilder with default options.
    pub fn new() -> Self {
        Self {
            opts: Options::default(),
        }
    }

    /// Bound the page fetch by a timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.opts.timeout = Some(timeout);
        self
    }

    /// Set the User-Agent header.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.opts.user_agent = user_agent.into();
        self
    }

    /// Add a custom header to the page fetch.
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.opts.headers.insert(key.into(), value.into());
        self
    }

    /// Use a custom HTTP client.
    pub fn http_client(mut self, client: reqwest::blocking::Client) -> Self {
        self.opts.http_client = Some(client);
        self
    }

    /// Build the Resolver with the configured options.
    pub fn build(self) -> Resolver {
        Resolver::new(self.opts)
    }
}

impl Default for ResolverBuilder {
    fn default() -> Self {
        Self::new()
    }
}
