// ABOUTME: Main library entry point for urlimage, which infers a preview image for a web page.
// ABOUTME: Re-exports the public API: Resolver, ResolverBuilder, Strategy, ResolveError, ErrorCode, Options.

//! urlimage - infer a representative image URL for a web page.
//!
//! The page is fetched once and a prioritized chain of strategies
//! (structured data, Open Graph, Twitter cards, tile images, link icons,
//! the site favicon, and an inline-image heuristic) is checked until one
//! yields an image reference, which is returned as an absolute URL.
//!
//! # Example
//!
//! ```no_run
//! use urlimage::{ResolveError, Resolver, Strategy};
//!
//! fn main() -> Result<(), ResolveError> {
//!     let resolver = Resolver::builder().build();
//!     if let Some(image) = resolver.resolve("https://example.com", None)? {
//!         println!("{}", image);
//!     }
//!
//!     // Only consider social metadata.
//!     let social = [Strategy::OgImage, Strategy::TwitterImage];
//!     let image = resolver.resolve("https://example.com", Some(&social))?;
//!     println!("{:?}", image);
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod error;
pub mod extractors;
pub mod normalize;
pub mod options;
pub mod registry;
pub mod resource;
pub mod strategy;

pub use crate::client::{get_image_for_url, Resolver};
pub use crate::error::{ErrorCode, ResolveError};
pub use crate::normalize::normalize;
pub use crate::options::{Options, ResolverBuilder};
pub use crate::strategy::{parse_ordering, Strategy, UnknownStrategy, DEFAULT_ORDER};
