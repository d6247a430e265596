// ABOUTME: Strategy identifiers naming each way of finding a page's image, plus the default order.
// ABOUTME: Provides stable snake_case names for display, parsing, and serde.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// One named rule for extracting a raw image reference from a page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    /// `<meta itemprop="image">`, then `<meta property="image">`.
    SchemaImage,
    /// `og:image:secure_url`, then `og:image`.
    OgImage,
    /// `<meta name="twitter:image">`.
    TwitterImage,
    /// Largest `<link rel="icon">`.
    Icon,
    /// `/favicon.ico` at the site root, if it answers 200.
    FavIcon,
    /// Largest `<link rel="apple-touch-icon">`.
    AppleTouchIcon,
    /// First `<img>` following the first `<h1>`.
    FirstImage,
    #[serde(rename = "ms_square_70")]
    MsSquare70,
    #[serde(rename = "ms_square_150")]
    MsSquare150,
    #[serde(rename = "ms_square_310")]
    MsSquare310,
    #[serde(rename = "ms_wide_310")]
    MsWide310,
}

/// Order used when the caller does not supply one.
pub const DEFAULT_ORDER: &[Strategy] = &[
    Strategy::SchemaImage,
    Strategy::OgImage,
    Strategy::TwitterImage,
    Strategy::MsWide310,
    Strategy::MsSquare310,
    Strategy::AppleTouchIcon,
    Strategy::Icon,
    Strategy::MsSquare150,
    Strategy::MsSquare70,
    Strategy::FavIcon,
    Strategy::FirstImage,
];

impl Strategy {
    /// Every strategy, in declaration order.
    pub const ALL: [Strategy; 11] = [
        Strategy::SchemaImage,
        Strategy::OgImage,
        Strategy::TwitterImage,
        Strategy::Icon,
        Strategy::FavIcon,
        Strategy::AppleTouchIcon,
        Strategy::FirstImage,
        Strategy::MsSquare70,
        Strategy::MsSquare150,
        Strategy::MsSquare310,
        Strategy::MsWide310,
    ];

    /// Stable snake_case name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Strategy::SchemaImage => "schema_image",
            Strategy::OgImage => "og_image",
            Strategy::TwitterImage => "twitter_image",
            Strategy::Icon => "icon",
            Strategy::FavIcon => "fav_icon",
            Strategy::AppleTouchIcon => "apple_touch_icon",
            Strategy::FirstImage => "first_image",
            Strategy::MsSquare70 => "ms_square_70",
            Strategy::MsSquare150 => "ms_square_150",
            Strategy::MsSquare310 => "ms_square_310",
            Strategy::MsWide310 => "ms_wide_310",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Error returned when a strategy name is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown strategy: {0}")]
pub struct UnknownStrategy(pub String);

impl FromStr for Strategy {
    type Err = UnknownStrategy;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase().replace('-', "_");
        Strategy::ALL
            .into_iter()
            .find(|strategy| strategy.as_str() == wanted)
            .ok_or_else(|| UnknownStrategy(s.to_string()))
    }
}

/// Parse a comma-separated list of strategy names, e.g. `"og_image,fav_icon"`.
pub fn parse_ordering(list: &str) -> Result<Vec<Strategy>, UnknownStrategy> {
    list.split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(Strategy::from_str)
        .collect()
}
