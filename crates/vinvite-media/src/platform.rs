//! The closed set of video platforms the gallery can render.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Video platform a media URL belongs to.
///
/// Exactly one platform is assigned per media reference after resolution.
/// URLs that cannot be matched to a remote host fall back to the declared
/// platform hint if one is present, else [`Platform::Local`].
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema, Default,
)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    /// Locally hosted video file, played with a native `<video>` tag
    #[default]
    Local,
    /// YouTube video (watch, short-link, shorts, or embed form)
    YouTube,
    /// Instagram post/reel permalink, rendered via the embed script
    Instagram,
    /// Pinterest pin, rendered via the pin embed iframe
    Pinterest,
}

impl Platform {
    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Local => "local",
            Platform::YouTube => "youtube",
            Platform::Instagram => "instagram",
            Platform::Pinterest => "pinterest",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Error for platform names that are not part of the closed set.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown video platform: {0}")]
pub struct PlatformParseError(pub String);

impl FromStr for Platform {
    type Err = PlatformParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "local" => Ok(Platform::Local),
            "youtube" => Ok(Platform::YouTube),
            "instagram" => Ok(Platform::Instagram),
            "pinterest" => Ok(Platform::Pinterest),
            other => Err(PlatformParseError(other.to_string())),
        }
    }
}
