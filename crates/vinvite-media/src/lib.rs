//! Video source classification and embed derivation for the Vinvite gallery.
//!
//! This crate provides the pure, synchronous resolution layer behind the
//! product media gallery:
//! - Platform inference for catalog URLs (local file, YouTube, Instagram,
//!   Pinterest)
//! - YouTube video id extraction plus thumbnail/player URL derivation
//! - Instagram permalink normalization
//! - Pinterest pin id extraction and embed URL derivation
//!
//! Every operation is total: parse failures never escape as errors, they
//! degrade to a miss (`None`) or a safe fallback value, so the rendering
//! layer can always fall back to a plain outbound link.

pub mod instagram;
pub mod pinterest;
pub mod platform;
pub mod resolve;
pub mod source;
pub mod youtube;

// Re-export common types
pub use instagram::normalize_instagram_url;
pub use pinterest::pinterest_embed_url;
pub use platform::{Platform, PlatformParseError};
pub use resolve::{
    resolve_media_json, MediaReference, RenderStrategy, ResolvedVideo, VideoSourceResolver,
    DEFAULT_ORIGIN,
};
pub use source::{infer_platform, is_local_video_url};
pub use youtube::{extract_youtube_id, youtube_embed_url, youtube_thumbnail_url};
