//! Media reference resolution: classification plus derived URLs.
//!
//! This is the surface the gallery consumes: one [`MediaReference`] in, one
//! [`ResolvedVideo`] out, recomputed per call with no retained state.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::instagram::normalize_instagram_url;
use crate::pinterest::pinterest_embed_url;
use crate::platform::Platform;
use crate::source::{infer_platform, parse_with_origin};
use crate::youtube::{extract_youtube_id, youtube_embed_url, youtube_thumbnail_url};

/// Fallback origin used to resolve root-relative catalog URLs when the
/// caller does not supply the hosting origin.
pub const DEFAULT_ORIGIN: &str = "https://localhost";

// ============================================================================
// Input Types
// ============================================================================

/// A raw media item from the product catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct MediaReference {
    /// Raw catalog URL (untrusted, not guaranteed to be well-formed)
    pub url: String,

    /// Upstream platform hint, used only when URL-based inference is
    /// inconclusive
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub declared_platform: Option<Platform>,
}

impl MediaReference {
    /// Create a reference with no platform hint.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            declared_platform: None,
        }
    }

    /// Attach a declared platform hint.
    pub fn with_platform(mut self, platform: Platform) -> Self {
        self.declared_platform = Some(platform);
        self
    }

    /// Parse from JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

// ============================================================================
// Output Types
// ============================================================================

/// Rendering strategy the gallery should use for a resolved video.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum RenderStrategy {
    /// Play the file with a native `<video>` tag
    NativeVideo,
    /// Load the derived embed URL in an iframe
    IframeEmbed,
    /// Hand the canonical permalink to the platform's embed script
    EmbedScript,
    /// Plain outbound hyperlink to the original URL
    ExternalLink,
}

impl RenderStrategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            RenderStrategy::NativeVideo => "native_video",
            RenderStrategy::IframeEmbed => "iframe_embed",
            RenderStrategy::EmbedScript => "embed_script",
            RenderStrategy::ExternalLink => "external_link",
        }
    }
}

impl std::fmt::Display for RenderStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Everything the gallery needs to render one video: the classification and
/// the derived URLs. Ephemeral, never mutated after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ResolvedVideo {
    /// Platform the URL was classified into
    pub platform: Platform,

    /// Platform player URL suitable for an iframe, when derivable
    pub embed_url: Option<String>,

    /// Preview image URL, when derivable without a network call
    pub thumbnail_url: Option<String>,

    /// Normalized form of the source URL with transient query/fragment data
    /// removed, used for stable display and embedding
    pub canonical_url: String,
}

impl ResolvedVideo {
    /// Rendering strategy implied by the classification and derivations.
    ///
    /// A missing embed URL on an iframe platform degrades to an outbound
    /// link; that fallback is always valid.
    pub fn render_strategy(&self) -> RenderStrategy {
        match self.platform {
            Platform::Local => RenderStrategy::NativeVideo,
            Platform::Instagram => RenderStrategy::EmbedScript,
            Platform::YouTube | Platform::Pinterest => {
                if self.embed_url.is_some() {
                    RenderStrategy::IframeEmbed
                } else {
                    RenderStrategy::ExternalLink
                }
            }
        }
    }

    /// Serialize to JSON string.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Serialize to pretty-printed JSON string.
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

// ============================================================================
// Resolver
// ============================================================================

/// Resolves catalog media references into renderable video descriptions.
///
/// The only state is the base origin used to resolve root-relative URLs;
/// every method is a pure function of its arguments and that origin.
///
/// # Example
/// ```
/// use vinvite_media::{MediaReference, Platform, RenderStrategy, VideoSourceResolver};
///
/// let resolver = VideoSourceResolver::default();
/// let resolved = resolver.resolve(&MediaReference::new("https://youtu.be/abc123"));
///
/// assert_eq!(resolved.platform, Platform::YouTube);
/// assert_eq!(resolved.render_strategy(), RenderStrategy::IframeEmbed);
/// assert_eq!(resolved.canonical_url, "https://www.youtube.com/watch?v=abc123");
/// ```
#[derive(Debug, Clone)]
pub struct VideoSourceResolver {
    origin: Url,
}

impl VideoSourceResolver {
    /// Create a resolver for the given hosting origin.
    pub fn new(origin: Url) -> Self {
        Self { origin }
    }

    /// The origin used to resolve root-relative URLs.
    pub fn origin(&self) -> &Url {
        &self.origin
    }

    /// Classify a media reference into its platform.
    pub fn classify(&self, media: &MediaReference) -> Platform {
        infer_platform(&media.url, media.declared_platform, &self.origin)
    }

    /// Resolve a media reference into its renderable description.
    pub fn resolve(&self, media: &MediaReference) -> ResolvedVideo {
        let url = media.url.as_str();
        let platform = self.classify(media);

        match platform {
            Platform::Local => ResolvedVideo {
                platform,
                embed_url: None,
                thumbnail_url: None,
                // Relative asset paths must stay relative for the player.
                canonical_url: media.url.clone(),
            },
            Platform::YouTube => ResolvedVideo {
                platform,
                embed_url: youtube_embed_url(url, &self.origin),
                thumbnail_url: youtube_thumbnail_url(url, &self.origin),
                canonical_url: extract_youtube_id(url, &self.origin)
                    .map(|id| format!("https://www.youtube.com/watch?v={}", id))
                    .unwrap_or_else(|| media.url.clone()),
            },
            Platform::Instagram => ResolvedVideo {
                platform,
                embed_url: None,
                thumbnail_url: None,
                canonical_url: normalize_instagram_url(url, &self.origin),
            },
            Platform::Pinterest => ResolvedVideo {
                platform,
                embed_url: pinterest_embed_url(url, &self.origin),
                thumbnail_url: None,
                canonical_url: strip_transient(url, &self.origin),
            },
        }
    }
}

impl Default for VideoSourceResolver {
    fn default() -> Self {
        Self::new(Url::parse(DEFAULT_ORIGIN).expect("default origin is a valid URL"))
    }
}

/// Drop query and fragment from a URL, best effort.
fn strip_transient(url: &str, origin: &Url) -> String {
    match parse_with_origin(url, origin) {
        Some(mut parsed) => {
            parsed.set_query(None);
            parsed.set_fragment(None);
            parsed.to_string()
        }
        None => url.to_string(),
    }
}

// ============================================================================
// JSON Convenience
// ============================================================================

/// Resolve a media reference from raw JSON input and return JSON output.
///
/// Uses the default origin; handlers that serve a specific deployment
/// construct a [`VideoSourceResolver`] directly instead.
///
/// # Example JSON Input
/// ```json
/// {
///   "url": "https://youtu.be/abc123",
///   "declared_platform": "youtube"
/// }
/// ```
pub fn resolve_media_json(input_json: &str) -> Result<String, serde_json::Error> {
    let media = MediaReference::from_json(input_json)?;
    let resolved = VideoSourceResolver::default().resolve(&media);
    resolved.to_json()
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn resolver() -> VideoSourceResolver {
        VideoSourceResolver::default()
    }

    // ========================================================================
    // Resolution per platform
    // ========================================================================

    #[test]
    fn test_resolve_local_file() {
        let resolved = resolver().resolve(&MediaReference::new("/videos/haldi-teaser.mp4"));

        assert_eq!(resolved.platform, Platform::Local);
        assert_eq!(resolved.embed_url, None);
        assert_eq!(resolved.thumbnail_url, None);
        assert_eq!(resolved.canonical_url, "/videos/haldi-teaser.mp4");
        assert_eq!(resolved.render_strategy(), RenderStrategy::NativeVideo);
    }

    #[test]
    fn test_resolve_youtube_watch_url() {
        let resolved = resolver().resolve(&MediaReference::new(
            "https://www.youtube.com/watch?v=xyz789&feature=share",
        ));

        assert_eq!(resolved.platform, Platform::YouTube);
        assert_eq!(
            resolved.embed_url.as_deref(),
            Some("https://www.youtube.com/embed/xyz789?rel=0&modestbranding=1&playsinline=1&autoplay=1")
        );
        assert_eq!(
            resolved.thumbnail_url.as_deref(),
            Some("https://i.ytimg.com/vi/xyz789/hqdefault.jpg")
        );
        assert_eq!(
            resolved.canonical_url,
            "https://www.youtube.com/watch?v=xyz789"
        );
        assert_eq!(resolved.render_strategy(), RenderStrategy::IframeEmbed);
    }

    #[test]
    fn test_resolve_youtube_without_id_falls_back_to_link() {
        let resolved = resolver().resolve(&MediaReference::new("https://youtube.com/"));

        assert_eq!(resolved.platform, Platform::YouTube);
        assert_eq!(resolved.embed_url, None);
        assert_eq!(resolved.thumbnail_url, None);
        assert_eq!(resolved.canonical_url, "https://youtube.com/");
        assert_eq!(resolved.render_strategy(), RenderStrategy::ExternalLink);
    }

    #[test]
    fn test_resolve_instagram_post() {
        let resolved =
            resolver().resolve(&MediaReference::new("http://instagram.com/p/abc?igsh=123"));

        assert_eq!(resolved.platform, Platform::Instagram);
        assert_eq!(resolved.embed_url, None);
        assert_eq!(resolved.canonical_url, "https://instagram.com/p/abc/");
        assert_eq!(resolved.render_strategy(), RenderStrategy::EmbedScript);
    }

    #[test]
    fn test_resolve_pinterest_pin() {
        let resolved =
            resolver().resolve(&MediaReference::new("https://pinterest.com/pin/555/?mt=login"));

        assert_eq!(resolved.platform, Platform::Pinterest);
        assert_eq!(
            resolved.embed_url.as_deref(),
            Some("https://assets.pinterest.com/ext/embed.html?id=555")
        );
        assert_eq!(resolved.canonical_url, "https://pinterest.com/pin/555/");
        assert_eq!(resolved.render_strategy(), RenderStrategy::IframeEmbed);
    }

    #[test]
    fn test_resolve_pinterest_short_link_degrades_to_link() {
        let resolved = resolver().resolve(&MediaReference::new("https://pin.it/AbCdEf"));

        assert_eq!(resolved.platform, Platform::Pinterest);
        assert_eq!(resolved.embed_url, None);
        assert_eq!(resolved.render_strategy(), RenderStrategy::ExternalLink);
    }

    // ========================================================================
    // Hints and fallbacks
    // ========================================================================

    #[test]
    fn test_declared_platform_used_when_inference_misses() {
        let media =
            MediaReference::new("https://cdn.example.com/w/123").with_platform(Platform::YouTube);
        let resolved = resolver().resolve(&media);

        assert_eq!(resolved.platform, Platform::YouTube);
        // The hint does not conjure an id out of a foreign URL shape.
        assert_eq!(resolved.embed_url, None);
        assert_eq!(resolved.render_strategy(), RenderStrategy::ExternalLink);
    }

    #[test]
    fn test_declared_platform_does_not_override_host_match() {
        let media =
            MediaReference::new("https://youtu.be/abc123").with_platform(Platform::Pinterest);

        assert_eq!(resolver().classify(&media), Platform::YouTube);
    }

    #[test]
    fn test_malformed_url_without_hint_resolves_local() {
        let resolved = resolver().resolve(&MediaReference::new("http://[not-a-url"));

        assert_eq!(resolved.platform, Platform::Local);
        assert_eq!(resolved.embed_url, None);
        assert_eq!(resolved.thumbnail_url, None);
        assert_eq!(resolved.canonical_url, "http://[not-a-url");
    }

    #[test]
    fn test_local_precedence_over_youtube_host() {
        let resolved = resolver().resolve(&MediaReference::new("https://youtube.com/clip.mp4"));

        assert_eq!(resolved.platform, Platform::Local);
        assert_eq!(resolved.canonical_url, "https://youtube.com/clip.mp4");
    }

    #[test]
    fn test_resolution_is_idempotent() {
        let media = MediaReference::new("https://youtu.be/abc123?t=30");
        assert_eq!(resolver().resolve(&media), resolver().resolve(&media));
    }

    #[test]
    fn test_custom_origin_resolves_relative_urls() {
        let resolver =
            VideoSourceResolver::new(Url::parse("https://studio.example.com").unwrap());
        let resolved = resolver.resolve(&MediaReference::new("/media/gallery"));

        // Site-relative non-video paths stay local under any origin.
        assert_eq!(resolved.platform, Platform::Local);
    }

    // ========================================================================
    // JSON Round Trips
    // ========================================================================

    #[test]
    fn test_media_reference_from_json_with_hint() {
        let media = MediaReference::from_json(
            r#"{"url": "https://pin.it/AbCdEf", "declared_platform": "pinterest"}"#,
        )
        .unwrap();

        assert_eq!(media.url, "https://pin.it/AbCdEf");
        assert_eq!(media.declared_platform, Some(Platform::Pinterest));
    }

    #[test]
    fn test_media_reference_from_json_defaults_hint() {
        let media = MediaReference::from_json(r#"{"url": "/videos/teaser.mp4"}"#).unwrap();
        assert_eq!(media.declared_platform, None);
    }

    #[test]
    fn test_resolve_media_json_output_shape() {
        let output =
            resolve_media_json(r#"{"url": "https://youtube.com/shorts/short001"}"#).unwrap();
        let resolved: ResolvedVideo = serde_json::from_str(&output).unwrap();

        assert_eq!(resolved.platform, Platform::YouTube);
        assert!(output.contains(r#""platform":"youtube""#));
        assert!(output.contains("short001"));
    }

    #[test]
    fn test_render_strategy_serialization() {
        assert_eq!(
            serde_json::to_string(&RenderStrategy::NativeVideo).unwrap(),
            r#""native_video""#
        );
        assert_eq!(RenderStrategy::IframeEmbed.as_str(), "iframe_embed");
    }
}
