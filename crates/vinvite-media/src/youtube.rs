//! YouTube id extraction and thumbnail/player URL derivation.
//!
//! Supported URL shapes:
//! - `https://youtu.be/VIDEO_ID` (short link)
//! - `https://youtube.com/watch?v=VIDEO_ID` (canonical watch form)
//! - `https://youtube.com/shorts/VIDEO_ID`
//! - `https://youtube.com/embed/VIDEO_ID`
//!
//! Ids come from a curated catalog, so no length or charset validation is
//! applied; an id is whatever the matching URL shape carries.

use url::Url;

use crate::source::parse_with_origin;

/// Thumbnail template, high quality tier. Existence of the image at this
/// URL is not verified.
const THUMBNAIL_TEMPLATE: &str = "https://i.ytimg.com/vi";

/// Player parameters for inline gallery playback: autoplay on open, related
/// videos and branding chrome suppressed.
const EMBED_PARAMS: &str = "rel=0&modestbranding=1&playsinline=1&autoplay=1";

/// Extract the video id from a YouTube URL.
///
/// Checks run in order and the first hit wins: short-link path segment,
/// `v` query parameter, the segment following `shorts`, the segment
/// following `embed`. Returns `None` when the URL does not parse or none
/// of the shapes match.
///
/// # Example
/// ```
/// use url::Url;
/// use vinvite_media::{extract_youtube_id, DEFAULT_ORIGIN};
///
/// let origin = Url::parse(DEFAULT_ORIGIN).unwrap();
/// assert_eq!(
///     extract_youtube_id("https://youtu.be/abc123", &origin),
///     Some("abc123".to_string())
/// );
/// assert_eq!(extract_youtube_id("https://youtube.com/", &origin), None);
/// ```
pub fn extract_youtube_id(url: &str, origin: &Url) -> Option<String> {
    let parsed = parse_with_origin(url, origin)?;

    // Short links carry the id as the first path segment and nothing else;
    // a bare youtu.be/ is a miss, not a fallthrough.
    if parsed
        .host_str()
        .is_some_and(|host| host.to_ascii_lowercase().contains("youtu.be"))
    {
        return first_segment(&parsed);
    }

    if let Some((_, v)) = parsed.query_pairs().find(|(key, _)| key.as_ref() == "v") {
        if !v.is_empty() {
            return Some(v.into_owned());
        }
    }

    let segments: Vec<&str> = parsed
        .path_segments()
        .map(|segments| segments.filter(|s| !s.is_empty()).collect())
        .unwrap_or_default();

    segment_after(&segments, "shorts").or_else(|| segment_after(&segments, "embed"))
}

/// First non-empty path segment, if any.
fn first_segment(parsed: &Url) -> Option<String> {
    parsed
        .path_segments()
        .and_then(|mut segments| segments.find(|s| !s.is_empty()))
        .map(str::to_string)
}

/// Path segment immediately following the literal `marker` segment.
fn segment_after(segments: &[&str], marker: &str) -> Option<String> {
    segments
        .iter()
        .position(|segment| *segment == marker)
        .and_then(|index| segments.get(index + 1))
        .map(|s| s.to_string())
}

/// Derive the high-quality default thumbnail URL for a YouTube video.
///
/// Returns `None` whenever [`extract_youtube_id`] does.
pub fn youtube_thumbnail_url(url: &str, origin: &Url) -> Option<String> {
    let id = extract_youtube_id(url, origin)?;
    Some(format!("{}/{}/hqdefault.jpg", THUMBNAIL_TEMPLATE, id))
}

/// Derive the inline player URL for a YouTube video.
///
/// Returns `None` whenever [`extract_youtube_id`] does. The player
/// parameters are a fixed rendering policy, not negotiable per call.
pub fn youtube_embed_url(url: &str, origin: &Url) -> Option<String> {
    let id = extract_youtube_id(url, origin)?;
    Some(format!(
        "https://www.youtube.com/embed/{}?{}",
        id, EMBED_PARAMS
    ))
}
