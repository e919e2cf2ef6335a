//! Platform inference for raw catalog URLs.
//!
//! Inputs are untrusted strings, not guaranteed to be well-formed URLs.
//! Root-relative paths are resolved against a caller-supplied origin so
//! the same logic works in tests and in any hosting environment.

use url::Url;

use crate::platform::Platform;

/// Local file extensions served from the site's own asset pipeline.
const LOCAL_VIDEO_EXTENSIONS: [&str; 3] = [".mp4", ".webm", ".ogg"];

/// Parse a URL string, resolving relative inputs against `origin`.
///
/// Returns `None` for strings that are not valid URLs even after joining;
/// callers translate that into their own miss signal.
pub(crate) fn parse_with_origin(url: &str, origin: &Url) -> Option<Url> {
    Url::options().base_url(Some(origin)).parse(url).ok()
}

/// Check whether a URL points at a locally hosted video file.
///
/// The query string and fragment are ignored; matching is case-insensitive.
/// A URL is local when it ends with a known video extension or lives under
/// the `videos/` asset path (with or without a leading slash).
pub fn is_local_video_url(url: &str) -> bool {
    let lower = url.to_ascii_lowercase();
    let path = lower.split(['?', '#']).next().unwrap_or("");

    LOCAL_VIDEO_EXTENSIONS
        .iter()
        .any(|ext| path.ends_with(ext))
        || path.starts_with("/videos/")
        || path.starts_with("videos/")
}

/// Infer the platform a media URL belongs to.
///
/// The local-file check runs before any host inspection: a locally hosted
/// file must never be treated as a remote embed, even when its path
/// superficially resembles one. Host matching is substring-based so that
/// `www.`, `m.`, and country subdomains all resolve. URLs that parse but
/// match no known host, and strings that do not parse at all, fall back to
/// the declared platform hint, else [`Platform::Local`].
///
/// # Example
/// ```
/// use url::Url;
/// use vinvite_media::{infer_platform, Platform, DEFAULT_ORIGIN};
///
/// let origin = Url::parse(DEFAULT_ORIGIN).unwrap();
/// assert_eq!(
///     infer_platform("https://youtu.be/abc123", None, &origin),
///     Platform::YouTube
/// );
/// assert_eq!(
///     infer_platform("/videos/teaser.mp4", None, &origin),
///     Platform::Local
/// );
/// ```
pub fn infer_platform(url: &str, declared: Option<Platform>, origin: &Url) -> Platform {
    if is_local_video_url(url) {
        return Platform::Local;
    }

    if let Some(parsed) = parse_with_origin(url, origin) {
        if let Some(host) = parsed.host_str() {
            let host = host.to_ascii_lowercase();

            if host.contains("youtube.com") || host.contains("youtu.be") {
                return Platform::YouTube;
            }
            if host.contains("instagram.com") {
                return Platform::Instagram;
            }
            if host.contains("pinterest.") || host.contains("pin.it") {
                return Platform::Pinterest;
            }
        }
    }

    declared.unwrap_or(Platform::Local)
}
