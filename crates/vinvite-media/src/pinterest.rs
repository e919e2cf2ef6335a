//! Pinterest pin id extraction and embed URL derivation.

use url::Url;

use crate::source::parse_with_origin;

const PIN_EMBED_TEMPLATE: &str = "https://assets.pinterest.com/ext/embed.html?id=";

/// Derive the pin embed iframe URL from a Pinterest pin URL.
///
/// The pin id is the path segment immediately following the literal `pin`
/// segment. Returns `None` when `pin` is absent, is the last segment, or
/// the URL does not parse. Short `pin.it` links carry no pin id and are a
/// miss by construction; the caller falls back to an outbound link.
///
/// # Example
/// ```
/// use url::Url;
/// use vinvite_media::{pinterest_embed_url, DEFAULT_ORIGIN};
///
/// let origin = Url::parse(DEFAULT_ORIGIN).unwrap();
/// assert_eq!(
///     pinterest_embed_url("https://pinterest.com/pin/555/", &origin),
///     Some("https://assets.pinterest.com/ext/embed.html?id=555".to_string())
/// );
/// ```
pub fn pinterest_embed_url(url: &str, origin: &Url) -> Option<String> {
    let parsed = parse_with_origin(url, origin)?;

    let segments: Vec<&str> = parsed
        .path_segments()
        .map(|segments| segments.filter(|s| !s.is_empty()).collect())
        .unwrap_or_default();

    let id = segments
        .iter()
        .position(|segment| *segment == "pin")
        .and_then(|index| segments.get(index + 1))?;

    Some(format!("{}{}", PIN_EMBED_TEMPLATE, id))
}
