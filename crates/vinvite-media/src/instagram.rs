//! Instagram permalink normalization.

use url::Url;

use crate::source::parse_with_origin;

/// Normalize an Instagram permalink for the embed script.
///
/// Forces the `https` scheme, ensures the path ends with a trailing slash,
/// and strips the query string and fragment. Normalization is advisory:
/// input that does not parse as a URL is returned unchanged, because the
/// embed renderer tolerates an un-normalized permalink.
///
/// # Example
/// ```
/// use url::Url;
/// use vinvite_media::{normalize_instagram_url, DEFAULT_ORIGIN};
///
/// let origin = Url::parse(DEFAULT_ORIGIN).unwrap();
/// assert_eq!(
///     normalize_instagram_url("http://instagram.com/p/abc?foo=bar", &origin),
///     "https://instagram.com/p/abc/"
/// );
/// ```
pub fn normalize_instagram_url(url: &str, origin: &Url) -> String {
    match parse_with_origin(url, origin) {
        Some(mut parsed) => {
            // set_scheme rejects some cross-scheme changes; a permalink that
            // refuses the upgrade keeps its scheme rather than failing.
            let _ = parsed.set_scheme("https");

            if !parsed.path().ends_with('/') {
                let path = format!("{}/", parsed.path());
                parsed.set_path(&path);
            }
            parsed.set_query(None);
            parsed.set_fragment(None);

            parsed.to_string()
        }
        None => url.to_string(),
    }
}
