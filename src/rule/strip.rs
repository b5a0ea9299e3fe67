//! URL noise removal for regex rules.

use std::borrow::Cow;

use once_cell::sync::Lazy;
use regex::Regex;

/// Scheme runs (`https?:\/\/`) anywhere in the body, or a trailing path
/// fragment after the host part. The anchor character before the path is
/// captured so it survives the replacement.
static URL_NOISE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"http[s:\\/?]*/|([0-9a-zA-Z\]\).+*?}])\\?/[^\]\)\n]+(\[[^\]\n]*\]|\([^\)\n]\))*[^\]\)\n]*$",
    )
    .unwrap()
});

/// Strip URL scheme and path fragments from a regex rule body.
///
/// Filter lists write regex rules against full URLs, while routing rules only
/// ever see the domain. Bodies without a scheme or path are returned as-is.
///
/// # Examples
/// ```
/// use easylist2dat::rule::strip_url_noise;
///
/// assert_eq!(strip_url_noise(r"^https?:\/\/ads\.example\.com\/"), r"^ads\.example\.com\/");
/// assert_eq!(strip_url_noise(r"ads?\."), r"ads?\.");
/// ```
pub fn strip_url_noise(body: &str) -> Cow<'_, str> {
    URL_NOISE.replace_all(body, "${1}")
}
