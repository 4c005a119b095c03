/// URL shape check for the creation form
use regex::Regex;
use std::sync::LazyLock;

/// Optional http(s) scheme, a dotted host, then host/path/query/fragment characters.
/// Word characters are ASCII only; internationalized hosts must arrive punycoded.
static URL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:https?://)?[A-Za-z0-9_.-]+(?:\.[A-Za-z0-9_.-]+)+[A-Za-z0-9_\-.~:/?#\[\]@!$&'()*+,;=]+$")
        .expect("URL pattern is a valid regex")
});

/// Check whether a candidate string looks like a website URL.
///
/// This is deliberately permissive: it accepts bare hosts like `example.com`
/// and does not resolve or normalize anything.
///
/// Examples:
/// - `example.com` → true
/// - `https://example.com/path?x=1` → true
/// - `not a url` → false
/// - `` → false
pub fn is_valid_url(candidate: &str) -> bool {
    URL_PATTERN.is_match(candidate)
}
