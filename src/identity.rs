/// Identity keys and site filtering for favorited URLs
use std::sync::LazyLock;

use regex::Regex;
use url::Url;

static WORK_ID: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\d+)\.html$").expect("work id pattern is valid")
});

/// What makes two favorites "the same page"
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum IdentityKey {
    /// Numeric ID from a trailing `<digits>.html` path segment
    WorkId(String),
    /// Exact URL, used when no work ID can be extracted
    Url(String),
}

impl IdentityKey {
    pub fn from_url(url: &str) -> IdentityKey {
        match extract_work_id(url) {
            Some(id) => IdentityKey::WorkId(id),
            None => IdentityKey::Url(url.trim().to_string()),
        }
    }
}

/// Extract the work ID from a URL
///
/// Only the path is considered: query strings and fragments are stripped
/// first, so `.../works/12.html?lang=ja` and `.../works/12.html` share ID `12`.
///
/// Examples:
/// - https://skeb.jp/@artist/works/12.html → 12
/// - https://skeb.jp/@artist/works/12.html#top → 12
/// - https://skeb.jp/@artist → None
pub fn extract_work_id(url: &str) -> Option<String> {
    let path = url
        .trim()
        .split(['?', '#'])
        .next()
        .unwrap_or_default();

    WORK_ID
        .captures(path)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

/// Check that a URL is an https page on `site_host`
///
/// Stricter than a string-prefix test: `https://skeb.jp.example.com` is rejected.
pub fn is_supported_site(url: &str, site_host: &str) -> bool {
    match Url::parse(url.trim()) {
        Ok(parsed) => {
            parsed.scheme() == "https"
                && parsed
                    .host_str()
                    .is_some_and(|host| host.eq_ignore_ascii_case(site_host))
        }
        Err(_) => false,
    }
}
