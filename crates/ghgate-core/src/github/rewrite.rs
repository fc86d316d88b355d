//! URL rewrites: blob view to raw form, and jsDelivr CDN equivalents.

use once_cell::sync::Lazy;
use regex::Regex;

use super::{BLOB_OR_RAW, RAW_CONTENT};

/// `.com/<author>/<repo>/<ref>/`: collapses the ref segment into the
/// `repo@ref` form jsDelivr expects.
static REF_SEGMENT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\.com/.*?/.+?)/(.+?/)").expect("pattern compiles"));

/// Rewrites a `github.com/.../blob/...` URL to its `/raw/` form.
/// Anything else passes through unchanged.
pub fn blob_to_raw(url: &str) -> String {
    if BLOB_OR_RAW.is_match(url) {
        url.replacen("/blob/", "/raw/", 1)
    } else {
        url.to_string()
    }
}

/// Rewrites blob and raw-content URLs to their jsDelivr CDN equivalents.
/// Anything else passes through unchanged.
pub fn to_jsdelivr(url: &str) -> String {
    if BLOB_OR_RAW.is_match(url) {
        return url
            .replacen("/blob/", "@", 1)
            .replacen("github.com", "cdn.jsdelivr.net/gh", 1);
    }
    if RAW_CONTENT.is_match(url) {
        let rewritten = REF_SEGMENT.replace(url, "${1}@${2}").into_owned();
        if rewritten.contains("raw.githubusercontent.com") {
            return rewritten.replacen("raw.githubusercontent.com", "cdn.jsdelivr.net/gh", 1);
        }
        if rewritten.contains("raw.github.com") {
            return rewritten.replacen("raw.github.com", "cdn.jsdelivr.net/gh", 1);
        }
        return rewritten;
    }
    url.to_string()
}
