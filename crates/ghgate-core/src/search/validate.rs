//! Candidate URL validation against the allowed GitHub hosts.

use thiserror::Error;
use url::Url;

/// Hosts a candidate URL may target.
pub const ALLOWED_HOSTS: [&str; 3] = [
    "github.com",
    "raw.githubusercontent.com",
    "gist.github.com",
];

/// Why a candidate URL was rejected.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TargetError {
    #[error("not a parseable URL: {0:?}")]
    Unparseable(String),
    #[error("unsupported scheme {0:?}")]
    UnsupportedScheme(String),
    #[error("host {0:?} is not a GitHub host")]
    DisallowedHost(String),
}

/// Checks that `candidate` parses as an HTTP(S) URL whose host is exactly one
/// of [`ALLOWED_HOSTS`].
///
/// The candidate is parsed rather than prefix-matched, so lookalike hosts such
/// as `github.com.evil.com` or `github.community` never pass. Host comparison
/// is case-insensitive.
pub fn validate_target(candidate: &str) -> Result<(), TargetError> {
    let parsed =
        Url::parse(candidate).map_err(|_| TargetError::Unparseable(candidate.to_string()))?;
    match parsed.scheme() {
        "http" | "https" => {}
        other => return Err(TargetError::UnsupportedScheme(other.to_string())),
    }
    let host = parsed
        .host_str()
        .ok_or_else(|| TargetError::Unparseable(candidate.to_string()))?
        .to_ascii_lowercase();
    if ALLOWED_HOSTS.contains(&host.as_str()) {
        Ok(())
    } else {
        Err(TargetError::DisallowedHost(host))
    }
}
