//! GitHub resource URLs: classification and rewriting.
//!
//! The proxy accepts a fixed family of URL shapes: release and archive
//! downloads, blob/raw file views, the git smart-HTTP protocol, raw file
//! content, and gists. Classification extracts the owning author (and
//! repository where the shape has one) so access rules can be applied.

mod rewrite;

pub use rewrite::{blob_to_raw, to_jsdelivr};

use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

/// Kind of GitHub resource a URL points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceKind {
    /// `github.com/<author>/<repo>/releases/...` or `.../archive/...`
    ReleaseOrArchive,
    /// `github.com/<author>/<repo>/blob/...` or `.../raw/...`
    BlobOrRaw,
    /// `github.com/<author>/<repo>/info/...` or `.../git-...`
    GitProtocol,
    /// `raw.githubusercontent.com/<author>/<repo>/<ref>/...`
    RawContent,
    /// `gist.github.com/<author>/...`
    Gist,
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ResourceKind::ReleaseOrArchive => "release-or-archive",
            ResourceKind::BlobOrRaw => "blob-or-raw",
            ResourceKind::GitProtocol => "git-protocol",
            ResourceKind::RawContent => "raw-content",
            ResourceKind::Gist => "gist",
        };
        f.write_str(name)
    }
}

/// A classified GitHub resource and its extracted owner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GithubResource {
    pub kind: ResourceKind,
    pub author: String,
    /// Gist URLs carry no repository segment.
    pub repo: Option<String>,
}

static RELEASE_OR_ARCHIVE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?:https?://)?github\.com/(?P<author>.+?)/(?P<repo>.+?)/(?:releases|archive)/.*$")
        .expect("pattern compiles")
});

static BLOB_OR_RAW: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?:https?://)?github\.com/(?P<author>.+?)/(?P<repo>.+?)/(?:blob|raw)/.*$")
        .expect("pattern compiles")
});

static GIT_PROTOCOL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?:https?://)?github\.com/(?P<author>.+?)/(?P<repo>.+?)/(?:info|git-).*$")
        .expect("pattern compiles")
});

static RAW_CONTENT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^(?:https?://)?raw\.(?:githubusercontent|github)\.com/(?P<author>.+?)/(?P<repo>.+?)/.+?/.+$",
    )
    .expect("pattern compiles")
});

static GIST: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?:https?://)?gist\.(?:githubusercontent|github)\.com/(?P<author>.+?)/.+?/.+$")
        .expect("pattern compiles")
});

/// Classifies `url` as a GitHub resource, extracting author and repo.
///
/// The scheme is optional. Returns `None` for any URL outside the accepted
/// shapes.
pub fn classify(url: &str) -> Option<GithubResource> {
    let with_repo: [(ResourceKind, &Regex); 4] = [
        (ResourceKind::ReleaseOrArchive, &RELEASE_OR_ARCHIVE),
        (ResourceKind::BlobOrRaw, &BLOB_OR_RAW),
        (ResourceKind::GitProtocol, &GIT_PROTOCOL),
        (ResourceKind::RawContent, &RAW_CONTENT),
    ];
    for (kind, re) in with_repo {
        if let Some(caps) = re.captures(url) {
            return Some(GithubResource {
                kind,
                author: caps["author"].to_string(),
                repo: Some(caps["repo"].to_string()),
            });
        }
    }
    GIST.captures(url).map(|caps| GithubResource {
        kind: ResourceKind::Gist,
        author: caps["author"].to_string(),
        repo: None,
    })
}
