//! Route planning: what the proxy does with a validated candidate URL.
//!
//! Pure decision logic over [`crate::github`] classification and
//! [`crate::access`] rule lists; no request is performed here.

use std::fmt;

use crate::access::RuleSet;
use crate::config::GhgateConfig;
use crate::github::{self, ResourceKind};

/// Why a candidate was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DenyReason {
    /// The URL is not one of the accepted GitHub resource shapes.
    NotGithubResource,
    /// A non-empty allow list does not cover the resource.
    NotAllowed,
    /// The deny list covers the resource.
    Denied,
}

impl fmt::Display for DenyReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self {
            DenyReason::NotGithubResource => "not a GitHub resource",
            DenyReason::NotAllowed => "not covered by the allow list",
            DenyReason::Denied => "covered by the deny list",
        };
        f.write_str(reason)
    }
}

/// Planned handling for one candidate URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoutePlan {
    Deny(DenyReason),
    /// Send the client to the jsDelivr CDN form of the URL.
    Jsdelivr(String),
    /// Send the client straight to the upstream URL.
    Redirect(String),
    /// Fetch the upstream URL and stream it through the mirror.
    Fetch(String),
}

/// Decides how the proxy handles `candidate`.
///
/// Deny checks run first (classification, allow list, deny list). Blob and
/// raw-content URLs move to jsDelivr when the config enables it or the pass
/// list covers the resource; blob views otherwise become raw URLs. Pass-listed
/// resources are redirected instead of mirrored.
pub fn plan(candidate: &str, cfg: &GhgateConfig) -> RoutePlan {
    let Some(resource) = github::classify(candidate) else {
        return RoutePlan::Deny(DenyReason::NotGithubResource);
    };
    let repo = resource.repo.as_deref();

    let allow = RuleSet::parse_lines(&cfg.allow_list);
    if !allow.is_empty() && !allow.matches(&resource.author, repo) {
        return RoutePlan::Deny(DenyReason::NotAllowed);
    }
    if RuleSet::parse_lines(&cfg.deny_list).matches(&resource.author, repo) {
        return RoutePlan::Deny(DenyReason::Denied);
    }
    let pass_by = RuleSet::parse_lines(&cfg.pass_list).matches(&resource.author, repo);

    let cdn_eligible = matches!(
        resource.kind,
        ResourceKind::BlobOrRaw | ResourceKind::RawContent
    );
    if (cfg.jsdelivr || pass_by) && cdn_eligible {
        return RoutePlan::Jsdelivr(github::to_jsdelivr(candidate));
    }

    let upstream = if resource.kind == ResourceKind::BlobOrRaw {
        github::blob_to_raw(candidate)
    } else {
        candidate.to_string()
    };
    if pass_by {
        return RoutePlan::Redirect(upstream);
    }
    RoutePlan::Fetch(upstream)
}
