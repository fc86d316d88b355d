//! `ghgate classify <url>` – classify a GitHub resource URL.

use anyhow::{bail, Result};
use ghgate_core::github;

pub fn run_classify(url: &str) -> Result<()> {
    let Some(resource) = github::classify(url) else {
        bail!("not a recognized GitHub resource URL: {url}");
    };
    match resource.repo {
        Some(repo) => println!("{} {}/{}", resource.kind, resource.author, repo),
        None => println!("{} {}", resource.kind, resource.author),
    }
    Ok(())
}
