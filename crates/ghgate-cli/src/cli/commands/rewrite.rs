//! `ghgate rewrite <url>` – blob-to-raw or jsDelivr rewriting.

use ghgate_core::github;

pub fn run_rewrite(url: &str, jsdelivr: bool) {
    let rewritten = if jsdelivr {
        github::to_jsdelivr(url)
    } else {
        github::blob_to_raw(url)
    };
    println!("{rewritten}");
}
