//! CLI for the ghgate GitHub proxy front-door.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use ghgate_core::config;

use commands::{
    run_classify, run_completions, run_config_path, run_plan, run_resolve, run_rewrite,
};

/// Top-level CLI for the ghgate proxy front-door.
#[derive(Debug, Parser)]
#[command(name = "ghgate")]
#[command(about = "ghgate: GitHub URL normalization, validation, and route planning", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Normalize and validate one search input, printing the proxy path.
    Resolve {
        /// Free-form input as typed into the search box.
        input: String,
    },

    /// Show the full routing decision for one search input.
    Plan {
        /// Free-form input as typed into the search box.
        input: String,
        /// Rewrite to jsDelivr where eligible, regardless of config.
        #[arg(long)]
        jsdelivr: bool,
    },

    /// Classify a GitHub resource URL (kind, author, repo).
    Classify {
        /// Resource URL, scheme optional.
        url: String,
    },

    /// Rewrite a URL: blob view to raw, or to the jsDelivr CDN.
    Rewrite {
        /// Resource URL, scheme optional.
        url: String,
        /// Produce the jsDelivr CDN form instead of blob-to-raw.
        #[arg(long)]
        jsdelivr: bool,
    },

    /// Print the config file path.
    ConfigPath,

    /// Generate shell completions.
    Completions {
        /// Shell to generate for.
        shell: clap_complete::Shell,
    },
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Resolve { input } => run_resolve(&input)?,
            CliCommand::Plan { input, jsdelivr } => {
                let mut cfg = cfg;
                if jsdelivr {
                    cfg.jsdelivr = true;
                }
                run_plan(&input, &cfg)?;
            }
            CliCommand::Classify { url } => run_classify(&url)?,
            CliCommand::Rewrite { url, jsdelivr } => run_rewrite(&url, jsdelivr),
            CliCommand::ConfigPath => run_config_path()?,
            CliCommand::Completions { shell } => run_completions(shell),
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
