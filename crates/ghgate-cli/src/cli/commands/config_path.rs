//! `ghgate config-path` – print the config file location.

use anyhow::Result;
use ghgate_core::config;

pub fn run_config_path() -> Result<()> {
    let path = config::config_path()?;
    println!("{}", path.display());
    Ok(())
}
