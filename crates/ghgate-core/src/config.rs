use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Global configuration loaded from `~/.config/ghgate/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GhgateConfig {
    /// Rewrite eligible file URLs to the jsDelivr CDN instead of mirroring.
    #[serde(default)]
    pub jsdelivr: bool,
    /// `author` or `author/repo` lines; when non-empty, only covered
    /// resources are served.
    #[serde(default)]
    pub allow_list: Vec<String>,
    /// Resources never served.
    #[serde(default)]
    pub deny_list: Vec<String>,
    /// Resources redirected straight to upstream instead of mirrored.
    #[serde(default)]
    pub pass_list: Vec<String>,
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("ghgate")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<GhgateConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = GhgateConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: GhgateConfig = toml::from_str(&data)?;
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_values() {
        let cfg = GhgateConfig::default();
        assert!(!cfg.jsdelivr);
        assert!(cfg.allow_list.is_empty());
        assert!(cfg.deny_list.is_empty());
        assert!(cfg.pass_list.is_empty());
    }

    #[test]
    fn config_toml_roundtrip() {
        let cfg = GhgateConfig {
            jsdelivr: true,
            allow_list: vec!["torvalds".into()],
            deny_list: vec!["spam/repo".into()],
            pass_list: vec!["*/mirror".into()],
        };
        let toml = toml::to_string_pretty(&cfg).unwrap();
        let parsed: GhgateConfig = toml::from_str(&toml).unwrap();
        assert_eq!(parsed.jsdelivr, cfg.jsdelivr);
        assert_eq!(parsed.allow_list, cfg.allow_list);
        assert_eq!(parsed.deny_list, cfg.deny_list);
        assert_eq!(parsed.pass_list, cfg.pass_list);
    }

    #[test]
    fn config_toml_missing_fields_default() {
        let cfg: GhgateConfig = toml::from_str("jsdelivr = true").unwrap();
        assert!(cfg.jsdelivr);
        assert!(cfg.allow_list.is_empty());

        let cfg: GhgateConfig = toml::from_str("").unwrap();
        assert!(!cfg.jsdelivr);
    }

    #[test]
    fn config_toml_lists() {
        let toml = r#"
            allow_list = ["torvalds", "rust-lang/rust"]
            deny_list = ["spam"]
        "#;
        let cfg: GhgateConfig = toml::from_str(toml).unwrap();
        assert_eq!(cfg.allow_list.len(), 2);
        assert_eq!(cfg.deny_list, vec!["spam"]);
        assert!(cfg.pass_list.is_empty());
    }
}
