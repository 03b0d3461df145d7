use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::store::DEFAULT_FILE_NAME;
use crate::token::DEFAULT_TOKEN_PREFIX;

/// Global configuration loaded from `~/.config/quicklink/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuickLinkConfig {
    /// Text placed before the numeric hash in every short token.
    #[serde(default = "default_token_prefix")]
    pub token_prefix: String,
    /// Mappings file; if missing, `~/.local/state/quicklink/url_mappings.txt`.
    #[serde(default)]
    pub store_path: Option<PathBuf>,
}

fn default_token_prefix() -> String {
    DEFAULT_TOKEN_PREFIX.to_string()
}

impl Default for QuickLinkConfig {
    fn default() -> Self {
        Self {
            token_prefix: default_token_prefix(),
            store_path: None,
        }
    }
}

impl QuickLinkConfig {
    /// Mappings file to use: `override_path` if given, then `store_path`, then the XDG default.
    pub fn resolve_store_path(&self, override_path: Option<PathBuf>) -> Result<PathBuf> {
        match override_path.or_else(|| self.store_path.clone()) {
            Some(p) => Ok(p),
            None => default_store_path(),
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("quicklink")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Default mappings file: `~/.local/state/quicklink/url_mappings.txt`.
pub fn default_store_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("quicklink")?;
    xdg_dirs
        .place_state_file(DEFAULT_FILE_NAME)
        .context("create quicklink state dir")
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<QuickLinkConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = QuickLinkConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml).with_context(|| format!("write config: {}", path.display()))?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path).with_context(|| format!("read config: {}", path.display()))?;
    let cfg: QuickLinkConfig =
        toml::from_str(&data).with_context(|| format!("parse config: {}", path.display()))?;
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_values() {
        let cfg = QuickLinkConfig::default();
        assert_eq!(cfg.token_prefix, "short.ly/");
        assert!(cfg.store_path.is_none());
    }

    #[test]
    fn config_toml_roundtrip() {
        let cfg = QuickLinkConfig {
            token_prefix: "go/".to_string(),
            store_path: Some(PathBuf::from("/var/lib/quicklink/map.txt")),
        };
        let toml = toml::to_string_pretty(&cfg).unwrap();
        let parsed: QuickLinkConfig = toml::from_str(&toml).unwrap();
        assert_eq!(parsed.token_prefix, "go/");
        assert_eq!(parsed.store_path, cfg.store_path);
    }

    #[test]
    fn config_toml_empty_uses_defaults() {
        let cfg: QuickLinkConfig = toml::from_str("").unwrap();
        assert_eq!(cfg.token_prefix, DEFAULT_TOKEN_PREFIX);
        assert!(cfg.store_path.is_none());
    }

    #[test]
    fn config_toml_custom_values() {
        let toml = r#"
            token_prefix = "q.ly/"
            store_path = "/tmp/links.txt"
        "#;
        let cfg: QuickLinkConfig = toml::from_str(toml).unwrap();
        assert_eq!(cfg.token_prefix, "q.ly/");
        assert_eq!(cfg.store_path.as_deref(), Some(std::path::Path::new("/tmp/links.txt")));
    }

    #[test]
    fn resolve_store_path_precedence() {
        let cfg = QuickLinkConfig {
            token_prefix: default_token_prefix(),
            store_path: Some(PathBuf::from("/from/config.txt")),
        };
        assert_eq!(
            cfg.resolve_store_path(Some(PathBuf::from("/from/flag.txt"))).unwrap(),
            PathBuf::from("/from/flag.txt")
        );
        assert_eq!(
            cfg.resolve_store_path(None).unwrap(),
            PathBuf::from("/from/config.txt")
        );
    }
}
