//! The configuration model
//!
//! This is what the user provides through the optional config file. The CLI
//! overrides certain aspects of it when running commands.

pub mod rt;

use crate::common;
use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::PathBuf;

/// Default config file name.
pub const CONFIG_FILE: &str = "AssetPost.toml";

/// Base path prefix applied to rewritten asset references when neither the
/// CLI nor the config file provides one.
pub const DEFAULT_BASE: &str = "frontend-public/";

/// The persisted configuration model
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct Configuration {
    #[serde(default)]
    pub html: Html,
}

/// Config options for the HTML asset rewriter.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct Html {
    /// The base path prepended to every rewritten asset reference.
    ///
    /// Used verbatim: no trailing separator is added or removed.
    pub base: Option<String>,
}

/// Load the configuration, falling back to defaults when no file is present.
pub async fn load(path: Option<PathBuf>) -> Result<Configuration> {
    let path = path.unwrap_or_else(|| PathBuf::from(CONFIG_FILE));
    if !common::path_exists(&path).await? {
        return Ok(Configuration::default());
    }

    let text = tokio::fs::read_to_string(&path)
        .await
        .with_context(|| format!("error reading config file {:?}", path))?;
    toml::from_str(&text).with_context(|| format!("error parsing config file {:?}", path))
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn parse_full_config() {
        let cfg: Configuration = toml::from_str(
            r#"
[html]
base = "assets/v2/"
"#,
        )
        .expect("error parsing config");
        assert_eq!(Some("assets/v2/".to_string()), cfg.html.base);
    }

    #[test]
    fn parse_empty_config() {
        let cfg: Configuration = toml::from_str("").expect("error parsing config");
        assert_eq!(Configuration::default(), cfg);
    }

    #[tokio::test]
    async fn load_missing_file_yields_default() {
        let cfg = load(Some("does-not-exist.toml".into()))
            .await
            .expect("error loading config");
        assert_eq!(Configuration::default(), cfg);
    }
}
