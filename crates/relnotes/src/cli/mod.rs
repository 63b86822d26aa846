//! CLI definition and command handling

pub mod commands;
pub mod output;

use std::path::Path;

use tracing::debug;

use relnotes_core::config::{load_config, load_config_or_default, Config};

pub use commands::{GetChangelogCommand, TranslateChangelogCommand};

/// Load the configuration named on the command line, or search for one
/// starting at `search_dir`, falling back to defaults.
pub fn resolve_config(explicit: Option<&Path>, search_dir: &Path) -> anyhow::Result<Config> {
    let config = match explicit {
        Some(path) => load_config(path)?,
        None => {
            let (config, path) = load_config_or_default(search_dir)?;
            debug!(path = ?path, "configuration resolved");
            config
        }
    };
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_resolve_config_defaults() {
        let temp = TempDir::new().unwrap();
        let config = resolve_config(None, temp.path()).unwrap();
        assert!(config.module("csi-nfs").is_some());
    }

    #[test]
    fn test_resolve_config_explicit_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("custom.yaml");
        std::fs::write(
            &path,
            "modules:\n  my-module:\n    url: https://github.com/acme/my-module\n",
        )
        .unwrap();

        let config = resolve_config(Some(&path), temp.path()).unwrap();
        assert!(config.module("my-module").is_some());
        assert!(config.module("csi-nfs").is_none());
    }

    #[test]
    fn test_resolve_config_missing_explicit_file() {
        let temp = TempDir::new().unwrap();
        assert!(resolve_config(Some(&temp.path().join("absent.yaml")), temp.path()).is_err());
    }
}
