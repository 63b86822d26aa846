//! Configuration validation

use tracing::debug;
use url::Url;

use crate::error::{ConfigError, Result};

use super::types::Config;

/// Validate configuration
pub fn validate_config(config: &Config) -> Result<()> {
    debug!("validating configuration");
    validate_endpoint("feed.url", &config.feed.url)?;
    validate_endpoint("translation.endpoint", &config.translation.endpoint)?;
    validate_changelog(config)?;
    validate_modules(config)?;
    if let Some(url) = &config.webhook.url {
        validate_endpoint("webhook.url", url)?;
    }
    debug!("configuration validation passed");
    Ok(())
}

fn invalid(field: impl Into<String>, message: impl Into<String>) -> ConfigError {
    ConfigError::InvalidValue {
        field: field.into(),
        message: message.into(),
    }
}

fn validate_endpoint(field: &str, value: &str) -> Result<()> {
    let url = Url::parse(value).map_err(|e| invalid(field, e.to_string()))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(invalid(field, "must be an http or https URL").into());
    }
    Ok(())
}

fn validate_changelog(config: &Config) -> Result<()> {
    let changelog = &config.changelog;

    if changelog.directory.as_os_str().is_empty() {
        return Err(invalid("changelog.directory", "directory cannot be empty").into());
    }

    if changelog.localized_suffix.is_empty() || changelog.localized_suffix.contains('.') {
        return Err(invalid(
            "changelog.localized_suffix",
            "must be a non-empty language code without dots",
        )
        .into());
    }

    for (field, key) in [
        ("changelog.localized_key", &changelog.localized_key),
        ("changelog.default_key", &changelog.default_key),
    ] {
        if key.is_empty() {
            return Err(invalid(field, "key cannot be empty").into());
        }
    }

    Ok(())
}

fn validate_modules(config: &Config) -> Result<()> {
    if !config.modules.is_empty() {
        debug!(count = config.modules.len(), "validating modules");
    }
    for (name, repo) in &config.modules {
        if name.is_empty() {
            return Err(invalid("modules", "module name cannot be empty").into());
        }
        validate_endpoint(&format!("modules.{}.url", name), &repo.url)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ModuleRepository;

    #[test]
    fn test_validate_default_config() {
        let config = Config::default();
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_validate_bad_feed_url() {
        let mut config = Config::default();
        config.feed.url = "releases.example.com".to_string();
        assert!(validate_config(&config).is_err());

        config.feed.url = "ftp://releases.example.com/fe".to_string();
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_validate_bad_module_url() {
        let mut config = Config::default();
        config
            .modules
            .insert("broken".to_string(), ModuleRepository::new("not a url"));
        let err = validate_config(&config).unwrap_err();
        assert!(err.to_string().contains("modules.broken.url"));
    }

    #[test]
    fn test_validate_suffix_with_dot() {
        let mut config = Config::default();
        config.changelog.localized_suffix = "ru.yml".to_string();
        assert!(validate_config(&config).is_err());
    }
}
