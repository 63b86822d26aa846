//! Configuration types

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;

use crate::types::ModuleRepository;

use super::defaults::*;

/// Main configuration for relnotes
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Release channel feed
    pub feed: FeedConfig,

    /// Changelog file layout
    pub changelog: ChangelogConfig,

    /// Known modules, keyed by exact module name
    pub modules: BTreeMap<String, ModuleRepository>,

    /// Announcement delivery
    pub webhook: WebhookConfig,

    /// Machine translation
    pub translation: TranslationConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            feed: FeedConfig::default(),
            changelog: ChangelogConfig::default(),
            modules: default_modules(),
            webhook: WebhookConfig::default(),
            translation: TranslationConfig::default(),
        }
    }
}

impl Config {
    /// Look up a module by its exact name
    pub fn module(&self, name: &str) -> Option<&ModuleRepository> {
        self.modules.get(name)
    }
}

/// Release feed configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FeedConfig {
    /// URL of the HTML page listing module versions per channel
    pub url: String,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_FEED_URL.to_string(),
        }
    }
}

/// Changelog configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ChangelogConfig {
    /// Directory holding `vX.Y.Z[.lang].yml` files, relative to the module path
    pub directory: PathBuf,

    /// Language suffix of localized files
    pub localized_suffix: String,

    /// Changes key in localized files
    pub localized_key: String,

    /// Changes key in default-language files
    pub default_key: String,
}

impl Default for ChangelogConfig {
    fn default() -> Self {
        Self {
            directory: PathBuf::from(DEFAULT_CHANGELOG_DIR),
            localized_suffix: DEFAULT_LOCALIZED_SUFFIX.to_string(),
            localized_key: DEFAULT_LOCALIZED_KEY.to_string(),
            default_key: DEFAULT_CHANGES_KEY.to_string(),
        }
    }
}

/// Webhook configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct WebhookConfig {
    /// Incoming webhook URL
    pub url: Option<String>,

    /// Channel identifier sent with every message
    pub channel: Option<String>,
}

/// Translation configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TranslationConfig {
    /// Translation service endpoint
    pub endpoint: String,

    /// Source language
    pub source: String,

    /// Target language
    pub target: String,
}

impl Default for TranslationConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_TRANSLATE_ENDPOINT.to_string(),
            source: DEFAULT_LOCALIZED_SUFFIX.to_string(),
            target: DEFAULT_TARGET_LANGUAGE.to_string(),
        }
    }
}
