//! Default configuration values

use std::collections::BTreeMap;

use crate::types::ModuleRepository;

/// Default configuration file name (YAML)
pub const DEFAULT_CONFIG_YAML: &str = "relnotes.yaml";

/// Default configuration file name (TOML)
pub const DEFAULT_CONFIG_TOML: &str = "relnotes.toml";

/// Alternative configuration file name
pub const ALT_CONFIG_FILE: &str = ".relnotes.yaml";

/// Release channel feed
pub const DEFAULT_FEED_URL: &str = "https://releases.deckhouse.ru/fe";

/// Translation endpoint
pub const DEFAULT_TRANSLATE_ENDPOINT: &str = "https://translate.googleapis.com/translate_a/single";

/// Changelog directory inside a module checkout
pub const DEFAULT_CHANGELOG_DIR: &str = "CHANGELOG";

/// Language suffix of localized changelog files (`v1.2.3.ru.yml`)
pub const DEFAULT_LOCALIZED_SUFFIX: &str = "ru";

/// Changes key in localized changelog files
pub const DEFAULT_LOCALIZED_KEY: &str = "Изменения";

/// Changes key in default-language changelog files
pub const DEFAULT_CHANGES_KEY: &str = "Changes";

/// Target language for translated changelogs
pub const DEFAULT_TARGET_LANGUAGE: &str = "en";

const GITHUB_MODULES: &[&str] = &[
    "sds-node-configurator",
    "sds-replicated-volume",
    "sds-local-volume",
    "csi-nfs",
    "csi-ceph",
    "snapshot-controller",
];

const GITLAB_MODULES: &[&str] = &[
    "csi-yadro-tatlin-unified",
    "csi-netapp",
    "csi-hpe",
    "csi-huawei",
    "csi-s3",
    "csi-scsi-generic",
    "storage-volume-data-manager",
];

/// Get list of config file names to search for
pub fn config_file_names() -> Vec<&'static str> {
    vec![
        DEFAULT_CONFIG_YAML,
        DEFAULT_CONFIG_TOML,
        ALT_CONFIG_FILE,
        ".relnotes.toml",
    ]
}

/// Storage modules known out of the box
pub fn default_modules() -> BTreeMap<String, ModuleRepository> {
    let github = GITHUB_MODULES
        .iter()
        .map(|name| (name, format!("https://github.com/deckhouse/{}", name)));
    let gitlab = GITLAB_MODULES
        .iter()
        .map(|name| (name, format!("https://fox.flant.com/deckhouse/storage/{}", name)));

    github
        .chain(gitlab)
        .map(|(name, url)| (name.to_string(), ModuleRepository::new(url)))
        .collect()
}
