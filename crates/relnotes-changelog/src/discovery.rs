//! Changelog file discovery

use std::collections::btree_map::Entry;
use std::collections::BTreeMap;
use std::path::Path;

use regex::Regex;
use relnotes_core::error::{ChangelogError, Result};
use relnotes_core::Version;
use tracing::{debug, instrument, warn};

use crate::types::ChangelogFile;

/// Matches changelog file names for one localized suffix
#[derive(Debug, Clone)]
pub struct ChangelogScanner {
    localized: Regex,
    default: Regex,
}

impl ChangelogScanner {
    /// Create a scanner for `vX.Y.Z.<suffix>.yml` and `vX.Y.Z.yml`
    pub fn new(localized_suffix: &str) -> Result<Self> {
        let localized = Regex::new(&format!(
            r"^v(\d+\.\d+\.\d+)\.{}\.yml$",
            regex::escape(localized_suffix)
        ))
        .map_err(|e| ChangelogError::InvalidPattern(e.to_string()))?;
        let default = Regex::new(r"^v(\d+\.\d+\.\d+)\.yml$")
            .map_err(|e| ChangelogError::InvalidPattern(e.to_string()))?;

        Ok(Self { localized, default })
    }

    /// Version named by a localized file, if `name` is one
    pub fn localized_version(&self, name: &str) -> Option<Version> {
        Self::capture_version(&self.localized, name)
    }

    /// Version named by a default-language file, if `name` is one
    pub fn default_version(&self, name: &str) -> Option<Version> {
        Self::capture_version(&self.default, name)
    }

    fn capture_version(pattern: &Regex, name: &str) -> Option<Version> {
        let digits = pattern.captures(name)?.get(1)?.as_str();
        match Version::parse(digits) {
            Ok(version) => Some(version),
            Err(e) => {
                warn!(file = name, error = %e, "skipping changelog with unusable version");
                None
            }
        }
    }

    /// List the changelog files in `dir`, one per version.
    ///
    /// The localized file wins when both variants exist. A missing directory
    /// yields an empty list.
    #[instrument(skip_all, fields(dir = %dir.display()))]
    pub fn scan(&self, dir: &Path) -> Result<Vec<ChangelogFile>> {
        if !dir.is_dir() {
            debug!("changelog directory does not exist");
            return Ok(Vec::new());
        }

        let mut by_version: BTreeMap<Version, ChangelogFile> = BTreeMap::new();

        for dir_entry in std::fs::read_dir(dir)? {
            let dir_entry = dir_entry?;
            if !dir_entry.file_type()?.is_file() {
                continue;
            }

            let name = dir_entry.file_name();
            let Some(name) = name.to_str() else {
                continue;
            };

            if let Some(version) = self.localized_version(name) {
                by_version.insert(version, ChangelogFile::new(version, dir_entry.path(), true));
            } else if let Some(version) = self.default_version(name) {
                if let Entry::Vacant(slot) = by_version.entry(version) {
                    slot.insert(ChangelogFile::new(version, dir_entry.path(), false));
                }
            }
        }

        debug!(count = by_version.len(), "discovered changelog files");
        Ok(by_version.into_values().collect())
    }
}

/// Discover changelog files in `dir` using the given localized suffix
pub fn discover_changelogs(dir: &Path, localized_suffix: &str) -> Result<Vec<ChangelogFile>> {
    ChangelogScanner::new(localized_suffix)?.scan(dir)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn touch(dir: &Path, name: &str) {
        std::fs::write(dir.join(name), "Changes:\n  - something\n").unwrap();
    }

    #[test]
    fn test_localized_file_preferred() {
        let temp = TempDir::new().unwrap();
        touch(temp.path(), "v1.0.0.yml");
        touch(temp.path(), "v1.0.0.ru.yml");

        let files = discover_changelogs(temp.path(), "ru").unwrap();
        assert_eq!(files.len(), 1);
        assert_eq!(files[0].version, Version::new(1, 0, 0));
        assert!(files[0].localized);
        assert_eq!(files[0].path, temp.path().join("v1.0.0.ru.yml"));
    }

    #[test]
    fn test_default_file_used_without_localized() {
        let temp = TempDir::new().unwrap();
        touch(temp.path(), "v1.1.0.yml");
        touch(temp.path(), "v1.2.0.ru.yml");

        let files = discover_changelogs(temp.path(), "ru").unwrap();
        assert_eq!(files.len(), 2);

        let v110 = files.iter().find(|f| f.version == Version::new(1, 1, 0)).unwrap();
        assert!(!v110.localized);
        let v120 = files.iter().find(|f| f.version == Version::new(1, 2, 0)).unwrap();
        assert!(v120.localized);
    }

    #[test]
    fn test_ignores_unrelated_names() {
        let temp = TempDir::new().unwrap();
        for name in [
            "README.md",
            "v1.0.yml",
            "v1.0.0.yaml",
            "1.0.0.yml",
            "v1.0.0.de.yml",
            "v1.0.0-rc.1.yml",
            "xv1.0.0.yml",
        ] {
            touch(temp.path(), name);
        }
        std::fs::create_dir(temp.path().join("v9.9.9.yml")).unwrap();

        let files = discover_changelogs(temp.path(), "ru").unwrap();
        assert!(files.is_empty());
    }

    #[test]
    fn test_other_suffix() {
        let temp = TempDir::new().unwrap();
        touch(temp.path(), "v2.0.0.de.yml");
        touch(temp.path(), "v2.0.0.ru.yml");

        let files = discover_changelogs(temp.path(), "de").unwrap();
        assert_eq!(files.len(), 1);
        assert_eq!(files[0].path, temp.path().join("v2.0.0.de.yml"));
    }

    #[test]
    fn test_overflowing_version_skipped() {
        let temp = TempDir::new().unwrap();
        touch(temp.path(), "v99999999999999999999.0.0.yml");
        touch(temp.path(), "v0.1.0.yml");

        let files = discover_changelogs(temp.path(), "ru").unwrap();
        assert_eq!(files.len(), 1);
        assert_eq!(files[0].version, Version::new(0, 1, 0));
    }

    #[test]
    fn test_missing_directory_is_empty() {
        let temp = TempDir::new().unwrap();
        let files = discover_changelogs(&temp.path().join("CHANGELOG"), "ru").unwrap();
        assert!(files.is_empty());
    }
}
