//! Selection of the next changelog awaiting translation

use std::path::{Path, PathBuf};

use relnotes_core::error::{ChangelogError, Result};
use relnotes_core::Version;
use tracing::{debug, info, instrument};

use crate::discovery::ChangelogScanner;

/// Source and target files for translating one version
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationJob {
    /// Version being translated
    pub version: Version,
    /// Source-language file (`vX.Y.Z.<lang>.yml`)
    pub source: PathBuf,
    /// Target file (`vX.Y.Z.yml`)
    pub target: PathBuf,
}

impl TranslationJob {
    /// File name of the source
    pub fn source_name(&self) -> String {
        file_name(&self.source)
    }

    /// File name of the target
    pub fn target_name(&self) -> String {
        file_name(&self.target)
    }
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Outcome of looking for work in a changelog directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PendingTranslation {
    /// The newest source file has no translation yet
    Pending(TranslationJob),
    /// The newest source file is already translated
    UpToDate(TranslationJob),
    /// No source-language files exist
    NoSources,
}

/// Find the newest `vX.Y.Z.<source_lang>.yml` and check for its translation.
///
/// Only the newest source file is considered; older untranslated files are
/// left alone.
#[instrument(skip_all, fields(dir = %dir.display(), source_lang = %source_lang))]
pub fn find_pending_translation(dir: &Path, source_lang: &str) -> Result<PendingTranslation> {
    if !dir.is_dir() {
        return Err(ChangelogError::DirectoryNotFound(dir.to_path_buf()).into());
    }

    let scanner = ChangelogScanner::new(source_lang)?;
    let localized_ext = format!(".{}.yml", source_lang);

    let mut newest: Option<(Version, String)> = None;
    for dir_entry in std::fs::read_dir(dir)? {
        let name = dir_entry?.file_name();
        let Some(name) = name.to_str() else {
            continue;
        };
        let Some(version) = scanner.localized_version(name) else {
            continue;
        };
        if newest.as_ref().map_or(true, |(best, _)| version > *best) {
            newest = Some((version, name.to_string()));
        }
    }

    let Some((version, source_name)) = newest else {
        debug!("no source-language changelogs found");
        return Ok(PendingTranslation::NoSources);
    };

    let target_name = source_name.replace(&localized_ext, ".yml");
    let job = TranslationJob {
        version,
        source: dir.join(&source_name),
        target: dir.join(&target_name),
    };

    if job.target.exists() {
        info!(version = %version, target = %target_name, "translation already exists");
        Ok(PendingTranslation::UpToDate(job))
    } else {
        info!(version = %version, source = %source_name, "found changelog to translate");
        Ok(PendingTranslation::Pending(job))
    }
}
