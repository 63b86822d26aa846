//! Newest-version and newer-than-baseline selection

use relnotes_core::config::ChangelogConfig;
use relnotes_core::Version;
use tracing::{debug, instrument};

use crate::reader::read_changelog;
use crate::types::{ChangelogEntry, ChangelogFile};

/// Highest version among the discovered files, or `None` when there are none
pub fn latest_version(files: &[ChangelogFile]) -> Option<Version> {
    files.iter().map(|f| f.version).max()
}

/// Decode every changelog strictly newer than `baseline`, oldest first
#[instrument(skip(files, config), fields(baseline = %baseline, candidates = files.len()))]
pub fn newer_than(
    baseline: &Version,
    files: &[ChangelogFile],
    config: &ChangelogConfig,
) -> Vec<ChangelogEntry> {
    let mut newer: Vec<&ChangelogFile> = files.iter().filter(|f| f.version > *baseline).collect();
    newer.sort_by_key(|f| f.version);

    let entries: Vec<ChangelogEntry> = newer
        .into_iter()
        .map(|f| ChangelogEntry::new(f.version, read_changelog(&f.path, config)))
        .collect();

    debug!(count = entries.len(), "selected newer changelogs");
    entries
}
