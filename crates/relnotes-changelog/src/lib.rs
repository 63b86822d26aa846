//! Relnotes Changelog - per-version changelog files
//!
//! Module changelogs are kept as one YAML file per release
//! (`CHANGELOG/v1.2.3.yml`, optionally localized as `v1.2.3.ru.yml`).
//! This crate discovers those files, decodes their change lists, selects
//! the newest version or everything newer than a baseline, finds the next
//! file awaiting translation, and formats release announcements.

pub mod discovery;
pub mod formatter;
pub mod reader;
pub mod selection;
pub mod translation;
pub mod types;

pub use discovery::{discover_changelogs, ChangelogScanner};
pub use formatter::{Announcement, AnnouncementFormatter, MarkdownFormatter};
pub use reader::read_changelog;
pub use selection::{latest_version, newer_than};
pub use translation::{find_pending_translation, PendingTranslation, TranslationJob};
pub use types::{ChangelogContent, ChangelogEntry, ChangelogFile};
