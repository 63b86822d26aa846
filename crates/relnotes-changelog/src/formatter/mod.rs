//! Release announcement formatters

mod markdown;

pub use markdown::MarkdownFormatter;

use relnotes_core::{ModuleRepository, Version};

use crate::types::ChangelogEntry;

/// Everything needed to announce a module version on a channel
#[derive(Debug, Clone)]
pub struct Announcement {
    /// Module name
    pub module: String,
    /// Channel display name
    pub channel: String,
    /// Version being announced
    pub version: Version,
    /// Repository the module is published from
    pub repository: ModuleRepository,
    /// Changelogs newer than what the channel currently runs
    pub entries: Vec<ChangelogEntry>,
}

impl Announcement {
    /// Create an announcement with no changelog entries
    pub fn new(
        module: impl Into<String>,
        channel: impl Into<String>,
        version: Version,
        repository: ModuleRepository,
    ) -> Self {
        Self {
            module: module.into(),
            channel: channel.into(),
            version,
            repository,
            entries: Vec::new(),
        }
    }

    /// Attach changelog entries
    pub fn with_entries(mut self, entries: Vec<ChangelogEntry>) -> Self {
        self.entries = entries;
        self
    }
}

/// Trait for announcement formatters
pub trait AnnouncementFormatter: Send + Sync {
    /// Render the full message text
    fn format(&self, announcement: &Announcement) -> String;
}
