//! Markdown announcement formatter

use tracing::{debug, instrument};

use super::{Announcement, AnnouncementFormatter};
use crate::types::ChangelogEntry;

/// Markdown formatter producing the release-channel chat message
pub struct MarkdownFormatter {
    /// Label in front of the module link
    pub module_label: String,
    /// Label in front of the channel name
    pub channel_label: String,
    /// Text in front of the new version
    pub version_label: String,
    /// Text of the release link
    pub release_label: String,
}

impl MarkdownFormatter {
    /// Create a new markdown formatter with the default (Russian) labels
    pub fn new() -> Self {
        Self {
            module_label: "Модуль".to_string(),
            channel_label: "Канал обновлений".to_string(),
            version_label: "Смена версии на".to_string(),
            release_label: "релиз".to_string(),
        }
    }

    fn header(&self, announcement: &Announcement) -> String {
        let tag = announcement.version.tag();
        format!(
            "**{}** **[{}]({})** {} {}. {} {} (*[{}]({})*)",
            self.module_label,
            announcement.module,
            announcement.repository.page_url(),
            self.channel_label,
            announcement.channel,
            self.version_label,
            tag,
            self.release_label,
            announcement.repository.release_url(&tag),
        )
    }

    fn entry(entry: &ChangelogEntry) -> String {
        let mut output = format!("\n\n**{}**", entry.version);

        // Continuation lines of a multi-line item stay inside its bullet.
        let items: Vec<String> = entry
            .content
            .items()
            .iter()
            .map(|item| item.trim_end().replace('\n', "\n    "))
            .collect();
        if !items.is_empty() {
            output.push_str("\n\n  - ");
            output.push_str(&items.join("\n  - "));
        }

        output
    }
}

impl Default for MarkdownFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl AnnouncementFormatter for MarkdownFormatter {
    #[instrument(skip(self, announcement), fields(module = %announcement.module, entry_count = announcement.entries.len()))]
    fn format(&self, announcement: &Announcement) -> String {
        let mut output = self.header(announcement);

        for entry in &announcement.entries {
            output.push_str(&Self::entry(entry));
        }

        debug!(output_len = output.len(), "announcement formatted");
        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ChangelogContent;
    use relnotes_core::{ModuleRepository, Version};

    #[test]
    fn test_github_header() {
        let announcement = Announcement::new(
            "csi-nfs",
            "Early Access",
            Version::new(0, 3, 1),
            ModuleRepository::new("https://github.com/deckhouse/csi-nfs"),
        );

        let output = MarkdownFormatter::new().format(&announcement);
        assert_eq!(
            output,
            "**Модуль** **[csi-nfs](https://github.com/deckhouse/csi-nfs)** Канал обновлений Early Access. \
             Смена версии на v0.3.1 (*[релиз](https://github.com/deckhouse/csi-nfs/releases/tag/v0.3.1)*)"
        );
    }

    #[test]
    fn test_gitlab_release_link() {
        let announcement = Announcement::new(
            "csi-hpe",
            "Stable",
            Version::new(1, 0, 0),
            ModuleRepository::new("https://fox.flant.com/deckhouse/storage/csi-hpe"),
        );

        let output = MarkdownFormatter::new().format(&announcement);
        assert!(output.contains("[csi-hpe](https://fox.flant.com/deckhouse/storage/csi-hpe)"));
        assert!(output.contains("(https://fox.flant.com/deckhouse/storage/csi-hpe/-/releases/v1.0.0)"));
    }

    #[test]
    fn test_entries_rendered_as_bullets() {
        let announcement = Announcement::new(
            "csi-nfs",
            "Alpha",
            Version::new(0, 4, 0),
            ModuleRepository::new("https://github.com/deckhouse/csi-nfs"),
        )
        .with_entries(vec![
            ChangelogEntry::new(
                Version::new(0, 3, 2),
                ChangelogContent::Changes(vec!["fix mount".into(), "bump deps".into()]),
            ),
            ChangelogEntry::new(
                Version::new(0, 4, 0),
                ChangelogContent::Raw("Notes: see docs".into()),
            ),
        ]);

        let output = MarkdownFormatter::new().format(&announcement);
        assert!(output.ends_with(
            "\n\n**v0.3.2**\n\n  - fix mount\n  - bump deps\n\n**v0.4.0**\n\n  - Notes: see docs"
        ));
    }

    #[test]
    fn test_multiline_item_stays_in_one_bullet() {
        let announcement = Announcement::new(
            "csi-nfs",
            "Stable",
            Version::new(0, 5, 0),
            ModuleRepository::new("https://github.com/deckhouse/csi-nfs"),
        )
        .with_entries(vec![ChangelogEntry::new(
            Version::new(0, 5, 0),
            ChangelogContent::Changes(vec!["first line\nsecond line\n".into(), "next".into()]),
        )]);

        let output = MarkdownFormatter::new().format(&announcement);
        assert!(output.ends_with("\n\n  - first line\n    second line\n  - next"));
    }

    #[test]
    fn test_raw_changelog_renders_one_bullet() {
        let temp = tempfile::TempDir::new().unwrap();
        let path = temp.path().join("v1.1.0.yml");
        std::fs::write(&path, "Notes:\n  - x\n  - y\n").unwrap();
        let content = crate::reader::read_changelog(
            &path,
            &relnotes_core::config::ChangelogConfig::default(),
        );

        let announcement = Announcement::new(
            "csi-nfs",
            "Stable",
            Version::new(1, 1, 0),
            ModuleRepository::new("https://github.com/deckhouse/csi-nfs"),
        )
        .with_entries(vec![ChangelogEntry::new(Version::new(1, 1, 0), content)]);

        let output = MarkdownFormatter::new().format(&announcement);
        assert!(output.ends_with("\n\n**v1.1.0**\n\n  - {Notes: [x, y]}"));
        assert_eq!(output.matches("\n  - ").count(), 1);
    }

    #[test]
    fn test_custom_labels() {
        let formatter = MarkdownFormatter {
            module_label: "Module".to_string(),
            channel_label: "Release channel".to_string(),
            version_label: "Version changed to".to_string(),
            release_label: "release".to_string(),
        };
        let announcement = Announcement::new(
            "csi-s3",
            "Beta",
            Version::new(2, 1, 0),
            ModuleRepository::new("https://fox.flant.com/deckhouse/storage/csi-s3"),
        );

        let output = formatter.format(&announcement);
        assert!(output.starts_with("**Module** **[csi-s3]"));
        assert!(output.contains("Release channel Beta. Version changed to v2.1.0 (*[release]"));
    }
}
