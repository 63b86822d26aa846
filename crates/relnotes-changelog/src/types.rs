//! Changelog types

use std::path::PathBuf;

use relnotes_core::Version;

/// A changelog file for one version
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangelogFile {
    /// Version named by the file
    pub version: Version,
    /// Location on disk
    pub path: PathBuf,
    /// Whether this is the localized variant (`vX.Y.Z.<lang>.yml`)
    pub localized: bool,
}

impl ChangelogFile {
    /// Create a new changelog file reference
    pub fn new(version: Version, path: impl Into<PathBuf>, localized: bool) -> Self {
        Self {
            version,
            path: path.into(),
            localized,
        }
    }
}

/// Decoded content of a changelog file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChangelogContent {
    /// Items listed under a recognized changes key
    Changes(Vec<String>),
    /// No recognized key; the whole document rendered as text
    Raw(String),
    /// The file could not be read or parsed
    Unreadable(String),
}

impl ChangelogContent {
    /// Normalize to a list of lines suitable for bullet rendering.
    ///
    /// `Raw` and `Unreadable` content become a single item.
    pub fn items(&self) -> Vec<String> {
        match self {
            Self::Changes(items) => items.clone(),
            Self::Raw(text) | Self::Unreadable(text) => vec![text.clone()],
        }
    }

    /// Check if the file was decoded successfully
    pub fn is_readable(&self) -> bool {
        !matches!(self, Self::Unreadable(_))
    }
}

/// A version together with its decoded changelog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangelogEntry {
    /// Version string
    pub version: Version,
    /// Decoded content
    pub content: ChangelogContent,
}

impl ChangelogEntry {
    /// Create a new changelog entry
    pub fn new(version: Version, content: ChangelogContent) -> Self {
        Self { version, content }
    }
}
