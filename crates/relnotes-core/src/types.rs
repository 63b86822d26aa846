//! Core types for relnotes

use serde::{Deserialize, Serialize};
use url::Url;

/// Canonical display names for release channels, keyed by their CLI form
const CHANNEL_NAMES: &[(&str, &str)] = &[
    ("alpha", "Alpha"),
    ("beta", "Beta"),
    ("early-access", "Early Access"),
    ("stable", "Stable"),
    ("rock-solid", "Rock Solid"),
];

/// Convert a channel argument to the display form used by the release feed.
///
/// Matching is case-insensitive; unknown channels are returned unchanged.
pub fn normalize_channel(channel: &str) -> String {
    let lowered = channel.to_lowercase();
    CHANNEL_NAMES
        .iter()
        .find(|(key, _)| *key == lowered)
        .map(|(_, name)| (*name).to_string())
        .unwrap_or_else(|| channel.to_string())
}

/// Code hosting provider of a module repository
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HostingProvider {
    /// github.com
    Github,
    /// A GitLab instance
    Gitlab,
}

impl HostingProvider {
    /// Infer the provider from a repository URL host
    pub fn detect(url: &str) -> Self {
        let host = Url::parse(url)
            .ok()
            .and_then(|u| u.host_str().map(str::to_lowercase));

        match host.as_deref() {
            Some("github.com") | Some("www.github.com") => Self::Github,
            _ => Self::Gitlab,
        }
    }

    /// Returns the string representation of the provider
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Github => "github",
            Self::Gitlab => "gitlab",
        }
    }

    /// Link to the release page for `tag` in the repository at `repo_url`
    pub fn release_url(&self, repo_url: &str, tag: &str) -> String {
        let repo_url = repo_url.trim_end_matches('/');
        match self {
            Self::Github => format!("{}/releases/tag/{}", repo_url, tag),
            Self::Gitlab => format!("{}/-/releases/{}", repo_url, tag),
        }
    }
}

impl std::fmt::Display for HostingProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Repository that publishes a module
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleRepository {
    /// Repository web URL
    pub url: String,

    /// Hosting provider; inferred from the URL when omitted
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provider: Option<HostingProvider>,
}

impl ModuleRepository {
    /// Create a repository entry with an inferred provider
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            provider: None,
        }
    }

    /// Set the provider explicitly
    pub fn with_provider(mut self, provider: HostingProvider) -> Self {
        self.provider = Some(provider);
        self
    }

    /// Effective hosting provider
    pub fn provider(&self) -> HostingProvider {
        self.provider
            .unwrap_or_else(|| HostingProvider::detect(&self.url))
    }

    /// Repository URL without a trailing slash
    pub fn page_url(&self) -> &str {
        self.url.trim_end_matches('/')
    }

    /// Release page for a tag
    pub fn release_url(&self, tag: &str) -> String {
        self.provider().release_url(&self.url, tag)
    }
}
