//! Release channel feed
//!
//! The feed is an HTML page with one table: the platform row first, then
//! a "modules" block and a "helper modules" block, each listing the version
//! published on every release channel.

mod parser;

pub use parser::parse_release_feed;

use std::collections::BTreeMap;

use relnotes_core::config::FeedConfig;
use relnotes_core::normalize_channel;
use reqwest::Client;
use tracing::{debug, error, info, instrument};

use crate::error::{Result, ServiceError};

/// Channel display name to version string
pub type ChannelVersions = BTreeMap<String, String>;

/// Table sections of the release feed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FeedSection {
    /// The platform itself
    Platform,
    /// Regular modules
    Modules,
    /// Helper modules
    HelperModules,
}

/// One fetch of the release feed
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReleaseFeedSnapshot {
    /// Platform rows
    pub platform: BTreeMap<String, ChannelVersions>,
    /// Module rows
    pub modules: BTreeMap<String, ChannelVersions>,
    /// Helper module rows
    pub helper_modules: BTreeMap<String, ChannelVersions>,
}

impl ReleaseFeedSnapshot {
    /// Rows of one section
    pub fn section(&self, section: FeedSection) -> &BTreeMap<String, ChannelVersions> {
        match section {
            FeedSection::Platform => &self.platform,
            FeedSection::Modules => &self.modules,
            FeedSection::HelperModules => &self.helper_modules,
        }
    }

    pub(crate) fn section_mut(
        &mut self,
        section: FeedSection,
    ) -> &mut BTreeMap<String, ChannelVersions> {
        match section {
            FeedSection::Platform => &mut self.platform,
            FeedSection::Modules => &mut self.modules,
            FeedSection::HelperModules => &mut self.helper_modules,
        }
    }

    /// Version of `module` on `channel` (display name), searching modules
    /// then helper modules. Empty cells count as absent.
    pub fn module_version(&self, module: &str, channel: &str) -> Option<&str> {
        [FeedSection::Modules, FeedSection::HelperModules]
            .into_iter()
            .filter_map(|section| self.section(section).get(module))
            .filter_map(|versions| versions.get(channel))
            .map(String::as_str)
            .find(|version| !version.is_empty())
    }
}

/// HTTP client for the release feed
pub struct ReleaseFeedClient {
    url: String,
    client: Client,
}

impl ReleaseFeedClient {
    /// Create a new feed client
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            client: Client::new(),
        }
    }

    /// Create a feed client from configuration
    pub fn from_config(config: &FeedConfig) -> Self {
        Self::new(config.url.clone())
    }

    /// Download and parse the feed
    #[instrument(skip(self), fields(url = %self.url))]
    pub async fn fetch(&self) -> Result<ReleaseFeedSnapshot> {
        debug!("fetching release feed");
        let response = self.client.get(&self.url).send().await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(ServiceError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let html = response.text().await?;
        Ok(parse_release_feed(&html)?)
    }

    /// Version of `module` currently published on `channel`.
    ///
    /// The channel is normalized to its display form first. Fetch and parse
    /// failures are logged and reported as `None`.
    pub async fn module_version(&self, module: &str, channel: &str) -> Option<String> {
        let channel = normalize_channel(channel);

        let snapshot = match self.fetch().await {
            Ok(snapshot) => snapshot,
            Err(e) => {
                error!(url = %self.url, error = %e, "Error getting module version");
                return None;
            }
        };

        let version = snapshot.module_version(module, &channel).map(str::to_string);
        info!(module, channel = %channel, version = ?version, "looked up channel version");
        version
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const FEED: &str = r#"<table>
  <thead><tr><th>Версия</th><th>Alpha</th><th>Early Access</th></tr></thead>
  <tbody><tr><td>Deckhouse</td><td>v1.70.0</td><td>v1.69.0</td></tr></tbody>
  <thead><tr><th>Модули</th></tr></thead>
  <tbody><tr><td>csi-ceph</td><td><div>v0.4.0</div></td><td>v0.3.5</td></tr></tbody>
</table>"#;

    #[tokio::test]
    async fn test_module_version_normalizes_channel() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/fe"))
            .respond_with(ResponseTemplate::new(200).set_body_string(FEED))
            .mount(&mock_server)
            .await;

        let client = ReleaseFeedClient::new(format!("{}/fe", mock_server.uri()));
        assert_eq!(
            client.module_version("csi-ceph", "early-access").await,
            Some("v0.3.5".to_string())
        );
        assert_eq!(
            client.module_version("csi-ceph", "ALPHA").await,
            Some("v0.4.0".to_string())
        );
        assert_eq!(client.module_version("csi-nfs", "alpha").await, None);
    }

    #[tokio::test]
    async fn test_server_error_is_not_found() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/fe"))
            .respond_with(ResponseTemplate::new(503).set_body_string("maintenance"))
            .mount(&mock_server)
            .await;

        let client = ReleaseFeedClient::new(format!("{}/fe", mock_server.uri()));
        let err = client.fetch().await.unwrap_err();
        assert!(matches!(err, ServiceError::Api { status: 503, .. }));
        assert_eq!(client.module_version("csi-ceph", "alpha").await, None);
    }

    #[tokio::test]
    async fn test_page_without_table_is_not_found() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/fe"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<p>no data</p>"))
            .mount(&mock_server)
            .await;

        let client = ReleaseFeedClient::new(format!("{}/fe", mock_server.uri()));
        assert!(matches!(
            client.fetch().await,
            Err(ServiceError::Feed(crate::error::FeedError::TableNotFound))
        ));
        assert_eq!(client.module_version("csi-ceph", "alpha").await, None);
    }

    #[tokio::test]
    async fn test_network_error_is_not_found() {
        let client = ReleaseFeedClient::new("http://127.0.0.1:1/fe");
        assert_eq!(client.module_version("csi-ceph", "alpha").await, None);
    }
}
