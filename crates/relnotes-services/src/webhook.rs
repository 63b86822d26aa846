//! Incoming-webhook delivery
//!
//! Posts `{"channel": ..., "text": ...}` as JSON, the shape accepted by
//! Mattermost/Slack style incoming webhooks.

use relnotes_core::config::WebhookConfig;
use reqwest::Client;
use serde::Serialize;
use tracing::{debug, info, instrument};

use crate::error::{Result, ServiceError};
use crate::traits::Notifier;

#[derive(Debug, Serialize)]
struct WebhookPayload<'a> {
    channel: &'a str,
    text: &'a str,
}

/// Webhook notifier
pub struct WebhookNotifier {
    url: String,
    channel: String,
    client: Client,
}

impl WebhookNotifier {
    /// Create a new webhook notifier
    pub fn new(url: impl Into<String>, channel: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            channel: channel.into(),
            client: Client::new(),
        }
    }

    /// Create a notifier from configuration; both URL and channel are required
    pub fn from_config(config: &WebhookConfig) -> Result<Self> {
        let url = config
            .url
            .as_deref()
            .filter(|u| !u.is_empty())
            .ok_or_else(|| ServiceError::Configuration("webhook URL is not set".to_string()))?;
        let channel = config
            .channel
            .as_deref()
            .filter(|c| !c.is_empty())
            .ok_or_else(|| {
                ServiceError::Configuration("webhook channel is not set".to_string())
            })?;

        Ok(Self::new(url, channel))
    }
}

#[async_trait::async_trait]
impl Notifier for WebhookNotifier {
    fn name(&self) -> &str {
        "webhook"
    }

    #[instrument(skip(self, text), fields(channel = %self.channel, text_len = text.len()))]
    async fn send(&self, text: &str) -> Result<()> {
        let payload = WebhookPayload {
            channel: &self.channel,
            text,
        };

        debug!("posting message to webhook");
        let response = self
            .client
            .post(&self.url)
            .header("Content-Type", "application/json")
            .json(&payload)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(ServiceError::Api {
                status: status.as_u16(),
                message,
            });
        }

        info!(status = status.as_u16(), "message delivered");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_send_posts_channel_and_text() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/hooks/abc"))
            .and(header("Content-Type", "application/json"))
            .and(body_json(serde_json::json!({
                "channel": "storage-releases",
                "text": "**Модуль** csi-nfs\n\n  - fix"
            })))
            .respond_with(ResponseTemplate::new(200).set_body_string("ok"))
            .expect(1)
            .mount(&mock_server)
            .await;

        let notifier = WebhookNotifier::new(
            format!("{}/hooks/abc", mock_server.uri()),
            "storage-releases",
        );
        notifier
            .send("**Модуль** csi-nfs\n\n  - fix")
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_non_success_is_error() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/hooks/abc"))
            .respond_with(ResponseTemplate::new(403).set_body_string("invalid token"))
            .mount(&mock_server)
            .await;

        let notifier = WebhookNotifier::new(format!("{}/hooks/abc", mock_server.uri()), "c");
        let err = notifier.send("hello").await.unwrap_err();
        match err {
            ServiceError::Api { status, message } => {
                assert_eq!(status, 403);
                assert_eq!(message, "invalid token");
            }
            other => panic!("expected API error, got {:?}", other),
        }
    }

    #[test]
    fn test_from_config_requires_url_and_channel() {
        let mut config = WebhookConfig::default();
        assert!(WebhookNotifier::from_config(&config).is_err());

        config.url = Some("https://chat.example.com/hooks/abc".to_string());
        assert!(WebhookNotifier::from_config(&config).is_err());

        config.channel = Some("storage-releases".to_string());
        let notifier = WebhookNotifier::from_config(&config).unwrap();
        assert_eq!(notifier.name(), "webhook");
    }
}
