//! Google Translate web endpoint

use relnotes_core::config::TranslationConfig;
use reqwest::Client;
use serde_json::Value;
use tracing::{debug, instrument};

use crate::error::{Result, ServiceError};
use crate::traits::Translator;

/// Translator backed by the public `translate_a/single` endpoint
pub struct GoogleTranslator {
    endpoint: String,
    source: String,
    target: String,
    client: Client,
}

impl GoogleTranslator {
    /// Create a new translator between two languages
    pub fn new(
        endpoint: impl Into<String>,
        source: impl Into<String>,
        target: impl Into<String>,
    ) -> Self {
        Self {
            endpoint: endpoint.into(),
            source: source.into(),
            target: target.into(),
            client: Client::new(),
        }
    }

    /// Create a translator from configuration
    pub fn from_config(config: &TranslationConfig) -> Self {
        Self::new(&config.endpoint, &config.source, &config.target)
    }

    /// Join the translated segments of a `translate_a/single` response.
    ///
    /// The body is `[[["translated", "original", ...], ...], ...]`.
    fn extract_translation(body: &Value) -> Result<String> {
        let segments = body
            .get(0)
            .and_then(Value::as_array)
            .ok_or_else(|| {
                ServiceError::UnexpectedResponse("missing translation segments".to_string())
            })?;

        let translated: String = segments
            .iter()
            .filter_map(|segment| segment.get(0).and_then(Value::as_str))
            .collect();

        if translated.is_empty() {
            return Err(ServiceError::UnexpectedResponse(
                "empty translation".to_string(),
            ));
        }

        Ok(translated)
    }
}

#[async_trait::async_trait]
impl Translator for GoogleTranslator {
    fn name(&self) -> &str {
        "google"
    }

    #[instrument(skip(self, text), fields(source = %self.source, target = %self.target, text_len = text.len()))]
    async fn translate(&self, text: &str) -> Result<String> {
        let response = self
            .client
            .get(&self.endpoint)
            .query(&[
                ("client", "gtx"),
                ("sl", self.source.as_str()),
                ("tl", self.target.as_str()),
                ("dt", "t"),
                ("q", text),
            ])
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

        let body: Value = response.json().await?;
        let translated = Self::extract_translation(&body)?;
        debug!(translated_len = translated.len(), "line translated");
        Ok(translated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[test]
    fn test_extract_joins_segments() {
        let body = serde_json::json!([
            [["Added support. ", "Добавлена поддержка. ", null], ["Fixed a bug.", "Исправлена ошибка.", null]],
            null,
            "ru"
        ]);
        assert_eq!(
            GoogleTranslator::extract_translation(&body).unwrap(),
            "Added support. Fixed a bug."
        );
    }

    #[test]
    fn test_extract_rejects_unexpected_shape() {
        assert!(GoogleTranslator::extract_translation(&serde_json::json!({"error": 1})).is_err());
        assert!(GoogleTranslator::extract_translation(&serde_json::json!([[]])).is_err());
    }

    #[tokio::test]
    async fn test_translate_request() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/translate_a/single"))
            .and(query_param("sl", "ru"))
            .and(query_param("tl", "en"))
            .and(query_param("q", "Изменения:"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!([[["Changes:", "Изменения:"]], null, "ru"])),
            )
            .mount(&mock_server)
            .await;

        let translator = GoogleTranslator::new(
            format!("{}/translate_a/single", mock_server.uri()),
            "ru",
            "en",
        );
        assert_eq!(translator.translate("Изменения:").await.unwrap(), "Changes:");
    }

    #[tokio::test]
    async fn test_translate_rate_limited() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/translate_a/single"))
            .respond_with(ResponseTemplate::new(429))
            .mount(&mock_server)
            .await;

        let translator = GoogleTranslator::new(
            format!("{}/translate_a/single", mock_server.uri()),
            "ru",
            "en",
        );
        assert!(matches!(
            translator.translate("текст").await,
            Err(ServiceError::Api { status: 429, .. })
        ));
    }
}
