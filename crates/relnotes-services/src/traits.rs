//! Service traits

use crate::error::Result;

/// Delivers a composed message somewhere people will read it
#[async_trait::async_trait]
pub trait Notifier: Send + Sync {
    /// Get the notifier name
    fn name(&self) -> &str;

    /// Send the message text
    async fn send(&self, text: &str) -> Result<()>;
}

/// Translates a single piece of text
///
/// Implementations translate one line at a time; callers decide what to do
/// when a line fails.
#[async_trait::async_trait]
pub trait Translator: Send + Sync {
    /// Get the translator name
    fn name(&self) -> &str;

    /// Translate `text` from the configured source to the target language
    async fn translate(&self, text: &str) -> Result<String>;
}
