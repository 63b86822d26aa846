//! Line-preserving changelog translation

mod google;

pub use google::GoogleTranslator;

use std::path::Path;

use tracing::{info, instrument, warn};

use crate::error::Result;
use crate::traits::Translator;

/// Result of translating a document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationOutcome {
    /// Translated document
    pub text: String,
    /// Lines sent for translation
    pub translated_lines: usize,
    /// Lines kept untranslated because the translator failed
    pub failed_lines: usize,
}

/// Translate `source` one line at a time.
///
/// Blank lines are copied as they are. Every other line keeps its leading
/// whitespace and is terminated by `\n`; only the trimmed content goes to
/// the translator. A failed line keeps its original content.
pub async fn translate_lines(translator: &dyn Translator, source: &str) -> TranslationOutcome {
    let mut outcome = TranslationOutcome {
        text: String::with_capacity(source.len()),
        translated_lines: 0,
        failed_lines: 0,
    };

    for line in source.split_inclusive('\n') {
        if line.trim().is_empty() {
            outcome.text.push_str(line);
            continue;
        }

        let indent = &line[..line.len() - line.trim_start().len()];
        let content = line.trim();
        outcome.translated_lines += 1;

        let translated = match translator.translate(content).await {
            // A line break in the translation would shift every later line.
            Ok(translated) => translated.trim().replace('\n', " "),
            Err(e) => {
                let preview: String = content.chars().take(50).collect();
                warn!(
                    translator = translator.name(),
                    error = %e,
                    "translation failed for '{}...'",
                    preview
                );
                outcome.failed_lines += 1;
                content.to_string()
            }
        };

        outcome.text.push_str(indent);
        outcome.text.push_str(&translated);
        outcome.text.push('\n');
    }

    outcome
}

/// Translate the file at `source` and write the result to `target`
#[instrument(skip(translator), fields(provider = translator.name()))]
pub async fn translate_file(
    translator: &dyn Translator,
    source: &Path,
    target: &Path,
) -> Result<TranslationOutcome> {
    let text = tokio::fs::read_to_string(source).await?;
    let outcome = translate_lines(translator, &text).await;
    tokio::fs::write(target, &outcome.text).await?;

    info!(
        lines = outcome.translated_lines,
        failed = outcome.failed_lines,
        "changelog translated"
    );
    Ok(outcome)
}
