//! translate-changelog command

use std::path::PathBuf;

use clap::Parser;
use tracing::info;

use relnotes_changelog::{find_pending_translation, PendingTranslation};
use relnotes_core::config::Config;
use relnotes_core::error::ChangelogError;
use relnotes_core::RelnotesError;
use relnotes_services::{translate_file, GoogleTranslator, Translator};

use crate::cli::{output, resolve_config};
use crate::exit_codes;

/// Translate the newest localized changelog that has no English counterpart
#[derive(Debug, Parser)]
#[command(name = "translate-changelog")]
#[command(author, version, about, long_about = None)]
pub struct TranslateChangelogCommand {
    /// Changelog directory (default: the configured directory, CHANGELOG)
    pub dir: Option<PathBuf>,

    /// Configuration file (default: searched from the current directory)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

impl TranslateChangelogCommand {
    /// Execute the command, returning the process exit code
    pub fn execute(&self) -> anyhow::Result<i32> {
        info!(dir = ?self.dir, "executing translate-changelog command");

        let cwd = std::env::current_dir()?;
        let config = resolve_config(self.config.as_deref(), &cwd)?;
        let translator = GoogleTranslator::from_config(&config.translation);

        let rt = tokio::runtime::Runtime::new()?;
        rt.block_on(self.run(&config, &translator))
    }

    /// Run against an already resolved configuration and translator
    pub async fn run(&self, config: &Config, translator: &dyn Translator) -> anyhow::Result<i32> {
        let dir = self
            .dir
            .clone()
            .unwrap_or_else(|| config.changelog.directory.clone());

        let job = match find_pending_translation(&dir, &config.changelog.localized_suffix) {
            Ok(PendingTranslation::Pending(job)) => job,
            Ok(PendingTranslation::UpToDate(_) | PendingTranslation::NoSources) => {
                println!("{}", nothing_to_do_message(config));
                return Ok(exit_codes::SUCCESS);
            }
            Err(RelnotesError::Changelog(e @ ChangelogError::DirectoryNotFound(_))) => {
                output::error(&e.to_string());
                return Ok(exit_codes::ERROR);
            }
            Err(e) => return Err(e.into()),
        };

        let outcome = translate_file(translator, &job.source, &job.target).await?;
        if outcome.failed_lines > 0 {
            output::warning(&format!(
                "{} of {} lines left untranslated in {}",
                outcome.failed_lines,
                outcome.translated_lines,
                output::path_style().apply_to(job.target.display())
            ));
        }

        println!("Translated {} -> {}", job.source_name(), job.target_name());
        println!("VERSION={}", job.version);
        println!("RU_FILE={}", job.source_name());
        println!("ENG_FILE={}", job.target_name());

        Ok(exit_codes::SUCCESS)
    }
}

/// English names of the languages changelogs are usually kept in
const LANGUAGE_NAMES: &[(&str, &str)] = &[
    ("ru", "Russian"),
    ("en", "English"),
    ("de", "German"),
    ("fr", "French"),
    ("es", "Spanish"),
    ("zh", "Chinese"),
];

fn language_name(code: &str) -> String {
    let lowered = code.to_lowercase();
    LANGUAGE_NAMES
        .iter()
        .find(|(key, _)| *key == lowered)
        .map(|(_, name)| (*name).to_string())
        .unwrap_or_else(|| code.to_string())
}

/// Message printed when there is nothing to translate, named after the
/// configured source and target languages
fn nothing_to_do_message(config: &Config) -> String {
    format!(
        "No {} changelog to translate (or {} already exists).",
        language_name(&config.changelog.localized_suffix),
        language_name(&config.translation.target)
    )
}
