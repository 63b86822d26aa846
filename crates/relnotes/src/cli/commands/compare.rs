//! get-changelog command

use std::path::PathBuf;

use clap::builder::BoolishValueParser;
use clap::error::ErrorKind;
use clap::{ArgAction, CommandFactory, Parser};
use tracing::info;

use relnotes_changelog::{
    discover_changelogs, latest_version, newer_than, Announcement, AnnouncementFormatter,
    MarkdownFormatter,
};
use relnotes_core::config::{validate_config, Config};
use relnotes_core::{normalize_channel, Version};
use relnotes_services::{Notifier, ReleaseFeedClient, WebhookNotifier};

use crate::cli::{output, resolve_config};
use crate::exit_codes;

/// Gets changelog of versions newer than the specified module version on the channel
#[derive(Debug, Parser)]
#[command(name = "get-changelog")]
#[command(author, version, about, long_about = None)]
pub struct GetChangelogCommand {
    /// Channel name (Alpha, Beta, Early Access, Stable, Rock Solid)
    pub channel: Option<String>,

    /// Module name
    pub module_name: Option<String>,

    /// Path to module
    #[arg(long, default_value = ".")]
    pub module_path: PathBuf,

    /// Send the message to the webhook instead of printing it
    #[arg(
        long,
        action = ArgAction::Set,
        default_value_t = true,
        value_parser = BoolishValueParser::new()
    )]
    pub send: bool,

    /// Configuration file (default: searched from the module path)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Webhook URL
    #[arg(long, env = "HOOK_URL", hide_env_values = true)]
    pub hook_url: Option<String>,

    /// Webhook channel identifier
    #[arg(long, env = "LOOP_STORAGE_RELEASE_CHANNEL")]
    pub hook_channel: Option<String>,

    /// Release feed URL
    #[arg(long, env = "RELNOTES_FEED_URL")]
    pub feed_url: Option<String>,
}

impl GetChangelogCommand {
    /// Execute the command, returning the process exit code
    pub fn execute(&self) -> anyhow::Result<i32> {
        info!(
            channel = ?self.channel,
            module = ?self.module_name,
            module_path = %self.module_path.display(),
            send = self.send,
            "executing get-changelog command"
        );

        let mut config = resolve_config(self.config.as_deref(), &self.module_path)?;
        self.apply_overrides(&mut config);
        validate_config(&config)?;

        let rt = tokio::runtime::Runtime::new()?;
        match rt.block_on(self.run(&config)) {
            // Usage errors print clap's usage text and exit with its code.
            Err(e) => match e.downcast::<clap::Error>() {
                Ok(usage) => usage.exit(),
                Err(e) => Err(e),
            },
            result => result,
        }
    }

    /// Flags and environment variables win over the configuration file
    fn apply_overrides(&self, config: &mut Config) {
        if let Some(url) = &self.hook_url {
            config.webhook.url = Some(url.clone());
        }
        if let Some(channel) = &self.hook_channel {
            config.webhook.channel = Some(channel.clone());
        }
        if let Some(url) = &self.feed_url {
            config.feed.url = url.clone();
        }
    }

    /// Run against an already resolved configuration
    pub async fn run(&self, config: &Config) -> anyhow::Result<i32> {
        let changelog_dir = self.module_path.join(&config.changelog.directory);
        let files = discover_changelogs(&changelog_dir, &config.changelog.localized_suffix)?;

        let Some(latest) = latest_version(&files) else {
            output::error("No changelog files found");
            return Ok(exit_codes::ERROR);
        };
        println!("{}", latest);

        let (Some(channel), Some(module)) = (self.channel.as_deref(), self.module_name.as_deref())
        else {
            return Err(Self::command()
                .error(
                    ErrorKind::MissingRequiredArgument,
                    "channel and module_name are required",
                )
                .into());
        };

        let channel_name = normalize_channel(channel);
        let Some(repository) = config.module(module) else {
            output::error(&format!("Module '{}' not found in module registry", module));
            return Ok(exit_codes::ERROR);
        };

        let feed = ReleaseFeedClient::from_config(&config.feed);
        let Some(current) = feed.module_version(module, channel).await else {
            output::error(&format!(
                "Module '{}' not found on channel '{}'",
                module, channel_name
            ));
            return Ok(exit_codes::ERROR);
        };

        println!(
            "Module '{}' version on channel '{}': {}",
            module, channel_name, current
        );
        println!();

        let baseline = Version::parse(&current)?;
        let entries = newer_than(&baseline, &files, &config.changelog);
        if entries.is_empty() {
            println!("No versions newer than specified.");
            return Ok(exit_codes::SUCCESS);
        }

        println!(
            "Found {} versions newer than {}:",
            entries.len(),
            current
        );
        println!();

        let announcement = Announcement::new(module, channel_name, latest, repository.clone())
            .with_entries(entries);
        let text = MarkdownFormatter::new().format(&announcement);

        if self.send {
            let notifier = WebhookNotifier::from_config(&config.webhook)?;
            deliver(&notifier, &text).await?;
            output::success(&format!("Announcement for {} {} sent", module, latest));
        } else {
            println!("{}", text);
        }

        Ok(exit_codes::SUCCESS)
    }
}

async fn deliver(notifier: &dyn Notifier, text: &str) -> anyhow::Result<()> {
    info!(notifier = notifier.name(), text_len = text.len(), "delivering announcement");
    notifier.send(text).await?;
    Ok(())
}
