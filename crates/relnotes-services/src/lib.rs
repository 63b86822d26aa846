//! Remote integrations for relnotes
//!
//! This crate talks to the services around the changelog workflow.
//!
//! ## Integrations
//!
//! - **Release feed**: an HTML page listing, per module, the version
//!   published on each release channel
//! - **Webhook**: chat incoming-webhook that receives release announcements
//! - **Translation**: machine translation of changelog files, one line at a
//!   time so that formatting survives and failures stay local
//!
//! ## Usage
//!
//! ```ignore
//! use relnotes_services::{ReleaseFeedClient, WebhookNotifier, Notifier};
//!
//! let feed = ReleaseFeedClient::new("https://releases.deckhouse.ru/fe");
//! let current = feed.module_version("csi-nfs", "alpha").await;
//!
//! let notifier = WebhookNotifier::new(hook_url, "storage-releases");
//! notifier.send("**csi-nfs** v0.3.1").await?;
//! ```

pub mod error;
pub mod feed;
pub mod traits;
pub mod translator;
pub mod webhook;

pub use error::{FeedError, ServiceError};
pub use feed::{parse_release_feed, FeedSection, ReleaseFeedClient, ReleaseFeedSnapshot};
pub use traits::{Notifier, Translator};
pub use translator::{translate_file, translate_lines, GoogleTranslator, TranslationOutcome};
pub use webhook::WebhookNotifier;
