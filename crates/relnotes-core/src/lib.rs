//! Relnotes Core - shared foundation for the release-notes tooling
//!
//! This crate provides the error taxonomy, the `vX.Y.Z` version model,
//! channel and hosting-provider types, and the configuration system used by
//! both the changelog comparator and the changelog translator.

pub mod config;
pub mod error;
pub mod types;
pub mod version;

pub use error::{RelnotesError, Result};
pub use types::{normalize_channel, HostingProvider, ModuleRepository};
pub use version::{compare_versions, Version};
