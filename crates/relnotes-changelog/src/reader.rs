//! Changelog decoding

use std::path::Path;

use relnotes_core::config::ChangelogConfig;
use serde_yaml::Value;
use tracing::{debug, warn};

use crate::types::ChangelogContent;

/// Read and decode a changelog file.
///
/// Looks for the localized changes key first, then the default one. Read
/// and parse failures are reported inside the returned content instead of
/// aborting the caller.
pub fn read_changelog(path: &Path, config: &ChangelogConfig) -> ChangelogContent {
    let text = match std::fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) => {
            warn!(path = %path.display(), error = %e, "failed to read changelog");
            return ChangelogContent::Unreadable(format!("File reading error: {}", e));
        }
    };

    match serde_yaml::from_str::<Value>(&text) {
        Ok(document) => decode(&document, config),
        Err(e) => {
            warn!(path = %path.display(), error = %e, "failed to parse changelog");
            ChangelogContent::Unreadable(format!("File reading error: {}", e))
        }
    }
}

fn decode(document: &Value, config: &ChangelogConfig) -> ChangelogContent {
    let changes = document.as_mapping().and_then(|mapping| {
        [&config.localized_key, &config.default_key]
            .into_iter()
            .find_map(|key| mapping.get(key.as_str()))
    });

    match changes {
        Some(value) => ChangelogContent::Changes(change_items(value)),
        None => {
            debug!("no changes key found, falling back to raw document");
            ChangelogContent::Raw(render(document))
        }
    }
}

fn change_items(value: &Value) -> Vec<String> {
    match value {
        Value::Sequence(items) => items.iter().map(render).collect(),
        Value::Null => Vec::new(),
        other => vec![render(other)],
    }
}

/// Single-line rendering; collections use YAML flow style so that a value
/// always fits on one bullet.
fn render(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::Sequence(items) => {
            let items: Vec<String> = items.iter().map(render).collect();
            format!("[{}]", items.join(", "))
        }
        Value::Mapping(mapping) => {
            let pairs: Vec<String> = mapping
                .iter()
                .map(|(key, value)| format!("{}: {}", render(key), render(value)))
                .collect();
            format!("{{{}}}", pairs.join(", "))
        }
        Value::Tagged(tagged) => format!("{} {}", tagged.tag, render(&tagged.value)),
    }
}
