//! Resolved-settings export
//!
//! Serializable view of the registry's current state, in declaration order.
//! The CLI driver dumps this after a successful parse; CI consumers read it
//! as JSON.

use serde::Serialize;

use super::descriptor::{OptionKind, OptionValue};
use super::registry::OptionRegistry;
use super::settings::AnalysisSettings;

/// One registry entry at capture time.
#[derive(Debug, Clone, Serialize)]
pub struct SnapshotEntry {
    /// Lower-cased option name, as written on the command line.
    pub name: String,
    pub kind: OptionKind,
    pub value: OptionValue,
    pub default: OptionValue,
}

/// Ordered name/kind/value/default records for the whole registry.
#[derive(Debug, Clone, Serialize)]
pub struct SettingsSnapshot {
    options: Vec<SnapshotEntry>,
}

impl SettingsSnapshot {
    /// Captures the current value of every registered option.
    pub fn capture(registry: &OptionRegistry, settings: &AnalysisSettings) -> Self {
        let options = registry
            .iter()
            .map(|descriptor| SnapshotEntry {
                name: descriptor.name().to_lowercase(),
                kind: descriptor.kind(),
                value: descriptor.current_value(settings),
                default: descriptor.default_value(),
            })
            .collect();
        Self { options }
    }

    pub fn entries(&self) -> &[SnapshotEntry] {
        &self.options
    }

    /// Entries whose value differs from the declared default.
    pub fn overridden(&self) -> impl Iterator<Item = &SnapshotEntry> {
        self.options.iter().filter(|e| e.value != e.default)
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
