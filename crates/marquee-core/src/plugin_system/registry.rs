use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use serde::Serialize;

use crate::plugin_system::dependency::PluginRequirement;
use crate::plugin_system::legacy::LegacyPluginList;
use crate::plugin_system::version::{version_compare, Comparator};

/// Details registered for one active plugin.
#[derive(Debug, Clone, Serialize)]
pub struct PluginRecord {
    /// Main/base class identifier of the plugin.
    pub class: String,

    /// Version the plugin registered with, if any.
    pub version: Option<String>,

    /// Path to the plugin bootstrap file, if any.
    pub path: Option<PathBuf>,
}

/// Field selector for [`PluginRegistry::plugin_by_key`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordField {
    Class,
    Version,
    Path,
}

/// Tracks which plugins of the family are currently active.
///
/// Plugins call [`add_active_plugin`](Self::add_active_plugin) at load time
/// to announce themselves; re-registration under the same class fully
/// replaces the previous record. Query methods never panic and never
/// return errors — a missing plugin is an `Option::None` or a `false`.
#[derive(Debug, Default)]
pub struct PluginRegistry {
    /// Active plugin records, keyed by main class.
    active_plugins: IndexMap<String, PluginRecord>,
}

impl PluginRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self {
            active_plugins: IndexMap::new(),
        }
    }

    /// Creates a registry pre-seeded from the legacy plugin list.
    ///
    /// Legacy entries whose class did not resolve in this process (no
    /// version available) are skipped.
    pub fn from_legacy_list(list: &dyn LegacyPluginList) -> Self {
        let mut registry = Self::new();
        for entry in list.entries() {
            let Some(version) = entry.version else {
                log::debug!("Skipping unloaded legacy plugin: {}", entry.class);
                continue;
            };
            registry.add_active_plugin(&entry.class, Some(&version), entry.path);
        }
        registry
    }

    /// Adds a plugin to the active list, replacing any previous record
    /// registered under the same class.
    pub fn add_active_plugin(&mut self, class: &str, version: Option<&str>, path: Option<PathBuf>) {
        let record = PluginRecord {
            class: class.to_string(),
            version: version.map(str::to_string),
            path,
        };
        self.active_plugins.insert(class.to_string(), record);
    }

    /// The full active plugin map, keyed by main class.
    pub fn active_plugins(&self) -> &IndexMap<String, PluginRecord> {
        &self.active_plugins
    }

    /// Scans the active list for the first record whose `field` equals
    /// `value`. A record whose optional field is unset never matches.
    pub fn plugin_by_key(&self, field: RecordField, value: &str) -> Option<&PluginRecord> {
        self.active_plugins.values().find(|record| match field {
            RecordField::Class => record.class == value,
            RecordField::Version => record.version.as_deref() == Some(value),
            RecordField::Path => record.path.as_deref() == Some(Path::new(value)),
        })
    }

    /// Retrieves a plugin's record by its main class.
    pub fn plugin_by_class(&self, class: &str) -> Option<&PluginRecord> {
        self.plugin_by_key(RecordField::Class, class)
    }

    /// Retrieves the registered version of a plugin, if both the plugin and
    /// its version are known.
    pub fn plugin_version(&self, class: &str) -> Option<&str> {
        self.plugin_by_class(class).and_then(|record| record.version.as_deref())
    }

    /// Whether the plugin is active, at any version.
    pub fn is_plugin_active(&self, class: &str) -> bool {
        self.plugin_by_class(class).is_some()
    }

    /// Whether the plugin is active at `version` or newer.
    pub fn is_plugin_version(&self, class: &str, version: &str) -> bool {
        self.is_plugin_version_compare(class, version, Comparator::Ge)
    }

    /// Whether the plugin is active and its registered version satisfies
    /// `comparator` against `version`.
    ///
    /// False when the plugin is inactive, registered no version, or either
    /// version string fails to parse.
    pub fn is_plugin_version_compare(&self, class: &str, version: &str, comparator: Comparator) -> bool {
        match self.plugin_version(class) {
            Some(active_version) => version_compare(active_version, version, comparator),
            None => false,
        }
    }

    /// Whether every requirement is met: each named plugin is active, and
    /// meets its minimum version when one is given.
    ///
    /// Short-circuits on the first failure. An empty requirement slice is
    /// trivially satisfied.
    pub fn has_requisite_plugins(&self, required: &[PluginRequirement]) -> bool {
        for requirement in required {
            if !self.is_plugin_active(&requirement.class) {
                return false;
            }
            if let Some(min_version) = requirement.min_version.as_deref() {
                if !self.is_plugin_version(&requirement.class, min_version) {
                    return false;
                }
            }
        }

        true
    }
}
