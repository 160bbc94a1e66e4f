use std::fmt;

use serde::Serialize;

/// A requirement on a sibling plugin of the family.
///
/// Evaluated by [`PluginRegistry::has_requisite_plugins`](crate::plugin_system::registry::PluginRegistry::has_requisite_plugins):
/// the named plugin must be active, and when `min_version` is set its
/// registered version must be at least that.
#[derive(Debug, Clone, Serialize)]
pub struct PluginRequirement {
    /// Main/base class identifier of the required plugin.
    pub class: String,

    /// Minimum acceptable version, or `None` for "any version, just present".
    pub min_version: Option<String>,
}

impl PluginRequirement {
    /// Requires the plugin at `min_version` or newer.
    pub fn at_least(class: &str, min_version: &str) -> Self {
        Self {
            class: class.to_string(),
            min_version: Some(min_version.to_string()),
        }
    }

    /// Requires the plugin at any version.
    pub fn any(class: &str) -> Self {
        Self {
            class: class.to_string(),
            min_version: None,
        }
    }
}

impl fmt::Display for PluginRequirement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.min_version {
            Some(version) => write!(f, "Requires plugin: {} (minimum version: {})", self.class, version),
            None => write!(f, "Requires plugin: {} (any version)", self.class),
        }
    }
}
