use std::path::PathBuf;

/// One record from the legacy plugin list.
///
/// Legacy plugins (4.2 and under) never call the registry themselves, so
/// the list provider reports them on their behalf. `version: None` means
/// the plugin's main class is not loaded in this process; seeding skips
/// such records entirely rather than registering a versionless entry.
#[derive(Debug, Clone)]
pub struct LegacyPlugin {
    /// Main/base class identifier of the plugin.
    pub class: String,

    /// Version read off the loaded class, or `None` when it is not loaded.
    pub version: Option<String>,

    /// Path to the plugin bootstrap file, when known.
    pub path: Option<PathBuf>,
}

impl LegacyPlugin {
    /// A legacy plugin whose class resolved in this process.
    pub fn loaded(class: &str, version: &str) -> Self {
        Self {
            class: class.to_string(),
            version: Some(version.to_string()),
            path: None,
        }
    }

    /// A known legacy plugin whose class is not loaded here.
    pub fn unavailable(class: &str) -> Self {
        Self {
            class: class.to_string(),
            version: None,
            path: None,
        }
    }
}

/// Provider of the static list of known legacy plugins.
///
/// Supplied by the embedding application; the registry consumes it once at
/// construction via [`PluginRegistry::from_legacy_list`](crate::plugin_system::registry::PluginRegistry::from_legacy_list).
pub trait LegacyPluginList {
    /// The known legacy plugins, loadable or not.
    fn entries(&self) -> Vec<LegacyPlugin>;
}
