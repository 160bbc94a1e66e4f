use std::fmt;

use indexmap::IndexMap;

use crate::shortcode::error::ShortcodeError;
use crate::shortcode::traits::{Arguments, Shortcode};

/// Slug-keyed shortcode registrations.
///
/// Concrete shortcode packs register their variants here once at startup;
/// page-render code then dispatches by slug. Slugs are unique — a second
/// registration under the same slug is rejected rather than silently
/// replacing the first.
#[derive(Default)]
pub struct ShortcodeManager {
    shortcodes: IndexMap<String, Box<dyn Shortcode>>,
}

// Manual Debug implementation: trait objects are not Debug
impl fmt::Debug for ShortcodeManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ShortcodeManager")
            .field("slugs", &self.shortcodes.keys().collect::<Vec<_>>())
            .finish()
    }
}

impl ShortcodeManager {
    /// Creates an empty manager.
    pub fn new() -> Self {
        Self {
            shortcodes: IndexMap::new(),
        }
    }

    /// Registers a shortcode under its own registration slug.
    pub fn register(&mut self, shortcode: Box<dyn Shortcode>) -> Result<(), ShortcodeError> {
        let slug = shortcode.registration_slug().to_string();
        if self.shortcodes.contains_key(&slug) {
            return Err(ShortcodeError::AlreadyRegistered(slug));
        }

        self.shortcodes.insert(slug, shortcode);
        Ok(())
    }

    /// Whether a shortcode is registered under `slug`.
    pub fn is_registered(&self, slug: &str) -> bool {
        self.shortcodes.contains_key(slug)
    }

    /// The shortcode registered under `slug`, if any.
    pub fn get(&self, slug: &str) -> Option<&dyn Shortcode> {
        self.shortcodes.get(slug).map(|shortcode| shortcode.as_ref())
    }

    /// The registered slugs, in registration order.
    pub fn slugs(&self) -> Vec<&str> {
        self.shortcodes.keys().map(String::as_str).collect()
    }

    /// Sets up the shortcode registered under `slug` and renders it.
    pub fn render(&mut self, slug: &str, arguments: Arguments, content: &str) -> Result<String, ShortcodeError> {
        let shortcode = self
            .shortcodes
            .get_mut(slug)
            .ok_or_else(|| ShortcodeError::NotRegistered(slug.to_string()))?;
        shortcode.setup(arguments, content);
        Ok(shortcode.html())
    }
}
