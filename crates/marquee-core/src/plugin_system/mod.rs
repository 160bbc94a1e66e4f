//! # Marquee Core Plugin System
//!
//! Tracks which plugins of the family are active in the current process and
//! answers dependency questions about them. Plugins announce themselves to
//! the [`PluginRegistry`] at load time; later, any plugin gates its features
//! on the registered versions of its siblings.
//!
//! ## Key Submodules and Responsibilities:
//!
//! - **[`registry`]**: The [`PluginRegistry`] itself — registration, field
//!   lookups, version checks, and requirement evaluation.
//! - **[`version`]**: Dotted numeric version parsing ([`PluginVersion`]) and
//!   the relational [`Comparator`] set used for version checks.
//! - **[`dependency`]**: The [`PluginRequirement`] type describing a minimum
//!   acceptable sibling version (or "any version, just present").
//! - **[`legacy`]**: The [`LegacyPluginList`] collaborator that supplies
//!   plugins too old to register themselves.
//! - **[`error`]**: Typed parse errors for version and comparator strings.
//!
//! Absence is never an error on the query path: lookups return `Option` and
//! checks return `bool`, so callers decide how to react to a missing plugin.
pub mod dependency;
pub mod error;
pub mod legacy;
pub mod registry;
pub mod version;

pub use dependency::PluginRequirement;
pub use legacy::{LegacyPlugin, LegacyPluginList};
pub use registry::{PluginRecord, PluginRegistry, RecordField};
pub use version::{Comparator, PluginVersion};

// Test module declaration
#[cfg(test)]
mod tests;
