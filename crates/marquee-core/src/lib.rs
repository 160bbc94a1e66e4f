//! # Marquee Core
//!
//! Shared bookkeeping for the Marquee plugin family: a cross-plugin
//! dependency/version registry, a two-namespace body-class queue, and the
//! capability contracts concrete shortcodes and widgets implement.
//!
//! Everything here is single-threaded, synchronous, in-memory state scoped
//! to one page-request lifecycle. The embedding application constructs the
//! registry and queue once per request (or once per process in a
//! single-threaded request model) and passes them by reference; there is no
//! hidden global state.

pub mod body_classes;
pub mod plugin_system;
pub mod shortcode;
pub mod utils;
pub mod widget;

// Re-export key public types for easier use by concrete plugins
pub use body_classes::{BodyClasses, ClassSpec, Queue};
pub use plugin_system::{
    Comparator, LegacyPlugin, LegacyPluginList, PluginRecord, PluginRegistry, PluginRequirement,
};
pub use shortcode::{Arguments, Shortcode, ShortcodeManager};
pub use widget::{View, Widget};
