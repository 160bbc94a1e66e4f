//! # Marquee Core Widgets
//!
//! The capability contract every concrete widget in the family satisfies.
//! Like the shortcode contract it is logic-free; the extra surface covers
//! the widget lifecycle (settings updates, the settings form) and the
//! per-widget filter hooks the family exposes around arguments.
pub mod traits;

pub use traits::{View, Widget};

// Test module declaration
#[cfg(test)]
mod tests;
