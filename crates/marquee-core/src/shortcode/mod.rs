//! # Marquee Core Shortcodes
//!
//! The capability contract every concrete shortcode in the family
//! satisfies ([`Shortcode`]), plus the slug-keyed [`ShortcodeManager`]
//! that concrete shortcode packs register into.
//!
//! The contract is deliberately logic-free: parsing, validation and
//! rendering all belong to the implementing shortcode. The manager only
//! dispatches by registration slug.
pub mod error;
pub mod manager;
pub mod traits;

pub use error::ShortcodeError;
pub use manager::ShortcodeManager;
pub use traits::{ArgumentValidator, Arguments, Shortcode};
