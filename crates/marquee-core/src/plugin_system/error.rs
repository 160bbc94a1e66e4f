//! # Marquee Core Plugin System Errors
//!
//! Typed errors for the parsing half of the plugin system: version strings
//! and comparator spellings. The registry's query API never returns these —
//! a version that fails to parse during a comparison simply makes the
//! comparison false (with a logged warning).
use thiserror::Error;

/// Error type for version parsing
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VersionError {
    #[error("Empty version string")]
    Empty,

    #[error("Invalid version segment '{segment}' in '{version}'")]
    InvalidSegment { version: String, segment: String },
}

/// Error type for comparator parsing
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown version comparator: '{0}'")]
pub struct ComparatorError(pub String);
