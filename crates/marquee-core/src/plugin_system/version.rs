use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::plugin_system::error::{ComparatorError, VersionError};

/// A dotted numeric version string such as "4.2" or "5.0.1.1".
///
/// Plugins in the family do not follow strict semver — two- and
/// four-segment versions are common — so comparison is segment-wise with
/// the shorter operand zero-padded: "5.0" equals "5.0.0" and precedes
/// "5.0.1".
#[derive(Debug, Clone)]
pub struct PluginVersion {
    segments: Vec<u64>,
}

impl PluginVersion {
    /// Parses a version string like "4.2" or "5.0.1".
    pub fn parse(version: &str) -> Result<Self, VersionError> {
        let trimmed = version.trim();
        if trimmed.is_empty() {
            return Err(VersionError::Empty);
        }

        let mut segments = Vec::new();
        for part in trimmed.split('.') {
            let segment = part.parse::<u64>().map_err(|_| VersionError::InvalidSegment {
                version: version.to_string(),
                segment: part.to_string(),
            })?;
            segments.push(segment);
        }

        Ok(Self { segments })
    }

    /// The parsed numeric segments, in order.
    pub fn segments(&self) -> &[u64] {
        &self.segments
    }
}

impl Ord for PluginVersion {
    fn cmp(&self, other: &Self) -> Ordering {
        let len = self.segments.len().max(other.segments.len());
        for i in 0..len {
            let left = self.segments.get(i).copied().unwrap_or(0);
            let right = other.segments.get(i).copied().unwrap_or(0);
            match left.cmp(&right) {
                Ordering::Equal => continue,
                unequal => return unequal,
            }
        }
        Ordering::Equal
    }
}

impl PartialOrd for PluginVersion {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for PluginVersion {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for PluginVersion {}

impl FromStr for PluginVersion {
    type Err = VersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PluginVersion::parse(s)
    }
}

impl fmt::Display for PluginVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered: Vec<String> = self.segments.iter().map(u64::to_string).collect();
        write!(f, "{}", rendered.join("."))
    }
}

/// Relational comparator applied between two plugin versions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Comparator {
    Lt,
    Le,
    Gt,
    Ge,
    Eq,
    Ne,
}

impl Comparator {
    /// Whether `ordering` (left versus right) satisfies this comparator.
    pub fn matches(self, ordering: Ordering) -> bool {
        match self {
            Comparator::Lt => ordering == Ordering::Less,
            Comparator::Le => ordering != Ordering::Greater,
            Comparator::Gt => ordering == Ordering::Greater,
            Comparator::Ge => ordering != Ordering::Less,
            Comparator::Eq => ordering == Ordering::Equal,
            Comparator::Ne => ordering != Ordering::Equal,
        }
    }
}

impl FromStr for Comparator {
    type Err = ComparatorError;

    /// Accepts the operator spellings ("<", ">=", "!=", ...) alongside the
    /// word forms ("lt", "ge", "ne", ...).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "<" | "lt" => Ok(Comparator::Lt),
            "<=" | "le" => Ok(Comparator::Le),
            ">" | "gt" => Ok(Comparator::Gt),
            ">=" | "ge" => Ok(Comparator::Ge),
            "==" | "eq" => Ok(Comparator::Eq),
            "!=" | "<>" | "ne" => Ok(Comparator::Ne),
            _ => Err(ComparatorError(s.to_string())),
        }
    }
}

impl fmt::Display for Comparator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = match self {
            Comparator::Lt => "<",
            Comparator::Le => "<=",
            Comparator::Gt => ">",
            Comparator::Ge => ">=",
            Comparator::Eq => "==",
            Comparator::Ne => "!=",
        };
        write!(f, "{}", symbol)
    }
}

/// Compares two version strings under the given comparator.
///
/// Returns `false` when either side fails to parse; the query APIs built on
/// top of this are boolean, so an unparsable version must never escalate
/// into an error or a panic.
pub fn version_compare(left: &str, right: &str, comparator: Comparator) -> bool {
    let left_version = match PluginVersion::parse(left) {
        Ok(version) => version,
        Err(e) => {
            log::warn!("Could not parse version string '{}' for comparison: {}", left, e);
            return false;
        }
    };
    let right_version = match PluginVersion::parse(right) {
        Ok(version) => version,
        Err(e) => {
            log::warn!("Could not parse version string '{}' for comparison: {}", right, e);
            return false;
        }
    };

    comparator.matches(left_version.cmp(&right_version))
}
