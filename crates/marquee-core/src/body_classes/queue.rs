use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Selects which class namespace an operation targets.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Queue {
    /// Public-facing pages.
    #[default]
    Display,
    /// Dashboard pages.
    Admin,
    /// Both namespaces: reads see the merged view, writes hit both.
    All,
}

impl Queue {
    /// Whether a write through this selector touches the display namespace.
    pub fn targets_display(self) -> bool {
        self != Queue::Admin
    }

    /// Whether a write through this selector touches the admin namespace.
    pub fn targets_admin(self) -> bool {
        self != Queue::Display
    }
}

/// Error type for queue selector parsing
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown queue: '{0}'")]
pub struct ParseQueueError(pub String);

impl FromStr for Queue {
    type Err = ParseQueueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "display" => Ok(Queue::Display),
            "admin" => Ok(Queue::Admin),
            "all" => Ok(Queue::All),
            _ => Err(ParseQueueError(s.to_string())),
        }
    }
}

impl fmt::Display for Queue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Queue::Display => "display",
            Queue::Admin => "admin",
            Queue::All => "all",
        };
        write!(f, "{}", name)
    }
}
