use thiserror::Error;

/// Error type for shortcode registration and dispatch
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShortcodeError {
    #[error("Shortcode already registered: {0}")]
    AlreadyRegistered(String),

    #[error("Shortcode not registered: {0}")]
    NotRegistered(String),
}
