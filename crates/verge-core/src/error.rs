//! Core error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Tab error: {0}")]
    Tab(#[from] verge_tabs::TabError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid keybind '{binding}': {reason}")]
    InvalidKeybind { binding: String, reason: String },

    #[error("Shortcut not found: {0}")]
    ShortcutNotFound(usize),

    #[error("Browser not initialized")]
    NotInitialized,
}

// Config files are the only filesystem access
impl From<std::io::Error> for CoreError {
    fn from(e: std::io::Error) -> Self {
        CoreError::Config(e.to_string())
    }
}
