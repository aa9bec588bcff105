//! Host commands
//!
//! These commands bridge the renderer to the Rust core. Every command
//! returns a `CommandResult`; nothing here panics on bad input.

pub mod chrome;
pub mod navigation;
pub mod tabs;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct CommandResult<T> {
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<String>,
}

impl<T> CommandResult<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn err(error: String) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(error),
        }
    }
}

impl<T: Serialize> CommandResult<T> {
    /// Erase the payload type for the wire
    pub fn into_json(self) -> CommandResult<serde_json::Value> {
        match self.data {
            Some(data) => match serde_json::to_value(data) {
                Ok(value) => CommandResult::ok(value),
                Err(e) => CommandResult::err(format!("Serialization failed: {}", e)),
            },
            None => CommandResult {
                success: self.success,
                data: None,
                error: self.error,
            },
        }
    }
}
