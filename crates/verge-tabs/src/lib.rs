//! Verge Tab Management
//!
//! An ordered, insertion-order tab collection with an active-tab pointer.
//! The collection is never empty and the active id always names a member.

mod error;
mod manager;
mod tab;

pub use error::TabError;
pub use manager::TabManager;
pub use tab::{Tab, TabTemplate};

pub type Result<T> = std::result::Result<T, TabError>;
