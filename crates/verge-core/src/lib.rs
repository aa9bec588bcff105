//! Verge Core
//!
//! Root view state for the sidebar browser chrome.
//! Rust owns all state; the renderer draws snapshots and reports input.

mod browser;
mod config;
mod error;
mod events;
mod keymap;
mod listeners;
mod shortcuts;
mod sidebar;
mod view;

pub use browser::Browser;
pub use config::Config;
pub use error::CoreError;
pub use events::{HostAction, KeyEvent, UiEvent};
pub use keymap::{KeyCombo, Modifier};
pub use listeners::{Listener, ListenerRegistry};
pub use shortcuts::Shortcut;
pub use sidebar::{ResizeState, Section, Sidebar, SidebarConfig};
pub use view::{BrowserSnapshot, SectionView, SidebarView};

// Re-export core components
pub use verge_navigation::{InputResolution, InputResolver, DEFAULT_SEARCH_TEMPLATE};
pub use verge_tabs::{Tab, TabError, TabManager, TabTemplate};

pub type Result<T> = std::result::Result<T, CoreError>;

/// Initialize logging.
///
/// Output goes to stderr; stdout is reserved for the host protocol.
pub fn init_logging() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}
