//! Input events from the renderer and actions handed back to the host

use serde::{Deserialize, Serialize};

/// A key press as reported by the renderer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyEvent {
    /// Key name, e.g. `"c"` or `"Enter"`
    pub key: String,
    #[serde(default)]
    pub ctrl: bool,
    #[serde(default)]
    pub alt: bool,
    #[serde(default)]
    pub shift: bool,
    #[serde(default)]
    pub meta: bool,
}

/// Input routed through the global listener table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum UiEvent {
    KeyDown(KeyEvent),
    /// Pointer pressed on the sidebar resize handle
    ResizeHandleDown,
    PointerMove { x: f64 },
    PointerUp,
    /// The content surface finished loading
    ContentLoaded,
}

/// Work only the host can do
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum HostAction {
    /// Mirror the theme flag onto the document-level style scope
    ApplyTheme { dark: bool },
    /// Reload the content surface
    Reload,
    HistoryBack,
    HistoryForward,
    /// Open a link outside the content surface
    OpenExternal { url: String },
}
