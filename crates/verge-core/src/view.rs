//! Serializable snapshot of everything the renderer draws

use serde::{Deserialize, Serialize};

use verge_tabs::Tab;

use crate::listeners::Listener;
use crate::shortcuts::Shortcut;
use crate::sidebar::{ResizeState, Section};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BrowserSnapshot {
    pub tabs: Vec<Tab>,
    pub active_tab_id: String,
    /// `src` of the content surface
    pub content_src: String,
    /// Initial text of the address field
    pub address_text: String,
    pub is_loading: bool,
    /// Sidebar and toolbar shown
    pub ui_visible: bool,
    pub dark_mode: bool,
    pub sidebar: SidebarView,
    pub listeners: Vec<Listener>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SidebarView {
    pub expanded: bool,
    /// Stored width, kept while collapsed
    pub width: f64,
    pub rendered_width: f64,
    pub resize_state: ResizeState,
    /// The handle is only drawn while expanded
    pub show_resize_handle: bool,
    pub shortcuts: Vec<Shortcut>,
    pub sections: Vec<SectionView>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SectionView {
    pub section: Section,
    pub title: String,
    pub open: bool,
    /// Tabs listed in this section, in display order
    pub tab_ids: Vec<String>,
}
