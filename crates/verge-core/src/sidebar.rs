//! Sidebar layout state
//!
//! Resize state machine:
//! ```text
//! Idle
//!   ↓ pointer down on the handle
//! Resizing  (pointer move → width clamped to [min, max])
//!   ↓ pointer up anywhere
//! Idle
//! ```
//!
//! Collapsing is a separate flag. It overrides the rendered width and keeps
//! the stored width for when the sidebar is expanded again.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::Result;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SidebarConfig {
    /// Narrowest width a drag can produce
    pub min_width: f64,
    /// Widest width a drag can produce
    pub max_width: f64,
    /// Width on a fresh start
    pub default_width: f64,
    /// Rendered width while collapsed
    pub collapsed_width: f64,
    /// Whether the sidebar starts expanded
    pub start_expanded: bool,
}

impl SidebarConfig {
    pub fn validate(&self) -> Result<()> {
        if !(self.min_width.is_finite() && self.max_width.is_finite()) {
            return Err(CoreError::Config(
                "Sidebar bounds must be finite".to_string(),
            ));
        }
        if self.min_width > self.max_width {
            return Err(CoreError::Config(format!(
                "Sidebar min width {} exceeds max width {}",
                self.min_width, self.max_width
            )));
        }
        if self.default_width < self.min_width || self.default_width > self.max_width {
            return Err(CoreError::Config(format!(
                "Sidebar default width {} outside [{}, {}]",
                self.default_width, self.min_width, self.max_width
            )));
        }
        if self.collapsed_width < 0.0 {
            return Err(CoreError::Config(
                "Sidebar collapsed width cannot be negative".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for SidebarConfig {
    fn default() -> Self {
        Self {
            min_width: 240.0,
            max_width: 480.0,
            default_width: 320.0,
            collapsed_width: 64.0,
            start_expanded: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResizeState {
    Idle,
    Resizing,
}

/// Collapsible groups below the shortcut grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Section {
    /// Tabs whose title matches the music filter
    Music,
    /// Every open tab
    Bookmarks,
}

impl Section {
    pub const ALL: [Section; 2] = [Section::Music, Section::Bookmarks];

    pub fn title(&self) -> &'static str {
        match self {
            Section::Music => "Music",
            Section::Bookmarks => "Bookmarks",
        }
    }
}

#[derive(Debug, Clone)]
pub struct Sidebar {
    config: SidebarConfig,
    /// Stored width, kept while collapsed
    width: f64,
    expanded: bool,
    resize: ResizeState,
    music_open: bool,
    bookmarks_open: bool,
}

impl Sidebar {
    pub fn new(config: SidebarConfig) -> Self {
        Self {
            width: config.default_width,
            expanded: config.start_expanded,
            config,
            resize: ResizeState::Idle,
            music_open: true,
            bookmarks_open: true,
        }
    }

    /// Clamp a pointer coordinate into the allowed width range
    pub fn clamp_width(&self, x: f64) -> f64 {
        if x.is_nan() {
            return self.config.min_width;
        }
        x.clamp(self.config.min_width, self.config.max_width)
    }

    /// Pointer down on the resize handle.
    ///
    /// The handle only exists while expanded. Returns true when a drag began.
    pub fn begin_resize(&mut self) -> bool {
        if !self.expanded || self.resize == ResizeState::Resizing {
            return false;
        }
        self.resize = ResizeState::Resizing;
        true
    }

    /// Pointer moved during a drag. Returns the new width, or `None` when idle.
    pub fn drag_to(&mut self, x: f64) -> Option<f64> {
        if self.resize != ResizeState::Resizing {
            return None;
        }
        self.width = self.clamp_width(x);
        Some(self.width)
    }

    /// Pointer released. Returns true when a drag ended.
    pub fn end_resize(&mut self) -> bool {
        if self.resize == ResizeState::Idle {
            return false;
        }
        self.resize = ResizeState::Idle;
        true
    }

    /// Flip expanded/collapsed; returns the new expanded flag.
    pub fn toggle_expanded(&mut self) -> bool {
        self.expanded = !self.expanded;
        self.expanded
    }

    /// Flip a section open/closed; returns the new open flag.
    pub fn toggle_section(&mut self, section: Section) -> bool {
        let flag = match section {
            Section::Music => &mut self.music_open,
            Section::Bookmarks => &mut self.bookmarks_open,
        };
        *flag = !*flag;
        *flag
    }

    pub fn is_section_open(&self, section: Section) -> bool {
        match section {
            Section::Music => self.music_open,
            Section::Bookmarks => self.bookmarks_open,
        }
    }

    /// Width the renderer should use
    pub fn rendered_width(&self) -> f64 {
        if self.expanded {
            self.width
        } else {
            self.config.collapsed_width
        }
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    pub fn resize_state(&self) -> ResizeState {
        self.resize
    }

    pub fn is_resizing(&self) -> bool {
        self.resize == ResizeState::Resizing
    }
}

impl Default for Sidebar {
    fn default() -> Self {
        Self::new(SidebarConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let sidebar = Sidebar::default();
        assert_eq!(sidebar.width(), 320.0);
        assert!(sidebar.is_expanded());
        assert_eq!(sidebar.resize_state(), ResizeState::Idle);
        assert!(sidebar.is_section_open(Section::Music));
        assert!(sidebar.is_section_open(Section::Bookmarks));
    }

    #[test]
    fn test_drag_clamps_to_bounds() {
        let mut sidebar = Sidebar::default();
        assert!(sidebar.begin_resize());

        assert_eq!(sidebar.drag_to(-50.0), Some(240.0));
        assert_eq!(sidebar.drag_to(9999.0), Some(480.0));
        assert_eq!(sidebar.drag_to(240.0), Some(240.0));
        assert_eq!(sidebar.drag_to(480.0), Some(480.0));
        assert_eq!(sidebar.drag_to(333.5), Some(333.5));
        assert_eq!(sidebar.drag_to(f64::NAN), Some(240.0));
    }

    #[test]
    fn test_move_while_idle_is_ignored() {
        let mut sidebar = Sidebar::default();
        assert_eq!(sidebar.drag_to(400.0), None);
        assert_eq!(sidebar.width(), 320.0);

        sidebar.begin_resize();
        sidebar.drag_to(400.0);
        assert!(sidebar.end_resize());
        assert_eq!(sidebar.drag_to(260.0), None);
        assert_eq!(sidebar.width(), 400.0);
    }

    #[test]
    fn test_end_resize_when_idle() {
        let mut sidebar = Sidebar::default();
        assert!(!sidebar.end_resize());
    }

    #[test]
    fn test_no_resize_while_collapsed() {
        let mut sidebar = Sidebar::default();
        sidebar.toggle_expanded();
        assert!(!sidebar.begin_resize());
        assert_eq!(sidebar.resize_state(), ResizeState::Idle);
    }

    #[test]
    fn test_collapse_preserves_width() {
        let mut sidebar = Sidebar::default();
        sidebar.begin_resize();
        sidebar.drag_to(410.0);
        sidebar.end_resize();

        assert!(!sidebar.toggle_expanded());
        assert_eq!(sidebar.rendered_width(), 64.0);
        assert_eq!(sidebar.width(), 410.0);

        assert!(sidebar.toggle_expanded());
        assert_eq!(sidebar.rendered_width(), 410.0);
    }

    #[test]
    fn test_sections_toggle_independently() {
        let mut sidebar = Sidebar::default();
        assert!(!sidebar.toggle_section(Section::Music));
        assert!(sidebar.is_section_open(Section::Bookmarks));
        assert!(sidebar.toggle_section(Section::Music));
    }

    #[test]
    fn test_config_validation() {
        assert!(SidebarConfig::default().validate().is_ok());

        let inverted = SidebarConfig {
            min_width: 500.0,
            ..SidebarConfig::default()
        };
        assert!(inverted.validate().is_err());

        let outside = SidebarConfig {
            default_width: 100.0,
            ..SidebarConfig::default()
        };
        assert!(outside.validate().is_err());
    }
}
