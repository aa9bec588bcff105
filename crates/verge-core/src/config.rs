//! Browser configuration
//!
//! Every field has a default, so a config file only needs the keys it
//! changes. Nothing here is written back; UI state resets on every start.

use serde::{Deserialize, Serialize};
use std::path::Path;

use verge_navigation::DEFAULT_SEARCH_TEMPLATE;
use verge_tabs::TabTemplate;

use crate::error::CoreError;
use crate::keymap::KeyCombo;
use crate::shortcuts::{default_shortcuts, validate_shortcuts, Shortcut};
use crate::sidebar::SidebarConfig;
use crate::Result;

const HOME_PAGE: &str = "https://zen-browser.app/";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Search engine URL template
    pub search_engine: String,
    /// Tabs open on a fresh start, first one active
    pub initial_tabs: Vec<TabTemplate>,
    /// Content of tabs opened with "new tab"
    pub new_tab: TabTemplate,
    /// Sidebar bounds and defaults
    pub sidebar: SidebarConfig,
    /// Key combination that hides/shows the chrome
    pub toggle_ui_keybind: String,
    /// Tabs whose title contains this appear in the Music section
    pub music_filter: String,
    /// Sidebar shortcut grid
    pub shortcuts: Vec<Shortcut>,
    /// Fallback delay before the reload indicator clears itself
    pub reload_indicator_ms: u64,
    /// Start in dark mode
    pub dark_mode: bool,
}

impl Config {
    /// Read a JSON config file and validate it
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&raw)?;
        config.validate()?;

        tracing::info!(path = %path.display(), "Loaded configuration");

        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if !self.search_engine.contains("%s") {
            return Err(CoreError::Config(format!(
                "Search engine template has no %s placeholder: {}",
                self.search_engine
            )));
        }

        self.sidebar.validate()?;
        KeyCombo::parse(&self.toggle_ui_keybind)?;
        validate_shortcuts(&self.shortcuts)?;

        Ok(())
    }

    fn default_initial_tabs() -> Vec<TabTemplate> {
        vec![
            TabTemplate::new("Zen Browser", HOME_PAGE),
            TabTemplate::new("YouTube - LINARIA", "https://youtube.com/watch?v=123"),
            TabTemplate::new("YouTube - Vespera", "https://youtube.com/watch?v=456"),
            TabTemplate::new("GitHub", "https://github.com"),
        ]
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            search_engine: DEFAULT_SEARCH_TEMPLATE.to_string(),
            initial_tabs: Self::default_initial_tabs(),
            new_tab: TabTemplate::placeholder(),
            sidebar: SidebarConfig::default(),
            toggle_ui_keybind: "Ctrl+C".to_string(),
            music_filter: "YouTube".to_string(),
            shortcuts: default_shortcuts(),
            reload_indicator_ms: 1500,
            dark_mode: false,
        }
    }
}
