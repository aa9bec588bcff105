//! Main browser state container
//!
//! Owns every piece of shared chrome state. The renderer receives snapshots
//! and reports intent through these operations; it never holds its own copy.

use verge_navigation::{InputResolution, InputResolver};
use verge_tabs::{Tab, TabManager};

use crate::config::Config;
use crate::error::CoreError;
use crate::events::{HostAction, KeyEvent, UiEvent};
use crate::keymap::KeyCombo;
use crate::listeners::{Listener, ListenerRegistry};
use crate::sidebar::{Section, Sidebar};
use crate::view::{BrowserSnapshot, SectionView, SidebarView};
use crate::Result;

pub struct Browser {
    /// Configuration
    config: Config,
    /// Ordered tabs and the active pointer
    tabs: TabManager,
    /// Input resolver for address bar
    input_resolver: InputResolver,
    /// Width, collapse and resize state
    sidebar: Sidebar,
    /// Installed global listeners
    listeners: ListenerRegistry,
    /// Shortcut that hides/shows the chrome
    toggle_ui_key: KeyCombo,
    ui_visible: bool,
    dark_mode: bool,
    loading: bool,
    /// Bumped by every reload so a stale timeout can tell it is stale
    reload_generation: u64,
    /// Set by `teardown`; input events are dropped afterwards
    torn_down: bool,
}

impl Browser {
    /// Initialize a new browser instance
    pub fn new(config: Config) -> Result<Self> {
        config.validate()?;

        let toggle_ui_key = KeyCombo::parse(&config.toggle_ui_keybind)?;
        let tabs = TabManager::with_tabs(&config.initial_tabs, config.new_tab.clone());
        let input_resolver = InputResolver::with_search_engine(config.search_engine.clone());
        let sidebar = Sidebar::new(config.sidebar.clone());

        let mut listeners = ListenerRegistry::new();
        listeners.subscribe(Listener::KeyDown);

        tracing::info!(
            tabs = tabs.len(),
            toggle_ui = %toggle_ui_key,
            "Browser initialized"
        );

        Ok(Self {
            dark_mode: config.dark_mode,
            config,
            tabs,
            input_resolver,
            sidebar,
            listeners,
            toggle_ui_key,
            ui_visible: true,
            loading: false,
            reload_generation: 0,
            torn_down: false,
        })
    }

    // === Tab operations ===

    pub fn create_tab(&mut self) -> &Tab {
        self.tabs.create_tab()
    }

    pub fn close_tab(&mut self, tab_id: &str) -> Result<()> {
        Ok(self.tabs.close_tab(tab_id)?)
    }

    pub fn activate_tab(&mut self, tab_id: &str) -> Result<&Tab> {
        Ok(self.tabs.activate_tab(tab_id)?)
    }

    pub fn update_tab_url(&mut self, tab_id: &str, url: String) -> Result<&Tab> {
        Ok(self.tabs.update_url(tab_id, url)?)
    }

    pub fn set_tab_title(&mut self, tab_id: &str, title: String) -> Result<&Tab> {
        Ok(self.tabs.set_tab_title(tab_id, title)?)
    }

    pub fn set_tab_icon(&mut self, tab_id: &str, icon: Option<String>) -> Result<&Tab> {
        Ok(self.tabs.set_tab_icon(tab_id, icon)?)
    }

    pub fn get_tab(&self, tab_id: &str) -> Result<&Tab> {
        Ok(self.tabs.get_tab(tab_id)?)
    }

    pub fn tabs(&self) -> &[Tab] {
        self.tabs.tabs()
    }

    pub fn active_tab(&self) -> &Tab {
        self.tabs.active_tab()
    }

    pub fn active_tab_id(&self) -> &str {
        self.tabs.active_tab_id()
    }

    // === Content pane ===

    pub fn resolve_input(&self, input: &str) -> InputResolution {
        self.input_resolver.resolve(input)
    }

    /// Address bar submission: classify the input and point the active tab at it
    pub fn submit_address(&mut self, input: &str) -> &Tab {
        let url = self.resolve_input(input).into_url();
        self.navigate_active(url)
    }

    /// Live edit of the address field: the raw text becomes the location
    pub fn edit_address(&mut self, text: &str) -> &Tab {
        self.navigate_active(text.to_string())
    }

    fn navigate_active(&mut self, url: String) -> &Tab {
        let active_id = self.tabs.active_tab_id().to_string();
        tracing::info!(tab_id = %active_id, url = %url, "Navigating active tab");

        // The active id always names a member, so this cannot miss
        if let Err(e) = self.tabs.update_url(&active_id, url) {
            tracing::warn!(error = %e, "Active tab vanished during navigation");
        }
        self.tabs.active_tab()
    }

    /// `src` of the content surface
    pub fn content_src(&self) -> &str {
        &self.tabs.active_tab().url
    }

    pub fn back(&self) -> HostAction {
        HostAction::HistoryBack
    }

    pub fn forward(&self) -> HostAction {
        HostAction::HistoryForward
    }

    /// Start a reload; the indicator spins until `finish_loading`
    pub fn reload(&mut self) -> HostAction {
        self.loading = true;
        self.reload_generation += 1;
        tracing::debug!(
            url = %self.content_src(),
            generation = self.reload_generation,
            "Reload requested"
        );
        HostAction::Reload
    }

    /// Identifies the most recent reload
    pub fn reload_generation(&self) -> u64 {
        self.reload_generation
    }

    /// Returns false if nothing was loading
    pub fn finish_loading(&mut self) -> bool {
        std::mem::replace(&mut self.loading, false)
    }

    /// Clear the indicator only if no reload started after `generation`
    pub fn finish_loading_if(&mut self, generation: u64) -> bool {
        if generation != self.reload_generation {
            return false;
        }
        self.finish_loading()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    // === Visibility and theme ===

    pub fn toggle_ui_visibility(&mut self) -> bool {
        self.ui_visible = !self.ui_visible;
        tracing::debug!(visible = self.ui_visible, "Toggled chrome visibility");
        self.ui_visible
    }

    /// Floating menu button shown while the chrome is hidden
    pub fn show_ui(&mut self) {
        self.ui_visible = true;
    }

    pub fn is_ui_visible(&self) -> bool {
        self.ui_visible
    }

    pub fn toggle_theme(&mut self) -> HostAction {
        self.dark_mode = !self.dark_mode;
        HostAction::ApplyTheme {
            dark: self.dark_mode,
        }
    }

    pub fn is_dark_mode(&self) -> bool {
        self.dark_mode
    }

    // === Sidebar ===

    pub fn sidebar(&self) -> &Sidebar {
        &self.sidebar
    }

    /// Collapse or expand; a drag in progress ends because the handle goes away
    pub fn toggle_sidebar(&mut self) -> bool {
        if self.sidebar.is_expanded() {
            self.end_resize();
        }
        self.sidebar.toggle_expanded()
    }

    pub fn toggle_section(&mut self, section: Section) -> bool {
        self.sidebar.toggle_section(section)
    }

    /// Pointer down on the resize handle
    pub fn begin_resize(&mut self) -> bool {
        if self.torn_down || !self.sidebar.begin_resize() {
            return false;
        }
        self.listeners.subscribe(Listener::PointerMove);
        self.listeners.subscribe(Listener::PointerUp);
        true
    }

    pub fn resize_to(&mut self, x: f64) -> Option<f64> {
        self.sidebar.drag_to(x)
    }

    pub fn end_resize(&mut self) -> bool {
        if !self.sidebar.end_resize() {
            return false;
        }
        self.listeners.unsubscribe(Listener::PointerMove);
        self.listeners.unsubscribe(Listener::PointerUp);
        tracing::debug!(width = self.sidebar.width(), "Sidebar resized");
        true
    }

    /// Tabs listed in the Music section
    pub fn music_tabs(&self) -> Vec<&Tab> {
        self.tabs
            .tabs_with_title_containing(&self.config.music_filter)
            .collect()
    }

    pub fn open_shortcut(&self, index: usize) -> Result<HostAction> {
        let shortcut = self
            .config
            .shortcuts
            .get(index)
            .ok_or(CoreError::ShortcutNotFound(index))?;

        tracing::info!(name = %shortcut.name, url = %shortcut.url, "Opening shortcut");

        Ok(HostAction::OpenExternal {
            url: shortcut.url.clone(),
        })
    }

    // === Events ===

    /// Route an input event through the installed listeners.
    ///
    /// Events without an installed listener are dropped. Returns true when
    /// the event changed state.
    pub fn handle_event(&mut self, event: UiEvent) -> bool {
        if self.torn_down {
            return false;
        }
        match event {
            UiEvent::KeyDown(key) => {
                self.listeners.is_subscribed(Listener::KeyDown) && self.handle_key_down(&key)
            }
            UiEvent::ResizeHandleDown => self.begin_resize(),
            UiEvent::PointerMove { x } => {
                self.listeners.is_subscribed(Listener::PointerMove) && self.resize_to(x).is_some()
            }
            UiEvent::PointerUp => {
                self.listeners.is_subscribed(Listener::PointerUp) && self.end_resize()
            }
            UiEvent::ContentLoaded => self.finish_loading(),
        }
    }

    /// Returns true when the key press matched the visibility shortcut
    pub fn handle_key_down(&mut self, key: &KeyEvent) -> bool {
        if !self.toggle_ui_key.matches(key) {
            return false;
        }
        self.toggle_ui_visibility();
        true
    }

    pub fn listeners(&self) -> &ListenerRegistry {
        &self.listeners
    }

    /// Remove every global listener and end any drag. Later input events
    /// are ignored.
    pub fn teardown(&mut self) {
        self.torn_down = true;
        self.sidebar.end_resize();
        self.listeners.clear();
        tracing::info!("Browser torn down");
    }

    // === Snapshot ===

    pub fn snapshot(&self) -> BrowserSnapshot {
        let sections = Section::ALL
            .iter()
            .map(|&section| {
                let tab_ids = match section {
                    Section::Music => self.music_tabs().iter().map(|t| t.id.clone()).collect(),
                    Section::Bookmarks => self.tabs().iter().map(|t| t.id.clone()).collect(),
                };
                SectionView {
                    section,
                    title: section.title().to_string(),
                    open: self.sidebar.is_section_open(section),
                    tab_ids,
                }
            })
            .collect();

        BrowserSnapshot {
            tabs: self.tabs().to_vec(),
            active_tab_id: self.active_tab_id().to_string(),
            content_src: self.content_src().to_string(),
            address_text: self.active_tab().url.clone(),
            is_loading: self.loading,
            ui_visible: self.ui_visible,
            dark_mode: self.dark_mode,
            sidebar: SidebarView {
                expanded: self.sidebar.is_expanded(),
                width: self.sidebar.width(),
                rendered_width: self.sidebar.rendered_width(),
                resize_state: self.sidebar.resize_state(),
                show_resize_handle: self.sidebar.is_expanded(),
                shortcuts: self.config.shortcuts.clone(),
                sections,
            },
            listeners: self.listeners.installed(),
        }
    }

    // === Config ===

    pub fn config(&self) -> &Config {
        &self.config
    }
}
