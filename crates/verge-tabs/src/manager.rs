//! Tab Manager
//!
//! Owns the ordered tab collection and the active-tab pointer.

use crate::error::TabError;
use crate::tab::{Tab, TabTemplate};
use crate::Result;

pub struct TabManager {
    /// Tabs in insertion order
    tabs: Vec<Tab>,
    /// Always names a member of `tabs`
    active_tab_id: String,
    /// Content given to tabs opened with `create_tab`
    new_tab: TabTemplate,
}

impl TabManager {
    /// Start with a single placeholder tab
    pub fn new(new_tab: TabTemplate) -> Self {
        Self::with_tabs(&[], new_tab)
    }

    /// Start with the given tabs open, the first one active.
    ///
    /// An empty seed list opens one placeholder tab instead.
    pub fn with_tabs(seed: &[TabTemplate], new_tab: TabTemplate) -> Self {
        let mut tabs: Vec<Tab> = seed.iter().map(Tab::from_template).collect();
        if tabs.is_empty() {
            tabs.push(Tab::from_template(&new_tab));
        }

        let active_tab_id = tabs[0].id.clone();

        Self {
            tabs,
            active_tab_id,
            new_tab,
        }
    }

    /// Open a placeholder tab at the end and make it active
    pub fn create_tab(&mut self) -> &Tab {
        let tab = Tab::from_template(&self.new_tab);
        self.active_tab_id = tab.id.clone();

        tracing::info!(tab_id = %tab.id, url = %tab.url, "Created new tab");

        self.tabs.push(tab);
        &self.tabs[self.tabs.len() - 1]
    }

    /// Close a tab.
    ///
    /// Closing the only tab opens a fresh placeholder first. When the closed
    /// tab was active, the last tab of the remaining sequence becomes active.
    pub fn close_tab(&mut self, tab_id: &str) -> Result<()> {
        let index = self
            .position(tab_id)
            .ok_or_else(|| TabError::NotFound(tab_id.to_string()))?;

        if self.tabs.len() == 1 {
            self.create_tab();
        }

        let closed = self.tabs.remove(index);

        if self.active_tab_id == closed.id {
            if let Some(last) = self.tabs.last() {
                self.active_tab_id = last.id.clone();
            }
        }

        tracing::info!(
            tab_id = %closed.id,
            active_tab_id = %self.active_tab_id,
            remaining = self.tabs.len(),
            "Closed tab"
        );

        Ok(())
    }

    /// Make a tab the active one. Unknown ids leave the state untouched.
    pub fn activate_tab(&mut self, tab_id: &str) -> Result<&Tab> {
        let index = self
            .position(tab_id)
            .ok_or_else(|| TabError::NotFound(tab_id.to_string()))?;

        if self.active_tab_id != tab_id {
            tracing::debug!(from = %self.active_tab_id, to = %tab_id, "Activated tab");
            self.active_tab_id = tab_id.to_string();
        }

        Ok(&self.tabs[index])
    }

    /// Replace the url of a tab
    pub fn update_url(&mut self, tab_id: &str, url: String) -> Result<&Tab> {
        let tab = self.get_tab_mut(tab_id)?;
        tab.navigate(url);
        tracing::debug!(tab_id = %tab.id, url = %tab.url, "Updated tab url");
        Ok(tab)
    }

    /// Update tab title
    pub fn set_tab_title(&mut self, tab_id: &str, title: String) -> Result<&Tab> {
        let tab = self.get_tab_mut(tab_id)?;
        tab.set_title(title);
        Ok(tab)
    }

    /// Update tab icon
    pub fn set_tab_icon(&mut self, tab_id: &str, icon: Option<String>) -> Result<&Tab> {
        let tab = self.get_tab_mut(tab_id)?;
        tab.set_icon(icon);
        Ok(tab)
    }

    /// Get a tab by ID
    pub fn get_tab(&self, tab_id: &str) -> Result<&Tab> {
        self.tabs
            .iter()
            .find(|t| t.id == tab_id)
            .ok_or_else(|| TabError::NotFound(tab_id.to_string()))
    }

    /// All tabs in display order
    pub fn tabs(&self) -> &[Tab] {
        &self.tabs
    }

    pub fn active_tab_id(&self) -> &str {
        &self.active_tab_id
    }

    pub fn active_tab(&self) -> &Tab {
        let index = self
            .position(&self.active_tab_id)
            .unwrap_or(self.tabs.len() - 1);
        &self.tabs[index]
    }

    pub fn len(&self) -> usize {
        self.tabs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tabs.is_empty()
    }

    /// Tabs whose title contains `needle`, in display order
    pub fn tabs_with_title_containing<'a>(
        &'a self,
        needle: &'a str,
    ) -> impl Iterator<Item = &'a Tab> + 'a {
        self.tabs.iter().filter(move |t| t.title.contains(needle))
    }

    fn get_tab_mut(&mut self, tab_id: &str) -> Result<&mut Tab> {
        self.tabs
            .iter_mut()
            .find(|t| t.id == tab_id)
            .ok_or_else(|| TabError::NotFound(tab_id.to_string()))
    }

    fn position(&self, tab_id: &str) -> Option<usize> {
        self.tabs.iter().position(|t| t.id == tab_id)
    }
}

impl Default for TabManager {
    fn default() -> Self {
        Self::new(TabTemplate::placeholder())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn manager_with(titles: &[&str]) -> TabManager {
        let seed: Vec<TabTemplate> = titles
            .iter()
            .map(|t| TabTemplate::new(*t, format!("https://{}.example", t.to_lowercase())))
            .collect();
        TabManager::with_tabs(&seed, TabTemplate::placeholder())
    }

    fn id_of(manager: &TabManager, title: &str) -> String {
        manager
            .tabs()
            .iter()
            .find(|t| t.title == title)
            .map(|t| t.id.clone())
            .unwrap()
    }

    fn titles(manager: &TabManager) -> Vec<&str> {
        manager.tabs().iter().map(|t| t.title.as_str()).collect()
    }

    #[test]
    fn test_seed_tabs_first_active() {
        let manager = manager_with(&["A", "B", "C"]);
        assert_eq!(titles(&manager), vec!["A", "B", "C"]);
        assert_eq!(manager.active_tab().title, "A");
    }

    #[test]
    fn test_empty_seed_opens_placeholder() {
        let manager = TabManager::with_tabs(&[], TabTemplate::placeholder());
        assert_eq!(manager.len(), 1);
        assert_eq!(manager.active_tab().title, "New Tab");
    }

    #[test]
    fn test_create_appends_and_activates() {
        let mut manager = manager_with(&["A", "B"]);
        let new_id = manager.create_tab().id.clone();

        assert_eq!(titles(&manager), vec!["A", "B", "New Tab"]);
        assert_eq!(manager.active_tab_id(), new_id);
        assert_eq!(manager.active_tab().url, "about:blank");
    }

    #[test]
    fn test_close_active_selects_last_remaining() {
        let mut manager = manager_with(&["A", "B", "C"]);
        let b = id_of(&manager, "B");
        manager.activate_tab(&b).unwrap();

        manager.close_tab(&b).unwrap();

        assert_eq!(titles(&manager), vec!["A", "C"]);
        assert_eq!(manager.active_tab().title, "C");
    }

    #[test]
    fn test_close_first_active_selects_last_not_neighbour() {
        let mut manager = manager_with(&["A", "B", "C", "D"]);
        let a = id_of(&manager, "A");

        manager.close_tab(&a).unwrap();

        assert_eq!(manager.active_tab().title, "D");
    }

    #[test]
    fn test_close_inactive_keeps_active() {
        let mut manager = manager_with(&["A", "B", "C"]);
        let c = id_of(&manager, "C");

        manager.close_tab(&c).unwrap();

        assert_eq!(titles(&manager), vec!["A", "B"]);
        assert_eq!(manager.active_tab().title, "A");
    }

    #[test]
    fn test_close_only_tab_leaves_fresh_default() {
        let mut manager = manager_with(&["Only"]);
        let only = id_of(&manager, "Only");

        manager.close_tab(&only).unwrap();

        assert_eq!(manager.len(), 1);
        assert_eq!(manager.active_tab().title, "New Tab");
        assert_ne!(manager.active_tab_id(), only);
    }

    #[test]
    fn test_close_unknown_is_not_found() {
        let mut manager = manager_with(&["Only"]);
        let result = manager.close_tab("missing");

        assert_eq!(result, Err(TabError::NotFound("missing".to_string())));
        assert_eq!(titles(&manager), vec!["Only"]);
    }

    #[test]
    fn test_activate_unknown_leaves_state() {
        let mut manager = manager_with(&["A", "B"]);
        let before = manager.active_tab_id().to_string();

        assert!(manager.activate_tab("missing").is_err());
        assert_eq!(manager.active_tab_id(), before);
    }

    #[test]
    fn test_update_url_only_touches_url() {
        let mut manager = manager_with(&["A", "B"]);
        let b = id_of(&manager, "B");

        let tab = manager
            .update_url(&b, "https://example.com".to_string())
            .unwrap();
        assert_eq!(tab.url, "https://example.com");
        assert_eq!(tab.title, "B");

        assert_eq!(manager.get_tab(&id_of(&manager, "A")).unwrap().url, "https://a.example");
        assert_eq!(manager.active_tab().title, "A");
    }

    #[test]
    fn test_never_empty_under_create_close_sequences() {
        let mut manager = manager_with(&["A", "B", "C"]);

        // Deterministic mix of closes at varying positions and creates
        for step in 0..200usize {
            if step % 7 == 3 {
                manager.create_tab();
            } else {
                let index = (step * 31) % manager.len();
                let id = manager.tabs()[index].id.clone();
                manager.close_tab(&id).unwrap();
            }

            assert!(!manager.is_empty());
            assert!(manager.get_tab(manager.active_tab_id()).is_ok());
        }
    }

    #[test]
    fn test_title_filter() {
        let manager = manager_with(&["YouTube - LINARIA", "GitHub", "YouTube - Vespera"]);
        let music: Vec<&str> = manager
            .tabs_with_title_containing("YouTube")
            .map(|t| t.title.as_str())
            .collect();
        assert_eq!(music, vec!["YouTube - LINARIA", "YouTube - Vespera"]);
    }

    #[test]
    fn test_set_icon_keeps_other_fields() {
        let mut manager = manager_with(&["GitHub"]);
        let id = id_of(&manager, "GitHub");

        manager
            .set_tab_icon(&id, Some("/favicon.ico".to_string()))
            .unwrap();

        let tab = manager.get_tab(&id).unwrap();
        assert_eq!(tab.icon.as_deref(), Some("/favicon.ico"));
        assert_eq!(tab.url, "https://github.example");
        assert_eq!(
            manager.set_tab_icon("missing", None).unwrap_err(),
            TabError::NotFound("missing".to_string())
        );
    }
}
