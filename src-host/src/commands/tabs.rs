//! Tab management commands
use serde::{Deserialize, Serialize};

use super::CommandResult;
use crate::state::AppState;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TabInfo {
    pub id: String,
    pub title: String,
    pub url: String,
    pub icon: Option<String>,
    pub is_active: bool,
}

impl TabInfo {
    pub fn new(tab: &verge_core::Tab, active_tab_id: &str) -> Self {
        Self {
            id: tab.id.clone(),
            title: tab.title.clone(),
            url: tab.url.clone(),
            icon: tab.icon.clone(),
            is_active: tab.id == active_tab_id,
        }
    }
}

pub fn get_tabs(state: &AppState) -> CommandResult<Vec<TabInfo>> {
    match state.with_browser(|browser| {
        let active = browser.active_tab_id();
        Ok(browser
            .tabs()
            .iter()
            .map(|tab| TabInfo::new(tab, active))
            .collect())
    }) {
        Ok(tabs) => CommandResult::ok(tabs),
        Err(e) => CommandResult::err(e.to_string()),
    }
}

pub fn get_active_tab(state: &AppState) -> CommandResult<TabInfo> {
    match state.with_browser(|browser| {
        Ok(TabInfo::new(browser.active_tab(), browser.active_tab_id()))
    }) {
        Ok(tab) => CommandResult::ok(tab),
        Err(e) => CommandResult::err(e.to_string()),
    }
}

pub fn create_tab(state: &AppState) -> CommandResult<TabInfo> {
    match state.with_browser_mut(|browser| {
        browser.create_tab();
        Ok(TabInfo::new(browser.active_tab(), browser.active_tab_id()))
    }) {
        Ok(tab) => CommandResult::ok(tab),
        Err(e) => CommandResult::err(e.to_string()),
    }
}

/// Returns the tab that is active after the close
pub fn close_tab(state: &AppState, tab_id: String) -> CommandResult<TabInfo> {
    match state.with_browser_mut(|browser| {
        browser.close_tab(&tab_id)?;
        Ok(TabInfo::new(browser.active_tab(), browser.active_tab_id()))
    }) {
        Ok(tab) => CommandResult::ok(tab),
        Err(e) => CommandResult::err(e.to_string()),
    }
}

pub fn activate_tab(state: &AppState, tab_id: String) -> CommandResult<TabInfo> {
    match state.with_browser_mut(|browser| {
        browser.activate_tab(&tab_id)?;
        Ok(TabInfo::new(browser.active_tab(), browser.active_tab_id()))
    }) {
        Ok(tab) => CommandResult::ok(tab),
        Err(e) => CommandResult::err(e.to_string()),
    }
}

pub fn update_tab_url(state: &AppState, tab_id: String, url: String) -> CommandResult<TabInfo> {
    match state.with_browser_mut(|browser| {
        browser.update_tab_url(&tab_id, url)?;
        Ok(TabInfo::new(browser.get_tab(&tab_id)?, browser.active_tab_id()))
    }) {
        Ok(tab) => CommandResult::ok(tab),
        Err(e) => CommandResult::err(e.to_string()),
    }
}

pub fn set_tab_title(state: &AppState, tab_id: String, title: String) -> CommandResult<TabInfo> {
    match state.with_browser_mut(|browser| {
        browser.set_tab_title(&tab_id, title)?;
        Ok(TabInfo::new(browser.get_tab(&tab_id)?, browser.active_tab_id()))
    }) {
        Ok(tab) => CommandResult::ok(tab),
        Err(e) => CommandResult::err(e.to_string()),
    }
}

/// `None` falls back to the placeholder glyph
pub fn set_tab_icon(
    state: &AppState,
    tab_id: String,
    icon: Option<String>,
) -> CommandResult<TabInfo> {
    match state.with_browser_mut(|browser| {
        browser.set_tab_icon(&tab_id, icon)?;
        Ok(TabInfo::new(browser.get_tab(&tab_id)?, browser.active_tab_id()))
    }) {
        Ok(tab) => CommandResult::ok(tab),
        Err(e) => CommandResult::err(e.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use verge_core::Config;

    fn test_state() -> AppState {
        AppState::new(Config::default()).unwrap()
    }

    #[test]
    fn test_create_and_close() {
        let state = test_state();

        let created = create_tab(&state).data.unwrap();
        assert!(created.is_active);
        assert_eq!(created.title, "New Tab");
        assert_eq!(get_tabs(&state).data.unwrap().len(), 5);

        let active = close_tab(&state, created.id).data.unwrap();
        assert_eq!(active.title, "GitHub");
        assert!(active.is_active);
    }

    #[test]
    fn test_unknown_tab_reports_error() {
        let state = test_state();

        let result = activate_tab(&state, "missing".to_string());
        assert!(!result.success);
        assert_eq!(result.error.as_deref(), Some("Tab error: Tab not found: missing"));

        let result = close_tab(&state, "missing".to_string());
        assert!(!result.success);
        assert_eq!(get_tabs(&state).data.unwrap().len(), 4);
    }

    #[test]
    fn test_update_url_and_title() {
        let state = test_state();
        let tabs = get_tabs(&state).data.unwrap();
        let github = tabs.iter().find(|t| t.title == "GitHub").unwrap();

        let updated = update_tab_url(
            &state,
            github.id.clone(),
            "https://github.com/rust-lang".to_string(),
        )
        .data
        .unwrap();
        assert_eq!(updated.url, "https://github.com/rust-lang");
        assert!(!updated.is_active);

        let renamed = set_tab_title(&state, github.id.clone(), "Rust".to_string())
            .data
            .unwrap();
        assert_eq!(renamed.title, "Rust");
        assert_eq!(renamed.url, "https://github.com/rust-lang");

        let iconless = set_tab_icon(&state, github.id.clone(), None).data.unwrap();
        assert_eq!(iconless.icon, None);
        assert_eq!(iconless.title, "Rust");

        let icon = Some("https://github.com/favicon.ico".to_string());
        let with_icon = set_tab_icon(&state, github.id.clone(), icon.clone()).data.unwrap();
        assert_eq!(with_icon.icon, icon);
    }
}
