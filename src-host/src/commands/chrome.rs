//! Sidebar, visibility and theme commands
use verge_core::{BrowserSnapshot, HostAction, KeyEvent, Section, UiEvent};

use super::CommandResult;
use crate::state::AppState;

pub fn get_state(state: &AppState) -> CommandResult<BrowserSnapshot> {
    match state.with_browser(|browser| Ok(browser.snapshot())) {
        Ok(snapshot) => CommandResult::ok(snapshot),
        Err(e) => CommandResult::err(e.to_string()),
    }
}

/// Returns the new visibility
pub fn toggle_ui(state: &AppState) -> CommandResult<bool> {
    match state.with_browser_mut(|browser| Ok(browser.toggle_ui_visibility())) {
        Ok(visible) => CommandResult::ok(visible),
        Err(e) => CommandResult::err(e.to_string()),
    }
}

pub fn show_ui(state: &AppState) -> CommandResult<bool> {
    match state.with_browser_mut(|browser| {
        browser.show_ui();
        Ok(browser.is_ui_visible())
    }) {
        Ok(visible) => CommandResult::ok(visible),
        Err(e) => CommandResult::err(e.to_string()),
    }
}

pub fn toggle_theme(state: &AppState) -> CommandResult<HostAction> {
    match state.with_browser_mut(|browser| Ok(browser.toggle_theme())) {
        Ok(action) => CommandResult::ok(action),
        Err(e) => CommandResult::err(e.to_string()),
    }
}

/// Returns whether the sidebar is now expanded
pub fn toggle_sidebar(state: &AppState) -> CommandResult<bool> {
    match state.with_browser_mut(|browser| Ok(browser.toggle_sidebar())) {
        Ok(expanded) => CommandResult::ok(expanded),
        Err(e) => CommandResult::err(e.to_string()),
    }
}

/// Returns whether the section is now open
pub fn toggle_section(state: &AppState, section: Section) -> CommandResult<bool> {
    match state.with_browser_mut(|browser| Ok(browser.toggle_section(section))) {
        Ok(open) => CommandResult::ok(open),
        Err(e) => CommandResult::err(e.to_string()),
    }
}

pub fn open_shortcut(state: &AppState, index: usize) -> CommandResult<HostAction> {
    match state.with_browser(|browser| browser.open_shortcut(index)) {
        Ok(action) => CommandResult::ok(action),
        Err(e) => CommandResult::err(e.to_string()),
    }
}

/// Feed a renderer input event through the listener table.
/// Returns whether it changed anything.
pub fn dispatch_event(state: &AppState, event: UiEvent) -> CommandResult<bool> {
    match state.with_browser_mut(|browser| Ok(browser.handle_event(event))) {
        Ok(changed) => CommandResult::ok(changed),
        Err(e) => CommandResult::err(e.to_string()),
    }
}

pub fn key_down(state: &AppState, key: KeyEvent) -> CommandResult<bool> {
    dispatch_event(state, UiEvent::KeyDown(key))
}
