//! Address bar and toolbar commands
use std::time::Duration;

use verge_core::{HostAction, InputResolution};

use super::tabs::TabInfo;
use super::CommandResult;
use crate::ipc::{Event, EventSender, Outbound};
use crate::state::AppState;

pub fn resolve_input(state: &AppState, input: String) -> CommandResult<InputResolution> {
    match state.with_browser(|browser| Ok(browser.resolve_input(&input))) {
        Ok(resolution) => CommandResult::ok(resolution),
        Err(e) => CommandResult::err(e.to_string()),
    }
}

/// Enter in the address field
pub fn submit_address(state: &AppState, input: String) -> CommandResult<TabInfo> {
    match state.with_browser_mut(|browser| {
        let tab = browser.submit_address(&input);
        Ok(TabInfo::new(tab, &tab.id))
    }) {
        Ok(tab) => CommandResult::ok(tab),
        Err(e) => CommandResult::err(e.to_string()),
    }
}

/// Keystroke in the address field; the text is taken as-is
pub fn edit_address(state: &AppState, text: String) -> CommandResult<TabInfo> {
    match state.with_browser_mut(|browser| {
        let tab = browser.edit_address(&text);
        Ok(TabInfo::new(tab, &tab.id))
    }) {
        Ok(tab) => CommandResult::ok(tab),
        Err(e) => CommandResult::err(e.to_string()),
    }
}

pub fn back(state: &AppState) -> CommandResult<HostAction> {
    match state.with_browser(|browser| Ok(browser.back())) {
        Ok(action) => CommandResult::ok(action),
        Err(e) => CommandResult::err(e.to_string()),
    }
}

pub fn forward(state: &AppState) -> CommandResult<HostAction> {
    match state.with_browser(|browser| Ok(browser.forward())) {
        Ok(action) => CommandResult::ok(action),
        Err(e) => CommandResult::err(e.to_string()),
    }
}

/// Start a reload.
///
/// The indicator clears on `content_loaded`, or after the configured delay
/// if the content surface never reports back. A timeout only clears the
/// reload that started it, and pushes a state event when it did.
pub fn reload(state: &AppState, events: &EventSender) -> CommandResult<HostAction> {
    let started = state.with_browser_mut(|browser| {
        let action = browser.reload();
        Ok((
            action,
            browser.reload_generation(),
            browser.config().reload_indicator_ms,
        ))
    });

    match started {
        Ok((action, generation, delay_ms)) => {
            let state = state.clone();
            let events = events.clone();
            tokio::spawn(async move {
                tokio::time::sleep(Duration::from_millis(delay_ms)).await;

                let cleared = state.with_browser_mut(|browser| {
                    Ok(browser
                        .finish_loading_if(generation)
                        .then(|| browser.snapshot()))
                });

                if let Ok(Some(snapshot)) = cleared {
                    tracing::debug!(delay_ms, "Reload indicator timed out");
                    let _ = events.send(Outbound::Event(Event::State { state: snapshot }));
                }
            });
            CommandResult::ok(action)
        }
        Err(e) => CommandResult::err(e.to_string()),
    }
}

/// The content surface finished loading. Returns whether a reload was pending.
pub fn content_loaded(state: &AppState) -> CommandResult<bool> {
    match state.with_browser_mut(|browser| Ok(browser.finish_loading())) {
        Ok(was_loading) => CommandResult::ok(was_loading),
        Err(e) => CommandResult::err(e.to_string()),
    }
}
