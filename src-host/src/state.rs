//! Application state management
use parking_lot::RwLock;
use std::sync::Arc;
use verge_core::{Browser, Config, CoreError, Result};

/// Thread-safe application state wrapper
pub struct AppState {
    browser: Arc<RwLock<Option<Browser>>>,
}

impl AppState {
    pub fn new(config: Config) -> Result<Self> {
        let browser = Browser::new(config)?;

        Ok(Self {
            browser: Arc::new(RwLock::new(Some(browser))),
        })
    }

    pub fn with_browser<F, T>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&Browser) -> Result<T>,
    {
        let guard = self.browser.read();
        match guard.as_ref() {
            Some(browser) => f(browser),
            None => Err(CoreError::NotInitialized),
        }
    }

    pub fn with_browser_mut<F, T>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&mut Browser) -> Result<T>,
    {
        let mut guard = self.browser.write();
        match guard.as_mut() {
            Some(browser) => f(browser),
            None => Err(CoreError::NotInitialized),
        }
    }

    /// Tear the browser down; later commands fail with `NotInitialized`
    pub fn shutdown(&self) {
        if let Some(mut browser) = self.browser.write().take() {
            browser.teardown();
        }
    }
}

impl Clone for AppState {
    fn clone(&self) -> Self {
        Self {
            browser: Arc::clone(&self.browser),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shutdown_rejects_later_calls() {
        let state = AppState::new(Config::default()).unwrap();
        assert_eq!(
            state.with_browser(|b| Ok(b.tabs().len())).unwrap(),
            4
        );

        state.shutdown();

        assert!(matches!(
            state.with_browser(|b| Ok(b.tabs().len())),
            Err(CoreError::NotInitialized)
        ));
        // A second shutdown is harmless
        state.shutdown();
    }

    #[test]
    fn test_clones_share_browser() {
        let state = AppState::new(Config::default()).unwrap();
        let other = state.clone();

        other
            .with_browser_mut(|b| {
                b.create_tab();
                Ok(())
            })
            .unwrap();

        assert_eq!(state.with_browser(|b| Ok(b.tabs().len())).unwrap(), 5);
    }
}
