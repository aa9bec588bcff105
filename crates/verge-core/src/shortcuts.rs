//! Sidebar shortcut links

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::CoreError;
use crate::Result;

/// A link in the sidebar shortcut grid. Opens outside the content surface.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shortcut {
    pub name: String,
    pub url: String,
    /// Icon name the renderer maps to a glyph
    #[serde(default)]
    pub glyph: Option<String>,
}

impl Shortcut {
    pub fn new(name: &str, url: &str, glyph: &str) -> Self {
        Self {
            name: name.to_string(),
            url: url.to_string(),
            glyph: Some(glyph.to_string()),
        }
    }
}

pub fn default_shortcuts() -> Vec<Shortcut> {
    vec![
        Shortcut::new("Instagram", "https://instagram.com", "instagram"),
        Shortcut::new("YouTube", "https://youtube.com", "youtube"),
        Shortcut::new("Messenger", "https://messenger.com", "message-circle"),
        Shortcut::new("LinkedIn", "https://linkedin.com", "linkedin"),
        Shortcut::new("Twitter", "https://twitter.com", "twitter"),
        Shortcut::new("Twitch", "https://twitch.tv", "twitch"),
        Shortcut::new("Facebook", "https://facebook.com", "facebook"),
        Shortcut::new("Chrome", "https://chrome.google.com", "chrome"),
    ]
}

/// Every shortcut needs a name and an absolute http(s) URL
pub fn validate_shortcuts(shortcuts: &[Shortcut]) -> Result<()> {
    for shortcut in shortcuts {
        if shortcut.name.trim().is_empty() {
            return Err(CoreError::Config(format!(
                "Shortcut for {} has no name",
                shortcut.url
            )));
        }

        let url = Url::parse(&shortcut.url).map_err(|e| {
            CoreError::Config(format!("Shortcut {} has invalid URL: {}", shortcut.name, e))
        })?;

        if !matches!(url.scheme(), "http" | "https") {
            return Err(CoreError::Config(format!(
                "Shortcut {} must use http or https, got {}",
                shortcut.name,
                url.scheme()
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let shortcuts = default_shortcuts();
        assert_eq!(shortcuts.len(), 8);
        assert_eq!(shortcuts[0].name, "Instagram");
        assert!(validate_shortcuts(&shortcuts).is_ok());
    }

    #[test]
    fn test_rejects_relative_url() {
        let shortcuts = vec![Shortcut::new("Broken", "instagram.com", "instagram")];
        assert!(validate_shortcuts(&shortcuts).is_err());
    }

    #[test]
    fn test_rejects_non_http_scheme() {
        let shortcuts = vec![Shortcut::new("Local", "file:///etc/hosts", "file")];
        assert!(validate_shortcuts(&shortcuts).is_err());
    }

    #[test]
    fn test_rejects_blank_name() {
        let shortcuts = vec![Shortcut::new("  ", "https://example.com", "globe")];
        assert!(validate_shortcuts(&shortcuts).is_err());
    }
}
