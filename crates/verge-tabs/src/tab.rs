//! Tab data structure
//!
//! A tab in the sidebar shows:
//! - Icon (placeholder glyph when absent)
//! - Title (truncated by the renderer)

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tab {
    /// Unique identifier, never reused
    pub id: String,
    /// Display title
    pub title: String,
    /// Current location of the content surface
    pub url: String,
    /// Small image shown next to the title
    pub icon: Option<String>,
    /// When the tab was created
    pub created_at: DateTime<Utc>,
}

/// Content a tab is created with.
///
/// Used for the "new tab" placeholder and for the tabs opened on startup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TabTemplate {
    pub title: String,
    pub url: String,
    #[serde(default)]
    pub icon: Option<String>,
}

impl TabTemplate {
    pub fn new(title: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            url: url.into(),
            icon: None,
        }
    }

    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    /// The placeholder content of a freshly opened tab
    pub fn placeholder() -> Self {
        Self::new("New Tab", "about:blank").with_icon("/placeholder.svg?height=16&width=16")
    }
}

impl Default for TabTemplate {
    fn default() -> Self {
        Self::placeholder()
    }
}

impl Tab {
    pub fn new(title: String, url: String, icon: Option<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            title,
            url,
            icon,
            created_at: Utc::now(),
        }
    }

    pub fn from_template(template: &TabTemplate) -> Self {
        Self::new(
            template.title.clone(),
            template.url.clone(),
            template.icon.clone(),
        )
    }

    /// Replace the location, leaving every other field untouched
    pub fn navigate(&mut self, url: String) {
        self.url = url;
    }

    pub fn set_title(&mut self, title: String) {
        self.title = title;
    }

    pub fn set_icon(&mut self, icon: Option<String>) {
        self.icon = icon;
    }

    /// Get display title (with fallback to URL)
    pub fn display_title(&self) -> &str {
        if self.title.is_empty() {
            &self.url
        } else {
            &self.title
        }
    }
}
