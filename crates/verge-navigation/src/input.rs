//! Input resolution for address bar

use serde::{Deserialize, Serialize};

/// Search endpoint used when no template is configured
pub const DEFAULT_SEARCH_TEMPLATE: &str = "https://search.brave.com/search?q=%s";

/// Result of resolving address bar input
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "lowercase")]
pub enum InputResolution {
    /// Navigate to the input as typed
    Navigate(String),
    /// Search for the input; holds the full search URL
    Search(String),
}

impl InputResolution {
    /// The location the content surface should show
    pub fn url(&self) -> &str {
        match self {
            InputResolution::Navigate(url) | InputResolution::Search(url) => url,
        }
    }

    pub fn into_url(self) -> String {
        match self {
            InputResolution::Navigate(url) | InputResolution::Search(url) => url,
        }
    }
}

#[derive(Debug, Clone)]
pub struct InputResolver {
    /// Search engine URL template (%s replaced with query)
    search_template: String,
}

impl InputResolver {
    pub fn new() -> Self {
        Self::with_search_engine(DEFAULT_SEARCH_TEMPLATE.to_string())
    }

    pub fn with_search_engine(template: String) -> Self {
        Self {
            search_template: template,
        }
    }

    pub fn set_search_engine(&mut self, template: String) {
        self.search_template = template;
    }

    pub fn search_template(&self) -> &str {
        &self.search_template
    }

    /// Resolve user input into an action.
    ///
    /// Never fails: anything that is not a direct http(s) location becomes a
    /// search, including the empty string.
    pub fn resolve(&self, input: &str) -> InputResolution {
        if Self::is_direct_location(input) {
            return InputResolution::Navigate(input.to_string());
        }

        let search_url = self.build_search_url(input);
        tracing::debug!(query = %input, url = %search_url, "Address input resolved to search");
        InputResolution::Search(search_url)
    }

    /// Scheme check only, no parsing
    fn is_direct_location(input: &str) -> bool {
        input.starts_with("http://") || input.starts_with("https://")
    }

    /// Build search URL from query
    fn build_search_url(&self, query: &str) -> String {
        let encoded = urlencoding::encode(query);
        self.search_template.replace("%s", &encoded)
    }
}

impl Default for InputResolver {
    fn default() -> Self {
        Self::new()
    }
}
