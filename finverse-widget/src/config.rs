//! Widget configuration.
//!
//! Compile-time overridable URLs and labels for embedding the widget in a
//! host application build.

const DEFAULT_AVATAR_URL: &str = "https://cdn-icons-png.flaticon.com/512/4712/4712102.png";

/// Configuration for the chat widget's endpoint and visual identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WidgetConfig {
    /// Base URL the chat endpoint hangs off of.
    pub api_base_url: String,
    /// Avatar image shown on the toggle button, panel header, and bot messages.
    pub avatar_url: String,
    /// Display name shown in the panel header.
    pub assistant_name: String,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            api_base_url: option_env!("FINVERSE_API_BASE_URL")
                .unwrap_or("/api")
                .to_string(),
            avatar_url: option_env!("FINVERSE_AVATAR_URL")
                .unwrap_or(DEFAULT_AVATAR_URL)
                .to_string(),
            assistant_name: option_env!("FINVERSE_ASSISTANT_NAME")
                .unwrap_or("FinVerse-AI Bot")
                .to_string(),
        }
    }
}

impl WidgetConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_populated() {
        let config = WidgetConfig::new();
        assert!(!config.api_base_url.is_empty());
        assert!(config.avatar_url.starts_with("http"));
        assert!(!config.assistant_name.is_empty());
    }

    #[test]
    fn config_clones_equal() {
        let config = WidgetConfig::default();
        assert_eq!(config.clone(), config);
    }
}
