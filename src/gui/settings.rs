use serde::{
    Deserialize,
    Serialize,
};

use crate::expression::{
    provider::DEFAULT_MODEL,
    ProviderConfig,
};

pub const SETTINGS_FILE: &str = "settings.json";

#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettingsData {
    /// OpenRouter credential. Empty means not configured, which keeps
    /// the app in offline fallback mode rather than being an error.
    pub api_key: String,
    pub model: String,
    pub dark_mode: bool,
}

impl Default for SettingsData {
    fn default() -> Self {
        Self { api_key: String::new(), model: DEFAULT_MODEL.to_string(), dark_mode: true }
    }
}

impl SettingsData {
    pub fn api_key_configured(&self) -> bool {
        !self.api_key.trim().is_empty()
    }

    pub fn provider_config(&self) -> ProviderConfig {
        let api_key = if self.api_key_configured() {
            Some(self.api_key.trim().to_string())
        } else {
            None
        };

        ProviderConfig::new(api_key, self.model.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_key_disables_network_path() {
        let mut settings = SettingsData::default();
        assert!(!settings.api_key_configured());
        assert!(settings.provider_config().api_key.is_none());

        settings.api_key = "   ".to_string();
        assert!(!settings.api_key_configured());
        assert!(settings.provider_config().api_key.is_none());
    }

    #[test]
    fn test_key_is_trimmed_into_config() {
        let settings = SettingsData {
            api_key: "  sk-or-123  ".to_string(),
            ..SettingsData::default()
        };

        let config = settings.provider_config();
        assert_eq!(config.api_key.as_deref(), Some("sk-or-123"));
        assert_eq!(config.model, DEFAULT_MODEL);
    }
}
