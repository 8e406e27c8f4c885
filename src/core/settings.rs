use serde::{Deserialize, Serialize};
use web_sys::Storage;

use super::constants::{DEFAULT_IPFS_GATEWAY, SETTINGS_STORAGE_KEY};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Dark,
    Light,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WidgetSettings {
    pub theme: Theme,
    /// Ask the SDK to connect a smart account with sponsored gas
    pub sponsor_gas: bool,
    /// HTTP gateway prefix for `ipfs://` media
    pub ipfs_gateway: String,
}

impl Default for WidgetSettings {
    fn default() -> Self {
        Self {
            theme: Theme::Dark,
            sponsor_gas: true,
            ipfs_gateway: DEFAULT_IPFS_GATEWAY.to_string(),
        }
    }
}

impl WidgetSettings {
    fn local_storage() -> Option<Storage> {
        web_sys::window()
            .and_then(|win| win.local_storage().ok().flatten())
    }

    /// Parse persisted settings, filling missing fields with defaults
    pub fn from_json(value: &str) -> Result<Self, String> {
        serde_json::from_str(value).map_err(|e| format!("Failed to parse settings: {e}"))
    }

    pub fn load() -> Option<Self> {
        let storage = Self::local_storage()?;
        let value = storage
            .get_item(SETTINGS_STORAGE_KEY)
            .ok()
            .flatten()?;

        match Self::from_json(&value) {
            Ok(settings) => Some(settings),
            Err(e) => {
                log::warn!("{}", e);
                None
            }
        }
    }

    /// Gateway prefix that always ends with a slash
    pub fn gateway_prefix(&self) -> String {
        let trimmed = self.ipfs_gateway.trim();
        if trimmed.is_empty() {
            DEFAULT_IPFS_GATEWAY.to_string()
        } else if trimmed.ends_with('/') {
            trimmed.to_string()
        } else {
            format!("{}/", trimmed)
        }
    }
}

/// Persisted settings, or defaults when nothing usable is stored
pub fn load_settings() -> WidgetSettings {
    WidgetSettings::load().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_settings_use_defaults() {
        let settings = WidgetSettings::from_json(r#"{"theme":"light"}"#).unwrap();
        assert_eq!(settings.theme, Theme::Light);
        assert!(settings.sponsor_gas);
        assert_eq!(settings.ipfs_gateway, DEFAULT_IPFS_GATEWAY);
    }

    #[test]
    fn test_invalid_settings_rejected() {
        assert!(WidgetSettings::from_json("not json").is_err());
    }

    #[test]
    fn test_gateway_prefix() {
        let mut settings = WidgetSettings::default();
        settings.ipfs_gateway = " https://gw.example/ipfs ".to_string();
        assert_eq!(settings.gateway_prefix(), "https://gw.example/ipfs/");

        settings.ipfs_gateway = String::new();
        assert_eq!(settings.gateway_prefix(), DEFAULT_IPFS_GATEWAY);
    }
}
