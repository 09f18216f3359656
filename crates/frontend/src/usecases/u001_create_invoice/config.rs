use contracts::domain::a001_screw_press::BinderConfig;
use serde::{Deserialize, Serialize};

/// Default catalog endpoint, relative to the page origin
pub const DEFAULT_ENDPOINT: &str = "/get_product_data";

/// Настройки формы счёта
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormConfig {
    pub endpoint: String,
    pub binder: BinderConfig,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            binder: BinderConfig::default(),
        }
    }
}

impl FormConfig {
    /// Parses overrides supplied by the host page, missing keys keep defaults
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
