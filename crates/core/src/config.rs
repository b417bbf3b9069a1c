use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

/// Storage key for the serialized `VendorData`.
pub const DEFAULT_STATE_KEY: &str = "vendorData";

/// Storage key for the UI theme preference.
pub const DEFAULT_THEME_KEY: &str = "theme";

/// Unit price applied to removals when the caller does not supply one.
pub const DEFAULT_UNIT_PRICE: f64 = 10.0;

/// Store configuration. Every field has a default, so a partial JSON
/// document (or `{}`) is a valid configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Key under which `VendorData` is persisted
    pub state_key: String,

    /// Key under which the theme preference is persisted
    pub theme_key: String,

    /// Price per unit recorded for sales without an explicit price
    pub unit_price: f64,

    /// How many items the dashboard's inventory widget shows
    pub top_inventory_limit: usize,

    /// How many pending orders the dashboard's order widget shows
    pub pending_orders_limit: usize,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            state_key: DEFAULT_STATE_KEY.to_string(),
            theme_key: DEFAULT_THEME_KEY.to_string(),
            unit_price: DEFAULT_UNIT_PRICE,
            top_inventory_limit: 5,
            pending_orders_limit: 3,
        }
    }
}

impl StoreConfig {
    /// Parse and validate a JSON configuration document.
    pub fn from_json(json: &str) -> Result<Self, CoreError> {
        let config: StoreConfig = serde_json::from_str(json)
            .map_err(|e| CoreError::Config(format!("Failed to parse store config: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), CoreError> {
        if self.state_key.trim().is_empty() {
            return Err(CoreError::Config("state_key must not be empty".into()));
        }
        if self.theme_key.trim().is_empty() {
            return Err(CoreError::Config("theme_key must not be empty".into()));
        }
        if self.state_key == self.theme_key {
            return Err(CoreError::Config(format!(
                "state_key and theme_key must differ (both are '{}')",
                self.state_key
            )));
        }
        if !self.unit_price.is_finite() || self.unit_price < 0.0 {
            return Err(CoreError::Config(format!(
                "unit_price must be a non-negative number, got {}",
                self.unit_price
            )));
        }
        Ok(())
    }
}
