use serde::{Deserialize, Serialize};

/// A stocked product. `id` is assigned by the caller and is unique
/// within [`VendorData`](super::vendor_data::VendorData).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryItem {
    /// Caller-assigned product id (e.g., "1", "SKU-42")
    pub id: String,

    /// Display name (e.g., "Organic Tomatoes")
    pub name: String,

    /// Units currently on hand
    pub quantity: u32,

    /// Units on their way from vendors
    #[serde(default)]
    pub incoming: u32,
}

impl InventoryItem {
    pub fn new(id: impl Into<String>, name: impl Into<String>, quantity: u32, incoming: u32) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            quantity,
            incoming,
        }
    }

    /// Read a stock field by name.
    #[must_use]
    pub fn field(&self, field: StockField) -> u32 {
        match field {
            StockField::Quantity => self.quantity,
            StockField::Incoming => self.incoming,
        }
    }

    pub(crate) fn field_mut(&mut self, field: StockField) -> &mut u32 {
        match field {
            StockField::Quantity => &mut self.quantity,
            StockField::Incoming => &mut self.incoming,
        }
    }
}

/// The two editable stock columns of the inventory table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StockField {
    Quantity,
    Incoming,
}

impl std::fmt::Display for StockField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StockField::Quantity => write!(f, "quantity"),
            StockField::Incoming => write!(f, "incoming"),
        }
    }
}

impl std::str::FromStr for StockField {
    type Err = crate::errors::CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "quantity" => Ok(StockField::Quantity),
            "incoming" => Ok(StockField::Incoming),
            other => Err(crate::errors::CoreError::Validation(format!(
                "Unknown stock field '{other}' (expected 'quantity' or 'incoming')"
            ))),
        }
    }
}

/// Apply a signed delta to a stock count, clamping at zero (and at `u32::MAX`).
#[must_use]
pub fn clamp_stock(current: u32, delta: i64) -> u32 {
    clamp_to_stock(i64::from(current).saturating_add(delta))
}

/// Clamp an arbitrary signed value into the valid stock range.
#[must_use]
pub fn clamp_to_stock(value: i64) -> u32 {
    value.clamp(0, i64::from(u32::MAX)) as u32
}
