use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

/// Lifecycle state of a vendor order.
/// Transitions are driven from outside the store; every state is representable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    #[default]
    Pending,
    Confirmed,
    Fulfilled,
    Cancelled,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Confirmed => "confirmed",
            OrderStatus::Fulfilled => "fulfilled",
            OrderStatus::Cancelled => "cancelled",
        }
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A product line on a vendor order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    pub product_id: String,
    pub name: String,
    pub quantity: u32,
}

impl OrderItem {
    pub fn new(product_id: impl Into<String>, name: impl Into<String>, quantity: u32) -> Self {
        Self {
            product_id: product_id.into(),
            name: name.into(),
            quantity,
        }
    }
}

/// A vendor delivery order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    /// Unique identifier
    pub id: String,

    /// Supplier name (e.g., "Fresh Produce Co.")
    pub vendor: String,

    /// Delivery date (daily granularity)
    pub date: NaiveDate,

    /// Free-form category (e.g., "Vegetables", "Dairy")
    pub category: String,

    pub status: OrderStatus,

    /// Expected delivery time of day, stored as "HH:MM"
    #[serde(default, with = "expected_time")]
    pub expected_time: Option<NaiveTime>,

    /// Ordered product lines
    #[serde(default)]
    pub items: Vec<OrderItem>,
}

/// An order request before the store has assigned it an id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewOrder {
    /// Caller-supplied id; generated when `None`
    pub id: Option<String>,
    pub vendor: String,
    pub date: NaiveDate,
    pub category: String,
    /// Defaults to [`OrderStatus::Pending`] when `None`
    pub status: Option<OrderStatus>,
    pub expected_time: Option<NaiveTime>,
    pub items: Vec<OrderItem>,
}

impl NewOrder {
    pub fn new(vendor: impl Into<String>, date: NaiveDate, category: impl Into<String>) -> Self {
        Self {
            id: None,
            vendor: vendor.into(),
            date,
            category: category.into(),
            status: None,
            expected_time: None,
            items: Vec::new(),
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_status(mut self, status: OrderStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn with_expected_time(mut self, time: NaiveTime) -> Self {
        self.expected_time = Some(time);
        self
    }

    pub fn with_item(mut self, item: OrderItem) -> Self {
        self.items.push(item);
        self
    }

    /// Turn the request into a stored order under the given id.
    pub fn into_order(self, id: String) -> Order {
        Order {
            id,
            vendor: self.vendor,
            date: self.date,
            category: self.category,
            status: self.status.unwrap_or_default(),
            expected_time: self.expected_time,
            items: self.items,
        }
    }
}

/// Parse a time-of-day as entered in a time input: "HH:MM" or "HH:MM:SS".
#[must_use]
pub fn parse_time(raw: &str) -> Option<NaiveTime> {
    let raw = raw.trim();
    NaiveTime::parse_from_str(raw, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(raw, "%H:%M:%S"))
        .ok()
}

/// Serde adapter for `expectedTime`: written as "HH:MM" (seconds only when
/// non-zero); empty strings and nulls read back as `None`.
mod expected_time {
    use super::*;
    use chrono::Timelike;
    use serde::{Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &Option<NaiveTime>, serializer: S) -> Result<S::Ok, S::Error> {
        match value {
            Some(t) if t.second() == 0 => serializer.serialize_str(&t.format("%H:%M").to_string()),
            Some(t) => serializer.serialize_str(&t.format("%H:%M:%S").to_string()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<NaiveTime>, D::Error> {
        let raw: Option<String> = Option::deserialize(deserializer)?;
        match raw.as_deref().map(str::trim) {
            None | Some("") => Ok(None),
            Some(s) => parse_time(s)
                .map(Some)
                .ok_or_else(|| serde::de::Error::custom(format!("invalid expectedTime '{s}'"))),
        }
    }
}
