use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use super::inventory::InventoryItem;
use super::order::{Order, OrderItem, OrderStatus};
use super::sales::SalesSummary;

/// The root aggregate. Everything in here is serialized as one JSON
/// document and written under the state key on every mutation.
///
/// All sub-entities are owned exclusively by this value.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct VendorData {
    pub sales: SalesSummary,

    /// Unique by `id`, insertion-ordered
    pub inventory: Vec<InventoryItem>,

    /// Insertion-ordered
    pub orders: Vec<Order>,
}

impl VendorData {
    /// The starter data written on first run: five produce items,
    /// two pending orders and one confirmed order, zeroed sales.
    pub fn seed() -> Self {
        let inventory = vec![
            InventoryItem::new("1", "Organic Tomatoes", 120, 50),
            InventoryItem::new("2", "Cucumbers", 85, 30),
            InventoryItem::new("3", "Bell Peppers", 65, 20),
            InventoryItem::new("4", "Carrots", 150, 0),
            InventoryItem::new("5", "Potatoes", 200, 0),
        ];

        let orders = vec![
            seed_order(
                "1",
                "Fresh Produce Co.",
                (2023, 8, 15),
                "Vegetables",
                OrderStatus::Pending,
                (14, 30),
                vec![
                    OrderItem::new("1", "Organic Tomatoes", 50),
                    OrderItem::new("2", "Cucumbers", 30),
                    OrderItem::new("3", "Bell Peppers", 20),
                ],
            ),
            seed_order("2", "Dairy Delight", (2023, 8, 16), "Dairy", OrderStatus::Pending, (10, 0), Vec::new()),
            seed_order("3", "Bakery Central", (2023, 8, 17), "Bread", OrderStatus::Confirmed, (9, 0), Vec::new()),
        ];

        Self {
            sales: SalesSummary::default(),
            inventory,
            orders,
        }
    }

    #[must_use]
    pub fn item(&self, product_id: &str) -> Option<&InventoryItem> {
        self.inventory.iter().find(|i| i.id == product_id)
    }

    pub(crate) fn item_mut(&mut self, product_id: &str) -> Option<&mut InventoryItem> {
        self.inventory.iter_mut().find(|i| i.id == product_id)
    }

    #[must_use]
    pub fn order(&self, order_id: &str) -> Option<&Order> {
        self.orders.iter().find(|o| o.id == order_id)
    }

    pub(crate) fn order_mut(&mut self, order_id: &str) -> Option<&mut Order> {
        self.orders.iter_mut().find(|o| o.id == order_id)
    }

    /// Check the structural invariants that serde alone cannot express.
    /// Returns a description of the first violation.
    pub fn check_invariants(&self) -> Result<(), String> {
        let mut seen = HashSet::new();
        for item in &self.inventory {
            if !seen.insert(item.id.as_str()) {
                return Err(format!("duplicate inventory id '{}'", item.id));
            }
        }

        let mut seen = HashSet::new();
        for order in &self.orders {
            if !seen.insert(order.id.as_str()) {
                return Err(format!("duplicate order id '{}'", order.id));
            }
        }

        if !self.sales.today.is_finite() {
            return Err("sales total is not a finite number".into());
        }
        if let Some(sale) = self
            .sales
            .sales_history
            .iter()
            .find(|s| !s.price.is_finite() || !s.total.is_finite())
        {
            return Err(format!(
                "sale of '{}' has a non-finite price or total",
                sale.product_id
            ));
        }

        Ok(())
    }
}

fn seed_order(
    id: &str,
    vendor: &str,
    (y, m, d): (i32, u32, u32),
    category: &str,
    status: OrderStatus,
    (hour, minute): (u32, u32),
    items: Vec<OrderItem>,
) -> Order {
    Order {
        id: id.to_string(),
        vendor: vendor.to_string(),
        // Constant seed values, always valid.
        date: NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default(),
        category: category.to_string(),
        status,
        expected_time: NaiveTime::from_hms_opt(hour, minute, 0),
        items,
    }
}
