//! Read-only view models for the presentation layer.
//!
//! Everything here takes a snapshot by shared reference and returns plain
//! data; rendering (HTML, widgets) stays with the caller.

use chrono::{NaiveDate, NaiveTime};
use serde::Serialize;

use crate::models::inventory::InventoryItem;
use crate::models::order::{Order, OrderStatus};
use crate::models::query::SortDirection;
use crate::models::sales::SalesSummary;
use crate::models::vendor_data::VendorData;

use super::inventory_service::InventoryService;
use super::order_service::OrderService;

/// Header widget: gross sales and units sold.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SalesSummaryView {
    /// e.g. "$1,250"
    pub gross_sales: String,
    pub products_sold: u64,
}

/// One row of the itemized sales list.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SaleLineView {
    pub name: String,
    /// e.g. "5 x $10 = $50"
    pub detail: String,
    /// e.g. "5 units"
    pub units: String,
}

/// One entry of the top-inventory widget.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InventoryCardView {
    pub id: String,
    pub name: String,
    /// e.g. "120 units"
    pub quantity_label: String,
}

/// One entry of an order list.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderCardView {
    pub id: String,
    pub vendor: String,
    /// e.g. "Aug 15, 2023 • Vegetables"
    pub subtitle: String,
    /// e.g. "2:30 PM"
    pub expected: Option<String>,
    pub status: OrderStatus,
    /// e.g. ["Organic Tomatoes: 50 units"]
    pub items: Vec<String>,
}

/// Option entry for product pickers (order item rows, sell form).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProductOptionView {
    pub value: String,
    pub label: String,
}

/// Everything the main dashboard page shows.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardView {
    pub sales: SalesSummaryView,
    pub inventory: Vec<InventoryCardView>,
    pub pending_orders: Vec<OrderCardView>,
}

/// Builds view models from a `VendorData` snapshot.
pub struct ViewService {
    inventory_service: InventoryService,
    order_service: OrderService,
}

impl ViewService {
    pub fn new() -> Self {
        Self {
            inventory_service: InventoryService::new(),
            order_service: OrderService::new(),
        }
    }

    pub fn dashboard(
        &self,
        data: &VendorData,
        inventory_limit: usize,
        direction: SortDirection,
        pending_limit: usize,
    ) -> DashboardView {
        let inventory = self
            .inventory_service
            .top_inventory(data, inventory_limit, direction)
            .into_iter()
            .map(inventory_card)
            .collect();
        let pending_orders = self
            .order_service
            .pending_orders(data, pending_limit)
            .into_iter()
            .map(order_card)
            .collect();

        DashboardView {
            sales: sales_summary(&data.sales),
            inventory,
            pending_orders,
        }
    }

    /// Itemized sales, oldest first.
    pub fn sales_lines(&self, sales: &SalesSummary) -> Vec<SaleLineView> {
        sales
            .sales_history
            .iter()
            .map(|s| SaleLineView {
                name: s.name.clone(),
                detail: format!(
                    "{} x {} = {}",
                    s.quantity,
                    format_currency(s.price),
                    format_currency(s.total)
                ),
                units: format!("{} units", s.quantity),
            })
            .collect()
    }

    /// Every order, including non-pending ones, in insertion order.
    pub fn all_orders(&self, data: &VendorData) -> Vec<OrderCardView> {
        data.orders.iter().map(order_card).collect()
    }

    pub fn product_options(&self, data: &VendorData) -> Vec<ProductOptionView> {
        data.inventory
            .iter()
            .map(|i| ProductOptionView {
                value: i.id.clone(),
                label: i.name.clone(),
            })
            .collect()
    }

    /// Short spoken-style summary of the first `n` inventory items,
    /// e.g. "120 Organic Tomatoes".
    pub fn inventory_summary(&self, data: &VendorData, n: usize) -> Vec<String> {
        data.inventory
            .iter()
            .take(n)
            .map(|i| format!("{} {}", i.quantity, i.name))
            .collect()
    }
}

impl Default for ViewService {
    fn default() -> Self {
        Self::new()
    }
}

pub fn sales_summary(sales: &SalesSummary) -> SalesSummaryView {
    SalesSummaryView {
        gross_sales: format_currency(sales.today),
        products_sold: sales.products_sold,
    }
}

fn inventory_card(item: &InventoryItem) -> InventoryCardView {
    InventoryCardView {
        id: item.id.clone(),
        name: item.name.clone(),
        quantity_label: format!("{} units", item.quantity),
    }
}

fn order_card(order: &Order) -> OrderCardView {
    OrderCardView {
        id: order.id.clone(),
        vendor: order.vendor.clone(),
        subtitle: format!("{} • {}", format_date(order.date), order.category),
        expected: order.expected_time.map(format_time),
        status: order.status,
        items: order
            .items
            .iter()
            .map(|i| format!("{}: {} units", i.name, i.quantity))
            .collect(),
    }
}

/// "Aug 15, 2023"
#[must_use]
pub fn format_date(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}

/// 12-hour clock: "2:30 PM", "12:05 AM".
#[must_use]
pub fn format_time(time: NaiveTime) -> String {
    time.format("%-I:%M %p").to_string()
}

/// Dollar amount with thousands separators and at most three decimals,
/// trailing zeros dropped: 1250.0 → "$1,250", 12.5 → "$12.5",
/// 12.345 → "$12.345". Matches the browser's default number locale format.
#[must_use]
pub fn format_currency(amount: f64) -> String {
    let sign = if amount < 0.0 { "-" } else { "" };
    let millis = (amount.abs() * 1000.0).round() as u64;
    let whole = millis / 1000;
    let fraction = millis % 1000;

    let digits = whole.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    if fraction == 0 {
        format!("{sign}${grouped}")
    } else {
        let decimals = format!("{fraction:03}");
        format!("{sign}${grouped}.{}", decimals.trim_end_matches('0'))
    }
}
