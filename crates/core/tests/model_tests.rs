// ═══════════════════════════════════════════════════════════════════
// Model Tests: seed data, persisted JSON shape, enums, clamping
// ═══════════════════════════════════════════════════════════════════

use chrono::{NaiveDate, NaiveTime};
use vendor_dashboard_core::models::inventory::{clamp_stock, clamp_to_stock, InventoryItem, StockField};
use vendor_dashboard_core::models::order::{parse_time, NewOrder, Order, OrderItem, OrderStatus};
use vendor_dashboard_core::models::query::SortDirection;
use vendor_dashboard_core::models::sales::{SaleRecord, SalesSummary};
use vendor_dashboard_core::models::theme::Theme;
use vendor_dashboard_core::models::vendor_data::VendorData;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn time(h: u32, m: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, m, 0).unwrap()
}

// ═══════════════════════════════════════════════════════════════════
// Seed data
// ═══════════════════════════════════════════════════════════════════

mod seed {
    use super::*;

    #[test]
    fn inventory_matches_starter_list() {
        let data = VendorData::seed();
        let rows: Vec<(&str, &str, u32, u32)> = data
            .inventory
            .iter()
            .map(|i| (i.id.as_str(), i.name.as_str(), i.quantity, i.incoming))
            .collect();
        assert_eq!(
            rows,
            vec![
                ("1", "Organic Tomatoes", 120, 50),
                ("2", "Cucumbers", 85, 30),
                ("3", "Bell Peppers", 65, 20),
                ("4", "Carrots", 150, 0),
                ("5", "Potatoes", 200, 0),
            ]
        );
    }

    #[test]
    fn orders_two_pending_one_confirmed() {
        let data = VendorData::seed();
        assert_eq!(data.orders.len(), 3);
        assert_eq!(data.orders[0].vendor, "Fresh Produce Co.");
        assert_eq!(data.orders[0].status, OrderStatus::Pending);
        assert_eq!(data.orders[0].date, date(2023, 8, 15));
        assert_eq!(data.orders[0].expected_time, Some(time(14, 30)));
        assert_eq!(data.orders[0].items.len(), 3);
        assert_eq!(data.orders[1].vendor, "Dairy Delight");
        assert_eq!(data.orders[1].status, OrderStatus::Pending);
        assert!(data.orders[1].items.is_empty());
        assert_eq!(data.orders[2].vendor, "Bakery Central");
        assert_eq!(data.orders[2].status, OrderStatus::Confirmed);
        assert_eq!(data.orders[2].expected_time, Some(time(9, 0)));
    }

    #[test]
    fn sales_start_at_zero() {
        let data = VendorData::seed();
        assert_eq!(data.sales, SalesSummary::default());
        assert_eq!(data.sales.today, 0.0);
        assert_eq!(data.sales.products_sold, 0);
        assert!(data.sales.sales_history.is_empty());
    }

    #[test]
    fn seed_satisfies_invariants() {
        assert!(VendorData::seed().check_invariants().is_ok());
    }

    #[test]
    fn lookups_by_id() {
        let data = VendorData::seed();
        assert_eq!(data.item("3").map(|i| i.name.as_str()), Some("Bell Peppers"));
        assert!(data.item("99").is_none());
        assert_eq!(data.order("2").map(|o| o.category.as_str()), Some("Dairy"));
        assert!(data.order("nope").is_none());
    }
}

// ═══════════════════════════════════════════════════════════════════
// Invariants
// ═══════════════════════════════════════════════════════════════════

mod invariants {
    use super::*;

    #[test]
    fn duplicate_inventory_id_rejected() {
        let mut data = VendorData::seed();
        data.inventory.push(InventoryItem::new("1", "Shadow Tomatoes", 1, 0));
        let err = data.check_invariants().unwrap_err();
        assert!(err.contains("duplicate inventory id '1'"));
    }

    #[test]
    fn duplicate_order_id_rejected() {
        let mut data = VendorData::seed();
        let copy = data.orders[0].clone();
        data.orders.push(copy);
        assert!(data.check_invariants().unwrap_err().contains("order"));
    }

    #[test]
    fn non_finite_sales_total_rejected() {
        let mut data = VendorData::default();
        data.sales.today = f64::NAN;
        assert!(data.check_invariants().is_err());
    }
}

// ═══════════════════════════════════════════════════════════════════
// Sales
// ═══════════════════════════════════════════════════════════════════

mod sales {
    use super::*;

    #[test]
    fn sale_total_is_quantity_times_price() {
        let sale = SaleRecord::new("1", "Organic Tomatoes", 4, 2.5);
        assert_eq!(sale.total, 10.0);
        assert_eq!(sale.quantity, 4);
        assert_eq!(sale.price, 2.5);
    }

    #[test]
    fn record_rolls_into_totals() {
        let mut summary = SalesSummary::default();
        summary.record(SaleRecord::new("1", "Organic Tomatoes", 3, 10.0));
        summary.record(SaleRecord::new("2", "Cucumbers", 2, 1.5));
        assert_eq!(summary.today, 33.0);
        assert_eq!(summary.products_sold, 5);
        assert_eq!(summary.sales_history.len(), 2);
        assert_eq!(summary.sales_history[0].product_id, "1");
        assert_eq!(summary.sales_history[1].product_id, "2");
    }
}

// ═══════════════════════════════════════════════════════════════════
// Persisted JSON shape
// ═══════════════════════════════════════════════════════════════════

mod json_shape {
    use super::*;

    const DASHBOARD_JSON: &str = r#"{
        "sales": { "today": 0, "productsSold": 0, "salesHistory": [] },
        "inventory": [
            { "id": "1", "name": "Organic Tomatoes", "quantity": 120, "incoming": 50 },
            { "id": "2", "name": "Cucumbers", "quantity": 85, "incoming": 30 },
            { "id": "3", "name": "Bell Peppers", "quantity": 65, "incoming": 20 },
            { "id": "4", "name": "Carrots", "quantity": 150, "incoming": 0 },
            { "id": "5", "name": "Potatoes", "quantity": 200, "incoming": 0 }
        ],
        "orders": [
            { "id": "1", "vendor": "Fresh Produce Co.", "date": "2023-08-15",
              "category": "Vegetables", "status": "pending", "expectedTime": "14:30",
              "items": [
                { "productId": "1", "name": "Organic Tomatoes", "quantity": 50 },
                { "productId": "2", "name": "Cucumbers", "quantity": 30 },
                { "productId": "3", "name": "Bell Peppers", "quantity": 20 }
              ] },
            { "id": "2", "vendor": "Dairy Delight", "date": "2023-08-16",
              "category": "Dairy", "status": "pending", "expectedTime": "10:00", "items": [] },
            { "id": "3", "vendor": "Bakery Central", "date": "2023-08-17",
              "category": "Bread", "status": "confirmed", "expectedTime": "09:00", "items": [] }
        ]
    }"#;

    #[test]
    fn dashboard_document_parses_to_seed() {
        let parsed: VendorData = serde_json::from_str(DASHBOARD_JSON).unwrap();
        assert_eq!(parsed, VendorData::seed());
    }

    #[test]
    fn field_names_are_camel_case() {
        let mut data = VendorData::seed();
        data.sales.record(SaleRecord::new("1", "Organic Tomatoes", 1, 10.0));
        let value = serde_json::to_value(&data).unwrap();

        assert!(value["sales"].get("productsSold").is_some());
        assert!(value["sales"].get("salesHistory").is_some());
        assert_eq!(value["sales"]["salesHistory"][0]["productId"], "1");
        assert_eq!(value["orders"][0]["expectedTime"], "14:30");
        assert_eq!(value["orders"][0]["items"][0]["productId"], "1");
        assert_eq!(value["orders"][0]["date"], "2023-08-15");
        assert_eq!(value["orders"][2]["status"], "confirmed");
    }

    #[test]
    fn empty_expected_time_reads_as_none() {
        let json = r#"{ "id": "9", "vendor": "V", "date": "2024-01-02", "category": "Misc",
                        "status": "pending", "expectedTime": "", "items": [] }"#;
        let order: Order = serde_json::from_str(json).unwrap();
        assert_eq!(order.expected_time, None);
    }

    #[test]
    fn missing_expected_time_and_items_default() {
        let json = r#"{ "id": "9", "vendor": "V", "date": "2024-01-02", "category": "Misc",
                        "status": "fulfilled" }"#;
        let order: Order = serde_json::from_str(json).unwrap();
        assert_eq!(order.expected_time, None);
        assert!(order.items.is_empty());
        assert_eq!(order.status, OrderStatus::Fulfilled);
    }

    #[test]
    fn expected_time_with_seconds_round_trips() {
        let mut order = VendorData::seed().orders[0].clone();
        order.expected_time = NaiveTime::from_hms_opt(7, 5, 30);
        let json = serde_json::to_string(&order).unwrap();
        assert!(json.contains("\"07:05:30\""));
        let back: Order = serde_json::from_str(&json).unwrap();
        assert_eq!(back, order);
    }

    #[test]
    fn none_expected_time_serializes_as_null() {
        let mut order = VendorData::seed().orders[0].clone();
        order.expected_time = None;
        let value = serde_json::to_value(&order).unwrap();
        assert!(value["expectedTime"].is_null());
    }

    #[test]
    fn bad_expected_time_is_an_error() {
        let json = r#"{ "id": "9", "vendor": "V", "date": "2024-01-02", "category": "Misc",
                        "status": "pending", "expectedTime": "teatime" }"#;
        assert!(serde_json::from_str::<Order>(json).is_err());
    }

    #[test]
    fn missing_incoming_defaults_to_zero() {
        let item: InventoryItem =
            serde_json::from_str(r#"{ "id": "7", "name": "Leeks", "quantity": 12 }"#).unwrap();
        assert_eq!(item.incoming, 0);
    }

    #[test]
    fn negative_quantity_does_not_parse() {
        let res = serde_json::from_str::<InventoryItem>(
            r#"{ "id": "7", "name": "Leeks", "quantity": -3, "incoming": 0 }"#,
        );
        assert!(res.is_err());
    }

    #[test]
    fn unknown_status_does_not_parse() {
        assert!(serde_json::from_str::<OrderStatus>("\"shipped\"").is_err());
    }
}

// ═══════════════════════════════════════════════════════════════════
// Orders
// ═══════════════════════════════════════════════════════════════════

mod orders {
    use super::*;

    #[test]
    fn new_order_defaults_to_pending() {
        let order = NewOrder::new("Dairy Delight", date(2024, 5, 1), "Dairy").into_order("x".into());
        assert_eq!(order.status, OrderStatus::Pending);
        assert_eq!(order.id, "x");
        assert_eq!(order.expected_time, None);
    }

    #[test]
    fn builder_sets_everything() {
        let order = NewOrder::new("Fresh Produce Co.", date(2024, 5, 1), "Vegetables")
            .with_id("abc")
            .with_status(OrderStatus::Confirmed)
            .with_expected_time(time(8, 15))
            .with_item(OrderItem::new("1", "Organic Tomatoes", 10))
            .with_item(OrderItem::new("4", "Carrots", 5));
        assert_eq!(order.id.as_deref(), Some("abc"));

        let stored = order.into_order("abc".into());
        assert_eq!(stored.status, OrderStatus::Confirmed);
        assert_eq!(stored.expected_time, Some(time(8, 15)));
        assert_eq!(stored.items.len(), 2);
        assert_eq!(stored.items[1].name, "Carrots");
    }

    #[test]
    fn status_strings() {
        assert_eq!(OrderStatus::Pending.to_string(), "pending");
        assert_eq!(OrderStatus::Confirmed.as_str(), "confirmed");
        assert_eq!(OrderStatus::Fulfilled.as_str(), "fulfilled");
        assert_eq!(OrderStatus::Cancelled.as_str(), "cancelled");
        assert_eq!(OrderStatus::default(), OrderStatus::Pending);
    }

    #[test]
    fn parse_time_accepts_both_input_forms() {
        assert_eq!(parse_time("14:30"), Some(time(14, 30)));
        assert_eq!(parse_time(" 09:00:00 "), Some(time(9, 0)));
        assert_eq!(parse_time("25:00"), None);
        assert_eq!(parse_time(""), None);
    }
}

// ═══════════════════════════════════════════════════════════════════
// Inventory helpers
// ═══════════════════════════════════════════════════════════════════

mod inventory {
    use super::*;

    #[test]
    fn clamp_stock_never_goes_negative() {
        assert_eq!(clamp_stock(10, -3), 7);
        assert_eq!(clamp_stock(10, -10), 0);
        assert_eq!(clamp_stock(10, -11), 0);
        assert_eq!(clamp_stock(10, i64::MIN), 0);
        assert_eq!(clamp_stock(10, 5), 15);
    }

    #[test]
    fn clamp_stock_saturates_at_max() {
        assert_eq!(clamp_stock(u32::MAX, 1), u32::MAX);
        assert_eq!(clamp_stock(0, i64::MAX), u32::MAX);
        assert_eq!(clamp_to_stock(-1), 0);
        assert_eq!(clamp_to_stock(42), 42);
    }

    #[test]
    fn field_accessor() {
        let item = InventoryItem::new("1", "Organic Tomatoes", 120, 50);
        assert_eq!(item.field(StockField::Quantity), 120);
        assert_eq!(item.field(StockField::Incoming), 50);
    }

    #[test]
    fn stock_field_parses_table_attribute() {
        assert_eq!("quantity".parse::<StockField>().unwrap(), StockField::Quantity);
        assert_eq!("incoming".parse::<StockField>().unwrap(), StockField::Incoming);
        assert!("price".parse::<StockField>().is_err());
        assert_eq!(StockField::Incoming.to_string(), "incoming");
    }
}

// ═══════════════════════════════════════════════════════════════════
// Sort direction & theme
// ═══════════════════════════════════════════════════════════════════

mod preferences {
    use super::*;

    #[test]
    fn sort_direction_accepts_dashboard_values() {
        assert_eq!("high".parse::<SortDirection>().unwrap(), SortDirection::Descending);
        assert_eq!("low".parse::<SortDirection>().unwrap(), SortDirection::Ascending);
        assert_eq!("Descending".parse::<SortDirection>().unwrap(), SortDirection::Descending);
        assert!("sideways".parse::<SortDirection>().is_err());
        assert_eq!(SortDirection::default(), SortDirection::Descending);
    }

    #[test]
    fn theme_parse_and_toggle() {
        assert_eq!(Theme::parse("dark"), Some(Theme::Dark));
        assert_eq!(Theme::parse("light"), Some(Theme::Light));
        assert_eq!(Theme::parse("sepia"), None);
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Dark.to_string(), "dark");
    }

    #[test]
    fn theme_from_system_preference() {
        assert_eq!(Theme::from_system(true), Theme::Dark);
        assert_eq!(Theme::from_system(false), Theme::Light);
    }
}
