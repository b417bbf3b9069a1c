pub mod inventory;
pub mod order;
pub mod query;
pub mod sales;
pub mod theme;
pub mod vendor_data;
