pub mod input;
pub mod inventory_service;
pub mod order_service;
pub mod view_service;
