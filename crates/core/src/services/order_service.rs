use tracing::debug;
use uuid::Uuid;

use crate::errors::CoreError;
use crate::models::order::{NewOrder, Order, OrderStatus};
use crate::models::vendor_data::VendorData;

/// Vendor order bookkeeping. Pure business logic, no I/O.
pub struct OrderService;

impl OrderService {
    pub fn new() -> Self {
        Self
    }

    /// Append an order and return its id.
    ///
    /// A caller-supplied id must not collide with an existing order; when
    /// no id is given a fresh UUID is assigned. Status defaults to pending.
    pub fn add_order(&self, data: &mut VendorData, request: NewOrder) -> Result<String, CoreError> {
        let id = match request.id.as_deref().map(str::trim) {
            Some(id) if !id.is_empty() => {
                if data.order(id).is_some() {
                    return Err(CoreError::DuplicateId(format!("order '{id}'")));
                }
                id.to_string()
            }
            _ => Self::generate_id(data),
        };

        let order = request.into_order(id.clone());
        debug!(order_id = %id, vendor = %order.vendor, items = order.items.len(), "order added");
        data.orders.push(order);
        Ok(id)
    }

    /// Move an order to a new status. Any transition is allowed.
    pub fn set_status(&self, data: &mut VendorData, order_id: &str, status: OrderStatus) -> Result<OrderStatus, CoreError> {
        let order = data
            .order_mut(order_id)
            .ok_or_else(|| CoreError::NotFound(format!("order '{order_id}'")))?;
        let previous = order.status;
        order.status = status;
        debug!(order_id, from = %previous, to = %status, "order status changed");
        Ok(previous)
    }

    /// Up to `n` pending orders in insertion order.
    pub fn pending_orders<'a>(&self, data: &'a VendorData, n: usize) -> Vec<&'a Order> {
        self.orders_with_status(data, OrderStatus::Pending)
            .into_iter()
            .take(n)
            .collect()
    }

    /// All orders with the given status, in insertion order.
    pub fn orders_with_status<'a>(&self, data: &'a VendorData, status: OrderStatus) -> Vec<&'a Order> {
        data.orders.iter().filter(|o| o.status == status).collect()
    }

    fn generate_id(data: &VendorData) -> String {
        loop {
            let id = Uuid::new_v4().to_string();
            if data.order(&id).is_none() {
                return id;
            }
        }
    }
}

impl Default for OrderService {
    fn default() -> Self {
        Self::new()
    }
}
