use tracing::debug;

use crate::errors::CoreError;
use crate::models::inventory::{clamp_stock, clamp_to_stock, InventoryItem, StockField};
use crate::models::query::SortDirection;
use crate::models::sales::SaleRecord;
use crate::models::vendor_data::VendorData;

use super::input::validate_price;

/// Inventory mutations and queries, including the sales accounting that
/// goes with selling stock.
///
/// Pure business logic over `&mut VendorData`: no I/O. Every method either
/// applies its whole change or returns an error with the data untouched.
pub struct InventoryService;

impl InventoryService {
    pub fn new() -> Self {
        Self
    }

    /// Apply a signed quantity change the way the dashboard's add/remove
    /// buttons do: a negative delta is a sale of `|delta|` units at
    /// `unit_price`, a non-negative delta is a restock.
    ///
    /// Returns the recorded sale, if any.
    pub fn adjust(
        &self,
        data: &mut VendorData,
        product_id: &str,
        delta: i64,
        unit_price: f64,
    ) -> Result<Option<SaleRecord>, CoreError> {
        if delta < 0 {
            self.sell_units(data, product_id, delta.unsigned_abs(), unit_price)
                .map(Some)
        } else {
            self.adjust_stock(data, product_id, delta)?;
            Ok(None)
        }
    }

    /// Sell `quantity` units: decrement stock (clamped at zero) and record
    /// the sale in the summary and history.
    ///
    /// The sale is recorded for the full requested quantity even when stock
    /// runs out; stock and sales are tracked independently.
    pub fn sell(
        &self,
        data: &mut VendorData,
        product_id: &str,
        quantity: u32,
        unit_price: f64,
    ) -> Result<SaleRecord, CoreError> {
        self.sell_units(data, product_id, u64::from(quantity), unit_price)
    }

    fn sell_units(
        &self,
        data: &mut VendorData,
        product_id: &str,
        units: u64,
        unit_price: f64,
    ) -> Result<SaleRecord, CoreError> {
        if units == 0 {
            return Err(CoreError::Validation("Sale quantity must be at least 1".into()));
        }
        let price = validate_price(unit_price)?;

        let name = data
            .item(product_id)
            .map(|i| i.name.clone())
            .ok_or_else(|| CoreError::NotFound(format!("product '{product_id}'")))?;

        // Totals must stay finite: JSON has no encoding for inf/NaN.
        let sale = SaleRecord::new(product_id, name, units, price);
        if !sale.total.is_finite() {
            return Err(CoreError::Validation(format!(
                "Sale total for {units} x {price} is out of range"
            )));
        }
        if !(data.sales.today + sale.total).is_finite() {
            return Err(CoreError::Validation(format!(
                "Recording a sale of {} would overflow today's revenue",
                sale.total
            )));
        }

        let stock_delta = -i64::try_from(units).unwrap_or(i64::MAX);
        if let Some(item) = data.item_mut(product_id) {
            item.quantity = clamp_stock(item.quantity, stock_delta);
            debug!(product_id, units, price, remaining = item.quantity, "sold");
        }
        data.sales.record(sale.clone());
        Ok(sale)
    }

    /// Change stock without touching sales (restocks, corrections,
    /// write-offs). Returns the new quantity.
    pub fn adjust_stock(&self, data: &mut VendorData, product_id: &str, delta: i64) -> Result<u32, CoreError> {
        let item = data
            .item_mut(product_id)
            .ok_or_else(|| CoreError::NotFound(format!("product '{product_id}'")))?;
        item.quantity = clamp_stock(item.quantity, delta);
        debug!(product_id, delta, quantity = item.quantity, "stock adjusted");
        Ok(item.quantity)
    }

    /// Append a new product. Ids must be unique.
    pub fn add_product(&self, data: &mut VendorData, item: InventoryItem) -> Result<(), CoreError> {
        if data.item(&item.id).is_some() {
            return Err(CoreError::DuplicateId(format!("product '{}'", item.id)));
        }
        debug!(product_id = %item.id, "product added");
        data.inventory.push(item);
        Ok(())
    }

    /// Remove a product by id. Returns the removed item, `None` if absent.
    pub fn remove_product(&self, data: &mut VendorData, product_id: &str) -> Option<InventoryItem> {
        let idx = data.inventory.iter().position(|i| i.id == product_id)?;
        debug!(product_id, "product removed");
        Some(data.inventory.remove(idx))
    }

    /// Overwrite one stock field, clamping negative values to zero.
    /// Returns the stored value.
    pub fn set_field(
        &self,
        data: &mut VendorData,
        product_id: &str,
        field: StockField,
        value: i64,
    ) -> Result<u32, CoreError> {
        let item = data
            .item_mut(product_id)
            .ok_or_else(|| CoreError::NotFound(format!("product '{product_id}'")))?;
        let stored = clamp_to_stock(value);
        *item.field_mut(field) = stored;
        debug!(product_id, %field, value = stored, "stock field set");
        Ok(stored)
    }

    /// Up to `n` items ordered by quantity. The sort is stable, so equal
    /// quantities keep their insertion order.
    pub fn top_inventory<'a>(&self, data: &'a VendorData, n: usize, direction: SortDirection) -> Vec<&'a InventoryItem> {
        let mut items: Vec<&InventoryItem> = data.inventory.iter().collect();
        match direction {
            SortDirection::Ascending => items.sort_by(|a, b| a.quantity.cmp(&b.quantity)),
            SortDirection::Descending => items.sort_by(|a, b| b.quantity.cmp(&a.quantity)),
        }
        items.truncate(n);
        items
    }

    /// Items whose on-hand quantity is at or below `threshold`, in insertion order.
    pub fn low_stock<'a>(&self, data: &'a VendorData, threshold: u32) -> Vec<&'a InventoryItem> {
        data.inventory.iter().filter(|i| i.quantity <= threshold).collect()
    }
}

impl Default for InventoryService {
    fn default() -> Self {
        Self::new()
    }
}
