pub mod config;
pub mod errors;
#[cfg(not(target_arch = "wasm32"))]
pub mod logging;
pub mod models;
pub mod services;
pub mod storage;

use tracing::{debug, warn};

use config::StoreConfig;
use errors::CoreError;
use models::{
    inventory::{InventoryItem, StockField},
    order::{NewOrder, Order, OrderStatus},
    query::SortDirection,
    theme::Theme,
    vendor_data::VendorData,
};
use services::{
    input,
    inventory_service::InventoryService,
    order_service::OrderService,
    view_service::{DashboardView, OrderCardView, ProductOptionView, SaleLineView, ViewService},
};
use storage::{manager::StorageManager, traits::KeyValueStore};

/// Main entry point for the vendor dashboard core library.
///
/// Owns the canonical in-memory `VendorData` and the transport it is
/// persisted through. Every mutation is one read-modify-write-persist
/// cycle: the change is applied in memory, the whole state is written
/// synchronously, and a read-only view of the new state is returned.
///
/// If the write fails the in-memory change stays applied, the call returns
/// [`CoreError::PersistenceWrite`] and [`has_unsaved_changes`](Self::has_unsaved_changes)
/// reports `true` until [`flush`](Self::flush) succeeds.
#[must_use]
pub struct VendorDashboard<S: KeyValueStore> {
    data: VendorData,
    store: S,
    config: StoreConfig,
    inventory_service: InventoryService,
    order_service: OrderService,
    view_service: ViewService,
    /// Set when the last write failed; cleared by a successful write.
    dirty: bool,
}

impl<S: KeyValueStore> std::fmt::Debug for VendorDashboard<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VendorDashboard")
            .field("transport", &self.store.name())
            .field("inventory", &self.data.inventory.len())
            .field("orders", &self.data.orders.len())
            .field("sales", &self.data.sales.sales_history.len())
            .field("dirty", &self.dirty)
            .finish()
    }
}

impl<S: KeyValueStore> VendorDashboard<S> {
    /// Seed the store on first run. Returns `true` if seed data was written,
    /// `false` if vendor data already existed.
    pub fn initialize(store: &mut S, config: &StoreConfig) -> Result<bool, CoreError> {
        StorageManager::initialize(store, &config.state_key)
    }

    /// Decode the persisted state without opening a dashboard.
    /// Fails with [`CoreError::CorruptState`] on missing or malformed data.
    pub fn load(store: &S, config: &StoreConfig) -> Result<VendorData, CoreError> {
        StorageManager::load(store, &config.state_key)
    }

    /// Open a dashboard over `store`: seed if empty, load, and re-seed if the
    /// stored state turns out to be corrupt.
    pub fn open(mut store: S, config: StoreConfig) -> Result<Self, CoreError> {
        config.validate()?;
        Self::initialize(&mut store, &config)?;
        let data = StorageManager::load_or_reseed(&mut store, &config.state_key)?;
        debug!(
            transport = store.name(),
            inventory = data.inventory.len(),
            orders = data.orders.len(),
            "vendor dashboard opened"
        );
        Ok(Self::build(data, store, config))
    }

    /// Open with the default configuration.
    pub fn open_default(store: S) -> Result<Self, CoreError> {
        Self::open(store, StoreConfig::default())
    }

    /// Re-read the persisted state, e.g. after another tab wrote to the same
    /// storage. Last writer wins: unflushed local changes are discarded.
    pub fn reload(&mut self) -> Result<&VendorData, CoreError> {
        if self.dirty {
            warn!("reloading over unsaved changes");
        }
        self.data = StorageManager::load_or_reseed(&mut self.store, &self.config.state_key)?;
        self.dirty = false;
        Ok(&self.data)
    }

    // ── Inventory ───────────────────────────────────────────────────

    /// Change a product's quantity by `delta`, clamping at zero.
    ///
    /// A negative delta counts as a sale of `|delta|` units at `unit_price`
    /// (the configured default when `None`): revenue, units sold and the
    /// sales history are all updated.
    pub fn adjust_inventory(
        &mut self,
        product_id: &str,
        delta: i64,
        unit_price: Option<f64>,
    ) -> Result<&VendorData, CoreError> {
        let price = unit_price.unwrap_or(self.config.unit_price);
        self.inventory_service
            .adjust(&mut self.data, product_id, delta, price)?;
        self.commit()
    }

    /// Sell `quantity` units of a product and record the sale.
    pub fn sell(
        &mut self,
        product_id: &str,
        quantity: u32,
        unit_price: Option<f64>,
    ) -> Result<&VendorData, CoreError> {
        let price = unit_price.unwrap_or(self.config.unit_price);
        self.inventory_service
            .sell(&mut self.data, product_id, quantity, price)?;
        self.commit()
    }

    /// Change stock without recording a sale (corrections, write-offs).
    pub fn adjust_stock(&mut self, product_id: &str, delta: i64) -> Result<&VendorData, CoreError> {
        self.inventory_service
            .adjust_stock(&mut self.data, product_id, delta)?;
        self.commit()
    }

    /// Add received units to a product.
    pub fn restock(&mut self, product_id: &str, quantity: u32) -> Result<&VendorData, CoreError> {
        self.adjust_stock(product_id, i64::from(quantity))
    }

    /// Add a new product. Fails with [`CoreError::DuplicateId`] if the id is taken.
    pub fn add_product(&mut self, item: InventoryItem) -> Result<&VendorData, CoreError> {
        self.inventory_service.add_product(&mut self.data, item)?;
        self.commit()
    }

    /// Remove a product. Removing an unknown id is not an error; the state
    /// is persisted either way.
    pub fn remove_product(&mut self, product_id: &str) -> Result<&VendorData, CoreError> {
        if self
            .inventory_service
            .remove_product(&mut self.data, product_id)
            .is_none()
        {
            debug!(product_id, "remove_product: no such product");
        }
        self.commit()
    }

    /// Overwrite `quantity` or `incoming` directly (inline table editing).
    /// Negative values are stored as zero.
    pub fn set_field(&mut self, product_id: &str, field: StockField, value: i64) -> Result<&VendorData, CoreError> {
        self.inventory_service
            .set_field(&mut self.data, product_id, field, value)?;
        self.commit()
    }

    /// Like [`set_field`](Self::set_field) but takes the raw cell text;
    /// unparseable input is stored as zero.
    pub fn set_field_from_input(
        &mut self,
        product_id: &str,
        field: StockField,
        raw: &str,
    ) -> Result<&VendorData, CoreError> {
        let value = input::leading_integer(raw).unwrap_or(0);
        self.set_field(product_id, field, value)
    }

    // ── Orders ──────────────────────────────────────────────────────

    /// Append a vendor order and return its id (caller-supplied or generated).
    ///
    /// On [`CoreError::PersistenceWrite`] the order is still the last one in
    /// [`data`](Self::data).
    pub fn add_order(&mut self, order: NewOrder) -> Result<String, CoreError> {
        let id = self.order_service.add_order(&mut self.data, order)?;
        self.commit()?;
        Ok(id)
    }

    /// Move an order to another status.
    pub fn set_order_status(&mut self, order_id: &str, status: OrderStatus) -> Result<&VendorData, CoreError> {
        self.order_service
            .set_status(&mut self.data, order_id, status)?;
        self.commit()
    }

    // ── Queries ─────────────────────────────────────────────────────

    /// Up to `n` items sorted by quantity (stable for ties).
    #[must_use]
    pub fn query_top_inventory(&self, n: usize, direction: SortDirection) -> Vec<&InventoryItem> {
        self.inventory_service.top_inventory(&self.data, n, direction)
    }

    /// Up to `n` pending orders in insertion order.
    #[must_use]
    pub fn query_pending_orders(&self, n: usize) -> Vec<&Order> {
        self.order_service.pending_orders(&self.data, n)
    }

    /// Items at or below `threshold` units.
    #[must_use]
    pub fn query_low_stock(&self, threshold: u32) -> Vec<&InventoryItem> {
        self.inventory_service.low_stock(&self.data, threshold)
    }

    #[must_use]
    pub fn query_orders_with_status(&self, status: OrderStatus) -> Vec<&Order> {
        self.order_service.orders_with_status(&self.data, status)
    }

    // ── Views ───────────────────────────────────────────────────────

    /// The main dashboard, using the configured widget limits.
    #[must_use]
    pub fn dashboard(&self, direction: SortDirection) -> DashboardView {
        self.view_service.dashboard(
            &self.data,
            self.config.top_inventory_limit,
            direction,
            self.config.pending_orders_limit,
        )
    }

    #[must_use]
    pub fn sales_lines(&self) -> Vec<SaleLineView> {
        self.view_service.sales_lines(&self.data.sales)
    }

    #[must_use]
    pub fn all_orders(&self) -> Vec<OrderCardView> {
        self.view_service.all_orders(&self.data)
    }

    #[must_use]
    pub fn product_options(&self) -> Vec<ProductOptionView> {
        self.view_service.product_options(&self.data)
    }

    #[must_use]
    pub fn inventory_summary(&self, n: usize) -> Vec<String> {
        self.view_service.inventory_summary(&self.data, n)
    }

    // ── Theme ───────────────────────────────────────────────────────

    /// The stored theme, or the system preference when none is stored.
    pub fn theme(&self, prefers_dark: bool) -> Result<Theme, CoreError> {
        let stored = StorageManager::load_theme(&self.store, &self.config.theme_key)?;
        Ok(stored.unwrap_or_else(|| Theme::from_system(prefers_dark)))
    }

    pub fn set_theme(&mut self, theme: Theme) -> Result<(), CoreError> {
        StorageManager::save_theme(&mut self.store, &self.config.theme_key, theme)
    }

    /// Flip between light and dark, persist, and return the new theme.
    pub fn toggle_theme(&mut self, prefers_dark: bool) -> Result<Theme, CoreError> {
        let next = self.theme(prefers_dark)?.toggled();
        self.set_theme(next)?;
        Ok(next)
    }

    // ── State & Persistence ─────────────────────────────────────────

    /// Read-only view of the current state.
    #[must_use]
    pub fn data(&self) -> &VendorData {
        &self.data
    }

    /// Owned point-in-time copy of the current state.
    #[must_use]
    pub fn snapshot(&self) -> VendorData {
        self.data.clone()
    }

    #[must_use]
    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Mutable access to the transport (e.g. to simulate another writer).
    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    /// Returns `true` if the in-memory state is ahead of storage because a
    /// write failed.
    #[must_use]
    pub fn has_unsaved_changes(&self) -> bool {
        self.dirty
    }

    /// Write the in-memory state again, e.g. after a failed write.
    pub fn flush(&mut self) -> Result<(), CoreError> {
        self.commit().map(|_| ())
    }

    /// Pretty-printed JSON of the current state (for export and debugging).
    pub fn to_json(&self) -> Result<String, CoreError> {
        Ok(serde_json::to_string_pretty(&self.data)?)
    }

    // ── Internal ────────────────────────────────────────────────────

    fn commit(&mut self) -> Result<&VendorData, CoreError> {
        match StorageManager::save(&mut self.store, &self.config.state_key, &self.data) {
            Ok(()) => {
                self.dirty = false;
                Ok(&self.data)
            }
            Err(e) => {
                self.dirty = true;
                warn!(error = %e, "vendor data not persisted, in-memory state is ahead of storage");
                Err(e)
            }
        }
    }

    fn build(data: VendorData, store: S, config: StoreConfig) -> Self {
        Self {
            data,
            store,
            config,
            inventory_service: InventoryService::new(),
            order_service: OrderService::new(),
            view_service: ViewService::new(),
            dirty: false,
        }
    }
}
