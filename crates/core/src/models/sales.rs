use serde::{Deserialize, Serialize};

/// One line of the sales history. Immutable once appended.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaleRecord {
    pub product_id: String,
    pub name: String,
    /// Units sold (always > 0)
    pub quantity: u64,
    /// Unit price at the time of sale
    pub price: f64,
    /// `quantity × price`, fixed at creation
    pub total: f64,
}

impl SaleRecord {
    /// Build a record with `total = quantity × price`. The total is not
    /// checked here; callers that persist it must reject non-finite values.
    pub fn new(product_id: impl Into<String>, name: impl Into<String>, quantity: u64, price: f64) -> Self {
        Self {
            product_id: product_id.into(),
            name: name.into(),
            quantity,
            price,
            total: quantity as f64 * price,
        }
    }
}

/// Running sales totals for the day plus the itemized history.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalesSummary {
    /// Accumulated revenue
    pub today: f64,
    /// Accumulated unit count
    pub products_sold: u64,
    /// Append-only, insertion-ordered
    pub sales_history: Vec<SaleRecord>,
}

impl SalesSummary {
    /// Append a sale and roll it into the totals.
    pub fn record(&mut self, sale: SaleRecord) {
        self.today += sale.total;
        self.products_sold = self.products_sold.saturating_add(sale.quantity);
        self.sales_history.push(sale);
    }
}
