use rust_decimal::Decimal;

use super::Category;

/// Storage format of `Expense::date`.
pub const DATE_FORMAT: &str = "%d/%m/%Y";

/// Amounts carry at most this many decimal places.
pub const AMOUNT_SCALE: u32 = 2;

/// Largest storable amount. Keeps every value exact through a REAL column
/// and any realistic number of rows summable without overflow.
pub const MAX_AMOUNT: Decimal = Decimal::from_parts(1_000_000_000, 0, 0, false, 0);

/// Whether `amount` survives a write and read through the store unchanged.
pub fn is_storable_amount(amount: Decimal) -> bool {
    amount.abs() <= MAX_AMOUNT && amount.normalize().scale() <= AMOUNT_SCALE
}

#[derive(Debug, Clone)]
pub struct Expense {
    pub id: Option<i64>,
    pub amount: Decimal,
    pub description: String,
    /// Format: "DD/MM/YYYY"
    pub date: String,
    pub category_id: i64,
    /// Insertion time in Unix milliseconds.
    pub timestamp: i64,
}

impl Expense {
    pub fn new(amount: Decimal, description: String, date: String, category_id: i64) -> Self {
        Self {
            id: None,
            amount,
            description,
            date,
            category_id,
            timestamp: chrono::Utc::now().timestamp_millis(),
        }
    }

    pub fn category(&self) -> Option<&'static Category> {
        Category::by_id(self.category_id)
    }
}
