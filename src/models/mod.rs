mod category;
mod expense;

pub use category::Category;
pub use expense::{is_storable_amount, Expense, AMOUNT_SCALE, DATE_FORMAT, MAX_AMOUNT};

#[cfg(test)]
mod tests;
