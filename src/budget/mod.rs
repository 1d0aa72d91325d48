use anyhow::Result;
use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::db::ExpenseStore;
use crate::display::format_amount;
use crate::models::Category;

/// Where a category stands against its monthly limit after an insert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct BudgetStatus {
    pub(crate) category: &'static Category,
    pub(crate) spent: Decimal,
}

impl BudgetStatus {
    pub(crate) fn limit(&self) -> Decimal {
        self.category.monthly_limit
    }

    /// Reaching the limit exactly is still within budget.
    pub(crate) fn is_over_limit(&self) -> bool {
        self.spent > self.limit()
    }

    pub(crate) fn remaining(&self) -> Decimal {
        (self.limit() - self.spent).max(Decimal::ZERO)
    }

    pub(crate) fn message(&self) -> String {
        if self.is_over_limit() {
            format!(
                "Over the {} limit: {} of {}",
                self.category.name,
                format_amount(self.spent),
                format_amount(self.limit()),
            )
        } else {
            "Expense saved".to_string()
        }
    }
}

/// Recompute `category`'s spending for the month containing `today`.
/// Advisory only: the expense is already stored when this runs.
pub(crate) fn check(
    store: &ExpenseStore,
    category: &'static Category,
    today: NaiveDate,
) -> Result<BudgetStatus> {
    let spent = store.monthly_total_for_category(category.id, today)?;
    let status = BudgetStatus { category, spent };
    if status.is_over_limit() {
        log::info!(
            "Category {} over limit: {} > {}",
            category.name,
            spent,
            category.monthly_limit
        );
    }
    Ok(status)
}
