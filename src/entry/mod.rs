use anyhow::{bail, Result};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::str::FromStr;

use crate::models::{Category, Expense, AMOUNT_SCALE, DATE_FORMAT, MAX_AMOUNT};

/// Raw user input for a new expense, before validation.
#[derive(Debug, Clone, Default)]
pub(crate) struct ExpenseDraft {
    pub(crate) amount: String,
    /// Category id or name.
    pub(crate) category: String,
    pub(crate) description: Option<String>,
    /// "DD/MM/YYYY"; today when absent.
    pub(crate) date: Option<String>,
}

impl ExpenseDraft {
    /// Validate the draft and build the expense to store.
    pub(crate) fn into_expense(self, today: NaiveDate) -> Result<(Expense, &'static Category)> {
        let amount = parse_amount(&self.amount)?;
        let category = resolve_category(&self.category)?;

        let description = match self.description {
            Some(d) if !d.trim().is_empty() => d.trim().to_string(),
            _ => category.name.to_string(),
        };

        let date = match self.date {
            Some(d) => parse_date(&d)?,
            None => today,
        };

        let expense = Expense::new(
            amount,
            description,
            date.format(DATE_FORMAT).to_string(),
            category.id,
        );
        Ok((expense, category))
    }
}

pub(crate) fn parse_amount(s: &str) -> Result<Decimal> {
    let cleaned = s.trim().trim_start_matches('$').replace(',', "");
    let amount = match Decimal::from_str(&cleaned) {
        Ok(amount) if amount > Decimal::ZERO => amount.normalize(),
        _ => bail!("Amount must be greater than 0"),
    };
    if amount.scale() > AMOUNT_SCALE {
        bail!("Amount can have at most {AMOUNT_SCALE} decimal places");
    }
    if amount > MAX_AMOUNT {
        bail!("Amount must not exceed {MAX_AMOUNT}");
    }
    Ok(amount)
}

pub(crate) fn parse_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), DATE_FORMAT)
        .map_err(|_| anyhow::anyhow!("Invalid date '{s}': expected DD/MM/YYYY"))
}

/// Look a category up by numeric id, then by name.
pub(crate) fn resolve_category(s: &str) -> Result<&'static Category> {
    let found = match s.trim().parse::<i64>() {
        Ok(id) => Category::by_id(id),
        Err(_) => Category::by_name(s),
    };
    found.ok_or_else(|| anyhow::anyhow!("Unknown category: {s}"))
}

#[cfg(test)]
mod tests;
