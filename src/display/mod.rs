use rust_decimal::Decimal;

use crate::models::{Category, Expense};

const DESCRIPTION_WIDTH: usize = 24;
const CATEGORY_WIDTH: usize = 14;

/// Format a decimal amount with thousand separators and 2 decimal places.
/// e.g. `1234567.89` → `"$1,234,567.89"`
pub(crate) fn format_amount(val: Decimal) -> String {
    let abs = val.abs();
    let formatted = format!("{abs:.2}");
    let mut parts = formatted.split('.');
    let int_part = parts.next().unwrap_or("0");
    let dec_part = parts.next().unwrap_or("00");

    let with_commas: String = int_part
        .as_bytes()
        .rchunks(3)
        .rev()
        .map(|chunk| std::str::from_utf8(chunk).unwrap_or(""))
        .collect::<Vec<_>>()
        .join(",");

    if val < Decimal::ZERO {
        format!("-${with_commas}.{dec_part}")
    } else {
        format!("${with_commas}.{dec_part}")
    }
}

/// Truncate a string to `max` visible characters, appending "…" if truncated.
/// Safe for multi-byte UTF-8 characters.
pub(crate) fn truncate(s: &str, max: usize) -> String {
    if max == 0 {
        return String::new();
    }
    if s.chars().count() <= max {
        return s.to_string();
    }
    let truncated: String = s.chars().take(max.saturating_sub(1)).collect();
    format!("{truncated}…")
}

fn expense_row(id: &str, date: &str, category: &str, description: &str, amount: &str) -> String {
    format!(
        "{id:<5} {date:<10}  {category:<cw$} {description:<dw$} {amount:>14}",
        cw = CATEGORY_WIDTH,
        dw = DESCRIPTION_WIDTH,
    )
    .trim_end()
    .to_string()
}

/// Fixed-width listing of expenses in the order given.
pub(crate) fn expense_table(expenses: &[Expense]) -> String {
    let header = expense_row("ID", "Date", "Category", "Description", "Amount");
    let mut lines = vec![header, "─".repeat(72)];
    for e in expenses {
        let id = e.id.map(|id| id.to_string()).unwrap_or_default();
        let category = e.category().map(|c| c.name).unwrap_or("?");
        lines.push(expense_row(
            &id,
            &e.date,
            &truncate(category, CATEGORY_WIDTH),
            &truncate(&e.description, DESCRIPTION_WIDTH),
            &format_amount(e.amount),
        ));
    }
    lines.join("\n")
}

/// Categories with their limit and what has been spent against it this month.
pub(crate) fn category_table(rows: &[(&Category, Decimal)]) -> String {
    let row = |id: &str, name: &str, limit: &str, spent: &str, color: &str, icon: &str| {
        format!(
            "{id:<4} {name:<cw$} {limit:>12} {spent:>12}  {color:<8} {icon}",
            cw = CATEGORY_WIDTH,
        )
    };
    let mut lines = vec![
        row("ID", "Name", "Limit", "Spent", "Color", "Icon"),
        "─".repeat(72),
    ];
    for (c, spent) in rows {
        lines.push(row(
            &c.id.to_string(),
            c.name,
            &format_amount(c.monthly_limit),
            &format_amount(*spent),
            c.color,
            c.icon,
        ));
    }
    lines.join("\n")
}
