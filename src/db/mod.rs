mod schema;

use anyhow::{Context, Result};
use chrono::{Datelike, NaiveDate};
use rusqlite::{params, Connection, Row};
use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal::Decimal;
use std::path::Path;

use crate::models::*;

const EXPENSE_COLUMNS: &str = "id, amount, description, date, category_id, timestamp";

pub(crate) struct ExpenseStore {
    conn: Connection,
}

impl ExpenseStore {
    pub(crate) fn open(path: &Path) -> Result<Self> {
        let conn = Connection::open(path)
            .with_context(|| format!("Failed to open database: {}", path.display()))?;
        conn.execute_batch("PRAGMA journal_mode=WAL;")
            .context("Failed to set database pragmas")?;
        let mut store = Self { conn };
        store.migrate().context("Database migration failed")?;
        log::debug!("Opened expense store at {}", path.display());
        Ok(store)
    }

    #[cfg(test)]
    pub(crate) fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let mut store = Self { conn };
        store.migrate()?;
        Ok(store)
    }

    fn migrate(&mut self) -> Result<()> {
        let has_version_table: bool = self.conn.query_row(
            "SELECT EXISTS(SELECT 1 FROM sqlite_master WHERE type='table' AND name='schema_version')",
            [],
            |row| row.get(0),
        )?;

        if !has_version_table {
            // Fresh database - apply full schema
            self.conn.execute_batch(schema::SCHEMA_V1)?;
            self.conn.execute(
                "INSERT INTO schema_version (version) VALUES (?1)",
                params![schema::CURRENT_VERSION],
            )?;
            return Ok(());
        }

        let current: i32 = self
            .conn
            .query_row("SELECT version FROM schema_version LIMIT 1", [], |row| {
                row.get(0)
            })
            .unwrap_or(0);

        for &(from_version, sql) in schema::MIGRATIONS {
            if current <= from_version {
                log::debug!("Applying migration from schema version {from_version}");
                self.conn.execute_batch(sql)?;
            }
        }

        if current < schema::CURRENT_VERSION {
            self.conn.execute(
                "UPDATE schema_version SET version = ?1",
                params![schema::CURRENT_VERSION],
            )?;
        }

        Ok(())
    }

    // ── Expenses ──────────────────────────────────────────────

    /// Persist an expense and return its new id. Positivity is not checked here,
    /// but amounts the REAL column cannot hold exactly are refused.
    pub(crate) fn insert(&self, expense: &Expense) -> Result<i64> {
        if !is_storable_amount(expense.amount) {
            anyhow::bail!(
                "Amount {} cannot be stored (max {MAX_AMOUNT}, {AMOUNT_SCALE} decimal places)",
                expense.amount
            );
        }
        let amount = expense
            .amount
            .to_f64()
            .ok_or_else(|| anyhow::anyhow!("Amount out of range: {}", expense.amount))?;
        self.conn
            .execute(
                "INSERT INTO expenses (amount, description, date, category_id, timestamp)
                 VALUES (?1, ?2, ?3, ?4, ?5)",
                params![
                    amount,
                    expense.description,
                    expense.date,
                    expense.category_id,
                    expense.timestamp,
                ],
            )
            .context("Failed to insert expense")?;
        let id = self.conn.last_insert_rowid();
        log::debug!(
            "Inserted expense {id} ({} in category {})",
            expense.amount,
            expense.category_id
        );
        Ok(id)
    }

    /// All expenses, most recent first.
    pub(crate) fn list_all(&self) -> Result<Vec<Expense>> {
        let mut stmt = self.conn.prepare(&format!(
            "SELECT {EXPENSE_COLUMNS} FROM expenses ORDER BY timestamp DESC, id DESC"
        ))?;
        let rows = stmt.query_map([], expense_from_row)?;
        Ok(rows.collect::<std::result::Result<Vec<_>, _>>()?)
    }

    /// Returns the number of rows removed (0 or 1).
    pub(crate) fn delete_by_id(&self, id: i64) -> Result<usize> {
        let removed = self
            .conn
            .execute("DELETE FROM expenses WHERE id = ?1", params![id])?;
        log::debug!("Deleted expense {id}: {removed} row(s)");
        Ok(removed)
    }

    pub(crate) fn count(&self) -> Result<i64> {
        Ok(self
            .conn
            .query_row("SELECT COUNT(*) FROM expenses", [], |row| row.get(0))?)
    }

    pub(crate) fn total_all(&self) -> Result<Decimal> {
        let mut stmt = self.conn.prepare("SELECT amount FROM expenses")?;
        let amounts = stmt.query_map([], |row| decimal_from_real(row, 0))?;
        let mut total = Decimal::ZERO;
        for amount in amounts {
            total = checked_sum(total, amount?)?;
        }
        Ok(total)
    }

    /// Sum of a category's expenses dated in the same month and year as `today`.
    /// Rows whose date does not parse as DD/MM/YYYY are skipped.
    pub(crate) fn monthly_total_for_category(
        &self,
        category_id: i64,
        today: NaiveDate,
    ) -> Result<Decimal> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, amount, date FROM expenses WHERE category_id = ?1")?;
        let rows = stmt.query_map(params![category_id], |row| {
            let id: i64 = row.get(0)?;
            let date: String = row.get(2)?;
            Ok((id, decimal_from_real(row, 1)?, date))
        })?;

        let mut total = Decimal::ZERO;
        for row in rows {
            let (id, amount, date) = row?;
            match NaiveDate::parse_from_str(date.trim(), DATE_FORMAT) {
                Ok(d) if d.year() == today.year() && d.month() == today.month() => {
                    total = checked_sum(total, amount)?;
                }
                Ok(_) => {}
                Err(e) => {
                    log::warn!("Skipping expense {id} with unparsable date {date:?}: {e}");
                }
            }
        }
        Ok(total)
    }

    pub(crate) fn monthly_total_for_category_this_month(&self, category_id: i64) -> Result<Decimal> {
        self.monthly_total_for_category(category_id, chrono::Local::now().date_naive())
    }

    // ── Export ────────────────────────────────────────────────

    /// Write every expense, most recent first, to a CSV file. Returns the row count.
    pub(crate) fn export_to_csv(&self, path: &Path) -> Result<usize> {
        let expenses = self.list_all()?;
        let mut wtr = csv::Writer::from_path(path)
            .with_context(|| format!("Failed to create {}", path.display()))?;
        wtr.write_record(["id", "date", "category", "description", "amount"])?;
        for e in &expenses {
            let category = e.category().map(|c| c.name).unwrap_or("");
            wtr.write_record([
                e.id.unwrap_or(0).to_string(),
                e.date.clone(),
                category.to_string(),
                e.description.clone(),
                format!("{:.2}", e.amount),
            ])?;
        }
        wtr.flush()
            .with_context(|| format!("Failed to write {}", path.display()))?;
        Ok(expenses.len())
    }
}

fn expense_from_row(row: &Row<'_>) -> rusqlite::Result<Expense> {
    let description: Option<String> = row.get(2)?;
    Ok(Expense {
        id: Some(row.get(0)?),
        amount: decimal_from_real(row, 1)?,
        description: description.unwrap_or_default(),
        date: row.get(3)?,
        category_id: row.get(4)?,
        timestamp: row.get(5)?,
    })
}

/// Read a REAL amount column, rounded to money precision to drop binary noise.
fn decimal_from_real(row: &Row<'_>, idx: usize) -> rusqlite::Result<Decimal> {
    let value: f64 = row.get(idx)?;
    Decimal::from_f64(value)
        .filter(|d| d.abs() <= MAX_AMOUNT)
        .map(|d| d.round_dp(AMOUNT_SCALE).normalize())
        .ok_or_else(|| {
            rusqlite::Error::FromSqlConversionFailure(
                idx,
                rusqlite::types::Type::Real,
                format!("amount {value} is out of range").into(),
            )
        })
}

fn checked_sum(total: Decimal, amount: Decimal) -> Result<Decimal> {
    total
        .checked_add(amount)
        .ok_or_else(|| anyhow::anyhow!("Expense total overflowed adding {amount}"))
}
