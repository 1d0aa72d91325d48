use anyhow::Result;
use chrono::NaiveDate;
use std::path::Path;

use crate::budget::{self, BudgetStatus};
use crate::db::ExpenseStore;
use crate::display::{category_table, expense_table, format_amount};
use crate::entry::ExpenseDraft;
use crate::models::Category;

/// Flags that take a value; their values are not positionals.
const VALUE_FLAGS: &[&str] = &["--desc", "-d", "--date"];

pub(crate) fn as_cli(args: &[String], store: &ExpenseStore) -> Result<()> {
    let Some(command) = args.get(1) else {
        return cli_list(store);
    };
    match command.as_str() {
        "list" | "ls" => cli_list(store),
        "add" | "a" => {
            let today = chrono::Local::now().date_naive();
            let (id, status) = cli_add(&args[2..], store, today)?;
            println!(
                "Saved expense #{id} in {} ({} spent this month)",
                status.category.name,
                format_amount(status.spent)
            );
            if status.is_over_limit() {
                println!("Warning: {}", status.message());
            } else {
                println!(
                    "{} ({} left of {})",
                    status.message(),
                    format_amount(status.remaining()),
                    format_amount(status.limit())
                );
            }
            Ok(())
        }
        "delete" | "rm" => cli_delete(&args[2..], store),
        "total" => {
            println!("Total: {}", format_amount(store.total_all()?));
            Ok(())
        }
        "categories" => cli_categories(store),
        "export" => cli_export(&args[2..], store),
        "--help" | "-h" | "help" => {
            print_usage();
            Ok(())
        }
        "--version" | "-V" | "version" => {
            println!("spendcap {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        other => {
            print_usage();
            anyhow::bail!("Unknown command: {other}");
        }
    }
}

fn print_usage() {
    println!("spendcap: local expense tracker with monthly category limits");
    println!();
    println!("Usage: spendcap [command]");
    println!();
    println!("Commands:");
    println!("  (none), list                  List expenses, most recent first");
    println!("  add <amount> <category>       Record an expense (category id or name)");
    println!("    --desc, -d <text>           Description (default: category name)");
    println!("    --date <DD/MM/YYYY>         Date of the expense (default: today)");
    println!("  delete <id>                   Delete an expense");
    println!("  total                         Print the running total");
    println!("  categories                    List categories, limits and spending this month");
    println!("  export [path]                 Export all expenses to CSV");
    println!("  --help, -h                    Show this help");
    println!("  --version, -V                 Show version");
    println!();
    println!("Environment:");
    println!("  SPENDCAP_DB                   Database path override");
    println!("  RUST_LOG                      Log level (e.g. debug)");
}

fn flag_value<'a>(args: &'a [String], names: &[&str]) -> Option<&'a str> {
    args.windows(2)
        .find(|w| names.contains(&w[0].as_str()))
        .map(|w| w[1].as_str())
}

fn positionals(args: &[String]) -> Vec<&str> {
    let mut out = Vec::new();
    let mut skip_next = false;
    for arg in args {
        if skip_next {
            skip_next = false;
        } else if VALUE_FLAGS.contains(&arg.as_str()) {
            skip_next = true;
        } else {
            out.push(arg.as_str());
        }
    }
    out
}

fn cli_list(store: &ExpenseStore) -> Result<()> {
    let expenses = store.list_all()?;
    if expenses.is_empty() {
        println!("No expenses yet. Add one with: spendcap add <amount> <category>");
        return Ok(());
    }
    println!("{}", expense_table(&expenses));
    println!();
    println!(
        "{} expense(s), total {}",
        store.count()?,
        format_amount(store.total_all()?)
    );
    Ok(())
}

/// Validate, store, then run the budget check. A failed insert returns early
/// and no budget check runs.
pub(crate) fn cli_add(
    args: &[String],
    store: &ExpenseStore,
    today: NaiveDate,
) -> Result<(i64, BudgetStatus)> {
    let pos = positionals(args);
    let (Some(amount), Some(category)) = (pos.first(), pos.get(1)) else {
        anyhow::bail!("Usage: spendcap add <amount> <category> [--desc <text>] [--date DD/MM/YYYY]");
    };

    let draft = ExpenseDraft {
        amount: amount.to_string(),
        category: category.to_string(),
        description: flag_value(args, &["--desc", "-d"]).map(str::to_string),
        date: flag_value(args, &["--date"]).map(str::to_string),
    };
    let (expense, category) = draft.into_expense(today)?;

    let id = store.insert(&expense)?;
    let status = budget::check(store, category, today)?;
    Ok((id, status))
}

fn cli_categories(store: &ExpenseStore) -> Result<()> {
    let mut rows = Vec::with_capacity(Category::all().len());
    for category in Category::all() {
        rows.push((
            category,
            store.monthly_total_for_category_this_month(category.id)?,
        ));
    }
    println!("{}", category_table(&rows));
    Ok(())
}

fn cli_delete(args: &[String], store: &ExpenseStore) -> Result<()> {
    let Some(raw) = args.first() else {
        anyhow::bail!("Usage: spendcap delete <id>");
    };
    let id: i64 = raw
        .parse()
        .map_err(|_| anyhow::anyhow!("Invalid expense id: {raw}"))?;

    if store.delete_by_id(id)? == 0 {
        println!("No expense with id {id}");
    } else {
        println!("Deleted expense #{id}");
        println!("Total: {}", format_amount(store.total_all()?));
    }
    Ok(())
}

fn cli_export(args: &[String], store: &ExpenseStore) -> Result<()> {
    let output_path = args
        .first()
        .filter(|a| !a.starts_with('-'))
        .map(|a| shellexpand(a))
        .unwrap_or_else(|| {
            let home = std::env::var("HOME").unwrap_or_else(|_| ".".into());
            let stamp = chrono::Local::now().format("%Y-%m-%d");
            format!("{home}/spendcap-export-{stamp}.csv")
        });

    let count = store.export_to_csv(Path::new(&output_path))?;
    println!("Exported {count} expense(s) to {output_path}");
    Ok(())
}

pub(crate) fn shellexpand(path: &str) -> String {
    if let Some(rest) = path.strip_prefix("~/") {
        let home = std::env::var("HOME").unwrap_or_else(|_| ".".into());
        format!("{home}/{rest}")
    } else {
        path.to_string()
    }
}
