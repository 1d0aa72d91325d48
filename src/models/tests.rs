#![allow(clippy::unwrap_used)]

use rust_decimal_macros::dec;

use super::*;

// ── Category ──────────────────────────────────────────────────

#[test]
fn test_all_categories_fixed_order() {
    let all = Category::all();
    assert_eq!(all.len(), 8);
    let names: Vec<&str> = all.iter().map(|c| c.name).collect();
    assert_eq!(
        names,
        vec![
            "Food",
            "Transport",
            "Entertainment",
            "Housing",
            "Health",
            "Coffee/Drinks",
            "Shopping",
            "Other",
        ]
    );
}

#[test]
fn test_category_ids_unique() {
    let mut ids: Vec<i64> = Category::all().iter().map(|c| c.id).collect();
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), Category::all().len());
}

#[test]
fn test_category_limits() {
    assert_eq!(Category::by_id(1).unwrap().monthly_limit, dec!(800));
    assert_eq!(Category::by_id(4).unwrap().monthly_limit, dec!(1500.00));
    assert_eq!(Category::by_id(6).unwrap().monthly_limit, dec!(150));
}

#[test]
fn test_category_by_id() {
    let food = Category::by_id(1).unwrap();
    assert_eq!(food.name, "Food");
    assert_eq!(food.color, "#4CAF50");
    assert!(Category::by_id(0).is_none());
    assert!(Category::by_id(9).is_none());
    assert!(Category::by_id(-1).is_none());
}

#[test]
fn test_category_by_name_case_insensitive() {
    assert_eq!(Category::by_name("Food").unwrap().id, 1);
    assert_eq!(Category::by_name("food").unwrap().id, 1);
    assert_eq!(Category::by_name("  HOUSING ").unwrap().id, 4);
    assert_eq!(Category::by_name("coffee/drinks").unwrap().id, 6);
}

#[test]
fn test_category_by_name_unknown() {
    assert!(Category::by_name("Groceries").is_none());
    assert!(Category::by_name("").is_none());
}

#[test]
fn test_category_display() {
    assert_eq!(format!("{}", Category::by_id(2).unwrap()), "Transport");
}

// ── Expense ───────────────────────────────────────────────────

#[test]
fn test_expense_new_defaults() {
    let expense = Expense::new(dec!(12.50), "Lunch".into(), "05/03/2024".into(), 1);
    assert!(expense.id.is_none());
    assert_eq!(expense.amount, dec!(12.50));
    assert!(expense.timestamp > 0);
}

#[test]
fn test_expense_dangling_category() {
    let expense = Expense::new(dec!(1), String::new(), "01/01/2024".into(), 42);
    assert!(expense.category().is_none());
    let expense = Expense::new(dec!(1), String::new(), "01/01/2024".into(), 3);
    assert_eq!(expense.category().unwrap().name, "Entertainment");
}
