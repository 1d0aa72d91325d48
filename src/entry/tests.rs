#![allow(clippy::unwrap_used)]

use super::*;
use rust_decimal_macros::dec;

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 3, 15).unwrap()
}

fn draft(amount: &str, category: &str) -> ExpenseDraft {
    ExpenseDraft {
        amount: amount.into(),
        category: category.into(),
        ..Default::default()
    }
}

// ── parse_amount ──────────────────────────────────────────────

#[test]
fn test_parse_amount_valid() {
    assert_eq!(parse_amount("12.50").unwrap(), dec!(12.50));
    assert_eq!(parse_amount(" $1,200 ").unwrap(), dec!(1200));
    assert_eq!(parse_amount("0.01").unwrap(), dec!(0.01));
}

#[test]
fn test_parse_amount_rejects_non_positive() {
    for bad in ["0", "0.00", "-5", ""] {
        let err = parse_amount(bad).unwrap_err();
        assert_eq!(err.to_string(), "Amount must be greater than 0", "{bad}");
    }
}

#[test]
fn test_parse_amount_money_precision() {
    assert_eq!(parse_amount("1.500").unwrap(), dec!(1.5));
    for bad in ["0.0000001", "1.005", "0.001"] {
        let err = parse_amount(bad).unwrap_err();
        assert_eq!(err.to_string(), "Amount can have at most 2 decimal places", "{bad}");
    }
}

#[test]
fn test_parse_amount_upper_bound() {
    assert_eq!(parse_amount("1000000000").unwrap(), MAX_AMOUNT);
    for bad in ["1000000000.01", "50000000000000000000000000000", "79228162514264337593543950335"] {
        let err = parse_amount(bad).unwrap_err();
        assert_eq!(err.to_string(), "Amount must not exceed 1000000000", "{bad}");
    }
}

#[test]
fn test_parse_amount_rejects_garbage() {
    assert!(parse_amount("twelve").is_err());
    assert!(parse_amount("1.2.3").is_err());
}

// ── resolve_category ──────────────────────────────────────────

#[test]
fn test_resolve_category_by_id_and_name() {
    assert_eq!(resolve_category("3").unwrap().name, "Entertainment");
    assert_eq!(resolve_category("transport").unwrap().id, 2);
}

#[test]
fn test_resolve_category_unknown() {
    assert_eq!(
        resolve_category("Travel").unwrap_err().to_string(),
        "Unknown category: Travel"
    );
    assert!(resolve_category("9").is_err());
}

// ── into_expense ──────────────────────────────────────────────

#[test]
fn test_draft_defaults() {
    let (expense, category) = draft("50", "Food").into_expense(today()).unwrap();
    assert_eq!(category.id, 1);
    assert_eq!(expense.category_id, 1);
    assert_eq!(expense.amount, dec!(50));
    assert_eq!(expense.description, "Food");
    assert_eq!(expense.date, "15/03/2024");
    assert!(expense.id.is_none());
}

#[test]
fn test_draft_blank_description_uses_category_name() {
    let mut d = draft("5", "Health");
    d.description = Some("   ".into());
    let (expense, _) = d.into_expense(today()).unwrap();
    assert_eq!(expense.description, "Health");
}

#[test]
fn test_draft_explicit_fields() {
    let mut d = draft("4.20", "6");
    d.description = Some("Espresso".into());
    d.date = Some("1/2/2024".into());
    let (expense, category) = d.into_expense(today()).unwrap();
    assert_eq!(category.name, "Coffee/Drinks");
    assert_eq!(expense.description, "Espresso");
    // normalized to zero-padded form
    assert_eq!(expense.date, "01/02/2024");
}

#[test]
fn test_draft_bad_date() {
    let mut d = draft("10", "Food");
    d.date = Some("2024-02-01".into());
    let err = d.into_expense(today()).unwrap_err();
    assert!(err.to_string().contains("expected DD/MM/YYYY"));
}

#[test]
fn test_draft_amount_checked_before_category() {
    let err = draft("-1", "nope").into_expense(today()).unwrap_err();
    assert_eq!(err.to_string(), "Amount must be greater than 0");
}
