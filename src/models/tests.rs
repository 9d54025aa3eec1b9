#![allow(clippy::unwrap_used)]

use rust_decimal_macros::dec;

use super::*;

fn make_user() -> User {
    User {
        id: "u1".into(),
        name: "Alex Morgan".into(),
        email: "alex@cordulatech.com".into(),
        role: Role::User,
        avatar: None,
        password: None,
        preferred_currency: CurrencyCode::Eur,
        theme: None,
    }
}

// ── Enums ─────────────────────────────────────────────────────

#[test]
fn test_kind_parse() {
    assert_eq!(TransactionKind::parse("income"), Some(TransactionKind::Income));
    assert_eq!(TransactionKind::parse("EXPENSE"), Some(TransactionKind::Expense));
    assert_eq!(TransactionKind::parse("transfer"), None);
}

#[test]
fn test_role_parse_defaults_to_user() {
    assert_eq!(Role::parse("admin"), Role::Admin);
    assert_eq!(Role::parse("ADMIN"), Role::Admin);
    assert_eq!(Role::parse("user"), Role::User);
    assert_eq!(Role::parse("superuser"), Role::User);
}

#[test]
fn test_theme_defaults_to_dark() {
    assert_eq!(make_user().effective_theme(), Theme::Dark);
    assert_eq!(Theme::parse("light"), Theme::Light);
    assert_eq!(Theme::parse("anything"), Theme::Dark);
}

#[test]
fn test_currency_parse_is_lenient() {
    assert_eq!(CurrencyCode::parse("eur"), CurrencyCode::Eur);
    assert_eq!(CurrencyCode::parse("JPY"), CurrencyCode::Jpy);
    assert_eq!(CurrencyCode::parse("XYZ"), CurrencyCode::Usd);
    assert_eq!(CurrencyCode::parse(""), CurrencyCode::Usd);
}

// ── Formatting ────────────────────────────────────────────────

#[test]
fn test_format_amount_groups_thousands() {
    assert_eq!(
        format_amount(dec!(1234567.89), CurrencyCode::Usd),
        "$1,234,567.89"
    );
    assert_eq!(format_amount(dec!(0), CurrencyCode::Usd), "$0.00");
    assert_eq!(format_amount(dec!(999.9), CurrencyCode::Gbp), "£999.90");
}

#[test]
fn test_format_amount_uses_magnitude() {
    // Sign is display-side (the kind decides + or -), never part of the number.
    assert_eq!(format_amount(dec!(-42.5), CurrencyCode::Eur), "€42.50");
}

// ── Transactions ──────────────────────────────────────────────

#[test]
fn test_new_transaction_copies_owner_currency() {
    let user = make_user();
    let txn = Transaction::new(
        &user,
        dec!(12.50),
        TransactionKind::Expense,
        "Groceries".into(),
        "Weekly shop".into(),
    );
    assert_eq!(txn.user_id, "u1");
    assert_eq!(txn.currency, CurrencyCode::Eur);
    assert!(!txn.id.is_empty());
    assert!(!txn.date.is_empty());
    assert!(txn.is_expense());
    assert!(!txn.is_income());
}

#[test]
fn test_new_transactions_get_unique_ids() {
    let user = make_user();
    let a = Transaction::new(&user, dec!(1), TransactionKind::Income, "".into(), "a".into());
    let b = Transaction::new(&user, dec!(1), TransactionKind::Income, "".into(), "b".into());
    assert_ne!(a.id, b.id);
}

// ── Stored JSON shape ─────────────────────────────────────────

#[test]
fn test_transaction_json_field_names() {
    let user = make_user();
    let txn = Transaction::new(
        &user,
        dec!(5),
        TransactionKind::Income,
        "Salary".into(),
        "Pay".into(),
    );
    let json = serde_json::to_value(&txn).unwrap();
    assert_eq!(json["userId"], "u1");
    assert_eq!(json["type"], "income");
    assert_eq!(json["currency"], "EUR");
}

#[test]
fn test_user_json_roundtrip_without_password() {
    let user = make_user();
    let json = serde_json::to_string(&user).unwrap();
    // Absent optionals are omitted entirely, not serialized as null.
    assert!(!json.contains("password"));
    assert!(json.contains("\"preferredCurrency\":\"EUR\""));
    assert!(json.contains("\"role\":\"user\""));

    let back: User = serde_json::from_str(&json).unwrap();
    assert_eq!(back, user);
}

#[test]
fn test_budget_json_shape() {
    let budget = Budget {
        id: "b1".into(),
        user_id: "u1".into(),
        category: "Groceries".into(),
        limit: dec!(500),
        spent: dec!(0),
        currency: CurrencyCode::Usd,
    };
    let json = serde_json::to_value(&budget).unwrap();
    assert_eq!(json["userId"], "u1");
    assert!(json.get("limit").is_some());
    assert!(json.get("spent").is_some());
}
