use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::currency::CurrencyCode;
use super::user::User;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Income,
    Expense,
}

impl TransactionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Income => "income",
            Self::Expense => "expense",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "income" => Some(Self::Income),
            "expense" => Some(Self::Expense),
            _ => None,
        }
    }
}

impl std::fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single ledger entry. `amount` is a non-negative magnitude; the sign is
/// carried by `kind`. `date` and `currency` are fixed at creation and never
/// re-derived, even if the owner's preferences change later.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: String,
    pub user_id: String,
    pub amount: Decimal,
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    pub category: String,
    pub description: String,
    pub date: String,
    pub currency: CurrencyCode,
}

impl Transaction {
    pub fn new(
        owner: &User,
        amount: Decimal,
        kind: TransactionKind,
        category: String,
        description: String,
    ) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            user_id: owner.id.clone(),
            amount,
            kind,
            category,
            description,
            date: chrono::Utc::now().to_rfc3339(),
            currency: owner.preferred_currency,
        }
    }

    pub fn is_income(&self) -> bool {
        self.kind == TransactionKind::Income
    }

    pub fn is_expense(&self) -> bool {
        self.kind == TransactionKind::Expense
    }
}

/// Starter categories offered when entering a transaction. The field itself
/// is free-form; anything typed in is accepted as-is.
pub const SUGGESTED_CATEGORIES: &[&str] = &[
    "Bills",
    "Education",
    "Entertainment",
    "Food & Dining",
    "Freelance",
    "Gifts",
    "Groceries",
    "Health",
    "Housing",
    "Investment",
    "Other",
    "Salary",
    "Shopping",
    "Transport",
    "Travel",
];
