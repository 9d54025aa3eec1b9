use rust_decimal::Decimal;

use crate::models::{Transaction, TransactionKind, User};

/// Aggregates over a transaction list. Sums are naive: mixed-currency
/// amounts are added as plain numbers, never converted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Totals {
    pub(crate) income: Decimal,
    pub(crate) expenses: Decimal,
    pub(crate) balance: Decimal,
}

pub(crate) fn totals(transactions: &[Transaction]) -> Totals {
    let income: Decimal = transactions
        .iter()
        .filter(|t| t.is_income())
        .map(|t| t.amount)
        .sum();
    let expenses: Decimal = transactions
        .iter()
        .filter(|t| t.is_expense())
        .map(|t| t.amount)
        .sum();
    Totals {
        income,
        expenses,
        balance: income - expenses,
    }
}

/// Leading slice of the stored newest-first order, not a date sort.
pub(crate) fn recent(transactions: &[Transaction], n: usize) -> &[Transaction] {
    &transactions[..transactions.len().min(n)]
}

/// Ledger view filter: optional kind plus a case-insensitive substring
/// match on description or category.
#[derive(Debug, Clone, Default)]
pub(crate) struct LedgerFilter {
    pub(crate) kind: Option<TransactionKind>,
    pub(crate) search: String,
}

impl LedgerFilter {
    pub(crate) fn matches(&self, txn: &Transaction) -> bool {
        let matches_kind = self.kind.map_or(true, |k| txn.kind == k);
        let needle = self.search.to_lowercase();
        let matches_search = needle.is_empty()
            || txn.description.to_lowercase().contains(&needle)
            || txn.category.to_lowercase().contains(&needle);
        matches_kind && matches_search
    }
}

pub(crate) fn filter_ledger<'a>(
    transactions: &'a [Transaction],
    filter: &LedgerFilter,
) -> Vec<&'a Transaction> {
    transactions.iter().filter(|t| filter.matches(t)).collect()
}

/// User directory search: case-insensitive match on name or email.
pub(crate) fn filter_users<'a>(users: &'a [User], query: &str) -> Vec<&'a User> {
    let needle = query.to_lowercase();
    users
        .iter()
        .filter(|u| {
            u.name.to_lowercase().contains(&needle) || u.email.to_lowercase().contains(&needle)
        })
        .collect()
}
