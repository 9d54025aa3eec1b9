mod budget;
mod currency;
mod transaction;
mod user;

pub use budget::Budget;
pub use currency::{format_amount, CurrencyCode};
pub use transaction::{Transaction, TransactionKind, SUGGESTED_CATEGORIES};
pub use user::{Role, Theme, User};

#[cfg(test)]
mod tests;
