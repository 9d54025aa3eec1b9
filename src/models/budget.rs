use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::currency::CurrencyCode;

/// Per-user spending limit for a category. Declared for parity with the
/// stored data model, but no flow creates or mutates one yet; the store
/// always reports an empty set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Budget {
    pub id: String,
    pub user_id: String,
    pub category: String,
    pub limit: Decimal,
    pub spent: Decimal,
    pub currency: CurrencyCode,
}
