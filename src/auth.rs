use uuid::Uuid;

use crate::db::Database;
use crate::models::{CurrencyCode, Role, User};

/// Exact email + password match over the stored users. A bad pair yields
/// `None`; this is the one failure surfaced to a person rather than
/// degraded to a default.
pub(crate) fn authenticate(db: &Database, email: &str, password: &str) -> Option<User> {
    db.users()
        .into_iter()
        .find(|u| u.email == email && u.password.as_deref() == Some(password))
}

/// Build a fresh user record for registration: generated id, `user` role,
/// seeded avatar, USD display currency.
pub(crate) fn new_registration(name: &str, email: &str, password: &str) -> User {
    User {
        id: Uuid::new_v4().to_string(),
        name: name.to_string(),
        email: email.to_string(),
        role: Role::User,
        avatar: Some(format!("https://picsum.photos/seed/{name}/200")),
        password: Some(password.to_string()),
        preferred_currency: CurrencyCode::Usd,
        theme: None,
    }
}
