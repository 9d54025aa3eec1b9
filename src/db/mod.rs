mod backend;

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::path::Path;

use crate::models::{CurrencyCode, Role, Transaction, User};
use backend::{KvBackend, SqliteBackend};

const USERS_KEY: &str = "users";
const TRANSACTIONS_KEY: &str = "transactions";
const SESSION_KEY: &str = "current-session-user";

/// Synchronous persistence façade over three named slots: the user
/// collection, the transaction collection, and the single session pointer.
/// Every operation is a whole-slot read-modify-write; there are no
/// atomicity guarantees across slots.
pub(crate) struct Database {
    backend: Box<dyn KvBackend>,
}

impl Database {
    pub(crate) fn open(path: &Path) -> Result<Self> {
        let mut db = Self {
            backend: Box::new(SqliteBackend::open(path)?),
        };
        db.init()?;
        Ok(db)
    }

    #[cfg(test)]
    pub(crate) fn open_in_memory() -> Result<Self> {
        let mut db = Self {
            backend: Box::new(SqliteBackend::open_in_memory()?),
        };
        db.init()?;
        Ok(db)
    }

    /// Seed the user and transaction slots when absent. Safe to call on
    /// every start; existing slots are never overwritten.
    fn init(&mut self) -> Result<()> {
        if self.backend.get(USERS_KEY)?.is_none() {
            self.write_slot(USERS_KEY, &vec![demo_user()])?;
        }
        if self.backend.get(TRANSACTIONS_KEY)?.is_none() {
            self.write_slot(TRANSACTIONS_KEY, &Vec::<Transaction>::new())?;
        }
        Ok(())
    }

    // Read paths degrade to the default on any failure. A missing or
    // unparsable slot is an accepted-loss scenario, not an error.
    fn read_slot<T: DeserializeOwned + Default>(&self, key: &str) -> T {
        self.backend
            .get(key)
            .ok()
            .flatten()
            .and_then(|raw| serde_json::from_str(&raw).ok())
            .unwrap_or_default()
    }

    fn write_slot<T: Serialize>(&mut self, key: &str, value: &T) -> Result<()> {
        let raw = serde_json::to_string(value)
            .with_context(|| format!("Failed to serialize slot '{key}'"))?;
        self.backend.put(key, &raw)
    }

    // ── Users ─────────────────────────────────────────────────

    pub(crate) fn users(&self) -> Vec<User> {
        self.read_slot(USERS_KEY)
    }

    /// Appends unconditionally. Neither id nor email uniqueness is checked;
    /// duplicate emails are accepted silently.
    pub(crate) fn register_user(&mut self, user: &User) -> Result<()> {
        let mut users = self.users();
        users.push(user.clone());
        self.write_slot(USERS_KEY, &users)
    }

    /// Replaces the record with a matching id; no-op when absent. When the
    /// edited user is the session user, the session slot is re-saved so
    /// login state stays consistent with profile edits.
    pub(crate) fn update_user(&mut self, user: &User) -> Result<()> {
        let mut users = self.users();
        let Some(slot) = users.iter_mut().find(|u| u.id == user.id) else {
            return Ok(());
        };
        *slot = user.clone();
        self.write_slot(USERS_KEY, &users)?;
        if self.current_user().is_some_and(|cur| cur.id == user.id) {
            self.set_current_user(Some(user))?;
        }
        Ok(())
    }

    /// Removes the matching record and returns the resulting list. The
    /// user's transactions are left in place; there is no cascade.
    pub(crate) fn delete_user(&mut self, id: &str) -> Result<Vec<User>> {
        let mut users = self.users();
        users.retain(|u| u.id != id);
        self.write_slot(USERS_KEY, &users)?;
        Ok(users)
    }

    // ── Transactions ──────────────────────────────────────────

    pub(crate) fn transactions_for_user(&self, user_id: &str) -> Vec<Transaction> {
        let all: Vec<Transaction> = self.read_slot(TRANSACTIONS_KEY);
        all.into_iter().filter(|t| t.user_id == user_id).collect()
    }

    /// Prepends. Newest-first is the persisted order, not a display-time
    /// sort; recent-activity views rely on it.
    pub(crate) fn add_transaction(&mut self, txn: &Transaction) -> Result<()> {
        let mut all: Vec<Transaction> = self.read_slot(TRANSACTIONS_KEY);
        all.insert(0, txn.clone());
        self.write_slot(TRANSACTIONS_KEY, &all)
    }

    /// Replaces by id without reordering; no-op when absent.
    pub(crate) fn update_transaction(&mut self, txn: &Transaction) -> Result<()> {
        let mut all: Vec<Transaction> = self.read_slot(TRANSACTIONS_KEY);
        let Some(slot) = all.iter_mut().find(|t| t.id == txn.id) else {
            return Ok(());
        };
        *slot = txn.clone();
        self.write_slot(TRANSACTIONS_KEY, &all)
    }

    pub(crate) fn delete_transaction(&mut self, id: &str) -> Result<()> {
        let mut all: Vec<Transaction> = self.read_slot(TRANSACTIONS_KEY);
        all.retain(|t| t.id != id);
        self.write_slot(TRANSACTIONS_KEY, &all)
    }

    // ── Session ───────────────────────────────────────────────

    pub(crate) fn current_user(&self) -> Option<User> {
        self.backend
            .get(SESSION_KEY)
            .ok()
            .flatten()
            .and_then(|raw| serde_json::from_str(&raw).ok())
    }

    pub(crate) fn set_current_user(&mut self, user: Option<&User>) -> Result<()> {
        match user {
            Some(u) => self.write_slot(SESSION_KEY, u),
            None => self.backend.delete(SESSION_KEY),
        }
    }

    #[cfg(test)]
    pub(crate) fn put_raw(&mut self, key: &str, value: &str) -> Result<()> {
        self.backend.put(key, value)
    }
}

fn demo_user() -> User {
    User {
        id: "u1".to_string(),
        name: "Alex Morgan".to_string(),
        email: "alex@cordulatech.com".to_string(),
        role: Role::User,
        avatar: Some("https://picsum.photos/seed/alex/200".to_string()),
        password: Some("password123".to_string()),
        preferred_currency: CurrencyCode::Usd,
        theme: None,
    }
}
