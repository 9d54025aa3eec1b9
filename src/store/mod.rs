use anyhow::Result;

use crate::db::Database;
use crate::models::{Budget, Transaction, User};

/// Snapshot of the application state shared by every view. Derived values
/// (balance, totals) are never held here; consumers fold over
/// `transactions` on demand.
#[derive(Debug, Clone, Default)]
pub(crate) struct AppState {
    pub(crate) current_user: Option<User>,
    pub(crate) is_authenticated: bool,
    pub(crate) transactions: Vec<Transaction>,
    /// Dormant: declared in the data model, never populated.
    pub(crate) budgets: Vec<Budget>,
}

type Listener = Box<dyn FnMut(&AppState)>;

/// State container mediating between views and the persistence façade.
/// Every mutating action writes through the façade and then re-reads the
/// authoritative transaction list before returning, so subscribers always
/// observe state consistent with storage.
pub(crate) struct AppStore {
    db: Database,
    state: AppState,
    listeners: Vec<Listener>,
}

impl AppStore {
    pub(crate) fn new(db: Database) -> Self {
        let current_user = db.current_user();
        let state = AppState {
            is_authenticated: current_user.is_some(),
            current_user,
            transactions: Vec::new(),
            budgets: Vec::new(),
        };
        Self {
            db,
            state,
            listeners: Vec::new(),
        }
    }

    pub(crate) fn state(&self) -> &AppState {
        &self.state
    }

    pub(crate) fn db(&self) -> &Database {
        &self.db
    }

    pub(crate) fn db_mut(&mut self) -> &mut Database {
        &mut self.db
    }

    pub(crate) fn subscribe(&mut self, listener: Listener) {
        self.listeners.push(listener);
    }

    fn notify(&mut self) {
        let state = &self.state;
        for listener in &mut self.listeners {
            listener(state);
        }
    }

    // ── Actions ───────────────────────────────────────────────

    pub(crate) fn login(&mut self, user: User) -> Result<()> {
        self.db.set_current_user(Some(&user))?;
        self.state.current_user = Some(user);
        self.state.is_authenticated = true;
        self.refresh();
        Ok(())
    }

    pub(crate) fn register(&mut self, user: User) -> Result<()> {
        self.db.register_user(&user)?;
        self.login(user)
    }

    pub(crate) fn logout(&mut self) -> Result<()> {
        self.db.set_current_user(None)?;
        self.state = AppState::default();
        self.notify();
        Ok(())
    }

    pub(crate) fn add_transaction(&mut self, txn: Transaction) -> Result<()> {
        self.db.add_transaction(&txn)?;
        self.refresh();
        Ok(())
    }

    pub(crate) fn update_transaction(&mut self, txn: Transaction) -> Result<()> {
        self.db.update_transaction(&txn)?;
        self.refresh();
        Ok(())
    }

    pub(crate) fn delete_transaction(&mut self, id: &str) -> Result<()> {
        self.db.delete_transaction(id)?;
        self.refresh();
        Ok(())
    }

    /// Profile edits set `current_user` directly without a refresh; user
    /// field changes cannot alter the set of owned transactions.
    pub(crate) fn update_user(&mut self, user: User) -> Result<()> {
        self.db.update_user(&user)?;
        self.state.current_user = Some(user);
        self.notify();
        Ok(())
    }

    /// Re-read the transaction list for the current user. No-op when
    /// logged out.
    pub(crate) fn refresh(&mut self) {
        let user_id = self.state.current_user.as_ref().map(|u| u.id.clone());
        if let Some(id) = user_id {
            self.state.transactions = self.db.transactions_for_user(&id);
            self.state.budgets = Vec::new();
        }
        self.notify();
    }
}
