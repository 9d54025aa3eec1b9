use anyhow::Result;
use rust_decimal::Decimal;
use std::str::FromStr;

use crate::auth;
use crate::models::{
    format_amount, CurrencyCode, Role, Theme, Transaction, TransactionKind, User,
    SUGGESTED_CATEGORIES,
};
use crate::store::AppStore;
use crate::summary::{self, LedgerFilter};

pub(crate) fn as_cli(args: &[String], store: &mut AppStore) -> Result<()> {
    match args[0].as_str() {
        "login" => cli_login(&args[1..], store),
        "register" => cli_register(&args[1..], store),
        "logout" => cli_logout(store),
        "add" => cli_add(&args[1..], store),
        "edit" => cli_edit(&args[1..], store),
        "rm" => cli_rm(&args[1..], store),
        "ledger" | "l" => cli_ledger(&args[1..], store),
        "summary" | "s" => cli_summary(store),
        "profile" => cli_profile(&args[1..], store),
        "users" => cli_users(&args[1..], store),
        "user-rm" => cli_user_rm(&args[1..], store),
        "categories" => {
            for name in SUGGESTED_CATEGORIES {
                println!("  {name}");
            }
            Ok(())
        }
        "--help" | "-h" | "help" => {
            print_usage();
            Ok(())
        }
        "--version" | "-V" | "version" => {
            println!("vesto {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        other => {
            print_usage();
            anyhow::bail!("Unknown command: {other}");
        }
    }
}

pub(crate) fn print_status(store: &AppStore) {
    let state = store.state();
    match &state.current_user {
        Some(user) => {
            let totals = summary::totals(&state.transactions);
            println!("Logged in as {} <{}>", user.name, user.email);
            println!(
                "Balance: {}",
                format_amount(totals.balance, user.preferred_currency)
            );
            println!();
            println!("Run `vesto help` for commands.");
        }
        None => {
            println!("Not logged in. Use: vesto login <email> <password>");
        }
    }
}

fn print_usage() {
    println!("Vesto — local-only personal finance tracker");
    println!();
    println!("Usage: vesto [command]");
    println!();
    println!("Commands:");
    println!("  (none)                                   Show session status");
    println!("  login <email> <password>                 Log in");
    println!("  register <name> <email> <password>       Create an account and log in");
    println!("  logout                                   Log out");
    println!("  add <income|expense> <amount> <description> [category]");
    println!("  edit <id> <amount> <description> [category]");
    println!("  rm <id>                                  Delete a transaction");
    println!("  ledger [income|expense] [search]         Searchable transaction history");
    println!("  summary                                  Balance, totals and recent activity");
    println!("  profile [--name N] [--password P] [--currency C] [--theme dark|light] [--role R]");
    println!("  users [search]                           User directory (admin)");
    println!("  user-rm <id>                             Delete a user (admin)");
    println!("  categories                               List suggested categories");
    println!("  --help, -h                               Show this help");
    println!("  --version, -V                            Show version");
}

fn require_login(store: &AppStore) -> Result<User> {
    store
        .state()
        .current_user
        .clone()
        .ok_or_else(|| anyhow::anyhow!("Not logged in. Use: vesto login <email> <password>"))
}

fn require_admin(store: &AppStore) -> Result<User> {
    let user = require_login(store)?;
    if !user.is_admin() {
        anyhow::bail!("Admin access required");
    }
    Ok(user)
}

fn parse_amount(raw: &str) -> Result<Decimal> {
    let amount =
        Decimal::from_str(raw).map_err(|_| anyhow::anyhow!("Invalid amount: {raw}"))?;
    if amount < Decimal::ZERO {
        anyhow::bail!("Amount must be a non-negative magnitude; use `add expense` instead");
    }
    Ok(amount)
}

// ── Session commands ─────────────────────────────────────────

fn cli_login(args: &[String], store: &mut AppStore) -> Result<()> {
    let [email, password] = args else {
        anyhow::bail!("Usage: vesto login <email> <password>");
    };
    match auth::authenticate(store.db(), email, password) {
        Some(user) => {
            let name = user.name.clone();
            store.login(user)?;
            println!("Welcome back, {name}.");
            Ok(())
        }
        None => {
            println!("Invalid credentials.");
            Ok(())
        }
    }
}

fn cli_register(args: &[String], store: &mut AppStore) -> Result<()> {
    let [name, email, password] = args else {
        anyhow::bail!("Usage: vesto register <name> <email> <password>");
    };
    let user = auth::new_registration(name, email, password);
    store.register(user)?;
    println!("Account created. Welcome, {name}.");
    Ok(())
}

fn cli_logout(store: &mut AppStore) -> Result<()> {
    store.logout()?;
    println!("Logged out.");
    Ok(())
}

// ── Transaction commands ─────────────────────────────────────

fn cli_add(args: &[String], store: &mut AppStore) -> Result<()> {
    let user = require_login(store)?;
    if args.len() < 3 {
        anyhow::bail!("Usage: vesto add <income|expense> <amount> <description> [category]");
    }
    let Some(kind) = TransactionKind::parse(&args[0]) else {
        anyhow::bail!("Expected `income` or `expense`, got: {}", args[0]);
    };
    let amount = parse_amount(&args[1])?;
    let description = args[2].clone();
    let category = args.get(3).cloned().unwrap_or_else(|| "Other".to_string());

    let txn = Transaction::new(&user, amount, kind, category, description);
    store.add_transaction(txn)?;
    println!("Recorded {kind} of {}.", format_amount(amount, user.preferred_currency));
    Ok(())
}

fn cli_edit(args: &[String], store: &mut AppStore) -> Result<()> {
    require_login(store)?;
    if args.len() < 3 {
        anyhow::bail!("Usage: vesto edit <id> <amount> <description> [category]");
    }
    let id = &args[0];
    let Some(existing) = store.state().transactions.iter().find(|t| t.id == *id) else {
        anyhow::bail!("No transaction with id: {id}");
    };

    // Kind, date and currency are fixed at creation; edits touch the rest.
    let mut updated = existing.clone();
    updated.amount = parse_amount(&args[1])?;
    updated.description = args[2].clone();
    if let Some(category) = args.get(3) {
        updated.category = category.clone();
    }
    store.update_transaction(updated)?;
    println!("Updated.");
    Ok(())
}

fn cli_rm(args: &[String], store: &mut AppStore) -> Result<()> {
    require_login(store)?;
    let [id] = args else {
        anyhow::bail!("Usage: vesto rm <id>");
    };
    store.delete_transaction(id)?;
    println!("Deleted.");
    Ok(())
}

fn cli_ledger(args: &[String], store: &mut AppStore) -> Result<()> {
    require_login(store)?;

    let mut filter = LedgerFilter::default();
    let mut rest = args;
    if let Some(kind) = rest.first().and_then(|a| TransactionKind::parse(a)) {
        filter.kind = Some(kind);
        rest = &rest[1..];
    }
    filter.search = rest.join(" ");

    let state = store.state();
    let rows = summary::filter_ledger(&state.transactions, &filter);
    if rows.is_empty() {
        println!("No transactions found.");
        return Ok(());
    }
    for txn in rows {
        print_transaction(txn);
    }
    Ok(())
}

fn cli_summary(store: &mut AppStore) -> Result<()> {
    let user = require_login(store)?;
    let state = store.state();
    let totals = summary::totals(&state.transactions);
    let currency = user.preferred_currency;

    println!("Balance:  {}", format_amount(totals.balance, currency));
    println!("Income:   {}", format_amount(totals.income, currency));
    println!("Expenses: {}", format_amount(totals.expenses, currency));

    let recent = summary::recent(&state.transactions, 6);
    if !recent.is_empty() {
        println!();
        println!("Recent activity:");
        for txn in recent {
            print_transaction(txn);
        }
    }
    Ok(())
}

fn print_transaction(txn: &Transaction) {
    let sign = if txn.is_income() { "+" } else { "-" };
    let day = txn.date.get(..10).unwrap_or(&txn.date);
    println!(
        "  {day}  {sign}{:>14}  {}  [{}]  ({})",
        format_amount(txn.amount, txn.currency),
        txn.description,
        txn.category,
        txn.id
    );
}

// ── Profile & admin commands ─────────────────────────────────

fn cli_profile(args: &[String], store: &mut AppStore) -> Result<()> {
    let mut user = require_login(store)?;

    if args.is_empty() {
        println!("Name:     {}", user.name);
        println!("Email:    {}", user.email);
        println!("Role:     {}", user.role);
        println!("Currency: {}", user.preferred_currency);
        println!("Theme:    {}", user.effective_theme());
        let codes: Vec<&str> = CurrencyCode::all().iter().map(|c| c.as_str()).collect();
        println!();
        println!("Available currencies: {}", codes.join(", "));
        return Ok(());
    }

    let mut flags = args.chunks_exact(2);
    for pair in &mut flags {
        match pair[0].as_str() {
            "--name" => user.name = pair[1].clone(),
            // An omitted password flag leaves the stored password unchanged.
            "--password" => user.password = Some(pair[1].clone()),
            "--currency" => user.preferred_currency = CurrencyCode::parse(&pair[1]),
            "--theme" => user.theme = Some(Theme::parse(&pair[1])),
            // Nothing stops a user promoting themselves; there is no server
            // to enforce roles in a purely local install.
            "--role" => user.role = Role::parse(&pair[1]),
            other => anyhow::bail!("Unknown profile flag: {other}"),
        }
    }
    if !flags.remainder().is_empty() {
        anyhow::bail!("Profile flags take a value, e.g. --currency EUR");
    }

    store.update_user(user)?;
    println!("Profile saved.");
    Ok(())
}

fn cli_users(args: &[String], store: &mut AppStore) -> Result<()> {
    require_admin(store)?;
    let users = store.db().users();
    let query = args.join(" ");
    let rows = summary::filter_users(&users, &query);
    if rows.is_empty() {
        println!("No users found.");
        return Ok(());
    }
    println!("{} user(s) registered", users.len());
    for user in rows {
        println!("  {}  {} <{}>  [{}]", user.id, user.name, user.email, user.role);
    }
    Ok(())
}

fn cli_user_rm(args: &[String], store: &mut AppStore) -> Result<()> {
    require_admin(store)?;
    let [id] = args else {
        anyhow::bail!("Usage: vesto user-rm <id>");
    };
    // The deleted user's transactions are deliberately left in place.
    let remaining = store.db_mut().delete_user(id)?;
    println!("Deleted. {} user(s) remain.", remaining.len());
    Ok(())
}
