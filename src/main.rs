mod auth;
mod db;
mod models;
mod run;
mod store;
mod summary;

use anyhow::{Context, Result};

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let db_path = get_db_path()?;
    let db = db::Database::open(&db_path)?;
    let mut store = store::AppStore::new(db);
    store.refresh();

    if args.is_empty() {
        run::print_status(&store);
        Ok(())
    } else {
        run::as_cli(&args, &mut store)
    }
}

fn get_db_path() -> Result<std::path::PathBuf> {
    let proj_dirs = directories::ProjectDirs::from("com", "vesto", "Vesto")
        .ok_or_else(|| anyhow::anyhow!("Could not determine data directory"))?;
    let data_dir = proj_dirs.data_dir();
    std::fs::create_dir_all(data_dir)
        .with_context(|| format!("Failed to create data directory: {}", data_dir.display()))?;
    Ok(data_dir.join("vesto.db"))
}
