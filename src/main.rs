mod budget;
mod db;
mod display;
mod entry;
mod models;
mod run;

use anyhow::{Context, Result};
use std::path::PathBuf;

/// Environment override for the database location.
const DB_PATH_ENV: &str = "SPENDCAP_DB";

fn main() -> Result<()> {
    pretty_env_logger::init();

    let args: Vec<String> = std::env::args().collect();
    let db_path = get_db_path()?;
    log::debug!("Using database {}", db_path.display());
    let store = db::ExpenseStore::open(&db_path)?;

    run::as_cli(&args, &store)
}

fn get_db_path() -> Result<PathBuf> {
    if let Some(path) = std::env::var_os(DB_PATH_ENV).filter(|p| !p.is_empty()) {
        return Ok(PathBuf::from(path));
    }
    let proj_dirs = directories::ProjectDirs::from("com", "spendcap", "spendcap")
        .ok_or_else(|| anyhow::anyhow!("Could not determine data directory"))?;
    let data_dir = proj_dirs.data_dir();
    std::fs::create_dir_all(data_dir)
        .with_context(|| format!("Failed to create data directory: {}", data_dir.display()))?;
    Ok(data_dir.join("spendcap.db"))
}
