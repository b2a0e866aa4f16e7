#![cfg(test)]
use std::sync::Arc;

use models::db::{connect, connect_sqlite_memory, migrate};

use crate::car::repo::{memory::MemoryCarRepository, seaorm::SeaOrmCarRepository};

/// Fresh SQLite-in-memory store with the schema applied; ids start at 1.
pub async fn sqlite_repo() -> Result<SeaOrmCarRepository, anyhow::Error> {
    Ok(SeaOrmCarRepository::new(connect_sqlite_memory().await?))
}

pub fn memory_repo() -> Arc<MemoryCarRepository> {
    Arc::new(MemoryCarRepository::new())
}

/// Store against the external database named by `DATABASE_URL`.
///
/// `None` when the variable is missing or `SKIP_DB_TESTS` is set, so those tests pass
/// trivially on machines without a database.
pub async fn external_repo() -> Option<SeaOrmCarRepository> {
    if std::env::var("SKIP_DB_TESTS").is_ok() || std::env::var("DATABASE_URL").is_err() {
        return None;
    }
    let db = match connect().await {
        Ok(db) => db,
        Err(e) => {
            eprintln!("skip: cannot connect to db: {}", e);
            return None;
        }
    };
    if let Err(e) = migrate(&db).await {
        eprintln!("skip: migrate up failed: {}", e);
        return None;
    }
    Some(SeaOrmCarRepository::new(db))
}
