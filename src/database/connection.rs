use r2d2_sqlite::SqliteConnectionManager;
use std::path::Path;

use crate::errors::StoreError;

pub type DbPool = r2d2::Pool<SqliteConnectionManager>;
pub type DbConn = r2d2::PooledConnection<SqliteConnectionManager>;

pub fn create_pool(database_path: &Path) -> Result<DbPool, StoreError> {
    let manager = build_manager(database_path);
    build_pool(manager)
}

fn build_manager(path: &Path) -> SqliteConnectionManager {
    SqliteConnectionManager::file(path)
}

fn build_pool(manager: SqliteConnectionManager) -> Result<DbPool, StoreError> {
    Ok(r2d2::Pool::builder().build(manager)?)
}

pub fn get_connection(pool: &DbPool) -> Result<DbConn, StoreError> {
    Ok(pool.get()?)
}
