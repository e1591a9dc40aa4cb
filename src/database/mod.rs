pub mod connection;
pub mod keys;
pub mod setup;
pub mod state;

pub use connection::{DbConn, DbPool, create_pool, get_connection};
pub use state::SqliteRepository;
