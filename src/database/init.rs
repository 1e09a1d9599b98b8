//! Shared database types. Pool creation itself is owned by the bot binary's
//! startup code; everything in this crate only borrows the pool.

use sqlx::{Pool, Postgres};

/// A type alias for the database connection pool (`Pool<Postgres>`).
/// This is used throughout the application to provide a consistent, clear
/// name for the shared database connection state.
pub type DbPool = Pool<Postgres>;
