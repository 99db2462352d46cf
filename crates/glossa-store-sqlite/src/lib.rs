//! SQLite backend for the Glossa corpus store.
//!
//! Wraps [`tokio_rusqlite`] so all database access runs on a dedicated thread
//! without blocking the async runtime. The DDL in [`schema`] is the external
//! contract: table names, column names and constraint behavior are preserved
//! exactly for interoperability with reporting queries.

mod encode;
mod schema;
mod seed;
mod store;

pub mod error;

pub use error::{Error, Result};
pub use store::SqliteStore;

#[cfg(test)]
mod tests;
