//! Core types and trait definitions for the Glossa corpus store.
//!
//! This crate is deliberately free of HTTP and database dependencies.
//! All other crates depend on it; it depends on nothing proprietary.

// We intentionally use native `async fn` in traits (stabilised in Rust 1.75).
// Suppress the advisory lint about `Send` bounds on the returned futures.
#![allow(async_fn_in_trait)]

pub mod doc;
pub mod error;
pub mod policy;
pub mod project;
pub mod reference;
pub mod speaker;
pub mod store;
pub mod transcript;
pub mod user;
pub mod view;

pub use error::{Error, Result};
