//! Core types and trait definitions for the Parley discussion-forum backend.
//!
//! This crate holds the payload validators, the storage capability traits,
//! the use cases, and the thread-aggregation algorithm. It is deliberately
//! free of HTTP and database dependencies. All other crates depend on it; it
//! depends on nothing proprietary.

// We intentionally use native `async fn` in traits (stabilised in Rust 1.75).
// Suppress the advisory lint about `Send` bounds on the returned futures.
#![allow(async_fn_in_trait)]

pub mod aggregate;
pub mod comment;
pub mod error;
pub mod payload;
pub mod reply;
pub mod store;
pub mod thread;
pub mod usecase;
pub mod user;

pub use error::{Error, Result};
