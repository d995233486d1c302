//! Bookstore domain core.
//!
//! Shared id/timestamp types, the domain error taxonomy, and pure field
//! validation for catalog records. Nothing in this crate touches the
//! database or the network.

pub mod book;
pub mod error;
pub mod types;
