//! strokeflow-storage
//!
//! The visit record store. A small async trait with an in-memory and a
//! JSON-file implementation.

pub mod error;
pub mod fs;
pub mod memory;
pub mod store;
