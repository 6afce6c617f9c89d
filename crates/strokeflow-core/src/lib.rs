//! strokeflow-core
//!
//! Pure domain types for the stroke workflow: visit records, the NIHSS item
//! set, tPA eligibility verdicts, onset-time handling and storage key
//! conventions. No I/O.

pub mod error;
pub mod keys;
pub mod models;
pub mod time;
