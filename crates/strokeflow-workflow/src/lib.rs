//! strokeflow-workflow
//!
//! Caller-facing operations over the record store: fetch a visit, run the
//! pure NIHSS and eligibility logic against it, persist the result.

pub mod error;
pub mod nihss;
pub mod scan;
pub mod tpa;
pub mod visits;
