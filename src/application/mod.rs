//! Application layer orchestrating the loan calculation.
//!
//! [`engine::LoanSimulator`] is the entry point for a single request. It runs
//! validation, rate tiering and result assembly as one sequential chain.
//! [`batch`] fans many requests out over tokio tasks.

pub mod batch;
pub mod engine;
