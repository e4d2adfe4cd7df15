//! Domain layer: loan value types and the pure calculation rules.
//!
//! Nothing in here reads the wall clock or performs I/O. The evaluation date
//! always arrives as a parameter, either directly or through the [`ports::Clock`] port.

pub mod annuity;
pub mod loan;
pub mod ports;
pub mod rate;
