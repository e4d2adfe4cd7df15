//! Concrete adapters for the domain ports.

pub mod clock;
