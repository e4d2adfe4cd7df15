use chrono::NaiveDate;
use std::sync::Arc;

/// Source of the evaluation date used for validation and age tiering.
pub trait Clock: Send + Sync {
    fn today(&self) -> NaiveDate;
}

pub type ClockRef = Arc<dyn Clock>;
