use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Number of complete years between `birth_date` and `on`.
///
/// A birthday not yet reached in the year of `on` does not count. Birth dates
/// after `on` yield zero.
pub fn age_on(birth_date: NaiveDate, on: NaiveDate) -> u32 {
    let mut years = on.year() - birth_date.year();
    if (on.month(), on.day()) < (birth_date.month(), birth_date.day()) {
        years -= 1;
    }
    u32::try_from(years).unwrap_or(0)
}

/// Borrower age bracket. Each bracket includes its upper bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AgeTier {
    UpTo25,
    UpTo40,
    UpTo60,
    Over60,
}

impl AgeTier {
    pub fn for_age(age: u32) -> Self {
        match age {
            0..=25 => AgeTier::UpTo25,
            26..=40 => AgeTier::UpTo40,
            41..=60 => AgeTier::UpTo60,
            _ => AgeTier::Over60,
        }
    }

    /// Annual interest rate as a fraction (0.05 for 5%).
    pub fn annual_rate(self) -> Decimal {
        match self {
            AgeTier::UpTo25 => dec!(0.05),
            AgeTier::UpTo40 => dec!(0.03),
            AgeTier::UpTo60 => dec!(0.02),
            AgeTier::Over60 => dec!(0.04),
        }
    }
}

/// Annual rate for a borrower born on `birth_date`, evaluated on `on`.
pub fn annual_rate_for(birth_date: NaiveDate, on: NaiveDate) -> Decimal {
    AgeTier::for_age(age_on(birth_date, on)).annual_rate()
}
