use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A request to simulate a loan.
///
/// Field validity is not enforced on construction; the engine validates before
/// deriving anything from it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoanRequest {
    /// The amount borrowed.
    pub principal: Decimal,
    /// The borrower's birth date, used to pick the interest tier.
    pub birth_date: NaiveDate,
    /// Number of monthly installments.
    pub term_months: i32,
}

impl LoanRequest {
    pub fn new(principal: Decimal, birth_date: NaiveDate, term_months: i32) -> Self {
        Self {
            principal,
            birth_date,
            term_months,
        }
    }
}

/// The financial terms of a simulated loan.
///
/// Every field carries exactly two fractional digits, rounded half-to-even.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoanResult {
    pub monthly_payment: Decimal,
    pub total_amount: Decimal,
    pub total_interest: Decimal,
    /// Annual rate as a percentage, e.g. `3.00` for 3%.
    pub annual_interest_rate_percent: Decimal,
}
