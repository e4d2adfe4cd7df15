use crate::domain::annuity::{self, round_currency};
use crate::domain::loan::{LoanRequest, LoanResult};
use crate::domain::ports::ClockRef;
use crate::domain::rate;
use crate::error::{ComputationFault, LoanError, Result, ValidationError};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Checks a request against the evaluation date `today`.
///
/// Checks run in a fixed order and stop at the first failure: amount, term,
/// then birth date.
pub fn validate(request: &LoanRequest, today: NaiveDate) -> std::result::Result<(), ValidationError> {
    if request.principal <= Decimal::ZERO {
        Err(ValidationError::NonPositiveAmount)
    } else if request.term_months <= 0 {
        Err(ValidationError::NonPositiveTerm)
    } else if request.birth_date > today {
        Err(ValidationError::FutureBirthDate)
    } else {
        Ok(())
    }
}

/// Derives every reported figure from an already validated principal, annual rate and term.
///
/// The unrounded monthly payment feeds `total_amount`, so
/// `total_amount == round2(payment * term)` holds exactly; only the reported
/// `monthly_payment` is rounded.
pub fn assemble(
    principal: Decimal,
    annual_rate: Decimal,
    term_months: u32,
) -> std::result::Result<LoanResult, ComputationFault> {
    let monthly_rate = annuity::monthly_rate(annual_rate)?;
    let payment = annuity::monthly_payment(principal, monthly_rate, term_months)?;
    tracing::debug!(%annual_rate, %monthly_rate, %payment, "derived monthly payment");

    let total_amount = payment
        .checked_mul(Decimal::from(term_months))
        .map(round_currency)
        .ok_or(ComputationFault::Overflow("summing the installments"))?;
    let total_interest = total_amount
        .checked_sub(principal)
        .map(round_currency)
        .ok_or(ComputationFault::Overflow("deriving the total interest"))?;
    let annual_interest_rate_percent = annual_rate
        .checked_mul(dec!(100))
        .map(round_currency)
        .ok_or(ComputationFault::Overflow("expressing the rate as a percentage"))?;

    Ok(LoanResult {
        monthly_payment: round_currency(payment),
        total_amount,
        total_interest,
        annual_interest_rate_percent,
    })
}

/// Computes loan terms for requests, evaluated against an injected clock.
///
/// Stateless apart from the clock; share it freely across threads.
pub struct LoanSimulator {
    clock: ClockRef,
}

impl LoanSimulator {
    pub fn new(clock: ClockRef) -> Self {
        Self { clock }
    }

    /// The evaluation date the clock currently reports.
    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    /// Simulates `request` against the clock's current date.
    pub fn simulate(&self, request: &LoanRequest) -> Result<LoanResult> {
        self.simulate_on(request, self.clock.today())
    }

    /// Simulates `request` as if evaluated on `today`.
    pub fn simulate_on(&self, request: &LoanRequest, today: NaiveDate) -> Result<LoanResult> {
        if let Err(reason) = validate(request, today) {
            tracing::warn!(%reason, "rejected loan request");
            return Err(reason.into());
        }
        let term_months =
            u32::try_from(request.term_months).map_err(|_| ValidationError::NonPositiveTerm)?;
        let annual_rate = rate::annual_rate_for(request.birth_date, today);

        assemble(request.principal, annual_rate, term_months).map_err(|fault| {
            tracing::error!(%fault, "error during loan simulation calculation");
            LoanError::Computation(fault)
        })
    }
}
