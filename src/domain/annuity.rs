//! Annuity arithmetic on fixed-precision decimals.
//!
//! Every operation is checked: an overflow surfaces as a [`ComputationFault`]
//! instead of a panic. Rounding is half-to-even throughout.

use crate::error::ComputationFault;
use rust_decimal::{Decimal, RoundingStrategy};

pub const MONTHS_PER_YEAR: u32 = 12;
/// Fractional digits kept for the monthly rate before compounding.
pub const MONTHLY_RATE_SCALE: u32 = 10;
/// Fractional digits of every reported amount.
pub const CURRENCY_SCALE: u32 = 2;

const ROUNDING: RoundingStrategy = RoundingStrategy::MidpointNearestEven;

/// Rounds to two fractional digits and pads to that scale (`3` becomes `3.00`).
pub fn round_currency(value: Decimal) -> Decimal {
    let mut rounded = value.round_dp_with_strategy(CURRENCY_SCALE, ROUNDING);
    rounded.rescale(CURRENCY_SCALE);
    rounded
}

/// `annual_rate / 12`, rounded to ten fractional digits.
pub fn monthly_rate(annual_rate: Decimal) -> Result<Decimal, ComputationFault> {
    annual_rate
        .checked_div(Decimal::from(MONTHS_PER_YEAR))
        .map(|rate| rate.round_dp_with_strategy(MONTHLY_RATE_SCALE, ROUNDING))
        .ok_or(ComputationFault::Overflow("deriving the monthly rate"))
}

/// `(1 + rate)^periods` by exact square-and-multiply.
pub fn compound_factor(rate: Decimal, periods: u32) -> Result<Decimal, ComputationFault> {
    let overflow = ComputationFault::Overflow("compounding the monthly rate");
    let mut base = Decimal::ONE.checked_add(rate).ok_or(overflow)?;
    let mut exponent = periods;
    let mut factor = Decimal::ONE;
    while exponent > 0 {
        if exponent & 1 == 1 {
            factor = factor.checked_mul(base).ok_or(overflow)?;
        }
        exponent >>= 1;
        if exponent > 0 {
            base = base.checked_mul(base).ok_or(overflow)?;
        }
    }
    Ok(factor)
}

/// Fixed monthly payment that fully amortizes `principal` over `term_months`.
///
/// Returns the unrounded payment: `P * r(1+r)^n / ((1+r)^n - 1)`, or `P / n`
/// when the monthly rate is zero and the closed form has a zero denominator.
pub fn monthly_payment(
    principal: Decimal,
    monthly_rate: Decimal,
    term_months: u32,
) -> Result<Decimal, ComputationFault> {
    if term_months == 0 {
        return Err(ComputationFault::DivisionByZero("spreading over an empty term"));
    }
    if monthly_rate.is_zero() {
        return principal
            .checked_div(Decimal::from(term_months))
            .ok_or(ComputationFault::Overflow("spreading the principal"));
    }

    let factor = compound_factor(monthly_rate, term_months)?;
    let numerator = monthly_rate
        .checked_mul(factor)
        .ok_or(ComputationFault::Overflow("computing the payment numerator"))?;
    let denominator = factor
        .checked_sub(Decimal::ONE)
        .ok_or(ComputationFault::Overflow("computing the payment denominator"))?;
    if denominator.is_zero() {
        return Err(ComputationFault::DivisionByZero("computing the payment ratio"));
    }
    let ratio = numerator
        .checked_div(denominator)
        .ok_or(ComputationFault::Overflow("computing the payment ratio"))?;
    principal
        .checked_mul(ratio)
        .ok_or(ComputationFault::Overflow("scaling the payment by the principal"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_round_currency_half_even() {
        assert_eq!(round_currency(dec!(0.125)).to_string(), "0.12");
        assert_eq!(round_currency(dec!(0.135)).to_string(), "0.14");
        assert_eq!(round_currency(dec!(3)).to_string(), "3.00");
    }

    #[test]
    fn test_monthly_rate_scale() {
        assert_eq!(monthly_rate(dec!(0.03)).unwrap(), dec!(0.0025));
        assert_eq!(monthly_rate(dec!(0.05)).unwrap(), dec!(0.0041666667));
        assert_eq!(monthly_rate(dec!(0.04)).unwrap(), dec!(0.0033333333));
        assert_eq!(monthly_rate(dec!(0.02)).unwrap(), dec!(0.0016666667));
    }

    #[test]
    fn test_compound_factor_exact() {
        assert_eq!(compound_factor(dec!(0.1), 0).unwrap(), Decimal::ONE);
        assert_eq!(compound_factor(dec!(0.1), 1).unwrap(), dec!(1.1));
        assert_eq!(compound_factor(dec!(0.1), 3).unwrap(), dec!(1.331));
        assert_eq!(compound_factor(dec!(0.5), 4).unwrap(), dec!(5.0625));
    }

    #[test]
    fn test_compound_factor_overflow() {
        assert!(matches!(
            compound_factor(dec!(1), 200),
            Err(ComputationFault::Overflow(_))
        ));
    }

    #[test]
    fn test_monthly_payment_closed_form() {
        let payment = monthly_payment(dec!(10000), dec!(0.0025), 12).unwrap();
        assert_eq!(round_currency(payment), dec!(846.94));

        let payment = monthly_payment(dec!(250000), dec!(0.0033333333), 360).unwrap();
        assert_eq!(round_currency(payment), dec!(1193.54));
    }

    #[test]
    fn test_monthly_payment_zero_rate() {
        let payment = monthly_payment(dec!(1000), Decimal::ZERO, 12).unwrap();
        assert_eq!(round_currency(payment), dec!(83.33));

        let payment = monthly_payment(dec!(1200), Decimal::ZERO, 12).unwrap();
        assert_eq!(payment, dec!(100));
    }

    #[test]
    fn test_monthly_payment_empty_term() {
        assert!(matches!(
            monthly_payment(dec!(1000), dec!(0.0025), 0),
            Err(ComputationFault::DivisionByZero(_))
        ));
    }
}
