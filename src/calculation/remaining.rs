//! Remaining salary calculation.
//!
//! The remaining salary payable is the total monthly salary minus the advance
//! already paid, rounded to the minor unit.

use rust_decimal::Decimal;

use crate::error::{AmountField, EngineError, EngineResult};

use super::money::{round_money, to_decimal, validate_monetary_amount};

/// Calculates the salary still payable after the advance.
///
/// Preconditions are checked in this order:
/// 1. Both operands must be numbers (`TypeMismatch`) no larger than
///    `MAX_MONETARY_AMOUNT` (`OutOfRange`)
/// 2. `total >= 0` (`NegativeTotal`)
/// 3. `advance >= 0` (`NegativeAdvance`)
/// 4. `advance <= total` (`AdvanceExceedsTotal`)
///
/// The result is `round_money(total - advance)`, always in `[0, total]`. The
/// calculation has no hidden state, so equal inputs give identical results.
///
/// # Examples
///
/// ```
/// use salary_ledger::calculation::calculate_remaining_salary;
///
/// let remaining = calculate_remaining_salary(3333.33, 1111.11).unwrap();
/// assert_eq!(remaining.to_string(), "2222.22");
///
/// assert!(calculate_remaining_salary(3000.0, 5000.0).is_err());
/// ```
pub fn calculate_remaining_salary(total: f64, advance: f64) -> EngineResult<Decimal> {
    let total = to_decimal(total, AmountField::TotalMonthlySalary)?;
    let advance = to_decimal(advance, AmountField::AdvanceAmountPaid)?;
    remaining_between(total, advance)
}

/// Range checks and subtraction on amounts that are already decimals.
pub(crate) fn remaining_between(total: Decimal, advance: Decimal) -> EngineResult<Decimal> {
    if total < Decimal::ZERO {
        return Err(EngineError::NegativeTotal);
    }
    if advance < Decimal::ZERO {
        return Err(EngineError::NegativeAdvance);
    }
    if advance > total {
        return Err(EngineError::AdvanceExceedsTotal);
    }

    Ok(round_money(total - advance))
}

/// Returns true if nothing remains payable.
///
/// ```
/// use salary_ledger::calculation::is_fully_paid;
///
/// assert!(is_fully_paid(4000.0, 4000.0).unwrap());
/// assert!(!is_fully_paid(4000.0, 3999.99).unwrap());
/// ```
pub fn is_fully_paid(total: f64, advance: f64) -> EngineResult<bool> {
    Ok(calculate_remaining_salary(total, advance)?.is_zero())
}

/// Returns true if a valid, non-zero advance has been paid.
pub fn has_advance_payment(advance: f64) -> EngineResult<bool> {
    validate_monetary_amount(advance, AmountField::AdvanceAmountPaid)?;
    Ok(advance > 0.0)
}
