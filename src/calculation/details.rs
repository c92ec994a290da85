//! Full salary computation and advance percentage.
//!
//! [`calculate_salary_details`] is the single entry point used by the record
//! store before every save, by the request handlers, and by the live preview.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

use crate::error::{AmountField, EngineResult};
use crate::models::{SalaryCalculation, SalaryInput};

use super::money::{round_money, to_decimal, validate_advance_amount, validated_money};
use super::remaining::remaining_between;
use super::status::classify_payment_status;

/// Validates the input and computes the remaining salary and payment status,
/// stamped with the current time.
///
/// Fails with the first failing validation or calculation; no partial result is
/// ever returned.
///
/// # Examples
///
/// ```
/// use salary_ledger::calculation::calculate_salary_details;
/// use salary_ledger::error::EngineError;
/// use salary_ledger::models::SalaryInput;
///
/// let err = calculate_salary_details(SalaryInput::new(3000.0, 5000.0)).unwrap_err();
/// assert_eq!(err, EngineError::AdvanceExceedsTotal);
/// ```
pub fn calculate_salary_details(input: SalaryInput) -> EngineResult<SalaryCalculation> {
    calculate_salary_details_at(input, Utc::now())
}

/// Same as [`calculate_salary_details`] with an explicit calculation time.
pub fn calculate_salary_details_at(
    input: SalaryInput,
    calculated_at: DateTime<Utc>,
) -> EngineResult<SalaryCalculation> {
    validate_advance_amount(input.total_monthly_salary, input.advance_amount_paid)?;

    // Derivation runs on the unrounded amounts.
    let total = validated_money(input.total_monthly_salary, AmountField::TotalMonthlySalary)?;
    let advance = validated_money(input.advance_amount_paid, AmountField::AdvanceAmountPaid)?;

    derive_salary_details(total, advance, calculated_at)
}

/// Derives remaining salary and status from amounts already held as decimals.
///
/// Used when re-deriving a stored record, whose amounts were validated when they
/// entered the ledger.
pub(crate) fn derive_salary_details(
    total: Decimal,
    advance: Decimal,
    calculated_at: DateTime<Utc>,
) -> EngineResult<SalaryCalculation> {
    let remaining = remaining_between(total, advance)?;
    let status = classify_payment_status(advance, remaining)?;

    Ok(SalaryCalculation::new(
        total,
        advance,
        remaining,
        status,
        calculated_at,
    ))
}

/// Calculates the advance as a percentage of the total, rounded to two places.
///
/// A zero total gives `0` rather than a division error.
///
/// # Examples
///
/// ```
/// use salary_ledger::calculation::calculate_advance_percentage;
///
/// assert_eq!(calculate_advance_percentage(3000.0, 1000.0).unwrap().to_string(), "33.33");
/// assert!(calculate_advance_percentage(0.0, 0.0).unwrap().is_zero());
/// ```
pub fn calculate_advance_percentage(total: f64, advance: f64) -> EngineResult<Decimal> {
    validate_advance_amount(total, advance)?;

    let total = to_decimal(total, AmountField::TotalMonthlySalary)?;
    let advance = to_decimal(advance, AmountField::AdvanceAmountPaid)?;
    Ok(percentage_of(advance, total))
}

/// `advance / total * 100`, rounded, with a zero total giving zero.
pub(crate) fn percentage_of(advance: Decimal, total: Decimal) -> Decimal {
    if total.is_zero() {
        return round_money(Decimal::ZERO);
    }
    round_money(advance / total * Decimal::ONE_HUNDRED)
}
