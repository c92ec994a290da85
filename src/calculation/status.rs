//! Payment status classification.

use rust_decimal::Decimal;

use crate::error::{AmountField, EngineError, EngineResult};
use crate::models::PaymentStatus;

use super::money::to_decimal;
use super::remaining::calculate_remaining_salary;

/// Determines the payment status of a total/advance pair.
///
/// Inherits every validation failure of
/// [`calculate_remaining_salary`](super::calculate_remaining_salary), then
/// classifies in this exact order:
/// 1. remaining is zero: `Paid`
/// 2. advance and remaining both above zero: `PartiallyPaid`
/// 3. advance is zero: `Pending`
///
/// Because the zero-remaining check comes first, a zero salary with a zero
/// advance is `Paid`, not `Pending`.
///
/// # Examples
///
/// ```
/// use salary_ledger::calculation::determine_payment_status;
/// use salary_ledger::models::PaymentStatus;
///
/// assert_eq!(determine_payment_status(3000.0, 0.0).unwrap(), PaymentStatus::Pending);
/// assert_eq!(determine_payment_status(3000.0, 1.0).unwrap(), PaymentStatus::PartiallyPaid);
/// assert_eq!(determine_payment_status(3000.0, 3000.0).unwrap(), PaymentStatus::Paid);
/// assert_eq!(determine_payment_status(0.0, 0.0).unwrap(), PaymentStatus::Paid);
/// ```
pub fn determine_payment_status(total: f64, advance: f64) -> EngineResult<PaymentStatus> {
    let remaining = calculate_remaining_salary(total, advance)?;
    let advance = to_decimal(advance, AmountField::AdvanceAmountPaid)?;
    classify_payment_status(advance, remaining)
}

/// Classifies an advance against the remaining balance it leaves.
pub(crate) fn classify_payment_status(
    advance: Decimal,
    remaining: Decimal,
) -> EngineResult<PaymentStatus> {
    if remaining.is_zero() {
        Ok(PaymentStatus::Paid)
    } else if advance > Decimal::ZERO && remaining > Decimal::ZERO {
        Ok(PaymentStatus::PartiallyPaid)
    } else if advance.is_zero() {
        Ok(PaymentStatus::Pending)
    } else {
        Err(EngineError::UnclassifiableState)
    }
}
