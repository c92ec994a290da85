//! Monetary amount validation and rounding.
//!
//! Every monetary derivation in the ledger goes through [`round_money`], and every
//! amount entering the ledger goes through [`validate_monetary_amount`].

use std::str::FromStr;

use rust_decimal::prelude::FromPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::error::{AmountField, EngineError, EngineResult};

/// Number of decimal places in a minor currency unit.
pub const MONEY_DECIMAL_PLACES: u32 = 2;

/// How far an amount may move when rounded to the minor unit before it counts
/// as having more than two decimal places.
pub const PRECISION_TOLERANCE: f64 = 0.001;

/// Largest amount the ledger accepts, in major units.
///
/// Every amount up to this bound converts to an exact decimal and keeps its
/// minor units through `f64` arithmetic.
pub const MAX_MONETARY_AMOUNT: f64 = 1_000_000_000_000.0;

/// Rounds a monetary value to two decimal places, half up.
///
/// Halves round toward positive infinity, so `0.125` becomes `0.13` and
/// `-0.125` becomes `-0.12`. The result always carries a scale of two.
///
/// # Examples
///
/// ```
/// use salary_ledger::calculation::round_money;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let rounded = round_money(Decimal::from_str("2222.225").unwrap());
/// assert_eq!(rounded.to_string(), "2222.23");
///
/// let whole = round_money(Decimal::from(3000));
/// assert_eq!(whole.to_string(), "3000.00");
/// ```
pub fn round_money(value: Decimal) -> Decimal {
    let strategy = if value.is_sign_negative() {
        RoundingStrategy::MidpointTowardZero
    } else {
        RoundingStrategy::MidpointAwayFromZero
    };
    let mut rounded = value.round_dp_with_strategy(MONEY_DECIMAL_PLACES, strategy);
    rounded.rescale(MONEY_DECIMAL_PLACES);
    rounded
}

/// Converts a raw amount to a decimal.
///
/// Fails with `TypeMismatch` when the value is not a number and with
/// `OutOfRange` when its magnitude exceeds [`MAX_MONETARY_AMOUNT`]. Goes through
/// the shortest round-trip text form of the float, so `10.015` becomes exactly
/// `10.015` rather than its binary approximation.
pub(crate) fn to_decimal(amount: f64, field: AmountField) -> EngineResult<Decimal> {
    if !amount.is_finite() {
        return Err(EngineError::TypeMismatch { field });
    }
    if amount.abs() > MAX_MONETARY_AMOUNT {
        return Err(EngineError::OutOfRange { field });
    }
    if amount == 0.0 {
        return Ok(Decimal::ZERO);
    }
    Decimal::from_str(&amount.to_string())
        .ok()
        .or_else(|| Decimal::from_f64(amount))
        .ok_or(EngineError::OutOfRange { field })
}

/// Validates an amount and returns it as a decimal.
///
/// The value is not rounded. Whole or one-place amounts are padded to two
/// decimal places so they echo as `5000.00`.
pub(crate) fn validated_money(amount: f64, field: AmountField) -> EngineResult<Decimal> {
    validate_monetary_amount(amount, field)?;
    let mut value = to_decimal(amount, field)?;
    if value.scale() < MONEY_DECIMAL_PLACES {
        value.rescale(MONEY_DECIMAL_PLACES);
    }
    Ok(value)
}

/// Validates a single monetary amount.
///
/// Checks run in this order and the first failure wins:
/// 1. `NotANumber` if the amount is NaN
/// 2. `NotFinite` if the amount is infinite
/// 3. `Negative` if the amount is below zero
/// 4. `OutOfRange` if the amount is above [`MAX_MONETARY_AMOUNT`]
/// 5. `ExcessPrecision` if rounding to the minor unit moves it by more than
///    [`PRECISION_TOLERANCE`]
///
/// # Examples
///
/// ```
/// use salary_ledger::calculation::validate_monetary_amount;
/// use salary_ledger::error::{AmountField, EngineError};
///
/// assert!(validate_monetary_amount(1500.25, AmountField::TotalMonthlySalary).is_ok());
/// assert_eq!(
///     validate_monetary_amount(10.125, AmountField::AdvanceAmountPaid),
///     Err(EngineError::ExcessPrecision { field: AmountField::AdvanceAmountPaid })
/// );
/// ```
pub fn validate_monetary_amount(amount: f64, field: AmountField) -> EngineResult<()> {
    if amount.is_nan() {
        return Err(EngineError::NotANumber { field });
    }
    if amount.is_infinite() {
        return Err(EngineError::NotFinite { field });
    }
    if amount < 0.0 {
        return Err(EngineError::Negative { field });
    }
    if amount > MAX_MONETARY_AMOUNT {
        return Err(EngineError::OutOfRange { field });
    }

    let rounded = (amount * 100.0).round() / 100.0;
    if (rounded - amount).abs() > PRECISION_TOLERANCE {
        return Err(EngineError::ExcessPrecision { field });
    }

    Ok(())
}

/// Validates a total/advance pair.
///
/// Both amounts are validated on their own first (total before advance), so a
/// malformed operand is always reported before the two are compared. Only then
/// is `advance <= total` checked.
pub fn validate_advance_amount(total: f64, advance: f64) -> EngineResult<()> {
    validate_monetary_amount(total, AmountField::TotalMonthlySalary)?;
    validate_monetary_amount(advance, AmountField::AdvanceAmountPaid)?;

    if advance > total {
        return Err(EngineError::AdvanceExceedsTotal);
    }

    Ok(())
}
