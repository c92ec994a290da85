//! Salary calculation engine.
//!
//! Pure, synchronous functions for validating monetary amounts, computing the
//! remaining salary payable and classifying the payment status. The record store,
//! the HTTP handlers and the live preview all call into this module, so every
//! layer agrees on validity and derived values.

mod currency;
mod details;
mod money;
mod remaining;
mod status;

pub use currency::{DEFAULT_CURRENCY_SYMBOL, format_currency, format_decimal_currency};
pub use details::{
    calculate_advance_percentage, calculate_salary_details, calculate_salary_details_at,
};
pub use money::{
    MAX_MONETARY_AMOUNT, MONEY_DECIMAL_PLACES, PRECISION_TOLERANCE, round_money,
    validate_advance_amount, validate_monetary_amount,
};
pub use remaining::{calculate_remaining_salary, has_advance_payment, is_fully_paid};
pub use status::determine_payment_status;

pub(crate) use details::{derive_salary_details, percentage_of};
pub(crate) use money::validated_money;
