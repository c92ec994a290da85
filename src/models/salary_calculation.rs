//! Salary computation input and result models.
//!
//! A [`SalaryCalculation`] is only ever produced by the calculation engine. It has
//! no public constructor and no setters, so its derived fields cannot drift from
//! the amounts they were computed from.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::PaymentStatus;

/// The amounts a salary computation is run on.
///
/// # Example
///
/// ```
/// use salary_ledger::calculation::calculate_salary_details;
/// use salary_ledger::models::{PaymentStatus, SalaryInput};
///
/// let details = calculate_salary_details(SalaryInput::new(5000.0, 2000.0)).unwrap();
/// assert_eq!(details.remaining_salary_payable().to_string(), "3000.00");
/// assert_eq!(details.payment_status(), PaymentStatus::PartiallyPaid);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SalaryInput {
    /// The salary owed for the month.
    pub total_monthly_salary: f64,
    /// The amount already paid in advance.
    pub advance_amount_paid: f64,
}

impl SalaryInput {
    /// Creates a new input pair.
    pub fn new(total_monthly_salary: f64, advance_amount_paid: f64) -> Self {
        Self {
            total_monthly_salary,
            advance_amount_paid,
        }
    }
}

/// The derived result of a salary computation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SalaryCalculation {
    total_monthly_salary: Decimal,
    advance_amount_paid: Decimal,
    remaining_salary_payable: Decimal,
    payment_status: PaymentStatus,
    calculated_at: DateTime<Utc>,
}

impl SalaryCalculation {
    pub(crate) fn new(
        total_monthly_salary: Decimal,
        advance_amount_paid: Decimal,
        remaining_salary_payable: Decimal,
        payment_status: PaymentStatus,
        calculated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            total_monthly_salary,
            advance_amount_paid,
            remaining_salary_payable,
            payment_status,
            calculated_at,
        }
    }

    /// The total monthly salary as entered.
    pub fn total_monthly_salary(&self) -> Decimal {
        self.total_monthly_salary
    }

    /// The advance paid as entered.
    pub fn advance_amount_paid(&self) -> Decimal {
        self.advance_amount_paid
    }

    /// Total minus advance, rounded to the minor unit.
    pub fn remaining_salary_payable(&self) -> Decimal {
        self.remaining_salary_payable
    }

    /// The payment status classification.
    pub fn payment_status(&self) -> PaymentStatus {
        self.payment_status
    }

    /// When the derivation ran.
    pub fn calculated_at(&self) -> DateTime<Utc> {
        self.calculated_at
    }
}
