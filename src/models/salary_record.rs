//! Salary record model.
//!
//! A [`SalaryRecord`] wraps a [`SalaryCalculation`] with the employee and period
//! it belongs to. The derived fields are private and every mutation reruns the
//! calculation engine, so a record can never hold a remaining amount or status
//! that disagrees with its total and advance.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::calculation::{
    calculate_salary_details_at, derive_salary_details, percentage_of, validated_money,
};
use crate::error::{AmountField, EngineResult};

use super::{Month, PaymentStatus, SalaryCalculation, SalaryInput};

/// The fields an operator submits to create a salary record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewSalaryRecord {
    /// Identifier of the employee being paid.
    pub employee_id: String,
    /// Name of the employee being paid.
    pub employee_name: String,
    /// Month the salary is for.
    pub month: Month,
    /// Year the salary is for.
    pub year: i32,
    /// Date the payment was made or is due.
    pub payment_date: NaiveDate,
    /// The salary owed for the month.
    pub total_monthly_salary: f64,
    /// The amount already paid in advance.
    pub advance_amount_paid: f64,
}

/// A persisted salary record.
///
/// # Example
///
/// ```
/// use chrono::{NaiveDate, Utc};
/// use salary_ledger::models::{Month, NewSalaryRecord, PaymentStatus, SalaryRecord};
///
/// let record = SalaryRecord::create(
///     NewSalaryRecord {
///         employee_id: "EMP001".to_string(),
///         employee_name: "Asha Rao".to_string(),
///         month: Month::March,
///         year: 2025,
///         payment_date: NaiveDate::from_ymd_opt(2025, 3, 31).unwrap(),
///         total_monthly_salary: 5000.0,
///         advance_amount_paid: 2000.0,
///     },
///     Utc::now(),
/// )
/// .unwrap();
///
/// assert_eq!(record.remaining_salary_payable().to_string(), "3000.00");
/// assert_eq!(record.payment_status(), PaymentStatus::PartiallyPaid);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SalaryRecord {
    id: Uuid,
    employee_id: String,
    employee_name: String,
    month: Month,
    year: i32,
    payment_date: NaiveDate,
    #[serde(flatten)]
    calculation: SalaryCalculation,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl SalaryRecord {
    /// Validates the submission and builds a record with freshly derived fields.
    pub fn create(new: NewSalaryRecord, now: DateTime<Utc>) -> EngineResult<Self> {
        let calculation = calculate_salary_details_at(
            SalaryInput::new(new.total_monthly_salary, new.advance_amount_paid),
            now,
        )?;

        Ok(Self {
            id: Uuid::new_v4(),
            employee_id: new.employee_id,
            employee_name: new.employee_name,
            month: new.month,
            year: new.year,
            payment_date: new.payment_date,
            calculation,
            created_at: now,
            updated_at: now,
        })
    }

    /// Replaces the advance and re-derives the remaining salary and status.
    ///
    /// The record is left untouched if the new advance is rejected.
    pub fn replace_advance(&mut self, advance: f64, now: DateTime<Utc>) -> EngineResult<()> {
        let advance = validated_money(advance, AmountField::AdvanceAmountPaid)?;
        self.calculation =
            derive_salary_details(self.calculation.total_monthly_salary(), advance, now)?;
        self.updated_at = now;
        Ok(())
    }

    /// Re-derives the remaining salary and status from the stored amounts.
    pub fn refresh(&mut self, now: DateTime<Utc>) -> EngineResult<()> {
        self.calculation = derive_salary_details(
            self.calculation.total_monthly_salary(),
            self.calculation.advance_amount_paid(),
            now,
        )?;
        Ok(())
    }

    /// Unique identifier of the record.
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Identifier of the employee being paid.
    pub fn employee_id(&self) -> &str {
        &self.employee_id
    }

    /// Name of the employee being paid.
    pub fn employee_name(&self) -> &str {
        &self.employee_name
    }

    /// Month the salary is for.
    pub fn month(&self) -> Month {
        self.month
    }

    /// Year the salary is for.
    pub fn year(&self) -> i32 {
        self.year
    }

    /// Date the payment was made or is due.
    pub fn payment_date(&self) -> NaiveDate {
        self.payment_date
    }

    /// The derived calculation.
    pub fn calculation(&self) -> &SalaryCalculation {
        &self.calculation
    }

    /// The total monthly salary.
    pub fn total_monthly_salary(&self) -> Decimal {
        self.calculation.total_monthly_salary()
    }

    /// The advance paid.
    pub fn advance_amount_paid(&self) -> Decimal {
        self.calculation.advance_amount_paid()
    }

    /// The salary still payable.
    pub fn remaining_salary_payable(&self) -> Decimal {
        self.calculation.remaining_salary_payable()
    }

    /// The payment status.
    pub fn payment_status(&self) -> PaymentStatus {
        self.calculation.payment_status()
    }

    /// The advance as a percentage of the total.
    pub fn advance_percentage(&self) -> Decimal {
        percentage_of(self.advance_amount_paid(), self.total_monthly_salary())
    }

    /// Returns true if this record covers the same employee and period as `other`.
    pub fn same_period_as(&self, other: &SalaryRecord) -> bool {
        self.employee_id == other.employee_id
            && self.year == other.year
            && self.month == other.month
    }

    /// When the record was created.
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// When the record was last changed.
    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }
}
