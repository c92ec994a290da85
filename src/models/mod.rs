//! Core data models for the salary ledger.
//!
//! This module contains the domain models shared by the calculation engine,
//! the record store and the HTTP API.

mod payment_status;
mod period;
mod salary_calculation;
mod salary_record;

pub use payment_status::{PaymentStatus, UnknownPaymentStatus};
pub use period::{Month, UnknownMonth};
pub use salary_calculation::{SalaryCalculation, SalaryInput};
pub use salary_record::{NewSalaryRecord, SalaryRecord};
