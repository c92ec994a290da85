//! Error types for the salary ledger.
//!
//! This module provides strongly-typed errors using the `thiserror` crate.
//! Calculation failures ([`EngineError`]) are kept apart from persistence
//! failures ([`StoreError`]) and configuration failures ([`ConfigError`]), so the
//! API layer can tell client mistakes from internal faults.

use std::fmt;

use thiserror::Error;
use uuid::Uuid;

use crate::models::Month;

/// A monetary field of a salary computation.
///
/// Every field-level failure carries one of these so callers can attribute the
/// error to the offending input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AmountField {
    /// The total monthly salary.
    TotalMonthlySalary,
    /// The advance already paid against the month's salary.
    AdvanceAmountPaid,
}

impl AmountField {
    /// The human-readable label used in error messages.
    pub fn label(self) -> &'static str {
        match self {
            AmountField::TotalMonthlySalary => "Total monthly salary",
            AmountField::AdvanceAmountPaid => "Advance amount paid",
        }
    }

    /// The JSON key of this field in requests and responses.
    pub fn key(self) -> &'static str {
        match self {
            AmountField::TotalMonthlySalary => "total_monthly_salary",
            AmountField::AdvanceAmountPaid => "advance_amount_paid",
        }
    }
}

impl fmt::Display for AmountField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Failures raised by the salary calculation engine.
///
/// # Example
///
/// ```
/// use salary_ledger::error::{AmountField, EngineError};
///
/// let error = EngineError::Negative {
///     field: AmountField::TotalMonthlySalary,
/// };
/// assert_eq!(error.to_string(), "Total monthly salary cannot be negative");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// An operand could not be used as a number.
    #[error("{field} must be a number")]
    TypeMismatch {
        /// The non-numeric field.
        field: AmountField,
    },

    /// The amount is NaN.
    #[error("{field} must be a valid number")]
    NotANumber {
        /// The offending field.
        field: AmountField,
    },

    /// The amount is infinite.
    #[error("{field} must be a finite number")]
    NotFinite {
        /// The offending field.
        field: AmountField,
    },

    /// The amount is below zero.
    #[error("{field} cannot be negative")]
    Negative {
        /// The offending field.
        field: AmountField,
    },

    /// The amount is larger than the ledger supports.
    #[error("{field} exceeds the maximum supported amount")]
    OutOfRange {
        /// The offending field.
        field: AmountField,
    },

    /// The amount has more than two decimal places.
    #[error("{field} cannot have more than 2 decimal places")]
    ExcessPrecision {
        /// The offending field.
        field: AmountField,
    },

    /// The total passed to a calculation is below zero.
    #[error("Total salary cannot be negative")]
    NegativeTotal,

    /// The advance passed to a calculation is below zero.
    #[error("Advance amount cannot be negative")]
    NegativeAdvance,

    /// The advance is larger than the total monthly salary.
    #[error("Advance amount cannot exceed total monthly salary")]
    AdvanceExceedsTotal,

    /// No payment status matches the computed amounts.
    #[error("Unable to determine payment status")]
    UnclassifiableState,
}

impl EngineError {
    /// Returns the field this failure should be attributed to, if any.
    ///
    /// ```
    /// use salary_ledger::error::{AmountField, EngineError};
    ///
    /// assert_eq!(
    ///     EngineError::AdvanceExceedsTotal.field(),
    ///     Some(AmountField::AdvanceAmountPaid)
    /// );
    /// assert_eq!(EngineError::UnclassifiableState.field(), None);
    /// ```
    pub fn field(&self) -> Option<AmountField> {
        match self {
            EngineError::TypeMismatch { field }
            | EngineError::NotANumber { field }
            | EngineError::NotFinite { field }
            | EngineError::Negative { field }
            | EngineError::OutOfRange { field }
            | EngineError::ExcessPrecision { field } => Some(*field),
            EngineError::NegativeTotal => Some(AmountField::TotalMonthlySalary),
            EngineError::NegativeAdvance | EngineError::AdvanceExceedsTotal => {
                Some(AmountField::AdvanceAmountPaid)
            }
            EngineError::UnclassifiableState => None,
        }
    }

    /// Returns true if the failure was caused by the caller's input.
    pub fn is_client_error(&self) -> bool {
        !matches!(self, EngineError::UnclassifiableState)
    }
}

/// Failures raised by a salary record store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A record for the same employee and period already exists.
    #[error("Salary record already exists for employee '{employee_id}' for {month} {year}")]
    DuplicateRecord {
        /// The employee identifier.
        employee_id: String,
        /// The month of the conflicting record.
        month: Month,
        /// The year of the conflicting record.
        year: i32,
    },

    /// No record exists with the given id.
    #[error("Salary record not found: {id}")]
    RecordNotFound {
        /// The id that was looked up.
        id: Uuid,
    },

    /// Deriving the stored fields failed before save.
    #[error(transparent)]
    Calculation(#[from] EngineError),

    /// The backing storage could not be used.
    #[error("Salary store unavailable: {message}")]
    Unavailable {
        /// A description of the failure.
        message: String,
    },
}

/// Failures raised while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A setting parsed but holds an unusable value.
    #[error("Invalid setting '{setting}': {message}")]
    InvalidSetting {
        /// The dotted name of the setting.
        setting: String,
        /// Why the value was rejected.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

/// A type alias for Results that return StoreError.
pub type StoreResult<T> = Result<T, StoreError>;

/// A type alias for Results that return ConfigError.
pub type ConfigResult<T> = Result<T, ConfigError>;
