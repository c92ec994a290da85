//! Request types for the salary ledger API.
//!
//! Request bodies are deserialized loosely and checked field by field, so a
//! missing or mistyped field is reported with the name of that field.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::config::ListingConfig;
use crate::error::{AmountField, EngineError};
use crate::models::{Month, NewSalaryRecord, PaymentStatus};
use crate::store::SalaryFilter;

use super::response::{ApiError, ApiErrorResponse};

/// Earliest year accepted for a salary period.
pub const MIN_YEAR: i32 = 1900;

/// Latest year accepted for a salary period.
pub const MAX_YEAR: i32 = 9999;

/// Request body for `POST /salaries`.
///
/// Every field is taken as raw JSON so a mistyped value is reported against the
/// field it was sent in.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateSalaryRequest {
    /// Identifier of the employee being paid; a string.
    #[serde(default)]
    pub employee_id: Option<Value>,
    /// Name of the employee being paid; a string.
    #[serde(default)]
    pub employee_name: Option<Value>,
    /// Month name, e.g. "March" or "Mar".
    #[serde(default)]
    pub month: Option<Value>,
    /// Calendar year; an integer.
    #[serde(default)]
    pub year: Option<Value>,
    /// Payment date as `YYYY-MM-DD`; defaults to the day the record is created.
    #[serde(default)]
    pub payment_date: Option<Value>,
    /// Total monthly salary; must be a JSON number.
    #[serde(default)]
    pub total_monthly_salary: Option<Value>,
    /// Advance already paid; must be a JSON number, defaults to zero.
    #[serde(default)]
    pub advance_amount_paid: Option<Value>,
}

impl CreateSalaryRequest {
    /// Checks presence and type of every field and builds the record submission.
    ///
    /// Amount range and precision rules are left to the calculation engine.
    pub fn into_new_record(self, today: NaiveDate) -> Result<NewSalaryRecord, ApiErrorResponse> {
        let employee_id = required_text(self.employee_id, "employee_id")?;
        let employee_name = required_text(self.employee_name, "employee_name")?;

        let month_text = required_text(self.month, "month")?;
        let month: Month = month_text.parse().map_err(|_| {
            ApiErrorResponse::bad_request(ApiError::invalid_field(
                "month",
                format!("Invalid month: {}", month_text),
            ))
        })?;

        let year = match self.year {
            None | Some(Value::Null) => {
                return Err(ApiErrorResponse::bad_request(ApiError::missing_field("year")));
            }
            Some(value) => value
                .as_i64()
                .and_then(|year| i32::try_from(year).ok())
                .ok_or_else(|| {
                    ApiErrorResponse::bad_request(ApiError::invalid_field(
                        "year",
                        format!("Year must be an integer, got {}", value),
                    ))
                })?,
        };
        if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
            return Err(ApiErrorResponse::bad_request(ApiError::invalid_field(
                "year",
                format!("Year must be between {} and {}", MIN_YEAR, MAX_YEAR),
            )));
        }

        let payment_date = match self.payment_date {
            None | Some(Value::Null) => today,
            Some(value) => value
                .as_str()
                .and_then(|text| NaiveDate::parse_from_str(text.trim(), "%Y-%m-%d").ok())
                .ok_or_else(|| {
                    ApiErrorResponse::bad_request(ApiError::invalid_field(
                        "payment_date",
                        format!("Payment date must be a YYYY-MM-DD string, got {}", value),
                    ))
                })?,
        };

        let total = match self.total_monthly_salary {
            None | Some(Value::Null) => {
                return Err(ApiErrorResponse::bad_request(ApiError::missing_field(
                    AmountField::TotalMonthlySalary.key(),
                )));
            }
            Some(value) => json_amount(&value, AmountField::TotalMonthlySalary)?,
        };
        let advance = match self.advance_amount_paid {
            None | Some(Value::Null) => 0.0,
            Some(value) => json_amount(&value, AmountField::AdvanceAmountPaid)?,
        };

        Ok(NewSalaryRecord {
            employee_id,
            employee_name,
            month,
            year,
            payment_date,
            total_monthly_salary: total,
            advance_amount_paid: advance,
        })
    }
}

/// Request body for `PUT /salaries/{id}/advance`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReplaceAdvanceRequest {
    /// The new advance amount; must be a JSON number.
    #[serde(default)]
    pub advance_amount_paid: Option<Value>,
}

impl ReplaceAdvanceRequest {
    /// Returns the new advance, checking presence and type.
    pub fn advance(&self) -> Result<f64, ApiErrorResponse> {
        match &self.advance_amount_paid {
            None | Some(Value::Null) => Err(ApiErrorResponse::bad_request(ApiError::missing_field(
                AmountField::AdvanceAmountPaid.key(),
            ))),
            Some(value) => Ok(json_amount(value, AmountField::AdvanceAmountPaid)?),
        }
    }
}

/// Request body for `POST /salaries/preview`.
///
/// Values may be numbers or the raw text typed into a form.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PreviewRequest {
    /// Total monthly salary as typed.
    #[serde(default)]
    pub total_monthly_salary: Option<Value>,
    /// Advance amount as typed.
    #[serde(default)]
    pub advance_amount_paid: Option<Value>,
}

impl PreviewRequest {
    /// The total as text.
    pub fn total_text(&self) -> String {
        preview_text(self.total_monthly_salary.as_ref())
    }

    /// The advance as text.
    pub fn advance_text(&self) -> String {
        preview_text(self.advance_amount_paid.as_ref())
    }
}

/// Query parameters for `GET /salaries`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListSalariesQuery {
    /// Only records for this employee.
    pub employee_id: Option<String>,
    /// Only records for this month name.
    pub month: Option<String>,
    /// Only records for this year.
    pub year: Option<i32>,
    /// Only records with this payment status.
    pub payment_status: Option<String>,
    /// Maximum number of records to return.
    pub limit: Option<usize>,
    /// Number of matching records to skip.
    pub skip: Option<usize>,
}

impl ListSalariesQuery {
    /// Builds the store filter, applying the configured page size limits.
    pub fn into_filter(self, listing: &ListingConfig) -> Result<SalaryFilter, ApiErrorResponse> {
        let month = match self.month.as_deref().map(str::trim) {
            None | Some("") => None,
            Some(text) => Some(text.parse::<Month>().map_err(|e| {
                ApiErrorResponse::bad_request(ApiError::invalid_field("month", e.to_string()))
            })?),
        };

        let payment_status = match self.payment_status.as_deref().map(str::trim) {
            None | Some("") => None,
            Some(text) => Some(text.parse::<PaymentStatus>().map_err(|e| {
                ApiErrorResponse::bad_request(ApiError::invalid_field(
                    "payment_status",
                    e.to_string(),
                ))
            })?),
        };

        let employee_id = self
            .employee_id
            .map(|id| id.trim().to_string())
            .filter(|id| !id.is_empty());

        Ok(SalaryFilter {
            employee_id,
            month,
            year: self.year,
            payment_status,
            limit: Some(listing.effective_limit(self.limit)),
            skip: self.skip.unwrap_or(0),
        })
    }
}

fn required_text(value: Option<Value>, field: &str) -> Result<String, ApiErrorResponse> {
    match value {
        None | Some(Value::Null) => {
            Err(ApiErrorResponse::bad_request(ApiError::missing_field(field)))
        }
        Some(Value::String(text)) if text.trim().is_empty() => {
            Err(ApiErrorResponse::bad_request(ApiError::missing_field(field)))
        }
        Some(Value::String(text)) => Ok(text.trim().to_string()),
        Some(other) => Err(ApiErrorResponse::bad_request(ApiError::invalid_field(
            field,
            format!("{} must be a string, got {}", field, other),
        ))),
    }
}

/// Reads a JSON number as an amount. Anything else is a type mismatch.
fn json_amount(value: &Value, field: AmountField) -> Result<f64, EngineError> {
    value.as_f64().ok_or(EngineError::TypeMismatch { field })
}

fn preview_text(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(text)) => text.clone(),
        Some(Value::Number(number)) => number.to_string(),
        _ => String::new(),
    }
}
