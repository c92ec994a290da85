//! Response types for the salary ledger API.
//!
//! This module defines the record views returned on success and the error
//! response structures returned on failure.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculation::format_decimal_currency;
use crate::error::{EngineError, StoreError};
use crate::models::SalaryRecord;

/// Formatted amounts for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AmountDisplay {
    /// Total monthly salary.
    pub total_monthly_salary: String,
    /// Advance paid.
    pub advance_amount_paid: String,
    /// Remaining salary payable.
    pub remaining_salary_payable: String,
}

/// A salary record as returned by the API.
#[derive(Debug, Clone, Serialize)]
pub struct SalaryRecordView {
    /// The stored record, including its derived fields.
    #[serde(flatten)]
    pub record: SalaryRecord,
    /// The advance as a percentage of the total.
    pub advance_percentage: Decimal,
    /// The amounts formatted with the configured currency symbol.
    pub display: AmountDisplay,
}

impl SalaryRecordView {
    /// Builds the view of a record.
    pub fn new(record: SalaryRecord, currency_symbol: &str) -> Self {
        let symbol = Some(currency_symbol);
        let display = AmountDisplay {
            total_monthly_salary: format_decimal_currency(record.total_monthly_salary(), symbol),
            advance_amount_paid: format_decimal_currency(record.advance_amount_paid(), symbol),
            remaining_salary_payable: format_decimal_currency(
                record.remaining_salary_payable(),
                symbol,
            ),
        };
        Self {
            advance_percentage: record.advance_percentage(),
            display,
            record,
        }
    }
}

/// Response body for record listings.
#[derive(Debug, Clone, Serialize)]
pub struct SalaryListResponse {
    /// Records on this page.
    pub records: Vec<SalaryRecordView>,
    /// Number of records matching the filter across all pages.
    pub total: usize,
    /// Page size applied.
    pub limit: usize,
    /// Number of matching records skipped.
    pub skip: usize,
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// The request field the error is attributed to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            field: None,
            details: None,
        }
    }

    /// Attributes the error to a request field.
    pub fn for_field(mut self, field: impl Into<String>) -> Self {
        self.field = Some(field.into());
        self
    }

    /// Attaches details to the error.
    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }

    /// Creates a missing field error response.
    pub fn missing_field(field: &str) -> Self {
        Self::new("MISSING_FIELD", format!("missing field: {}", field))
            .for_field(field)
            .with_details(format!(
                "Required field '{}' was not provided in the request",
                field
            ))
    }

    /// Creates an invalid field error response.
    pub fn invalid_field(field: &str, message: impl Into<String>) -> Self {
        Self::new("INVALID_FIELD", message).for_field(field)
    }
}

/// API error with HTTP status code.
#[derive(Debug)]
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl ApiErrorResponse {
    /// A 400 response carrying the given error.
    pub fn bad_request(error: ApiError) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            error,
        }
    }
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

fn engine_error_code(error: &EngineError) -> &'static str {
    match error {
        EngineError::TypeMismatch { .. } => "TYPE_MISMATCH",
        EngineError::NotANumber { .. } => "NOT_A_NUMBER",
        EngineError::NotFinite { .. } => "NOT_FINITE",
        EngineError::Negative { .. }
        | EngineError::NegativeTotal
        | EngineError::NegativeAdvance => "NEGATIVE_AMOUNT",
        EngineError::OutOfRange { .. } => "AMOUNT_OUT_OF_RANGE",
        EngineError::ExcessPrecision { .. } => "EXCESS_PRECISION",
        EngineError::AdvanceExceedsTotal => "ADVANCE_EXCEEDS_TOTAL",
        EngineError::UnclassifiableState => "CALCULATION_ERROR",
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        if !error.is_client_error() {
            return ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::new(engine_error_code(&error), "Calculation failed")
                    .with_details(error.to_string()),
            };
        }

        let mut api_error = ApiError::new(engine_error_code(&error), error.to_string());
        if let Some(field) = error.field() {
            api_error = api_error.for_field(field.key());
        }
        ApiErrorResponse::bad_request(api_error)
    }
}

impl From<StoreError> for ApiErrorResponse {
    fn from(error: StoreError) -> Self {
        let message = error.to_string();
        match error {
            StoreError::Calculation(engine_error) => engine_error.into(),
            StoreError::DuplicateRecord { .. } => ApiErrorResponse {
                status: StatusCode::CONFLICT,
                error: ApiError::new("DUPLICATE_RECORD", message).with_details(
                    "Only one salary record is allowed per employee per month",
                ),
            },
            StoreError::RecordNotFound { .. } => ApiErrorResponse {
                status: StatusCode::NOT_FOUND,
                error: ApiError::new("RECORD_NOT_FOUND", message),
            },
            StoreError::Unavailable { .. } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::new("STORE_UNAVAILABLE", "Salary store unavailable")
                    .with_details(message),
            },
        }
    }
}
