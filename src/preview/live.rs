//! Evaluation of typed salary and advance text into a preview.

use rust_decimal::Decimal;
use serde::Serialize;

use crate::calculation::{calculate_salary_details, format_decimal_currency, percentage_of};
use crate::error::EngineError;
use crate::models::SalaryInput;

/// Status label shown for input that cannot be calculated.
pub const INVALID_LABEL: &str = "Invalid";

/// Status label shown when the advance is larger than the total.
pub const INVALID_ADVANCE_EXCEEDS_LABEL: &str = "Invalid — advance exceeds total";

/// What a data-entry screen shows for the amounts typed so far.
///
/// Building a preview never fails. Invalid input yields an invalid status label
/// and no figures.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LivePreview {
    /// Remaining salary payable, when the input is valid.
    pub remaining_salary_payable: Option<Decimal>,
    /// Remaining salary formatted for display, when the input is valid.
    pub remaining_display: Option<String>,
    /// Advance as a percentage of the total, when the input is valid.
    pub advance_percentage: Option<Decimal>,
    /// Payment status label, or one of the invalid labels.
    pub status_label: String,
    /// Whether the input would be accepted on submission.
    pub valid: bool,
}

impl LivePreview {
    /// Evaluates typed total and advance text.
    ///
    /// A blank advance counts as zero. A blank or unparseable total, or any
    /// engine failure, yields an invalid preview.
    ///
    /// # Examples
    ///
    /// ```
    /// use salary_ledger::preview::{INVALID_ADVANCE_EXCEEDS_LABEL, LivePreview};
    ///
    /// let preview = LivePreview::evaluate("5000", "2000", "$");
    /// assert_eq!(preview.status_label, "Partially Paid");
    /// assert_eq!(preview.remaining_display.as_deref(), Some("$3,000.00"));
    ///
    /// let preview = LivePreview::evaluate("3000", "5000", "$");
    /// assert_eq!(preview.status_label, INVALID_ADVANCE_EXCEEDS_LABEL);
    /// ```
    pub fn evaluate(total_text: &str, advance_text: &str, currency_symbol: &str) -> Self {
        let Some(total) = parse_amount(total_text, None) else {
            return Self::invalid(INVALID_LABEL);
        };
        let Some(advance) = parse_amount(advance_text, Some(0.0)) else {
            return Self::invalid(INVALID_LABEL);
        };

        match calculate_salary_details(SalaryInput::new(total, advance)) {
            Ok(details) => {
                let remaining = details.remaining_salary_payable();
                Self {
                    remaining_salary_payable: Some(remaining),
                    remaining_display: Some(format_decimal_currency(
                        remaining,
                        Some(currency_symbol),
                    )),
                    advance_percentage: Some(percentage_of(
                        details.advance_amount_paid(),
                        details.total_monthly_salary(),
                    )),
                    status_label: details.payment_status().to_string(),
                    valid: true,
                }
            }
            Err(EngineError::AdvanceExceedsTotal) => Self::invalid(INVALID_ADVANCE_EXCEEDS_LABEL),
            Err(_) => Self::invalid(INVALID_LABEL),
        }
    }

    fn invalid(label: &str) -> Self {
        Self {
            remaining_salary_payable: None,
            remaining_display: None,
            advance_percentage: None,
            status_label: label.to_string(),
            valid: false,
        }
    }
}

/// Parses typed text, returning `blank` for empty input.
fn parse_amount(text: &str, blank: Option<f64>) -> Option<f64> {
    let text = text.trim();
    if text.is_empty() {
        return blank;
    }
    text.replace(',', "").parse::<f64>().ok()
}
