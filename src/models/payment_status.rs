//! Payment status classification.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// How much of a month's salary has been settled.
///
/// # Example
///
/// ```
/// use salary_ledger::models::PaymentStatus;
///
/// let status: PaymentStatus = "Partially Paid".parse().unwrap();
/// assert_eq!(status, PaymentStatus::PartiallyPaid);
/// assert_eq!(status.to_string(), "Partially Paid");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PaymentStatus {
    /// No advance has been paid yet.
    Pending,
    /// Some advance has been paid and a balance remains.
    #[serde(rename = "Partially Paid")]
    PartiallyPaid,
    /// Nothing remains payable.
    Paid,
}

impl PaymentStatus {
    /// The display label, identical to the serialized form.
    pub fn label(self) -> &'static str {
        match self {
            PaymentStatus::Pending => "Pending",
            PaymentStatus::PartiallyPaid => "Partially Paid",
            PaymentStatus::Paid => "Paid",
        }
    }
}

impl fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Error returned when a payment status label is not recognised.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownPaymentStatus(pub String);

impl fmt::Display for UnknownPaymentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown payment status '{}' (expected Pending, Partially Paid or Paid)",
            self.0
        )
    }
}

impl std::error::Error for UnknownPaymentStatus {}

impl FromStr for PaymentStatus {
    type Err = UnknownPaymentStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pending" => Ok(PaymentStatus::Pending),
            "partially paid" | "partially_paid" => Ok(PaymentStatus::PartiallyPaid),
            "paid" => Ok(PaymentStatus::Paid),
            _ => Err(UnknownPaymentStatus(s.to_string())),
        }
    }
}
