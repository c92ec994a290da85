//! Salary record persistence.
//!
//! [`SalaryStore`] is the persistence contract used by the HTTP API. Every write
//! path re-derives the remaining salary and payment status through the
//! calculation engine under the same lock that saves the record, so a stored
//! record never disagrees with its own amounts.

mod memory;

use crate::error::StoreResult;
use crate::models::{Month, PaymentStatus, SalaryRecord};

use uuid::Uuid;

pub use memory::InMemorySalaryStore;

/// Criteria for listing salary records.
///
/// Unset criteria match every record. `skip` is applied before `limit`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SalaryFilter {
    /// Only records for this employee.
    pub employee_id: Option<String>,
    /// Only records for this month.
    pub month: Option<Month>,
    /// Only records for this year.
    pub year: Option<i32>,
    /// Only records with this status.
    pub payment_status: Option<PaymentStatus>,
    /// Maximum number of records to return.
    pub limit: Option<usize>,
    /// Number of matching records to skip.
    pub skip: usize,
}

impl SalaryFilter {
    /// Returns true if the record satisfies every set criterion.
    pub fn matches(&self, record: &SalaryRecord) -> bool {
        self.employee_id
            .as_deref()
            .is_none_or(|id| record.employee_id() == id)
            && self.month.is_none_or(|month| record.month() == month)
            && self.year.is_none_or(|year| record.year() == year)
            && self
                .payment_status
                .is_none_or(|status| record.payment_status() == status)
    }
}

/// One page of a listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SalaryPage {
    /// The records on this page, newest period first.
    pub records: Vec<SalaryRecord>,
    /// Number of records matching the filter across all pages.
    pub total: usize,
}

/// Persistence contract for salary records.
///
/// Records are unique per employee, year and month.
pub trait SalaryStore: Send + Sync {
    /// Re-derives and saves a new record.
    ///
    /// Fails with `DuplicateRecord` if the employee already has a record for the
    /// same period.
    fn create(&self, record: SalaryRecord) -> StoreResult<SalaryRecord>;

    /// Looks up a record by id.
    fn find_by_id(&self, id: Uuid) -> StoreResult<Option<SalaryRecord>>;

    /// Lists records matching the filter, newest period first.
    fn find(&self, filter: &SalaryFilter) -> StoreResult<SalaryPage>;

    /// Replaces a record's advance and saves the re-derived record.
    fn replace_advance(&self, id: Uuid, advance: f64) -> StoreResult<SalaryRecord>;

    /// Deletes a record, returning false if it did not exist.
    fn delete_by_id(&self, id: Uuid) -> StoreResult<bool>;
}
