//! HTTP API module for the salary ledger.
//!
//! This module provides the REST endpoints for creating, listing, updating and
//! deleting salary records, and for previewing a calculation while typing.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{
    CreateSalaryRequest, ListSalariesQuery, MAX_YEAR, MIN_YEAR, PreviewRequest,
    ReplaceAdvanceRequest,
};
pub use response::{
    AmountDisplay, ApiError, ApiErrorResponse, SalaryListResponse, SalaryRecordView,
};
pub use state::AppState;
