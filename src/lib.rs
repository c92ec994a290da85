//! Salary ledger
//!
//! This crate records monthly salaries and advance payments, computes the
//! remaining salary payable and a payment status, and serves the records over
//! HTTP. All derived values come from the [`calculation`] engine, whichever layer
//! asks for them.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
pub mod preview;
pub mod store;
