//! Live salary preview for data-entry screens.
//!
//! Mirrors the server-side calculation while the operator is still typing. It
//! calls the same engine the record store uses, so the status shown before
//! submission is the one the server will compute.

mod live;

pub use live::{INVALID_ADVANCE_EXCEEDS_LABEL, INVALID_LABEL, LivePreview};
