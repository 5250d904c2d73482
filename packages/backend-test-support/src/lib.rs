//! Helpers shared by the backend's integration test binaries.
//!
//! Nothing here depends on backend types, so the assertions double as a check
//! on the wire contract.

pub mod logging;
pub mod problem_details;
pub mod unique_helpers;
