//! Application services: read-side queries and the question authoring workflow.

pub mod catalog;
pub mod questions;
