//! Adapters for external dependencies.

pub mod licences_sea;
pub mod questions_sea;
pub mod versions_sea;
