//! Repository functions for the domain layer (generic over ConnectionTrait).

pub mod licences;
pub mod questions;
pub mod versions;
