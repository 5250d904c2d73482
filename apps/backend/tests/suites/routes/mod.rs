pub mod error_shape;
pub mod questions;
