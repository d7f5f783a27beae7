//! CLI command implementations.

pub mod validate;
pub mod compose;
pub mod refs;
