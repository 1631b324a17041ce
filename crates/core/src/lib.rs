//! Shared domain types and helpers used by every Blogpad crate.

pub mod change;
pub mod error;
pub mod types;
