//! Core domain types and logic.

pub mod date_key;
pub mod transaction;
pub mod query;
pub mod aggregate;
pub mod error;
