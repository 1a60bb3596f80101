//! Database queries for bankdata-web
//!
//! Thin query functions over the shared SQLite pool; schema lives in
//! bankdata-common.

pub mod budgets;
pub mod documents;
pub mod stats;
pub mod users;
