//! HTTP API for bankdata-web
//!
//! Route groups:
//! - `auth`: login
//! - `documents`: list, multipart upload, delete
//! - `budgets`: CRUD for budget line items
//! - `dashboard`: summary statistics
//! - `monitoring`: upload aggregates for the charts page
//! - `init_db`: manual database initialization + demo seed
//! - `health`: service health check
//! - `ui`: embedded HTML pages and static assets

pub mod auth;
pub mod budgets;
pub mod dashboard;
pub mod documents;
pub mod health;
pub mod init_db;
pub mod monitoring;
pub mod ui;
