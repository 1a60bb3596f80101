//! # Bank Data Common Library
//!
//! Shared code for the Bank Data web application including:
//! - Database initialization, schema, and row models
//! - Configuration loading and root folder resolution
//! - Password hashing helpers and admin bootstrap
//! - Demo seed data

pub mod auth;
pub mod config;
pub mod db;
pub mod error;

pub use error::{Error, Result};
