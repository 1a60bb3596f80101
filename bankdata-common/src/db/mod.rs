//! Database access shared across the Bank Data crates

pub mod init;
pub mod models;
pub mod seed;

pub use init::init_database;
