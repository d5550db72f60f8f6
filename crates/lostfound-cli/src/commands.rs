// Rust guideline compliant 2026-10-19

//! Command implementations for the lostfound CLI.

pub mod auth;
pub mod dashboard;
pub mod files;
pub mod init;
pub mod public;
pub mod report;
pub mod review;
