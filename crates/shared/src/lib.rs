//! Shared types, errors, and configuration for Leadcost.
//!
//! This crate provides common types used across all other crates:
//! - Calendar months (`YearMonth`) used to key expense records
//! - Minor-unit money conversion with decimal precision
//! - Project filters (`"all"` or a named project)
//! - Application-wide error types
//! - Configuration management

pub mod config;
pub mod error;
pub mod types;

pub use config::AppConfig;
pub use error::{AppError, AppResult};
