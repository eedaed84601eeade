//! Centralized error handling for the student lookup service
//!
//! # Usage
//!
//! ```rust
//! use student_lookup::errors::{AppError, AppResult};
//!
//! fn check(query: &str) -> AppResult<&str> {
//!     if query.is_empty() {
//!         return Err(AppError::validation("Query parameter is required"));
//!     }
//!     Ok(query)
//! }
//! ```

pub mod types;

pub use types::*;

/// Convenience type alias for Results using AppError
pub type AppResult<T> = Result<T, AppError>;

/// Convenience type alias for Source Results
pub type SourceResult<T> = Result<T, SourceError>;
