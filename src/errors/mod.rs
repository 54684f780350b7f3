//! Error types and error handling for the checkers.
//!
//! This module defines the error types used by every checking phase.
//! It includes:
//!
//! - One error enum covering assignment, declaration and balance failures
//! - An error structure carrying the source line it was reported on
//! - Error names and helpful suggestions for diagnostics

pub mod errors;
