//! Type checking for assignment statements.
//!
//! This module resolves the static type of expressions and checks whether
//! the result may be assigned to a declared variable:
//!
//! - Resolving literal and variable expressions against a symbol table
//! - Looking up the declared type of the assignment target
//! - Applying the implicit widening rules of the type domain
//!
//! Checks never mutate the symbol table, so a failed check leaves the session
//! usable for the next one.

pub mod resolve;
pub mod type_checker;
