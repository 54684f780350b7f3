//! Checking sessions.
//!
//! A session owns one symbol table and one type checker, tracks the line
//! the caller is currently checking and renders one diagnostic line per
//! check.

pub mod session;
