//! Parenthesis balance checking.
//!
//! Only `(` and `)` are tracked; every other character is ignored.

pub mod balance;
