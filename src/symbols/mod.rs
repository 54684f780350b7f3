//! Flat symbol table.
//!
//! Maps each declared identifier to its type for the lifetime of a checking
//! session. There are no nested scopes and no way to remove or retype a
//! symbol once declared.

pub mod symbol_table;
