//! Primitive type domain.
//!
//! This module defines the closed set of primitive types an assignment can
//! involve and the implicit conversion relation between them:
//!
//! - The `DataType` enumeration and its display names
//! - The static table of allowed widening conversions
//! - Lookup of a type by its source name
//!
//! Adding a type means adding its conversions to `CONVERSION_TABLE` by hand;
//! any pair that is not listed is rejected.

pub mod types;
