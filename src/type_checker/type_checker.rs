use log::debug;

use crate::{
    ast::ast::Expr,
    errors::errors::ErrorImpl,
    symbols::symbol_table::SymbolTable,
    types::types::{can_convert, DataType},
};

use super::resolve::resolve_type;

/// A successful assignment check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment {
    pub target: String,
    pub target_type: DataType,
    pub source_type: DataType,
}

pub type CheckResult = Result<Assignment, ErrorImpl>;

/// Checks assignments against a symbol table.
///
/// The only state is the line number reported alongside results; it is never
/// consulted when deciding whether an assignment is valid.
#[derive(Debug, Clone, Default)]
pub struct TypeChecker {
    current_line: Option<u32>,
}

impl TypeChecker {
    pub fn new() -> Self {
        TypeChecker { current_line: None }
    }

    pub fn set_current_line(&mut self, line: u32) {
        self.current_line = Some(line);
    }

    pub fn get_current_line(&self) -> Option<u32> {
        self.current_line
    }

    /// Checks `target = value`.
    ///
    /// The target is looked up first, so an undeclared target is reported even
    /// when the value would not resolve either.
    pub fn check_assignment(&self, table: &SymbolTable, target: &str, value: &Expr) -> CheckResult {
        let target_type = table
            .lookup(target)
            .ok_or_else(|| ErrorImpl::UndeclaredTarget {
                variable: target.to_string(),
            })?;

        let source_type = resolve_type(value, table)?;

        if !can_convert(source_type, target_type) {
            debug!(
                "line {:?}: rejected {} -> {} for `{}`",
                self.current_line, source_type, target_type, target
            );
            return Err(ErrorImpl::TypeMismatch {
                from: source_type,
                to: target_type,
            });
        }

        Ok(Assignment {
            target: target.to_string(),
            target_type,
            source_type,
        })
    }
}
