use std::rc::Rc;

use log::debug;

use crate::{
    ast::ast::Expr,
    errors::errors::{Error, ErrorImpl},
    symbols::symbol_table::SymbolTable,
    type_checker::type_checker::{Assignment, CheckResult, TypeChecker},
    types::types::DataType,
    Position,
};

#[derive(Debug)]
pub struct Session {
    table: SymbolTable,
    type_checker: TypeChecker,
    source: Rc<String>,
}

impl Session {
    /// Starts a session at line 1. `source` names where the checked
    /// statements came from and is only used in diagnostics.
    pub fn new(source: &str) -> Self {
        let mut type_checker = TypeChecker::new();
        type_checker.set_current_line(1);

        Session {
            table: SymbolTable::new(),
            type_checker,
            source: Rc::new(source.to_string()),
        }
    }

    pub fn declare(&mut self, name: &str, ty: DataType) -> bool {
        self.table.declare(name, ty)
    }

    pub fn try_declare(&mut self, name: &str, ty: DataType) -> Result<(), Error> {
        self.table
            .try_declare(name, ty)
            .map_err(|error| self.positioned(error))
    }

    pub fn check_assignment(&self, target: &str, value: &Expr) -> CheckResult {
        self.type_checker.check_assignment(&self.table, target, value)
    }

    pub fn set_line(&mut self, line: u32) {
        self.type_checker.set_current_line(line);
    }

    pub fn line(&self) -> u32 {
        self.type_checker.get_current_line().unwrap_or(0)
    }

    pub fn next_line(&mut self) {
        let line = self.line();
        self.set_line(line.saturating_add(1));
    }

    pub fn symbols(&self) -> &SymbolTable {
        &self.table
    }

    pub fn positioned(&self, error: ErrorImpl) -> Error {
        Error::new(error, Position(self.line(), Rc::clone(&self.source)))
    }

    /// Checks `target = value` and renders the outcome as a diagnostic line.
    pub fn report(&self, target: &str, value: &Expr) -> String {
        self.render(&self.check_assignment(target, value))
    }

    /// Renders a check result at the current line.
    pub fn render(&self, result: &CheckResult) -> String {
        let rendered = match result {
            Ok(assignment) => render_assignment(self.line(), assignment),
            Err(error) => self.positioned(error.clone()).to_string(),
        };
        debug!("{}: {}", self.source, rendered);
        rendered
    }
}

pub fn render_assignment(line: u32, assignment: &Assignment) -> String {
    format!(
        "Assignment OK (line {}): {} ({}) = expression of type {}",
        line, assignment.target, assignment.target_type, assignment.source_type
    )
}
