use std::collections::HashMap;

use log::{debug, trace};

use crate::{errors::errors::ErrorImpl, types::types::DataType};

/// Declared variables of one session.
///
/// Reads only need `&SymbolTable`, so any number of checks may share a table
/// across threads. `declare` takes `&mut self`: writers must be serialized by
/// the caller, either by finishing all declarations before checking or by
/// wrapping the table in a lock.
#[derive(Debug, Default, Clone)]
pub struct SymbolTable {
    variable_lookup: HashMap<String, DataType>,
}

impl SymbolTable {
    pub fn new() -> Self {
        SymbolTable {
            variable_lookup: HashMap::new(),
        }
    }

    /// Declares `variable_name` with `variable_type`.
    ///
    /// Returns false, leaving the existing entry untouched, if the name is
    /// already declared.
    pub fn declare(&mut self, variable_name: &str, variable_type: DataType) -> bool {
        self.try_declare(variable_name, variable_type).is_ok()
    }

    pub fn try_declare(
        &mut self,
        variable_name: &str,
        variable_type: DataType,
    ) -> Result<(), ErrorImpl> {
        if self.variable_lookup.contains_key(variable_name) {
            debug!("rejected redeclaration of `{}`", variable_name);
            Err(ErrorImpl::VariableAlreadyDeclared {
                variable: variable_name.to_string(),
            })
        } else {
            trace!("declared `{}` as {}", variable_name, variable_type);
            self.variable_lookup
                .insert(variable_name.to_string(), variable_type);
            Ok(())
        }
    }

    pub fn lookup(&self, variable_name: &str) -> Option<DataType> {
        self.variable_lookup.get(variable_name).copied()
    }

    pub fn contains(&self, variable_name: &str) -> bool {
        self.variable_lookup.contains_key(variable_name)
    }

    pub fn len(&self) -> usize {
        self.variable_lookup.len()
    }

    pub fn is_empty(&self) -> bool {
        self.variable_lookup.is_empty()
    }
}
