use log::trace;

use crate::{
    ast::ast::Expr, errors::errors::ErrorImpl, symbols::symbol_table::SymbolTable,
    types::types::DataType,
};

/// Computes the static type of `expr` without evaluating it.
pub fn resolve_type(expr: &Expr, table: &SymbolTable) -> Result<DataType, ErrorImpl> {
    match expr {
        Expr::Literal(literal) => Ok(literal.value.data_type()),
        Expr::Variable(variable) => {
            let ty = table
                .lookup(&variable.name)
                .ok_or_else(|| ErrorImpl::UndeclaredSource {
                    variable: variable.name.clone(),
                })?;
            trace!("resolved `{}` to {}", variable.name, ty);
            Ok(ty)
        }
    }
}
