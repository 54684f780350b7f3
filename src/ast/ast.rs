use std::{fmt::Display, str::FromStr};

use crate::errors::errors::ErrorImpl;

use super::expressions::{Literal, LiteralExpr, VariableExpr};

/// Expression
///
/// Every kind of expression that can appear on the right-hand side of an
/// assignment. New kinds are added as variants so that every consumer has to
/// handle them.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Literal(LiteralExpr),
    Variable(VariableExpr),
}

impl Expr {
    pub fn literal(value: impl Into<Literal>) -> Self {
        Expr::Literal(LiteralExpr::new(value))
    }

    pub fn variable(name: impl Into<String>) -> Self {
        Expr::Variable(VariableExpr::new(name))
    }
}

impl From<Literal> for Expr {
    fn from(value: Literal) -> Self {
        Expr::Literal(LiteralExpr { value })
    }
}

impl Display for Expr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Expr::Literal(literal) => write!(f, "{}", literal.value),
            Expr::Variable(variable) => write!(f, "{}", variable.name),
        }
    }
}

/// Reads a single operand: a literal if it looks like one, otherwise an
/// identifier.
impl FromStr for Expr {
    type Err = ErrorImpl;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        let token = token.trim();
        if is_identifier(token) {
            return Ok(Expr::variable(token));
        }
        token.parse::<Literal>().map(Expr::from)
    }
}

pub fn is_identifier(token: &str) -> bool {
    let mut chars = token.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        _ => false,
    }
}
