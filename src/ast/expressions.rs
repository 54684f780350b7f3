use std::{fmt::Display, str::FromStr};

use crate::{errors::errors::ErrorImpl, types::types::DataType};

// LITERALS

/// A literal value. Exactly one variant is ever populated, so its type is
/// always known.
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    Char(char),
    Int(i64),
    Float(f64),
    String(String),
}

impl Literal {
    pub fn data_type(&self) -> DataType {
        match self {
            Literal::Char(_) => DataType::Char,
            Literal::Int(_) => DataType::Int,
            Literal::Float(_) => DataType::Float,
            Literal::String(_) => DataType::String,
        }
    }
}

impl From<char> for Literal {
    fn from(value: char) -> Self {
        Literal::Char(value)
    }
}

impl From<i64> for Literal {
    fn from(value: i64) -> Self {
        Literal::Int(value)
    }
}

impl From<f64> for Literal {
    fn from(value: f64) -> Self {
        Literal::Float(value)
    }
}

impl From<&str> for Literal {
    fn from(value: &str) -> Self {
        Literal::String(value.to_string())
    }
}

impl From<String> for Literal {
    fn from(value: String) -> Self {
        Literal::String(value)
    }
}

impl Display for Literal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Literal::Char(value) => write!(f, "'{}'", value),
            Literal::Int(value) => write!(f, "{}", value),
            Literal::Float(value) => write!(f, "{:?}", value),
            Literal::String(value) => write!(f, "{:?}", value),
        }
    }
}

/// Accepts `'c'`, `"text"` (no embedded quotes), integers such as `-12` and decimals such as `3.14`.
impl FromStr for Literal {
    type Err = ErrorImpl;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        let invalid = || ErrorImpl::InvalidLiteral {
            token: token.to_string(),
        };

        if let Some(inner) = token
            .strip_prefix('\'')
            .and_then(|rest| rest.strip_suffix('\''))
        {
            let mut chars = inner.chars();
            return match (chars.next(), chars.next()) {
                (Some(c), None) => Ok(Literal::Char(c)),
                _ => Err(invalid()),
            };
        }

        if token.len() >= 2 {
            if let Some(inner) = token
                .strip_prefix('"')
                .and_then(|rest| rest.strip_suffix('"'))
            {
                if inner.contains('"') {
                    return Err(invalid());
                }
                return Ok(Literal::String(inner.to_string()));
            }
        }

        let digits = token
            .strip_prefix(|c: char| c == '-' || c == '+')
            .unwrap_or(token);
        if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit() || c == '.') {
            return Err(invalid());
        }

        if digits.contains('.') {
            token.parse::<f64>().map(Literal::Float).map_err(|_| invalid())
        } else {
            token.parse::<i64>().map(Literal::Int).map_err(|_| invalid())
        }
    }
}

/// Literal Expression
/// A literal used as an operand.
#[derive(Debug, Clone, PartialEq)]
pub struct LiteralExpr {
    pub value: Literal,
}

impl LiteralExpr {
    pub fn new(value: impl Into<Literal>) -> Self {
        LiteralExpr {
            value: value.into(),
        }
    }
}

/// Variable Expression
/// A reference to a declared variable. Its type is looked up when the
/// expression is checked, not when it is built.
#[derive(Debug, Clone, PartialEq)]
pub struct VariableExpr {
    pub name: String,
}

impl VariableExpr {
    pub fn new(name: impl Into<String>) -> Self {
        VariableExpr { name: name.into() }
    }
}
