use std::fmt::Display;

use thiserror::Error;

use crate::{types::types::DataType, Position};

#[derive(Debug, Clone)]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_internal_error(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UndeclaredTarget { .. } => "UndeclaredTarget",
            ErrorImpl::UndeclaredSource { .. } => "UndeclaredSource",
            ErrorImpl::TypeMismatch { .. } => "TypeMismatch",
            ErrorImpl::VariableAlreadyDeclared { .. } => "VariableAlreadyDeclared",
            ErrorImpl::UnknownType { .. } => "UnknownType",
            ErrorImpl::InvalidLiteral { .. } => "InvalidLiteral",
            ErrorImpl::InvalidDeclaration { .. } => "InvalidDeclaration",
            ErrorImpl::InvalidAssignment { .. } => "InvalidAssignment",
            ErrorImpl::UnmatchedCloseParen { .. } => "UnmatchedCloseParen",
            ErrorImpl::UnclosedOpenParen { .. } => "UnclosedOpenParen",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UndeclaredTarget { variable } => ErrorTip::Suggestion(format!(
                "Declare `{}` before assigning to it",
                variable
            )),
            ErrorImpl::UndeclaredSource { variable } => ErrorTip::Suggestion(format!(
                "Declare `{}` before using it in an expression",
                variable
            )),
            ErrorImpl::TypeMismatch { from, to } => ErrorTip::Suggestion(format!(
                "`{}` does not widen to `{}`, narrowing needs an explicit cast",
                from, to
            )),
            ErrorImpl::VariableAlreadyDeclared { variable } => {
                ErrorTip::Suggestion(format!("Variable `{}` already declared", variable))
            }
            ErrorImpl::UnknownType { .. } => ErrorTip::Suggestion(String::from(
                "Expected one of `void`, `char`, `int`, `float`, `string`",
            )),
            ErrorImpl::InvalidLiteral { .. } => ErrorTip::None,
            ErrorImpl::InvalidDeclaration { .. } => {
                ErrorTip::Suggestion(String::from("Declarations are written as `name:type`"))
            }
            ErrorImpl::InvalidAssignment { .. } => {
                ErrorTip::Suggestion(String::from("Assignments are written as `target=operand`"))
            }
            ErrorImpl::UnmatchedCloseParen { .. } => ErrorTip::Suggestion(String::from(
                "More closing parentheses than opening ones",
            )),
            ErrorImpl::UnclosedOpenParen { .. } => {
                ErrorTip::Suggestion(String::from("This parenthesis is never closed"))
            }
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} (line {}): {}",
            self.internal_error.label(),
            self.position.0,
            self.internal_error
        )
    }
}

impl std::error::Error for Error {}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ErrorImpl {
    #[error("Variable '{variable}' is not declared")]
    UndeclaredTarget { variable: String },
    #[error("Variable '{variable}' used in expression is not declared")]
    UndeclaredSource { variable: String },
    #[error("Type mismatch: cannot assign {from} to {to}")]
    TypeMismatch { from: DataType, to: DataType },
    #[error("Variable '{variable}' already declared")]
    VariableAlreadyDeclared { variable: String },
    #[error("unknown type {type_:?}")]
    UnknownType { type_: String },
    #[error("invalid literal {token:?}")]
    InvalidLiteral { token: String },
    #[error("invalid declaration {text:?}")]
    InvalidDeclaration { text: String },
    #[error("invalid assignment {text:?}")]
    InvalidAssignment { text: String },
    #[error("unmatched ')' at offset {offset}")]
    UnmatchedCloseParen { offset: usize },
    #[error("unclosed '(' at offset {offset}")]
    UnclosedOpenParen { offset: usize },
}

impl ErrorImpl {
    /// Diagnostic prefix: semantic failures come from checking well-formed
    /// input, input failures from reading it.
    pub fn label(&self) -> &'static str {
        match self {
            ErrorImpl::UndeclaredTarget { .. }
            | ErrorImpl::UndeclaredSource { .. }
            | ErrorImpl::TypeMismatch { .. }
            | ErrorImpl::VariableAlreadyDeclared { .. } => "Semantic Error",
            ErrorImpl::UnknownType { .. }
            | ErrorImpl::InvalidLiteral { .. }
            | ErrorImpl::InvalidDeclaration { .. }
            | ErrorImpl::InvalidAssignment { .. }
            | ErrorImpl::UnmatchedCloseParen { .. }
            | ErrorImpl::UnclosedOpenParen { .. } => "Input Error",
        }
    }

    /// Byte offset of the offending character, for errors tied to a single
    /// position in an input line.
    pub fn offset(&self) -> Option<usize> {
        match self {
            ErrorImpl::UnmatchedCloseParen { offset } | ErrorImpl::UnclosedOpenParen { offset } => {
                Some(*offset)
            }
            _ => None,
        }
    }
}
