#![allow(clippy::module_inception)]

use std::{fmt::Write, rc::Rc};

use crate::errors::errors::{Error, ErrorTip};

pub mod ast;
pub mod balance;
pub mod errors;
pub mod session;
pub mod symbols;
pub mod type_checker;
pub mod types;

/// Line number and source name a diagnostic refers to. Lines are supplied by
/// the caller and start at 1.
#[derive(Debug, Clone)]
pub struct Position(pub u32, pub Rc<String>);

pub fn display_error(error: &Error, line_text: &str) -> String {
    /*
        Error: UnclosedOpenParen (This parenthesis is never closed)
        -> shell
          |
        1 | a+(b-c
          | --^
    */

    let mut out = String::new();
    let position = error.get_position();
    let line_str = position.0.to_string();
    let padding = line_str.len() + 2;

    if let ErrorTip::None = error.get_tip() {
        let _ = writeln!(out, "Error: {}", error.get_error_name());
    } else {
        let _ = writeln!(out, "Error: {} ({})", error.get_error_name(), error.get_tip());
    }
    let _ = writeln!(out, "-> {}", position.1);
    let _ = writeln!(out, "{:>padding$}", "|");

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(line_text);
    let _ = writeln!(out, "{} | {}", line_str, line_text_removed.trim_end());

    if let Some(offset) = error.get_internal_error().offset() {
        let column = line_text
            .get(..offset)
            .map(|prefix| prefix.chars().count())
            .unwrap_or(0);
        let arrows = column.saturating_sub(removed_whitespace) + 1;
        let _ = writeln!(out, "{:>padding$} {:->arrows$}", "|", "^");
    }

    out
}

fn remove_starting_whitespace(string: &str) -> (&str, usize) {
    let start = string.chars().take_while(|c| *c == ' ').count();
    (&string[start..], start)
}
