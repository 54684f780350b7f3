//! Integration tests for end-to-end assignment checking.
//!
//! These tests drive a session the way a front end would: declare variables,
//! build expressions, check assignments and render the diagnostics.

use assign_check::{
    ast::ast::Expr,
    balance::balance::is_balanced,
    errors::errors::ErrorImpl,
    session::session::Session,
    type_checker::type_checker::Assignment,
    types::types::DataType,
};
use pretty_assertions::assert_eq;

fn assignment(target: &str, target_type: DataType, source_type: DataType) -> Assignment {
    Assignment {
        target: target.to_string(),
        target_type,
        source_type,
    }
}

#[test]
fn test_assign_int_literal_to_int() {
    let mut session = Session::new("test");
    assert!(session.declare("x", DataType::Int));

    assert_eq!(
        session.check_assignment("x", &Expr::literal(42)),
        Ok(assignment("x", DataType::Int, DataType::Int))
    );
}

#[test]
fn test_assign_int_literal_to_float_widens() {
    let mut session = Session::new("test");
    session.declare("y", DataType::Float);

    assert_eq!(
        session.check_assignment("y", &Expr::literal(5)),
        Ok(assignment("y", DataType::Float, DataType::Int))
    );
}

#[test]
fn test_assign_int_literal_to_char_is_rejected() {
    let mut session = Session::new("test");
    session.declare("c", DataType::Char);

    assert_eq!(
        session.check_assignment("c", &Expr::literal(65)),
        Err(ErrorImpl::TypeMismatch {
            from: DataType::Int,
            to: DataType::Char
        })
    );
}

#[test]
fn test_assign_string_literal_to_int_is_rejected() {
    let mut session = Session::new("test");
    session.declare("x", DataType::Int);

    assert_eq!(
        session.check_assignment("x", &Expr::literal("hello")),
        Err(ErrorImpl::TypeMismatch {
            from: DataType::String,
            to: DataType::Int
        })
    );
}

#[test]
fn test_assign_int_variable_to_float() {
    let mut session = Session::new("test");
    session.declare("x", DataType::Int);
    session.declare("y", DataType::Float);

    assert_eq!(
        session.check_assignment("y", &Expr::variable("x")),
        Ok(assignment("y", DataType::Float, DataType::Int))
    );
}

#[test]
fn test_assign_to_undeclared_target() {
    let session = Session::new("test");

    assert_eq!(
        session.check_assignment("undefined", &Expr::literal(10)),
        Err(ErrorImpl::UndeclaredTarget {
            variable: "undefined".to_string()
        })
    );
}

#[test]
fn test_redeclaration_keeps_first_type() {
    let mut session = Session::new("test");
    assert!(session.declare("x", DataType::Int));
    assert!(!session.declare("x", DataType::String));

    assert_eq!(
        session.check_assignment("x", &Expr::literal("text")),
        Err(ErrorImpl::TypeMismatch {
            from: DataType::String,
            to: DataType::Int
        })
    );
}

#[test]
fn test_expression_built_before_declaration() {
    let mut session = Session::new("test");
    session.declare("y", DataType::Float);
    let value = Expr::variable("x");

    assert!(session.check_assignment("y", &value).is_err());
    session.declare("x", DataType::Char);
    assert_eq!(
        session.check_assignment("y", &value),
        Ok(assignment("y", DataType::Float, DataType::Char))
    );
}

#[test]
fn test_session_continues_after_failures() {
    let mut session = Session::new("demo");
    session.declare("x", DataType::Int);
    session.declare("y", DataType::Float);
    session.declare("c", DataType::Char);

    let cases = [
        ("x", Expr::literal(42)),
        ("y", Expr::literal(5)),
        ("c", Expr::literal(65)),
        ("x", Expr::literal("hello")),
        ("y", Expr::variable("x")),
        ("undefined", Expr::literal(10)),
        ("c", Expr::literal('A')),
        ("x", Expr::variable("z")),
    ];

    let mut lines = vec![];
    for (line, (target, value)) in cases.iter().enumerate() {
        session.set_line(line as u32 + 1);
        lines.push(session.report(target, value));
    }

    assert_eq!(
        lines,
        vec![
            "Assignment OK (line 1): x (int) = expression of type int",
            "Assignment OK (line 2): y (float) = expression of type int",
            "Semantic Error (line 3): Type mismatch: cannot assign int to char",
            "Semantic Error (line 4): Type mismatch: cannot assign string to int",
            "Assignment OK (line 5): y (float) = expression of type int",
            "Semantic Error (line 6): Variable 'undefined' is not declared",
            "Assignment OK (line 7): c (char) = expression of type char",
            "Semantic Error (line 8): Variable 'z' used in expression is not declared",
        ]
    );
}

#[test]
fn test_balance_examples() {
    let results: Vec<(&str, bool)> = ["()", "(())", "(()", ")(", "a+(b-c)"]
        .into_iter()
        .map(|expr| (expr, is_balanced(expr)))
        .collect();

    assert_eq!(
        results,
        vec![
            ("()", true),
            ("(())", true),
            ("(()", false),
            (")(", false),
            ("a+(b-c)", true),
        ]
    );
}
