use std::{process, rc::Rc};

use anyhow::Result;
use assign_check::{
    ast::ast::{is_identifier, Expr},
    balance::balance::{check_balance, is_balanced},
    display_error,
    errors::errors::{Error, ErrorImpl},
    session::session::Session,
    types::types::DataType,
    Position,
};
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "assign-check")]
#[command(about = "Assignment type checker and parenthesis balance checker")]
#[command(version)]
struct Cli {
    /// Log checker decisions to stderr (filtered by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the built-in assignment and balance examples
    Demo,

    /// Declare variables, then check assignments against them in order
    Check {
        /// Variable declaration
        #[arg(short, long = "declare", value_name = "NAME:TYPE")]
        declarations: Vec<String>,

        /// Assignment to check; the operand is a literal or a variable name
        #[arg(short, long = "assign", value_name = "TARGET=OPERAND")]
        assignments: Vec<String>,
    },

    /// Check that parentheses are balanced
    Balance {
        /// Expressions to check
        #[arg(required = true)]
        expressions: Vec<String>,
    },
}

/// Lines to print and whether every check in the run succeeded.
#[derive(Debug)]
struct Outcome {
    lines: Vec<String>,
    all_passed: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::init();
    }

    let outcome = match cli.command {
        Commands::Demo => run_demo(),
        Commands::Check {
            declarations,
            assignments,
        } => run_check(&declarations, &assignments),
        Commands::Balance { expressions } => run_balance(&expressions),
    };

    for line in &outcome.lines {
        println!("{}", line);
    }

    if !outcome.all_passed {
        process::exit(1);
    }

    Ok(())
}

fn run_demo() -> Outcome {
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

    lines.push(String::new());
    for expr in ["()", "(())", "(()", ")(", "a+(b-c)"] {
        let verdict = if is_balanced(expr) {
            "Balanced"
        } else {
            "Unbalanced"
        };
        lines.push(format!("Test '{}': {}", expr, verdict));
    }

    // The demo exercises failures on purpose.
    Outcome {
        lines,
        all_passed: true,
    }
}

fn run_check(declarations: &[String], assignments: &[String]) -> Outcome {
    let mut session = Session::new("cli");
    let mut outcome = Outcome {
        lines: vec![],
        all_passed: true,
    };

    for (index, declaration) in declarations.iter().enumerate() {
        let declared = parse_declaration(declaration)
            .and_then(|(name, ty)| {
                session
                    .try_declare(name, ty)
                    .map_err(|e| e.get_internal_error().clone())
            });
        if let Err(error) = declared {
            outcome.all_passed = false;
            outcome.lines.push(format!(
                "{} (declaration {}): {}",
                error.label(),
                index + 1,
                error
            ));
        }
    }

    for (line, assignment) in assignments.iter().enumerate() {
        session.set_line(line as u32 + 1);
        let rendered = match parse_assignment(assignment) {
            Ok((target, value)) => {
                let result = session.check_assignment(target, &value);
                outcome.all_passed &= result.is_ok();
                session.render(&result)
            }
            Err(error) => {
                outcome.all_passed = false;
                session.positioned(error).to_string()
            }
        };
        outcome.lines.push(rendered);
    }

    outcome
}

fn run_balance(expressions: &[String]) -> Outcome {
    let source = Rc::new(String::from("shell"));
    let mut outcome = Outcome {
        lines: vec![],
        all_passed: true,
    };

    for (line, expr) in expressions.iter().enumerate() {
        match check_balance(expr) {
            Ok(()) => outcome
                .lines
                .push(String::from("The parentheses are balanced.")),
            Err(error) => {
                outcome.all_passed = false;
                outcome
                    .lines
                    .push(String::from("The parentheses are not balanced."));
                let error = Error::new(error, Position(line as u32 + 1, Rc::clone(&source)));
                outcome
                    .lines
                    .extend(display_error(&error, expr).lines().map(String::from));
            }
        }
    }

    outcome
}

fn parse_declaration(text: &str) -> Result<(&str, DataType), ErrorImpl> {
    let invalid = || ErrorImpl::InvalidDeclaration {
        text: text.to_string(),
    };

    let (name, ty) = text.split_once(':').ok_or_else(invalid)?;
    let name = name.trim();
    if !is_identifier(name) {
        return Err(invalid());
    }

    Ok((name, ty.trim().parse()?))
}

fn parse_assignment(text: &str) -> Result<(&str, Expr), ErrorImpl> {
    let invalid = || ErrorImpl::InvalidAssignment {
        text: text.to_string(),
    };

    let (target, operand) = text.split_once('=').ok_or_else(invalid)?;
    let target = target.trim();
    if !is_identifier(target) {
        return Err(invalid());
    }

    Ok((target, operand.parse()?))
}

#[cfg(test)]
mod tests {
    use assign_check::{ast::ast::Expr, errors::errors::ErrorImpl, types::types::DataType};

    use pretty_assertions::assert_eq;

    use super::{parse_assignment, parse_declaration, run_balance, run_check, run_demo};

    fn args(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn test_parse_declaration() {
        assert_eq!(parse_declaration("x:int"), Ok(("x", DataType::Int)));
        assert_eq!(parse_declaration(" y : float "), Ok(("y", DataType::Float)));
    }

    #[test]
    fn test_parse_bad_declaration() {
        assert_eq!(
            parse_declaration("x"),
            Err(ErrorImpl::InvalidDeclaration {
                text: "x".to_string()
            })
        );
        assert_eq!(
            parse_declaration("1x:int"),
            Err(ErrorImpl::InvalidDeclaration {
                text: "1x:int".to_string()
            })
        );
        assert_eq!(
            parse_declaration("x:double"),
            Err(ErrorImpl::UnknownType {
                type_: "double".to_string()
            })
        );
    }

    #[test]
    fn test_parse_assignment() {
        assert_eq!(parse_assignment("x=42"), Ok(("x", Expr::literal(42))));
        assert_eq!(parse_assignment("y = x"), Ok(("y", Expr::variable("x"))));
        assert_eq!(
            parse_assignment("s=\"a=b\""),
            Ok(("s", Expr::literal("a=b")))
        );
    }

    #[test]
    fn test_parse_bad_assignment() {
        assert_eq!(
            parse_assignment("x"),
            Err(ErrorImpl::InvalidAssignment {
                text: "x".to_string()
            })
        );
        assert_eq!(
            parse_assignment("x=@"),
            Err(ErrorImpl::InvalidLiteral {
                token: "@".to_string()
            })
        );
    }

    #[test]
    fn test_demo_output() {
        let outcome = run_demo();
        assert!(outcome.all_passed);
        assert_eq!(
            outcome.lines,
            vec![
                "Assignment OK (line 1): x (int) = expression of type int",
                "Assignment OK (line 2): y (float) = expression of type int",
                "Semantic Error (line 3): Type mismatch: cannot assign int to char",
                "Semantic Error (line 4): Type mismatch: cannot assign string to int",
                "Assignment OK (line 5): y (float) = expression of type int",
                "Semantic Error (line 6): Variable 'undefined' is not declared",
                "Assignment OK (line 7): c (char) = expression of type char",
                "Semantic Error (line 8): Variable 'z' used in expression is not declared",
                "",
                "Test '()': Balanced",
                "Test '(())': Balanced",
                "Test '(()': Unbalanced",
                "Test ')(': Unbalanced",
                "Test 'a+(b-c)': Balanced",
            ]
        );
    }

    #[test]
    fn test_check_numbers_assignments_from_one() {
        let outcome = run_check(&args(&["x:int", "y:float"]), &args(&["y=x", "x=2.5"]));
        assert!(!outcome.all_passed);
        assert_eq!(
            outcome.lines,
            vec![
                "Assignment OK (line 1): y (float) = expression of type int",
                "Semantic Error (line 2): Type mismatch: cannot assign float to int",
            ]
        );
    }

    #[test]
    fn test_check_continues_after_bad_operand() {
        let outcome = run_check(&args(&["x:int"]), &args(&["x=@", "x=1"]));
        assert!(!outcome.all_passed);
        assert_eq!(
            outcome.lines,
            vec![
                "Input Error (line 1): invalid literal \"@\"",
                "Assignment OK (line 2): x (int) = expression of type int",
            ]
        );
    }

    #[test]
    fn test_check_numbers_declarations_separately() {
        let outcome = run_check(
            &args(&["x:int", "x:float", "y:double"]),
            &args(&["x=1"]),
        );
        assert!(!outcome.all_passed);
        assert_eq!(
            outcome.lines,
            vec![
                "Semantic Error (declaration 2): Variable 'x' already declared",
                "Input Error (declaration 3): unknown type \"double\"",
                "Assignment OK (line 1): x (int) = expression of type int",
            ]
        );
    }

    #[test]
    fn test_check_all_passed() {
        let outcome = run_check(&args(&["c:char"]), &args(&["c='A'"]));
        assert!(outcome.all_passed);
    }

    #[test]
    fn test_balance_messages() {
        let outcome = run_balance(&args(&["a+(b-c)", "(()"]));
        assert!(!outcome.all_passed);
        assert_eq!(
            outcome.lines,
            vec![
                "The parentheses are balanced.",
                "The parentheses are not balanced.",
                "Error: UnclosedOpenParen (This parenthesis is never closed)",
                "-> shell",
                "  |",
                "2 | (()",
                "  | ^",
            ]
        );
    }

    #[test]
    fn test_balance_all_passed() {
        assert!(run_balance(&args(&["()", "(())"])).all_passed);
    }
}
