/// AST (Abstract Syntax Tree) module
/// Contains the expression nodes an assignment's right-hand side is built from
///
/// Submodules:
/// - ast: The closed `Expr` enum over every expression kind
/// - expressions: Literal and variable expression nodes
pub mod ast;
pub mod expressions;
