// tinyc: a single-pass, type-checking front end for a tiny assignment and
// expression language.
//
// Source text is scanned and parsed in one recursive-descent pass. Types are
// checked while parsing against an insert-once symbol table, and the
// validated statements are returned as `CompiledCode` for an evaluator.

pub mod compiled;
pub mod error;
pub mod parser;
pub mod repl;
pub mod runner;
pub mod scanner;
pub mod symbols;
pub mod types;
pub mod value;

pub use compiled::{CompiledCode, CompiledExpr, Operand, Statement};
pub use error::{ErrorKind, Span, TinyError};
pub use parser::{Analyzer, Parsed, MAX_NESTING};
pub use scanner::Scanner;
pub use symbols::{ParseResult, SymbolTable};
pub use types::{resolve, ExpressionType, Operation};
pub use value::{Constant, TypedValue};

pub use repl::start as start_repl;
pub use runner::{
    check_expression, check_program, compile_expression, compile_program, expression_type,
};
