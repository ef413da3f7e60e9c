use crate::compiled::CompiledCode;
use crate::error::{Span, TinyError};
use crate::parser::Analyzer;
use crate::symbols::SymbolTable;
use crate::types::ExpressionType;

/// Parses a whole program. Input left over after the last assignment is
/// reported as unrecognized input.
pub fn compile_program(source: &str) -> Result<CompiledCode, TinyError> {
    let mut analyzer = Analyzer::new(source);
    if !analyzer.parse_program()? {
        let pos = analyzer.position();
        return Err(TinyError::trailing_input_with_help(
            Span::new(pos, source.chars().count().max(pos + 1)),
            "Expected an assignment".to_string(),
            "A program is a sequence of assignments: name = expression;".to_string(),
        ));
    }
    Ok(analyzer.into_compiled())
}

pub fn compile_expression(source: &str) -> Result<CompiledCode, TinyError> {
    let mut analyzer = Analyzer::new(source);
    analyzer.parse_standalone_expression()?;
    Ok(analyzer.into_compiled())
}

/// Type of a standalone expression whose variables may refer to `symbols`.
pub fn expression_type(source: &str, symbols: &SymbolTable) -> Result<ExpressionType, TinyError> {
    let mut analyzer = Analyzer::with_symbols(source, symbols.clone());
    analyzer.parse_standalone_expression()?;
    Ok(analyzer
        .compiled_code()
        .statements
        .first()
        .map(|s| s.expr().ty)
        .unwrap_or(ExpressionType::Undefined))
}

/// Checks a program file, printing its bindings. Returns whether it was
/// accepted.
pub fn check_program(source: &str, filename: Option<&str>) -> bool {
    match compile_program(source) {
        Ok(code) => {
            for (name, record) in code.symbols.iter() {
                println!("{}: {}", name, record.ty);
            }
            true
        }
        Err(error) => {
            error.report(source, filename);
            false
        }
    }
}

/// Checks a standalone expression, printing its type.
pub fn check_expression(source: &str) -> bool {
    match expression_type(source, &SymbolTable::new()) {
        Ok(ty) => {
            println!("{}", ty);
            true
        }
        Err(error) => {
            error.report(source, Some("<expr>"));
            false
        }
    }
}
