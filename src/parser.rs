use crate::compiled::{CompiledCode, CompiledExpr, Operand, Statement};
use crate::error::{Span, TinyError};
use crate::scanner::Scanner;
use crate::symbols::{ParseResult, SymbolTable};
use crate::types::Operation;
use crate::value::TypedValue;

/// `Ok(Some(_))` matched, `Ok(None)` not matched with no input consumed,
/// `Err(_)` fatal.
pub type Parsed<T> = Result<Option<T>, TinyError>;

// Longest forms first so that "<=" is not read as "<".
const OPERATORS: [(&str, Operation); 13] = [
    ("==", Operation::Equal),
    ("!=", Operation::NotEqual),
    ("<=", Operation::LessEqual),
    (">=", Operation::GreaterEqual),
    ("<", Operation::Less),
    (">", Operation::Greater),
    ("++", Operation::Increment),
    ("--", Operation::Decrement),
    ("+", Operation::Add),
    ("-", Operation::Subtract),
    ("*", Operation::Multiply),
    ("/", Operation::Divide),
    ("%", Operation::Modulo),
];

/// Deepest `(` nesting accepted before the parse is abandoned.
pub const MAX_NESTING: usize = 128;

/// One parse session: owns the cursor, the symbol table and the compiled
/// statements produced so far.
pub struct Analyzer {
    scanner: Scanner,
    code: CompiledCode,
    depth: usize,
}

impl Analyzer {
    pub fn new(source: &str) -> Self {
        Self::with_symbols(source, SymbolTable::new())
    }

    /// Starts a session whose variables are already bound, e.g. to check an
    /// expression against the bindings of an earlier program.
    pub fn with_symbols(source: &str, symbols: SymbolTable) -> Self {
        Self {
            scanner: Scanner::new(source),
            code: CompiledCode {
                statements: Vec::new(),
                symbols,
            },
            depth: 0,
        }
    }

    /// Parses `assignment* end-of-input`. `Ok(false)` means the assignments
    /// parsed but unrecognised input follows them.
    pub fn parse_program(&mut self) -> Result<bool, TinyError> {
        self.scanner.reset();
        self.code.statements.clear();
        self.depth = 0;

        while let Some(statement) = self.assignment()? {
            self.code.statements.push(statement);
        }

        let complete = self.scanner.at_end();
        log::debug!(
            "program: {} statement(s), {} binding(s), complete: {}",
            self.code.statements.len(),
            self.code.symbols.len(),
            complete
        );
        Ok(complete)
    }

    /// Parses one expression that must span the whole input. Leftover input
    /// is an error here, never `Ok(false)`.
    pub fn parse_standalone_expression(&mut self) -> Result<bool, TinyError> {
        self.scanner.reset();
        self.code.statements.clear();
        self.depth = 0;

        let start = self.scanner.position();
        let mut result = ParseResult::new();
        let expr = self.expression(&mut result)?;

        if !self.scanner.at_end() {
            let pos = self.scanner.position();
            return Err(TinyError::trailing_input_with_help(
                Span::new(pos, self.scanner.source_len().max(pos + 1)),
                "Unexpected input after expression".to_string(),
                "An expression is operands joined by operators, e.g. 1 + 2 * 3.".to_string(),
            ));
        }

        log::debug!("expression of type {}", expr.ty);
        self.code.statements.push(Statement::Expression {
            expr,
            span: self.scanner.span_from(start),
        });
        Ok(true)
    }

    pub fn compiled_code(&self) -> &CompiledCode {
        &self.code
    }

    pub fn symbols(&self) -> &SymbolTable {
        &self.code.symbols
    }

    pub fn position(&self) -> usize {
        self.scanner.position()
    }

    pub fn into_compiled(self) -> CompiledCode {
        self.code
    }

    fn assignment(&mut self) -> Parsed<Statement> {
        self.scanner.skip_blanks();
        let start = self.scanner.position();

        let name = match self.scanner.scan_identifier() {
            Some(name) => name,
            None => return Ok(None),
        };

        if !self.scanner.match_char('=') {
            return Err(TinyError::parse_error_with_help(
                self.error_span(),
                format!("Expected '=' after '{}'", name),
                "Statements are assignments: name = expression;".to_string(),
            ));
        }

        let mut result = ParseResult::named(&name);
        let expr = self.expression(&mut result)?;

        if !self.scanner.match_char(';') {
            return Err(TinyError::parse_error_with_help(
                self.error_span(),
                "Expected ';' after expression".to_string(),
                "Every assignment ends with ';'.".to_string(),
            ));
        }

        if self.code.symbols.insert(&name, &result) {
            log::debug!("bound '{}' as {}", name, result.ty);
        } else {
            log::debug!("'{}' already bound, keeping first binding", name);
        }

        Ok(Some(Statement::Assignment {
            name,
            expr,
            span: self.scanner.span_from(start),
        }))
    }

    /// `operand (operator operand)*`. Every operand must have the type of
    /// the first one; that type is left in `result.ty`.
    fn expression(&mut self, result: &mut ParseResult) -> Result<CompiledExpr, TinyError> {
        self.scanner.skip_blanks();
        let start = self.scanner.position();

        let first = self.required_operand(None)?;
        let ty = first.ty();
        result.ty = ty;

        let mut rest = Vec::new();
        while let Some(op) = self.operator() {
            let operand = self.required_operand(Some(op))?;
            if operand.ty() != ty {
                return Err(TinyError::type_error_with_help(
                    *operand.span(),
                    format!(
                        "Mismatched types: expected {}, found {}",
                        ty,
                        operand.ty()
                    ),
                    format!(
                        "All operands of an expression must have the type of its first operand ({}).",
                        ty
                    ),
                ));
            }
            rest.push((op, operand));
        }

        log::trace!("expression {}..{} of type {}", start, self.scanner.position(), ty);
        Ok(CompiledExpr {
            ty,
            first,
            rest,
            span: self.scanner.span_from(start),
        })
    }

    fn required_operand(&mut self, after: Option<Operation>) -> Result<Operand, TinyError> {
        match self.operand()? {
            Some(operand) => Ok(operand),
            None => {
                let message = match after {
                    Some(op) => format!("Expected operand after '{}'", op),
                    None => "Expected operand".to_string(),
                };
                Err(TinyError::parse_error_with_help(
                    self.error_span(),
                    message,
                    "Operands are numbers, 'strings', declared variables or (expressions)."
                        .to_string(),
                ))
            }
        }
    }

    fn operand(&mut self) -> Parsed<Operand> {
        self.scanner.skip_blanks();
        let start = self.scanner.position();

        if self.scanner.match_char('(') {
            self.depth += 1;
            let group = self.group(start);
            self.depth -= 1;
            return group.map(Some);
        }

        if let Some(s) = self.scanner.scan_string()? {
            return Ok(Some(Operand::Literal {
                value: TypedValue::Str(s),
                span: self.scanner.span_from(start),
            }));
        }

        if let Some(n) = self.scanner.scan_number()? {
            return Ok(Some(Operand::Literal {
                value: TypedValue::Int(n),
                span: self.scanner.span_from(start),
            }));
        }

        let name = match self.scanner.scan_identifier() {
            Some(name) => name,
            None => return Ok(None),
        };
        let span = self.scanner.span_from(start);

        match self.code.symbols.get(&name) {
            Some(record) => Ok(Some(Operand::Variable {
                ty: record.ty,
                name,
                span,
            })),
            None => Err(TinyError::parse_error_with_help(
                span,
                format!("Undefined variable '{}'", name),
                "Variables must be assigned before they are used.".to_string(),
            )),
        }
    }

    /// The rest of `'(' expression ')'` once the `(` at `start` is consumed.
    fn group(&mut self, start: usize) -> Result<Operand, TinyError> {
        if self.depth > MAX_NESTING {
            return Err(TinyError::parse_error_with_help(
                Span::single(start),
                "Expressions nested too deeply".to_string(),
                format!("At most {} levels of parentheses are allowed.", MAX_NESTING),
            ));
        }

        let mut inner = ParseResult::new();
        let expr = self.expression(&mut inner)?;
        if !self.scanner.match_char(')') {
            return Err(TinyError::parse_error_with_help(
                self.error_span(),
                "Expected ')' after expression".to_string(),
                format!("The '(' at offset {} is never closed.", start),
            ));
        }
        Ok(Operand::Group(Box::new(expr)))
    }

    fn operator(&mut self) -> Option<Operation> {
        OPERATORS
            .iter()
            .find(|(symbol, _)| self.scanner.match_literal(symbol))
            .map(|(_, op)| *op)
    }

    /// Span of the next unconsumed character, or one past the end.
    fn error_span(&mut self) -> Span {
        self.scanner.skip_blanks();
        Span::single(self.scanner.position())
    }
}
