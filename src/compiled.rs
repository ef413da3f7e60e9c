use crate::error::Span;
use crate::symbols::SymbolTable;
use crate::types::{ExpressionType, Operation};
use crate::value::TypedValue;

/// Output of a successful parse, handed to an evaluator.
#[derive(Debug, Clone, Default)]
pub struct CompiledCode {
    pub statements: Vec<Statement>,
    pub symbols: SymbolTable,
}

#[derive(Debug, Clone)]
pub enum Statement {
    Assignment {
        name: String,
        expr: CompiledExpr,
        span: Span,
    },
    /// A lone expression, produced by standalone-expression parsing.
    Expression { expr: CompiledExpr, span: Span },
}

impl Statement {
    pub fn span(&self) -> &Span {
        match self {
            Statement::Assignment { span, .. } => span,
            Statement::Expression { span, .. } => span,
        }
    }

    pub fn expr(&self) -> &CompiledExpr {
        match self {
            Statement::Assignment { expr, .. } => expr,
            Statement::Expression { expr, .. } => expr,
        }
    }
}

/// `first (operator operand)*`, kept flat in source order. Every operand
/// shares `ty`, the type of `first`.
#[derive(Debug, Clone)]
pub struct CompiledExpr {
    pub ty: ExpressionType,
    pub first: Operand,
    pub rest: Vec<(Operation, Operand)>,
    pub span: Span,
}

impl CompiledExpr {
    pub fn operands(&self) -> impl Iterator<Item = &Operand> {
        std::iter::once(&self.first).chain(self.rest.iter().map(|(_, operand)| operand))
    }

    pub fn operators(&self) -> impl Iterator<Item = Operation> + '_ {
        self.rest.iter().map(|(op, _)| *op)
    }
}

#[derive(Debug, Clone)]
pub enum Operand {
    Literal { value: TypedValue, span: Span },
    Variable {
        name: String,
        ty: ExpressionType,
        span: Span,
    },
    Group(Box<CompiledExpr>),
}

impl Operand {
    pub fn ty(&self) -> ExpressionType {
        match self {
            Operand::Literal { value, .. } => value.expression_type(),
            Operand::Variable { ty, .. } => *ty,
            Operand::Group(expr) => expr.ty,
        }
    }

    pub fn span(&self) -> &Span {
        match self {
            Operand::Literal { span, .. } => span,
            Operand::Variable { span, .. } => span,
            Operand::Group(expr) => &expr.span,
        }
    }
}
