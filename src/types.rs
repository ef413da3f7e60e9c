use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ExpressionType {
    /// Uninitialised, or the result of an operator that is not defined for
    /// its operand types.
    #[default]
    Undefined,
    Int,
    Double,
    Str,
    Bool,
}

impl ExpressionType {
    pub fn is_numeric(self) -> bool {
        matches!(self, ExpressionType::Int | ExpressionType::Double)
    }

    pub fn name(self) -> &'static str {
        match self {
            ExpressionType::Undefined => "undefined",
            ExpressionType::Int => "int",
            ExpressionType::Double => "double",
            ExpressionType::Str => "str",
            ExpressionType::Bool => "bool",
        }
    }
}

impl fmt::Display for ExpressionType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
    Modulo,
    Equal,
    NotEqual,
    LessEqual,
    GreaterEqual,
    Less,
    Greater,
    Increment,
    Decrement,
    UnaryPlus,
    UnaryMinus,
    Not,
    And,
    Or,
}

impl Operation {
    pub fn symbol(self) -> &'static str {
        match self {
            Operation::Add => "+",
            Operation::Subtract => "-",
            Operation::Multiply => "*",
            Operation::Divide => "/",
            Operation::Modulo => "%",
            Operation::Equal => "==",
            Operation::NotEqual => "!=",
            Operation::LessEqual => "<=",
            Operation::GreaterEqual => ">=",
            Operation::Less => "<",
            Operation::Greater => ">",
            Operation::Increment => "++",
            Operation::Decrement => "--",
            Operation::UnaryPlus => "unary+",
            Operation::UnaryMinus => "unary-",
            Operation::Not => "!",
            Operation::And => "&&",
            Operation::Or => "||",
        }
    }

    pub fn is_comparison(self) -> bool {
        matches!(
            self,
            Operation::Equal
                | Operation::NotEqual
                | Operation::LessEqual
                | Operation::GreaterEqual
                | Operation::Less
                | Operation::Greater
        )
    }

    pub fn is_arithmetic(self) -> bool {
        matches!(
            self,
            Operation::Add | Operation::Subtract | Operation::Multiply | Operation::Divide
        )
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownOperation(pub String);

impl fmt::Display for UnknownOperation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "unknown operation '{}'", self.0)
    }
}

impl std::error::Error for UnknownOperation {}

impl FromStr for Operation {
    type Err = UnknownOperation;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let op = match s {
            "+" => Operation::Add,
            "-" => Operation::Subtract,
            "*" => Operation::Multiply,
            "/" => Operation::Divide,
            "%" => Operation::Modulo,
            "==" => Operation::Equal,
            "!=" => Operation::NotEqual,
            "<=" => Operation::LessEqual,
            ">=" => Operation::GreaterEqual,
            "<" => Operation::Less,
            ">" => Operation::Greater,
            "++" => Operation::Increment,
            "--" => Operation::Decrement,
            "unary+" | "Unary+" => Operation::UnaryPlus,
            "unary-" | "Unary-" => Operation::UnaryMinus,
            "!" => Operation::Not,
            "&&" => Operation::And,
            "||" => Operation::Or,
            _ => return Err(UnknownOperation(s.to_string())),
        };
        Ok(op)
    }
}

/// Result type of `type1 <operation> type2`, or `Undefined` when the
/// operation is not defined for those operands. Unary operations ignore
/// `type2`.
pub fn resolve(operation: Operation, type1: ExpressionType, type2: ExpressionType) -> ExpressionType {
    use ExpressionType::*;

    if type1.is_numeric() && matches!(operation, Operation::UnaryPlus | Operation::UnaryMinus) {
        return type1;
    }

    if type1 == type2 {
        if operation.is_comparison() {
            return Bool;
        }
        // numeric addition or string concatenation
        if operation == Operation::Add {
            return type1;
        }
    }

    if type1.is_numeric() && type2.is_numeric() {
        if operation.is_arithmetic() {
            return if type1 == Double || type2 == Double {
                Double
            } else {
                Int
            };
        }

        if operation == Operation::Modulo && (type1 == Int || type2 == Int) {
            return type1;
        }
    }

    if type1 == Bool {
        if operation == Operation::Not {
            return Bool;
        }
        if type2 == Bool && matches!(operation, Operation::And | Operation::Or) {
            return Bool;
        }
    }

    Undefined
}
