use crate::types::ExpressionType;
use std::fmt;

/// A literal constant as produced by a lexical-constant scanner.
#[derive(Debug, Clone, PartialEq)]
pub enum Constant {
    Int(i64),
    Double(f64),
    Str(String),
    Bool(bool),
}

impl Constant {
    pub fn expression_type(&self) -> ExpressionType {
        match self {
            Constant::Int(_) => ExpressionType::Int,
            Constant::Double(_) => ExpressionType::Double,
            Constant::Str(_) => ExpressionType::Str,
            Constant::Bool(_) => ExpressionType::Bool,
        }
    }
}

/// Holds exactly one value whose variant is its `ExpressionType`.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum TypedValue {
    #[default]
    Undefined,
    Int(i64),
    Double(f64),
    Str(String),
    Bool(bool),
}

impl TypedValue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn expression_type(&self) -> ExpressionType {
        match self {
            TypedValue::Undefined => ExpressionType::Undefined,
            TypedValue::Int(_) => ExpressionType::Int,
            TypedValue::Double(_) => ExpressionType::Double,
            TypedValue::Str(_) => ExpressionType::Str,
            TypedValue::Bool(_) => ExpressionType::Bool,
        }
    }

    /// Replaces the current value with a copy of `constant`.
    pub fn set_from(&mut self, constant: &Constant) {
        *self = TypedValue::from(constant.clone());
    }

    pub fn is_defined(&self) -> bool {
        !matches!(self, TypedValue::Undefined)
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            TypedValue::Int(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_double(&self) -> Option<f64> {
        match self {
            TypedValue::Double(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            TypedValue::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            TypedValue::Bool(b) => Some(*b),
            _ => None,
        }
    }
}

impl From<Constant> for TypedValue {
    fn from(constant: Constant) -> Self {
        match constant {
            Constant::Int(n) => TypedValue::Int(n),
            Constant::Double(n) => TypedValue::Double(n),
            Constant::Str(s) => TypedValue::Str(s),
            Constant::Bool(b) => TypedValue::Bool(b),
        }
    }
}

impl fmt::Display for TypedValue {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            TypedValue::Undefined => write!(f, "undefined"),
            TypedValue::Int(n) => write!(f, "{}", n),
            TypedValue::Double(n) => {
                // Always show at least one decimal place for doubles
                if n.fract() == 0.0 {
                    write!(f, "{:.1}", n)
                } else {
                    write!(f, "{}", n)
                }
            }
            TypedValue::Str(s) => write!(f, "{}", s),
            TypedValue::Bool(b) => write!(f, "{}", b),
        }
    }
}
