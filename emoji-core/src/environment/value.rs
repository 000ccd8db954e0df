use std::{cmp::Ordering, fmt::Display, rc::Rc};

use crate::parser::prelude::Block;

#[derive(Debug, Clone, PartialEq)]
pub struct FunctionValue {
    pub name: String,
    pub params: Vec<String>,
    pub body: Rc<Block>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Integer {
        value: i64
    },
    Float {
        value: f64,
    },
    String {
        value: String,
    },
    Boolean {
        value: bool
    },
    List {
        values: Vec<Value>
    },
    Function {
        value: Rc<FunctionValue>
    },
    Unit,
}

impl Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::Integer { value } => write!(f, "{value}"),
            Value::Float { value } => write!(f, "{value:?}"),
            Value::String { value } => write!(f, "{value}"),
            Value::Boolean { value } => write!(f, "{value}"),
            Value::List { values } => {
                let items = values.iter()
                    .map(|value| match value {
                        Value::String { value } => format!("{value:?}"),
                        other => other.to_string(),
                    })
                    .collect::<Vec<String>>();

                write!(f, "[{}]", items.join(", "))
            },
            Value::Function { value } => write!(f, "<function {}>", value.name),
            Value::Unit => write!(f, "none"),
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Boolean { value }
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Integer { value }
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Float { value }
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String { value }
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String { value: value.to_string() }
    }
}

impl Value {
    pub fn _type(&self) -> ValueType {
        match self {
            Self::Integer { .. } => ValueType::Integer,
            Self::Float { .. } => ValueType::Float,
            Self::String { .. } => ValueType::String,
            Self::Boolean { .. } => ValueType::Boolean,
            Self::List { .. } => ValueType::List,
            Self::Function { .. } => ValueType::Function,
            Self::Unit => ValueType::Unit,
        }
    }

    pub fn is_unit(&self) -> bool {
        matches!(self, Self::Unit)
    }

    /// Zero, empty text, empty lists, `false` and unit are falsy.
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Integer { value } => *value != 0,
            Self::Float { value } => *value != 0.0,
            Self::String { value } => !value.is_empty(),
            Self::Boolean { value } => *value,
            Self::List { values } => !values.is_empty(),
            Self::Function { .. } => true,
            Self::Unit => false,
        }
    }

    /// Integer view used by loop counts, ranges and random bounds.
    /// Floats are truncated and text is parsed after trimming.
    pub fn to_int(&self) -> Option<i64> {
        match self {
            Self::Integer { value } => Some(*value),
            Self::Float { value } if value.is_finite() => Some(value.trunc() as i64),
            Self::Boolean { value } => Some(*value as i64),
            Self::String { value } => value.trim().parse::<i64>().ok(),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Integer { value } => Some(*value as f64),
            Self::Float { value } => Some(*value),
            _ => None,
        }
    }

    /// Equality for `🟰` and `❌🟰`. Values of unrelated types are never equal.
    pub fn loose_eq(&self, other: &Value) -> bool {
        match (self, other) {
            (Self::Integer { value: left }, Self::Integer { value: right }) => left == right,
            (Self::String { value: left }, Self::String { value: right }) => left == right,
            (Self::Boolean { value: left }, Self::Boolean { value: right }) => left == right,
            (Self::List { values: left }, Self::List { values: right }) => {
                left.len() == right.len()
                    && left.iter().zip(right).all(|(left, right)| left.loose_eq(right))
            },
            (Self::Function { value: left }, Self::Function { value: right }) => Rc::ptr_eq(left, right),
            (Self::Unit, Self::Unit) => true,
            (left, right) => match (left.as_number(), right.as_number()) {
                (Some(left), Some(right)) => left == right,
                _ => false,
            }
        }
    }

    /// Ordering for `⬆️` and `⬇️`. `None` when the pair has no order.
    pub fn loose_cmp(&self, other: &Value) -> Option<Ordering> {
        match (self, other) {
            (Self::Integer { value: left }, Self::Integer { value: right }) => Some(left.cmp(right)),
            (Self::String { value: left }, Self::String { value: right }) => Some(left.cmp(right)),
            (Self::Boolean { value: left }, Self::Boolean { value: right }) => Some(left.cmp(right)),
            (left, right) => match (left.as_number(), right.as_number()) {
                (Some(left), Some(right)) => left.partial_cmp(&right),
                _ => None,
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueType {
    Integer,
    Float,
    String,
    Boolean,
    List,
    Function,
    Unit,
}

impl Display for ValueType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Integer => "int",
            Self::Float => "float",
            Self::String => "string",
            Self::Boolean => "bool",
            Self::List => "list",
            Self::Function => "function",
            Self::Unit => "none",
        };

        write!(f, "{name}")
    }
}
