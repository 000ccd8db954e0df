use std::fmt::Display;

use crate::{environment::prelude::ValueType, utils::prelude::SrcSpan};

/// The family a runtime failure belongs to, as reported to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorClass {
    Name,
    Redeclaration,
    Type,
    Arity,
    Arithmetic,
    Recursion,
    Syntax,
    Interrupted,
    Io,
    EndOfInput,
}

impl Display for ErrorClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Name => "NameError",
            Self::Redeclaration => "RedeclarationError",
            Self::Type => "TypeError",
            Self::Arity => "ArityError",
            Self::Arithmetic => "ArithmeticError",
            Self::Recursion => "RecursionError",
            Self::Syntax => "SyntaxError",
            Self::Interrupted => "Interrupted",
            Self::Io => "IoError",
            Self::EndOfInput => "EndOfInput",
        };

        write!(f, "{name}")
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum RuntimeErrorType {
    UndefinedVariable {
        name: String,
    },
    Redeclaration {
        name: String,
    },
    InvalidOperands {
        operator: &'static str,
        left: ValueType,
        right: ValueType,
    },
    InvalidOperand {
        operator: &'static str,
        operand: ValueType,
    },
    NotCallable {
        found: ValueType,
    },
    InvalidIdentifier {
        name: String,
    },
    ReservedIdentifier {
        name: String,
    },
    ExpectedInteger {
        context: &'static str,
        found: ValueType,
    },
    EmptyRange {
        min: i64,
        max: i64,
    },
    ArityMismatch {
        expected: usize,
        got: usize,
    },
    DivisionByZero,
    IntegerOverflow {
        operator: &'static str,
    },
    RecursionLimit {
        limit: usize,
    },
    ReturnOutsideFunction,
    Interrupted,
    EndOfInput,
    Io {
        kind: std::io::ErrorKind,
    },
}

impl RuntimeErrorType {
    pub fn class(&self) -> ErrorClass {
        match self {
            Self::UndefinedVariable { .. } => ErrorClass::Name,
            Self::Redeclaration { .. } => ErrorClass::Redeclaration,
            Self::InvalidOperands { .. }
            | Self::InvalidOperand { .. }
            | Self::NotCallable { .. }
            | Self::InvalidIdentifier { .. }
            | Self::ReservedIdentifier { .. }
            | Self::ExpectedInteger { .. }
            | Self::EmptyRange { .. } => ErrorClass::Type,
            Self::ArityMismatch { .. } => ErrorClass::Arity,
            Self::DivisionByZero | Self::IntegerOverflow { .. } => ErrorClass::Arithmetic,
            Self::RecursionLimit { .. } => ErrorClass::Recursion,
            Self::ReturnOutsideFunction => ErrorClass::Syntax,
            Self::Interrupted => ErrorClass::Interrupted,
            Self::EndOfInput => ErrorClass::EndOfInput,
            Self::Io { .. } => ErrorClass::Io,
        }
    }

    /// Attaches the span of the node that failed.
    pub fn at(self, location: SrcSpan) -> RuntimeError {
        RuntimeError {
            error: self,
            location,
        }
    }
}

impl From<std::io::Error> for RuntimeErrorType {
    fn from(err: std::io::Error) -> Self {
        Self::Io { kind: err.kind() }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RuntimeError {
    pub error: RuntimeErrorType,
    pub location: SrcSpan,
}

impl RuntimeError {
    pub fn class(&self) -> ErrorClass {
        self.error.class()
    }

    pub fn is_end_of_input(&self) -> bool {
        self.class() == ErrorClass::EndOfInput
    }

    pub fn details(&self) -> (&'static str, Vec<String>) {
        match &self.error {
            RuntimeErrorType::UndefinedVariable { name } => (
                "Undefined variable",
                vec![format!("Undefined variable: {name}")]
            ),
            RuntimeErrorType::Redeclaration { name } => (
                "Already declared in this scope",
                vec![
                    format!("`{name}` is already declared in the current scope."),
                    "Use the shorthand form without 📦 to reassign it.".into(),
                ]
            ),
            RuntimeErrorType::InvalidOperands { operator, left, right } => (
                "Invalid operands",
                vec![format!("Cannot apply `{operator}` to `{left}` and `{right}`")]
            ),
            RuntimeErrorType::InvalidOperand { operator, operand } => (
                "Invalid operand",
                vec![format!("Cannot apply unary `{operator}` to `{operand}`")]
            ),
            RuntimeErrorType::NotCallable { found } => (
                "Not a function",
                vec![format!("A value of type `{found}` cannot be called")]
            ),
            RuntimeErrorType::InvalidIdentifier { name } => (
                "Invalid identifier",
                vec![format!("`{name}` cannot be used as a variable name")]
            ),
            RuntimeErrorType::ReservedIdentifier { name } => (
                "Reserved identifier",
                vec![format!("`{name}` is a reserved word")]
            ),
            RuntimeErrorType::ExpectedInteger { context, found } => (
                "Expected a number",
                vec![format!("{context} must be numeric, got `{found}`")]
            ),
            RuntimeErrorType::EmptyRange { min, max } => (
                "Empty range",
                vec![format!("Lower bound {min} is greater than upper bound {max}")]
            ),
            RuntimeErrorType::ArityMismatch { expected, got } => (
                "Wrong number of arguments",
                vec![format!("Expected {expected} arguments, got {got}")]
            ),
            RuntimeErrorType::DivisionByZero => (
                "Division by zero",
                vec![]
            ),
            RuntimeErrorType::IntegerOverflow { operator } => (
                "Integer overflow",
                vec![format!("The result of `{operator}` does not fit in a 64-bit integer")]
            ),
            RuntimeErrorType::RecursionLimit { limit } => (
                "Maximum call depth exceeded",
                vec![format!("More than {limit} calls were active at once")]
            ),
            RuntimeErrorType::ReturnOutsideFunction => (
                "Return outside of function",
                vec!["`⬅️` can only be used inside a function body".into()]
            ),
            RuntimeErrorType::Interrupted => (
                "Interrupted",
                vec!["Execution was stopped before this statement".into()]
            ),
            RuntimeErrorType::EndOfInput => (
                "Input ended",
                vec![]
            ),
            RuntimeErrorType::Io { kind } => (
                "Standard IO error",
                vec![format!("{kind}")]
            ),
        }
    }
}

impl Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (title, extra) = self.details();

        match extra.first() {
            Some(message) => write!(f, "{}: {message}", self.class()),
            None => write!(f, "{}: {title}", self.class()),
        }
    }
}
