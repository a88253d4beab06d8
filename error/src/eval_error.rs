use std::fmt;

use rill_lex::Ident;
use rill_syn::{BinaryOperator, UnaryOperator};
use thiserror::Error;

/// The runtime type tag of a value, used by error messages. Displayed in the
/// language's own lowercase spelling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    Int,
    String,
    Bool,
    Nil,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int => "int",
            Self::String => "string",
            Self::Bool => "bool",
            Self::Nil => "nil",
        }
        .fmt(f)
    }
}

/// User-visible severity of an evaluation error. Every [`EvalError`] maps to
/// exactly one category; the driver reports the category alongside the
/// message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Name,
    Type,
    Fault,
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Name => "NAME_ERROR",
            Self::Type => "TYPE_ERROR",
            Self::Fault => "FAULT_ERROR",
        }
        .fmt(f)
    }
}

#[derive(Debug, Error)]
pub enum EvalError {
    #[error("{0}")]
    Name(#[from] NameError),
    #[error("{0}")]
    Type(Box<TypeError>),
    #[error("{0}")]
    Fault(#[from] FaultError),
    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),
}

impl EvalError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Name(_) => ErrorCategory::Name,
            Self::Type(_) => ErrorCategory::Type,
            Self::Fault(_) | Self::Io(_) => ErrorCategory::Fault,
        }
    }
}

impl From<TypeError> for EvalError {
    fn from(err: TypeError) -> Self {
        Self::Type(Box::new(err))
    }
}

/// Unresolved identifiers: variables, `(name, arity)` function keys, the
/// `main` entry point, and over-applied builtins.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum NameError {
    #[error("Unknown variable: {0}")]
    UnknownVariable(Ident),
    #[error("Unknown function referenced: {name}, taking {arity} args")]
    UnknownFunction { name: Ident, arity: usize },
    #[error("No main function found")]
    MissingMain,
    #[error("No {name}() function found that takes > 1 parameter")]
    BuiltinArity { name: &'static str },
}

/// An operand kind violating an operator's contract. Messages name the
/// operator and the offending kind(s).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TypeError {
    #[error("Type mismatch on {construct} condition: {kind}")]
    Condition {
        construct: &'static str,
        kind: ValueKind,
    },
    #[error("Type mismatch on binary operation between {lhs} and {rhs}: {op}")]
    BinaryMismatch {
        op: BinaryOperator,
        lhs: ValueKind,
        rhs: ValueKind,
    },
    #[error("Unsupported type {kind} for binary operator '{op}'")]
    UnsupportedOperands { op: BinaryOperator, kind: ValueKind },
    #[error("Type mismatch on unary operation '{op}': {kind}")]
    Unary { op: UnaryOperator, kind: ValueKind },
}

/// Runtime conditions independent of the program's static shape.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FaultError {
    #[error("Division by zero")]
    DivisionByZero,
    #[error("No functions found")]
    NoFunctions,
    #[error("Recursion depth exceeded")]
    RecursionDepthExceeded,
    #[error("Input is not a valid integer: {0}")]
    InputNotInt(String),
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn every_variant_maps_to_its_category() {
        let name: EvalError = NameError::MissingMain.into();
        assert_eq!(name.category(), ErrorCategory::Name);

        let ty: EvalError = TypeError::Condition {
            construct: "if",
            kind: ValueKind::Int,
        }
        .into();
        assert_eq!(ty.category(), ErrorCategory::Type);

        let fault: EvalError = FaultError::DivisionByZero.into();
        assert_eq!(fault.category(), ErrorCategory::Fault);
    }

    #[test]
    fn error_messages_are_stable() {
        assert_eq!(
            NameError::UnknownVariable(rill_lex::Ident::new("x")).to_string(),
            "Unknown variable: x"
        );
        assert_eq!(NameError::MissingMain.to_string(), "No main function found");
        assert_eq!(FaultError::DivisionByZero.to_string(), "Division by zero");
        assert_eq!(
            FaultError::RecursionDepthExceeded.to_string(),
            "Recursion depth exceeded"
        );
        assert_eq!(ErrorCategory::Name.to_string(), "NAME_ERROR");
        assert_eq!(ErrorCategory::Type.to_string(), "TYPE_ERROR");
        assert_eq!(ErrorCategory::Fault.to_string(), "FAULT_ERROR");
    }
}
