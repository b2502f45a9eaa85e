// ABOUTME: Centralized message templates for evaluation failures.
// ABOUTME: Every variant is converted to a Value::Error; nothing here is ever
// ABOUTME: propagated as a Result (see the Error-as-value note in DESIGN.md).

use crate::value::Value;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EvalError {
    #[error("Unbound symbol '{0}'")]
    UnboundSymbol(String),

    #[error(
        "Function '{function}' passed incorrect number of arguments. Got {got}, Expected {expected}."
    )]
    Arity {
        function: &'static str,
        got: usize,
        expected: String,
    },

    #[error(
        "Function '{function}' passed incorrect type for argument {position}. Got {got}, Expected {expected}."
    )]
    TypeMismatch {
        function: &'static str,
        position: usize,
        got: &'static str,
        expected: &'static str,
    },

    #[error("S-expression does not start with function. Got {got}, Expected Function.")]
    NotAFunction { got: &'static str },

    #[error("Function passed too many arguments. Got {got}, Expected {expected}.")]
    TooManyArgs { got: usize, expected: usize },

    #[error("Function format invalid. Symbol '&' not followed by single symbol.")]
    InvalidVariadic,

    #[error("Division by zero")]
    DivisionByZero,

    #[error("Function '{0}' passed {{}}")]
    EmptySequence(&'static str),

    #[error("Could not load library {0}")]
    LoadFailed(String),

    #[error("Invalid number")]
    InvalidNumber,

    #[error("Unexpected character {0}")]
    UnexpectedChar(char),

    #[error("Unexpected end of input")]
    UnexpectedEof,

    #[error("Invalid escape sequence \\{0}")]
    InvalidEscape(char),
}

impl EvalError {
    /// Every path through the evaluator returns a plain `Value`; this is the
    /// one place an `EvalError` turns into the `Value::Error` that actually
    /// flows through SExpr reduction.
    pub fn into_value(self) -> Value {
        Value::Error(self.to_string())
    }

    pub fn arity(function: &'static str, got: usize, expected: impl Into<String>) -> Self {
        EvalError::Arity {
            function,
            got,
            expected: expected.into(),
        }
    }

    pub fn type_mismatch(
        function: &'static str,
        position: usize,
        got: &Value,
        expected: &'static str,
    ) -> Self {
        EvalError::TypeMismatch {
            function,
            position,
            got: got.type_name(),
            expected,
        }
    }
}
