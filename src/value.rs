// ABOUTME: Value types representing Lisp data structures and expressions

use crate::env::Environment;
use std::fmt;
use std::rc::Rc;

/// A native function bound to a name, used both to dispatch a call and to
/// fill in the `NAME` of arity/type error messages.
#[derive(Clone, Copy)]
pub struct Builtin {
    pub name: &'static str,
    pub func: BuiltinFn,
}

pub type BuiltinFn = fn(&Rc<Environment>, Vec<Value>) -> Value;

impl fmt::Debug for Builtin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Builtin({})", self.name)
    }
}

/// A user-defined function: formals and body are themselves Q-expressions,
/// so that they print exactly as written and can be inspected like any other
/// data. `env` is the environment captured at the point `\` was evaluated.
#[derive(Debug, Clone)]
pub struct Lambda {
    pub formals: Box<Value>,
    pub body: Box<Value>,
    pub env: Rc<Environment>,
}

#[derive(Debug, Clone)]
pub enum Value {
    Integer(i64),
    Error(String),
    Symbol(String),
    String(String),
    SExpr(Vec<Value>),
    QExpr(Vec<Value>),
    Builtin(Builtin),
    Lambda(Lambda),
}

impl Value {
    pub fn is_error(&self) -> bool {
        matches!(self, Value::Error(_))
    }

    /// Matches `examples/original_source/main.c`'s `lval_type_name`, whose
    /// strings are baked verbatim into the templated arity/type errors.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Integer(_) => "Number",
            Value::Error(_) => "Error",
            Value::Symbol(_) => "Symbol",
            Value::String(_) => "String",
            Value::SExpr(_) => "S-Expression",
            Value::QExpr(_) => "Q-Expression",
            Value::Builtin(_) | Value::Lambda(_) => "Function",
        }
    }

    /// Append-to-sequence for the two list variants. Panics on non-sequence
    /// values; callers only use this while building SExpr/QExpr trees.
    pub fn push(&mut self, item: Value) {
        match self {
            Value::SExpr(items) | Value::QExpr(items) => items.push(item),
            other => panic!("push on non-sequence Value: {other:?}"),
        }
    }

    /// Destructive pop-at-index from a sequence.
    pub fn pop(&mut self, index: usize) -> Value {
        match self {
            Value::SExpr(items) | Value::QExpr(items) => items.remove(index),
            other => panic!("pop on non-sequence Value: {other:?}"),
        }
    }

    /// Reinterprets a QExpr as the equivalent SExpr (used by `eval`, `if`,
    /// and lambda body evaluation); any other value passes through.
    pub fn into_sexpr(self) -> Value {
        match self {
            Value::QExpr(items) => Value::SExpr(items),
            other => other,
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Integer(a), Value::Integer(b)) => a == b,
            (Value::Error(a), Value::Error(b)) => a == b,
            (Value::Symbol(a), Value::Symbol(b)) => a == b,
            (Value::String(a), Value::String(b)) => a == b,
            (Value::SExpr(a), Value::SExpr(b)) => a == b,
            (Value::QExpr(a), Value::QExpr(b)) => a == b,
            (Value::Builtin(a), Value::Builtin(b)) => a.func as usize == b.func as usize,
            (Value::Lambda(a), Value::Lambda(b)) => a.formals == b.formals && a.body == b.body,
            _ => false,
        }
    }
}

fn print_seq(f: &mut fmt::Formatter<'_>, open: char, items: &[Value], close: char) -> fmt::Result {
    write!(f, "{open}")?;
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            write!(f, " ")?;
        }
        write!(f, "{item}")?;
    }
    write!(f, "{close}")
}

/// Re-escapes a string using the same set of sequences the reader accepts,
/// so that printing and re-reading a String value round-trips.
fn escape_string(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '\x07' => out.push_str("\\a"),
            '\x08' => out.push_str("\\b"),
            '\x0c' => out.push_str("\\f"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\x0b' => out.push_str("\\v"),
            '\\' => out.push_str("\\\\"),
            '\'' => out.push_str("\\'"),
            '"' => out.push_str("\\\""),
            c => out.push(c),
        }
    }
    out
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Integer(n) => write!(f, "{n}"),
            Value::Error(msg) => write!(f, "Error: {msg}"),
            Value::Symbol(s) => write!(f, "{s}"),
            Value::String(s) => write!(f, "\"{}\"", escape_string(s)),
            Value::SExpr(items) => print_seq(f, '(', items, ')'),
            Value::QExpr(items) => print_seq(f, '{', items, '}'),
            Value::Builtin(b) => write!(f, "<builtin '{}'>", b.name),
            Value::Lambda(l) => write!(f, "(\\ {} {})", l.formals, l.body),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integer_display() {
        assert_eq!(format!("{}", Value::Integer(42)), "42");
        assert_eq!(format!("{}", Value::Integer(-7)), "-7");
        assert_eq!(format!("{}", Value::Integer(0)), "0");
    }

    #[test]
    fn sexpr_and_qexpr_display() {
        let sexpr = Value::SExpr(vec![Value::Integer(1), Value::Integer(2), Value::Integer(3)]);
        assert_eq!(format!("{sexpr}"), "(1 2 3)");

        let qexpr = Value::QExpr(vec![Value::Integer(1), Value::Integer(2)]);
        assert_eq!(format!("{qexpr}"), "{1 2}");

        let nested = Value::SExpr(vec![
            Value::Integer(1),
            Value::QExpr(vec![Value::Integer(2), Value::Integer(3)]),
        ]);
        assert_eq!(format!("{nested}"), "(1 {2 3})");

        assert_eq!(format!("{}", Value::SExpr(vec![])), "()");
    }

    #[test]
    fn error_display() {
        assert_eq!(
            format!("{}", Value::Error("Division by zero".to_string())),
            "Error: Division by zero"
        );
    }

    #[test]
    fn symbol_and_string_display() {
        assert_eq!(format!("{}", Value::Symbol("foo".to_string())), "foo");
        assert_eq!(
            format!("{}", Value::String("hello".to_string())),
            "\"hello\""
        );
        assert_eq!(
            format!("{}", Value::String("a\nb".to_string())),
            "\"a\\nb\""
        );
    }

    #[test]
    fn structural_equality() {
        assert_eq!(Value::Integer(5), Value::Integer(5));
        assert_ne!(Value::Integer(5), Value::Integer(6));
        assert_eq!(
            Value::QExpr(vec![Value::Integer(1)]),
            Value::QExpr(vec![Value::Integer(1)])
        );
        assert_ne!(
            Value::QExpr(vec![Value::Integer(1)]),
            Value::SExpr(vec![Value::Integer(1)])
        );
    }

    #[test]
    fn type_names_match_original_vocabulary() {
        assert_eq!(Value::Integer(1).type_name(), "Number");
        assert_eq!(Value::QExpr(vec![]).type_name(), "Q-Expression");
        assert_eq!(Value::SExpr(vec![]).type_name(), "S-Expression");
    }

    #[test]
    fn push_appends_to_either_sequence_variant() {
        let mut sexpr = Value::SExpr(vec![Value::Integer(1)]);
        sexpr.push(Value::Integer(2));
        assert_eq!(sexpr, Value::SExpr(vec![Value::Integer(1), Value::Integer(2)]));

        let mut qexpr = Value::QExpr(vec![]);
        qexpr.push(Value::Symbol("x".to_string()));
        assert_eq!(qexpr, Value::QExpr(vec![Value::Symbol("x".to_string())]));
    }

    #[test]
    fn pop_removes_and_returns_the_element_at_index() {
        let mut qexpr = Value::QExpr(vec![Value::Integer(1), Value::Integer(2), Value::Integer(3)]);
        assert_eq!(qexpr.pop(0), Value::Integer(1));
        assert_eq!(qexpr, Value::QExpr(vec![Value::Integer(2), Value::Integer(3)]));
    }

    #[test]
    fn into_sexpr_reinterprets_qexpr_as_sexpr_but_passes_other_values_through() {
        assert_eq!(
            Value::QExpr(vec![Value::Integer(1)]).into_sexpr(),
            Value::SExpr(vec![Value::Integer(1)])
        );
        assert_eq!(Value::Integer(5).into_sexpr(), Value::Integer(5));
    }
}
