// ABOUTME: Ordering and equality operators: >, <, >=, <=, ==, !=
// ABOUTME: Ordering is Integer-only; equality is structural over any Value,
// ABOUTME: matching `lval_eq` in the original. `=` is deliberately NOT
// ABOUTME: defined here; in this dialect it means local assignment.

use crate::env::Environment;
use crate::error::EvalError;
use crate::value::{Builtin, Value};
use std::rc::Rc;

enum Ordering {
    Gt,
    Lt,
    Ge,
    Le,
}

fn builtin_ordering(name: &'static str, which: Ordering, args: Vec<Value>) -> Value {
    if args.len() != 2 {
        return EvalError::arity(name, args.len(), "2").into_value();
    }
    let mut numbers = [0i64; 2];
    for (i, arg) in args.iter().enumerate() {
        match arg {
            Value::Integer(n) => numbers[i] = *n,
            other => return EvalError::type_mismatch(name, i, other, "Number").into_value(),
        }
    }
    let result = match which {
        Ordering::Gt => numbers[0] > numbers[1],
        Ordering::Lt => numbers[0] < numbers[1],
        Ordering::Ge => numbers[0] >= numbers[1],
        Ordering::Le => numbers[0] <= numbers[1],
    };
    Value::Integer(result as i64)
}

fn builtin_gt(_env: &Rc<Environment>, args: Vec<Value>) -> Value {
    builtin_ordering(">", Ordering::Gt, args)
}
fn builtin_lt(_env: &Rc<Environment>, args: Vec<Value>) -> Value {
    builtin_ordering("<", Ordering::Lt, args)
}
fn builtin_ge(_env: &Rc<Environment>, args: Vec<Value>) -> Value {
    builtin_ordering(">=", Ordering::Ge, args)
}
fn builtin_le(_env: &Rc<Environment>, args: Vec<Value>) -> Value {
    builtin_ordering("<=", Ordering::Le, args)
}

fn builtin_eq(_env: &Rc<Environment>, args: Vec<Value>) -> Value {
    if args.len() != 2 {
        return EvalError::arity("==", args.len(), "2").into_value();
    }
    Value::Integer((args[0] == args[1]) as i64)
}

fn builtin_ne(_env: &Rc<Environment>, args: Vec<Value>) -> Value {
    if args.len() != 2 {
        return EvalError::arity("!=", args.len(), "2").into_value();
    }
    Value::Integer((args[0] != args[1]) as i64)
}

pub fn register(env: &Rc<Environment>) {
    env.define(">".to_string(), Value::Builtin(Builtin { name: ">", func: builtin_gt }));
    env.define("<".to_string(), Value::Builtin(Builtin { name: "<", func: builtin_lt }));
    env.define(">=".to_string(), Value::Builtin(Builtin { name: ">=", func: builtin_ge }));
    env.define("<=".to_string(), Value::Builtin(Builtin { name: "<=", func: builtin_le }));
    env.define("==".to_string(), Value::Builtin(Builtin { name: "==", func: builtin_eq }));
    env.define("!=".to_string(), Value::Builtin(Builtin { name: "!=", func: builtin_ne }));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn env() -> Rc<Environment> {
        let env = Environment::new();
        register(&env);
        env
    }

    #[test]
    fn ordering_on_integers() {
        let e = env();
        assert_eq!(builtin_gt(&e, vec![Value::Integer(3), Value::Integer(2)]), Value::Integer(1));
        assert_eq!(builtin_lt(&e, vec![Value::Integer(3), Value::Integer(2)]), Value::Integer(0));
        assert_eq!(builtin_ge(&e, vec![Value::Integer(3), Value::Integer(3)]), Value::Integer(1));
        assert_eq!(builtin_le(&e, vec![Value::Integer(4), Value::Integer(3)]), Value::Integer(0));
    }

    #[test]
    fn structural_equality_across_types() {
        let e = env();
        assert_eq!(
            builtin_eq(&e, vec![Value::Integer(1), Value::Integer(1)]),
            Value::Integer(1)
        );
        assert_eq!(
            builtin_eq(
                &e,
                vec![
                    Value::QExpr(vec![Value::Integer(1)]),
                    Value::QExpr(vec![Value::Integer(1)])
                ]
            ),
            Value::Integer(1)
        );
        assert_eq!(
            builtin_ne(&e, vec![Value::Integer(1), Value::Integer(2)]),
            Value::Integer(1)
        );
    }

    #[test]
    fn wrong_arity_is_an_error() {
        let e = env();
        assert_eq!(
            builtin_gt(&e, vec![Value::Integer(1)]),
            Value::Error(
                "Function '>' passed incorrect number of arguments. Got 1, Expected 2.".to_string()
            )
        );
    }
}
