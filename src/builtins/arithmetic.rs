// ABOUTME: Arithmetic operators: +, -, *, /
// ABOUTME: Each folds left across one or more Integer arguments; unary `-`
// ABOUTME: negates. Overflow wraps rather than panics: there is no bignum
// ABOUTME: tower here, so a contract around overflow isn't worth it.

use crate::env::Environment;
use crate::error::EvalError;
use crate::value::{Builtin, Value};
use std::rc::Rc;

enum Op {
    Add,
    Sub,
    Mul,
    Div,
}

fn builtin_op(name: &'static str, op: Op, args: Vec<Value>) -> Value {
    if args.is_empty() {
        return EvalError::arity(name, 0, "at least 1").into_value();
    }

    let mut numbers = Vec::with_capacity(args.len());
    for (i, arg) in args.iter().enumerate() {
        match arg {
            Value::Integer(n) => numbers.push(*n),
            other => return EvalError::type_mismatch(name, i, other, "Number").into_value(),
        }
    }

    if numbers.len() == 1 {
        if let Op::Sub = op {
            return Value::Integer(numbers[0].wrapping_neg());
        }
        return Value::Integer(numbers[0]);
    }

    let mut acc = numbers[0];
    for n in &numbers[1..] {
        acc = match op {
            Op::Add => acc.wrapping_add(*n),
            Op::Sub => acc.wrapping_sub(*n),
            Op::Mul => acc.wrapping_mul(*n),
            Op::Div => {
                if *n == 0 {
                    return EvalError::DivisionByZero.into_value();
                }
                acc.wrapping_div(*n)
            }
        };
    }
    Value::Integer(acc)
}

fn builtin_add(_env: &Rc<Environment>, args: Vec<Value>) -> Value {
    builtin_op("+", Op::Add, args)
}

fn builtin_sub(_env: &Rc<Environment>, args: Vec<Value>) -> Value {
    builtin_op("-", Op::Sub, args)
}

fn builtin_mul(_env: &Rc<Environment>, args: Vec<Value>) -> Value {
    builtin_op("*", Op::Mul, args)
}

fn builtin_div(_env: &Rc<Environment>, args: Vec<Value>) -> Value {
    builtin_op("/", Op::Div, args)
}

pub fn register(env: &Rc<Environment>) {
    env.define("+".to_string(), Value::Builtin(Builtin { name: "+", func: builtin_add }));
    env.define("-".to_string(), Value::Builtin(Builtin { name: "-", func: builtin_sub }));
    env.define("*".to_string(), Value::Builtin(Builtin { name: "*", func: builtin_mul }));
    env.define("/".to_string(), Value::Builtin(Builtin { name: "/", func: builtin_div }));
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
    fn addition_folds_left_to_right() {
        assert_eq!(
            builtin_add(&env(), vec![Value::Integer(1), Value::Integer(2), Value::Integer(3)]),
            Value::Integer(6)
        );
    }

    #[test]
    fn unary_minus_negates() {
        assert_eq!(builtin_sub(&env(), vec![Value::Integer(5)]), Value::Integer(-5));
    }

    #[test]
    fn division_by_zero_is_an_error() {
        assert_eq!(
            builtin_div(&env(), vec![Value::Integer(10), Value::Integer(0)]),
            Value::Error("Division by zero".to_string())
        );
    }

    #[test]
    fn identity_laws() {
        let e = env();
        assert_eq!(builtin_add(&e, vec![Value::Integer(7)]), Value::Integer(7));
        assert_eq!(builtin_mul(&e, vec![Value::Integer(9), Value::Integer(1)]), Value::Integer(9));
        assert_eq!(builtin_div(&e, vec![Value::Integer(9), Value::Integer(1)]), Value::Integer(9));
    }

    #[test]
    fn non_integer_argument_is_a_type_error() {
        assert_eq!(
            builtin_add(&env(), vec![Value::Integer(1), Value::String("x".to_string())]),
            Value::Error(
                "Function '+' passed incorrect type for argument 1. Got String, Expected Number."
                    .to_string()
            )
        );
    }
}
