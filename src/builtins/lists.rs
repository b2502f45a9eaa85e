// ABOUTME: The Q-expression list builtins: list, head, tail, join.
// ABOUTME: All operate on QExpr values; `list` is the one place a bare
// ABOUTME: SExpr-of-args gets retagged as data rather than code.

use crate::env::Environment;
use crate::error::EvalError;
use crate::value::{Builtin, Value};
use std::rc::Rc;

fn builtin_list(_env: &Rc<Environment>, args: Vec<Value>) -> Value {
    Value::QExpr(args)
}

fn builtin_head(_env: &Rc<Environment>, mut args: Vec<Value>) -> Value {
    if args.len() != 1 {
        return EvalError::arity("head", args.len(), "1").into_value();
    }
    match &args[0] {
        Value::QExpr(items) if items.is_empty() => {
            EvalError::EmptySequence("head").into_value()
        }
        Value::QExpr(_) => {
            let Value::QExpr(mut items) = args.remove(0) else {
                unreachable!()
            };
            items.truncate(1);
            Value::QExpr(items)
        }
        other => EvalError::type_mismatch("head", 0, other, "Q-Expression").into_value(),
    }
}

fn builtin_tail(_env: &Rc<Environment>, mut args: Vec<Value>) -> Value {
    if args.len() != 1 {
        return EvalError::arity("tail", args.len(), "1").into_value();
    }
    match &args[0] {
        Value::QExpr(items) if items.is_empty() => {
            EvalError::EmptySequence("tail").into_value()
        }
        Value::QExpr(_) => {
            let Value::QExpr(mut items) = args.remove(0) else {
                unreachable!()
            };
            items.remove(0);
            Value::QExpr(items)
        }
        other => EvalError::type_mismatch("tail", 0, other, "Q-Expression").into_value(),
    }
}

fn builtin_join(_env: &Rc<Environment>, args: Vec<Value>) -> Value {
    let mut joined = Vec::new();
    for (i, arg) in args.into_iter().enumerate() {
        match arg {
            Value::QExpr(items) => joined.extend(items),
            other => return EvalError::type_mismatch("join", i, &other, "Q-Expression").into_value(),
        }
    }
    Value::QExpr(joined)
}

pub fn register(env: &Rc<Environment>) {
    env.define("list".to_string(), Value::Builtin(Builtin { name: "list", func: builtin_list }));
    env.define("head".to_string(), Value::Builtin(Builtin { name: "head", func: builtin_head }));
    env.define("tail".to_string(), Value::Builtin(Builtin { name: "tail", func: builtin_tail }));
    env.define("join".to_string(), Value::Builtin(Builtin { name: "join", func: builtin_join }));
}
