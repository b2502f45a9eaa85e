// ABOUTME: Builtins that need access to `eval` or construct bindings/lambdas:
// ABOUTME: def, =, \, eval, if. Everything else in builtins/ is a pure
// ABOUTME: function of its arguments; these five close over the environment.

use crate::env::Environment;
use crate::error::EvalError;
use crate::eval::eval;
use crate::value::{Builtin, Lambda, Value};
use std::rc::Rc;

/// Shared implementation of `def` and `=`: arg 0 is a QExpr of Symbols, the
/// rest are the values to bind to them one-for-one. `bind` decides whether
/// the binding lands in the global frame (`def`) or the current one (`=`).
fn builtin_assign(
    name: &'static str,
    env: &Rc<Environment>,
    mut args: Vec<Value>,
    bind: fn(&Environment, String, Value),
) -> Value {
    if args.is_empty() {
        return EvalError::arity(name, 0, "at least 1").into_value();
    }
    let symbols = match &args[0] {
        Value::QExpr(items) => items,
        other => return EvalError::type_mismatch(name, 0, other, "Q-Expression").into_value(),
    };
    for (i, sym) in symbols.iter().enumerate() {
        if !matches!(sym, Value::Symbol(_)) {
            return EvalError::type_mismatch(name, i, sym, "Symbol").into_value();
        }
    }
    let symbol_count = symbols.len();

    let Value::QExpr(symbols) = args.remove(0) else {
        unreachable!("checked above")
    };
    let values = args;
    if symbol_count != values.len() {
        return EvalError::arity(name, values.len(), symbol_count.to_string()).into_value();
    }

    for (sym, value) in symbols.into_iter().zip(values) {
        let Value::Symbol(name) = sym else {
            unreachable!("checked above")
        };
        bind(env, name, value);
    }
    Value::SExpr(vec![])
}

fn builtin_def(env: &Rc<Environment>, args: Vec<Value>) -> Value {
    builtin_assign("def", env, args, |env, name, value| env.define(name, value))
}

fn builtin_put(env: &Rc<Environment>, args: Vec<Value>) -> Value {
    builtin_assign("=", env, args, |env, name, value| env.put(name, value))
}

fn builtin_lambda(env: &Rc<Environment>, mut args: Vec<Value>) -> Value {
    if args.len() != 2 {
        return EvalError::arity("\\", args.len(), "2").into_value();
    }
    if !matches!(args[0], Value::QExpr(_)) {
        return EvalError::type_mismatch("\\", 0, &args[0], "Q-Expression").into_value();
    }
    if !matches!(args[1], Value::QExpr(_)) {
        return EvalError::type_mismatch("\\", 1, &args[1], "Q-Expression").into_value();
    }
    let Value::QExpr(formal_symbols) = &args[0] else {
        unreachable!()
    };
    for (i, sym) in formal_symbols.iter().enumerate() {
        if !matches!(sym, Value::Symbol(_)) {
            return EvalError::type_mismatch("\\", i, sym, "Symbol").into_value();
        }
    }

    let body = args.pop().expect("checked len == 2");
    let formals = args.pop().expect("checked len == 2");
    Value::Lambda(Lambda {
        formals: Box::new(formals),
        body: Box::new(body),
        env: env.clone(),
    })
}

fn builtin_eval(env: &Rc<Environment>, mut args: Vec<Value>) -> Value {
    if args.len() != 1 {
        return EvalError::arity("eval", args.len(), "1").into_value();
    }
    if !matches!(args[0], Value::QExpr(_)) {
        return EvalError::type_mismatch("eval", 0, &args[0], "Q-Expression").into_value();
    }
    eval(env, args.remove(0).into_sexpr())
}

fn builtin_if(env: &Rc<Environment>, mut args: Vec<Value>) -> Value {
    if args.len() != 3 {
        return EvalError::arity("if", args.len(), "3").into_value();
    }
    let Value::Integer(cond) = args[0] else {
        return EvalError::type_mismatch("if", 0, &args[0], "Number").into_value();
    };
    if !matches!(args[1], Value::QExpr(_)) {
        return EvalError::type_mismatch("if", 1, &args[1], "Q-Expression").into_value();
    }
    if !matches!(args[2], Value::QExpr(_)) {
        return EvalError::type_mismatch("if", 2, &args[2], "Q-Expression").into_value();
    }
    let else_branch = args.pop().expect("checked len == 3");
    let then_branch = args.pop().expect("checked len == 3");
    let branch = if cond != 0 { then_branch } else { else_branch };
    eval(env, branch.into_sexpr())
}

pub fn register(env: &Rc<Environment>) {
    env.define("def".to_string(), Value::Builtin(Builtin { name: "def", func: builtin_def }));
    env.define("=".to_string(), Value::Builtin(Builtin { name: "=", func: builtin_put }));
    env.define("\\".to_string(), Value::Builtin(Builtin { name: "\\", func: builtin_lambda }));
    env.define("eval".to_string(), Value::Builtin(Builtin { name: "eval", func: builtin_eval }));
    env.define("if".to_string(), Value::Builtin(Builtin { name: "if", func: builtin_if }));
}
