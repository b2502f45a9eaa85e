// ABOUTME: The tree-walking evaluator: SExpr reduction, builtin dispatch,
// ABOUTME: and lambda call with partial application. No tail-call
// ABOUTME: optimization; this is plain, unbounded recursion by design.

use crate::env::Environment;
use crate::error::EvalError;
use crate::value::{Lambda, Value};
use std::rc::Rc;

/// `eval(env, value)`: the single entry point every other evaluation in the
/// interpreter goes through.
pub fn eval(env: &Rc<Environment>, value: Value) -> Value {
    match value {
        Value::Symbol(s) => env
            .get(&s)
            .unwrap_or_else(|| EvalError::UnboundSymbol(s).into_value()),
        Value::SExpr(items) => eval_sexpr(env, items),
        // QExpr, Integer, String, Error, Builtin, Lambda: self-evaluating.
        other => other,
    }
}

fn eval_sexpr(env: &Rc<Environment>, items: Vec<Value>) -> Value {
    // Every child is evaluated, in order, even once an earlier one has
    // already produced an Error: a child like `(def {x} 1)` must still run
    // for its side effect. Only after every child has run do we look for
    // the first Error to propagate.
    let evaluated: Vec<Value> = items.into_iter().map(|item| eval(env, item)).collect();

    if let Some(pos) = evaluated.iter().position(Value::is_error) {
        return evaluated.into_iter().nth(pos).expect("position is in bounds");
    }

    let mut evaluated = evaluated;
    if evaluated.is_empty() {
        return Value::SExpr(evaluated);
    }
    if evaluated.len() == 1 {
        return evaluated.pop().expect("checked len == 1");
    }

    let function = evaluated.remove(0);
    let args = evaluated;
    match function {
        Value::Builtin(b) => (b.func)(env, args),
        Value::Lambda(l) => call_lambda(l, args),
        other => EvalError::NotAFunction {
            got: other.type_name(),
        }
        .into_value(),
    }
}

/// Partial-application call protocol. A fresh per-call frame, parented to
/// the lambda's captured environment, accumulates formal bindings. Binding
/// args into a new child frame rather than reparenting the captured
/// environment to the caller is what makes closures and partial application
/// compose: the captured environment stays fixed at construction time, so a
/// later call site can never leak its own bindings back into the closure.
fn call_lambda(lambda: Lambda, args: Vec<Value>) -> Value {
    let Lambda {
        formals,
        body,
        env: captured_env,
    } = lambda;
    let Value::QExpr(mut formals) = *formals else {
        unreachable!("Lambda::formals is always a QExpr")
    };

    let given = args.len();
    let total = formals.len();
    let call_frame = Environment::with_parent(captured_env);
    let mut args = args.into_iter();

    loop {
        let Some(arg) = args.next() else { break };

        if formals.is_empty() {
            return EvalError::TooManyArgs {
                got: given,
                expected: total,
            }
            .into_value();
        }

        let sym = match formals.remove(0) {
            Value::Symbol(s) => s,
            _ => unreachable!("lambda formals are always Symbols"),
        };

        if sym == "&" {
            let Some(Value::Symbol(rest_name)) = (!formals.is_empty()).then(|| formals.remove(0))
            else {
                return EvalError::InvalidVariadic.into_value();
            };
            if !formals.is_empty() {
                return EvalError::InvalidVariadic.into_value();
            }
            let mut rest = vec![arg];
            rest.extend(args);
            call_frame.put(rest_name, Value::QExpr(rest));
            break;
        }

        call_frame.put(sym, arg);
    }

    // Variadic formal with zero remaining args: bind the rest symbol to an
    // empty QExpr rather than leaving it unbound.
    if formals.first() == Some(&Value::Symbol("&".to_string())) {
        if formals.len() != 2 {
            return EvalError::InvalidVariadic.into_value();
        }
        formals.remove(0);
        let Value::Symbol(rest_name) = formals.remove(0) else {
            return EvalError::InvalidVariadic.into_value();
        };
        call_frame.put(rest_name, Value::QExpr(vec![]));
    }

    if formals.is_empty() {
        eval(&call_frame, body.into_sexpr())
    } else {
        Value::Lambda(Lambda {
            formals: Box::new(Value::QExpr(formals)),
            body,
            env: call_frame,
        })
    }
}
