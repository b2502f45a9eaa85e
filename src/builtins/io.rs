// ABOUTME: print, error, load. The only builtins that touch the outside
// ABOUTME: world (stdout, the filesystem) or consume rather than propagate
// ABOUTME: an Error: `load` prints per-form errors and keeps going.

use crate::env::Environment;
use crate::error::EvalError;
use crate::eval::eval;
use crate::reader::read_all;
use crate::value::{Builtin, Value};
use std::rc::Rc;

fn builtin_print(_env: &Rc<Environment>, args: Vec<Value>) -> Value {
    let rendered: Vec<String> = args.iter().map(|v| v.to_string()).collect();
    println!("{}", rendered.join(" "));
    Value::SExpr(vec![])
}

fn builtin_error(_env: &Rc<Environment>, args: Vec<Value>) -> Value {
    if args.len() != 1 {
        return EvalError::arity("error", args.len(), "1").into_value();
    }
    match &args[0] {
        Value::String(msg) => Value::Error(msg.clone()),
        other => EvalError::type_mismatch("error", 0, other, "String").into_value(),
    }
}

fn builtin_load(env: &Rc<Environment>, mut args: Vec<Value>) -> Value {
    if args.len() != 1 {
        return EvalError::arity("load", args.len(), "1").into_value();
    }
    if !matches!(args[0], Value::String(_)) {
        return EvalError::type_mismatch("load", 0, &args[0], "String").into_value();
    }
    let Value::String(path) = args.remove(0) else {
        unreachable!("checked above")
    };

    let contents = match std::fs::read_to_string(&path) {
        Ok(contents) => contents,
        Err(_) => return EvalError::LoadFailed(path).into_value(),
    };

    match read_all(&contents) {
        Value::SExpr(forms) => {
            for form in forms {
                let result = eval(env, form);
                if let Value::Error(msg) = result {
                    println!("Error: {msg}");
                }
            }
        }
        // read_all only ever returns a top-level Error for malformed input
        // inside a single form; the forms that did parse are simply lost,
        // matching the original's "whole file or nothing" read step.
        err @ Value::Error(_) => println!("{err}"),
        _ => unreachable!("read_all's top-level result is always an SExpr or an Error"),
    }

    Value::SExpr(vec![])
}

pub fn register(env: &Rc<Environment>) {
    env.define("print".to_string(), Value::Builtin(Builtin { name: "print", func: builtin_print }));
    env.define("error".to_string(), Value::Builtin(Builtin { name: "error", func: builtin_error }));
    env.define("load".to_string(), Value::Builtin(Builtin { name: "load", func: builtin_load }));
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
    fn error_wraps_string_message() {
        assert_eq!(
            builtin_error(&env(), vec![Value::String("boom".to_string())]),
            Value::Error("boom".to_string())
        );
    }

    #[test]
    fn error_requires_a_string_argument() {
        assert!(builtin_error(&env(), vec![Value::Integer(1)]).is_error());
    }

    #[test]
    fn print_returns_empty_sexpr() {
        assert_eq!(
            builtin_print(&env(), vec![Value::Integer(1), Value::Integer(2)]),
            Value::SExpr(vec![])
        );
    }

    #[test]
    fn load_of_missing_file_is_an_error() {
        assert_eq!(
            builtin_load(&env(), vec![Value::String("/no/such/file.lispy".to_string())]),
            Value::Error("Could not load library /no/such/file.lispy".to_string())
        );
    }

    #[test]
    fn load_reads_and_evaluates_every_form() {
        let dir = std::env::temp_dir();
        let path = dir.join(format!("lispy-load-test-{}.lispy", std::process::id()));
        std::fs::write(&path, "(def {x} 41) (def {y} (+ x 1))").unwrap();

        let env = Environment::new();
        crate::builtins::register_builtins(&env);
        let result = builtin_load(&env, vec![Value::String(path.to_string_lossy().to_string())]);

        assert_eq!(result, Value::SExpr(vec![]));
        assert_eq!(env.get("y"), Some(Value::Integer(42)));

        let _ = std::fs::remove_file(&path);
    }
}
