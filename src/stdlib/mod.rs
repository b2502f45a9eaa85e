// ABOUTME: The minimal standard-library script (§6), embedded as source data
// ABOUTME: via `include_str!` and loaded into the global environment before
// ABOUTME: either REPL or script mode starts. It is data, not core logic: it
// ABOUTME: defines `fun`, `unpack`, and `pack` purely in terms of builtins
// ABOUTME: the evaluator already provides.

use crate::env::Environment;
use crate::eval::eval;
use crate::reader::read_all;
use crate::value::Value;
use std::rc::Rc;

const CORE: &str = include_str!("lisp/core.lisp");

/// Loads the standard-library script into `env`. Unlike the `load` builtin,
/// a failure here is a bug in this crate rather than user input, so it
/// panics instead of printing and continuing.
pub fn load_stdlib(env: &Rc<Environment>) {
    match read_all(CORE) {
        Value::SExpr(forms) => {
            for form in forms {
                let result = eval(env, form);
                if let Value::Error(msg) = result {
                    panic!("stdlib script failed to evaluate: {msg}");
                }
            }
        }
        Value::Error(msg) => panic!("stdlib script failed to parse: {msg}"),
        _ => unreachable!("read_all's top-level result is always an SExpr or an Error"),
    }
}
