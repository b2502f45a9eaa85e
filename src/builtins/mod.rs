// ABOUTME: The fixed builtin set (§4.E): arithmetic, comparison, list
// ABOUTME: operations, and the environment/control-flow-touching special
// ABOUTME: forms, plus the handful of builtins that touch the outside world.

use crate::env::Environment;
use std::rc::Rc;

pub mod arithmetic;
pub mod comparison;
pub mod io;
pub mod lists;
pub mod special_forms;

/// Registers every builtin the spec names into `env`, which should be the
/// global environment. `Environment::define` is used throughout, so this
/// works correctly called against any frame, but callers always pass the
/// global.
pub fn register_builtins(env: &Rc<Environment>) {
    arithmetic::register(env);
    comparison::register(env);
    lists::register(env);
    special_forms::register(env);
    io::register(env);
}
