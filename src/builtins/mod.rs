//! Primitive operations grouped the way the interpreter's core is organized:
//! one register function per category, all invoked from `register_builtins`.

use crate::env::Environment;
use crate::value::Value;
use std::rc::Rc;

pub mod arithmetic;
pub mod binding;
pub mod comparison;
pub mod control;
pub mod help;
pub mod io;
pub mod lambda;
pub mod lists;

pub fn register_builtins(env: &Rc<Environment>) {
    arithmetic::register(env);
    comparison::register(env);
    lists::register(env);
    control::register(env);
    binding::register(env);
    lambda::register(env);
    io::register(env);
    help::register(env);
}

/// `'<name>' expected N argument(s), got M`
pub(crate) fn arity_exact(name: &str, expected: usize, got: usize) -> Value {
    Value::Error(format!(
        "'{}' expected {} argument(s), got {}",
        name, expected, got
    ))
}

pub(crate) fn arity_min(name: &str, min: usize, got: usize) -> Value {
    Value::Error(format!(
        "'{}' expected at least {} argument(s), got {}",
        name, min, got
    ))
}

pub(crate) fn type_error(expected: &str, got: &Value) -> Value {
    Value::Error(format!("Expected {}, got {}", expected, got))
}

pub(crate) fn define_builtin(env: &Rc<Environment>, name: &str, func: crate::value::BuiltinFn, doc: &str) {
    env.define(
        name.to_string(),
        Value::BuiltinFunction {
            name: name.to_string(),
            func,
        },
    );
    env.define_doc(name, doc.to_string());
}
