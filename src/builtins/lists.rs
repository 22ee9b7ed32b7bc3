//! Q-Expression manipulation: `list eval head tail join`.

use super::{arity_exact, define_builtin, type_error};
use crate::env::Environment;
use crate::eval::eval;
use crate::value::Value;
use std::rc::Rc;

pub fn builtin_list(_env: Rc<Environment>, args: Vec<Value>) -> Value {
    Value::QExpression(args)
}

pub fn builtin_eval(env: Rc<Environment>, mut args: Vec<Value>) -> Value {
    if args.len() != 1 {
        return arity_exact("eval", 1, args.len());
    }
    match args.remove(0) {
        Value::QExpression(items) => eval(Value::SExpression(items), env),
        other => type_error("Q-Expression", &other),
    }
}

pub fn builtin_head(_env: Rc<Environment>, mut args: Vec<Value>) -> Value {
    if args.len() != 1 {
        return arity_exact("head", 1, args.len());
    }
    match args.remove(0) {
        Value::QExpression(items) if items.is_empty() => {
            Value::Error("'head' requires a non-empty Q-Expression".to_string())
        }
        Value::QExpression(mut items) => Value::QExpression(vec![items.remove(0)]),
        other => type_error("Q-Expression", &other),
    }
}

pub fn builtin_tail(_env: Rc<Environment>, mut args: Vec<Value>) -> Value {
    if args.len() != 1 {
        return arity_exact("tail", 1, args.len());
    }
    match args.remove(0) {
        Value::QExpression(items) if items.is_empty() => {
            Value::Error("'tail' requires a non-empty Q-Expression".to_string())
        }
        Value::QExpression(mut items) => {
            items.remove(0);
            Value::QExpression(items)
        }
        other => type_error("Q-Expression", &other),
    }
}

pub fn builtin_join(_env: Rc<Environment>, args: Vec<Value>) -> Value {
    if args.is_empty() {
        return arity_exact("join", 1, 0);
    }
    let mut joined = Vec::new();
    for arg in args {
        match arg {
            Value::QExpression(items) => joined.extend(items),
            other => return type_error("Q-Expression", &other),
        }
    }
    Value::QExpression(joined)
}

pub fn register(env: &Rc<Environment>) {
    define_builtin(env, "list", builtin_list, "(list v ...) collects its arguments into a Q-Expression.");
    define_builtin(
        env,
        "eval",
        builtin_eval,
        "(eval q) evaluates a Q-Expression's contents as an S-Expression.",
    );
    define_builtin(
        env,
        "head",
        builtin_head,
        "(head q) returns a Q-Expression holding only q's first element.",
    );
    define_builtin(env, "tail", builtin_tail, "(tail q) returns q without its first element.");
    define_builtin(env, "join", builtin_join, "(join q ...) concatenates Q-Expressions in order.");
}
