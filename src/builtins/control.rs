//! Conditional branching: `if`.

use super::{arity_exact, define_builtin, type_error};
use crate::env::Environment;
use crate::eval::eval;
use crate::value::Value;
use std::rc::Rc;

pub fn builtin_if(env: Rc<Environment>, mut args: Vec<Value>) -> Value {
    if args.len() != 3 {
        return arity_exact("if", 3, args.len());
    }
    let else_branch = args.remove(2);
    let then_branch = args.remove(1);
    let cond = args.remove(0);

    let cond = match cond {
        Value::Integer(n) => n,
        other => return type_error("number", &other),
    };

    let branch = if cond != 0 { then_branch } else { else_branch };
    match branch {
        Value::QExpression(items) => eval(Value::SExpression(items), env),
        other => type_error("Q-Expression", &other),
    }
}

pub fn register(env: &Rc<Environment>) {
    define_builtin(
        env,
        "if",
        builtin_if,
        "(if cond then-q else-q) evaluates then-q if cond is nonzero, else else-q.",
    );
}
