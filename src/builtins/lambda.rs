//! Lambda construction: `\`.

use super::{arity_exact, define_builtin, type_error};
use crate::env::Environment;
use crate::value::Value;
use std::rc::Rc;

pub fn builtin_lambda(_env: Rc<Environment>, mut args: Vec<Value>) -> Value {
    if args.len() != 2 {
        return arity_exact("\\", 2, args.len());
    }
    let body = match args.remove(1) {
        Value::QExpression(items) => items,
        other => return type_error("Q-Expression", &other),
    };
    let formals_q = match args.remove(0) {
        Value::QExpression(items) => items,
        other => return type_error("Q-Expression", &other),
    };

    let mut formals = Vec::with_capacity(formals_q.len());
    for f in formals_q {
        match f {
            Value::Symbol(name) => formals.push(name),
            other => return type_error("symbol", &other),
        }
    }

    Value::Lambda {
        env: Environment::new(),
        formals,
        body,
    }
}

pub fn register(env: &Rc<Environment>) {
    define_builtin(
        env,
        "\\",
        builtin_lambda,
        "(\\ {formal ...} {body ...}) constructs a Lambda with a fresh closure environment.",
    );
}
