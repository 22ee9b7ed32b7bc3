// ABOUTME: Evaluator module for reducing parsed Lispy expressions

use crate::env::Environment;
use crate::value::Value;
use std::rc::Rc;

/// Reduces `expr` against `env`. Errors are ordinary `Value::Error`s, never
/// a Rust `Result::Err` — the evaluator never panics on malformed input.
pub fn eval(expr: Value, env: Rc<Environment>) -> Value {
    match expr {
        Value::Symbol(name) => match env.get(&name) {
            Some(value) => value,
            None => Value::Error(format!("Unbound symbol '{}'", name)),
        },
        Value::SExpression(items) => eval_sexpr(items, env),
        other => other,
    }
}

fn eval_sexpr(items: Vec<Value>, env: Rc<Environment>) -> Value {
    let mut evaluated = Vec::with_capacity(items.len());
    for item in items {
        let value = eval(item, env.clone());
        if value.is_error() {
            return value;
        }
        evaluated.push(value);
    }

    match evaluated.len() {
        0 => Value::SExpression(vec![]),
        1 => evaluated.into_iter().next().unwrap(),
        _ => {
            let mut rest = evaluated;
            let operator = rest.remove(0);
            let operands = rest;
            apply(operator, operands, env)
        }
    }
}

/// Applies an already-evaluated operator to already-evaluated operands in
/// the caller's environment.
pub fn apply(operator: Value, operands: Vec<Value>, caller_env: Rc<Environment>) -> Value {
    match operator {
        Value::BuiltinFunction { func, .. } => func(caller_env, operands),
        Value::Lambda {
            env,
            formals,
            body,
        } => apply_lambda(caller_env, env.snapshot(), formals, body, operands),
        other => Value::Error(format!("Expected function, got {}", other)),
    }
}

fn apply_lambda(
    caller_env: Rc<Environment>,
    local_env: Rc<Environment>,
    mut formals: Vec<String>,
    body: Vec<Value>,
    mut operands: Vec<Value>,
) -> Value {
    let original_formals_len = formals.len();
    let original_operands_len = operands.len();

    while !operands.is_empty() {
        if formals.is_empty() {
            return Value::Error(format!(
                "Expected {} arguments, got {}",
                original_formals_len, original_operands_len
            ));
        }
        let sym = formals.remove(0);
        if sym == "&" {
            if formals.len() != 1 {
                return Value::Error("Expected a single symbol following '&'".to_string());
            }
            let rest_name = formals.remove(0);
            local_env.define(rest_name, Value::QExpression(operands));
            operands = Vec::new();
            break;
        }
        let arg = operands.remove(0);
        local_env.define(sym, arg);
    }

    if formals.first().map(|s| s == "&").unwrap_or(false) {
        if formals.len() != 2 {
            return Value::Error("Expected a single symbol following '&'".to_string());
        }
        let rest_name = formals.remove(1);
        formals.clear();
        local_env.define(rest_name, Value::QExpression(vec![]));
    }

    if formals.is_empty() {
        local_env.set_parent(Some(caller_env));
        let result = eval(Value::SExpression(body), local_env.clone());
        local_env.set_parent(None);
        result
    } else {
        Value::Lambda {
            env: local_env,
            formals,
            body,
        }
    }
}
