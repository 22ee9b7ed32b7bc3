//! Arithmetic: `+ - * /`, Integers only.

use super::{arity_min, define_builtin, type_error};
use crate::env::Environment;
use crate::value::Value;
use std::rc::Rc;

fn as_integer(v: &Value) -> Result<i64, Value> {
    match v {
        Value::Integer(n) => Ok(*n),
        other => Err(type_error("number", other)),
    }
}

pub fn builtin_add(_env: Rc<Environment>, args: Vec<Value>) -> Value {
    if args.is_empty() {
        return arity_min("+", 1, 0);
    }
    let mut sum = match as_integer(&args[0]) {
        Ok(n) => n,
        Err(e) => return e,
    };
    for arg in &args[1..] {
        match as_integer(arg) {
            Ok(n) => sum += n,
            Err(e) => return e,
        }
    }
    Value::Integer(sum)
}

pub fn builtin_sub(_env: Rc<Environment>, args: Vec<Value>) -> Value {
    if args.is_empty() {
        return arity_min("-", 1, 0);
    }
    let first = match as_integer(&args[0]) {
        Ok(n) => n,
        Err(e) => return e,
    };
    if args.len() == 1 {
        return Value::Integer(-first);
    }
    let mut result = first;
    for arg in &args[1..] {
        match as_integer(arg) {
            Ok(n) => result -= n,
            Err(e) => return e,
        }
    }
    Value::Integer(result)
}

pub fn builtin_mul(_env: Rc<Environment>, args: Vec<Value>) -> Value {
    if args.is_empty() {
        return arity_min("*", 1, 0);
    }
    let mut product = match as_integer(&args[0]) {
        Ok(n) => n,
        Err(e) => return e,
    };
    for arg in &args[1..] {
        match as_integer(arg) {
            Ok(n) => product *= n,
            Err(e) => return e,
        }
    }
    Value::Integer(product)
}

pub fn builtin_div(_env: Rc<Environment>, args: Vec<Value>) -> Value {
    if args.is_empty() {
        return arity_min("/", 1, 0);
    }
    let first = match as_integer(&args[0]) {
        Ok(n) => n,
        Err(e) => return e,
    };
    if args.len() == 1 {
        return Value::Integer(first);
    }
    let mut result = first;
    for arg in &args[1..] {
        match as_integer(arg) {
            Ok(0) => return Value::Error("Division by zero".to_string()),
            Ok(n) => result /= n,
            Err(e) => return e,
        }
    }
    Value::Integer(result)
}

pub fn register(env: &Rc<Environment>) {
    define_builtin(env, "+", builtin_add, "(+ n1 n2 ...) sums its arguments.");
    define_builtin(
        env,
        "-",
        builtin_sub,
        "(- n1 n2 ...) subtracts left to right; (- n) negates n.",
    );
    define_builtin(
        env,
        "*",
        builtin_mul,
        "(* n1 n2 ...) multiplies its arguments.",
    );
    define_builtin(
        env,
        "/",
        builtin_div,
        "(/ n1 n2 ...) divides left to right; (/ n) returns n unchanged. Truncates toward zero.",
    );
}
