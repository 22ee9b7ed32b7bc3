//! Ordering (`< <= > >=`, two Integers) and structural equality (`== !=`, any tag).

use super::{arity_exact, define_builtin, type_error};
use crate::env::Environment;
use crate::value::Value;
use std::rc::Rc;

fn as_pair(name: &str, args: &[Value]) -> Result<(i64, i64), Value> {
    if args.len() != 2 {
        return Err(arity_exact(name, 2, args.len()));
    }
    let a = match &args[0] {
        Value::Integer(n) => *n,
        other => return Err(type_error("number", other)),
    };
    let b = match &args[1] {
        Value::Integer(n) => *n,
        other => return Err(type_error("number", other)),
    };
    Ok((a, b))
}

fn bool_value(b: bool) -> Value {
    Value::Integer(if b { 1 } else { 0 })
}

macro_rules! ordering_builtin {
    ($fn_name:ident, $name:expr, $op:tt) => {
        pub fn $fn_name(_env: Rc<Environment>, args: Vec<Value>) -> Value {
            match as_pair($name, &args) {
                Ok((a, b)) => bool_value(a $op b),
                Err(e) => e,
            }
        }
    };
}

ordering_builtin!(builtin_lt, "<", <);
ordering_builtin!(builtin_le, "<=", <=);
ordering_builtin!(builtin_gt, ">", >);
ordering_builtin!(builtin_ge, ">=", >=);

pub fn builtin_eq(_env: Rc<Environment>, args: Vec<Value>) -> Value {
    if args.len() != 2 {
        return arity_exact("==", 2, args.len());
    }
    bool_value(args[0] == args[1])
}

pub fn builtin_ne(_env: Rc<Environment>, args: Vec<Value>) -> Value {
    if args.len() != 2 {
        return arity_exact("!=", 2, args.len());
    }
    bool_value(args[0] != args[1])
}

pub fn register(env: &Rc<Environment>) {
    define_builtin(env, "<", builtin_lt, "(< a b) is 1 if a < b, else 0.");
    define_builtin(env, "<=", builtin_le, "(<= a b) is 1 if a <= b, else 0.");
    define_builtin(env, ">", builtin_gt, "(> a b) is 1 if a > b, else 0.");
    define_builtin(env, ">=", builtin_ge, "(>= a b) is 1 if a >= b, else 0.");
    define_builtin(
        env,
        "==",
        builtin_eq,
        "(== a b) is 1 if a and b are structurally equal, else 0.",
    );
    define_builtin(
        env,
        "!=",
        builtin_ne,
        "(!= a b) is 1 if a and b are not structurally equal, else 0.",
    );
}
