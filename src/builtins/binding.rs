//! Name binding: `def` (global) and `=` (current scope).

use super::{define_builtin, type_error};
use crate::env::Environment;
use crate::value::Value;
use std::rc::Rc;

fn bind(env: Rc<Environment>, args: Vec<Value>, global: bool) -> Value {
    if args.is_empty() {
        return type_error("Q-Expression", &Value::SExpression(vec![]));
    }
    let mut iter = args.into_iter();
    let symbols = match iter.next().unwrap() {
        Value::QExpression(items) => items,
        other => return type_error("Q-Expression", &other),
    };

    let mut names = Vec::with_capacity(symbols.len());
    for s in symbols {
        match s {
            Value::Symbol(name) => names.push(name),
            other => return type_error("symbol", &other),
        }
    }

    let values: Vec<Value> = iter.collect();
    if names.len() != values.len() {
        return Value::Error(format!(
            "Found {} symbols but {} values",
            names.len(),
            values.len()
        ));
    }

    for (name, value) in names.into_iter().zip(values.into_iter()) {
        if global {
            env.define_global(name, value);
        } else {
            env.define(name, value);
        }
    }
    Value::SExpression(vec![])
}

pub fn builtin_def(env: Rc<Environment>, args: Vec<Value>) -> Value {
    bind(env, args, true)
}

pub fn builtin_set(env: Rc<Environment>, args: Vec<Value>) -> Value {
    bind(env, args, false)
}

pub fn register(env: &Rc<Environment>) {
    define_builtin(
        env,
        "def",
        builtin_def,
        "(def {sym ...} val ...) binds symbols to values in the global environment.",
    );
    define_builtin(
        env,
        "=",
        builtin_set,
        "(= {sym ...} val ...) binds symbols to values in the current environment.",
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::Environment;

    #[test]
    fn test_def_writes_to_global_even_from_local_scope() {
        let global = Environment::new();
        crate::builtins::register_builtins(&global);
        let local = Environment::new();
        local.set_parent(Some(global.clone()));

        let args = vec![
            Value::QExpression(vec![Value::Symbol("x".to_string())]),
            Value::Integer(42),
        ];
        builtin_def(local.clone(), args);

        assert_eq!(global.get("x"), Some(Value::Integer(42)));
    }

    #[test]
    fn test_set_writes_to_current_scope_only() {
        let global = Environment::new();
        let local = Environment::new();
        local.set_parent(Some(global.clone()));

        let args = vec![
            Value::QExpression(vec![Value::Symbol("x".to_string())]),
            Value::Integer(42),
        ];
        builtin_set(local.clone(), args);

        assert_eq!(local.get("x"), Some(Value::Integer(42)));
        assert!(global.get("x").is_none());
    }

    #[test]
    fn test_symbol_value_count_mismatch() {
        let env = Environment::new();
        let args = vec![
            Value::QExpression(vec![
                Value::Symbol("x".to_string()),
                Value::Symbol("y".to_string()),
            ]),
            Value::Integer(1),
        ];
        assert_eq!(
            builtin_def(env, args),
            Value::Error("Found 2 symbols but 1 values".to_string())
        );
    }
}
