//! Documentation surface: `doc` and `help`.

use super::{arity_exact, define_builtin, type_error};
use crate::env::Environment;
use crate::value::Value;
use std::rc::Rc;

fn single_symbol(name: &str, args: &[Value]) -> Result<String, Value> {
    if args.len() != 1 {
        return Err(arity_exact(name, 1, args.len()));
    }
    match &args[0] {
        Value::QExpression(items) if items.len() == 1 => match &items[0] {
            Value::Symbol(s) => Ok(s.clone()),
            other => Err(type_error("symbol", other)),
        },
        other => Err(type_error("Q-Expression", other)),
    }
}

pub fn builtin_doc(env: Rc<Environment>, args: Vec<Value>) -> Value {
    if args.len() != 2 {
        return arity_exact("doc", 2, args.len());
    }
    let name = match single_symbol("doc", &args[..1]) {
        Ok(name) => name,
        Err(e) => return e,
    };
    let text = match &args[1] {
        Value::Text(text) => text.clone(),
        other => return type_error("string", other),
    };
    env.define_doc(&name, text);
    Value::SExpression(vec![])
}

pub fn builtin_help(env: Rc<Environment>, args: Vec<Value>) -> Value {
    let name = match single_symbol("help", &args) {
        Ok(name) => name,
        Err(e) => return e,
    };

    if name == "env" {
        for (binding, value) in env.own_bindings() {
            println!("{} = {}", binding, value);
        }
    } else {
        match env.get_doc(&name) {
            Some(text) => println!("{}", text),
            None => println!("No documentation for '{}'", name),
        }
    }
    Value::SExpression(vec![])
}

pub fn register(env: &Rc<Environment>) {
    define_builtin(
        env,
        "doc",
        builtin_doc,
        "(doc {sym} \"text\") records documentation for sym in the current environment.",
    );
    define_builtin(
        env,
        "help",
        builtin_help,
        "(help {sym}) prints sym's documentation; (help {env}) prints the environment snapshot.",
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::Environment;

    #[test]
    fn test_doc_then_help_round_trips_through_get_doc() {
        let env = Environment::new();
        let name_q = Value::QExpression(vec![Value::Symbol("x".to_string())]);
        builtin_doc(env.clone(), vec![name_q, Value::Text("the x value".to_string())]);
        assert_eq!(env.get_doc("x"), Some("the x value".to_string()));
    }

    #[test]
    fn test_help_on_undocumented_symbol_does_not_error() {
        let env = Environment::new();
        let name_q = Value::QExpression(vec![Value::Symbol("mystery".to_string())]);
        let result = builtin_help(env, vec![name_q]);
        assert_eq!(result, Value::SExpression(vec![]));
    }
}
