//! Output and file loading: `print`, `error`, `load`.

use super::{arity_exact, define_builtin, type_error};
use crate::env::Environment;
use crate::error::LoadFailure;
use crate::eval::eval;
use crate::parser::parse_file_form;
use crate::value::Value;
use std::rc::Rc;

pub fn builtin_print(_env: Rc<Environment>, args: Vec<Value>) -> Value {
    let rendered: Vec<String> = args.iter().map(Value::display_string).collect();
    println!("{}", rendered.join(" "));
    Value::SExpression(vec![])
}

pub fn builtin_error(_env: Rc<Environment>, mut args: Vec<Value>) -> Value {
    if args.len() != 1 {
        return arity_exact("error", 1, args.len());
    }
    match args.remove(0) {
        Value::Text(msg) => Value::Error(msg),
        other => type_error("string", &other),
    }
}

fn read_file(path: &str) -> Result<String, LoadFailure> {
    std::fs::read_to_string(path).map_err(|source| LoadFailure::Io {
        path: path.to_string(),
        source,
    })
}

/// Evaluates every top-level form in `source`, in file mode, against `env`.
/// Parse or eval errors are printed and do not stop later forms.
pub fn load_source(source: &str, env: Rc<Environment>) {
    let mut cursor = source;
    while let Some(form) = parse_file_form(&mut cursor) {
        match form {
            Ok(value) => {
                let result = eval(value, env.clone());
                if result.is_error() {
                    println!("{}", result);
                }
            }
            Err(e) => println!("Parse error: {}", e),
        }
    }
}

pub fn builtin_load(env: Rc<Environment>, mut args: Vec<Value>) -> Value {
    if args.len() != 1 {
        return arity_exact("load", 1, args.len());
    }
    let path = match args.remove(0) {
        Value::Text(path) => path,
        other => return type_error("string", &other),
    };

    match read_file(&path) {
        Ok(source) => {
            load_source(&source, env.root());
            Value::SExpression(vec![])
        }
        Err(e) => Value::Error(e.to_string()),
    }
}

pub fn register(env: &Rc<Environment>) {
    define_builtin(env, "print", builtin_print, "(print v ...) writes values separated by spaces, then a newline.");
    define_builtin(env, "error", builtin_error, "(error \"msg\") returns an Error carrying msg.");
    define_builtin(
        env,
        "load",
        builtin_load,
        "(load \"path\") reads and evaluates a file's top-level forms in the global environment.",
    );
}
