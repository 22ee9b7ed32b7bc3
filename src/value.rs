// ABOUTME: Value types representing Lispy data structures and expressions

use crate::env::Environment;
use std::fmt;
use std::rc::Rc;

/// Signature of a primitive. Takes the calling environment because several
/// primitives (`eval`, `if`, `def`, `=`, `\`, `load`) need to reach back into
/// the evaluator or the environment chain rather than just their arguments.
pub type BuiltinFn = fn(Rc<Environment>, Vec<Value>) -> Value;

#[derive(Clone)]
pub enum Value {
    Error(String),
    Integer(i64),
    Text(String),
    Symbol(String),
    SExpression(Vec<Value>),
    QExpression(Vec<Value>),
    BuiltinFunction {
        name: String,
        func: BuiltinFn,
    },
    Lambda {
        env: Rc<Environment>,
        formals: Vec<String>,
        body: Vec<Value>,
    },
}

impl Value {
    pub fn is_error(&self) -> bool {
        matches!(self, Value::Error(_))
    }

    /// The rendering used by `print`: `Text` prints its raw content, every
    /// other value falls back to the debug form.
    pub fn display_string(&self) -> String {
        match self {
            Value::Text(s) => s.clone(),
            other => format!("{}", other),
        }
    }
}

fn escape_text(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for ch in s.chars() {
        match ch {
            '\n' => out.push_str("\\n"),
            '\t' => out.push_str("\\t"),
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            other => out.push(other),
        }
    }
    out.push('"');
    out
}

fn write_seq(f: &mut fmt::Formatter<'_>, open: char, items: &[Value], close: char) -> fmt::Result {
    write!(f, "{}", open)?;
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            write!(f, " ")?;
        }
        write!(f, "{}", item)?;
    }
    write!(f, "{}", close)
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Error(msg) => write!(f, "Error: {}", msg),
            Value::Integer(n) => write!(f, "{}", n),
            Value::Text(s) => write!(f, "{}", escape_text(s)),
            Value::Symbol(s) => write!(f, "{}", s),
            Value::SExpression(items) => write_seq(f, '(', items, ')'),
            Value::QExpression(items) => write_seq(f, '{', items, '}'),
            Value::BuiltinFunction { name, .. } => write!(f, "<{}>", name),
            Value::Lambda {
                env,
                formals,
                body,
            } => {
                write!(f, "(\\ ")?;
                write_seq(f, '{', &formals_as_symbols(formals), '}')?;
                write!(f, " ")?;
                write_seq(f, '{', body, '}')?;
                write!(f, ")")?;
                for (name, value) in env.own_bindings() {
                    write!(f, " {}={}", name, value)?;
                }
                Ok(())
            }
        }
    }
}

fn formals_as_symbols(formals: &[String]) -> Vec<Value> {
    formals.iter().cloned().map(Value::Symbol).collect()
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Error(a), Value::Error(b)) => a == b,
            (Value::Integer(a), Value::Integer(b)) => a == b,
            (Value::Text(a), Value::Text(b)) => a == b,
            (Value::Symbol(a), Value::Symbol(b)) => a == b,
            (Value::SExpression(a), Value::SExpression(b)) => a == b,
            (Value::QExpression(a), Value::QExpression(b)) => a == b,
            (Value::BuiltinFunction { name: a, .. }, Value::BuiltinFunction { name: b, .. }) => {
                a == b
            }
            (
                Value::Lambda {
                    formals: fa,
                    body: ba,
                    ..
                },
                Value::Lambda {
                    formals: fb,
                    body: bb,
                    ..
                },
            ) => fa == fb && ba == bb,
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integer_display() {
        assert_eq!(format!("{}", Value::Integer(42)), "42");
        assert_eq!(format!("{}", Value::Integer(-7)), "-7");
    }

    #[test]
    fn test_text_display_is_quoted_and_escaped() {
        let value = Value::Text("hi\nthere".to_string());
        assert_eq!(format!("{}", value), "\"hi\\nthere\"");
    }

    #[test]
    fn test_text_display_string_is_raw() {
        let value = Value::Text("hi\nthere".to_string());
        assert_eq!(value.display_string(), "hi\nthere");
    }

    #[test]
    fn test_sexpr_and_qexpr_display() {
        let s = Value::SExpression(vec![Value::Integer(1), Value::Integer(2)]);
        assert_eq!(format!("{}", s), "(1 2)");

        let q = Value::QExpression(vec![Value::Integer(1), Value::Integer(2)]);
        assert_eq!(format!("{}", q), "{1 2}");

        let empty = Value::SExpression(vec![]);
        assert_eq!(format!("{}", empty), "()");
    }

    #[test]
    fn test_nested_display() {
        let nested = Value::SExpression(vec![
            Value::Integer(1),
            Value::QExpression(vec![Value::Integer(2), Value::Integer(3)]),
        ]);
        assert_eq!(format!("{}", nested), "(1 {2 3})");
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            format!("{}", Value::Error("boom".to_string())),
            "Error: boom"
        );
    }

    #[test]
    fn test_lambda_equality_ignores_environment() {
        let env_a = Environment::new();
        let env_b = Environment::new();
        env_b.define("unrelated".to_string(), Value::Integer(1));

        let a = Value::Lambda {
            env: env_a,
            formals: vec!["x".to_string()],
            body: vec![Value::Symbol("x".to_string())],
        };
        let b = Value::Lambda {
            env: env_b,
            formals: vec!["x".to_string()],
            body: vec![Value::Symbol("x".to_string())],
        };
        assert_eq!(a, b);
    }

    #[test]
    fn test_builtin_equality_by_name_only() {
        fn f(_env: Rc<Environment>, _args: Vec<Value>) -> Value {
            Value::Integer(0)
        }
        let a = Value::BuiltinFunction {
            name: "+".to_string(),
            func: f,
        };
        let b = Value::BuiltinFunction {
            name: "+".to_string(),
            func: f,
        };
        assert_eq!(a, b);
    }

    #[test]
    fn test_cross_tag_never_equal() {
        assert_ne!(Value::Integer(0), Value::Text("0".to_string()));
    }

    #[test]
    fn test_lambda_display_includes_bound_args() {
        let env = Environment::new();
        env.define("x".to_string(), Value::Integer(10));
        let lambda = Value::Lambda {
            env,
            formals: vec!["y".to_string()],
            body: vec![Value::SExpression(vec![
                Value::Symbol("+".to_string()),
                Value::Symbol("x".to_string()),
                Value::Symbol("y".to_string()),
            ])],
        };
        assert_eq!(format!("{}", lambda), "(\\ {y} {(+ x y)}) x=10");
    }
}
