// ABOUTME: End-to-end tests driving the parser, evaluator, and builtins together

use lispy::builtins::{io::load_source, register_builtins};
use lispy::env::Environment;
use lispy::eval::eval;
use lispy::parser::parse_line;
use lispy::value::Value;
use std::rc::Rc;

fn setup() -> Rc<Environment> {
    let env = Environment::new();
    register_builtins(&env);
    let stdlib = std::fs::read_to_string("stdlib.lispy").expect("stdlib.lispy should be readable");
    load_source(&stdlib, env.clone());
    env
}

fn run(env: &Rc<Environment>, source: &str) -> Value {
    let parsed = parse_line(source).expect("source should parse");
    eval(parsed, env.clone())
}

#[test]
fn test_scenario_simple_arithmetic() {
    let env = setup();
    assert_eq!(run(&env, "(+ 1 2 3)"), Value::Integer(6));
}

#[test]
fn test_scenario_def_then_lookup() {
    let env = setup();
    run(&env, "(def {x} 100)");
    assert_eq!(run(&env, "x"), Value::Integer(100));
}

#[test]
fn test_scenario_factorial_via_fun() {
    let env = setup();
    run(
        &env,
        "(fun {factorial n} { if (== n 0) {1} { (* n (factorial (- n 1))) } })",
    );
    assert_eq!(run(&env, "(factorial 5)"), Value::Integer(120));
}

#[test]
fn test_scenario_lambda_application() {
    let env = setup();
    assert_eq!(run(&env, "((\\ {x y} {+ x y}) 10 20)"), Value::Integer(30));
}

#[test]
fn test_scenario_partial_application() {
    let env = setup();
    run(&env, "(def {add-mul} (\\ {x y} {+ x (* x y)}))");
    let partial = run(&env, "(add-mul 10)");
    assert!(matches!(partial, Value::Lambda { .. }));
    assert!(format!("{}", partial).contains("x=10"));

    env.define("partial".to_string(), partial);
    assert_eq!(run(&env, "(partial 50)"), Value::Integer(510));
}

#[test]
fn test_scenario_variadic_binding() {
    let env = setup();
    run(&env, "(def {my-join} (\\ {x & xs} {join x xs}))");
    let result = run(&env, "(my-join {a} {b} {c})");
    assert_eq!(
        result,
        Value::QExpression(vec![
            Value::Symbol("a".to_string()),
            Value::QExpression(vec![Value::Symbol("b".to_string())]),
            Value::QExpression(vec![Value::Symbol("c".to_string())]),
        ])
    );
}

#[test]
fn test_scenario_error_propagation() {
    let env = setup();
    assert!(run(&env, "(+ 1 (head {}))").is_error());
}

#[test]
fn test_scenario_unbound_symbol() {
    let env = setup();
    assert_eq!(
        run(&env, "y"),
        Value::Error("Unbound symbol 'y'".to_string())
    );
}

#[test]
fn test_empty_qexpr_and_sexpr_are_distinct_values() {
    let env = setup();
    assert_eq!(run(&env, "{}"), Value::QExpression(vec![]));
    assert_eq!(run(&env, "()"), Value::SExpression(vec![]));
}

#[test]
fn test_eval_of_qexpression_matches_direct_sexpression_eval() {
    let env = setup();
    let via_eval = run(&env, "(eval {+ 1 2})");
    let direct = run(&env, "(+ 1 2)");
    assert_eq!(via_eval, direct);
}

#[test]
fn test_head_join_tail_round_trip() {
    let env = setup();
    run(&env, "(def {q} {1 2 3})");
    let result = run(&env, "(join (head q) (tail q))");
    assert_eq!(result, run(&env, "q"));
}

#[test]
fn test_doc_and_help_do_not_error() {
    let env = setup();
    assert!(!run(&env, "(doc {pi} \"approximately three\")").is_error());
    assert!(!run(&env, "(help {pi})").is_error());
}

#[test]
fn test_recursive_stdlib_len_and_map() {
    let env = setup();
    assert_eq!(run(&env, "(len {1 2 3 4})"), Value::Integer(4));
    let doubled = run(&env, "(map (\\ {x} {* 2 x}) {1 2 3})");
    assert_eq!(
        doubled,
        Value::QExpression(vec![Value::Integer(2), Value::Integer(4), Value::Integer(6)])
    );
}
