// ABOUTME: Interactive REPL loop: line editing, multi-line continuation, eval, print

use crate::config::{PROMPT, WELCOME_MESSAGE, WELCOME_SUBTITLE};
use crate::env::Environment;
use crate::eval::eval;
use crate::parser::parse_line;
use rustyline::completion::Completer;
use rustyline::error::ReadlineError;
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::validate::{ValidationContext, ValidationResult, Validator};
use rustyline::{Config, Editor, Helper};
use std::rc::Rc;

/// A trailing `;` means "more input is coming" — rustyline keeps the line
/// open and feeds the user another prompt until a line doesn't end in `;`.
struct LispyHelper;

impl Helper for LispyHelper {}
impl Completer for LispyHelper {
    type Candidate = String;
}
impl Hinter for LispyHelper {
    type Hint = String;
}
impl Highlighter for LispyHelper {}

impl Validator for LispyHelper {
    fn validate(&self, ctx: &mut ValidationContext) -> rustyline::Result<ValidationResult> {
        if ctx.input().trim_end().ends_with(';') {
            Ok(ValidationResult::Incomplete)
        } else {
            Ok(ValidationResult::Valid(None))
        }
    }
}

const HISTORY_FILE: &str = ".lispy_history";

pub fn run(env: Rc<Environment>) -> rustyline::Result<()> {
    let config = Config::builder().auto_add_history(true).build();
    let mut rl = Editor::with_config(config)?;
    rl.set_helper(Some(LispyHelper));
    let _ = rl.load_history(HISTORY_FILE);

    println!("{}", WELCOME_MESSAGE);
    println!("{}", WELCOME_SUBTITLE);

    loop {
        match rl.readline(PROMPT) {
            Ok(line) => {
                if line.trim().is_empty() {
                    continue;
                }
                match parse_line(&line) {
                    Ok(value) => println!("{}", eval(value, env.clone())),
                    Err(e) => println!("Parse error: {}", e),
                }
            }
            Err(ReadlineError::Interrupted) => continue,
            Err(ReadlineError::Eof) => break,
            Err(e) => {
                eprintln!("{}", e);
                break;
            }
        }
    }

    let _ = rl.save_history(HISTORY_FILE);
    Ok(())
}
