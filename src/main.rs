use clap::Parser;
use lispy::builtins::io::load_source;
use lispy::builtins::register_builtins;
use lispy::config::STDLIB_FILENAME;
use lispy::env::Environment;
use lispy::repl;
use std::path::PathBuf;

/// A small Lisp-dialect interpreter with S-expressions, Q-expressions, and a REPL.
#[derive(Parser, Debug)]
#[command(name = "lispy")]
#[command(version = lispy::config::VERSION)]
#[command(about = "S-expressions, Q-expressions, and a REPL")]
struct CliArgs {
    /// Source files to load, in order. With none given, starts the REPL.
    #[arg(value_name = "FILE")]
    files: Vec<PathBuf>,
}

fn main() {
    let args = CliArgs::parse();

    let env = Environment::new();
    register_builtins(&env);
    load_stdlib(&env);

    if args.files.is_empty() {
        if let Err(e) = repl::run(env) {
            eprintln!("{}", e);
        }
        return;
    }

    for path in &args.files {
        match std::fs::read_to_string(path) {
            Ok(source) => load_source(&source, env.clone()),
            Err(e) => println!("Cannot read file '{}': {}", path.display(), e),
        }
    }
}

fn load_stdlib(env: &std::rc::Rc<Environment>) {
    match std::fs::read_to_string(STDLIB_FILENAME) {
        Ok(source) => load_source(&source, env.clone()),
        Err(e) => println!("Could not load {}: {}", STDLIB_FILENAME, e),
    }
}
