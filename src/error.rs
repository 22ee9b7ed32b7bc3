// ABOUTME: Internal error types at the Rust-API boundary (parsing, file IO)
// These never cross into the evaluator as Result::Err; they are converted to
// Value::Error the moment they reach the interpreter's value world.

use thiserror::Error;

/// Failure while scanning/parsing source text into a `Value` tree.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseFailure {
    #[error("Unexpected )")]
    UnexpectedCloseSExpr,
    #[error("Unexpected }}")]
    UnexpectedCloseQExpr,
    #[error("Expected )")]
    ExpectedCloseSExpr,
    #[error("Expected }}")]
    ExpectedCloseQExpr,
    #[error("Expected \"")]
    UnterminatedString,
    #[error("Expected an expression")]
    ExpectedExpression,
}

/// Failure reading a source file for `load`.
#[derive(Error, Debug)]
pub enum LoadFailure {
    #[error("Cannot read file '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}
