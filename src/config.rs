// ABOUTME: Version, REPL banner, and bootstrap constants

pub const VERSION: &str = "1.0.0";
pub const WELCOME_MESSAGE: &str = "Lispy 1.0.0";
pub const WELCOME_SUBTITLE: &str = "S-expressions, Q-expressions, and a standard library written in Lispy";

pub const PROMPT: &str = "lispy> ";

/// Read from the working directory at startup, not baked into the binary.
pub const STDLIB_FILENAME: &str = "stdlib.lispy";
