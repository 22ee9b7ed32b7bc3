// ABOUTME: Scanner/parser turning source text into Value trees, file mode and line mode

use nom::bytes::complete::take_while1;
use nom::combinator::recognize;
use nom::IResult;

use crate::error::ParseFailure;
use crate::value::Value;

/// Characters that can form a Symbol or an Integer literal.
fn is_atom_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '_' | '\\' | '+' | '-' | '*' | '/' | '=' | '<' | '>' | '!' | '&')
}

/// Anything that isn't an atom char and isn't one of the structural
/// characters (`(`, `)`, `{`, `}`, `"`) is a plain separator — whitespace,
/// stray punctuation, whatever. There is no comment syntax.
fn is_separator(c: char) -> bool {
    !is_atom_char(c) && !matches!(c, '(' | ')' | '{' | '}' | '"')
}

fn skip_separators(input: &str) -> &str {
    input.trim_start_matches(is_separator)
}

/// Recognizes one maximal run of atom characters via `nom`, then classifies
/// it as an Integer or falls back to a Symbol.
fn nom_atom(input: &str) -> IResult<&str, &str> {
    recognize(take_while1(is_atom_char))(input)
}

fn parse_atom(input: &str) -> (&str, Value) {
    // `nom_atom` only fails on an empty match, which callers never hit —
    // `parse_value` only reaches here after confirming the first char is an atom char.
    let (rest, token) = nom_atom(input).expect("atom start already checked by caller");
    let value = match token.parse::<i64>() {
        Ok(n) => Value::Integer(n),
        Err(_) => Value::Symbol(token.to_string()),
    };
    (rest, value)
}

/// `"` was already consumed by the caller; `input` starts right after it.
/// `\n`, `\t`, `\\` unescape; any other backslash pair passes its second
/// character through literally; running off the end is an Error.
fn parse_string_body(input: &str) -> Result<(&str, Value), ParseFailure> {
    let mut out = String::new();
    let mut chars = input.chars();
    loop {
        match chars.next() {
            None => return Err(ParseFailure::UnterminatedString),
            Some('"') => return Ok((chars.as_str(), Value::Text(out))),
            Some('\\') => match chars.next() {
                None => return Err(ParseFailure::UnterminatedString),
                Some('n') => out.push('\n'),
                Some('t') => out.push('\t'),
                Some('\\') => out.push('\\'),
                Some(other) => out.push(other),
            },
            Some(c) => out.push(c),
        }
    }
}

fn parse_seq(
    input: &str,
    close: char,
    mismatch: ParseFailure,
    unclosed: ParseFailure,
    wrap: fn(Vec<Value>) -> Value,
) -> Result<(&str, Value), ParseFailure> {
    let mut items = Vec::new();
    let mut remaining = input;
    loop {
        remaining = skip_separators(remaining);
        match remaining.chars().next() {
            None => return Err(unclosed),
            Some(c) if c == close => {
                let mut chars = remaining.chars();
                chars.next();
                return Ok((chars.as_str(), wrap(items)));
            }
            Some(')') => return Err(mismatch_for(')', mismatch.clone())),
            Some('}') => return Err(mismatch_for('}', mismatch.clone())),
            _ => {
                let (rest, value) = parse_value(remaining)?;
                items.push(value);
                remaining = rest;
            }
        }
    }
}

fn mismatch_for(close: char, same_kind: ParseFailure) -> ParseFailure {
    // The caller already matched `close == c` in the non-mismatch arm, so
    // getting here means we hit the *other* bracket's close character.
    match close {
        ')' => ParseFailure::UnexpectedCloseSExpr,
        '}' => ParseFailure::UnexpectedCloseQExpr,
        _ => same_kind,
    }
}

/// Parses exactly one Value starting at the first non-separator character.
fn parse_value(input: &str) -> Result<(&str, Value), ParseFailure> {
    let input = skip_separators(input);
    let mut chars = input.chars();
    match chars.next() {
        None => Err(ParseFailure::ExpectedExpression),
        Some('(') => parse_seq(
            chars.as_str(),
            ')',
            ParseFailure::UnexpectedCloseSExpr,
            ParseFailure::ExpectedCloseSExpr,
            Value::SExpression,
        ),
        Some('{') => parse_seq(
            chars.as_str(),
            '}',
            ParseFailure::UnexpectedCloseQExpr,
            ParseFailure::ExpectedCloseQExpr,
            Value::QExpression,
        ),
        Some(')') => Err(ParseFailure::UnexpectedCloseSExpr),
        Some('}') => Err(ParseFailure::UnexpectedCloseQExpr),
        Some('"') => parse_string_body(chars.as_str()),
        Some(c) if is_atom_char(c) => Ok(parse_atom(input)),
        Some(_) => Err(ParseFailure::ExpectedExpression),
    }
}

/// File mode: advances `input` past the next balanced top-level `(...)`
/// group, skipping any text before it. Returns `None` once no more `(` can
/// be found — the caller's signal that the file is exhausted.
pub fn parse_file_form<'a>(input: &mut &'a str) -> Option<Result<Value, ParseFailure>> {
    let idx = input.find('(')?;
    let start = &input[idx..];
    match parse_value(start) {
        Ok((rest, value)) => {
            *input = rest;
            Some(Ok(value))
        }
        Err(e) => {
            // Skip past the opening paren so a malformed form can't loop forever.
            *input = &start[1..];
            Some(Err(e))
        }
    }
}

/// Line mode: parses the whole input as the children of an implicit
/// SExpression. A single child collapses to that child unwrapped.
pub fn parse_line(input: &str) -> Result<Value, ParseFailure> {
    let mut items = Vec::new();
    let mut remaining = input;
    loop {
        remaining = skip_separators(remaining);
        if remaining.is_empty() {
            break;
        }
        let (rest, value) = parse_value(remaining)?;
        items.push(value);
        remaining = rest;
    }
    Ok(match items.len() {
        1 => items.into_iter().next().unwrap(),
        _ => Value::SExpression(items),
    })
}
