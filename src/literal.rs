use logos::Logos;

use crate::{
    error::ParseError,
    literal::{
        lexer::{LexerExtras, Token},
        parser::{ParseResult, parse_literal},
    },
    value::Value,
};

/// The lexer module tokenizes value literals.
///
/// Produces numbers (kept with their type suffix), strings, keywords,
/// identifiers and punctuation, tracking line numbers for error reporting.
pub mod lexer;
/// The parser module builds values from tokens.
///
/// A recursive-descent parser over the token stream that yields `Value`s,
/// including lists, maps, sets, structs, complex numbers and named constants.
pub mod parser;

/// Parses a single value literal.
///
/// The literal may span several lines; `//` comments are ignored.
///
/// # Errors
/// Returns a `ParseError` if the text is not exactly one value.
///
/// # Example
/// ```
/// use floatconv::{Value, literal::parse_value};
///
/// assert_eq!(parse_value("-3i8").unwrap(), Value::I8(-3));
/// assert_eq!(parse_value(r#"["one", "two"]"#).unwrap(), Value::from(vec!["one", "two"]));
/// assert!(parse_value("1 2").is_err());
/// ```
pub fn parse_value(source: &str) -> ParseResult<Value> {
    let tokens = tokenize(source, 1)?;
    parse_tokens(&tokens, 1)
}

/// Parses one value literal per line.
///
/// Blank lines and lines holding only a `//` comment are skipped.
///
/// # Errors
/// Returns the first `ParseError`, carrying the offending line number.
///
/// # Example
/// ```
/// use floatconv::{Value, literal::parse_values};
///
/// let values = parse_values("nil\n// skipped\n\nf64::MAX\n").unwrap();
/// assert_eq!(values, vec![Value::Nil, Value::F64(f64::MAX)]);
/// ```
pub fn parse_values(source: &str) -> ParseResult<Vec<Value>> {
    let mut values = Vec::new();

    for (index, text) in source.lines().enumerate() {
        let line = index + 1;
        let tokens = tokenize(text, line)?;
        if tokens.is_empty() {
            continue;
        }
        values.push(parse_tokens(&tokens, line)?);
    }

    Ok(values)
}

fn tokenize(source: &str, line: usize) -> ParseResult<Vec<(Token, usize)>> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer_with_extras(source, LexerExtras { line });

    while let Some(token) = lexer.next() {
        if let Ok(tok) = token {
            tokens.push((tok, lexer.extras.line));
        } else {
            return Err(ParseError::UnexpectedToken { token: lexer.slice().to_string(),
                                                     line:  lexer.extras.line, });
        }
    }

    Ok(tokens)
}

fn parse_tokens(tokens: &[(Token, usize)], line: usize) -> ParseResult<Value> {
    let mut iter = tokens.iter().peekable();
    let value = parse_literal(&mut iter).map_err(|e| e.at_line(line))?;

    if let Some((tok, line)) = iter.next() {
        return Err(ParseError::UnexpectedTrailingTokens { token: format!("{tok:?}"),
                                                          line:  *line, });
    }

    Ok(value)
}
