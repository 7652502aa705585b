use std::{collections::BTreeMap, iter::Peekable, str::FromStr};

use crate::{
    convert::float,
    error::ParseError,
    literal::lexer::Token,
    value::{ComplexNumber, StructValue, Value},
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Type suffixes a numeric literal may carry, longest first so that `i128`
/// is never mistaken for `i8`.
const SUFFIXES: [&str; 14] = ["isize", "usize", "i128", "u128", "i16", "i32", "i64", "u16", "u32",
                              "u64", "f32", "f64", "i8", "u8"];

/// Parses one complete value.
///
/// Grammar (simplified):
/// ```text
/// value := "nil" | bool | string | "-"? number | "-"? constant
///        | "[" (value ("," value)*)? "]"
///        | "{" (value ":" value ("," value ":" value)*)? "}"
///        | "#" "{" (value ("," value)*)? "}"
///        | "struct" "{" fields "}" | identifier "{" fields "}"
///        | ("complex64" | "complex128") "(" value "," value ")"
/// constant := identifier "::" identifier
/// fields := (identifier ":" value ("," identifier ":" value)*)?
/// ```
///
/// # Errors
/// Returns a `ParseError` if the tokens do not form a value, if a numeric
/// literal does not fit its type, or if a constant is unknown.
pub fn parse_literal<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Value>
    where I: Iterator<Item = &'a (Token, usize)>
{
    match tokens.next() {
        Some((Token::Nil, _)) => Ok(Value::Nil),
        Some((Token::Bool(b), _)) => Ok(Value::Bool(*b)),
        Some((Token::Str(s), _)) => Ok(Value::Str(s.clone())),
        Some((Token::Number(n), line)) => parse_number(n, *line),
        Some((Token::Minus, line)) => parse_negative(tokens, *line),
        Some((Token::LBracket, _)) => {
            Ok(Value::List(parse_comma_separated(tokens, parse_literal, &Token::RBracket)?))
        },
        Some((Token::LBrace, _)) => {
            let entries = parse_comma_separated(tokens, parse_entry, &Token::RBrace)?;
            Ok(Value::Map(entries.into_iter().collect::<BTreeMap<_, _>>()))
        },
        Some((Token::Hash, line)) => {
            expect(tokens, &Token::LBrace, *line)?;
            let items = parse_comma_separated(tokens, parse_literal, &Token::RBrace)?;
            Ok(Value::Set(items.into_iter().collect()))
        },
        Some((Token::Struct, line)) => {
            expect(tokens, &Token::LBrace, *line)?;
            let fields = parse_comma_separated(tokens, parse_field, &Token::RBrace)?;
            Ok(Value::Struct(StructValue { name: None,
                                           fields }))
        },
        Some((Token::Identifier(name), line)) => parse_identifier(name, tokens, *line),
        Some((tok, line)) => {
            Err(ParseError::UnexpectedToken { token: format!("Expected a value, found {tok:?}"),
                                              line:  *line, })
        },
        None => Err(ParseError::UnexpectedEndOfInput { line: 0 }),
    }
}

/// Parses a comma-separated list of items until a closing token.
///
/// An immediately encountered closing token produces an empty list.
///
/// Grammar (simplified): `list := item ("," item)*`
fn parse_comma_separated<'a, I, T>(tokens: &mut Peekable<I>,
                                   parse_item: impl Fn(&mut Peekable<I>) -> ParseResult<T>,
                                   closing: &Token)
                                   -> ParseResult<Vec<T>>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let mut items = Vec::new();
    if let Some((tok, _)) = tokens.peek()
       && tok == closing
    {
        tokens.next();

        return Ok(items);
    }
    loop {
        items.push(parse_item(tokens)?);
        match tokens.next() {
            Some((Token::Comma, _)) => {},
            Some((tok, _)) if tok == closing => break,
            Some((tok, line)) => {
                return Err(ParseError::UnexpectedToken { token: format!("Expected ',' or {closing:?}, found {tok:?}"),
                                                         line:  *line, });
            },
            None => return Err(ParseError::UnexpectedEndOfInput { line: 0 }),
        }
    }
    Ok(items)
}

/// Consumes the next token, which must equal `wanted`.
fn expect<'a, I>(tokens: &mut Peekable<I>, wanted: &Token, line: usize) -> ParseResult<()>
    where I: Iterator<Item = &'a (Token, usize)>
{
    match tokens.next() {
        Some((tok, _)) if tok == wanted => Ok(()),
        Some((tok, line)) => {
            Err(ParseError::UnexpectedToken { token: format!("Expected {wanted:?}, found {tok:?}"),
                                              line:  *line, })
        },
        None => Err(ParseError::UnexpectedEndOfInput { line }),
    }
}

/// Parses a `key: value` map entry.
fn parse_entry<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<(Value, Value)>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let key = parse_literal(tokens)?;
    expect(tokens, &Token::Colon, 0)?;
    let value = parse_literal(tokens)?;
    Ok((key, value))
}

/// Parses a `name: value` struct field.
fn parse_field<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<(String, Value)>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let name = match tokens.next() {
        Some((Token::Identifier(name), _)) => name.clone(),
        Some((tok, line)) => {
            return Err(ParseError::UnexpectedToken { token: format!("Expected field name, found {tok:?}"),
                                                     line:  *line, });
        },
        None => return Err(ParseError::UnexpectedEndOfInput { line: 0 }),
    };
    expect(tokens, &Token::Colon, 0)?;
    Ok((name, parse_literal(tokens)?))
}

/// Parses what follows an identifier: a `type::NAME` constant, a complex
/// constructor call, or a named struct.
fn parse_identifier<'a, I>(name: &str, tokens: &mut Peekable<I>, line: usize) -> ParseResult<Value>
    where I: Iterator<Item = &'a (Token, usize)>
{
    match tokens.peek() {
        Some((Token::PathSep, _)) => {
            tokens.next();
            match tokens.next() {
                Some((Token::Identifier(constant), line)) => parse_constant(name, constant, *line),
                Some((tok, line)) => {
                    Err(ParseError::UnexpectedToken { token: format!("Expected constant name, found {tok:?}"),
                                                      line:  *line, })
                },
                None => Err(ParseError::UnexpectedEndOfInput { line }),
            }
        },
        Some((Token::LParen, _)) => {
            tokens.next();
            let args = parse_comma_separated(tokens, parse_literal, &Token::RParen)?;
            parse_complex(name, &args, line)
        },
        Some((Token::LBrace, _)) => {
            tokens.next();
            let fields = parse_comma_separated(tokens, parse_field, &Token::RBrace)?;
            Ok(Value::Struct(StructValue { name: Some(name.to_string()),
                                           fields }))
        },
        _ => Err(ParseError::UnexpectedToken { token: format!("Unknown identifier '{name}'"),
                                               line }),
    }
}

/// Parses the value after a leading `-`.
///
/// A numeric literal keeps the sign while it is parsed, so `-128i8` is
/// accepted. Anything else is parsed first and then negated.
fn parse_negative<'a, I>(tokens: &mut Peekable<I>, line: usize) -> ParseResult<Value>
    where I: Iterator<Item = &'a (Token, usize)>
{
    if let Some((Token::Number(n), line)) = tokens.peek() {
        let literal = format!("-{n}");
        let line = *line;
        tokens.next();
        return parse_number(&literal, line);
    }

    let value = parse_literal(tokens).map_err(|e| e.at_line(line))?;
    let negated = match value {
        Value::F32(r) => Some(Value::F32(-r)),
        Value::F64(r) => Some(Value::F64(-r)),
        Value::I8(n) => n.checked_neg().map(Value::I8),
        Value::I16(n) => n.checked_neg().map(Value::I16),
        Value::I32(n) => n.checked_neg().map(Value::I32),
        Value::I64(n) => n.checked_neg().map(Value::I64),
        Value::I128(n) => n.checked_neg().map(Value::I128),
        Value::Isize(n) => n.checked_neg().map(Value::Isize),
        _ => None,
    };
    negated.ok_or_else(|| ParseError::InvalidLiteral { literal: format!("-{value}"),
                                                       line })
}

/// Parses a numeric literal, honouring its type suffix.
///
/// Without a suffix, literals containing `.` or an exponent are `f64` and all
/// others are `i64`.
fn parse_number(literal: &str, line: usize) -> ParseResult<Value> {
    fn parse_as<T: FromStr>(digits: &str, wrap: fn(T) -> Value) -> Option<Value> {
        digits.parse().ok().map(wrap)
    }

    let (digits, suffix) = SUFFIXES.iter()
                                   .find_map(|s| literal.strip_suffix(s).map(|d| (d, Some(*s))))
                                   .unwrap_or((literal, None));

    let value = match suffix {
        None if digits.contains(['.', 'e', 'E']) => parse_as(digits, Value::F64),
        None | Some("i64") => parse_as(digits, Value::I64),
        Some("i8") => parse_as(digits, Value::I8),
        Some("i16") => parse_as(digits, Value::I16),
        Some("i32") => parse_as(digits, Value::I32),
        Some("i128") => parse_as(digits, Value::I128),
        Some("isize") => parse_as(digits, Value::Isize),
        Some("u8") => parse_as(digits, Value::U8),
        Some("u16") => parse_as(digits, Value::U16),
        Some("u32") => parse_as(digits, Value::U32),
        Some("u64") => parse_as(digits, Value::U64),
        Some("u128") => parse_as(digits, Value::U128),
        Some("usize") => parse_as(digits, Value::Usize),
        Some("f32") => parse_as(digits, Value::F32),
        Some(_) => parse_as(digits, Value::F64),
    };

    value.ok_or_else(|| ParseError::InvalidLiteral { literal: literal.to_string(),
                                                     line })
}

macro_rules! bounds {
    ($name:expr, $ty:ident, $variant:ident) => {
        match $name {
            "MAX" => Some(Value::$variant($ty::MAX)),
            "MIN" => Some(Value::$variant($ty::MIN)),
            _ => None,
        }
    };
}

macro_rules! float_constants {
    ($name:expr, $ty:ident, $variant:ident) => {
        match $name {
            "MAX" => Some(Value::$variant($ty::MAX)),
            "MIN" => Some(Value::$variant($ty::MIN)),
            "MIN_POSITIVE" => Some(Value::$variant($ty::MIN_POSITIVE)),
            "EPSILON" => Some(Value::$variant($ty::EPSILON)),
            "INFINITY" => Some(Value::$variant($ty::INFINITY)),
            "NEG_INFINITY" => Some(Value::$variant($ty::NEG_INFINITY)),
            "NAN" => Some(Value::$variant($ty::NAN)),
            _ => None,
        }
    };
}

/// Resolves a `type::NAME` constant such as `f64::MAX` or `u8::MIN`.
fn parse_constant(ty: &str, name: &str, line: usize) -> ParseResult<Value> {
    let value = match ty {
        "f32" => float_constants!(name, f32, F32),
        "f64" => float_constants!(name, f64, F64),
        "i8" => bounds!(name, i8, I8),
        "i16" => bounds!(name, i16, I16),
        "i32" => bounds!(name, i32, I32),
        "i64" => bounds!(name, i64, I64),
        "i128" => bounds!(name, i128, I128),
        "isize" => bounds!(name, isize, Isize),
        "u8" => bounds!(name, u8, U8),
        "u16" => bounds!(name, u16, U16),
        "u32" => bounds!(name, u32, U32),
        "u64" => bounds!(name, u64, U64),
        "u128" => bounds!(name, u128, U128),
        "usize" => bounds!(name, usize, Usize),
        _ => None,
    };

    value.ok_or_else(|| ParseError::UnknownConstant { name: format!("{ty}::{name}"),
                                                      line })
}

/// Builds a complex number from `complex64(re, im)` or `complex128(re, im)`.
///
/// The components may be any values the converter accepts for the matching
/// component width.
fn parse_complex(name: &str, args: &[Value], line: usize) -> ParseResult<Value> {
    let invalid = || ParseError::InvalidLiteral { literal: format!("{name}(...)"),
                                                  line };

    let [real, imaginary] = args else {
        return Err(invalid());
    };

    match name {
        "complex64" => {
            let real = float::<f32>(real).map_err(|_| invalid())?;
            let imaginary = float::<f32>(imaginary).map_err(|_| invalid())?;
            Ok(ComplexNumber::new(real, imaginary).into())
        },
        "complex128" => {
            let real = float::<f64>(real).map_err(|_| invalid())?;
            let imaginary = float::<f64>(imaginary).map_err(|_| invalid())?;
            Ok(ComplexNumber::new(real, imaginary).into())
        },
        _ => Err(ParseError::UnexpectedToken { token: format!("Unknown constructor '{name}'"),
                                               line }),
    }
}
