//! logos-based lexer for attribute value literals, plus the typed parse
//! helpers built on it.
//!
//! Token priority in logos is determined by match length first, so:
//! - `true`/`false` match the keyword variants, not [`ValueToken::Ident`]
//! - `#ff00aa` matches [`ValueToken::HexColor`] as one token
//! - `-1.5` matches [`ValueToken::Float`], not `Int` + `Ident`
//!
//! Raw markup text reaches these helpers *after* action references and
//! quoting have been resolved by the parser's string services.

use logos::Logos;

use crate::error::ParseError;

/// A single attribute value literal.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(skip r"[ \t\n\r]+")]
pub enum ValueToken {
    #[token("true", ignore(ascii_case))]
    True,

    #[token("false", ignore(ascii_case))]
    False,

    /// Hex color: `#fff`, `#ff00aa`, `#ff00aa80` (3-8 hex digits).
    #[regex(r"#[0-9a-fA-F]{3,8}")]
    HexColor,

    #[regex(r"-?[0-9]+\.[0-9]+")]
    Float,

    #[regex(r"-?[0-9]+")]
    Int,

    /// Identifier: alignment names, style names, color names.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_-]*")]
    Ident,
}

/// Lex `text` expecting exactly one value token spanning the whole input.
fn lex_single(text: &str) -> Option<(ValueToken, &str)> {
    let mut lexer = ValueToken::lexer(text);
    let token = lexer.next()?.ok()?;
    let slice_range = lexer.span();
    if lexer.next().is_some() {
        return None;
    }
    Some((token, &text[slice_range]))
}

fn malformed(value: &str, expected: &str) -> ParseError {
    ParseError::MalformedValue {
        value: value.to_string(),
        expected: expected.to_string(),
    }
}

// ---------------------------------------------------------------------------
// Typed parsing
// ---------------------------------------------------------------------------

/// Parse a boolean literal (`true`/`false`, case-insensitive).
pub fn parse_bool(text: &str) -> Result<bool, ParseError> {
    match lex_single(text) {
        Some((ValueToken::True, _)) => Ok(true),
        Some((ValueToken::False, _)) => Ok(false),
        _ => Err(malformed(text, "a boolean")),
    }
}

/// Parse a float literal; integers are widened.
pub fn parse_float(text: &str) -> Result<f32, ParseError> {
    match lex_single(text) {
        Some((ValueToken::Float | ValueToken::Int, slice)) => slice
            .parse::<f32>()
            .map_err(|_| malformed(text, "a float")),
        _ => Err(malformed(text, "a float")),
    }
}

/// Parse an integer literal.
pub fn parse_int(text: &str) -> Result<i32, ParseError> {
    match lex_single(text) {
        Some((ValueToken::Int, slice)) => {
            slice.parse::<i32>().map_err(|_| malformed(text, "an integer"))
        }
        _ => Err(malformed(text, "an integer")),
    }
}

/// Parse an unsigned integer literal (colspan and friends).
pub fn parse_unsigned(text: &str) -> Result<u32, ParseError> {
    match lex_single(text) {
        Some((ValueToken::Int, slice)) => slice
            .parse::<u32>()
            .map_err(|_| malformed(text, "a non-negative integer")),
        _ => Err(malformed(text, "a non-negative integer")),
    }
}

// ---------------------------------------------------------------------------
// Color
// ---------------------------------------------------------------------------

/// An RGBA color parsed from markup.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const WHITE: Color = Color {
        r: 255,
        g: 255,
        b: 255,
        a: 255,
    };

    /// Decode a hex literal without the leading `#`: 3 (rgb nibbles),
    /// 4 (rgba nibbles), 6 (rgb), or 8 (rgba) digits.
    fn from_hex(digits: &str) -> Option<Color> {
        fn nibble(d: &str) -> Option<u8> {
            u8::from_str_radix(d, 16).map(|v| v * 17).ok()
        }
        fn byte(d: &str) -> Option<u8> {
            u8::from_str_radix(d, 16).ok()
        }
        match digits.len() {
            3 => Some(Color {
                r: nibble(&digits[0..1])?,
                g: nibble(&digits[1..2])?,
                b: nibble(&digits[2..3])?,
                a: 255,
            }),
            4 => Some(Color {
                r: nibble(&digits[0..1])?,
                g: nibble(&digits[1..2])?,
                b: nibble(&digits[2..3])?,
                a: nibble(&digits[3..4])?,
            }),
            6 => Some(Color {
                r: byte(&digits[0..2])?,
                g: byte(&digits[2..4])?,
                b: byte(&digits[4..6])?,
                a: 255,
            }),
            8 => Some(Color {
                r: byte(&digits[0..2])?,
                g: byte(&digits[2..4])?,
                b: byte(&digits[4..6])?,
                a: byte(&digits[6..8])?,
            }),
            _ => None,
        }
    }
}

/// Parse a color literal: `#rgb`, `#rgba`, `#rrggbb`, or `#rrggbbaa`.
pub fn parse_color(text: &str) -> Result<Color, ParseError> {
    match lex_single(text) {
        Some((ValueToken::HexColor, slice)) => {
            Color::from_hex(&slice[1..]).ok_or_else(|| malformed(text, "a hex color"))
        }
        _ => Err(malformed(text, "a hex color")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bools() {
        assert!(parse_bool("true").unwrap());
        assert!(parse_bool("TRUE").unwrap());
        assert!(!parse_bool("False").unwrap());
        assert!(parse_bool("yes").is_err());
        assert!(parse_bool("true true").is_err());
    }

    #[test]
    fn floats() {
        assert_eq!(parse_float("1.5").unwrap(), 1.5);
        assert_eq!(parse_float("-2.25").unwrap(), -2.25);
        assert_eq!(parse_float("3").unwrap(), 3.0);
        assert!(parse_float("1.5fr").is_err());
    }

    #[test]
    fn ints() {
        assert_eq!(parse_int("42").unwrap(), 42);
        assert_eq!(parse_int("-7").unwrap(), -7);
        assert!(parse_int("4.2").is_err());
        assert_eq!(parse_unsigned("3").unwrap(), 3);
        assert!(parse_unsigned("-3").is_err());
    }

    #[test]
    fn short_hex_color() {
        assert_eq!(
            parse_color("#fff").unwrap(),
            Color {
                r: 255,
                g: 255,
                b: 255,
                a: 255
            }
        );
    }

    #[test]
    fn full_hex_color() {
        assert_eq!(
            parse_color("#ff00aa").unwrap(),
            Color {
                r: 255,
                g: 0,
                b: 170,
                a: 255
            }
        );
    }

    #[test]
    fn rgba_hex_color() {
        assert_eq!(parse_color("#ff00aa80").unwrap().a, 128);
    }

    #[test]
    fn color_rejects_non_hex() {
        assert!(parse_color("red").is_err());
        assert!(parse_color("#xyz").is_err());
    }

    #[test]
    fn surrounding_whitespace_is_skipped() {
        assert!(parse_bool("  true  ").unwrap());
        assert_eq!(parse_int(" 9 ").unwrap(), 9);
    }
}
