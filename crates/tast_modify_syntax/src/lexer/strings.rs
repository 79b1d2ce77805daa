//! String scanning for the Go lexer
//!
//! Handles interpreted strings, raw strings, and rune literals, plus the inverse operation ([`quote`]) used when the
//! editor renders a new string element.

use super::Lexer;
use super::tokens::TokenKind;
use crate::ast::Span;
use crate::diagnostics::SyntaxError;

// ============================================================================
// Escape sequence handling
// ============================================================================

/// Result of processing an escape sequence
enum EscapeResult {
    Char(char),
    /// `\xNN` and octal escapes denote a single byte, not a code point.
    Byte(u8),
    /// Invalid escape; the message describes why.
    Invalid(String),
    Eof,
}

impl<'a> Lexer<'a> {
    /// Process an escape sequence inside an interpreted string.
    /// Called after consuming the backslash.
    fn scan_escape(&mut self) -> EscapeResult {
        match self.advance() {
            Some('a') => EscapeResult::Char('\u{07}'),
            Some('b') => EscapeResult::Char('\u{08}'),
            Some('f') => EscapeResult::Char('\u{0C}'),
            Some('n') => EscapeResult::Char('\n'),
            Some('r') => EscapeResult::Char('\r'),
            Some('t') => EscapeResult::Char('\t'),
            Some('v') => EscapeResult::Char('\u{0B}'),
            Some('\\') => EscapeResult::Char('\\'),
            Some('"') => EscapeResult::Char('"'),
            Some('x') => match self.scan_hex_escape(2) {
                EscapeResult::Char(c) => EscapeResult::Byte(c as u8),
                other => other,
            },
            Some('u') => self.scan_hex_escape(4),
            Some('U') => self.scan_hex_escape(8),
            Some(c @ '0'..='7') => {
                let mut digits = String::from(c);
                for _ in 0..2 {
                    match self.peek() {
                        Some(d @ '0'..='7') => {
                            digits.push(d);
                            self.advance();
                        }
                        _ => return EscapeResult::Invalid(format!("Invalid octal escape '\\{digits}'")),
                    }
                }
                match u8::from_str_radix(&digits, 8) {
                    Ok(byte) => EscapeResult::Byte(byte),
                    Err(_) => EscapeResult::Invalid(format!("Octal escape '\\{digits}' out of range")),
                }
            }
            Some(c) => EscapeResult::Invalid(format!("Unknown escape sequence '\\{c}'")),
            None => EscapeResult::Eof,
        }
    }

    fn scan_hex_escape(&mut self, width: usize) -> EscapeResult {
        let mut hex = String::new();
        for _ in 0..width {
            match self.peek() {
                Some(c) if c.is_ascii_hexdigit() => {
                    hex.push(c);
                    self.advance();
                }
                _ => return EscapeResult::Invalid(format!("Escape needs {width} hex digits")),
            }
        }
        match u32::from_str_radix(&hex, 16).ok().and_then(char::from_u32) {
            Some(ch) => EscapeResult::Char(ch),
            None => EscapeResult::Invalid(format!("Invalid code point in escape '{hex}'")),
        }
    }
}

// ============================================================================
// String scanning
// ============================================================================

impl<'a> Lexer<'a> {
    pub(super) fn scan_string(&mut self, start: usize) {
        let mut value: Vec<u8> = Vec::new();
        let mut utf8 = [0u8; 4];

        loop {
            match self.peek() {
                None | Some('\n') => {
                    self.errors.push(SyntaxError::lexical(
                        "Unterminated string".to_string(),
                        Span::new(start, self.current_pos),
                    ));
                    break;
                }
                Some('"') => {
                    self.advance();
                    break;
                }
                Some('\\') => {
                    let escape_start = self.current_pos;
                    self.advance();
                    match self.scan_escape() {
                        EscapeResult::Char(c) => value.extend_from_slice(c.encode_utf8(&mut utf8).as_bytes()),
                        EscapeResult::Byte(b) => value.push(b),
                        EscapeResult::Invalid(msg) => {
                            self.errors
                                .push(SyntaxError::lexical(msg, Span::new(escape_start, self.current_pos)));
                        }
                        EscapeResult::Eof => {}
                    }
                }
                Some(c) => {
                    value.extend_from_slice(c.encode_utf8(&mut utf8).as_bytes());
                    self.advance();
                }
            }
        }

        // Byte escapes may spell invalid UTF-8; such a string is kept as its source spelling.
        let value = String::from_utf8(value).unwrap_or_else(|_| {
            let body = &self.source[start..self.current_pos];
            let body = body.strip_prefix('"').unwrap_or(body);
            body.strip_suffix('"').unwrap_or(body).to_string()
        });
        self.add_token(TokenKind::String(value), start);
    }

    pub(super) fn scan_raw_string(&mut self, start: usize) {
        let mut value = String::new();
        loop {
            match self.advance() {
                None => {
                    self.errors.push(SyntaxError::lexical(
                        "Unterminated raw string".to_string(),
                        Span::new(start, self.current_pos),
                    ));
                    break;
                }
                Some('`') => break,
                // Carriage returns inside raw strings are discarded from the value.
                Some('\r') => {}
                Some(c) => value.push(c),
            }
        }
        self.add_token(TokenKind::RawString(value), start);
    }

    pub(super) fn scan_rune(&mut self, start: usize) {
        loop {
            match self.advance() {
                None | Some('\n') => {
                    self.errors.push(SyntaxError::lexical(
                        "Unterminated rune literal".to_string(),
                        Span::new(start, self.current_pos),
                    ));
                    break;
                }
                Some('\\') => {
                    self.advance();
                }
                Some('\'') => break,
                Some(_) => {}
            }
        }
        let spelling = self.source[start..self.current_pos].to_string();
        self.add_token(TokenKind::Char(spelling), start);
    }
}

// ============================================================================
// Quoting
// ============================================================================

/// Render `value` as a Go interpreted string literal, escaping as `strconv.Quote` does for common cases.
pub fn quote(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    for c in value.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\u{07}' => out.push_str("\\a"),
            '\u{08}' => out.push_str("\\b"),
            '\u{0C}' => out.push_str("\\f"),
            '\u{0B}' => out.push_str("\\v"),
            c if (c as u32) < 0x20 || c as u32 == 0x7F => out.push_str(&format!("\\x{:02x}", c as u32)),
            c => out.push(c),
        }
    }
    out.push('"');
    out
}

#[cfg(test)]
mod tests {
    use crate::lexer::{TokenKind, lex, quote};

    fn single(source: &str) -> TokenKind {
        let tokens = lex(source).unwrap();
        assert_eq!(tokens.len(), 2, "expected one token + EOF, got {:?}", tokens);
        tokens[0].kind.clone()
    }

    #[test]
    fn test_plain_string() {
        assert_eq!(single(r#""first@google.com""#), TokenKind::String("first@google.com".into()));
    }

    #[test]
    fn test_string_escapes() {
        assert_eq!(
            single(r#""a\tb\n\"q\"\\ \x41é\101""#),
            TokenKind::String("a\tb\n\"q\"\\ AéA".into())
        );
    }

    #[test]
    fn test_byte_escapes_decode_as_utf8() {
        assert_eq!(
            single(r#""caf\xc3\xa9@google.com""#),
            TokenKind::String("café@google.com".into())
        );
        assert_eq!(single(r#""caf\303\251""#), TokenKind::String("café".into()));
    }

    #[test]
    fn test_invalid_utf8_keeps_spelling() {
        assert_eq!(single(r#""bad\xff""#), TokenKind::String(r"bad\xff".into()));
    }

    #[test]
    fn test_octal_escape_out_of_range() {
        let errors = lex(r#""\400""#).unwrap_err();
        assert!(errors[0].message.contains("out of range"));
    }

    #[test]
    fn test_raw_string_spans_lines() {
        assert_eq!(single("`line one\r\nline \\two`"), TokenKind::RawString("line one\nline \\two".into()));
    }

    #[test]
    fn test_rune_literal() {
        assert_eq!(single(r"'\n'"), TokenKind::Char(r"'\n'".into()));
    }

    #[test]
    fn test_unknown_escape_is_error() {
        let errors = lex(r#""\q""#).unwrap_err();
        assert!(errors[0].message.contains("Unknown escape sequence"));
    }

    #[test]
    fn test_newline_in_string_is_error() {
        let errors = lex("\"abc\ndef\"").unwrap_err();
        assert!(errors.iter().any(|e| e.message.contains("Unterminated string")));
    }

    #[test]
    fn test_unterminated_raw_string() {
        let errors = lex("`abc").unwrap_err();
        assert!(errors[0].message.contains("Unterminated raw string"));
    }

    #[test]
    fn test_quote_plain() {
        assert_eq!(quote("name@email.com"), "\"name@email.com\"");
    }

    #[test]
    fn test_quote_escapes() {
        assert_eq!(quote("a\"b\\c\nd\u{01}"), "\"a\\\"b\\\\c\\nd\\x01\"");
    }

    #[test]
    fn test_quote_then_lex_recovers_value() {
        for value in ["plain", "tab\there", "quote\"d", "back\\slash", "ünïcödé", "bell\u{07}"] {
            assert_eq!(single(&quote(value)), TokenKind::String(value.to_string()));
        }
    }
}
