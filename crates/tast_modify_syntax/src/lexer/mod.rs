//! Lexer for Go source files
//!
//! Handles tokenization including:
//! - Keywords and identifiers (Unicode letters allowed, as in Go)
//! - Interpreted, raw, and rune literals
//! - Numeric literals (kept as written)
//! - Operators (maximal munch) and punctuation
//! - Line and block comments (skipped)
//!
//! ## Module Structure
//!
//! - `tokens` - Token types (TokenKind, Token, KeywordId, PunctuationId)
//! - `strings` - String/raw-string/rune scanning and escape decoding

mod strings;
pub mod tokens;

pub use strings::quote;
pub use tokens::{KeywordId, PunctuationId, Token, TokenKind, keyword_id};

use crate::ast::Span;
use crate::diagnostics::SyntaxError;
use tokens::OPERATORS;

// ============================================================================
// LEXER STATE
// ============================================================================

/// Lexer for Go source code.
///
/// Converts source text into a stream of tokens. Bracket nesting is tracked with a stack so that a mismatched or
/// unmatched closing delimiter is reported at the lexing stage, before the parser sees it.
pub struct Lexer<'a> {
    source: &'a str,
    chars: std::iter::Peekable<std::str::CharIndices<'a>>,
    current_pos: usize,
    /// Open delimiters and their positions, innermost last.
    brackets: Vec<(PunctuationId, Span)>,
    tokens: Vec<Token>,
    errors: Vec<SyntaxError>,
}

impl<'a> Lexer<'a> {
    /// Create a new lexer for the given source code.
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            chars: source.char_indices().peekable(),
            current_pos: 0,
            brackets: Vec::new(),
            tokens: Vec::new(),
            errors: Vec::new(),
        }
    }

    /// Tokenize the entire source code.
    ///
    /// Returns a vector of tokens on success, or a vector of errors on failure.
    /// The token stream always ends with an `Eof` token.
    pub fn tokenize(mut self) -> Result<Vec<Token>, Vec<SyntaxError>> {
        while !self.is_at_end() {
            self.scan_token();
        }

        while let Some((open, span)) = self.brackets.pop() {
            self.errors.push(SyntaxError::lexical(
                format!("Unclosed '{}'", open.canonical()),
                span,
            ));
        }

        self.tokens.push(Token::new(
            TokenKind::Eof,
            Span::new(self.current_pos, self.current_pos),
        ));

        if self.errors.is_empty() {
            Ok(self.tokens)
        } else {
            Err(self.errors)
        }
    }

    // ========================================================================
    // Core character handling
    // ========================================================================

    fn is_at_end(&mut self) -> bool {
        self.chars.peek().is_none()
    }

    fn peek(&mut self) -> Option<char> {
        self.chars.peek().map(|(_, c)| *c)
    }

    fn peek_next(&self) -> Option<char> {
        let mut iter = self.source[self.current_pos..].chars();
        iter.next();
        iter.next()
    }

    fn advance(&mut self) -> Option<char> {
        if let Some((pos, c)) = self.chars.next() {
            self.current_pos = pos + c.len_utf8();
            Some(c)
        } else {
            None
        }
    }

    fn match_char(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.advance();
            true
        } else {
            false
        }
    }

    // ========================================================================
    // Main scanning dispatch
    // ========================================================================

    fn scan_token(&mut self) {
        while let Some(c) = self.peek() {
            if c.is_whitespace() {
                self.advance();
            } else {
                break;
            }
        }

        let start = self.current_pos;

        let Some(c) = self.advance() else {
            return;
        };

        match c {
            // Comments
            '/' if self.peek() == Some('/') => self.skip_line_comment(),
            '/' if self.peek() == Some('*') => self.skip_block_comment(start),

            // Delimiters
            '(' => self.open_bracket(PunctuationId::LParen, start),
            ')' => self.close_bracket(PunctuationId::RParen, start),
            '[' => self.open_bracket(PunctuationId::LBracket, start),
            ']' => self.close_bracket(PunctuationId::RBracket, start),
            '{' => self.open_bracket(PunctuationId::LBrace, start),
            '}' => self.close_bracket(PunctuationId::RBrace, start),
            ',' => self.add_punct(PunctuationId::Comma, start),
            ';' => self.add_punct(PunctuationId::Semicolon, start),
            ':' => {
                if self.match_char('=') {
                    self.add_token(TokenKind::Operator(":="), start);
                } else {
                    self.add_punct(PunctuationId::Colon, start);
                }
            }
            '.' => {
                if self.peek().is_some_and(|c| c.is_ascii_digit()) {
                    self.scan_number(start);
                } else if self.peek() == Some('.') && self.peek_next() == Some('.') {
                    self.advance();
                    self.advance();
                    self.add_punct(PunctuationId::Ellipsis, start);
                } else {
                    self.add_punct(PunctuationId::Dot, start);
                }
            }

            // Literals
            '"' => self.scan_string(start),
            '`' => self.scan_raw_string(start),
            '\'' => self.scan_rune(start),
            '0'..='9' => self.scan_number(start),

            // Identifiers and keywords
            _ if is_ident_start(c) => self.scan_identifier(start),

            _ if is_operator_char(c) => self.scan_operator(start),

            _ => {
                self.errors.push(SyntaxError::lexical(
                    format!("Unexpected character '{}'", c),
                    Span::new(start, self.current_pos),
                ));
            }
        }
    }

    // ========================================================================
    // Token helpers
    // ========================================================================

    fn add_token(&mut self, kind: TokenKind, start: usize) {
        self.tokens.push(Token::new(kind, Span::new(start, self.current_pos)));
    }

    fn add_punct(&mut self, id: PunctuationId, start: usize) {
        self.add_token(TokenKind::Punctuation(id), start);
    }

    fn open_bracket(&mut self, kind: PunctuationId, start: usize) {
        self.brackets.push((kind, Span::new(start, start + 1)));
        self.add_punct(kind, start);
    }

    /// Emit a closing bracket token, reporting an error when it does not match the innermost open bracket.
    fn close_bracket(&mut self, kind: PunctuationId, start: usize) {
        let span = Span::new(start, self.current_pos);
        match self.brackets.pop() {
            None => {
                self.errors.push(SyntaxError::lexical(
                    "Unmatched closing bracket".to_string(),
                    span,
                ));
            }
            Some((open, open_span)) if open.closing() != Some(kind) => {
                self.errors.push(
                    SyntaxError::lexical(
                        format!("Mismatched closing bracket '{}'", kind.canonical()),
                        span,
                    )
                    .with_note(format!(
                        "'{}' opened at byte {} is still unclosed",
                        open.canonical(),
                        open_span.start
                    )),
                );
            }
            Some(_) => {}
        }
        self.add_punct(kind, start);
    }

    /// Maximal-munch operator scan. The first character has already been consumed.
    fn scan_operator(&mut self, start: usize) {
        let rest = &self.source[start..];
        let spelling = OPERATORS
            .iter()
            .copied()
            .find(|op| rest.starts_with(*op))
            .unwrap_or("");
        // The first character is already consumed.
        for _ in 1..spelling.chars().count() {
            self.advance();
        }
        if spelling.is_empty() {
            self.errors.push(SyntaxError::lexical(
                "Unknown operator".to_string(),
                Span::new(start, self.current_pos),
            ));
        } else {
            self.add_token(TokenKind::Operator(spelling), start);
        }
    }

    // ========================================================================
    // Comments
    // ========================================================================

    fn skip_line_comment(&mut self) {
        while let Some(c) = self.peek() {
            if c == '\n' {
                break;
            }
            self.advance();
        }
    }

    fn skip_block_comment(&mut self, start: usize) {
        self.advance(); // '*'
        loop {
            match self.advance() {
                None => {
                    self.errors.push(SyntaxError::lexical(
                        "Unterminated block comment".to_string(),
                        Span::new(start, self.current_pos),
                    ));
                    return;
                }
                Some('*') if self.peek() == Some('/') => {
                    self.advance();
                    return;
                }
                Some(_) => {}
            }
        }
    }

    // ========================================================================
    // Identifiers and numbers
    // ========================================================================

    fn scan_identifier(&mut self, start: usize) {
        while let Some(c) = self.peek() {
            if is_ident_continue(c) {
                self.advance();
            } else {
                break;
            }
        }

        let spelling = &self.source[start..self.current_pos];

        if let Some(id) = keyword_id(spelling) {
            self.add_token(TokenKind::Keyword(id), start);
        } else {
            self.add_token(TokenKind::Ident(spelling.to_string()), start);
        }
    }

    /// Numbers are not interpreted, only delimited: digits, letters (hex digits, base prefixes, suffixes), `_`,
    /// `.`, and a sign directly after an exponent marker.
    fn scan_number(&mut self, start: usize) {
        let mut prev = self.source[start..self.current_pos].chars().last().unwrap_or('0');
        while let Some(c) = self.peek() {
            let exponent_sign = (c == '+' || c == '-') && matches!(prev, 'e' | 'E' | 'p' | 'P');
            if c.is_ascii_alphanumeric() || c == '_' || c == '.' || exponent_sign {
                if c == '.' && self.peek_next() == Some('.') {
                    break;
                }
                self.advance();
                prev = c;
            } else {
                break;
            }
        }
        let spelling = self.source[start..self.current_pos].to_string();
        self.add_token(TokenKind::Number(spelling), start);
    }
}

// ============================================================================
// Helper functions
// ============================================================================

fn is_ident_start(c: char) -> bool {
    c.is_alphabetic() || c == '_'
}

fn is_ident_continue(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

fn is_operator_char(c: char) -> bool {
    matches!(c, '+' | '-' | '*' | '/' | '%' | '&' | '|' | '^' | '<' | '>' | '=' | '!' | '~')
}

/// Convenience function to lex a source string.
///
/// This is a shorthand for `Lexer::new(source).tokenize()`.
#[tracing::instrument(skip_all, fields(source_len = source.len()))]
pub fn lex(source: &str) -> Result<Vec<Token>, Vec<SyntaxError>> {
    Lexer::new(source).tokenize()
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(source: &str) -> Vec<TokenKind> {
        lex(source).unwrap().into_iter().map(|t| t.kind).collect()
    }

    #[test]
    fn test_keyword_table_roundtrip() {
        for (spelling, id) in tokens::KEYWORDS {
            let tokens = lex(spelling).unwrap_or_else(|errs| panic!("lex({:?}) failed: {:?}", spelling, errs));
            assert_eq!(tokens.len(), 2, "expected token + EOF for keyword {:?}", spelling);
            assert!(tokens[0].kind.is_keyword(*id));
        }
    }

    #[test]
    fn test_operator_table_roundtrip() {
        for op in tokens::OPERATORS {
            let tokens = lex(op).unwrap_or_else(|errs| panic!("lex({:?}) failed: {:?}", op, errs));
            assert_eq!(tokens.len(), 2, "expected single token for operator {:?}, got {:?}", op, tokens);
            assert!(tokens[0].kind.is_operator(op));
        }
    }

    #[test]
    fn test_registration_call() {
        let k = kinds("testing.AddTest(&testing.Test{Func: Fixture})");
        assert!(matches!(&k[0], TokenKind::Ident(s) if s == "testing"));
        assert!(k[1].is_punctuation(PunctuationId::Dot));
        assert!(matches!(&k[2], TokenKind::Ident(s) if s == "AddTest"));
        assert!(k[3].is_punctuation(PunctuationId::LParen));
        assert!(k[4].is_operator("&"));
        assert!(matches!(&k[7], TokenKind::Ident(s) if s == "Test"));
        assert!(k[8].is_punctuation(PunctuationId::LBrace));
        assert!(matches!(&k[9], TokenKind::Ident(s) if s == "Func"));
        assert!(k[10].is_punctuation(PunctuationId::Colon));
        assert!(k[12].is_punctuation(PunctuationId::RBrace));
        assert!(k[13].is_punctuation(PunctuationId::RParen));
        assert_eq!(k[14], TokenKind::Eof);
    }

    #[test]
    fn test_spans_are_byte_offsets() {
        let source = "x := []string{\"é\", \"b\"}";
        let tokens = lex(source).unwrap();
        for token in &tokens[..tokens.len() - 1] {
            assert!(source.is_char_boundary(token.span.start));
            assert!(source.is_char_boundary(token.span.end));
        }
        let first_string = tokens.iter().find(|t| matches!(t.kind, TokenKind::String(_))).unwrap();
        assert_eq!(&source[first_string.span.start..first_string.span.end], "\"é\"");
    }

    #[test]
    fn test_comments_are_skipped() {
        let k = kinds("a // line comment\n/* block\n comment */ b");
        assert_eq!(k.len(), 3);
        assert!(matches!(&k[0], TokenKind::Ident(s) if s == "a"));
        assert!(matches!(&k[1], TokenKind::Ident(s) if s == "b"));
    }

    #[test]
    fn test_define_and_colon() {
        let k = kinds("x := y; m[a:b]");
        assert!(k[1].is_operator(":="));
        assert!(k[3].is_punctuation(PunctuationId::Semicolon));
        assert!(k[7].is_punctuation(PunctuationId::Colon));
    }

    #[test]
    fn test_numbers_kept_as_written() {
        let k = kinds("42 0x1F 1_000 3.14 1e-9 .5");
        let spellings: Vec<_> = k
            .iter()
            .filter_map(|t| match t {
                TokenKind::Number(n) => Some(n.as_str()),
                _ => None,
            })
            .collect();
        assert_eq!(spellings, vec!["42", "0x1F", "1_000", "3.14", "1e-9", ".5"]);
    }

    #[test]
    fn test_variadic_ellipsis() {
        let k = kinds("f(args...)");
        assert!(k[3].is_punctuation(PunctuationId::Ellipsis));
    }

    #[test]
    fn test_unicode_identifier() {
        let k = kinds("π := 1");
        assert!(matches!(&k[0], TokenKind::Ident(s) if s == "π"));
    }

    #[test]
    fn test_unexpected_character() {
        let errors = lex("a # b").unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].message.contains("Unexpected character '#'"));
    }

    #[test]
    fn test_unmatched_closing_bracket() {
        for source in [")", "]", "}"] {
            let errors = lex(source).unwrap_err();
            assert!(errors[0].message.contains("Unmatched closing bracket"), "{source}");
        }
    }

    #[test]
    fn test_mismatched_closing_bracket() {
        let errors = lex("f(x}").unwrap_err();
        assert!(errors[0].message.contains("Mismatched closing bracket '}'"));
        assert_eq!(errors[0].notes.len(), 1);
    }

    #[test]
    fn test_unclosed_bracket() {
        let errors = lex("func init() {").unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].message.contains("Unclosed '{'"));
        assert_eq!(errors[0].span, Span::new(12, 13));
    }

    #[test]
    fn test_unterminated_block_comment() {
        let errors = lex("/* never closed").unwrap_err();
        assert!(errors[0].message.contains("Unterminated block comment"));
    }
}
