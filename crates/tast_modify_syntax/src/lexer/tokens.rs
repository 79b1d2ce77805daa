//! Token types for the Go lexer.
//!
//! Keywords and punctuation carry small `Copy` IDs so the parser never compares spellings. Operators carry their
//! canonical spelling from [`OPERATORS`].
//!
//! ## Notes
//! - Newlines are not tokens: the editor only reads expressions inside brackets, where Go's automatic semicolon
//!   insertion never applies.
//! - Use `crate::token_helpers` for ergonomic token matching at call sites.

use crate::ast::Span;

// ============================================================================
// TOKEN TYPES
// ============================================================================

/// Kind of token produced by the lexer.
#[derive(Debug, Clone, PartialEq)]
pub enum TokenKind {
    // ========== Keyword / punctuation (ID-based) ==========
    Keyword(KeywordId),
    Punctuation(PunctuationId),
    Operator(&'static str),

    // ========== Identifiers and Literals ==========
    Ident(String),
    /// Interpreted string literal, decoded.
    String(String),
    /// Raw (backquoted) string literal, decoded (carriage returns removed).
    RawString(String),
    /// Rune literal, kept as written including quotes.
    Char(String),
    /// Numeric literal, kept as written.
    Number(String),

    // ========== Special ==========
    Eof,
}

/// A token with its kind and source span.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

impl Token {
    /// Construct a new token.
    pub fn new(kind: TokenKind, span: Span) -> Self {
        Self { kind, span }
    }
}

// ============================================================================
// KEYWORDS
// ============================================================================

/// Reserved words of the Go language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeywordId {
    Break,
    Case,
    Chan,
    Const,
    Continue,
    Default,
    Defer,
    Else,
    Fallthrough,
    For,
    Func,
    Go,
    Goto,
    If,
    Import,
    Interface,
    Map,
    Package,
    Range,
    Return,
    Select,
    Struct,
    Switch,
    Type,
    Var,
}

pub const KEYWORDS: &[(&str, KeywordId)] = &[
    ("break", KeywordId::Break),
    ("case", KeywordId::Case),
    ("chan", KeywordId::Chan),
    ("const", KeywordId::Const),
    ("continue", KeywordId::Continue),
    ("default", KeywordId::Default),
    ("defer", KeywordId::Defer),
    ("else", KeywordId::Else),
    ("fallthrough", KeywordId::Fallthrough),
    ("for", KeywordId::For),
    ("func", KeywordId::Func),
    ("go", KeywordId::Go),
    ("goto", KeywordId::Goto),
    ("if", KeywordId::If),
    ("import", KeywordId::Import),
    ("interface", KeywordId::Interface),
    ("map", KeywordId::Map),
    ("package", KeywordId::Package),
    ("range", KeywordId::Range),
    ("return", KeywordId::Return),
    ("select", KeywordId::Select),
    ("struct", KeywordId::Struct),
    ("switch", KeywordId::Switch),
    ("type", KeywordId::Type),
    ("var", KeywordId::Var),
];

/// Resolve an identifier spelling to a keyword id, if reserved.
pub fn keyword_id(name: &str) -> Option<KeywordId> {
    KEYWORDS.iter().find(|(spelling, _)| *spelling == name).map(|(_, id)| *id)
}

// ============================================================================
// PUNCTUATION / OPERATORS
// ============================================================================

/// Delimiters and separators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PunctuationId {
    LParen,
    RParen,
    LBracket,
    RBracket,
    LBrace,
    RBrace,
    Comma,
    Colon,
    Semicolon,
    Dot,
    Ellipsis,
}

impl PunctuationId {
    pub fn canonical(self) -> &'static str {
        match self {
            PunctuationId::LParen => "(",
            PunctuationId::RParen => ")",
            PunctuationId::LBracket => "[",
            PunctuationId::RBracket => "]",
            PunctuationId::LBrace => "{",
            PunctuationId::RBrace => "}",
            PunctuationId::Comma => ",",
            PunctuationId::Colon => ":",
            PunctuationId::Semicolon => ";",
            PunctuationId::Dot => ".",
            PunctuationId::Ellipsis => "...",
        }
    }

    /// The closing delimiter matching an opening one.
    pub fn closing(self) -> Option<PunctuationId> {
        match self {
            PunctuationId::LParen => Some(PunctuationId::RParen),
            PunctuationId::LBracket => Some(PunctuationId::RBracket),
            PunctuationId::LBrace => Some(PunctuationId::RBrace),
            _ => None,
        }
    }
}

/// Go operators, longest spellings first so the lexer can use maximal munch.
pub const OPERATORS: &[&str] = &[
    "<<=", ">>=", "&^=", "&&", "||", "<-", "++", "--", "==", "!=", "<=", ">=", ":=", "+=", "-=", "*=", "/=", "%=",
    "&=", "|=", "^=", "<<", ">>", "&^", "+", "-", "*", "/", "%", "&", "|", "^", "<", ">", "=", "!", "~",
];
