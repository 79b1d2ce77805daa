//! Small helper APIs for working with `Token` / `TokenKind`.
//!
//! These helpers exist to reduce repetitive `matches!(...)` at call sites and to make it easy
//! to work with ID-based tokens.

use crate::lexer::{KeywordId, PunctuationId, Token, TokenKind};

impl TokenKind {
    /// Return the keyword id, if this is a keyword token.
    pub fn keyword_id(&self) -> Option<KeywordId> {
        match self {
            TokenKind::Keyword(id) => Some(*id),
            _ => None,
        }
    }

    /// Return `true` if this is the given keyword.
    pub fn is_keyword(&self, id: KeywordId) -> bool {
        matches!(self, TokenKind::Keyword(k) if *k == id)
    }

    /// Return `true` if this is the operator spelled `op`.
    pub fn is_operator(&self, op: &str) -> bool {
        matches!(self, TokenKind::Operator(o) if *o == op)
    }

    /// Return the punctuation id, if this is a punctuation token.
    pub fn punctuation_id(&self) -> Option<PunctuationId> {
        match self {
            TokenKind::Punctuation(id) => Some(*id),
            _ => None,
        }
    }

    /// Return `true` if this is the given punctuation.
    pub fn is_punctuation(&self, id: PunctuationId) -> bool {
        matches!(self, TokenKind::Punctuation(p) if *p == id)
    }

    /// Return `true` for `(`, `[`, `{`.
    pub fn is_open_delimiter(&self) -> bool {
        self.punctuation_id().and_then(PunctuationId::closing).is_some()
    }

    /// Return `true` for `)`, `]`, `}`.
    pub fn is_close_delimiter(&self) -> bool {
        matches!(
            self.punctuation_id(),
            Some(PunctuationId::RParen | PunctuationId::RBracket | PunctuationId::RBrace)
        )
    }

    /// Decoded value of an interpreted or raw string literal.
    pub fn string_value(&self) -> Option<&str> {
        match self {
            TokenKind::String(s) | TokenKind::RawString(s) => Some(s),
            _ => None,
        }
    }
}

impl Token {
    /// Convenience wrapper for `self.kind.keyword_id()`.
    pub fn keyword_id(&self) -> Option<KeywordId> {
        self.kind.keyword_id()
    }

    /// Convenience wrapper for `self.kind.punctuation_id()`.
    pub fn punctuation_id(&self) -> Option<PunctuationId> {
        self.kind.punctuation_id()
    }
}
