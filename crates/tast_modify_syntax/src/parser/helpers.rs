/// Token-stream helpers and error recovery.
///
/// This chunk contains the low-level primitives used throughout parsing:
/// - Peeking/consuming tokens (`peek`, `advance`)
/// - Matching / expecting keywords and punctuation
/// - Balanced skipping (`skip_balanced`) used for recovery and for syntax the editor ignores
impl<'a> Parser<'a> {
    // ========================================================================
    // Helpers
    // ========================================================================

    /// Return `true` if the current token is [`TokenKind::Eof`] (or the stream is exhausted).
    fn is_at_end(&self) -> bool {
        self.pos >= self.tokens.len() || matches!(self.peek().kind, TokenKind::Eof)
    }

    /// Return the current token without consuming it.
    fn peek(&self) -> &Token {
        let last = self.tokens.len() - 1;
        &self.tokens[self.pos.min(last)]
    }

    /// Return the token `n` positions ahead without consuming anything.
    fn peek_at(&self, n: usize) -> Option<&Token> {
        self.tokens.get(self.pos + n)
    }

    /// Advance to the next token and return the token we just consumed.
    fn advance(&mut self) -> &Token {
        let consumed = self.pos.min(self.tokens.len() - 1);
        if !self.is_at_end() {
            self.pos += 1;
        }
        &self.tokens[consumed]
    }

    /// Span of the most recently consumed token.
    fn previous_span(&self) -> Span {
        if self.pos == 0 {
            self.current_span()
        } else {
            self.tokens[self.pos - 1].span
        }
    }

    fn current_span(&self) -> Span {
        self.peek().span
    }

    fn check_keyword(&self, id: KeywordId) -> bool {
        self.peek().kind.is_keyword(id)
    }

    fn check_punct(&self, id: PunctuationId) -> bool {
        self.peek().kind.is_punctuation(id)
    }

    fn match_punct(&mut self, id: PunctuationId) -> bool {
        if self.check_punct(id) {
            self.advance();
            true
        } else {
            false
        }
    }

    fn expect_punct(&mut self, id: PunctuationId, msg: &str) -> Result<Span, SyntaxError> {
        if self.check_punct(id) {
            Ok(self.advance().span)
        } else {
            Err(SyntaxError::syntax(
                format!("{}, found {}", msg, describe(&self.peek().kind)),
                self.current_span(),
            ))
        }
    }

    fn identifier_spanned(&mut self) -> Result<Spanned<Ident>, SyntaxError> {
        match &self.peek().kind {
            TokenKind::Ident(name) => {
                let span = self.current_span();
                let name = name.clone();
                self.advance();
                Ok(Spanned::new(name, span))
            }
            other => Err(SyntaxError::syntax(
                format!("Expected identifier, found {}", describe(other)),
                self.current_span(),
            )),
        }
    }

    /// Skip the current token; if it opens a group, skip through the matching closer.
    fn skip_balanced(&mut self) {
        let mut depth = 0usize;
        loop {
            if self.is_at_end() {
                return;
            }
            let kind = &self.advance().kind;
            if kind.is_open_delimiter() {
                depth += 1;
            } else if kind.is_close_delimiter() {
                depth = depth.saturating_sub(1);
            }
            if depth == 0 {
                return;
            }
        }
    }

    /// `{ Ident :` where the token after the colon cannot start a labeled statement.
    fn is_keyed_literal_start(&self) -> bool {
        let is_key = matches!(self.peek_at(1).map(|t| &t.kind), Some(TokenKind::Ident(_)));
        let is_colon = self
            .peek_at(2)
            .is_some_and(|t| t.kind.is_punctuation(PunctuationId::Colon));
        let labels_statement = self.peek_at(3).and_then(Token::keyword_id).is_some_and(|id| {
            matches!(
                id,
                KeywordId::For
                    | KeywordId::Switch
                    | KeywordId::Select
                    | KeywordId::If
                    | KeywordId::Go
                    | KeywordId::Defer
                    | KeywordId::Return
                    | KeywordId::Break
                    | KeywordId::Continue
                    | KeywordId::Goto
            )
        });
        is_key && is_colon && !labels_statement
    }

    /// Type spelling directly before the current `{`: `Name` or `pkg.Name`.
    fn type_name_before_brace(&self) -> Option<String> {
        let at = |back: usize| self.pos.checked_sub(back).map(|i| &self.tokens[i].kind);
        let TokenKind::Ident(name) = at(1)? else {
            return None;
        };
        match (at(2), at(3)) {
            (Some(dot), Some(TokenKind::Ident(pkg))) if dot.is_punctuation(PunctuationId::Dot) => {
                Some(format!("{pkg}.{name}"))
            }
            _ => Some(name.clone()),
        }
    }
}

/// Source spelling of a token, used to rebuild type names.
fn spelling(kind: &TokenKind) -> String {
    match kind {
        TokenKind::Keyword(id) => KEYWORDS
            .iter()
            .find(|(_, k)| k == id)
            .map(|(s, _)| s.to_string())
            .unwrap_or_default(),
        TokenKind::Punctuation(p) => p.canonical().to_string(),
        TokenKind::Operator(op) => op.to_string(),
        TokenKind::Ident(s) | TokenKind::Number(s) | TokenKind::Char(s) => s.clone(),
        TokenKind::String(s) => crate::lexer::quote(s),
        TokenKind::RawString(s) => format!("`{s}`"),
        TokenKind::Eof => String::new(),
    }
}

/// Human-readable token description for error messages.
fn describe(kind: &TokenKind) -> String {
    match kind {
        TokenKind::Eof => "end of file".to_string(),
        TokenKind::String(_) | TokenKind::RawString(_) => "string literal".to_string(),
        other => format!("'{}'", spelling(other)),
    }
}
