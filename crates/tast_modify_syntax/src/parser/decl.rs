/// File-scope declarations: the package clause and function declarations.
///
/// Function bodies are walked for composite literals with `current_func` set, which is how
/// a literal learns its enclosing function.
impl<'a> Parser<'a> {
    // ========================================================================
    // Package clause
    // ========================================================================

    fn package_clause(&mut self) {
        self.advance(); // package
        match self.identifier_spanned() {
            Ok(name) => {
                if self.file.package.is_none() {
                    self.file.package = Some(name.node);
                }
            }
            Err(e) => self.errors.push(e.with_hint("a Go file starts with `package <name>`")),
        }
    }

    // ========================================================================
    // Function declarations
    // ========================================================================

    /// `func Name(` / `func Name[` / `func (recv) Name(` at the current position.
    ///
    /// Function literals and function types (`var hook func(string) error`) do not match.
    fn is_func_decl_start(&self) -> bool {
        if !self.check_keyword(KeywordId::Func) {
            return false;
        }
        let name_at = if self.peek_at(1).is_some_and(|t| t.kind.is_punctuation(PunctuationId::LParen)) {
            match self.matching_close(self.pos + 1) {
                Some(close) => close + 1 - self.pos,
                None => return false,
            }
        } else {
            1
        };
        let is_name = matches!(self.peek_at(name_at).map(|t| &t.kind), Some(TokenKind::Ident(_)));
        let opens_params = self.peek_at(name_at + 1).is_some_and(|t| {
            t.kind.is_punctuation(PunctuationId::LParen) || t.kind.is_punctuation(PunctuationId::LBracket)
        });
        is_name && opens_params
    }

    /// Index of the token closing the group opened at `open`.
    fn matching_close(&self, open: usize) -> Option<usize> {
        let mut depth = 0usize;
        for (i, token) in self.tokens.iter().enumerate().skip(open) {
            if token.kind.is_open_delimiter() {
                depth += 1;
            } else if token.kind.is_close_delimiter() {
                depth = depth.checked_sub(1)?;
                if depth == 0 {
                    return Some(i);
                }
            }
        }
        None
    }

    fn func_decl(&mut self) {
        let start = self.advance().span; // func

        let receiver = if self.check_punct(PunctuationId::LParen) {
            let open = self.pos;
            self.skip_balanced();
            receiver_type(&self.tokens[open + 1..self.pos.saturating_sub(1)])
        } else {
            None
        };

        let name = match self.identifier_spanned() {
            Ok(name) => name,
            Err(e) => {
                self.errors.push(e);
                return;
            }
        };

        // Signature: parameters, results, and type parameters, up to the body.
        loop {
            if self.is_at_end()
                || self.is_func_decl_start()
                || self.check_keyword(KeywordId::Var)
                || self.check_keyword(KeywordId::Const)
                || self.check_keyword(KeywordId::Type)
                || self.check_keyword(KeywordId::Import)
            {
                // Declaration without a body.
                let span = start.merge(self.previous_span());
                self.file.functions.push(FuncDecl {
                    name,
                    receiver,
                    body: None,
                    span,
                });
                return;
            }
            if (self.check_keyword(KeywordId::Struct) || self.check_keyword(KeywordId::Interface))
                && self.peek_at(1).is_some_and(|t| t.kind.is_punctuation(PunctuationId::LBrace))
            {
                self.advance();
                self.skip_balanced();
                continue;
            }
            if self.check_punct(PunctuationId::LBrace) {
                break;
            }
            if self.peek().kind.is_open_delimiter() {
                self.skip_balanced();
            } else {
                self.advance();
            }
        }

        let open = self.advance().span;
        let outer = self.current_func.replace(name.node.clone());
        self.walk_region(Some(PunctuationId::RBrace));
        let close = self.current_span();
        self.match_punct(PunctuationId::RBrace);
        self.current_func = outer;

        let body = open.merge(close);
        tracing::trace!(func = %name.node, ?body, "function body");
        self.file.functions.push(FuncDecl {
            name,
            receiver,
            body: Some(body),
            span: start.merge(close),
        });
    }
}

/// Receiver type from the tokens between the receiver parentheses: `f *fixtureImpl` -> `*fixtureImpl`.
fn receiver_type(tokens: &[Token]) -> Option<String> {
    // Type parameters of a generic receiver are not part of the name.
    let end = tokens
        .iter()
        .position(|t| t.kind.is_punctuation(PunctuationId::LBracket))
        .unwrap_or(tokens.len());
    let tokens = &tokens[..end];
    let type_name = tokens.iter().rev().find_map(|t| match &t.kind {
        TokenKind::Ident(name) => Some(name.clone()),
        _ => None,
    })?;
    let pointer = tokens.iter().any(|t| t.kind.is_operator("*"));
    Some(if pointer { format!("*{type_name}") } else { type_name })
}
