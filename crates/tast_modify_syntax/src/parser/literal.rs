/// Composite literals and the values inside them.
///
/// A keyed literal is recorded in [`SourceFile::literals`] before its fields are parsed,
/// so outer literals always precede the literals nested in them.
impl<'a> Parser<'a> {
    // ========================================================================
    // Struct literals
    // ========================================================================

    /// Parse a keyed literal at the current `{`; on error, report it and skip the whole group.
    fn struct_literal_recovering(&mut self, type_name: Option<String>) -> Option<usize> {
        let open_pos = self.pos;
        match self.struct_literal(type_name) {
            Ok(index) => index,
            Err(e) => {
                self.errors.push(e);
                self.pos = open_pos;
                self.skip_balanced();
                None
            }
        }
    }

    /// `{ Key: Value, ... }` with the current token on the opening brace.
    ///
    /// Returns `Ok(None)` when a later key turns out to be an expression (`"y": 2`, `pkg.B: 2`). The group is then a
    /// map literal: it is skipped, and nothing recorded inside it is kept.
    fn struct_literal(&mut self, type_name: Option<String>) -> Result<Option<usize>, SyntaxError> {
        let open_pos = self.pos;
        let error_count = self.errors.len();
        let open_brace = self.expect_punct(PunctuationId::LBrace, "Expected '{'")?;
        let index = self.file.literals.len();
        self.file.literals.push(StructLiteral {
            type_name,
            enclosing_func: self.current_func.clone(),
            fields: Vec::new(),
            index: HashMap::new(),
            open_brace,
            close_brace: open_brace,
            span: open_brace,
        });

        let mut fields: Vec<KeyedField> = Vec::new();
        let mut field_index = HashMap::new();
        while !self.check_punct(PunctuationId::RBrace) {
            if !self.at_field_key() {
                tracing::trace!(at = open_brace.start, "composite literal has expression keys; skipping");
                self.pos = open_pos;
                self.skip_balanced();
                self.file.literals.truncate(index);
                self.errors.truncate(error_count);
                return Ok(None);
            }
            let key = self.identifier_spanned()?;
            self.expect_punct(PunctuationId::Colon, "Expected ':' after field name")?;
            let value = self.value()?;

            if let Some(&first) = field_index.get(&key.node) {
                let first: &KeyedField = &fields[first];
                return Err(SyntaxError::syntax(format!("Duplicate field '{}'", key.node), key.span)
                    .with_note(format!("first set at byte {}", first.key.span.start)));
            }
            field_index.insert(key.node.clone(), fields.len());
            fields.push(KeyedField { key, value });

            if !self.match_punct(PunctuationId::Comma) {
                break;
            }
        }
        let close_brace = self.expect_punct(PunctuationId::RBrace, "Expected ',' or '}' in struct literal")?;

        let literal = &mut self.file.literals[index];
        literal.fields = fields;
        literal.index = field_index;
        literal.close_brace = close_brace;
        literal.span = open_brace.merge(close_brace);
        Ok(Some(index))
    }

    /// `true` when the current token can start a field name. An identifier directly followed by `,` or `}` still
    /// counts, so a missing colon is reported rather than skipped.
    fn at_field_key(&self) -> bool {
        matches!(self.peek().kind, TokenKind::Ident(_))
            && self.peek_at(1).is_some_and(|t| {
                t.kind.is_punctuation(PunctuationId::Colon)
                    || t.kind.is_punctuation(PunctuationId::Comma)
                    || t.kind.is_punctuation(PunctuationId::RBrace)
            })
    }

    // ========================================================================
    // Values
    // ========================================================================

    /// Parse one value up to (not including) the next `,` or closing delimiter.
    fn value(&mut self) -> Result<Spanned<Value>, SyntaxError> {
        let start = self.current_span();
        if self.at_value_end() {
            return Err(SyntaxError::syntax(
                format!("Expected value, found {}", describe(&self.peek().kind)),
                start,
            ));
        }

        let value = match &self.peek().kind {
            TokenKind::Punctuation(PunctuationId::LBracket) => self.typed_sequence()?,
            TokenKind::Punctuation(PunctuationId::LBrace) => self.elided_literal()?,
            kind @ (TokenKind::String(_) | TokenKind::RawString(_)) => {
                let lit = StringLit {
                    value: kind.string_value().unwrap_or_default().to_string(),
                    raw: matches!(kind, TokenKind::RawString(_)),
                };
                self.advance();
                if self.at_value_end() {
                    Value::String(lit)
                } else {
                    self.skip_expression();
                    Value::Other
                }
            }
            TokenKind::Operator("&") => {
                self.advance();
                let inner = self.value()?;
                match inner.node {
                    Value::Struct { .. } => inner.node,
                    _ => Value::Other,
                }
            }
            TokenKind::Ident(_) => self.path_or_literal()?,
            _ => {
                self.skip_expression();
                Value::Other
            }
        };

        Ok(Spanned::new(value, start.merge(self.previous_span())))
    }

    /// `Name`, `pkg.Name`, or a keyed literal of that type.
    fn path_or_literal(&mut self) -> Result<Value, SyntaxError> {
        let mut path = vec![self.identifier_spanned()?.node];
        while self.check_punct(PunctuationId::Dot)
            && matches!(self.peek_at(1).map(|t| &t.kind), Some(TokenKind::Ident(_)))
        {
            self.advance();
            path.push(self.identifier_spanned()?.node);
        }

        if self.check_punct(PunctuationId::LBrace) && self.is_keyed_literal_start() {
            return Ok(match self.struct_literal(Some(path.join(".")))? {
                Some(literal_index) => Value::Struct { literal_index },
                None => Value::Other,
            });
        }
        if self.at_value_end() {
            return Ok(Value::Path(path));
        }
        self.skip_expression();
        Ok(Value::Other)
    }

    /// `{...}` with the type elided, as inside `[]testing.Param{{Name: "x"}}`.
    fn elided_literal(&mut self) -> Result<Value, SyntaxError> {
        if self.is_keyed_literal_start() {
            Ok(match self.struct_literal(None)? {
                Some(literal_index) => Value::Struct { literal_index },
                None => Value::Other,
            })
        } else {
            self.skip_expression();
            Ok(Value::Other)
        }
    }

    /// `[]T{...}`. Arrays (`[N]T{...}`, `[...]T{...}`) are treated the same; maps and slice
    /// expressions that are not literals fall back to [`Value::Other`].
    fn typed_sequence(&mut self) -> Result<Value, SyntaxError> {
        let checkpoint = self.pos;
        self.skip_balanced(); // [ ... ]

        let mut elem_type = String::new();
        while !self.is_at_end() && !self.check_punct(PunctuationId::LBrace) && !self.at_value_end() {
            if (self.check_keyword(KeywordId::Struct) || self.check_keyword(KeywordId::Interface))
                && self.peek_at(1).is_some_and(|t| t.kind.is_punctuation(PunctuationId::LBrace))
            {
                elem_type.push_str(&spelling(&self.peek().kind));
                self.advance();
                self.skip_balanced();
                elem_type.push_str("{}");
                continue;
            }
            if self.check_punct(PunctuationId::LBracket) {
                let Some(close) = self.matching_close(self.pos) else {
                    break;
                };
                for token in &self.tokens[self.pos..=close] {
                    elem_type.push_str(&spelling(&token.kind));
                }
                self.pos = close + 1;
                continue;
            }
            if self.check_keyword(KeywordId::Map)
                || self.check_keyword(KeywordId::Func)
                || self.check_keyword(KeywordId::Chan)
                || self.check_punct(PunctuationId::LParen)
            {
                break;
            }
            elem_type.push_str(&spelling(&self.peek().kind));
            self.advance();
        }

        if elem_type.is_empty() || !self.check_punct(PunctuationId::LBrace) {
            self.pos = checkpoint;
            self.skip_expression();
            return Ok(Value::Other);
        }

        Ok(Value::Sequence(self.sequence_literal(elem_type)?))
    }

    /// Elements of a sequence literal, with the current token on the opening brace.
    fn sequence_literal(&mut self, elem_type: String) -> Result<SequenceLiteral, SyntaxError> {
        let open_brace = self.expect_punct(PunctuationId::LBrace, "Expected '{'")?;
        let mut elements = Vec::new();
        let mut trailing_comma = None;

        while !self.check_punct(PunctuationId::RBrace) {
            elements.push(self.value()?);
            if self.check_punct(PunctuationId::Comma) {
                let comma = self.advance().span;
                if self.check_punct(PunctuationId::RBrace) {
                    trailing_comma = Some(comma);
                }
            } else {
                break;
            }
        }
        let close_brace = self.expect_punct(PunctuationId::RBrace, "Expected ',' or '}' in sequence literal")?;

        Ok(SequenceLiteral {
            elem_type,
            elements,
            open_brace,
            close_brace,
            trailing_comma,
        })
    }

    // ========================================================================
    // Expression skipping
    // ========================================================================

    /// `true` when the current token ends a value: `,` or a closing delimiter.
    fn at_value_end(&self) -> bool {
        self.check_punct(PunctuationId::Comma) || self.peek().kind.is_close_delimiter() || self.is_at_end()
    }

    /// Skip an arbitrary expression. Groups inside it are still walked, so keyed literals
    /// passed to calls (`wrap(testing.Param{...})`) are recorded.
    fn skip_expression(&mut self) {
        while !self.at_value_end() {
            if self.check_punct(PunctuationId::LBrace) && self.is_keyed_literal_start() {
                let type_name = self.type_name_before_brace();
                self.struct_literal_recovering(type_name);
            } else if self.peek().kind.is_open_delimiter() {
                self.nested_region();
            } else {
                self.advance();
            }
        }
    }
}
