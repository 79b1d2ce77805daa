/// Parser core types and entrypoint.
///
/// This chunk defines the [`Parser`] type, its top-level `parse()` entrypoint, and the
/// region walker that skips uninteresting syntax while tracking bracket nesting.
///
/// ## Notes
/// - This file is `include!`'d into `crate::parser` to keep all parser methods in a
///   single module while avoiding a single “god file”.

/// Parser state.
///
/// ## Notes
/// - The parser is single-pass. A malformed composite literal is reported and skipped as a
///   balanced group, so one bad literal does not hide errors in the rest of the file.
pub struct Parser<'a> {
    tokens: &'a [Token],
    pos: usize,
    errors: Vec<SyntaxError>,
    file: SourceFile,
    /// Name of the top-level function whose body is being walked.
    current_func: Option<Ident>,
}

impl<'a> Parser<'a> {
    /// Create a new parser for a token stream.
    ///
    /// ## Parameters
    /// - `tokens`: Token stream produced by `tast_modify_syntax::lexer`.
    pub fn new(tokens: &'a [Token]) -> Self {
        Self {
            tokens,
            pos: 0,
            errors: Vec::new(),
            file: SourceFile::default(),
            current_func: None,
        }
    }

    /// Parse the entire token stream into a [`SourceFile`].
    ///
    /// ## Errors
    /// Returns every [`SyntaxError`] found. The parser recovers after each malformed literal.
    pub fn parse(mut self) -> Result<SourceFile, Vec<SyntaxError>> {
        if self.tokens.is_empty() {
            return Ok(self.file);
        }

        self.walk_region(None);

        if self.errors.is_empty() {
            tracing::debug!(
                functions = self.file.functions.len(),
                literals = self.file.literals.len(),
                "parsed source file"
            );
            Ok(self.file)
        } else {
            Err(self.errors)
        }
    }

    /// Walk tokens until the closing delimiter `until` (left unconsumed) or end of input.
    ///
    /// `until == None` means the walk is at file scope, where package clauses and function
    /// declarations are recognized.
    fn walk_region(&mut self, until: Option<PunctuationId>) {
        let file_scope = until.is_none();

        while !self.is_at_end() {
            if until.is_some_and(|close| self.check_punct(close)) {
                return;
            }

            if file_scope && self.check_keyword(KeywordId::Package) {
                self.package_clause();
                continue;
            }

            if file_scope && self.is_func_decl_start() {
                self.func_decl();
                continue;
            }

            if self.check_punct(PunctuationId::LBrace) && self.is_keyed_literal_start() {
                if let Some(type_name) = self.type_name_before_brace() {
                    self.struct_literal_recovering(Some(type_name));
                    continue;
                }
            }

            if self.peek().kind.is_open_delimiter() {
                self.nested_region();
                continue;
            }

            // Closers that do not belong to this region were already reported by the lexer.
            self.advance();
        }
    }

    /// Consume an opening delimiter, walk its contents, and consume the matching closer.
    fn nested_region(&mut self) {
        let close = self.advance().punctuation_id().and_then(PunctuationId::closing);
        self.walk_region(close);
        if let Some(close) = close {
            self.match_punct(close);
        }
    }
}
