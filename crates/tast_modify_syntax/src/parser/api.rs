/// Parse a token stream into a [`SourceFile`].
///
/// This is the main public entrypoint for parsing.
///
/// ## Parameters
/// - `tokens`: Token stream produced by `tast_modify_syntax::lexer`.
///
/// ## Errors
/// Returns `Err(Vec<SyntaxError>)` if any composite literal is malformed.
#[tracing::instrument(skip_all, fields(token_count = tokens.len()))]
pub fn parse(tokens: &[Token]) -> Result<SourceFile, Vec<SyntaxError>> {
    Parser::new(tokens).parse()
}
