/// Parse a token slice into a [`Program`].
///
/// This is the main public entrypoint for parsing pre-tokenized input. The slice does not need to end in `Eof`.
///
/// ## Parameters
/// - `tokens`: Token stream produced by `minic_syntax::lexer::lex` (or built by hand).
#[tracing::instrument(skip_all, fields(token_count = tokens.len()))]
pub fn parse(tokens: &[Token]) -> ParseOutput {
    Parser::new(TokenStream::new(tokens)).parse()
}

/// Tokenize and parse source text in one pass, pulling tokens from the tokenizer on demand.
pub fn parse_source(source: &str) -> ParseOutput {
    parse_source_with_config(source, ParseConfig::default())
}

#[tracing::instrument(skip_all, fields(source_len = source.len(), max_errors = config.max_errors))]
pub fn parse_source_with_config(source: &str, config: ParseConfig) -> ParseOutput {
    Parser::with_config(Lexer::new(source), config).parse()
}
