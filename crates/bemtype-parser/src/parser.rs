//! Parser for BEM source tokens.
//!
//! This module transforms a token stream from the [`lexer`](super::lexer) into
//! the syntax tree defined in [`parser_types`](super::parser_types). The public
//! entry point is [`build_block`].
//!
//! Grammar, one construct per line:
//!
//! ```text
//! block     := blank* line (newline blank* element)* blank*
//! element   := line
//! line      := ws? name ws? modifiers? ws?
//! modifiers := "[" ws? name (ws? "," ws? name)* ws? "]"
//! ```

use winnow::{
    Parser as _,
    combinator::{opt, peek, repeat},
    error::{AddContext, ContextError, ErrMode},
    stream::{Stream, TokenSlice},
    token::any,
};

use crate::{
    error::{Diagnostic, ErrorCode},
    parser_types as types,
    span::{Span, Spanned},
    tokens::{PositionedToken, Token},
};

/// Context type for parser errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Context {
    /// Description of what was expected at the error position
    Label(&'static str),
    /// Remaining token count (`eof_offset()`) at error start position
    ///
    /// Used to calculate start_offset as: `tokens.len() - start_offset_value`
    StartOffset(usize),
    /// Error code to report instead of the generic `E100`
    Code(ErrorCode),
}

type Input<'src> = BemTokenSlice<'src>;
type IResult<O> = std::result::Result<O, ErrMode<ContextError<Context>>>;
/// Type alias for winnow TokenSlice with our positioned tokens
type BemTokenSlice<'src> = TokenSlice<'src, PositionedToken<'src>>;

/// Create a Cut error that spans from `start_offset` to the current position.
fn cut_error<'src>(
    input: &Input<'src>,
    start_offset: usize,
    code: ErrorCode,
    label: &'static str,
) -> ErrMode<ContextError<Context>> {
    let checkpoint = input.checkpoint();
    let error = ContextError::new()
        .add_context(input, &checkpoint, Context::StartOffset(start_offset))
        .add_context(input, &checkpoint, Context::Code(code))
        .add_context(input, &checkpoint, Context::Label(label));
    ErrMode::Cut(error)
}

/// Create a Cut error covering just the next token.
fn unexpected<'src>(input: &Input<'src>, label: &'static str) -> ErrMode<ContextError<Context>> {
    cut_error(input, input.eof_offset(), ErrorCode::E100, label)
}

/// Look at the next token without consuming it.
fn peek_token<'src>(input: &mut Input<'src>) -> Option<&'src Token<'src>> {
    let next: IResult<&'src PositionedToken<'src>> = peek(any).parse_next(input);
    next.ok().map(|token| &token.token)
}

/// Parse zero or more spaces/tabs
fn whitespace0<'src>(input: &mut Input<'src>) -> IResult<()> {
    repeat(
        0..,
        any.verify(|token: &PositionedToken<'_>| matches!(token.token, Token::Whitespace))
            .void(),
    )
    .parse_next(input)
}

fn newline<'src>(input: &mut Input<'src>) -> IResult<()> {
    any.verify(|token: &PositionedToken<'_>| matches!(token.token, Token::Newline))
        .void()
        .context(Context::Label("line break"))
        .parse_next(input)
}

/// Parse zero or more lines holding nothing but whitespace
fn blank_lines<'src>(input: &mut Input<'src>) -> IResult<()> {
    repeat(0.., (whitespace0, newline)).parse_next(input)
}

/// Parse a block, element or modifier name with span preservation
fn name<'src>(input: &mut Input<'src>) -> IResult<Spanned<&'src str>> {
    any.verify_map(|token: &PositionedToken<'src>| match &token.token {
        Token::Identifier(name) => Some(Spanned::new(*name, token.span)),
        _ => None,
    })
    .context(Context::Label("name"))
    .parse_next(input)
}

/// Consume the next token, whatever it is
fn skip_token<'src>(input: &mut Input<'src>) -> IResult<()> {
    any.void().parse_next(input)
}

fn left_bracket<'src>(input: &mut Input<'src>) -> IResult<()> {
    any.verify(|token: &PositionedToken<'_>| matches!(token.token, Token::LeftBracket))
        .void()
        .parse_next(input)
}

/// Parse a modifier list: `[mod1, mod2, ...]`
///
/// Backtracks when the next token is not `[`; once the bracket is consumed
/// every failure is final. The list must close on the same line.
fn modifier_list<'src>(input: &mut Input<'src>) -> IResult<Vec<Spanned<&'src str>>> {
    let start = input.eof_offset();
    left_bracket.parse_next(input)?;
    whitespace0.parse_next(input)?;

    let mut modifiers = Vec::new();
    loop {
        match peek_token(input) {
            Some(Token::Identifier(_)) => modifiers.push(name.parse_next(input)?),
            Some(Token::RightBracket) if modifiers.is_empty() => {
                skip_token.parse_next(input)?;
                return Err(cut_error(
                    input,
                    start,
                    ErrorCode::E103,
                    "no modifiers listed",
                ));
            }
            None | Some(Token::Newline) => {
                return Err(cut_error(input, start, ErrorCode::E101, "expected `]`"));
            }
            Some(_) => return Err(unexpected(input, "expected modifier name")),
        }

        whitespace0.parse_next(input)?;

        match peek_token(input) {
            Some(Token::Comma) => {
                skip_token.parse_next(input)?;
                whitespace0.parse_next(input)?;
            }
            Some(Token::RightBracket) => {
                skip_token.parse_next(input)?;
                return Ok(modifiers);
            }
            None | Some(Token::Newline) => {
                return Err(cut_error(input, start, ErrorCode::E101, "expected `]`"));
            }
            Some(_) => return Err(unexpected(input, "expected `,` or `]`")),
        }
    }
}

/// Parse one line: a name with an optional modifier list.
///
/// The line must be followed by a line break or the end of input.
fn line<'src>(input: &mut Input<'src>) -> IResult<types::LineSyntax<'src>> {
    let name = name.parse_next(input)?;
    whitespace0.parse_next(input)?;
    let modifiers = opt(modifier_list).parse_next(input)?.unwrap_or_default();
    whitespace0.parse_next(input)?;

    match peek_token(input) {
        None | Some(Token::Newline) => Ok(types::LineSyntax::new(name, modifiers)),
        Some(_) => Err(unexpected(input, "expected line break")),
    }
}

fn block<'src>(input: &mut Input<'src>) -> IResult<types::BlockSyntax<'src>> {
    blank_lines.parse_next(input)?;
    whitespace0.parse_next(input)?;

    let block = match peek_token(input) {
        Some(Token::Identifier(_)) => line.parse_next(input)?,
        _ => {
            return Err(cut_error(
                input,
                input.eof_offset(),
                ErrorCode::E102,
                "expected block name",
            ));
        }
    };

    let mut elements = Vec::new();
    loop {
        blank_lines.parse_next(input)?;
        whitespace0.parse_next(input)?;

        match peek_token(input) {
            None => break,
            Some(Token::Identifier(_)) => elements.push(line.parse_next(input)?),
            Some(_) => return Err(unexpected(input, "expected element name")),
        }
    }

    Ok(types::BlockSyntax { block, elements })
}

/// Compute the span to highlight for a failure between two token offsets.
///
/// Leading and trailing whitespace tokens are trimmed from the range.
fn error_span(tokens: &[PositionedToken<'_>], start_offset: usize, end_offset: usize) -> Span {
    let range = if start_offset < end_offset {
        // Parser consumed tokens - examine that range
        start_offset..end_offset
    } else if end_offset < tokens.len() {
        // At a specific token - examine just that token
        end_offset..end_offset + 1
    } else {
        // EOF - examine all tokens
        0..tokens.len()
    };

    let slice = &tokens[range];
    let first = slice.iter().find(|t| !t.is_trivia()).or(slice.first());
    let last = slice.iter().rev().find(|t| !t.is_trivia()).or(slice.last());

    match (first, last) {
        (Some(first), Some(last)) => first.span.union(last.span),
        _ => Span::default(),
    }
}

/// Convert winnow errors to a diagnostic.
///
/// Extracts the error code, label and start position from the error context
/// and calculates the error span using the token array.
fn convert_error(
    error: ErrMode<ContextError<Context>>,
    tokens: &[PositionedToken],
    current_remaining: usize,
) -> Diagnostic {
    let end_offset = tokens.len() - current_remaining;

    let context = match error {
        ErrMode::Backtrack(e) | ErrMode::Cut(e) => e,
        ErrMode::Incomplete(_) => {
            // Streaming input is not supported; treat like an unclosed list.
            let span = error_span(tokens, end_offset, end_offset);
            return Diagnostic::error("incomplete input, more tokens expected")
                .with_code(ErrorCode::E101)
                .with_label(span, "incomplete")
                .with_help("ensure input is complete");
        }
    };

    let mut code = ErrorCode::E100;
    let mut label = None;
    let mut start_offset = end_offset;
    for ctx in context.context() {
        match ctx {
            Context::Code(c) => code = *c,
            Context::Label(l) => label = label.or(Some(*l)),
            Context::StartOffset(n) => start_offset = tokens.len() - n,
        }
    }

    let span = error_span(tokens, start_offset, end_offset);

    match code {
        ErrorCode::E101 => Diagnostic::error("unclosed modifier list")
            .with_code(code)
            .with_label(span, label.unwrap_or("expected `]`"))
            .with_help("close the modifier list with `]` on the same line"),
        ErrorCode::E102 => Diagnostic::error("missing block name")
            .with_code(code)
            .with_label(span, label.unwrap_or("expected block name"))
            .with_help("start the input with the block name, e.g. `button[primary]`"),
        ErrorCode::E103 => Diagnostic::error("empty modifier list")
            .with_code(code)
            .with_label(span, label.unwrap_or("no modifiers listed"))
            .with_help("remove the brackets or list at least one modifier"),
        _ => {
            let found = match tokens.get(end_offset) {
                Some(token) if token.token == Token::Newline => "line break".to_string(),
                Some(token) => format!("`{token}`"),
                None => "end of input".to_string(),
            };
            Diagnostic::error(format!("unexpected {found}"))
                .with_code(ErrorCode::E100)
                .with_label(span, label.unwrap_or("unexpected token"))
                .with_help("each line holds one name with an optional `[mod1,mod2]` list")
        }
    }
}

/// Build the syntax tree of a block from tokens
pub fn build_block<'src>(
    tokens: &'src [PositionedToken<'src>],
) -> Result<types::BlockSyntax<'src>, Diagnostic> {
    let mut token_slice = TokenSlice::new(tokens);

    block
        .parse_next(&mut token_slice)
        .map_err(|e| convert_error(e, tokens, token_slice.eof_offset()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::tokenize;

    fn parse_tokens(input: &str) -> Vec<PositionedToken<'_>> {
        tokenize(input).expect("Failed to tokenize input")
    }

    fn names<'a>(items: &[Spanned<&'a str>]) -> Vec<&'a str> {
        items.iter().map(|s| *s.inner()).collect()
    }

    #[test]
    fn test_name() {
        let tokens = parse_tokens("search-form");
        let mut slice = TokenSlice::new(&tokens);

        let result = name.parse_next(&mut slice).unwrap();
        assert_eq!(*result.inner(), "search-form");
        assert_eq!(result.span(), Span::new(0..11));
    }

    #[test]
    fn test_modifier_list_with_spaces() {
        let tokens = parse_tokens("[ dark , large ]");
        let mut slice = TokenSlice::new(&tokens);

        let modifiers = modifier_list.parse_next(&mut slice).unwrap();
        assert_eq!(names(&modifiers), vec!["dark", "large"]);
        assert_eq!(modifiers[1].span(), Span::new(9..14));
    }

    #[test]
    fn test_modifier_list_backtracks_without_bracket() {
        let tokens = parse_tokens("foo");
        let mut slice = TokenSlice::new(&tokens);

        let result = modifier_list.parse_next(&mut slice);
        assert!(matches!(result, Err(ErrMode::Backtrack(_))));
    }

    #[test]
    fn test_line_spans() {
        let tokens = parse_tokens("icon[small,large]");
        let mut slice = TokenSlice::new(&tokens);

        let parsed = line.parse_next(&mut slice).unwrap();
        assert_eq!(parsed.span(), Span::new(0..16));
    }

    #[test]
    fn test_build_block_minimal() {
        let tokens = parse_tokens("foo");
        let block = build_block(&tokens).unwrap();

        assert_eq!(*block.block.name, "foo");
        assert!(block.block.modifiers.is_empty());
        assert!(block.elements.is_empty());
    }

    #[test]
    fn test_error_span_trims_whitespace() {
        let tokens = parse_tokens("foo[ a ");

        let span = error_span(&tokens, 1, tokens.len());
        assert_eq!(span, Span::new(3..6));
    }

    #[test]
    fn test_error_span_empty_tokens() {
        assert_eq!(error_span(&[], 0, 0), Span::default());
    }

    #[test]
    fn test_unclosed_list_span_starts_at_bracket() {
        let tokens = parse_tokens("foo[a,b");
        let diag = build_block(&tokens).unwrap_err();

        assert_eq!(diag.code(), Some(ErrorCode::E101));
        assert_eq!(diag.labels()[0].span(), Span::new(3..7));
    }

    #[test]
    fn test_unexpected_token_span_is_the_token() {
        let tokens = parse_tokens("foo bar");
        let diag = build_block(&tokens).unwrap_err();

        assert_eq!(diag.code(), Some(ErrorCode::E100));
        assert_eq!(diag.message(), "unexpected `bar`");
        assert_eq!(diag.labels()[0].span(), Span::new(4..7));
        assert_eq!(diag.labels()[0].message(), "expected line break");
    }
}
