//! Lexical analyzer for BEM notation.
//!
//! The public entry point is [`tokenize`], which performs error-recovering
//! lexical analysis: every character that cannot start a token becomes an
//! `E001` diagnostic and is skipped, so one run reports all of them.

use winnow::{
    Parser as _,
    combinator::alt,
    error::{ContextError, ModalResult},
    stream::{LocatingSlice, Location, Stream},
    token::{literal, take_while},
};

use crate::{
    error::{Diagnostic, DiagnosticCollector, ErrorCode, ParseError},
    span::Span,
    tokens::{PositionedToken, Token},
};

type Input<'a> = LocatingSlice<&'a str>;
type IResult<O> = ModalResult<O, ContextError>;

/// Characters allowed in block, element and modifier names.
fn is_name_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == '-'
}

fn identifier<'a>(input: &mut Input<'a>) -> IResult<Token<'a>> {
    take_while(1.., is_name_char)
        .map(Token::Identifier)
        .parse_next(input)
}

fn punctuation<'a>(input: &mut Input<'a>) -> IResult<Token<'a>> {
    alt((
        '['.value(Token::LeftBracket),
        ']'.value(Token::RightBracket),
        ','.value(Token::Comma),
    ))
    .parse_next(input)
}

/// Spaces, tabs and other horizontal whitespace.
fn whitespace<'a>(input: &mut Input<'a>) -> IResult<Token<'a>> {
    take_while(1.., |c: char| c.is_whitespace() && c != '\n' && c != '\r')
        .value(Token::Whitespace)
        .parse_next(input)
}

fn newline<'a>(input: &mut Input<'a>) -> IResult<Token<'a>> {
    alt((literal("\r\n"), literal("\n")))
        .value(Token::Newline)
        .parse_next(input)
}

fn positioned_token<'a>(input: &mut Input<'a>) -> IResult<PositionedToken<'a>> {
    let start_pos = input.current_token_start();

    let token = alt((identifier, punctuation, newline, whitespace)).parse_next(input)?;

    let end_pos = input.current_token_start();
    Ok(PositionedToken::new(token, Span::new(start_pos..end_pos)))
}

/// Lexer that accumulates tokens and diagnostics during tokenization.
struct Lexer<'a> {
    source: &'a str,
    tokens: Vec<PositionedToken<'a>>,
    diagnostics: DiagnosticCollector,
}

impl<'a> Lexer<'a> {
    fn new(source: &'a str) -> Self {
        Self {
            source,
            tokens: Vec::new(),
            diagnostics: DiagnosticCollector::new(),
        }
    }

    fn tokenize(&mut self) {
        let mut input = LocatingSlice::new(self.source);

        while !input.is_empty() {
            match positioned_token(&mut input) {
                Ok(token) => self.tokens.push(token),
                Err(_) => {
                    let error_pos = input.current_token_start();
                    self.diagnostics.emit(self.unexpected_character(error_pos));
                    input.next_token();
                }
            }
        }
    }

    fn unexpected_character(&self, pos: usize) -> Diagnostic {
        let ch = self.source[pos..].chars().next().unwrap_or('\u{FFFD}');
        let span = Span::new(pos..pos + ch.len_utf8());

        Diagnostic::error(format!("unexpected character `{}`", ch.escape_debug()))
            .with_code(ErrorCode::E001)
            .with_label(span, ErrorCode::E001.description())
            .with_help("names may only contain letters, digits, `_` and `-`")
    }

    fn finish(self) -> Result<Vec<PositionedToken<'a>>, ParseError> {
        self.diagnostics.finish().map(|()| self.tokens)
    }
}

/// Tokenize BEM source text.
///
/// # Returns
///
/// - `Ok(tokens)` - the whole input was tokenized
/// - `Err(ParseError)` - one diagnostic per unexpected character
pub fn tokenize(input: &str) -> Result<Vec<PositionedToken<'_>>, ParseError> {
    let mut lexer = Lexer::new(input);
    lexer.tokenize();
    lexer.finish()
}
