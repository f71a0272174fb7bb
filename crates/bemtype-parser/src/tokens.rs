//! Tokens of the BEM notation.

use std::fmt;

use winnow::stream::Location;

use crate::span::Span;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token<'src> {
    /// A block, element or modifier name.
    Identifier(&'src str),

    LeftBracket,  // [
    RightBracket, // ]
    Comma,        // ,

    /// Spaces and tabs.
    Whitespace,
    /// `\n` or `\r\n`.
    Newline,
}

/// A token with its position in the source, for winnow integration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PositionedToken<'src> {
    pub token: Token<'src>,
    pub span: Span,
}

impl<'src> PositionedToken<'src> {
    pub fn new(token: Token<'src>, span: Span) -> Self {
        Self { token, span }
    }

    /// Whether the token is a `Whitespace` or `Newline`.
    pub fn is_trivia(&self) -> bool {
        matches!(self.token, Token::Whitespace | Token::Newline)
    }
}

impl<'src> std::ops::Deref for PositionedToken<'src> {
    type Target = Token<'src>;

    fn deref(&self) -> &Self::Target {
        &self.token
    }
}

impl fmt::Display for PositionedToken<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.token, f)
    }
}

impl Location for PositionedToken<'_> {
    fn previous_token_end(&self) -> usize {
        self.span.start()
    }

    fn current_token_start(&self) -> usize {
        self.span.start()
    }
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Identifier(name) => write!(f, "{name}"),
            Token::LeftBracket => write!(f, "["),
            Token::RightBracket => write!(f, "]"),
            Token::Comma => write!(f, ","),
            Token::Whitespace => write!(f, " "),
            Token::Newline => write!(f, "\\n"),
        }
    }
}
