use crate::{
    error::ParseError,
    interpreter::{
        parser::core::ParseResult,
        token::{Token, TokenKind},
    },
};

/// A cursor over a token slice.
///
/// # Example
/// ```
/// use plc::interpreter::{lexer::tokenize, parser::stream::TokenStream};
///
/// let tokens = tokenize("LET x;").unwrap();
/// let mut stream = TokenStream::new(&tokens);
///
/// assert!(stream.peek_is("LET"));
/// assert_eq!(stream.peek_nth(1).map(|t| t.literal.as_str()), Some("x"));
/// assert!(!stream.match_literal("DEF"));
/// assert!(stream.match_literal("LET"));
/// assert_eq!(stream.position(), 4);
/// ```
#[derive(Debug, Clone)]
pub struct TokenStream<'a> {
    tokens: &'a [Token],
    index:  usize,
}

impl<'a> TokenStream<'a> {
    /// Creates a stream positioned at the first token.
    #[must_use]
    pub const fn new(tokens: &'a [Token]) -> Self {
        Self { tokens, index: 0 }
    }

    /// The next token, without consuming it.
    #[must_use]
    pub fn peek(&self) -> Option<&'a Token> {
        self.tokens.get(self.index)
    }

    /// The token `n` places ahead, without consuming anything.
    #[must_use]
    pub fn peek_nth(&self, n: usize) -> Option<&'a Token> {
        self.tokens.get(self.index + n)
    }

    /// Whether the next token is the keyword or operator `literal`.
    #[must_use]
    pub fn peek_is(&self, literal: &str) -> bool {
        self.peek().is_some_and(|token| token.is(literal))
    }

    /// Whether the next token has the given kind.
    #[must_use]
    pub fn peek_kind(&self, kind: TokenKind) -> bool {
        self.peek().is_some_and(|token| token.kind == kind)
    }

    /// Whether every token has been consumed.
    #[must_use]
    pub fn is_at_end(&self) -> bool {
        self.index >= self.tokens.len()
    }

    /// Consumes and returns the next token.
    pub fn next(&mut self) -> Option<&'a Token> {
        let token = self.tokens.get(self.index)?;
        self.index += 1;
        Some(token)
    }

    /// Consumes the next token if it is the keyword or operator `literal`.
    pub fn match_literal(&mut self, literal: &str) -> bool {
        let matched = self.peek_is(literal);
        if matched {
            self.index += 1;
        }
        matched
    }

    /// Consumes the keyword or operator `literal`.
    ///
    /// # Errors
    /// A [`ParseError`] expecting `'literal'` if the next token differs.
    pub fn expect_literal(&mut self, literal: &str) -> ParseResult<&'a Token> {
        if !self.peek_is(literal) {
            return Err(self.error(&format!("'{literal}'")));
        }
        self.next().ok_or_else(|| self.error(&format!("'{literal}'")))
    }

    /// Consumes a token of the given kind.
    ///
    /// # Errors
    /// A [`ParseError`] expecting `kind` if the next token differs.
    pub fn expect_kind(&mut self, kind: TokenKind) -> ParseResult<&'a Token> {
        if !self.peek_kind(kind) {
            return Err(self.error(&kind.to_string()));
        }
        self.next().ok_or_else(|| self.error(&kind.to_string()))
    }

    /// Byte offset of the next token, or just past the last token at the end
    /// of input.
    #[must_use]
    pub fn position(&self) -> usize {
        match self.peek() {
            Some(token) => token.position,
            None => self.tokens.last().map_or(0, Token::end),
        }
    }

    /// Builds the error for finding something other than `expected` here.
    #[must_use]
    pub fn error(&self, expected: &str) -> ParseError {
        match self.peek() {
            Some(token) => ParseError::UnexpectedToken { expected: expected.to_string(),
                                                         found:    token.literal.clone(),
                                                         position: token.position, },
            None => ParseError::UnexpectedEndOfInput { expected: expected.to_string(),
                                                       position: self.position(), },
        }
    }
}
