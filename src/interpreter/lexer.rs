use log::debug;
use logos::Logos;

use crate::{
    error::LexError,
    interpreter::token::{KEYWORDS, Token, TokenKind},
};

/// Raw lexemes recognised by the scanner.
///
/// Words are split into keywords and identifiers after scanning, since both
/// share the same shape.
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
enum Lexeme {
    /// Keywords and identifiers, such as `LET` or `total`.
    #[regex(r"[A-Za-z_][A-Za-z0-9_]*")]
    Word,
    /// Decimal literals, such as `3.14`.
    #[regex(r"[0-9]+\.[0-9]+")]
    Decimal,
    /// Integer literals, such as `42`.
    #[regex(r"[0-9]+")]
    Integer,
    /// Character literals, such as `'a'` or `'\n'`.
    #[regex(r#"'([^'\\\n\r]|\\[bnrt'"\\])'"#)]
    Character,
    /// String literals, such as `"hello\n"`.
    #[regex(r#""([^"\\\n\r]|\\[bnrt'"\\])*""#, allow_greedy = true)]
    String,
    /// Operators and punctuation.
    #[regex(r"<=|>=|==|!=|[<>=+\-*/(),;.:]")]
    Operator,
    /// `// Comments.`
    #[regex(r"//[^\n\r]*", logos::skip, allow_greedy = true)]
    Comment,
    /// Spaces, tabs, newlines and feeds.
    #[regex(r"[ \t\r\n\f]+", logos::skip)]
    Ignored,
}

/// Splits source text into tokens.
///
/// Each token keeps its source-exact literal and the byte offset it starts at.
///
/// # Errors
/// Returns a [`LexError`] at the first character that starts no token.
///
/// # Example
/// ```
/// use plc::interpreter::{lexer::tokenize, token::TokenKind};
///
/// let tokens = tokenize("LET x = 1.5;").unwrap();
/// let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
///
/// assert_eq!(kinds,
///            [TokenKind::Keyword,
///             TokenKind::Identifier,
///             TokenKind::Operator,
///             TokenKind::Decimal,
///             TokenKind::Operator]);
/// assert_eq!(tokens[3].position, 8);
/// ```
pub fn tokenize(source: &str) -> Result<Vec<Token>, LexError> {
    let mut lexer = Lexeme::lexer(source);
    let mut tokens = Vec::new();

    while let Some(lexeme) = lexer.next() {
        let literal = lexer.slice();
        let position = lexer.span().start;

        let kind = match lexeme {
            Ok(Lexeme::Word) if KEYWORDS.contains(&literal) => TokenKind::Keyword,
            Ok(Lexeme::Word) => TokenKind::Identifier,
            Ok(Lexeme::Decimal) => TokenKind::Decimal,
            Ok(Lexeme::Integer) => TokenKind::Integer,
            Ok(Lexeme::Character) => TokenKind::Character,
            Ok(Lexeme::String) => TokenKind::String,
            Ok(Lexeme::Operator) => TokenKind::Operator,
            Ok(Lexeme::Comment | Lexeme::Ignored) => continue,
            Err(()) => {
                return Err(LexError { text: literal.to_string(),
                                      position });
            },
        };

        tokens.push(Token::new(kind, literal, position));
    }

    debug!("lexed {} tokens", tokens.len());
    Ok(tokens)
}
