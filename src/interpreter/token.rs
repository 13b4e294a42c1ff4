/// Words the lexer reports as [`TokenKind::Keyword`] instead of identifiers.
pub const KEYWORDS: &[&str] = &["LET", "DEF", "DO", "END", "IF", "ELSE", "FOR", "IN", "WHILE",
                                "RETURN", "NIL", "TRUE", "FALSE", "AND", "OR"];

/// The category of a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// A reserved word such as `LET` or `AND`.
    Keyword,
    /// A name such as `x` or `main`.
    Identifier,
    /// Digits without a fractional part.
    Integer,
    /// Digits with a fractional part.
    Decimal,
    /// A quoted character, quotes included.
    Character,
    /// A quoted string, quotes included.
    String,
    /// Punctuation and operators.
    Operator,
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Keyword => "keyword",
            Self::Identifier => "identifier",
            Self::Integer => "integer",
            Self::Decimal => "decimal",
            Self::Character => "character",
            Self::String => "string",
            Self::Operator => "operator",
        };
        write!(f, "{name}")
    }
}

/// A single token: its kind, the exact source text and where it starts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// The category of the token.
    pub kind:     TokenKind,
    /// The source-exact text, quotes included for literals.
    pub literal:  String,
    /// Byte offset of the first character.
    pub position: usize,
}

impl Token {
    /// Creates a token.
    ///
    /// # Example
    /// ```
    /// use plc::interpreter::token::{Token, TokenKind};
    ///
    /// let token = Token::new(TokenKind::Identifier, "x", 4);
    /// assert_eq!(token.end(), 5);
    /// ```
    #[must_use]
    pub fn new(kind: TokenKind, literal: impl Into<String>, position: usize) -> Self {
        Self { kind,
               literal: literal.into(),
               position }
    }

    /// Byte offset just past the token.
    #[must_use]
    pub const fn end(&self) -> usize {
        self.position + self.literal.len()
    }

    /// Whether this token is the keyword or operator spelled `literal`.
    ///
    /// Literal tokens never match, so a string token `"DO"` is not the
    /// keyword `DO`.
    #[must_use]
    pub fn is(&self, literal: &str) -> bool {
        matches!(self.kind, TokenKind::Keyword | TokenKind::Operator) && self.literal == literal
    }
}
