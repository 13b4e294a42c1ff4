use plc::interpreter::{
    lexer::tokenize,
    token::{Token, TokenKind},
};

fn kinds_and_literals(source: &str) -> Vec<(TokenKind, String)> {
    tokenize(source).unwrap_or_else(|e| panic!("Lexing failed: {e}"))
                    .into_iter()
                    .map(|token| (token.kind, token.literal))
                    .collect()
}

#[test]
fn declaration_tokens_carry_kind_literal_and_offset() {
    let tokens = tokenize("LET total = 42;").unwrap();

    assert_eq!(tokens,
               vec![Token::new(TokenKind::Keyword, "LET", 0),
                    Token::new(TokenKind::Identifier, "total", 4),
                    Token::new(TokenKind::Operator, "=", 10),
                    Token::new(TokenKind::Integer, "42", 12),
                    Token::new(TokenKind::Operator, ";", 14)]);
}

#[test]
fn keywords_are_exact_uppercase_words() {
    use TokenKind::{Identifier, Keyword};

    let kinds: Vec<_> = kinds_and_literals("LET LETTER let AND ANDY RETURN _x1")
        .into_iter()
        .map(|(kind, _)| kind)
        .collect();

    assert_eq!(kinds,
               [Keyword, Identifier, Identifier, Keyword, Identifier, Keyword, Identifier]);
}

#[test]
fn numbers_split_into_integer_and_decimal() {
    assert_eq!(kinds_and_literals("12 3.50 007"),
               vec![(TokenKind::Integer, "12".into()),
                    (TokenKind::Decimal, "3.50".into()),
                    (TokenKind::Integer, "007".into())]);
}

#[test]
fn dot_after_integer_is_member_access() {
    assert_eq!(kinds_and_literals("1.x"),
               vec![(TokenKind::Integer, "1".into()),
                    (TokenKind::Operator, ".".into()),
                    (TokenKind::Identifier, "x".into())]);
}

#[test]
fn character_and_string_literals_keep_quotes_and_escapes() {
    assert_eq!(kinds_and_literals(r#"'a' '\n' "say \"hi\"\t""#),
               vec![(TokenKind::Character, "'a'".into()),
                    (TokenKind::Character, r"'\n'".into()),
                    (TokenKind::String, r#""say \"hi\"\t""#.into())]);
}

#[test]
fn two_character_operators_win_over_their_prefixes() {
    let literals: Vec<_> = kinds_and_literals("<= >= == != < > = + - * / ( ) , ; . :")
        .into_iter()
        .map(|(kind, literal)| {
            assert_eq!(kind, TokenKind::Operator);
            literal
        })
        .collect();

    assert_eq!(literals,
               ["<=", ">=", "==", "!=", "<", ">", "=", "+", "-", "*", "/", "(", ")", ",", ";", ".",
                ":"]);
}

#[test]
fn comments_and_whitespace_are_skipped() {
    let tokens = tokenize("// leading comment\nRETURN 1; // trailing\n\t").unwrap();

    assert_eq!(tokens.len(), 3);
    assert_eq!(tokens[0].literal, "RETURN");
    assert_eq!(tokens[0].position, 19);
}

#[test]
fn unknown_character_is_reported_with_offset() {
    let error = tokenize("LET x = 1 @ 2;").unwrap_err();

    assert_eq!(error.position, 10);
    assert_eq!(error.text, "@");
}

#[test]
fn unterminated_string_is_rejected() {
    assert!(tokenize("\"open").is_err());
}
