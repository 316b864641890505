use tpfmt::token::{keyword_token, Token};

#[test]
fn test_keyword_spellings_are_uppercase() {
    assert_eq!(Token::And.spelling(), "AND");
    assert_eq!(Token::Begin.spelling(), "BEGIN");
    assert_eq!(Token::Implementation.spelling(), "IMPLEMENTATION");
    assert_eq!(Token::Xor.spelling(), "XOR");
}

#[test]
fn test_punctuation_spellings_are_glyphs() {
    assert_eq!(Token::Assign.spelling(), ":=");
    assert_eq!(Token::DotDot.spelling(), "..");
    assert_eq!(Token::NotEquals.spelling(), "<>");
    assert_eq!(Token::Gte.spelling(), ">=");
    assert_eq!(Token::Pointer.spelling(), "^");
    assert_eq!(Token::LParenStar.spelling(), "(*");
}

#[test]
fn test_keyword_lookup_ignores_case() {
    assert_eq!(keyword_token("begin"), Token::Begin);
    assert_eq!(keyword_token("BeGiN"), Token::Begin);
    assert_eq!(keyword_token("downto"), Token::Downto);
    assert_eq!(keyword_token("Finalization"), Token::Finalization);
}

#[test]
fn test_keyword_lookup_rejects_identifiers() {
    assert_eq!(keyword_token("writeln"), Token::Illegal);
    assert_eq!(keyword_token(""), Token::Illegal);
    // literal classes are spelled in uppercase but are not keywords
    assert_eq!(keyword_token("ident"), Token::Illegal);
    assert_eq!(keyword_token("eof"), Token::Illegal);
}

#[test]
fn test_is_keyword() {
    assert!(Token::Div.is_keyword());
    assert!(Token::Nil.is_keyword());
    assert!(!Token::Plus.is_keyword());
    assert!(!Token::Ident.is_keyword());
    assert!(!Token::Eof.is_keyword());
}

#[test]
fn test_operator_classification() {
    for op in [Token::Plus, Token::Star, Token::Lte, Token::In, Token::Shl, Token::Mod] {
        assert!(op.is_binary_operator(), "{:?} should be a binary operator", op);
    }
    for op in [Token::Begin, Token::Assign, Token::Not, Token::Ident] {
        assert!(!op.is_binary_operator(), "{:?} should not be a binary operator", op);
    }
    assert!(Token::Not.is_unary_operator());
    assert!(Token::Minus.is_unary_operator());
    assert!(!Token::Div.is_unary_operator());
}

#[test]
fn test_display_uses_spelling() {
    assert_eq!(Token::Shr.to_string(), "SHR");
    assert_eq!(Token::Colon.to_string(), ":");
}
