use super::lexer::tokenize;
use super::tokens::TokenKind;

#[test]
fn test_tokenize_let_statement() {
    let tokens = tokenize(String::from("let x = 42")).unwrap();
    let kinds: Vec<TokenKind> = tokens.iter().map(|t| t.kind).collect();
    assert_eq!(
        kinds,
        vec![
            TokenKind::LetKeyword,
            TokenKind::Identifier,
            TokenKind::Eq,
            TokenKind::NumberLiteral,
            TokenKind::Eof,
        ]
    );
    assert_eq!(tokens[1].value, "x");
    assert_eq!(tokens[3].value, "42");
}

#[test]
fn test_tokenize_operators() {
    let tokens = tokenize(String::from("<= <: < == => = != +=")).unwrap();
    let kinds: Vec<TokenKind> = tokens.iter().map(|t| t.kind).collect();
    assert_eq!(
        kinds,
        vec![
            TokenKind::LtEq,
            TokenKind::Out,
            TokenKind::Lt,
            TokenKind::Eq2,
            TokenKind::Arrow,
            TokenKind::Eq,
            TokenKind::NotEq,
            TokenKind::PlusEq,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn test_left_spacing() {
    let tokens = tokenize(String::from("f (1)")).unwrap();
    assert_eq!(tokens[0].kind, TokenKind::Identifier);
    assert_eq!(tokens[1].kind, TokenKind::OpenParen);
    assert!(tokens[1].has_left_spacing);

    let tokens = tokenize(String::from("f(1)")).unwrap();
    assert!(!tokens[1].has_left_spacing);
}

#[test]
fn test_comments_are_spacing() {
    let tokens = tokenize(String::from("1// comment\n2/* block */3")).unwrap();
    let kinds: Vec<TokenKind> = tokens.iter().map(|t| t.kind).collect();
    assert_eq!(
        kinds,
        vec![
            TokenKind::NumberLiteral,
            TokenKind::NewLine,
            TokenKind::NumberLiteral,
            TokenKind::NumberLiteral,
            TokenKind::Eof,
        ]
    );
    assert!(tokens[3].has_left_spacing);
}

#[test]
fn test_block_comment_body_ending_in_asterisk() {
    let tokens = tokenize(String::from("/* note **/\nlet x = 1")).unwrap();
    let kinds: Vec<TokenKind> = tokens.iter().map(|t| t.kind).collect();
    assert_eq!(
        kinds,
        vec![
            TokenKind::NewLine,
            TokenKind::LetKeyword,
            TokenKind::Identifier,
            TokenKind::Eq,
            TokenKind::NumberLiteral,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn test_unclosed_block_comment_runs_to_eof() {
    let tokens = tokenize(String::from("1 /* trailing")).unwrap();
    let kinds: Vec<TokenKind> = tokens.iter().map(|t| t.kind).collect();
    assert_eq!(kinds, vec![TokenKind::NumberLiteral, TokenKind::Eof]);
}

#[test]
fn test_string_escapes() {
    let tokens = tokenize(String::from("\"a\\nb\\\"c\"")).unwrap();
    assert_eq!(tokens[0].kind, TokenKind::StringLiteral);
    assert_eq!(tokens[0].value, "a\nb\"c");
}

#[test]
fn test_unterminated_string_is_fatal() {
    assert!(tokenize(String::from("\"abc")).is_err());
}

#[test]
fn test_template_children() {
    let tokens = tokenize(String::from("`ab{x}cd`")).unwrap();
    assert_eq!(tokens[0].kind, TokenKind::Template);

    let children = tokens[0].children.as_ref().unwrap();
    assert_eq!(children.len(), 3);
    assert_eq!(children[0].kind, TokenKind::TemplateStringElement);
    assert_eq!(children[0].value, "ab");
    assert_eq!(children[1].kind, TokenKind::TemplateExprElement);
    assert_eq!(children[2].kind, TokenKind::TemplateStringElement);
    assert_eq!(children[2].value, "cd");

    let expr_tokens = children[1].children.as_ref().unwrap();
    assert_eq!(expr_tokens[0].kind, TokenKind::Identifier);
    assert_eq!(expr_tokens[0].value, "x");
    assert_eq!(expr_tokens.last().unwrap().kind, TokenKind::Eof);
}

#[test]
fn test_template_expr_with_brace_in_string() {
    let tokens = tokenize(String::from("`v{\"{\"}w`")).unwrap();
    assert_eq!(tokens[0].kind, TokenKind::Template);

    let children = tokens[0].children.as_ref().unwrap();
    assert_eq!(children.len(), 3);
    assert_eq!(children[0].value, "v");
    assert_eq!(children[1].kind, TokenKind::TemplateExprElement);
    assert_eq!(children[2].value, "w");

    let expr_tokens = children[1].children.as_ref().unwrap();
    assert_eq!(expr_tokens[0].kind, TokenKind::StringLiteral);
    assert_eq!(expr_tokens[0].value, "{");
}

#[test]
fn test_location_tracking() {
    let tokens = tokenize(String::from("a\n  b")).unwrap();
    assert_eq!(tokens[0].loc.line, 1);
    assert_eq!(tokens[0].loc.column, 1);
    assert_eq!(tokens[2].loc.line, 2);
    assert_eq!(tokens[2].loc.column, 3);
}

#[test]
fn test_reserved_words() {
    let tokens = tokenize(String::from("if elif else match null exists")).unwrap();
    let kinds: Vec<TokenKind> = tokens.iter().map(|t| t.kind).collect();
    assert_eq!(
        kinds,
        vec![
            TokenKind::IfKeyword,
            TokenKind::ElifKeyword,
            TokenKind::ElseKeyword,
            TokenKind::MatchKeyword,
            TokenKind::NullKeyword,
            TokenKind::ExistsKeyword,
            TokenKind::Eof,
        ]
    );
}
