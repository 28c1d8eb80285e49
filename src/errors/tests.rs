use super::errors::*;
use crate::Loc;

#[test]
fn test_syntax_error_message_path() {
    let err = SyntaxError::new(SyntaxErrorKind::MissingExpr, Loc::new(2, 5));
    assert_eq!(err.message_path(), "syntax.MissingExpr");
    assert!(err.message_args().is_empty());
    assert_eq!(err.loc(), Loc::new(2, 5));
}

#[test]
fn test_syntax_error_args() {
    let err = SyntaxError::new(
        SyntaxErrorKind::MissingBracket {
            bracket: String::from("}"),
        },
        Loc::start(),
    );
    assert_eq!(err.message_path(), "syntax.MissingBracket");
    assert_eq!(err.message_args(), vec![String::from("}")]);
}

#[test]
fn test_type_error_args_are_positional() {
    let err = TypeError::new(
        TypeErrorKind::InvalidArgument {
            pos: 1,
            expect: String::from("num"),
            but: String::from("str"),
        },
        Loc::new(1, 1),
    );
    assert_eq!(err.message_path(), "typing.InvalidArgument");
    assert_eq!(
        err.message_args(),
        vec![
            String::from("1"),
            String::from("num"),
            String::from("str"),
        ]
    );
}

#[test]
fn test_fatal_error_display() {
    let err = FatalSyntaxError::multiple_statements(Loc::new(3, 1));
    assert_eq!(
        err.to_string(),
        "Multiple statements cannot be placed on a single line."
    );
    assert_eq!(err.loc, Loc::new(3, 1));
}
