use crate::{
    errors::errors::{SyntaxError, SyntaxErrorKind, TypeError, TypeErrorKind},
    Loc,
};

use super::I18n;

#[test]
fn plain_entry() {
    let i18n = I18n::default();
    assert_eq!(i18n.t("syntax.MissingExpr", &[]), "missing expression");
}

#[test]
fn positional_args_interpolate_in_order() {
    let i18n = I18n::default();
    let msg = i18n.t(
        "typing.NotAssignableType",
        &[String::from("str"), String::from("num")],
    );
    assert_eq!(msg, "type `num` is not assignable to type `str`");
}

#[test]
fn unknown_path_renders_marker() {
    let i18n = I18n::default();
    assert_eq!(i18n.t("syntax.NoSuchId", &[]), "<en: syntax.NoSuchId>");
}

#[test]
fn unknown_language_renders_marker() {
    let i18n = I18n::new("fr");
    assert_eq!(i18n.t("syntax.MissingExpr", &[]), "<fr: syntax.MissingExpr>");
}

#[test]
fn localizes_errors_through_their_paths() {
    let i18n = I18n::default();

    let syntax = SyntaxError::new(
        SyntaxErrorKind::MissingBracket {
            bracket: String::from("}"),
        },
        Loc::start(),
    );
    assert_eq!(i18n.localize_syntax_error(&syntax), "missing bracket: `}`");

    let typing = TypeError::new(
        TypeErrorKind::CanNotCall {
            target: String::from("num"),
        },
        Loc::start(),
    );
    assert_eq!(i18n.localize_type_error(&typing), "type `num` is not callable");
}
