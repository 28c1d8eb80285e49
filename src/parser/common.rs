//! Grammar pieces shared between expressions and statements: parameter
//! lists, code blocks, and written types.

use crate::{
    ast::{expressions::FnParam, Node, TypeSource},
    errors::errors::{FatalSyntaxError, SyntaxError, SyntaxErrorKind},
    lexer::tokens::TokenKind,
};

use super::{stmt::parse_statement, stream::TokenStream};

type ParseResult<T> = Result<T, FatalSyntaxError>;

/// Params = "(" [IDENT [":" Type] *(SEP IDENT [":" Type])] ")"
pub fn parse_params(
    s: &mut TokenStream,
    e: &mut Vec<SyntaxError>,
) -> ParseResult<Option<Vec<FnParam>>> {
    if s.kind() != TokenKind::OpenParen {
        return Ok(None);
    }

    s.next();

    if s.kind() == TokenKind::NewLine {
        s.next();
    }

    let mut items: Vec<FnParam> = vec![];
    while s.kind() != TokenKind::CloseParen && s.kind() != TokenKind::Eof {
        if s.kind() != TokenKind::Identifier {
            e.push(SyntaxError::new(SyntaxErrorKind::MissingIdentifier, s.loc()));
        }

        let name = s.value().to_string();
        s.next();

        let mut param_type = None;
        if s.kind() == TokenKind::Colon {
            s.next();
            param_type = parse_type(s, e)?;
        }

        items.push(FnParam { name, param_type });

        // separator
        match s.kind() {
            TokenKind::NewLine => {
                s.next();
            }
            TokenKind::Comma => {
                s.next();
                if s.kind() == TokenKind::NewLine {
                    s.next();
                }
            }
            TokenKind::CloseParen | TokenKind::Eof => {}
            _ => {
                return Err(FatalSyntaxError::separator_expected(s.loc()));
            }
        }
    }

    if s.kind() != TokenKind::CloseParen {
        e.push(SyntaxError::new(
            SyntaxErrorKind::MissingBracket {
                bracket: String::from(")"),
            },
            s.loc(),
        ));
    } else {
        s.next();
    }

    Ok(Some(items))
}

/// Block = "{" *Statement "}"
///
/// A truncated block ends at EOF with a missing-bracket error; the
/// statements read so far are kept.
pub fn parse_block(
    s: &mut TokenStream,
    e: &mut Vec<SyntaxError>,
) -> ParseResult<Option<Vec<Node>>> {
    if s.kind() != TokenKind::OpenBrace {
        return Ok(None);
    }
    s.next();

    while s.kind() == TokenKind::NewLine {
        s.next();
    }

    let mut steps: Vec<Node> = vec![];
    while s.kind() != TokenKind::CloseBrace && s.kind() != TokenKind::Eof {
        let stmt = parse_statement(s, e)?;
        match stmt {
            Some(stmt) => steps.push(stmt),
            None => {
                e.push(SyntaxError::new(SyntaxErrorKind::UnExpectedToken, s.loc()));
                s.next();
                continue;
            }
        }

        // terminator
        match s.kind() {
            TokenKind::NewLine | TokenKind::SemiColon => {
                while matches!(s.kind(), TokenKind::NewLine | TokenKind::SemiColon) {
                    s.next();
                }
            }
            TokenKind::CloseBrace | TokenKind::Eof => {}
            _ => {
                return Err(FatalSyntaxError::multiple_statements(s.loc()));
            }
        }
    }

    if s.kind() != TokenKind::CloseBrace {
        e.push(SyntaxError::new(
            SyntaxErrorKind::MissingBracket {
                bracket: String::from("}"),
            },
            s.loc(),
        ));
    } else {
        s.next();
    }

    Ok(Some(steps))
}

pub fn parse_type(
    s: &mut TokenStream,
    e: &mut Vec<SyntaxError>,
) -> ParseResult<Option<TypeSource>> {
    if s.kind() == TokenKind::At {
        parse_fn_type(s, e)
    } else {
        parse_named_type(s, e)
    }
}

/// FnType = "@" "(" [Type *(SEP Type)] ")" "=>" Type
fn parse_fn_type(
    s: &mut TokenStream,
    e: &mut Vec<SyntaxError>,
) -> ParseResult<Option<TypeSource>> {
    let loc = s.loc();

    if s.kind() != TokenKind::At {
        return Ok(None);
    }
    s.next();

    if s.kind() != TokenKind::OpenParen {
        e.push(SyntaxError::new(
            SyntaxErrorKind::MissingBracket {
                bracket: String::from("("),
            },
            s.loc(),
        ));
    } else {
        s.next();
    }

    let mut params: Vec<TypeSource> = vec![];
    while s.kind() != TokenKind::CloseParen && s.kind() != TokenKind::Eof {
        if !params.is_empty() {
            match s.kind() {
                TokenKind::Comma => {
                    s.next();
                }
                _ => {
                    return Err(FatalSyntaxError::separator_expected(s.loc()));
                }
            }
        }

        let param = parse_type(s, e)?;
        match param {
            Some(param) => params.push(param),
            None => {
                e.push(SyntaxError::new(SyntaxErrorKind::MissingType, s.loc()));
                s.next();
            }
        }
    }

    if s.kind() != TokenKind::CloseParen {
        e.push(SyntaxError::new(
            SyntaxErrorKind::MissingBracket {
                bracket: String::from(")"),
            },
            s.loc(),
        ));
    } else {
        s.next();
    }

    if s.kind() != TokenKind::Arrow {
        e.push(SyntaxError::new(
            SyntaxErrorKind::MissingKeyword {
                keyword: String::from("=>"),
            },
            s.loc(),
        ));
    } else {
        s.next();
    }

    let result = match parse_type(s, e)? {
        Some(result) => result,
        None => {
            e.push(SyntaxError::new(SyntaxErrorKind::MissingType, s.loc()));
            TypeSource::Named {
                name: String::from("any"),
                inner: None,
                loc: s.loc(),
            }
        }
    };

    Ok(Some(TypeSource::Fn {
        params,
        result: Box::new(result),
        loc,
    }))
}

/// NamedType = IDENT ["<" Type ">"]
fn parse_named_type(
    s: &mut TokenStream,
    e: &mut Vec<SyntaxError>,
) -> ParseResult<Option<TypeSource>> {
    let loc = s.loc();

    if s.kind() != TokenKind::Identifier {
        return Ok(None);
    }

    let name = s.value().to_string();
    s.next();

    let mut inner = None;
    if s.kind() == TokenKind::Lt {
        s.next();
        inner = parse_type(s, e)?;

        if s.kind() != TokenKind::Gt {
            e.push(SyntaxError::new(
                SyntaxErrorKind::MissingBracket {
                    bracket: String::from(">"),
                },
                s.loc(),
            ));
        } else {
            s.next();
        }
    }

    Ok(Some(TypeSource::Named {
        name,
        inner: inner.map(Box::new),
        loc,
    }))
}
