//! Top-level parsing: the statement list of a document, namespaces, and
//! metadata blocks.

use crate::{
    ast::{Expression, Meta, Namespace, Node},
    errors::errors::{FatalSyntaxError, SyntaxError, SyntaxErrorKind},
    lexer::tokens::TokenKind,
};

use super::{
    expr::parse_expr,
    stmt::{parse_def_statement, parse_statement},
    stream::TokenStream,
};

type ParseResult<T> = Result<T, FatalSyntaxError>;

/// TopLevel = *(Namespace / Meta / Statement)
pub fn parse_top_level(
    s: &mut TokenStream,
    e: &mut Vec<SyntaxError>,
) -> ParseResult<Vec<Node>> {
    let mut nodes: Vec<Node> = vec![];

    while s.kind() == TokenKind::NewLine {
        s.next();
    }

    while s.kind() != TokenKind::Eof {
        match s.kind() {
            TokenKind::Colon2 => {
                if let Some(ns) = parse_namespace(s, e)? {
                    nodes.push(Node::Ns(ns));
                }
            }
            TokenKind::Sharp3 => {
                nodes.push(Node::Meta(parse_meta(s, e)?));
            }
            _ => {
                if let Some(stmt) = parse_statement(s, e)? {
                    nodes.push(stmt);
                }
            }
        }

        // terminator
        match s.kind() {
            TokenKind::NewLine | TokenKind::SemiColon => {
                while matches!(s.kind(), TokenKind::NewLine | TokenKind::SemiColon) {
                    s.next();
                }
            }
            TokenKind::Eof => {}
            _ => {
                return Err(FatalSyntaxError::multiple_statements(s.loc()));
            }
        }
    }

    Ok(nodes)
}

/// Namespace = "::" IDENT "{" *(VarDef / FnDef / Namespace) "}"
pub fn parse_namespace(
    s: &mut TokenStream,
    e: &mut Vec<SyntaxError>,
) -> ParseResult<Option<Namespace>> {
    let loc = s.loc();

    s.next_with(TokenKind::Colon2)?;

    s.expect(TokenKind::Identifier)?;
    let name = s.value().to_string();
    s.next();

    let mut members: Vec<Node> = vec![];
    s.next_with(TokenKind::OpenBrace)?;

    while s.kind() == TokenKind::NewLine {
        s.next();
    }

    while s.kind() != TokenKind::CloseBrace && s.kind() != TokenKind::Eof {
        match s.kind() {
            TokenKind::VarKeyword | TokenKind::LetKeyword | TokenKind::At => {
                if let Some(stmt) = parse_def_statement(s, e)? {
                    members.push(Node::Statement(stmt));
                }
            }
            TokenKind::Colon2 => {
                if let Some(ns) = parse_namespace(s, e)? {
                    members.push(Node::Ns(ns));
                }
            }
            _ => {}
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
                e.push(SyntaxError::new(
                    SyntaxErrorKind::MultipleStatementsOnSingleLine,
                    s.loc(),
                ));
                return Ok(None);
            }
        }
    }

    if s.kind() == TokenKind::CloseBrace {
        s.next();
    } else {
        e.push(SyntaxError::new(
            SyntaxErrorKind::MissingBracket {
                bracket: String::from("}"),
            },
            s.loc(),
        ));
    }

    Ok(Some(Namespace { name, members, loc }))
}

/// Meta = "###" [IDENT] StaticExpr
pub fn parse_meta(s: &mut TokenStream, e: &mut Vec<SyntaxError>) -> ParseResult<Meta> {
    let loc = s.loc();

    s.next_with(TokenKind::Sharp3)?;

    let mut name = None;
    if s.kind() == TokenKind::Identifier {
        name = Some(s.value().to_string());
        s.next();
    }

    let value = parse_expr(s, e, true)?;
    if value.is_none() {
        e.push(SyntaxError::new(SyntaxErrorKind::MissingExpr, s.loc()));
    }

    Ok(Meta {
        name,
        value: value.unwrap_or(Expression::Null { loc: s.loc() }),
        loc,
    })
}
