//! Statement parsing.

use crate::{
    ast::{Attribute, Expression, Node, Statement},
    errors::errors::{FatalSyntaxError, SyntaxError, SyntaxErrorKind},
    lexer::tokens::TokenKind,
};

use super::{
    common::{parse_block, parse_params, parse_type},
    expr::parse_expr,
    stream::TokenStream,
};

type ParseResult<T> = Result<T, FatalSyntaxError>;

/// Statement = VarDef / FnDef / Out / Return / Attr / Each / For / Loop
///           / Break / Continue / Assign / Expr
pub fn parse_statement(
    s: &mut TokenStream,
    e: &mut Vec<SyntaxError>,
) -> ParseResult<Option<Node>> {
    let loc = s.loc();

    match s.kind() {
        TokenKind::VarKeyword | TokenKind::LetKeyword => {
            return Ok(parse_var_def(s, e)?.map(Node::Statement));
        }
        TokenKind::At => {
            if s.lookahead(1).kind == TokenKind::Identifier {
                return Ok(parse_fn_def(s, e)?.map(Node::Statement));
            }
        }
        TokenKind::Out => {
            return Ok(parse_out(s, e)?.map(Node::Expression));
        }
        TokenKind::ReturnKeyword => {
            return Ok(parse_return(s, e)?.map(Node::Statement));
        }
        TokenKind::OpenSharpBracket => {
            return Ok(parse_statement_with_attr(s, e)?.map(Node::Statement));
        }
        TokenKind::EachKeyword => {
            return Ok(parse_each(s, e)?.map(Node::Statement));
        }
        TokenKind::ForKeyword => {
            return Ok(parse_for(s, e)?.map(Node::Statement));
        }
        TokenKind::LoopKeyword => {
            return Ok(parse_loop(s, e)?.map(Node::Statement));
        }
        TokenKind::BreakKeyword => {
            s.next();
            return Ok(Some(Node::Statement(Statement::Break { loc })));
        }
        TokenKind::ContinueKeyword => {
            s.next();
            return Ok(Some(Node::Statement(Statement::Continue { loc })));
        }
        _ => {}
    }

    let expr = match parse_expr(s, e, false)? {
        Some(expr) => expr,
        None => return Ok(None),
    };
    if let Some(assign) = try_parse_assign(s, e, &expr)? {
        return Ok(Some(Node::Statement(assign)));
    }
    Ok(Some(Node::Expression(expr)))
}

/// Namespace members admit definitions only.
pub fn parse_def_statement(
    s: &mut TokenStream,
    e: &mut Vec<SyntaxError>,
) -> ParseResult<Option<Statement>> {
    match s.kind() {
        TokenKind::VarKeyword | TokenKind::LetKeyword => parse_var_def(s, e),
        TokenKind::At => parse_fn_def(s, e),
        _ => {
            e.push(SyntaxError::new(SyntaxErrorKind::UnExpectedToken, s.loc()));
            Ok(None)
        }
    }
}

/// BlockOrStatement = Block / Statement
pub fn parse_block_or_statement(
    s: &mut TokenStream,
    e: &mut Vec<SyntaxError>,
) -> ParseResult<Option<Node>> {
    let loc = s.loc();

    if s.kind() == TokenKind::OpenBrace {
        let statements = parse_block(s, e)?;
        Ok(Some(Node::Expression(Expression::Block {
            statements: statements.unwrap_or_default(),
            loc,
        })))
    } else {
        parse_statement(s, e)
    }
}

/// VarDef = ("let" / "var") IDENT [":" Type] "=" Expr
fn parse_var_def(s: &mut TokenStream, e: &mut Vec<SyntaxError>) -> ParseResult<Option<Statement>> {
    let loc = s.loc();

    let is_mut = match s.kind() {
        TokenKind::LetKeyword => false,
        TokenKind::VarKeyword => true,
        _ => {
            e.push(SyntaxError::new(SyntaxErrorKind::UnExpectedToken, s.loc()));
            return Ok(None);
        }
    };
    s.next();

    let name = if s.kind() == TokenKind::Identifier {
        let name = s.value().to_string();
        s.next();
        name
    } else {
        e.push(SyntaxError::new(SyntaxErrorKind::MissingIdentifier, loc));
        String::new()
    };

    let mut var_type = None;
    if s.kind() == TokenKind::Colon {
        s.next();
        var_type = parse_type(s, e)?;
        if var_type.is_none() {
            e.push(SyntaxError::new(SyntaxErrorKind::MissingType, s.loc()));
        }
    }

    if s.kind() == TokenKind::Eq {
        s.next();
    } else {
        e.push(SyntaxError::new(
            SyntaxErrorKind::MissingKeyword {
                keyword: String::from("="),
            },
            s.loc(),
        ));
    }

    if s.kind() == TokenKind::NewLine {
        s.next();
    }

    let expr = parse_expr(s, e, false)?;
    if expr.is_none() {
        e.push(SyntaxError::new(SyntaxErrorKind::MissingExpr, s.loc()));
    }

    Ok(Some(Statement::Def {
        name,
        var_type,
        expr: expr.unwrap_or(Expression::Null { loc: s.loc() }),
        is_mut,
        attrs: vec![],
        loc,
    }))
}

/// FnDef = "@" IDENT Params [":" Type] Block
fn parse_fn_def(s: &mut TokenStream, e: &mut Vec<SyntaxError>) -> ParseResult<Option<Statement>> {
    let loc = s.loc();

    if s.kind() != TokenKind::At {
        return Ok(None);
    }

    s.next();

    let name = if s.kind() == TokenKind::Identifier {
        let name = s.value().to_string();
        s.next();
        name
    } else {
        e.push(SyntaxError::new(SyntaxErrorKind::MissingIdentifier, loc));
        String::new()
    };

    let params = parse_params(s, e)?;
    if params.is_none() {
        e.push(SyntaxError::new(SyntaxErrorKind::MissingParams, s.loc()));
    }

    let mut ret_type = None;
    if s.kind() == TokenKind::Colon {
        s.next();
        ret_type = parse_type(s, e)?;
    }

    let body = parse_block(s, e)?;
    if body.is_none() {
        e.push(SyntaxError::new(
            SyntaxErrorKind::MissingFunctionBody,
            s.loc(),
        ));
    }

    Ok(Some(Statement::Def {
        name,
        var_type: None,
        expr: Expression::Fn {
            params: params.unwrap_or_default(),
            ret_type,
            children: body.unwrap_or_default(),
            loc,
        },
        is_mut: false,
        attrs: vec![],
        loc,
    }))
}

/// Out = "<:" Expr
///
/// Sugar for a call of the `print` builtin.
fn parse_out(s: &mut TokenStream, e: &mut Vec<SyntaxError>) -> ParseResult<Option<Expression>> {
    let loc = s.loc();

    if s.kind() != TokenKind::Out {
        return Ok(None);
    }

    s.next();

    let expr = parse_expr(s, e, false)?;
    if expr.is_none() {
        e.push(SyntaxError::new(SyntaxErrorKind::MissingExpr, s.loc()));
    }

    Ok(Some(Expression::builtin_call(
        "print",
        vec![expr.unwrap_or(Expression::Null { loc: s.loc() })],
        loc,
    )))
}

/// Each = "each" ["("] "let" IDENT "," Expr [")"] BlockOrStatement
fn parse_each(s: &mut TokenStream, e: &mut Vec<SyntaxError>) -> ParseResult<Option<Statement>> {
    let loc = s.loc();
    let mut has_paren = false;

    if s.kind() != TokenKind::EachKeyword {
        return Ok(None);
    }

    s.next();

    if s.kind() == TokenKind::OpenParen {
        has_paren = true;
        s.next();
    }

    if s.kind() == TokenKind::LetKeyword {
        s.next();
    } else {
        e.push(SyntaxError::new(
            SyntaxErrorKind::MissingKeyword {
                keyword: String::from("let"),
            },
            s.loc(),
        ));
    }

    let name = if s.kind() == TokenKind::Identifier {
        let name = s.value().to_string();
        s.next();
        Some(name)
    } else {
        None
    };

    if s.kind() == TokenKind::Comma {
        s.next();
    } else {
        e.push(SyntaxError::new(SyntaxErrorKind::SeparatorExpected, s.loc()));
    }

    let items = parse_expr(s, e, false)?;

    if has_paren {
        if s.kind() == TokenKind::CloseParen {
            s.next();
        } else {
            e.push(SyntaxError::new(
                SyntaxErrorKind::MissingBracket {
                    bracket: String::from(")"),
                },
                s.loc(),
            ));

            return Ok(Some(Statement::Each {
                var_name: name.unwrap_or_default(),
                items: items.unwrap_or(Expression::Null { loc: s.loc() }),
                body: Box::new(Node::Expression(Expression::Block {
                    statements: vec![],
                    loc: s.loc(),
                })),
                loc,
            }));
        }
    }

    let body = parse_block_or_statement(s, e)?;

    Ok(Some(Statement::Each {
        var_name: name.unwrap_or_default(),
        items: items.unwrap_or(Expression::Null { loc: s.loc() }),
        body: Box::new(body.unwrap_or(Node::Expression(Expression::Block {
            statements: vec![],
            loc: s.loc(),
        }))),
        loc,
    }))
}

/// For = "for" ["("] "let" IDENT ["=" Expr] "," Expr [")"] BlockOrStatement
///     / "for" ["("] Expr [")"] BlockOrStatement
fn parse_for(s: &mut TokenStream, e: &mut Vec<SyntaxError>) -> ParseResult<Option<Statement>> {
    let loc = s.loc();
    let mut has_paren = false;

    if s.kind() != TokenKind::ForKeyword {
        return Ok(None);
    }

    s.next();

    if s.kind() == TokenKind::OpenParen {
        has_paren = true;
        s.next();
    }

    if s.kind() == TokenKind::LetKeyword {
        // range form
        s.next();

        let ident_loc = s.loc();

        let name = if s.kind() != TokenKind::Identifier {
            e.push(SyntaxError::new(SyntaxErrorKind::MissingIdentifier, s.loc()));
            String::new()
        } else {
            let name = s.value().to_string();
            s.next();
            name
        };

        let from = if s.kind() == TokenKind::Eq {
            s.next();
            match parse_expr(s, e, false)? {
                Some(expr) => expr,
                None => {
                    e.push(SyntaxError::new(SyntaxErrorKind::MissingExpr, ident_loc));
                    Expression::Num {
                        value: 0.0,
                        loc: ident_loc,
                    }
                }
            }
        } else {
            Expression::Num {
                value: 0.0,
                loc: ident_loc,
            }
        };

        if s.kind() == TokenKind::Comma {
            s.next();
        } else {
            e.push(SyntaxError::new(SyntaxErrorKind::SeparatorExpected, s.loc()));
        }

        let to = parse_expr(s, e, false)?;
        if to.is_none() {
            e.push(SyntaxError::new(SyntaxErrorKind::MissingExpr, ident_loc));
        }

        if has_paren {
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
        }

        let body = parse_block_or_statement(s, e)?;
        if body.is_none() {
            e.push(SyntaxError::new(SyntaxErrorKind::MissingBody, s.loc()));
        }

        Ok(Some(Statement::For {
            var_name: Some(name),
            from: Some(from),
            to: Some(to.unwrap_or(Expression::Num {
                value: 0.0,
                loc: s.loc(),
            })),
            times: None,
            body: Box::new(body.unwrap_or(Node::Expression(Expression::Block {
                statements: vec![],
                loc: s.loc(),
            }))),
            loc,
        }))
    } else {
        // times form
        let times = parse_expr(s, e, false)?;
        if times.is_none() {
            e.push(SyntaxError::new(SyntaxErrorKind::MissingExpr, s.loc()));
        }

        if has_paren {
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
        }

        let body = parse_block_or_statement(s, e)?;
        if body.is_none() {
            e.push(SyntaxError::new(SyntaxErrorKind::MissingBody, s.loc()));
        }

        Ok(Some(Statement::For {
            var_name: None,
            from: None,
            to: None,
            times: Some(times.unwrap_or(Expression::Num {
                value: 0.0,
                loc: s.loc(),
            })),
            body: Box::new(body.unwrap_or(Node::Expression(Expression::Block {
                statements: vec![],
                loc: s.loc(),
            }))),
            loc,
        }))
    }
}

/// Return = "return" Expr
fn parse_return(s: &mut TokenStream, e: &mut Vec<SyntaxError>) -> ParseResult<Option<Statement>> {
    let loc = s.loc();

    if s.kind() != TokenKind::ReturnKeyword {
        return Ok(None);
    }

    s.next();

    let expr = parse_expr(s, e, false)?;
    if expr.is_none() {
        e.push(SyntaxError::new(SyntaxErrorKind::MissingExpr, s.loc()));
    }

    Ok(Some(Statement::Return {
        expr: expr.unwrap_or(Expression::Null { loc: s.loc() }),
        loc,
    }))
}

/// StatementWithAttr = *Attr Statement
///
/// Attributes attach to definitions only.
fn parse_statement_with_attr(
    s: &mut TokenStream,
    e: &mut Vec<SyntaxError>,
) -> ParseResult<Option<Statement>> {
    let mut attrs: Vec<Attribute> = vec![];
    while s.kind() == TokenKind::OpenSharpBracket {
        let bracket_loc = s.loc();
        let attr = parse_attr(s, e)?;

        let attr = match attr {
            Some(attr) => attr,
            None => {
                e.push(SyntaxError::new(
                    SyntaxErrorKind::MissingAttribute,
                    bracket_loc,
                ));
                break;
            }
        };

        let attr_loc = attr.loc;
        attrs.push(attr);

        if s.kind() != TokenKind::NewLine {
            e.push(SyntaxError::new(SyntaxErrorKind::MissingLineBreak, attr_loc));
        } else {
            s.next();
        }
    }

    let statement = parse_statement(s, e)?;
    match statement {
        None => {
            e.push(SyntaxError::new(SyntaxErrorKind::MissingStatement, s.loc()));
            Ok(None)
        }
        Some(Node::Statement(Statement::Def {
            name,
            var_type,
            expr,
            is_mut,
            attrs: mut existing,
            loc,
        })) => {
            existing.append(&mut attrs);
            Ok(Some(Statement::Def {
                name,
                var_type,
                expr,
                is_mut,
                attrs: existing,
                loc,
            }))
        }
        Some(node) => {
            e.push(SyntaxError::new(SyntaxErrorKind::InvalidAttribute, node.loc()));
            Ok(None)
        }
    }
}

/// Attr = "#[" IDENT [StaticExpr] "]"
fn parse_attr(s: &mut TokenStream, e: &mut Vec<SyntaxError>) -> ParseResult<Option<Attribute>> {
    let loc = s.loc();

    if s.kind() != TokenKind::OpenSharpBracket {
        return Ok(None);
    }

    s.next();

    let name = if s.kind() == TokenKind::Identifier {
        let name = s.value().to_string();
        s.next();
        name
    } else {
        e.push(SyntaxError::new(SyntaxErrorKind::MissingIdentifier, s.loc()));
        String::new()
    };

    // A bare attribute means `true`.
    let value = if s.kind() != TokenKind::CloseBracket {
        match parse_expr(s, e, true)? {
            Some(expr) => expr,
            None => {
                e.push(SyntaxError::new(SyntaxErrorKind::MissingExpr, s.loc()));
                Expression::Bool { value: true, loc }
            }
        }
    } else {
        Expression::Bool { value: true, loc }
    };

    if s.kind() == TokenKind::CloseBracket {
        s.next();
    } else {
        e.push(SyntaxError::new(
            SyntaxErrorKind::MissingBracket {
                bracket: String::from("]"),
            },
            s.loc(),
        ));
    }

    Ok(Some(Attribute { name, value, loc }))
}

/// Loop = "loop" Block
fn parse_loop(s: &mut TokenStream, e: &mut Vec<SyntaxError>) -> ParseResult<Option<Statement>> {
    let loc = s.loc();

    if s.kind() != TokenKind::LoopKeyword {
        return Ok(None);
    }

    s.next();

    let statements = parse_block(s, e)?;
    if statements.is_none() {
        e.push(SyntaxError::new(SyntaxErrorKind::MissingBody, loc));
    }

    Ok(Some(Statement::Loop {
        statements: statements.unwrap_or_default(),
        loc,
    }))
}

/// Assign = Expr ("=" / "+=" / "-=") Expr
fn try_parse_assign(
    s: &mut TokenStream,
    e: &mut Vec<SyntaxError>,
    dest: &Expression,
) -> ParseResult<Option<Statement>> {
    let loc = s.loc();

    let op = match s.kind() {
        TokenKind::Eq | TokenKind::PlusEq | TokenKind::MinusEq => s.kind(),
        _ => return Ok(None),
    };
    s.next();

    let expr = match parse_expr(s, e, false)? {
        Some(expr) => expr,
        None => {
            e.push(SyntaxError::new(SyntaxErrorKind::MissingExpr, loc));
            Expression::missing(loc)
        }
    };

    let dest = dest.clone();
    let stmt = match op {
        TokenKind::Eq => Statement::Assign { dest, expr, loc },
        TokenKind::PlusEq => Statement::AddAssign { dest, expr, loc },
        _ => Statement::SubAssign { dest, expr, loc },
    };

    Ok(Some(stmt))
}
