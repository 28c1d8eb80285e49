//! Expression parsing.
//!
//! Binary and unary operators go through a Pratt loop driven by the binding
//! powers below; everything else is an atom. Operators desugar to calls of
//! the `Core:` builtins, so the checker sees them as ordinary calls.

use crate::{
    ast::{Expression, Node},
    errors::errors::{FatalSyntaxError, SyntaxError, SyntaxErrorKind},
    lexer::tokens::TokenKind,
};

use super::{
    common::{parse_block, parse_params, parse_type},
    stmt::parse_block_or_statement,
    stream::TokenStream,
};

type ParseResult<T> = Result<T, FatalSyntaxError>;

// For infix operators a larger rbp gives left association and a larger lbp
// gives right association.

fn prefix_bp(kind: TokenKind) -> Option<u8> {
    match kind {
        TokenKind::Plus | TokenKind::Minus | TokenKind::Not => Some(14),
        _ => None,
    }
}

fn infix_bp(kind: TokenKind) -> Option<(u8, u8)> {
    match kind {
        TokenKind::Dot => Some((18, 19)),
        TokenKind::Hat => Some((17, 16)),
        TokenKind::Asterisk | TokenKind::Slash | TokenKind::Percent => Some((12, 13)),
        TokenKind::Plus | TokenKind::Minus => Some((10, 11)),
        TokenKind::Lt | TokenKind::LtEq | TokenKind::Gt | TokenKind::GtEq => Some((8, 9)),
        TokenKind::Eq2 | TokenKind::NotEq => Some((6, 7)),
        TokenKind::And2 => Some((4, 5)),
        TokenKind::Or2 => Some((2, 3)),
        _ => None,
    }
}

fn postfix_bp(kind: TokenKind) -> Option<u8> {
    match kind {
        TokenKind::OpenParen | TokenKind::OpenBracket => Some(20),
        _ => None,
    }
}

/// Parses one expression. Static contexts (attribute and meta values) only
/// admit literal atoms.
pub fn parse_expr(
    s: &mut TokenStream,
    e: &mut Vec<SyntaxError>,
    is_static: bool,
) -> ParseResult<Option<Expression>> {
    if is_static {
        parse_atom(s, e, true)
    } else {
        parse_pratt(s, e, 0)
    }
}

fn parse_pratt(
    s: &mut TokenStream,
    e: &mut Vec<SyntaxError>,
    min_bp: u8,
) -> ParseResult<Option<Expression>> {
    // https://matklad.github.io/2020/04/13/simple-but-powerful-pratt-parsing.html

    let mut left = if let Some(bp) = prefix_bp(s.kind()) {
        match parse_prefix(s, e, bp)? {
            Some(expr) => expr,
            None => return Ok(None),
        }
    } else {
        match parse_atom(s, e, false)? {
            Some(expr) => expr,
            None => return Ok(None),
        }
    };

    loop {
        // line-continuation backslash
        if s.kind() == TokenKind::BackSlash {
            s.next();
            if s.kind() != TokenKind::NewLine {
                e.push(SyntaxError::new(SyntaxErrorKind::MissingLineBreak, s.loc()));
            } else {
                break;
            }
        }

        let kind = s.kind();

        if let Some(bp) = postfix_bp(kind) {
            if bp < min_bp {
                break;
            }

            // A spaced `(` or `[` starts a new expression instead.
            if !s.has_left_spacing() {
                let expr = parse_postfix(s, e, left)?;
                left = match expr {
                    Some(expr) => expr,
                    None => {
                        e.push(SyntaxError::new(SyntaxErrorKind::MissingExpr, s.loc()));
                        Expression::Null { loc: s.loc() }
                    }
                };
                continue;
            }
        }

        if let Some((lbp, rbp)) = infix_bp(kind) {
            if lbp < min_bp {
                break;
            }

            let expr = parse_infix(s, e, left, rbp)?;
            left = match expr {
                Some(expr) => expr,
                None => {
                    e.push(SyntaxError::new(SyntaxErrorKind::MissingExpr, s.loc()));
                    Expression::Null { loc: s.loc() }
                }
            };
            continue;
        }

        break;
    }

    Ok(Some(left))
}

fn parse_prefix(
    s: &mut TokenStream,
    e: &mut Vec<SyntaxError>,
    min_bp: u8,
) -> ParseResult<Option<Expression>> {
    let loc = s.loc();
    let op = s.kind();
    s.next();

    // line-continuation backslash
    if s.kind() == TokenKind::BackSlash {
        s.next();
        if s.kind() != TokenKind::NewLine {
            return Ok(None);
        }
        s.next();
    }

    let expr = match parse_pratt(s, e, min_bp)? {
        Some(expr) => expr,
        None => return Ok(None),
    };

    match op {
        TokenKind::Plus => {
            // Signs apply to number literals only.
            if let Expression::Num { value, .. } = expr {
                Ok(Some(Expression::Num { value, loc }))
            } else {
                e.push(SyntaxError::new(SyntaxErrorKind::NonNumericSign, loc));
                Ok(None)
            }
        }
        TokenKind::Minus => {
            if let Expression::Num { value, .. } = expr {
                Ok(Some(Expression::Num { value: -value, loc }))
            } else {
                e.push(SyntaxError::new(SyntaxErrorKind::NonNumericSign, loc));
                Ok(None)
            }
        }
        TokenKind::Not => Ok(Some(Expression::Not {
            expr: Box::new(expr),
            loc,
        })),
        _ => {
            e.push(SyntaxError::new(SyntaxErrorKind::NonNumericSign, loc));
            Ok(None)
        }
    }
}

fn parse_infix(
    s: &mut TokenStream,
    e: &mut Vec<SyntaxError>,
    left: Expression,
    min_bp: u8,
) -> ParseResult<Option<Expression>> {
    let loc = s.loc();
    let op = s.kind();
    s.next();

    // line-continuation backslash
    if s.kind() == TokenKind::BackSlash {
        s.next();
        if s.kind() != TokenKind::NewLine {
            return Ok(None);
        }
        s.next();
    }

    if op == TokenKind::Dot {
        let name = if s.kind() != TokenKind::Identifier {
            e.push(SyntaxError::new(SyntaxErrorKind::MissingIdentifier, loc));
            String::new()
        } else {
            let name = s.value().to_string();
            s.next();
            name
        };

        return Ok(Some(Expression::Prop {
            target: Box::new(left),
            name,
            loc,
        }));
    }

    let right = match parse_pratt(s, e, min_bp)? {
        Some(expr) => expr,
        None => {
            e.push(SyntaxError::new(SyntaxErrorKind::UnExpectedToken, s.loc()));
            Expression::Null { loc: s.loc() }
        }
    };

    let node = match op {
        TokenKind::Hat => Expression::builtin_call("Core:pow", vec![left, right], loc),
        TokenKind::Asterisk => Expression::builtin_call("Core:mul", vec![left, right], loc),
        TokenKind::Slash => Expression::builtin_call("Core:div", vec![left, right], loc),
        TokenKind::Percent => Expression::builtin_call("Core:mod", vec![left, right], loc),
        TokenKind::Plus => Expression::builtin_call("Core:add", vec![left, right], loc),
        TokenKind::Minus => Expression::builtin_call("Core:sub", vec![left, right], loc),
        TokenKind::Lt => Expression::builtin_call("Core:lt", vec![left, right], loc),
        TokenKind::LtEq => Expression::builtin_call("Core:lteq", vec![left, right], loc),
        TokenKind::Gt => Expression::builtin_call("Core:gt", vec![left, right], loc),
        TokenKind::GtEq => Expression::builtin_call("Core:gteq", vec![left, right], loc),
        TokenKind::Eq2 => Expression::builtin_call("Core:eq", vec![left, right], loc),
        TokenKind::NotEq => Expression::builtin_call("Core:neq", vec![left, right], loc),
        TokenKind::And2 => Expression::And {
            left: Box::new(left),
            right: Box::new(right),
            loc,
        },
        TokenKind::Or2 => Expression::Or {
            left: Box::new(left),
            right: Box::new(right),
            loc,
        },
        _ => {
            e.push(SyntaxError::new(SyntaxErrorKind::UnExpectedToken, loc));
            return Ok(None);
        }
    };

    Ok(Some(node))
}

fn parse_postfix(
    s: &mut TokenStream,
    e: &mut Vec<SyntaxError>,
    target: Expression,
) -> ParseResult<Option<Expression>> {
    let loc = s.loc();

    match s.kind() {
        TokenKind::OpenParen => parse_call(s, e, target),
        TokenKind::OpenBracket => {
            let bracket_loc = s.loc();
            s.next();
            let index = parse_expr(s, e, false)?;
            if index.is_none() {
                e.push(SyntaxError::new(SyntaxErrorKind::MissingExpr, bracket_loc));
            }

            if s.kind() != TokenKind::CloseBracket {
                e.push(SyntaxError::new(
                    SyntaxErrorKind::MissingBracket {
                        bracket: String::from("]"),
                    },
                    loc,
                ));
            } else {
                s.next();
            }

            Ok(Some(Expression::Index {
                target: Box::new(target),
                index: Box::new(index.unwrap_or(Expression::Null { loc: bracket_loc })),
                loc,
            }))
        }
        _ => {
            e.push(SyntaxError::new(SyntaxErrorKind::UnExpectedToken, loc));
            Ok(None)
        }
    }
}

fn parse_atom(
    s: &mut TokenStream,
    e: &mut Vec<SyntaxError>,
    is_static: bool,
) -> ParseResult<Option<Expression>> {
    let loc = s.loc();

    match s.kind() {
        TokenKind::IfKeyword if !is_static => parse_if(s, e),
        TokenKind::At if !is_static => parse_fn_expr(s, e),
        TokenKind::MatchKeyword if !is_static => parse_match(s, e),
        TokenKind::EvalKeyword if !is_static => parse_eval(s, e),
        TokenKind::ExistsKeyword if !is_static => parse_exists(s, e),
        TokenKind::Template if !is_static => {
            let children = s.token().children.clone().unwrap_or_default();
            let mut values: Vec<Expression> = vec![];

            for element in &children {
                match element.kind {
                    TokenKind::TemplateStringElement => {
                        values.push(Expression::Str {
                            value: element.value.clone(),
                            loc: element.loc,
                        });
                    }
                    TokenKind::TemplateExprElement => {
                        // The scanner pre-read the embedded expression as its
                        // own token sequence.
                        let sub = element.children.clone().unwrap_or_default();
                        let mut expr_stream = TokenStream::new(sub);
                        let expr = parse_expr(&mut expr_stream, e, false)?;
                        match expr {
                            Some(expr) if expr_stream.kind() == TokenKind::Eof => {
                                values.push(expr);
                            }
                            _ => {
                                e.push(SyntaxError::new(SyntaxErrorKind::UnExpectedToken, loc));
                            }
                        }
                    }
                    _ => {
                        e.push(SyntaxError::new(SyntaxErrorKind::UnExpectedToken, loc));
                    }
                }
            }

            s.next();
            Ok(Some(Expression::Tmpl { tmpl: values, loc }))
        }
        TokenKind::StringLiteral => {
            let value = s.value().to_string();
            s.next();
            Ok(Some(Expression::Str { value, loc }))
        }
        TokenKind::NumberLiteral => {
            let value = s.value().parse::<f64>().unwrap_or(0.0);
            s.next();
            Ok(Some(Expression::Num { value, loc }))
        }
        TokenKind::TrueKeyword | TokenKind::FalseKeyword => {
            let value = s.kind() == TokenKind::TrueKeyword;
            s.next();
            Ok(Some(Expression::Bool { value, loc }))
        }
        TokenKind::NullKeyword => {
            s.next();
            Ok(Some(Expression::Null { loc }))
        }
        TokenKind::OpenBrace => parse_object(s, e, is_static),
        TokenKind::OpenBracket => parse_array(s, e, is_static),
        TokenKind::Identifier if !is_static => {
            let reference = parse_reference(s, e)?;
            Ok(Some(
                reference.unwrap_or(Expression::Null { loc: s.loc() }),
            ))
        }
        TokenKind::OpenParen => {
            s.next();

            let expr = parse_expr(s, e, is_static)?;

            if s.kind() != TokenKind::CloseParen {
                e.push(SyntaxError::new(
                    SyntaxErrorKind::MissingBracket {
                        bracket: String::from(")"),
                    },
                    s.loc(),
                ));
            }
            s.next();

            Ok(expr)
        }
        _ => Ok(None),
    }
}

/// Call = "(" [Expr *(SEP Expr) [SEP]] ")"
fn parse_call(
    s: &mut TokenStream,
    e: &mut Vec<SyntaxError>,
    target: Expression,
) -> ParseResult<Option<Expression>> {
    let loc = s.loc();
    let mut items: Vec<Expression> = vec![];

    if s.kind() != TokenKind::OpenParen {
        return Ok(None);
    }

    s.next();

    if s.kind() == TokenKind::NewLine {
        s.next();
    }

    while s.kind() != TokenKind::CloseParen && s.kind() != TokenKind::Eof {
        let item = parse_expr(s, e, false)?;
        items.push(item.unwrap_or(Expression::Null { loc: s.loc() }));

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
                e.push(SyntaxError::new(SyntaxErrorKind::SeparatorExpected, s.loc()));
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

    Ok(Some(Expression::Call {
        target: Box::new(target),
        args: items,
        loc,
    }))
}

/// If = "if" Expr BlockOrStatement *("elif" Expr BlockOrStatement)
///      ["else" BlockOrStatement]
fn parse_if(s: &mut TokenStream, e: &mut Vec<SyntaxError>) -> ParseResult<Option<Expression>> {
    let loc = s.loc();

    if s.kind() != TokenKind::IfKeyword {
        return Ok(None);
    }

    s.next();

    let cond = parse_expr(s, e, false)?;
    let then = parse_block_or_statement(s, e)?;
    if cond.is_none() {
        e.push(SyntaxError::new(SyntaxErrorKind::MissingCondition, loc));
    }
    if then.is_none() {
        e.push(SyntaxError::new(SyntaxErrorKind::MissingThenClause, loc));
    }

    // An elif or else on the next line belongs to this if.
    if s.kind() == TokenKind::NewLine
        && matches!(
            s.lookahead(1).kind,
            TokenKind::ElifKeyword | TokenKind::ElseKeyword
        )
    {
        s.next();
    }

    let mut elseif: Vec<(Expression, Node)> = vec![];
    while s.kind() == TokenKind::ElifKeyword {
        s.next();
        let elif_cond =
            parse_expr(s, e, false)?.unwrap_or(Expression::Null { loc: s.loc() });
        let elif_then = parse_block_or_statement(s, e)?;

        if s.kind() == TokenKind::NewLine
            && matches!(
                s.lookahead(1).kind,
                TokenKind::ElifKeyword | TokenKind::ElseKeyword
            )
        {
            s.next();
        }

        let fallback = Node::Expression(Expression::Block {
            statements: vec![],
            loc: elif_cond.loc(),
        });
        elseif.push((elif_cond, elif_then.unwrap_or(fallback)));
    }

    let mut else_branch = None;
    if s.kind() == TokenKind::ElseKeyword {
        s.next();
        else_branch = parse_block_or_statement(s, e)?;
        if else_branch.is_none() {
            e.push(SyntaxError::new(SyntaxErrorKind::MissingBody, s.loc()));
        }
    }

    Ok(Some(Expression::If {
        cond: Box::new(cond.unwrap_or(Expression::Null { loc: s.loc() })),
        then: Box::new(then.unwrap_or(Node::Expression(Expression::Block {
            statements: vec![],
            loc: s.loc(),
        }))),
        elseif,
        else_branch: else_branch.map(Box::new),
        loc,
    }))
}

/// FnExpr = "@" Params [":" Type] Block
fn parse_fn_expr(s: &mut TokenStream, e: &mut Vec<SyntaxError>) -> ParseResult<Option<Expression>> {
    let loc = s.loc();

    if s.kind() != TokenKind::At {
        return Ok(None);
    }

    s.next();

    let params = parse_params(s, e)?;
    if params.is_none() {
        e.push(SyntaxError::new(SyntaxErrorKind::MissingParams, s.loc()));
    }

    let mut ret_type = None;
    if s.kind() == TokenKind::Colon {
        s.next();
        ret_type = parse_type(s, e)?;
        if ret_type.is_none() {
            e.push(SyntaxError::new(SyntaxErrorKind::MissingType, s.loc()));
        }
    }

    let body = parse_block(s, e)?;
    if body.is_none() {
        e.push(SyntaxError::new(SyntaxErrorKind::MissingBody, s.loc()));
    }

    Ok(Some(Expression::Fn {
        params: params.unwrap_or_default(),
        ret_type,
        children: body.unwrap_or_default(),
        loc,
    }))
}

/// Match = "match" Expr "{" [MatchCases]
///         ["default" "=>" BlockOrStatement [SEP]] "}"
fn parse_match(s: &mut TokenStream, e: &mut Vec<SyntaxError>) -> ParseResult<Option<Expression>> {
    let loc = s.loc();

    if s.kind() != TokenKind::MatchKeyword {
        return Ok(None);
    }

    s.next();

    let about = parse_expr(s, e, false)?;
    if about.is_none() {
        e.push(SyntaxError::new(SyntaxErrorKind::MissingExpr, loc));
    }

    if s.kind() != TokenKind::OpenBrace {
        e.push(SyntaxError::new(
            SyntaxErrorKind::MissingBracket {
                bracket: String::from("{"),
            },
            loc,
        ));
    } else {
        s.next();
    }

    if s.kind() == TokenKind::NewLine {
        s.next();
    }

    let mut qs: Vec<(Expression, Node)> = vec![];
    while s.kind() != TokenKind::DefaultKeyword
        && s.kind() != TokenKind::CloseBrace
        && s.kind() != TokenKind::Eof
    {
        if s.kind() != TokenKind::CaseKeyword {
            e.push(SyntaxError::new(
                SyntaxErrorKind::MissingKeyword {
                    keyword: String::from("case"),
                },
                s.loc(),
            ));
        } else {
            s.next();
        }

        let q = parse_expr(s, e, false)?.unwrap_or(Expression::Null { loc: s.loc() });

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

        let a = parse_block_or_statement(s, e)?.unwrap_or_else(|| {
            Node::Expression(Expression::Block {
                statements: vec![],
                loc: q.loc(),
            })
        });
        qs.push((q, a));

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
            TokenKind::DefaultKeyword | TokenKind::CloseBrace | TokenKind::Eof => {}
            _ => {
                e.push(SyntaxError::new(SyntaxErrorKind::SeparatorExpected, s.loc()));
            }
        }
    }

    let mut default = None;
    if s.kind() == TokenKind::DefaultKeyword {
        s.next();

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

        default = parse_block_or_statement(s, e)?;

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
            TokenKind::CloseBrace | TokenKind::Eof => {}
            _ => {
                e.push(SyntaxError::new(SyntaxErrorKind::SeparatorExpected, s.loc()));
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

    Ok(Some(Expression::Match {
        about: Box::new(about.unwrap_or(Expression::Null { loc })),
        qs,
        default: default.map(Box::new),
        loc,
    }))
}

/// Eval = "eval" Block
fn parse_eval(s: &mut TokenStream, e: &mut Vec<SyntaxError>) -> ParseResult<Option<Expression>> {
    let loc = s.loc();

    if s.kind() != TokenKind::EvalKeyword {
        return Ok(None);
    }

    s.next();

    let statements = parse_block(s, e)?;
    if statements.is_none() {
        e.push(SyntaxError::new(SyntaxErrorKind::MissingBody, loc));
    }

    Ok(Some(Expression::Block {
        statements: statements.unwrap_or_default(),
        loc,
    }))
}

/// Exists = "exists" Reference
fn parse_exists(s: &mut TokenStream, e: &mut Vec<SyntaxError>) -> ParseResult<Option<Expression>> {
    let loc = s.loc();

    if s.kind() != TokenKind::ExistsKeyword {
        return Ok(None);
    }

    s.next();

    let identifier = parse_reference(s, e)?;
    if identifier.is_none() {
        e.push(SyntaxError::new(SyntaxErrorKind::MissingIdentifier, loc));
    }

    Ok(Some(Expression::Exists {
        identifier: Box::new(identifier.unwrap_or(Expression::Identifier {
            name: String::new(),
            loc,
        })),
        loc,
    }))
}

/// Reference = IDENT *(":" IDENT)
pub fn parse_reference(
    s: &mut TokenStream,
    e: &mut Vec<SyntaxError>,
) -> ParseResult<Option<Expression>> {
    let loc = s.loc();

    let mut segs: Vec<String> = vec![];
    loop {
        if !segs.is_empty() {
            if s.kind() == TokenKind::Colon {
                if s.has_left_spacing() {
                    e.push(SyntaxError::new(
                        SyntaxErrorKind::CanNotUseSpacesInReference,
                        s.loc(),
                    ));
                }
                s.next();
                if s.has_left_spacing() {
                    e.push(SyntaxError::new(
                        SyntaxErrorKind::CanNotUseSpacesInReference,
                        s.loc(),
                    ));
                }
            } else {
                break;
            }
        }

        if s.kind() != TokenKind::Identifier {
            return Ok(None);
        }

        segs.push(s.value().to_string());
        s.next();
    }

    Ok(Some(Expression::Identifier {
        name: segs.join(":"),
        loc,
    }))
}

/// Object = "{" [IDENT ":" Expr *(SEP IDENT ":" Expr) [SEP]] "}"
fn parse_object(
    s: &mut TokenStream,
    e: &mut Vec<SyntaxError>,
    is_static: bool,
) -> ParseResult<Option<Expression>> {
    let loc = s.loc();

    if s.kind() != TokenKind::OpenBrace {
        return Ok(None);
    }

    s.next();

    if s.kind() == TokenKind::NewLine {
        s.next();
    }

    let mut fields: Vec<(String, Expression)> = vec![];
    while s.kind() != TokenKind::CloseBrace && s.kind() != TokenKind::Eof {
        let key = if s.kind() != TokenKind::Identifier {
            e.push(SyntaxError::new(SyntaxErrorKind::MissingIdentifier, s.loc()));
            String::new()
        } else {
            let key = s.value().to_string();
            s.next();
            key
        };

        if s.kind() != TokenKind::Colon {
            e.push(SyntaxError::new(SyntaxErrorKind::SeparatorExpected, s.loc()));
        } else {
            s.next();
        }

        let value = parse_expr(s, e, is_static)?;
        match value {
            Some(value) => fields.push((key, value)),
            None => {
                e.push(SyntaxError::new(SyntaxErrorKind::MissingExpr, s.loc()));
            }
        }

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
            TokenKind::CloseBrace | TokenKind::Eof => {}
            _ => {
                e.push(SyntaxError::new(SyntaxErrorKind::SeparatorExpected, s.loc()));
                s.next();
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

    Ok(Some(Expression::Obj { value: fields, loc }))
}

/// Array = "[" [Expr *(SEP Expr) [SEP]] "]"
fn parse_array(
    s: &mut TokenStream,
    e: &mut Vec<SyntaxError>,
    is_static: bool,
) -> ParseResult<Option<Expression>> {
    let loc = s.loc();

    if s.kind() != TokenKind::OpenBracket {
        return Ok(None);
    }

    s.next();

    if s.kind() == TokenKind::NewLine {
        s.next();
    }

    let mut value: Vec<Expression> = vec![];
    while s.kind() != TokenKind::CloseBracket && s.kind() != TokenKind::Eof {
        let expr = parse_expr(s, e, is_static)?;
        if expr.is_none() {
            e.push(SyntaxError::new(SyntaxErrorKind::MissingExpr, s.loc()));
        }

        value.push(expr.unwrap_or(Expression::Null { loc: s.loc() }));

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
            TokenKind::CloseBracket | TokenKind::Eof => {}
            _ => {
                e.push(SyntaxError::new(SyntaxErrorKind::SeparatorExpected, s.loc()));
                s.next();
            }
        }
    }

    if s.kind() != TokenKind::CloseBracket {
        e.push(SyntaxError::new(
            SyntaxErrorKind::MissingBracket {
                bracket: String::from("]"),
            },
            s.loc(),
        ));
    } else {
        s.next();
    }

    Ok(Some(Expression::Arr { value, loc }))
}
