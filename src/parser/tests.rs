use crate::{
    ast::{Expression, Node, Statement},
    errors::errors::{SyntaxError, SyntaxErrorKind},
    lexer::lexer::tokenize,
};

use super::parse;

fn parse_ok(source: &str) -> (Vec<Node>, Vec<SyntaxError>) {
    let tokens = tokenize(String::from(source)).unwrap();
    parse(tokens).unwrap()
}

fn single_expr(source: &str) -> Expression {
    let (nodes, errors) = parse_ok(source);
    assert!(errors.is_empty(), "unexpected errors: {:?}", errors);
    assert_eq!(nodes.len(), 1);
    match nodes.into_iter().next().unwrap() {
        Node::Expression(expr) => expr,
        other => panic!("expected expression, got {:?}", other),
    }
}

fn call_name(expr: &Expression) -> &str {
    match expr {
        Expression::Call { target, .. } => match target.as_ref() {
            Expression::Identifier { name, .. } => name,
            other => panic!("expected identifier target, got {:?}", other),
        },
        other => panic!("expected call, got {:?}", other),
    }
}

#[test]
fn let_definition() {
    let (nodes, errors) = parse_ok("let x = 1");
    assert!(errors.is_empty());
    match &nodes[0] {
        Node::Statement(Statement::Def {
            name,
            is_mut,
            expr,
            var_type,
            ..
        }) => {
            assert_eq!(name, "x");
            assert!(!is_mut);
            assert!(var_type.is_none());
            assert!(matches!(expr, Expression::Num { value, .. } if *value == 1.0));
        }
        other => panic!("expected def, got {:?}", other),
    }
}

#[test]
fn var_definition_is_mutable() {
    let (nodes, _) = parse_ok("var x = 1");
    assert!(matches!(
        &nodes[0],
        Node::Statement(Statement::Def { is_mut: true, .. })
    ));
}

#[test]
fn binary_operators_desugar_to_builtin_calls() {
    assert_eq!(call_name(&single_expr("1 + 2")), "Core:add");
    assert_eq!(call_name(&single_expr("1 == 2")), "Core:eq");
    assert_eq!(call_name(&single_expr("1 ^ 2")), "Core:pow");
    assert_eq!(call_name(&single_expr("1 < 2")), "Core:lt");
}

#[test]
fn precedence_multiplication_binds_tighter() {
    // 1 + 2 * 3 parses as add(1, mul(2, 3))
    let expr = single_expr("1 + 2 * 3");
    assert_eq!(call_name(&expr), "Core:add");
    match &expr {
        Expression::Call { args, .. } => {
            assert!(matches!(args[0], Expression::Num { value, .. } if value == 1.0));
            assert_eq!(call_name(&args[1]), "Core:mul");
        }
        _ => unreachable!(),
    }
}

#[test]
fn power_is_right_associative() {
    // 2 ^ 3 ^ 4 parses as pow(2, pow(3, 4))
    let expr = single_expr("2 ^ 3 ^ 4");
    assert_eq!(call_name(&expr), "Core:pow");
    match &expr {
        Expression::Call { args, .. } => {
            assert_eq!(call_name(&args[1]), "Core:pow");
        }
        _ => unreachable!(),
    }
}

#[test]
fn logical_operators_stay_dedicated_nodes() {
    assert!(matches!(single_expr("true && false"), Expression::And { .. }));
    assert!(matches!(single_expr("true || false"), Expression::Or { .. }));
    assert!(matches!(single_expr("!true"), Expression::Not { .. }));
}

#[test]
fn spaced_paren_is_not_a_call() {
    // Without spacing: a call. With spacing: two nodes would collide on one
    // line, so the second becomes a parse failure instead of an argument.
    let expr = single_expr("f(1)");
    assert!(matches!(expr, Expression::Call { .. }));

    let tokens = tokenize(String::from("f (1)")).unwrap();
    let result = parse(tokens);
    assert!(result.is_err());
}

#[test]
fn out_statement_desugars_to_print() {
    let (nodes, errors) = parse_ok("<: 42");
    assert!(errors.is_empty());
    match &nodes[0] {
        Node::Expression(expr) => assert_eq!(call_name(expr), "print"),
        other => panic!("expected expression, got {:?}", other),
    }
}

#[test]
fn property_and_index_chains() {
    let expr = single_expr("a.b[0]");
    match expr {
        Expression::Index { target, .. } => {
            assert!(matches!(target.as_ref(), Expression::Prop { .. }));
        }
        other => panic!("expected index, got {:?}", other),
    }
}

#[test]
fn if_with_branches() {
    let expr = single_expr("if true { 1 } elif false { 2 } else { 3 }");
    match expr {
        Expression::If {
            elseif,
            else_branch,
            ..
        } => {
            assert_eq!(elseif.len(), 1);
            assert!(else_branch.is_some());
        }
        other => panic!("expected if, got {:?}", other),
    }
}

#[test]
fn match_expression() {
    let expr = single_expr("match x { case 1 => \"a\" default => \"b\" }");
    match expr {
        Expression::Match { qs, default, .. } => {
            assert_eq!(qs.len(), 1);
            assert!(default.is_some());
        }
        other => panic!("expected match, got {:?}", other),
    }
}

#[test]
fn function_definition_sugar() {
    let (nodes, errors) = parse_ok("@add(a, b) {\n\treturn a\n}");
    assert!(errors.is_empty());
    match &nodes[0] {
        Node::Statement(Statement::Def { name, expr, .. }) => {
            assert_eq!(name, "add");
            match expr {
                Expression::Fn { params, .. } => assert_eq!(params.len(), 2),
                other => panic!("expected fn, got {:?}", other),
            }
        }
        other => panic!("expected def, got {:?}", other),
    }
}

#[test]
fn namespace_with_members() {
    let (nodes, errors) = parse_ok(":: Foo {\n\tlet bar = 1\n}");
    assert!(errors.is_empty());
    match &nodes[0] {
        Node::Ns(ns) => {
            assert_eq!(ns.name, "Foo");
            assert_eq!(ns.members.len(), 1);
        }
        other => panic!("expected namespace, got {:?}", other),
    }
}

#[test]
fn namespaced_reference_joins_with_colon() {
    let expr = single_expr("Core:add(1, 2)");
    assert_eq!(call_name(&expr), "Core:add");
}

#[test]
fn template_with_interpolation() {
    let expr = single_expr("`a{x}b`");
    match expr {
        Expression::Tmpl { tmpl, .. } => {
            assert_eq!(tmpl.len(), 3);
            assert!(matches!(tmpl[1], Expression::Identifier { .. }));
        }
        other => panic!("expected template, got {:?}", other),
    }
}

#[test]
fn missing_expr_recovers_with_placeholder() {
    let tokens = tokenize(String::from("let x =")).unwrap();
    let (nodes, errors) = parse(tokens).unwrap();
    assert_eq!(nodes.len(), 1);
    assert!(errors
        .iter()
        .any(|e| matches!(e.kind(), SyntaxErrorKind::MissingExpr)));
    match &nodes[0] {
        Node::Statement(Statement::Def { expr, .. }) => {
            assert!(matches!(expr, Expression::Null { .. }));
        }
        other => panic!("expected def, got {:?}", other),
    }
}

#[test]
fn truncated_block_reports_one_missing_bracket() {
    let tokens = tokenize(String::from("@f() {\n\tlet x = 1\n")).unwrap();
    let (nodes, errors) = parse(tokens).unwrap();
    assert_eq!(nodes.len(), 1);

    let brackets: Vec<_> = errors
        .iter()
        .filter(|e| matches!(e.kind(), SyntaxErrorKind::MissingBracket { .. }))
        .collect();
    assert_eq!(brackets.len(), 1);
    match brackets[0].kind() {
        SyntaxErrorKind::MissingBracket { bracket } => assert_eq!(bracket, "}"),
        _ => unreachable!(),
    }

    // The partial body survives.
    match &nodes[0] {
        Node::Statement(Statement::Def { expr, .. }) => match expr {
            Expression::Fn { children, .. } => assert_eq!(children.len(), 1),
            other => panic!("expected fn, got {:?}", other),
        },
        other => panic!("expected def, got {:?}", other),
    }
}

#[test]
fn multiple_statements_on_one_line_is_fatal() {
    let tokens = tokenize(String::from("let x = 1 let y = 2")).unwrap();
    assert!(parse(tokens).is_err());
}

#[test]
fn line_continuation_joins_operands() {
    let expr = single_expr("1 +\\\n2");
    assert_eq!(call_name(&expr), "Core:add");
}

#[test]
fn attribute_attaches_to_definition() {
    let (nodes, errors) = parse_ok("#[foo]\nlet x = 1");
    assert!(errors.is_empty());
    match &nodes[0] {
        Node::Statement(Statement::Def { attrs, .. }) => {
            assert_eq!(attrs.len(), 1);
            assert_eq!(attrs[0].name, "foo");
            assert!(matches!(attrs[0].value, Expression::Bool { value: true, .. }));
        }
        other => panic!("expected def, got {:?}", other),
    }
}

#[test]
fn meta_block() {
    let (nodes, errors) = parse_ok("### { name: \"hoge\" }");
    assert!(errors.is_empty());
    match &nodes[0] {
        Node::Meta(meta) => {
            assert!(meta.name.is_none());
            assert!(matches!(meta.value, Expression::Obj { .. }));
        }
        other => panic!("expected meta, got {:?}", other),
    }
}

#[test]
fn each_and_for_statements() {
    let (nodes, errors) = parse_ok("each let x, xs {\n\tx\n}\nfor 3 {\n\t1\n}");
    assert!(errors.is_empty());
    assert!(matches!(&nodes[0], Node::Statement(Statement::Each { .. })));
    match &nodes[1] {
        Node::Statement(Statement::For { times, var_name, .. }) => {
            assert!(times.is_some());
            assert!(var_name.is_none());
        }
        other => panic!("expected for, got {:?}", other),
    }
}
