//! The type checker: a two-phase tree walk in the shape of an interpreter.
//!
//! The pre-pass installs namespace members and top-level definitions so
//! forward references resolve; the full pass then infers and checks every
//! node. Check failures append a typed error and substitute a safe fallback
//! type, so the walk always completes.

use crate::{
    ast::{Expression, Node, Statement, TypeSource},
    errors::errors::{TypeError, TypeErrorKind},
};

use super::{
    scope::{Scope, Variable},
    type_value::{
        is_assignable, is_callable, repr_type, union_of, FnParam, ObjItems, TypeValue,
    },
};

pub struct TypeChecker {
    pub global_scope: Scope,
}

impl TypeChecker {
    pub fn new(global_scope: Scope) -> TypeChecker {
        TypeChecker { global_scope }
    }

    /// The pre-pass: installs namespace members and definitions so the full
    /// pass sees forward references. Diagnostics are left to the full pass,
    /// which re-checks every definition.
    pub fn pre_run_block(&self, nodes: &[Node], scope: &Scope) {
        for node in nodes {
            self.pre_run(node, scope);
        }
    }

    fn pre_run(&self, node: &Node, scope: &Scope) {
        match node {
            Node::Ns(ns) => {
                self.pre_run_block(&ns.members, &scope.create_namespace(&ns.name));
            }
            Node::Statement(Statement::Def {
                name,
                var_type,
                expr,
                is_mut,
                ..
            }) => {
                let mut scratch = vec![];
                let ty = match var_type {
                    Some(source) => self.infer_from_type_source(source, scope),
                    None => self.run_expr(expr, scope, &mut scratch),
                };
                scope.predefine_variable(
                    name,
                    Variable {
                        is_mut: *is_mut,
                        ty,
                    },
                );
            }
            _ => {}
        }
    }

    /// Folds a statement sequence to the type of its result path. A
    /// `return` takes over the result and stops the fold; `break` and
    /// `continue` stop it keeping the result so far.
    pub fn run_block(
        &self,
        nodes: &[Node],
        scope: &Scope,
        errors: &mut Vec<TypeError>,
    ) -> TypeValue {
        let mut result = TypeValue::null();

        for node in nodes {
            match node {
                Node::Statement(Statement::Return { expr, .. }) => {
                    result = self.run_expr(expr, scope, errors);
                    break;
                }
                Node::Statement(Statement::Break { .. })
                | Node::Statement(Statement::Continue { .. }) => {
                    break;
                }
                _ => {
                    if let Some(ty) = self.run(node, scope, errors) {
                        result = ty;
                    }
                }
            }
        }

        result
    }

    pub fn run(
        &self,
        node: &Node,
        scope: &Scope,
        errors: &mut Vec<TypeError>,
    ) -> Option<TypeValue> {
        match node {
            Node::Statement(stmt) => self.run_statement(stmt, scope, errors),
            Node::Expression(expr) => Some(self.run_expr(expr, scope, errors)),
            // Namespace members were installed by the pre-pass; metadata
            // carries no type.
            Node::Ns(ns) => {
                let ns_scope = scope.create_namespace(&ns.name);
                for member in &ns.members {
                    self.run(member, &ns_scope, errors);
                }
                None
            }
            Node::Meta(_) => None,
        }
    }

    fn run_statement(
        &self,
        stmt: &Statement,
        scope: &Scope,
        errors: &mut Vec<TypeError>,
    ) -> Option<TypeValue> {
        match stmt {
            Statement::Def {
                name,
                var_type,
                expr,
                is_mut,
                loc,
                ..
            } => {
                let ty = match var_type {
                    Some(source) => {
                        let declared = self.infer_from_type_source(source, scope);
                        let actual = self.run_expr(expr, scope, errors);

                        if !is_assignable(&declared, &actual) {
                            errors.push(TypeError::new(
                                TypeErrorKind::NotAssignableType {
                                    dest: repr_type(&declared),
                                    value: repr_type(&actual),
                                },
                                *loc,
                            ));
                        }

                        declared
                    }
                    None => self.run_expr(expr, scope, errors),
                };

                if let Some(err) = scope.define_variable(
                    name,
                    Variable {
                        is_mut: *is_mut,
                        ty,
                    },
                    *loc,
                ) {
                    errors.push(err);
                }

                None
            }

            Statement::Assign { dest, expr, loc }
            | Statement::AddAssign { dest, expr, loc }
            | Statement::SubAssign { dest, expr, loc } => {
                let value = self.run_expr(expr, scope, errors);

                if let Expression::Identifier { name, loc: id_loc } = dest {
                    if let Some(variable) = scope.get_variable(name) {
                        if !variable.is_mut {
                            errors.push(TypeError::new(
                                TypeErrorKind::CanNotAssignToImmutableVariable {
                                    name: name.clone(),
                                },
                                *id_loc,
                            ));
                        }

                        // First assignment to a not-yet-inferred binding
                        // reveals its type instead of being checked.
                        if variable.ty == TypeValue::Nothing {
                            scope.override_variable(
                                name,
                                Variable {
                                    is_mut: variable.is_mut,
                                    ty: value,
                                },
                            );
                            return None;
                        }
                    }
                }

                let dest_ty = self.run_expr(dest, scope, errors);
                if !is_assignable(&dest_ty, &value) {
                    errors.push(TypeError::new(
                        TypeErrorKind::NotAssignableType {
                            dest: repr_type(&dest_ty),
                            value: repr_type(&value),
                        },
                        *loc,
                    ));
                }

                None
            }

            Statement::Return { expr, .. } => {
                self.run_expr(expr, scope, errors);
                None
            }

            Statement::Each {
                var_name,
                items,
                body,
                ..
            } => {
                let items_ty = self.run_expr(items, scope, errors);
                let item_ty = match items_ty {
                    TypeValue::Arr(item) => *item,
                    _ => TypeValue::Any,
                };

                let child = scope.create_child();
                if let Some(err) = child.define_variable(
                    var_name,
                    Variable {
                        is_mut: false,
                        ty: item_ty,
                    },
                    body.loc(),
                ) {
                    errors.push(err);
                }
                self.run(body, &child, errors);
                None
            }

            Statement::For {
                var_name,
                from,
                to,
                times,
                body,
                ..
            } => {
                if let Some(from) = from {
                    self.run_expr(from, scope, errors);
                }
                if let Some(to) = to {
                    self.run_expr(to, scope, errors);
                }
                if let Some(times) = times {
                    self.run_expr(times, scope, errors);
                }

                let child = scope.create_child();
                if let Some(name) = var_name {
                    if let Some(err) = child.define_variable(
                        name,
                        Variable {
                            is_mut: false,
                            ty: TypeValue::num(),
                        },
                        body.loc(),
                    ) {
                        errors.push(err);
                    }
                }
                self.run(body, &child, errors);
                None
            }

            Statement::Loop { statements, .. } => {
                self.run_block(statements, &scope.create_child(), errors);
                None
            }

            Statement::Break { .. } | Statement::Continue { .. } => None,
        }
    }

    pub fn run_expr(
        &self,
        expr: &Expression,
        scope: &Scope,
        errors: &mut Vec<TypeError>,
    ) -> TypeValue {
        match expr {
            Expression::Null { .. } => TypeValue::null(),
            Expression::Bool { .. } => TypeValue::bool(),
            Expression::Num { .. } => TypeValue::num(),
            Expression::Str { .. } => TypeValue::str(),

            Expression::Tmpl { tmpl, .. } => {
                for part in tmpl {
                    self.run_expr(part, scope, errors);
                }
                TypeValue::str()
            }

            Expression::Obj { value, .. } => {
                let fields = value
                    .iter()
                    .map(|(name, field)| (name.clone(), self.run_expr(field, scope, errors)))
                    .collect();
                TypeValue::Obj(ObjItems::Fields(fields))
            }

            Expression::Arr { value, .. } => {
                let items = value
                    .iter()
                    .map(|item| self.run_expr(item, scope, errors))
                    .collect();
                TypeValue::arr(union_of(items))
            }

            // An undeclared identifier degrades to `any`; resolution
            // failures are not diagnosed, only misuse of the value is.
            Expression::Identifier { name, .. } => scope
                .get_variable(name)
                .map(|v| v.ty)
                .unwrap_or(TypeValue::Any),

            Expression::Fn {
                params,
                ret_type,
                children,
                loc,
            } => {
                let child = scope.create_child();
                let mut param_types: Vec<FnParam> = vec![];

                // Untyped parameters start as Nothing; the first assignment
                // inside the body narrows them.
                for param in params {
                    let ty = match &param.param_type {
                        Some(source) => self.infer_from_type_source(source, scope),
                        None => TypeValue::Nothing,
                    };

                    param_types.push(FnParam {
                        optional: false,
                        ty: ty.clone(),
                    });

                    if let Some(err) = child.define_variable(
                        &param.name,
                        Variable { is_mut: true, ty },
                        *loc,
                    ) {
                        errors.push(err);
                    }
                }

                let ret = match ret_type {
                    Some(source) => {
                        let declared = self.infer_from_type_source(source, scope);
                        let actual = self.run_block(children, &child, errors);

                        if !is_assignable(&declared, &actual) {
                            errors.push(TypeError::new(
                                TypeErrorKind::NotAssignableType {
                                    dest: repr_type(&declared),
                                    value: repr_type(&actual),
                                },
                                *loc,
                            ));
                        }

                        declared
                    }
                    None => self.run_block(children, &child, errors),
                };

                TypeValue::func(param_types, ret)
            }

            Expression::Call { target, args, loc } => {
                let target_ty = self.run_expr(target, scope, errors);

                if !is_callable(&target_ty) {
                    errors.push(TypeError::new(
                        TypeErrorKind::CanNotCall {
                            target: repr_type(&target_ty),
                        },
                        *loc,
                    ));
                }

                if let TypeValue::Fn { params, ret } = target_ty {
                    for (i, param) in params.iter().enumerate() {
                        if let Some(arg) = args.get(i) {
                            let value = self.run_expr(arg, scope, errors);
                            if !is_assignable(&param.ty, &value) {
                                errors.push(TypeError::new(
                                    TypeErrorKind::InvalidArgument {
                                        pos: i,
                                        expect: repr_type(&param.ty),
                                        but: repr_type(&value),
                                    },
                                    *loc,
                                ));
                            }
                        } else if !param.optional {
                            errors.push(TypeError::new(
                                TypeErrorKind::MissingArgument {
                                    pos: i,
                                    expect: repr_type(&param.ty),
                                },
                                *loc,
                            ));
                        }
                    }

                    // Excess arguments are accepted; walk them anyway.
                    for arg in args.iter().skip(params.len()) {
                        self.run_expr(arg, scope, errors);
                    }

                    return *ret;
                }

                for arg in args {
                    self.run_expr(arg, scope, errors);
                }

                TypeValue::Any
            }

            Expression::Prop { target, name, loc } => {
                let target_ty = self.run_expr(target, scope, errors);
                match target_ty {
                    TypeValue::Obj(ObjItems::Dynamic(inner)) => *inner,
                    TypeValue::Obj(ObjItems::Fields(fields)) => fields
                        .iter()
                        .find(|(n, _)| n == name)
                        .map(|(_, t)| t.clone())
                        .unwrap_or(TypeValue::Any),
                    // Builtin array/any members are not modelled.
                    TypeValue::Arr(_) | TypeValue::Any => TypeValue::Any,
                    other => {
                        errors.push(TypeError::new(
                            TypeErrorKind::CanNotReadProperty {
                                target: repr_type(&other),
                                name: name.clone(),
                            },
                            *loc,
                        ));
                        TypeValue::Any
                    }
                }
            }

            Expression::Index { target, index, loc } => {
                self.run_expr(index, scope, errors);
                let target_ty = self.run_expr(target, scope, errors);
                match target_ty {
                    TypeValue::Arr(item) => *item,
                    TypeValue::Obj(ObjItems::Dynamic(inner)) => *inner,
                    TypeValue::Obj(ObjItems::Fields(fields)) => {
                        union_of(fields.into_iter().map(|(_, t)| t).collect())
                    }
                    TypeValue::Any => TypeValue::Any,
                    other => {
                        errors.push(TypeError::new(
                            TypeErrorKind::CanNotReadProperty {
                                target: repr_type(&other),
                                name: String::from("[]"),
                            },
                            *loc,
                        ));
                        TypeValue::Any
                    }
                }
            }

            // Logical operands must be bool, but the result is bool either
            // way so checking continues.
            Expression::Not { expr, loc } => {
                self.expect_bool(expr, scope, errors, *loc);
                TypeValue::bool()
            }
            Expression::And { left, right, loc } | Expression::Or { left, right, loc } => {
                self.expect_bool(left, scope, errors, *loc);
                self.expect_bool(right, scope, errors, *loc);
                TypeValue::bool()
            }

            Expression::If {
                cond,
                then,
                elseif,
                else_branch,
                ..
            } => {
                self.run_expr(cond, scope, errors);

                let mut branches = vec![self.run_branch(then, scope, errors)];
                for (elif_cond, elif_then) in elseif {
                    self.run_expr(elif_cond, scope, errors);
                    branches.push(self.run_branch(elif_then, scope, errors));
                }
                if let Some(else_branch) = else_branch {
                    branches.push(self.run_branch(else_branch, scope, errors));
                }

                union_of(branches)
            }

            Expression::Match {
                about, qs, default, ..
            } => {
                self.run_expr(about, scope, errors);

                let mut branches = vec![];
                for (q, a) in qs {
                    self.run_expr(q, scope, errors);
                    branches.push(self.run_branch(a, scope, errors));
                }
                if let Some(default) = default {
                    branches.push(self.run_branch(default, scope, errors));
                }

                union_of(branches)
            }

            Expression::Block { statements, .. } => {
                self.run_block(statements, &scope.create_child(), errors)
            }

            Expression::Exists { .. } => TypeValue::bool(),
        }
    }

    fn expect_bool(
        &self,
        expr: &Expression,
        scope: &Scope,
        errors: &mut Vec<TypeError>,
        loc: crate::Loc,
    ) {
        let ty = self.run_expr(expr, scope, errors);
        if !is_assignable(&TypeValue::bool(), &ty) {
            errors.push(TypeError::new(
                TypeErrorKind::NotAssignableType {
                    dest: repr_type(&TypeValue::bool()),
                    value: repr_type(&ty),
                },
                loc,
            ));
        }
    }

    /// The result type of a branch arm, which may be a block, a lone
    /// expression, or a statement (statements contribute `null`).
    fn run_branch(&self, node: &Node, scope: &Scope, errors: &mut Vec<TypeError>) -> TypeValue {
        self.run(node, scope, errors).unwrap_or(TypeValue::null())
    }

    /// Resolves a written type annotation. Unknown names fall back to a
    /// scope-declared type alias, then to `any`.
    pub fn infer_from_type_source(&self, source: &TypeSource, scope: &Scope) -> TypeValue {
        match source {
            TypeSource::Named { name, inner, .. } => {
                let inner_ty = || {
                    inner
                        .as_ref()
                        .map(|i| self.infer_from_type_source(i, scope))
                        .unwrap_or(TypeValue::Any)
                };

                match name.as_str() {
                    "str" => TypeValue::str(),
                    "num" => TypeValue::num(),
                    "bool" => TypeValue::bool(),
                    "null" => TypeValue::null(),
                    "any" => TypeValue::Any,
                    "arr" => TypeValue::arr(inner_ty()),
                    "obj" => TypeValue::Obj(ObjItems::Dynamic(Box::new(inner_ty()))),
                    "error" => TypeValue::Error(Box::new(inner_ty())),
                    _ => scope.get_type(name).unwrap_or(TypeValue::Any),
                }
            }
            TypeSource::Fn { params, result, .. } => TypeValue::func(
                params
                    .iter()
                    .map(|p| TypeValue::param(self.infer_from_type_source(p, scope)))
                    .collect(),
                self.infer_from_type_source(result, scope),
            ),
        }
    }
}
