//! The structural type algebra: the type representation, assignability and
//! callability predicates, union normalization, and the pretty-printer used
//! by diagnostics.

use std::fmt::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Primitive {
    Str,
    Num,
    Bool,
    Null,
}

impl Primitive {
    pub fn name(&self) -> &'static str {
        match self {
            Primitive::Str => "str",
            Primitive::Num => "num",
            Primitive::Bool => "bool",
            Primitive::Null => "null",
        }
    }
}

/// A function parameter in the type domain. Optionality only arises from
/// builtin signatures; user-written functions declare required parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct FnParam {
    pub optional: bool,
    pub ty: TypeValue,
}

/// An object's item shape: a known ordered field list, or a single type
/// standing for an unknown key space. Never both at once.
#[derive(Debug, Clone, PartialEq)]
pub enum ObjItems {
    Fields(Vec<(String, TypeValue)>),
    Dynamic(Box<TypeValue>),
}

#[derive(Debug, Clone, PartialEq)]
pub enum TypeValue {
    Primitive(Primitive),
    /// Universal: assignable to and from everything, callable.
    Any,
    /// Not yet inferable, e.g. an untyped function parameter.
    Nothing,
    Fn {
        params: Vec<FnParam>,
        ret: Box<TypeValue>,
    },
    /// Members are pairwise non-redundant; build through [`union_of`].
    Union(Vec<TypeValue>),
    Obj(ObjItems),
    Arr(Box<TypeValue>),
    /// A thrown/error value carrying a payload type.
    Error(Box<TypeValue>),
}

impl TypeValue {
    pub fn str() -> TypeValue {
        TypeValue::Primitive(Primitive::Str)
    }

    pub fn num() -> TypeValue {
        TypeValue::Primitive(Primitive::Num)
    }

    pub fn bool() -> TypeValue {
        TypeValue::Primitive(Primitive::Bool)
    }

    pub fn null() -> TypeValue {
        TypeValue::Primitive(Primitive::Null)
    }

    pub fn arr(item: TypeValue) -> TypeValue {
        TypeValue::Arr(Box::new(item))
    }

    pub fn func(params: Vec<FnParam>, ret: TypeValue) -> TypeValue {
        TypeValue::Fn {
            params,
            ret: Box::new(ret),
        }
    }

    /// A required parameter, for signature building.
    pub fn param(ty: TypeValue) -> FnParam {
        FnParam {
            optional: false,
            ty,
        }
    }

    pub fn opt_param(ty: TypeValue) -> FnParam {
        FnParam { optional: true, ty }
    }
}

/// Whether `value` may be assigned where `dest` is expected.
pub fn is_assignable(dest: &TypeValue, value: &TypeValue) -> bool {
    if matches!(dest, TypeValue::Any) || matches!(value, TypeValue::Any) {
        return true;
    }

    match (dest, value) {
        // The payload type is ignored; an error is an error.
        (TypeValue::Error(_), TypeValue::Error(_)) => true,

        (
            TypeValue::Fn {
                params: dp,
                ret: dr,
            },
            TypeValue::Fn {
                params: vp,
                ret: vr,
            },
        ) => {
            if dp.len() != vp.len() {
                return false;
            }

            for (d, v) in dp.iter().zip(vp.iter()) {
                // A destination that requires the argument cannot accept a
                // function that might not receive it.
                if !d.optional && v.optional {
                    return false;
                }
                if !is_assignable(&d.ty, &v.ty) {
                    return false;
                }
            }

            is_assignable(dr, vr)
        }

        (TypeValue::Primitive(d), TypeValue::Primitive(v)) => d == v,

        (TypeValue::Obj(d), TypeValue::Obj(v)) => match (d, v) {
            (ObjItems::Fields(df), ObjItems::Fields(vf)) => {
                // Width subtyping: extra value fields are ignored.
                df.iter().all(|(name, dt)| {
                    vf.iter()
                        .find(|(n, _)| n == name)
                        .is_some_and(|(_, vt)| is_assignable(dt, vt))
                })
            }
            (ObjItems::Fields(df), ObjItems::Dynamic(vt)) => {
                is_assignable(&fold_fields(df), vt)
            }
            (ObjItems::Dynamic(dt), ObjItems::Fields(vf)) => {
                is_assignable(dt, &fold_fields(vf))
            }
            (ObjItems::Dynamic(dt), ObjItems::Dynamic(vt)) => is_assignable(dt, vt),
        },

        (TypeValue::Arr(d), TypeValue::Arr(v)) => is_assignable(d, v),

        (TypeValue::Union(_), TypeValue::Union(vs)) => {
            // Every possibility of the value must be covered.
            vs.iter().all(|v| is_assignable(dest, v))
        }
        (TypeValue::Union(ds), _) => ds.iter().any(|d| is_assignable(d, value)),

        (TypeValue::Nothing, TypeValue::Nothing) => true,

        _ => false,
    }
}

/// Folds a field map into the union of its value types, for comparison
/// against a dynamic-key object.
fn fold_fields(fields: &[(String, TypeValue)]) -> TypeValue {
    union_of(fields.iter().map(|(_, t)| t.clone()).collect())
}

pub fn is_callable(ty: &TypeValue) -> bool {
    matches!(ty, TypeValue::Any | TypeValue::Fn { .. })
}

/// Removes redundant members from a candidate list: a candidate displaces
/// already-kept members it subsumes, and is dropped when a kept member
/// already subsumes it.
pub fn exclude_duplicated(types: Vec<TypeValue>) -> Vec<TypeValue> {
    let mut res: Vec<TypeValue> = vec![];

    'candidates: for item in types {
        let mut i = 0;
        while i < res.len() {
            if is_assignable(&item, &res[i]) {
                res.remove(i);
                continue;
            } else if is_assignable(&res[i], &item) {
                continue 'candidates;
            }
            i += 1;
        }
        res.push(item);
    }

    res
}

/// A deduplicated union; collapses to the single member or to `Any` when
/// the list is empty.
pub fn union_of(types: Vec<TypeValue>) -> TypeValue {
    let mut members = exclude_duplicated(types);
    match members.len() {
        0 => TypeValue::Any,
        1 => members.remove(0),
        _ => TypeValue::Union(members),
    }
}

/// Renders a type for diagnostics.
pub fn repr_type(ty: &TypeValue) -> String {
    repr_indented(ty, 0)
}

fn repr_indented(ty: &TypeValue, depth: usize) -> String {
    match ty {
        TypeValue::Primitive(p) => String::from(p.name()),
        TypeValue::Any => String::from("any"),
        TypeValue::Nothing => String::from("nothing"),
        TypeValue::Fn { params, ret } => {
            let params = params
                .iter()
                .map(|p| {
                    let mut s = repr_indented(&p.ty, depth);
                    if p.optional {
                        s.push('?');
                    }
                    s
                })
                .collect::<Vec<_>>()
                .join(", ");
            format!("@({}) => {}", params, repr_indented(ret, depth))
        }
        TypeValue::Union(members) => members
            .iter()
            .map(|m| repr_indented(m, depth))
            .collect::<Vec<_>>()
            .join(" | "),
        TypeValue::Obj(ObjItems::Dynamic(inner)) => {
            format!("obj<{}>", repr_indented(inner, depth))
        }
        TypeValue::Obj(ObjItems::Fields(fields)) => {
            if fields.is_empty() {
                return String::from("{}");
            }

            let mut out = String::from("{\n");
            for (name, field) in fields {
                let _ = writeln!(
                    out,
                    "{}{}: {}",
                    "  ".repeat(depth + 1),
                    name,
                    repr_indented(field, depth + 1)
                );
            }
            let _ = write!(out, "{}}}", "  ".repeat(depth));
            out
        }
        TypeValue::Arr(item) => format!("arr<{}>", repr_indented(item, depth)),
        TypeValue::Error(info) => format!("error<{}>", repr_indented(info, depth)),
    }
}
