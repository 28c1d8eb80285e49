use crate::Loc;

use super::scope::{Scope, Variable};
use super::std::create_global_scope;
use super::type_value::{
    exclude_duplicated, is_assignable, is_callable, repr_type, union_of, ObjItems, TypeValue,
};

fn var(ty: TypeValue) -> Variable {
    Variable { is_mut: false, ty }
}

#[test]
fn primitives_assign_by_name() {
    assert!(is_assignable(&TypeValue::num(), &TypeValue::num()));
    assert!(!is_assignable(&TypeValue::str(), &TypeValue::num()));
    assert!(!is_assignable(&TypeValue::num(), &TypeValue::null()));
}

#[test]
fn any_accepts_and_is_accepted() {
    assert!(is_assignable(&TypeValue::Any, &TypeValue::str()));
    assert!(is_assignable(&TypeValue::str(), &TypeValue::Any));
}

#[test]
fn object_width_subtyping() {
    let wide = TypeValue::Obj(ObjItems::Fields(vec![
        (String::from("a"), TypeValue::num()),
        (String::from("b"), TypeValue::str()),
    ]));
    let narrow = TypeValue::Obj(ObjItems::Fields(vec![(
        String::from("a"),
        TypeValue::num(),
    )]));

    assert!(is_assignable(&narrow, &wide));
    assert!(!is_assignable(&wide, &narrow));
}

#[test]
fn dynamic_object_folds_fields() {
    let fields = TypeValue::Obj(ObjItems::Fields(vec![
        (String::from("a"), TypeValue::num()),
        (String::from("b"), TypeValue::num()),
    ]));
    let dynamic_num = TypeValue::Obj(ObjItems::Dynamic(Box::new(TypeValue::num())));
    let dynamic_str = TypeValue::Obj(ObjItems::Dynamic(Box::new(TypeValue::str())));

    assert!(is_assignable(&dynamic_num, &fields));
    assert!(!is_assignable(&dynamic_str, &fields));
}

#[test]
fn fn_optional_params_are_contravariant() {
    let required = TypeValue::func(vec![TypeValue::param(TypeValue::num())], TypeValue::num());
    let optional = TypeValue::func(
        vec![TypeValue::opt_param(TypeValue::num())],
        TypeValue::num(),
    );

    // A slot requiring the argument cannot take a function that might not
    // receive it; the reverse is fine.
    assert!(!is_assignable(&required, &optional));
    assert!(is_assignable(&optional, &required));
}

#[test]
fn fn_arity_must_match() {
    let one = TypeValue::func(vec![TypeValue::param(TypeValue::num())], TypeValue::num());
    let two = TypeValue::func(
        vec![
            TypeValue::param(TypeValue::num()),
            TypeValue::param(TypeValue::num()),
        ],
        TypeValue::num(),
    );
    assert!(!is_assignable(&one, &two));
}

#[test]
fn errors_match_regardless_of_payload() {
    let e_num = TypeValue::Error(Box::new(TypeValue::num()));
    let e_str = TypeValue::Error(Box::new(TypeValue::str()));
    assert!(is_assignable(&e_num, &e_str));
}

#[test]
fn union_value_needs_full_coverage() {
    let num_or_str = union_of(vec![TypeValue::num(), TypeValue::str()]);

    assert!(is_assignable(&num_or_str, &TypeValue::num()));
    assert!(!is_assignable(&TypeValue::num(), &num_or_str));
    assert!(is_assignable(&num_or_str, &num_or_str));
}

#[test]
fn dedup_drops_subsumed_members() {
    let deduped = exclude_duplicated(vec![
        TypeValue::num(),
        TypeValue::Any,
        TypeValue::str(),
    ]);
    // `any` subsumes both primitives.
    assert_eq!(deduped, vec![TypeValue::Any]);

    let deduped = exclude_duplicated(vec![TypeValue::num(), TypeValue::num(), TypeValue::str()]);
    assert_eq!(deduped, vec![TypeValue::num(), TypeValue::str()]);
}

#[test]
fn union_of_collapses() {
    assert_eq!(union_of(vec![]), TypeValue::Any);
    assert_eq!(union_of(vec![TypeValue::num()]), TypeValue::num());
    assert_eq!(
        union_of(vec![TypeValue::num(), TypeValue::num()]),
        TypeValue::num()
    );
}

#[test]
fn repr_shapes() {
    assert_eq!(repr_type(&TypeValue::num()), "num");
    assert_eq!(repr_type(&TypeValue::arr(TypeValue::str())), "arr<str>");
    assert_eq!(
        repr_type(&union_of(vec![TypeValue::num(), TypeValue::str()])),
        "num | str"
    );

    let sig = TypeValue::func(
        vec![
            TypeValue::param(TypeValue::num()),
            TypeValue::opt_param(TypeValue::str()),
        ],
        TypeValue::bool(),
    );
    assert_eq!(repr_type(&sig), "@(num, str?) => bool");
}

#[test]
fn callability() {
    assert!(is_callable(&TypeValue::Any));
    assert!(is_callable(&TypeValue::func(vec![], TypeValue::null())));
    assert!(!is_callable(&TypeValue::num()));
}

#[test]
fn scope_lookup_walks_parents() {
    let root = Scope::new();
    root.predefine_variable("x", var(TypeValue::num()));

    let child = root.create_child();
    assert_eq!(child.get_variable("x").unwrap().ty, TypeValue::num());
    assert!(child.get_variable("y").is_none());

    // Declarations live in the scope they were made in.
    assert!(root.is_declared("x"));
    assert!(!child.is_declared("x"));
}

#[test]
fn scope_override_wins_over_declaration() {
    let scope = Scope::new();
    scope.predefine_variable("x", var(TypeValue::Nothing));
    scope.override_variable("x", var(TypeValue::num()));
    assert_eq!(scope.get_variable("x").unwrap().ty, TypeValue::num());
}

#[test]
fn scope_redefinition_is_reported_once() {
    let scope = Scope::new();
    let loc = Loc::start();

    assert!(scope
        .define_variable("x", var(TypeValue::num()), loc)
        .is_none());
    assert!(scope
        .define_variable("x", var(TypeValue::str()), loc)
        .is_some());
    // The newer binding still wins.
    assert_eq!(scope.get_variable("x").unwrap().ty, TypeValue::str());
}

#[test]
fn predeclared_names_redefine_silently() {
    let scope = Scope::new();
    scope.predefine_variable("x", var(TypeValue::num()));
    assert!(scope
        .define_variable("x", var(TypeValue::num()), Loc::start())
        .is_none());
}

#[test]
fn namespace_members_mirror_into_parent() {
    let root = Scope::new();
    let ns = root.create_namespace("Foo");
    assert!(ns
        .define_variable("bar", var(TypeValue::num()), Loc::start())
        .is_none());

    assert_eq!(root.get_variable("Foo:bar").unwrap().ty, TypeValue::num());
}

#[test]
fn copy_isolates_runs() {
    let base = Scope::new();
    base.predefine_variable("x", var(TypeValue::num()));

    let run = base.copy();
    run.override_variable("x", var(TypeValue::str()));
    run.predefine_variable("y", var(TypeValue::bool()));

    assert_eq!(base.get_variable("x").unwrap().ty, TypeValue::num());
    assert!(base.get_variable("y").is_none());
}

#[test]
fn global_scope_has_std_namespaces() {
    let scope = create_global_scope();
    assert!(scope.get_variable("Core:add").is_some());
    assert!(scope.get_variable("Math:PI").is_some());
    assert!(scope.get_variable("Json:parse").is_some());
    assert!(scope.get_variable("print").is_some());

    let add = scope.get_variable("Core:add").unwrap();
    assert!(is_callable(&add.ty));
    assert!(!add.is_mut);
}
