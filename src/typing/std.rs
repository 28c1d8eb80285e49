//! Builtin bindings installed into the global scope before checking.
//!
//! These mirror the host runtime's standard namespaces. Only signatures
//! matter here; there are no implementations to run.

use super::{
    scope::{Scope, Variable},
    type_value::{union_of, FnParam, TypeValue},
};

fn define(scope: &Scope, name: &str, ty: TypeValue) {
    scope.predefine_variable(name, Variable { is_mut: false, ty });
}

fn func(params: Vec<FnParam>, ret: TypeValue) -> TypeValue {
    TypeValue::func(params, ret)
}

/// A fresh global scope with the standard namespaces installed.
pub fn create_global_scope() -> Scope {
    let scope = Scope::new();

    scope.declare_type("void", TypeValue::null());

    // `<:` statements desugar to calls of this.
    define(
        &scope,
        "print",
        func(vec![TypeValue::param(TypeValue::Any)], TypeValue::null()),
    );

    install_core(&scope);
    install_util(&scope);
    install_json(&scope);
    install_date(&scope);
    install_math(&scope);
    install_num(&scope);
    install_str(&scope);

    scope
}

fn install_core(scope: &Scope) {
    let num = TypeValue::num;
    let bool_ = TypeValue::bool;
    let p = TypeValue::param;

    define(scope, "help", TypeValue::str());
    define(scope, "Core:ai", TypeValue::str());
    define(scope, "Core:v", TypeValue::str());

    define(scope, "Core:not", func(vec![p(bool_())], bool_()));

    for name in ["Core:eq", "Core:neq"] {
        define(
            scope,
            name,
            func(vec![p(TypeValue::Any), p(TypeValue::Any)], bool_()),
        );
    }

    for name in ["Core:and", "Core:or"] {
        define(scope, name, func(vec![p(bool_()), p(bool_())], bool_()));
    }

    for name in [
        "Core:add", "Core:sub", "Core:mul", "Core:div", "Core:pow", "Core:mod",
    ] {
        define(scope, name, func(vec![p(num()), p(num())], num()));
    }

    for name in ["Core:gt", "Core:lt", "Core:gteq", "Core:lteq"] {
        define(scope, name, func(vec![p(num()), p(num())], bool_()));
    }

    define(
        scope,
        "Core:type",
        func(vec![p(TypeValue::Any)], TypeValue::str()),
    );
    define(
        scope,
        "Core:to_str",
        func(vec![p(TypeValue::Any)], TypeValue::str()),
    );
    define(
        scope,
        "Core:range",
        func(vec![p(num()), p(num())], TypeValue::arr(num())),
    );
    define(scope, "Core:sleep", func(vec![p(num())], TypeValue::null()));
}

fn install_util(scope: &Scope) {
    define(scope, "Util:uuid", func(vec![], TypeValue::str()));
}

fn install_json(scope: &Scope) {
    define(
        scope,
        "Json:stringify",
        func(vec![TypeValue::param(TypeValue::Any)], TypeValue::str()),
    );
    define(
        scope,
        "Json:parse",
        func(
            vec![TypeValue::param(TypeValue::str())],
            union_of(vec![
                TypeValue::Any,
                TypeValue::Error(Box::new(TypeValue::Any)),
            ]),
        ),
    );
    define(
        scope,
        "Json:parseable",
        func(vec![TypeValue::param(TypeValue::str())], TypeValue::bool()),
    );
}

fn install_date(scope: &Scope) {
    let num = TypeValue::num;

    define(scope, "Date:now", func(vec![], TypeValue::str()));

    // Component accessors take an optional timestamp.
    for name in [
        "Date:year",
        "Date:month",
        "Date:day",
        "Date:hour",
        "Date:minute",
        "Date:second",
    ] {
        define(scope, name, func(vec![TypeValue::opt_param(num())], num()));
    }

    define(
        scope,
        "Date:parse",
        func(vec![TypeValue::param(TypeValue::str())], num()),
    );
}

fn install_math(scope: &Scope) {
    let num = TypeValue::num;
    let p = TypeValue::param;

    for name in [
        "Math:Infinity",
        "Math:E",
        "Math:LN2",
        "Math:LN10",
        "Math:LOG2E",
        "Math:LOG10E",
        "Math:PI",
        "Math:SQRT1_2",
        "Math:SQRT2",
    ] {
        define(scope, name, num());
    }

    for name in [
        "Math:abs",
        "Math:acos",
        "Math:acosh",
        "Math:asin",
        "Math:asinh",
        "Math:atan",
        "Math:atanh",
        "Math:cbrt",
        "Math:ceil",
        "Math:clz32",
        "Math:cos",
        "Math:cosh",
        "Math:exp",
        "Math:expm1",
        "Math:floor",
        "Math:fround",
        "Math:hypot",
        "Math:imul",
        "Math:log1p",
        "Math:log10",
        "Math:log2",
        "Math:round",
        "Math:sign",
        "Math:sin",
        "Math:sinh",
        "Math:sqrt",
        "Math:tan",
        "Math:tanh",
        "Math:trunc",
    ] {
        define(scope, name, func(vec![p(num())], num()));
    }

    for name in [
        "Math:atan2",
        "Math:log",
        "Math:max",
        "Math:min",
        "Math:pow",
    ] {
        define(scope, name, func(vec![p(num()), p(num())], num()));
    }

    define(
        scope,
        "Math:rnd",
        func(
            vec![TypeValue::opt_param(num()), TypeValue::opt_param(num())],
            num(),
        ),
    );

    // A seeded generator returns another rnd-shaped function.
    define(
        scope,
        "Math:gen_rng",
        func(
            vec![p(union_of(vec![num(), TypeValue::str()]))],
            func(
                vec![TypeValue::opt_param(num()), TypeValue::opt_param(num())],
                num(),
            ),
        ),
    );
}

fn install_num(scope: &Scope) {
    define(
        scope,
        "Num:to_hex",
        func(vec![TypeValue::param(TypeValue::num())], TypeValue::str()),
    );
    define(
        scope,
        "Num:from_hex",
        func(vec![TypeValue::param(TypeValue::str())], TypeValue::num()),
    );
}

fn install_str(scope: &Scope) {
    let str_ = TypeValue::str;
    let p = TypeValue::param;

    define(scope, "Str:lf", str_());

    for name in ["Str:lt", "Str:gt"] {
        define(scope, name, func(vec![p(str_()), p(str_())], TypeValue::num()));
    }

    define(
        scope,
        "Str:from_codepoint",
        func(vec![p(TypeValue::num())], str_()),
    );
}
