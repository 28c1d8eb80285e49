//! Lexically-chained scopes for types and variables.
//!
//! Scopes are reference-counted so child scopes, namespace scopes, and run
//! snapshots can all point at the same parent. Variable lookup resolves
//! through the override table first (flow-sensitive narrowing), then the
//! parent chain, then the local table.

use std::cell::RefCell;
use std::collections::{HashMap, HashSet};
use std::rc::Rc;

use crate::{
    errors::errors::{TypeError, TypeErrorKind},
    Loc,
};

use super::type_value::TypeValue;

#[derive(Debug, Clone)]
pub struct Variable {
    pub is_mut: bool,
    pub ty: TypeValue,
}

struct ScopeData {
    parent: Option<Scope>,
    /// Set on namespace scopes; members are mirrored into the parent under
    /// `"<namespace>:<name>"`.
    namespace: Option<String>,
    types: HashMap<String, TypeValue>,
    variables: HashMap<String, Variable>,
    overrides: HashMap<String, Variable>,
    /// Names installed by the pre-pass. The full pass re-defines them
    /// without an already-declared error.
    predeclared: HashSet<String>,
}

#[derive(Clone)]
pub struct Scope {
    data: Rc<RefCell<ScopeData>>,
}

impl Scope {
    pub fn new() -> Scope {
        Scope {
            data: Rc::new(RefCell::new(ScopeData {
                parent: None,
                namespace: None,
                types: HashMap::new(),
                variables: HashMap::new(),
                overrides: HashMap::new(),
                predeclared: HashSet::new(),
            })),
        }
    }

    pub fn create_child(&self) -> Scope {
        Scope {
            data: Rc::new(RefCell::new(ScopeData {
                parent: Some(self.clone()),
                namespace: None,
                types: HashMap::new(),
                variables: HashMap::new(),
                overrides: HashMap::new(),
                predeclared: HashSet::new(),
            })),
        }
    }

    pub fn create_namespace(&self, name: &str) -> Scope {
        Scope {
            data: Rc::new(RefCell::new(ScopeData {
                parent: Some(self.clone()),
                namespace: Some(String::from(name)),
                types: HashMap::new(),
                variables: HashMap::new(),
                overrides: HashMap::new(),
                predeclared: HashSet::new(),
            })),
        }
    }

    /// A run snapshot: same parent, independently-mutable copies of the
    /// tables, no overrides. Narrowing in one run never leaks into another.
    pub fn copy(&self) -> Scope {
        let data = self.data.borrow();
        Scope {
            data: Rc::new(RefCell::new(ScopeData {
                parent: data.parent.clone(),
                namespace: data.namespace.clone(),
                types: data.types.clone(),
                variables: data.variables.clone(),
                overrides: HashMap::new(),
                predeclared: HashSet::new(),
            })),
        }
    }

    pub fn declare_type(&self, name: &str, ty: TypeValue) {
        self.data
            .borrow_mut()
            .types
            .insert(String::from(name), ty);
    }

    pub fn get_type(&self, name: &str) -> Option<TypeValue> {
        let data = self.data.borrow();
        if let Some(parent) = &data.parent {
            if let Some(ty) = parent.get_type(name) {
                return Some(ty);
            }
        }
        data.types.get(name).cloned()
    }

    /// Installs a binding from the pre-pass; never an error. The full pass
    /// later re-defines it silently.
    pub fn predefine_variable(&self, name: &str, variable: Variable) {
        let mirror = {
            let mut data = self.data.borrow_mut();
            data.variables
                .insert(String::from(name), variable.clone());
            data.predeclared.insert(String::from(name));
            data.namespace
                .clone()
                .zip(data.parent.clone())
        };

        if let Some((namespace, parent)) = mirror {
            parent.predefine_variable(&format!("{}:{}", namespace, name), variable);
        }
    }

    /// Defines a variable in this scope's own table. Redefinitions produce
    /// an already-declared error but still overwrite, so later uses see the
    /// newest type. Shadowing an enclosing binding is allowed.
    pub fn define_variable(
        &self,
        name: &str,
        variable: Variable,
        loc: Loc,
    ) -> Option<TypeError> {
        let (duplicate, mirror) = {
            let mut data = self.data.borrow_mut();
            let duplicate = if data.predeclared.remove(name) {
                false
            } else {
                data.variables.contains_key(name)
            };
            data.variables
                .insert(String::from(name), variable.clone());
            let mirror = data.namespace.clone().zip(data.parent.clone());
            (duplicate, mirror)
        };

        let mut err = None;
        if duplicate {
            err = Some(TypeError::new(
                TypeErrorKind::AlreadyDeclaredVariable {
                    name: String::from(name),
                },
                loc,
            ));
        }

        if let Some((namespace, parent)) = mirror {
            let mirrored =
                parent.define_variable(&format!("{}:{}", namespace, name), variable, loc);
            if err.is_none() {
                err = mirrored;
            }
        }

        err
    }

    /// Records a narrowed binding without touching the declaration.
    pub fn override_variable(&self, name: &str, variable: Variable) {
        self.data
            .borrow_mut()
            .overrides
            .insert(String::from(name), variable);
    }

    pub fn get_variable(&self, name: &str) -> Option<Variable> {
        let data = self.data.borrow();
        if let Some(variable) = data.overrides.get(name) {
            return Some(variable.clone());
        }
        if let Some(parent) = &data.parent {
            if let Some(variable) = parent.get_variable(name) {
                return Some(variable);
            }
        }
        data.variables.get(name).cloned()
    }

    /// Whether the name is declared in this scope's own table, ignoring
    /// parents and overrides.
    pub fn is_declared(&self, name: &str) -> bool {
        self.data.borrow().variables.contains_key(name)
    }
}

impl Default for Scope {
    fn default() -> Self {
        Scope::new()
    }
}
