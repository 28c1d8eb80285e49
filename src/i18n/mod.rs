//! Message catalog for diagnostics.
//!
//! Errors carry only a catalog path and positional arguments; the text
//! lives here so the analyzer core stays language-neutral. A path with no
//! entry for the active language renders as `<{lang}: {path}>`, which keeps
//! a missing translation visible instead of silently dropping a diagnostic.

use std::collections::HashMap;

use lazy_static::lazy_static;

use crate::errors::errors::{SyntaxError, TypeError};

#[cfg(test)]
mod tests;

lazy_static! {
    static ref EN_CATALOG: HashMap<&'static str, &'static str> = {
        let mut m = HashMap::new();

        m.insert("syntax.InvalidAttribute", "attributes may only decorate definitions");
        m.insert("syntax.UnExpectedToken", "unexpected token");
        m.insert(
            "syntax.MultipleStatementsOnSingleLine",
            "multiple statements cannot be placed on a single line",
        );
        m.insert("syntax.MissingThenClause", "missing then clause");
        m.insert("syntax.MissingCondition", "missing condition");
        m.insert("syntax.SeparatorExpected", "separator expected");
        m.insert("syntax.NonNumericSign", "sign is only applicable to numeric literals");
        m.insert(
            "syntax.CanNotUseSpacesInReference",
            "spaces cannot be used in a namespaced reference",
        );
        m.insert("syntax.MissingIdentifier", "missing identifier");
        m.insert("syntax.MissingType", "missing type");
        m.insert("syntax.MissingParams", "missing parameter list");
        m.insert("syntax.MissingFunctionBody", "missing function body");
        m.insert("syntax.MissingExpr", "missing expression");
        m.insert("syntax.MissingKeyword", "missing keyword: `{0}`");
        m.insert("syntax.MissingBody", "missing body");
        m.insert("syntax.MissingBracket", "missing bracket: `{0}`");
        m.insert("syntax.MissingAttribute", "missing attribute");
        m.insert("syntax.MissingLineBreak", "missing line break");
        m.insert("syntax.MissingStatement", "missing statement");

        m.insert(
            "typing.AlreadyDeclaredVariable",
            "variable `{0}` is already declared",
        );
        m.insert(
            "typing.NotAssignableType",
            "type `{1}` is not assignable to type `{0}`",
        );
        m.insert("typing.CanNotCall", "type `{0}` is not callable");
        m.insert("typing.MissingArgument", "missing argument {0} of type `{1}`");
        m.insert(
            "typing.InvalidArgument",
            "argument {0} expects type `{1}`, but got `{2}`",
        );
        m.insert(
            "typing.CanNotAssignToImmutableVariable",
            "cannot assign to immutable variable `{0}`",
        );
        m.insert(
            "typing.CanNotReadProperty",
            "property `{1}` does not exist on type `{0}`",
        );

        m
    };
}

pub struct I18n {
    lang: String,
}

impl Default for I18n {
    fn default() -> Self {
        I18n {
            lang: String::from("en"),
        }
    }
}

impl I18n {
    pub fn new(lang: &str) -> I18n {
        I18n {
            lang: String::from(lang),
        }
    }

    /// Resolves a catalog path, substituting `{0}`, `{1}`, ... with the
    /// positional arguments.
    ///
    /// # Arguments
    /// * `path` - A catalog path such as `"syntax.MissingExpr"`.
    /// * `args` - Positional arguments referenced by the entry.
    ///
    /// # Returns
    /// The rendered message, or the `<{lang}: {path}>` marker when the
    /// catalog has no entry.
    pub fn t(&self, path: &str, args: &[String]) -> String {
        let entry = match self.lang.as_str() {
            "en" => EN_CATALOG.get(path),
            _ => None,
        };

        match entry {
            Some(template) => {
                let mut message = String::from(*template);
                for (i, arg) in args.iter().enumerate() {
                    message = message.replace(&format!("{{{}}}", i), arg);
                }
                message
            }
            None => format!("<{}: {}>", self.lang, path),
        }
    }

    pub fn localize_syntax_error(&self, error: &SyntaxError) -> String {
        self.t(&error.message_path(), &error.message_args())
    }

    pub fn localize_type_error(&self, error: &TypeError) -> String {
        self.t(&error.message_path(), &error.message_args())
    }
}
