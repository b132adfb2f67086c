//! Fluent accessor for nested values
//!
//! An [`Accessor`] pairs a subject value with an accumulated [`Path`] and
//! the not-found behaviour. It borrows or owns the subject through
//! [`Borrow`]/[`BorrowMut`], so the same builder reads through `&Value` and
//! writes through `&mut Value`.
//!
//! ```
//! use valkit_core::accessor::accessor;
//! use valkit_core::Value;
//! use serde_json::json;
//!
//! let mut subject = Value::from(json!({"a": {"b": 3}}));
//! let acc = accessor(&mut subject).prop("a.b").set_val(5).reset().prop("a").prop("b");
//! assert_eq!(acc.value().unwrap(), Some(&Value::from(5)));
//! ```

use crate::errors::Result;
use crate::log_op_error;
use crate::model::{Value, UNDEFINED};
use crate::path::{self, Path, PathFragment};
use crate::predicates;
use crate::val_type;
use serde::{Deserialize, Serialize};
use std::borrow::{Borrow, BorrowMut};

/// Not-found behaviour of an [`Accessor`]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AccessorOptions {
    /// Fail with `PropertyNotFound` instead of resolving to absent
    pub throw: bool,
    /// Label of the subject used in not-found messages
    pub src: Option<String>,
}

/// Stateful builder pairing a subject with a path
#[derive(Debug, Clone)]
pub struct Accessor<S> {
    subject: S,
    path: Path,
    options: AccessorOptions,
}

/// Start an accessor over `subject` with default options
pub fn accessor<S: Borrow<Value>>(subject: S) -> Accessor<S> {
    Accessor::new(subject)
}

impl<S> Accessor<S> {
    pub fn new(subject: S) -> Self {
        Self::with_options(subject, AccessorOptions::default())
    }

    pub fn with_options(subject: S, options: AccessorOptions) -> Self {
        Self {
            subject,
            path: Path::new(),
            options,
        }
    }

    /// Append a path fragment
    pub fn prop(mut self, fragment: impl Into<PathFragment>) -> Self {
        self.path.push_fragment(fragment);
        self
    }

    /// Alias of [`prop`](Self::prop)
    pub fn property(self, fragment: impl Into<PathFragment>) -> Self {
        self.prop(fragment)
    }

    /// Append several path fragments, in order
    pub fn get<I, F>(mut self, fragments: I) -> Self
    where
        I: IntoIterator<Item = F>,
        F: Into<PathFragment>,
    {
        self.path.extend(fragments);
        self
    }

    /// Clear the accumulated path
    pub fn reset(mut self) -> Self {
        self.path.reset();
        self
    }

    /// Toggle failing on missing paths
    pub fn throw(mut self, throw: bool) -> Self {
        self.options.throw = throw;
        self
    }

    /// Label the subject in not-found messages
    pub fn src(mut self, label: impl Into<String>) -> Self {
        self.options.src = Some(label.into());
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn options(&self) -> &AccessorOptions {
        &self.options
    }

    pub fn into_subject(self) -> S {
        self.subject
    }

    /// Write `value` into another `subject` at this accessor's path
    ///
    /// See [`path::set_value`] for when nothing is written.
    pub fn set_value(&self, subject: &mut Value, value: impl Into<Value>) -> bool {
        path::set_value(subject, &self.path, value.into())
    }
}

impl<S: Borrow<Value>> Accessor<S> {
    /// Resolve the accumulated path against the subject
    ///
    /// # Errors
    ///
    /// Returns `PropertyNotFound` when the path is missing and the accessor
    /// was configured to throw.
    pub fn value(&self) -> Result<Option<&Value>> {
        let resolved = path::get(
            self.subject.borrow(),
            &self.path,
            self.options.throw,
            self.options.src.as_deref(),
        );
        if let Err(err) = &resolved {
            log_op_error!("resolve_value", err.clone(), duration_ms = 0, path = %self.path);
        }
        resolved
    }

    /// Alias of [`value`](Self::value)
    ///
    /// # Errors
    ///
    /// Same as [`value`](Self::value).
    pub fn val(&self) -> Result<Option<&Value>> {
        self.value()
    }

    /// The resolved value, with a missing path read as absent
    fn resolved(&self) -> Result<&Value> {
        Ok(self.value()?.unwrap_or(&UNDEFINED))
    }

    /// Apply any predicate to the resolved value
    ///
    /// # Errors
    ///
    /// Same as [`value`](Self::value).
    pub fn check(&self, predicate: impl Fn(&Value) -> bool) -> Result<bool> {
        Ok(predicate(self.resolved()?))
    }

    /// Check the resolved value against type names, see [`val_type::is_type`]
    ///
    /// # Errors
    ///
    /// `PropertyNotFound` as for [`value`](Self::value), or `InvalidType`
    /// for unknown names when none matched.
    pub fn is_type<N: AsRef<str>>(&self, names: &[N]) -> Result<bool> {
        val_type::is_type(self.resolved()?, names)
    }
}

macro_rules! accessor_predicates {
    ($($(#[$doc:meta])* $name:ident),* $(,)?) => {
        impl<S: Borrow<Value>> Accessor<S> {
            $(
                $(#[$doc])*
                ///
                /// # Errors
                ///
                /// Fails only when the path is missing and throwing is on.
                pub fn $name(&self) -> Result<bool> {
                    self.check(predicates::$name)
                }
            )*
        }
    };
}

accessor_predicates!(
    is_boolean,
    is_string,
    is_non_empty_string,
    is_number,
    is_pos_number,
    is_integer,
    is_date,
    is_array,
    is_non_empty_array,
    is_regexp,
    is_null,
    /// `false` for a missing path
    is_defined,
    has_value,
    is_empty,
    is_error,
    is_object,
    is_dict,
);

impl<S: BorrowMut<Value>> Accessor<S> {
    /// Assign `value` at the accumulated path inside the subject
    ///
    /// A no-op when the path is empty or the subject is not a mapping.
    pub fn set_val(mut self, value: impl Into<Value>) -> Self {
        if !path::set_value(self.subject.borrow_mut(), &self.path, value.into()) {
            tracing::debug!(path = %self.path, "set_val wrote nothing");
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_options_deserialize_from_json() {
        let options: AccessorOptions =
            serde_json::from_value(json!({"throw": true, "src": "config"})).unwrap();
        assert!(options.throw);
        assert_eq!(options.src.as_deref(), Some("config"));

        let defaults: AccessorOptions = serde_json::from_value(json!({})).unwrap();
        assert_eq!(defaults, AccessorOptions::default());
    }

    #[test]
    fn test_owned_subject() {
        let acc = accessor(Value::from(json!({"a": 1}))).prop("a");
        assert_eq!(acc.value().unwrap(), Some(&Value::from(1)));
        assert_eq!(acc.into_subject(), Value::from(json!({"a": 1})));
    }

    #[test]
    fn test_get_accepts_several_fragments() {
        let subject = Value::from(json!({"a": {"b": {"c": 1}}}));
        let acc = accessor(&subject).get([PathFragment::from("a"), PathFragment::from(["b", "c"])]);
        assert_eq!(acc.path().dotted(), "a.b.c");
        assert_eq!(acc.value().unwrap(), Some(&Value::from(1)));
    }
}
