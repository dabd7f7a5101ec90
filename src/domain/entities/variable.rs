//! Variable entity - a configurable parameter of a component

use crate::domain::value_objects::{Substitution, Value};

/// Type tags that make a variable integer-valued.
const INTEGER_TYPES: &[&str] = &["integer", "int"];

/// A component parameter: its permissible values and how they are realized.
#[derive(Debug, Clone, PartialEq)]
pub struct Variable {
    name: String,
    value_type: Option<String>,
    domain: Vec<Value>,
    realization: Vec<Substitution>,
}

impl Variable {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value_type: None,
            domain: Vec::new(),
            realization: Vec::new(),
        }
    }

    /// Builder: set the declared type tag
    pub fn with_type(mut self, value_type: impl Into<String>) -> Self {
        self.value_type = Some(value_type.into());
        self
    }

    /// Builder: set the ordered domain
    pub fn with_domain(mut self, domain: Vec<Value>) -> Self {
        self.domain = domain;
        self
    }

    /// Builder: set the substitutions realizing a value
    pub fn with_realization(mut self, realization: Vec<Substitution>) -> Self {
        self.realization = realization;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value_type(&self) -> Option<&str> {
        self.value_type.as_deref()
    }

    pub fn domain(&self) -> &[Value] {
        &self.domain
    }

    pub fn realization(&self) -> &[Substitution] {
        &self.realization
    }

    /// Integer variables are realized by their literal value, not by a domain lookup.
    pub fn is_integer(&self) -> bool {
        self.value_type
            .as_deref()
            .is_some_and(|t| INTEGER_TYPES.iter().any(|i| t.eq_ignore_ascii_case(i)))
    }

    fn is_indexed_by_value(&self) -> bool {
        self.is_integer() || self.domain.is_empty()
    }

    /// The value at `index`: the domain element, or `index` itself for integer
    /// variables and variables without an enumerated domain.
    pub fn value_at(&self, index: usize) -> Option<Value> {
        if self.is_indexed_by_value() {
            return i64::try_from(index).ok().map(Value::Integer);
        }
        self.domain.get(index).cloned()
    }

    /// Inverse of [`value_at`](Self::value_at): the replacement index of a chosen value.
    pub fn index_of(&self, value: &Value) -> Option<usize> {
        if self.is_indexed_by_value() {
            return value.as_integer().and_then(|i| usize::try_from(i).ok());
        }
        self.domain.iter().position(|candidate| candidate == value)
    }
}
