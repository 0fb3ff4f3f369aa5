//! Variable assignments used during evaluation.
use std::collections::{BTreeMap, btree_map};

use crate::{
    error::{SymbolicError, SymbolicResult},
    variable::{Variable, Variables},
};

/// Mapping from [`Variable`] to a numeric value.
///
/// Example
/// ```
/// use hysymbolic::prelude::*;
///
/// let x = Variable::new("x");
/// let env = Environment::from([(x.clone(), 1.0)]);
/// assert_eq!(env.lookup(&x), Ok(1.0));
/// assert!(env.lookup(&Variable::new("y")).is_err());
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Environment {
    map: BTreeMap<Variable, f64>,
}

impl Environment {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind `var` to `value`, returning the previous binding if any.
    pub fn insert(&mut self, var: Variable, value: f64) -> Option<f64> {
        self.map.insert(var, value)
    }

    pub fn get(&self, var: &Variable) -> Option<f64> {
        self.map.get(var).copied()
    }

    /// Value bound to `var`, or [`SymbolicError::UnboundVariable`].
    pub fn lookup(&self, var: &Variable) -> SymbolicResult<f64> {
        self.get(var).ok_or_else(|| SymbolicError::UnboundVariable {
            variable: var.get_name().to_string(),
        })
    }

    pub fn contains(&self, var: &Variable) -> bool {
        self.map.contains_key(var)
    }

    /// Whether every variable of `vars` is bound.
    pub fn binds_all(&self, vars: &Variables) -> bool {
        vars.iter().all(|v| self.contains(v))
    }

    /// Set of bound variables.
    pub fn domain(&self) -> Variables {
        self.map.keys().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    pub fn iter(&self) -> btree_map::Iter<'_, Variable, f64> {
        self.map.iter()
    }
}

impl FromIterator<(Variable, f64)> for Environment {
    fn from_iter<I: IntoIterator<Item = (Variable, f64)>>(iter: I) -> Self {
        Self {
            map: iter.into_iter().collect(),
        }
    }
}

impl<const N: usize> From<[(Variable, f64); N]> for Environment {
    fn from(value: [(Variable, f64); N]) -> Self {
        Self {
            map: BTreeMap::from(value),
        }
    }
}

impl Extend<(Variable, f64)> for Environment {
    fn extend<I: IntoIterator<Item = (Variable, f64)>>(&mut self, iter: I) {
        self.map.extend(iter);
    }
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("{")?;
        for (i, (var, value)) in self.map.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{var} -> {value}")?;
        }
        f.write_str("}")
    }
}
