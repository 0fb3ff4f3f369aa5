//! Symbolic variables and ordered variable sets.
//!
//! Role
//! - [`Variable`] is an identity-bearing leaf: two variables created with the same name are
//!   still distinct. Identity is a process-unique id drawn from an atomic counter.
//! - [`Variables`] is an ordered set of variables (ordered by id, hence by creation order),
//!   used for free-variable extraction and quantifier binders.
use std::{
    collections::{BTreeSet, btree_set},
    sync::{
        Arc,
        atomic::{AtomicUsize, Ordering},
    },
};

use crate::utils::hash::{hash_combine, hash_value};

static NEXT_VARIABLE_ID: AtomicUsize = AtomicUsize::new(0);

/// A symbolic variable.
///
/// Cloning is cheap (the name is shared). Equality, ordering and hashing only look at the id;
/// the name is purely cosmetic and used for display.
#[derive(Debug, Clone)]
pub struct Variable {
    id: usize,
    name: Arc<str>,
}

impl Variable {
    /// Create a fresh variable. Every call yields a new identity, even for a repeated name.
    pub fn new<S: AsRef<str>>(name: S) -> Self {
        Self {
            id: NEXT_VARIABLE_ID.fetch_add(1, Ordering::Relaxed),
            name: Arc::from(name.as_ref()),
        }
    }

    /// Process-unique identifier of this variable.
    #[inline]
    pub fn get_id(&self) -> usize {
        self.id
    }

    /// Display name given at creation.
    #[inline]
    pub fn get_name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn get_hash(&self) -> u64 {
        hash_value(&self.id)
    }
}

impl PartialEq for Variable {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Variable {}

impl PartialOrd for Variable {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Variable {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.id.cmp(&other.id)
    }
}

impl std::hash::Hash for Variable {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl std::fmt::Display for Variable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.name)
    }
}

/// An ordered set of [`Variable`]s.
///
/// Iteration yields variables in increasing id order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Variables(BTreeSet<Variable>);

impl Variables {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `v`, returning `false` if it was already present.
    pub fn insert(&mut self, v: Variable) -> bool {
        self.0.insert(v)
    }

    pub fn contains(&self, v: &Variable) -> bool {
        self.0.contains(v)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> btree_set::Iter<'_, Variable> {
        self.0.iter()
    }

    /// Set union, consuming `other`.
    pub fn union_with(&mut self, other: Variables) {
        if self.0.is_empty() {
            self.0 = other.0;
        } else {
            self.0.extend(other.0);
        }
    }

    /// Whether every element of `self` is also in `other`.
    pub fn is_subset(&self, other: &Variables) -> bool {
        self.0.is_subset(&other.0)
    }

    /// Order-dependent hash of the set: the elements' hashes are folded in id order.
    pub fn get_hash(&self) -> u64 {
        self.0
            .iter()
            .fold(hash_value(&self.0.len()), |seed, v| {
                hash_combine(seed, v.get_hash())
            })
    }
}

impl FromIterator<Variable> for Variables {
    fn from_iter<I: IntoIterator<Item = Variable>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<const N: usize> From<[Variable; N]> for Variables {
    fn from(value: [Variable; N]) -> Self {
        Self(BTreeSet::from(value))
    }
}

impl From<&Variables> for Variables {
    fn from(value: &Variables) -> Self {
        value.clone()
    }
}

impl From<Variable> for Variables {
    fn from(value: Variable) -> Self {
        Self(BTreeSet::from([value]))
    }
}

impl Extend<Variable> for Variables {
    fn extend<I: IntoIterator<Item = Variable>>(&mut self, iter: I) {
        self.0.extend(iter);
    }
}

impl IntoIterator for Variables {
    type Item = Variable;
    type IntoIter = btree_set::IntoIter<Variable>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Variables {
    type Item = &'a Variable;
    type IntoIter = btree_set::Iter<'a, Variable>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

// Set difference `A \ B`.
impl std::ops::Sub<&Variables> for &Variables {
    type Output = Variables;

    fn sub(self, rhs: &Variables) -> Variables {
        Variables(self.0.difference(&rhs.0).cloned().collect())
    }
}

impl std::ops::Sub<&Variables> for Variables {
    type Output = Variables;

    fn sub(mut self, rhs: &Variables) -> Variables {
        self.0.retain(|v| !rhs.0.contains(v));
        self
    }
}

// Set union `A ∪ B`.
impl std::ops::BitOr<&Variables> for &Variables {
    type Output = Variables;

    fn bitor(self, rhs: &Variables) -> Variables {
        Variables(self.0.union(&rhs.0).cloned().collect())
    }
}

impl std::ops::BitOr<Variables> for Variables {
    type Output = Variables;

    fn bitor(mut self, rhs: Variables) -> Variables {
        self.union_with(rhs);
        self
    }
}

impl std::fmt::Display for Variables {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("{")?;
        for (i, v) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{v}")?;
        }
        f.write_str("}")
    }
}
