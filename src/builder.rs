//! Assembles a tree from a key policy and a comparator.

use std::cmp::Ordering;
use std::marker::PhantomData;

use thiserror::Error;

use crate::policy::KeyPolicy;
use crate::tree::{AvlTree, NonUniqueAvlTree, UniqueAvlTree};

/// A tree configuration the builder refuses to turn into a tree.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum BuildError {
    /// No comparator was supplied before building.
    #[error("a tree cannot be built without a comparator")]
    MissingComparator,
}

/// Builder for [`AvlTree`] instances.
///
/// The key policy is part of the built tree's type, so it is chosen by the
/// build method (or a turbofish on [`build`](TreeBuilder::build)) and can
/// never be missing. The comparator is checked eagerly: building without
/// one fails with [`BuildError::MissingComparator`] instead of surfacing
/// later during an insert.
///
/// ```
/// use avl_keys::TreeBuilder;
///
/// let mut tree = TreeBuilder::new()
///     .comparator(|a: &i32, b: &i32| a.cmp(b))
///     .build_non_unique()
///     .unwrap();
/// tree.insert(7).insert(7);
/// assert_eq!(tree.len(), 2);
/// ```
pub struct TreeBuilder<V, C> {
    comparator: Option<C>,
    _values: PhantomData<fn(&V)>,
}

impl<V, C> TreeBuilder<V, C>
where
    C: Fn(&V, &V) -> Ordering,
{
    /// Creates a builder with no comparator set.
    pub fn new() -> Self {
        Self {
            comparator: None,
            _values: PhantomData,
        }
    }

    /// Sets the comparator, called as `cmp(candidate, existing)`.
    pub fn comparator(mut self, cmp: C) -> Self {
        self.comparator = Some(cmp);
        self
    }

    /// Builds a tree with the given key policy.
    pub fn build<P>(self) -> Result<AvlTree<V, P, C>, BuildError>
    where
        P: KeyPolicy<V>,
    {
        let cmp = self.comparator.ok_or(BuildError::MissingComparator)?;
        Ok(AvlTree::new(cmp))
    }

    /// Builds a tree that keeps one value per distinct key.
    pub fn build_unique(self) -> Result<UniqueAvlTree<V, C>, BuildError> {
        self.build()
    }

    /// Builds a tree that keeps every value inserted under a key.
    pub fn build_non_unique(self) -> Result<NonUniqueAvlTree<V, C>, BuildError> {
        self.build()
    }
}

impl<V, C> Default for TreeBuilder<V, C>
where
    C: Fn(&V, &V) -> Ordering,
{
    fn default() -> Self {
        Self::new()
    }
}
