use std::cmp::Ordering;

use crate::node::{height, Link};
use crate::policy::{
    add_node, find_node, remove_node, traverse, KeyPolicy, NonUniqueKeys, UniqueKeys,
};

/// Visit order for [`AvlTree::traverse`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Order {
    /// Node before both subtrees.
    Pre,
    /// Left subtree, node, right subtree — the sorted order.
    #[default]
    In,
    /// Both subtrees before the node.
    Post,
}

/// A self-balancing binary search tree with a caller-supplied comparator
/// and a key-duplication policy chosen at the type level.
///
/// The comparator is called as `cmp(candidate, existing)` and must be a
/// strict weak ordering; the tree does not check this. The policy decides
/// what happens when a key is inserted twice: [`UniqueKeys`] overwrites,
/// [`NonUniqueKeys`] keeps every value in insertion order.
///
/// ```
/// use avl_keys::{Order, UniqueAvlTree};
///
/// let mut tree = UniqueAvlTree::with_natural_order();
/// tree.insert(2).insert(1).insert(3);
/// assert_eq!(tree.get(&2), Some(&2));
///
/// let mut sorted = Vec::new();
/// tree.traverse(Order::In, |v| sorted.push(*v));
/// assert_eq!(sorted, [1, 2, 3]);
/// ```
pub struct AvlTree<V, P, C>
where
    P: KeyPolicy<V>,
{
    root: Link<P::Slot>,
    cmp: C,
    len: usize,
}

impl<V, P, C> std::fmt::Debug for AvlTree<V, P, C>
where
    P: KeyPolicy<V>,
    P::Slot: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AvlTree")
            .field("root", &self.root)
            .field("len", &self.len)
            .finish()
    }
}

/// An AVL tree keeping one value per distinct key.
pub type UniqueAvlTree<V, C> = AvlTree<V, UniqueKeys, C>;

/// An AVL tree keeping every value inserted under a key.
pub type NonUniqueAvlTree<V, C> = AvlTree<V, NonUniqueKeys, C>;

/// Three-way comparison through [`Ord`], usable as a tree comparator.
pub fn natural_order<V: Ord>(candidate: &V, existing: &V) -> Ordering {
    candidate.cmp(existing)
}

impl<V, P, C> AvlTree<V, P, C>
where
    P: KeyPolicy<V>,
    C: Fn(&V, &V) -> Ordering,
{
    /// Creates an empty tree ordered by the given comparator.
    /// No memory is allocated until the first value is inserted.
    pub fn new(cmp: C) -> Self {
        Self {
            root: None,
            cmp,
            len: 0,
        }
    }

    /// Returns true if the tree contains no values.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Returns the number of stored values, duplicates included.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Height of the tree: 0 when empty, 1 for a single node.
    pub fn height(&self) -> u32 {
        height(&self.root)
    }

    /// Drops the entire node graph, leaving the tree empty. Chainable.
    pub fn clear(&mut self) -> &mut Self {
        self.root = None;
        self.len = 0;
        self
    }

    /// Inserts a value, rebalancing as needed. Chainable.
    ///
    /// When the key already exists the tree shape does not change: under
    /// [`UniqueKeys`] the stored value is overwritten, under
    /// [`NonUniqueKeys`] the value is appended to the node's list.
    pub fn insert(&mut self, value: V) -> &mut Self {
        let (root, grew) = add_node::<V, P, C>(self.root.take(), value, &self.cmp);
        self.root = Some(root);
        if grew {
            self.len += 1;
        }
        self
    }

    /// Looks up a key with the tree's own comparator.
    ///
    /// Returns the stored value under [`UniqueKeys`] or the whole
    /// duplicate-value list under [`NonUniqueKeys`].
    pub fn get(&self, key: &V) -> Option<&P::Slot> {
        find_node::<V, P, _>(&self.root, &|existing: &V| (self.cmp)(key, existing))
    }

    /// Guided binary search.
    ///
    /// `navigate` is called with each visited node's representative key:
    /// `Less` descends left, `Greater` descends right and `Equal` stops the
    /// search at that node. Running off the tree returns `None`.
    pub fn find<N>(&self, navigate: N) -> Option<&P::Slot>
    where
        N: Fn(&V) -> Ordering,
    {
        find_node::<V, P, N>(&self.root, &navigate)
    }

    /// Guided binary search with a separate acceptance test.
    ///
    /// Navigation works as in [`find`](Self::find); once it stops, the
    /// node's key must also pass `accept` or the result is `None`.
    pub fn find_with<N, F>(&self, navigate: N, mut accept: F) -> Option<&P::Slot>
    where
        N: Fn(&V) -> Ordering,
        F: FnMut(&V) -> bool,
    {
        self.find(navigate).filter(|slot| accept(P::key(*slot)))
    }

    /// Removes one value stored under `key` that passes `accept`.
    /// Returns whether a value was actually removed.
    ///
    /// Under [`NonUniqueKeys`] the predicate picks which duplicate goes; the
    /// node itself is only spliced out of the tree once its list empties.
    pub fn remove<F>(&mut self, key: &V, mut accept: F) -> bool
    where
        F: FnMut(&V) -> bool,
    {
        let (root, removed) =
            remove_node::<V, P, C, F>(self.root.take(), key, &mut accept, &self.cmp);
        self.root = root;
        if removed {
            self.len -= 1;
        }
        removed
    }

    /// Removes one value stored under `key`, accepting any match.
    pub fn remove_key(&mut self, key: &V) -> bool {
        self.remove(key, |_| true)
    }

    /// Visits every stored value in the requested order. Chainable.
    ///
    /// A node with duplicates yields its whole list, in insertion order, at
    /// the point the node itself is visited.
    pub fn traverse<F>(&self, order: Order, mut visitor: F) -> &Self
    where
        F: FnMut(&V),
    {
        traverse::<V, P, F>(&self.root, order, &mut visitor);
        self
    }

    /// Folds over the in-order sequence with an explicit seed.
    /// An empty tree returns the seed unchanged.
    pub fn fold<A, F>(&self, seed: A, mut f: F) -> A
    where
        F: FnMut(A, &V) -> A,
    {
        let mut acc = Some(seed);
        self.traverse(Order::In, |value| {
            if let Some(current) = acc.take() {
                acc = Some(f(current, value));
            }
        });
        // The walk runs to completion, so the accumulator is always present.
        acc.unwrap()
    }

    /// Folds over the in-order sequence, seeding the accumulator with the
    /// first visited value. An empty tree returns `None`.
    pub fn reduce<F>(&self, mut f: F) -> Option<V>
    where
        V: Clone,
        F: FnMut(V, &V) -> V,
    {
        let mut acc: Option<V> = None;
        self.traverse(Order::In, |value| {
            acc = Some(match acc.take() {
                None => value.clone(),
                Some(current) => f(current, value),
            });
        });
        acc
    }

    #[cfg(any(test, feature = "consistency_check"))]
    pub fn check_consistency(&self) {
        use crate::node::{balance_factor, Node};

        fn key_of<V, P: KeyPolicy<V>>(node: &Node<P::Slot>) -> &V {
            P::key(&node.slot)
        }

        fn walk<V, P, C>(link: &Link<P::Slot>, cmp: &C, count: &mut usize) -> u32
        where
            P: KeyPolicy<V>,
            C: Fn(&V, &V) -> Ordering,
        {
            let Some(node) = link.as_deref() else {
                return 0;
            };
            let left_height = walk::<V, P, C>(&node.left, cmp, count);
            let right_height = walk::<V, P, C>(&node.right, cmp, count);

            // Check cached height and the AVL condition
            assert_eq!(node.height, 1 + left_height.max(right_height));
            assert!(balance_factor(node).abs() <= 1);

            // Check key order against both children
            if let Some(left) = node.left.as_deref() {
                assert_eq!(
                    cmp(key_of::<V, P>(left), key_of::<V, P>(node)),
                    Ordering::Less
                );
            }
            if let Some(right) = node.right.as_deref() {
                assert_eq!(
                    cmp(key_of::<V, P>(right), key_of::<V, P>(node)),
                    Ordering::Greater
                );
            }

            // Check slot occupancy: a linked node is never empty
            let occupancy = P::slot_len(&node.slot);
            assert!(occupancy > 0);
            *count += occupancy;

            node.height
        }

        let mut count = 0;
        walk::<V, P, C>(&self.root, &self.cmp, &mut count);
        assert_eq!(count, self.len);
    }
}

impl<V, P> AvlTree<V, P, fn(&V, &V) -> Ordering>
where
    V: Ord,
    P: KeyPolicy<V>,
{
    /// Creates an empty tree ordered by the values' own [`Ord`].
    pub fn with_natural_order() -> Self {
        Self::new(natural_order::<V>)
    }
}
