//! Key-duplication policies and the recursive algorithms they share.
//!
//! The two policies differ only in what a node's data slot holds and how a
//! slot reacts to a same-key insert or delete. Everything structural — the
//! comparator-driven descent, the rebalancing on unwind, the successor
//! splice — is written once, generic over the policy, so both variants run
//! through the same balance engine.

use std::cmp::Ordering;

use crate::list::OrderedList;
use crate::node::{balance, splice, Link, Node};
use crate::tree::Order;

/// Outcome of filtering a node's data slot during deletion.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SlotRemoval {
    /// No stored value matched the acceptance predicate.
    NotFound,
    /// A value was removed. `emptied` reports whether the slot no longer
    /// holds any value, which makes the node itself due for structural
    /// removal.
    Removed { emptied: bool },
}

/// Per-node storage semantics of a key-duplication policy.
///
/// A policy decides what one tree node carries for one distinct key and how
/// that carrier reacts to inserts and deletes of the same key. The tree
/// algorithms below call back into these hooks and never touch the slot
/// contents themselves.
pub trait KeyPolicy<V> {
    /// What a node stores: the raw value for [`UniqueKeys`], an
    /// [`OrderedList`] of values for [`NonUniqueKeys`].
    type Slot;

    /// Wraps the first value inserted under a novel key.
    fn new_slot(value: V) -> Self::Slot;

    /// The representative key used for ordering and navigation.
    fn key(slot: &Self::Slot) -> &V;

    /// Folds a same-key insert into an existing slot.
    /// Returns whether the logical value count grew.
    fn merge(slot: &mut Self::Slot, value: V) -> bool;

    /// Removes one value accepted by the predicate, if any.
    fn remove_value<F>(slot: &mut Self::Slot, accept: &mut F) -> SlotRemoval
    where
        F: FnMut(&V) -> bool;

    /// Yields every logical value of the slot, in slot order.
    fn visit<F>(slot: &Self::Slot, visitor: &mut F)
    where
        F: FnMut(&V);

    /// Number of logical values in the slot.
    fn slot_len(slot: &Self::Slot) -> usize;
}

/// One value per key. Inserting an existing key overwrites the stored value.
#[derive(Clone, Copy, Debug, Default)]
pub struct UniqueKeys;

impl<V> KeyPolicy<V> for UniqueKeys {
    type Slot = V;

    fn new_slot(value: V) -> V {
        value
    }

    fn key(slot: &V) -> &V {
        slot
    }

    fn merge(slot: &mut V, value: V) -> bool {
        *slot = value;
        false
    }

    fn remove_value<F>(slot: &mut V, accept: &mut F) -> SlotRemoval
    where
        F: FnMut(&V) -> bool,
    {
        if accept(slot) {
            SlotRemoval::Removed { emptied: true }
        } else {
            SlotRemoval::NotFound
        }
    }

    fn visit<F>(slot: &V, visitor: &mut F)
    where
        F: FnMut(&V),
    {
        visitor(slot);
    }

    fn slot_len(_slot: &V) -> usize {
        1
    }
}

/// All values sharing a key are retained, in insertion order, inside one
/// node-local [`OrderedList`]. The list head is the representative key.
#[derive(Clone, Copy, Debug, Default)]
pub struct NonUniqueKeys;

impl<V> KeyPolicy<V> for NonUniqueKeys {
    type Slot = OrderedList<V>;

    fn new_slot(value: V) -> OrderedList<V> {
        OrderedList::with_value(value)
    }

    fn key(slot: &OrderedList<V>) -> &V {
        // A linked node always holds at least one value.
        slot.head().unwrap()
    }

    fn merge(slot: &mut OrderedList<V>, value: V) -> bool {
        slot.push(value);
        true
    }

    fn remove_value<F>(slot: &mut OrderedList<V>, accept: &mut F) -> SlotRemoval
    where
        F: FnMut(&V) -> bool,
    {
        if slot.remove_first(&mut *accept) {
            SlotRemoval::Removed {
                emptied: slot.is_empty(),
            }
        } else {
            SlotRemoval::NotFound
        }
    }

    fn visit<F>(slot: &OrderedList<V>, visitor: &mut F)
    where
        F: FnMut(&V),
    {
        slot.for_each(&mut *visitor);
    }

    fn slot_len(slot: &OrderedList<V>) -> usize {
        slot.len()
    }
}

/// Recursive insert. Creates a leaf when the key is novel, merges into the
/// existing slot when the comparator reports equality, and rebalances every
/// ancestor on the unwind path otherwise. Returns the new subtree root and
/// whether the logical value count grew.
pub(crate) fn add_node<V, P, C>(link: Link<P::Slot>, value: V, cmp: &C) -> (Box<Node<P::Slot>>, bool)
where
    P: KeyPolicy<V>,
    C: Fn(&V, &V) -> Ordering,
{
    let Some(mut node) = link else {
        return (Node::new(P::new_slot(value)), true);
    };
    match cmp(&value, P::key(&node.slot)) {
        // A key match changes no structure, so no rebalancing either.
        Ordering::Equal => {
            let grew = P::merge(&mut node.slot, value);
            (node, grew)
        }
        Ordering::Less => {
            let (child, grew) = add_node::<V, P, C>(node.left.take(), value, cmp);
            node.left = Some(child);
            (balance(node), grew)
        }
        Ordering::Greater => {
            let (child, grew) = add_node::<V, P, C>(node.right.take(), value, cmp);
            node.right = Some(child);
            (balance(node), grew)
        }
    }
}

/// Recursive delete. Descends by the comparator, lets the policy filter the
/// matching slot with the acceptance predicate, and splices the node out if
/// its slot empties. Returns the new subtree root and whether a value was
/// actually removed.
pub(crate) fn remove_node<V, P, C, F>(
    link: Link<P::Slot>,
    key: &V,
    accept: &mut F,
    cmp: &C,
) -> (Link<P::Slot>, bool)
where
    P: KeyPolicy<V>,
    C: Fn(&V, &V) -> Ordering,
    F: FnMut(&V) -> bool,
{
    let Some(mut node) = link else {
        return (None, false);
    };
    match cmp(key, P::key(&node.slot)) {
        Ordering::Less => {
            let (child, removed) = remove_node::<V, P, C, F>(node.left.take(), key, accept, cmp);
            node.left = child;
            if removed {
                (Some(balance(node)), true)
            } else {
                (Some(node), false)
            }
        }
        Ordering::Greater => {
            let (child, removed) = remove_node::<V, P, C, F>(node.right.take(), key, accept, cmp);
            node.right = child;
            if removed {
                (Some(balance(node)), true)
            } else {
                (Some(node), false)
            }
        }
        Ordering::Equal => match P::remove_value(&mut node.slot, accept) {
            SlotRemoval::NotFound => (Some(node), false),
            // Dropping one duplicate leaves the node in place and subtree
            // heights untouched, so rebalancing is skipped on purpose.
            SlotRemoval::Removed { emptied: false } => (Some(node), true),
            SlotRemoval::Removed { emptied: true } => (splice(node), true),
        },
    }
}

/// Guided binary search. The navigation comparator steers the descent and
/// `Equal` stops it at the current node's slot.
pub(crate) fn find_node<'a, V, P, N>(link: &'a Link<P::Slot>, navigate: &N) -> Option<&'a P::Slot>
where
    P: KeyPolicy<V>,
    N: Fn(&V) -> Ordering,
{
    let node = link.as_deref()?;
    match navigate(P::key(&node.slot)) {
        Ordering::Equal => Some(&node.slot),
        Ordering::Less => find_node::<V, P, N>(&node.left, navigate),
        Ordering::Greater => find_node::<V, P, N>(&node.right, navigate),
    }
}

/// Recursive walk in the requested order. Each node yields one value under
/// [`UniqueKeys`] and every list element in list order under
/// [`NonUniqueKeys`], at the point the node itself is visited.
pub(crate) fn traverse<V, P, F>(link: &Link<P::Slot>, order: Order, visitor: &mut F)
where
    P: KeyPolicy<V>,
    F: FnMut(&V),
{
    let Some(node) = link.as_deref() else {
        return;
    };
    match order {
        Order::Pre => {
            P::visit(&node.slot, visitor);
            traverse::<V, P, F>(&node.left, order, visitor);
            traverse::<V, P, F>(&node.right, order, visitor);
        }
        Order::In => {
            traverse::<V, P, F>(&node.left, order, visitor);
            P::visit(&node.slot, visitor);
            traverse::<V, P, F>(&node.right, order, visitor);
        }
        Order::Post => {
            traverse::<V, P, F>(&node.left, order, visitor);
            traverse::<V, P, F>(&node.right, order, visitor);
            P::visit(&node.slot, visitor);
        }
    }
}
