//! An ordered list of values sharing one key.
//!
//! The non-unique key policy stores every value for a key in one of these,
//! in insertion order, inside the owning tree node. The head of the list is
//! the node's representative key. Links are not raw prev/next pointers; the
//! list owns its elements through a growable ring buffer, which keeps both
//! end operations O(1).

use std::collections::VecDeque;

/// An ordered sequence with O(1) append at both ends, predicate-based
/// removal and ordered traversal.
///
/// ```
/// use avl_keys::OrderedList;
/// let mut list = OrderedList::new();
/// list.push(1).push(2).push(3);
/// assert_eq!(list.len(), 3);
/// assert!(list.remove_first(|v| *v == 2));
/// assert_eq!(list.fold(Vec::new(), |mut acc, v| { acc.push(*v); acc }), [1, 3]);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct OrderedList<V> {
    items: VecDeque<V>,
}

impl<V> OrderedList<V> {
    /// Creates an empty list.
    pub fn new() -> Self {
        Self {
            items: VecDeque::new(),
        }
    }

    /// Creates a list holding a single value.
    pub fn with_value(value: V) -> Self {
        let mut list = Self::new();
        list.push(value);
        list
    }

    /// Returns the number of values in the list.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if the list contains no values.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns a reference to the first value.
    pub fn head(&self) -> Option<&V> {
        self.items.front()
    }

    /// Appends a value at the tail.
    pub fn push(&mut self, value: V) -> &mut Self {
        self.items.push_back(value);
        self
    }

    /// Removes and returns the tail value.
    pub fn pop(&mut self) -> Option<V> {
        self.items.pop_back()
    }

    /// Prepends a value at the head.
    pub fn unshift(&mut self, value: V) -> &mut Self {
        self.items.push_front(value);
        self
    }

    /// Removes and returns the head value.
    pub fn shift(&mut self) -> Option<V> {
        self.items.pop_front()
    }

    /// Returns a reference to the value at `index`, head first.
    pub fn get(&self, index: usize) -> Option<&V> {
        self.items.get(index)
    }

    /// Returns a reference to the first value matching the predicate.
    pub fn find<F>(&self, mut predicate: F) -> Option<&V>
    where
        F: FnMut(&V) -> bool,
    {
        self.items.iter().find(|value| predicate(value))
    }

    /// Removes the first value matching the predicate.
    /// Returns whether a value was removed.
    pub fn remove_first<F>(&mut self, mut predicate: F) -> bool
    where
        F: FnMut(&V) -> bool,
    {
        match self.items.iter().position(|value| predicate(value)) {
            Some(index) => {
                self.items.remove(index);
                true
            }
            None => false,
        }
    }

    /// Removes the value at `index`.
    /// Returns false if the index is out of range.
    pub fn remove_at(&mut self, index: usize) -> bool {
        self.items.remove(index).is_some()
    }

    /// Removes the first value equal to the given one.
    pub fn remove_value(&mut self, value: &V) -> bool
    where
        V: PartialEq,
    {
        self.remove_first(|stored| stored == value)
    }

    /// Swaps the first values matching each predicate in place.
    /// Returns false and leaves the list unchanged if either has no match.
    pub fn swap<A, B>(&mut self, mut first: A, mut second: B) -> bool
    where
        A: FnMut(&V) -> bool,
        B: FnMut(&V) -> bool,
    {
        let a = self.items.iter().position(|value| first(value));
        let b = self.items.iter().position(|value| second(value));
        match (a, b) {
            (Some(a), Some(b)) => {
                self.items.swap(a, b);
                true
            }
            _ => false,
        }
    }

    /// Visits every value from head to tail.
    pub fn for_each<F>(&self, mut visitor: F)
    where
        F: FnMut(&V),
    {
        for value in &self.items {
            visitor(value);
        }
    }

    /// Iterates the values from head to tail.
    pub fn iter(&self) -> std::collections::vec_deque::Iter<'_, V> {
        self.items.iter()
    }

    /// Folds the values from head to tail with an explicit seed.
    pub fn fold<A, F>(&self, seed: A, f: F) -> A
    where
        F: FnMut(A, &V) -> A,
    {
        self.items.iter().fold(seed, f)
    }

    /// Folds the values from head to tail, seeding the accumulator with the
    /// head value. Returns `None` on an empty list.
    pub fn reduce<F>(&self, f: F) -> Option<V>
    where
        V: Clone,
        F: FnMut(V, &V) -> V,
    {
        let mut iter = self.items.iter();
        let first = iter.next()?.clone();
        Some(iter.fold(first, f))
    }

    /// Drops every value.
    pub fn clear(&mut self) -> &mut Self {
        self.items.clear();
        self
    }
}

impl<'a, V> IntoIterator for &'a OrderedList<V> {
    type Item = &'a V;
    type IntoIter = std::collections::vec_deque::Iter<'a, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<V> FromIterator<V> for OrderedList<V> {
    fn from_iter<I: IntoIterator<Item = V>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}
