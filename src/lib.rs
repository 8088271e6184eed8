//! An AVL tree with a pluggable comparator and unique or non-unique key
//! policies.
//!
//! The ordering is a caller-supplied three-way comparator, so keys need no
//! [`Ord`] implementation of their own. The duplication policy is chosen at
//! construction time: [`UniqueKeys`] keeps one value per key and overwrites
//! on a repeat insert, [`NonUniqueKeys`] keeps every value sharing a key in
//! insertion order inside a per-node [`OrderedList`]. Both policies run
//! through the same rotation-based balance engine, so the height stays
//! within the AVL bound across any insert/delete sequence.
//!
//! ```
//! use avl_keys::{Order, TreeBuilder};
//!
//! let mut tree = TreeBuilder::new()
//!     .comparator(|a: &i32, b: &i32| a.cmp(b))
//!     .build_non_unique()
//!     .unwrap();
//!
//! tree.insert(2).insert(1).insert(2);
//! assert_eq!(tree.len(), 3);
//!
//! let mut values = Vec::new();
//! tree.traverse(Order::In, |v| values.push(*v));
//! assert_eq!(values, [1, 2, 2]);
//!
//! assert!(tree.remove_key(&2));
//! assert!(tree.remove_key(&2));
//! assert!(!tree.remove_key(&2));
//! assert!(tree.get(&2).is_none());
//! ```

mod builder;
mod list;
mod node;
mod policy;
mod tree;

pub use builder::{BuildError, TreeBuilder};
pub use list::OrderedList;
pub use policy::{KeyPolicy, NonUniqueKeys, SlotRemoval, UniqueKeys};
pub use tree::{natural_order, AvlTree, NonUniqueAvlTree, Order, UniqueAvlTree};
