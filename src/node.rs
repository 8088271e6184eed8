//! Tree nodes and the balance engine shared by both key policies.
//!
//! Nodes own their children exclusively through `Box`, so subtree surgery is
//! expressed as functions that consume a node and return the new subtree
//! root. Rebalancing happens on the unwind path of the recursive insert and
//! delete algorithms, one [`balance`] call per ancestor.

use std::cmp;

pub(crate) type Link<S> = Option<Box<Node<S>>>;

/// A single tree node. The data slot is a raw value for unique keys or an
/// ordered list of values for non-unique keys; the balance engine never
/// looks inside it.
#[derive(Debug)]
pub(crate) struct Node<S> {
    pub(crate) slot: S,
    pub(crate) left: Link<S>,
    pub(crate) right: Link<S>,
    pub(crate) height: u32,
}

impl<S> Node<S> {
    pub(crate) fn new(slot: S) -> Box<Self> {
        Box::new(Node {
            slot,
            left: None,
            right: None,
            height: 1,
        })
    }
}

/// Height of a subtree, where an absent child counts as 0.
pub(crate) fn height<S>(link: &Link<S>) -> u32 {
    link.as_ref().map_or(0, |node| node.height)
}

/// Height difference between the right and left subtree.
/// Stays within -1..=1 after every public tree operation.
pub(crate) fn balance_factor<S>(node: &Node<S>) -> i32 {
    height(&node.right) as i32 - height(&node.left) as i32
}

fn adjust_height<S>(node: &mut Node<S>) {
    node.height = cmp::max(height(&node.left), height(&node.right)) + 1;
}

/// Promotes the left child to the root of the subtree.
fn rotate_right<S>(mut node: Box<Node<S>>) -> Box<Node<S>> {
    let mut root = node.left.take().unwrap();
    node.left = root.right.take();
    adjust_height(&mut node);
    root.right = Some(node);
    adjust_height(&mut root);
    root
}

/// Promotes the right child to the root of the subtree.
fn rotate_left<S>(mut node: Box<Node<S>>) -> Box<Node<S>> {
    let mut root = node.right.take().unwrap();
    node.right = root.left.take();
    adjust_height(&mut node);
    root.left = Some(node);
    adjust_height(&mut root);
    root
}

/// Adjusts the node's height and restores the AVL condition at this node.
///
/// The caller guarantees the balance factor does not exceed +2 or -2, which
/// always holds one level above a single insert or delete. A factor of +2
/// with a left-leaning right child (or the mirror case) needs the inner
/// rotation first, then the outer one.
pub(crate) fn balance<S>(mut node: Box<Node<S>>) -> Box<Node<S>> {
    adjust_height(&mut node);
    match balance_factor(&node) {
        2 => {
            if balance_factor(node.right.as_ref().unwrap()) < 0 {
                node.right = Some(rotate_right(node.right.take().unwrap()));
            }
            rotate_left(node)
        }
        -2 => {
            if balance_factor(node.left.as_ref().unwrap()) > 0 {
                node.left = Some(rotate_left(node.left.take().unwrap()));
            }
            rotate_right(node)
        }
        _ => node,
    }
}

/// Structurally removes a node whose slot has been emptied and returns the
/// new subtree root.
///
/// With two children the in-order successor's slot (the leftmost slot of the
/// right subtree) replaces this node's slot, and the successor node is
/// deleted from the right subtree instead.
pub(crate) fn splice<S>(mut node: Box<Node<S>>) -> Link<S> {
    match (node.left.take(), node.right.take()) {
        (None, None) => None,
        (Some(child), None) | (None, Some(child)) => Some(child),
        (Some(left), Some(right)) => {
            let (right, successor) = take_min(right);
            node.slot = successor;
            node.left = Some(left);
            node.right = right;
            Some(balance(node))
        }
    }
}

/// Unlinks the leftmost node of a subtree and returns its slot along with
/// the rebalanced remainder. The leftmost node has at most a right child.
fn take_min<S>(mut node: Box<Node<S>>) -> (Link<S>, S) {
    match node.left.take() {
        None => {
            let leaf = *node;
            (leaf.right, leaf.slot)
        }
        Some(left) => {
            let (left, min_slot) = take_min(left);
            node.left = left;
            (Some(balance(node)), min_slot)
        }
    }
}
