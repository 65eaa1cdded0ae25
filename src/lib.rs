//! A generic, in-memory Binary Search Tree (BST) that rebalances itself with
//! rotations after every change.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored records. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` stores a payload and
//! will sometimes have child `Node`s. The most important invariants of a BST
//! are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    payload less than its own payload.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    payload greater than its own payload.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Searching takes `O(height)` where `height` is the longest path from the
//! root `Node` to a leaf `Node`. This crate keeps the height down with a
//! best-effort rebalancing pass: after every insert and delete each node
//! rotates towards its shallower side until its subtrees are within a level of
//! each other. Unlike an AVL tree nothing is cached per node and single
//! rotations cannot straighten every shape, so the pass detects when it is
//! going in circles and stops there. Sequential inserts, the classic worst
//! case for a plain BST, come out balanced.
//!
//! Payloads are ordered by a [`Compare`] implementation (any
//! `Fn(&T, &T) -> Ordering` works, [`Natural`] uses [`Ord`]) and equal
//! payloads are rejected. When the tree is torn down every payload it still
//! holds goes to a [`Destroy`] implementation.
//!
//! ```
//! use bintree::{Order, Tree};
//!
//! let mut tree = Tree::new();
//! for value in 1..=15 {
//!     tree.insert(value);
//! }
//!
//! assert!(tree.is_balanced());
//! assert_eq!(tree.height(), 5);
//! assert_eq!(tree.values(Order::InOrder).len(), 15);
//! ```

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod balance;
pub mod compare;
pub mod destroy;
mod node;
pub mod print;
mod traverse;
mod tree;

#[cfg(test)]
mod test;

pub use compare::{Approx, Compare, Natural};
pub use destroy::{Destroy, Release};
pub use node::Node;
pub use print::Pretty;
pub use traverse::Order;
pub use tree::Tree;
