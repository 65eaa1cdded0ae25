//! The [`Tree`] handle the rest of the crate hangs off.
//!
//! # Examples
//!
//! ```
//! use bintree::{Order, Tree};
//!
//! let mut tree = Tree::new();
//!
//! // Nothing in here yet.
//! assert!(!tree.contains(&1));
//!
//! assert!(tree.insert(4));
//! assert!(tree.insert(3));
//! assert!(tree.insert(5));
//!
//! // Duplicates are turned away.
//! assert!(!tree.insert(4));
//! assert_eq!(tree.len(), 3);
//!
//! assert_eq!(tree.values(Order::InOrder), [&3, &4, &5]);
//!
//! // Deleting reports whether anything was there.
//! assert!(tree.delete(&3));
//! assert!(!tree.delete(&3));
//! assert_eq!(tree.values(Order::InOrder), [&4, &5]);
//! ```

use std::fmt;

use crate::compare::{Compare, Natural};
use crate::destroy::{Destroy, Release};
use crate::node::{Link, Node};
use crate::print::Pretty;
use crate::traverse::Order;

/// An ordered set of payloads kept in a binary search tree.
///
/// Payloads are ordered by the comparator `C` and handed to the destructor
/// `D` when the tree is torn down. After every [`insert`][Tree::insert] and
/// [`delete`][Tree::delete] the whole tree goes through a rebalancing pass
/// (see [`Tree::balance`]).
pub struct Tree<T, C = Natural, D = Release>
where
    D: Destroy<T>,
{
    root: Link<T>,
    count: usize,
    compare: C,
    destroy: D,
}

impl<T: Ord> Default for Tree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord> Tree<T> {
    /// Generates a new, empty `Tree` ordered by `T`'s own [`Ord`].
    pub fn new() -> Self {
        Self::with_callbacks(Natural, Release)
    }
}

impl<T, C> Tree<T, C>
where
    C: Compare<T>,
{
    /// Generates a new, empty `Tree` ordered by `compare`.
    ///
    /// # Examples
    ///
    /// ```
    /// use bintree::{Order, Tree};
    ///
    /// let mut tree = Tree::with_comparator(|a: &i32, b: &i32| b.cmp(a));
    /// for value in [1, 3, 2] {
    ///     tree.insert(value);
    /// }
    ///
    /// assert_eq!(tree.values(Order::InOrder), [&3, &2, &1]);
    /// ```
    pub fn with_comparator(compare: C) -> Self {
        Self::with_callbacks(compare, Release)
    }
}

impl<T, C, D> Tree<T, C, D>
where
    C: Compare<T>,
    D: Destroy<T>,
{
    /// Generates a new, empty `Tree` ordered by `compare` that hands every
    /// payload it still holds to `destroy` when it is torn down.
    pub fn with_callbacks(compare: C, destroy: D) -> Self {
        Self {
            root: Link::empty(),
            count: 0,
            compare,
            destroy,
        }
    }

    /// Inserts `value` and rebalances. Returns `false`, dropping `value`, if
    /// the tree already holds a payload comparing equal to it. The tree is
    /// rebalanced either way, which leaves an unchanged tree as it was.
    ///
    /// # Examples
    ///
    /// ```
    /// use bintree::Tree;
    ///
    /// let mut tree = Tree::new();
    ///
    /// assert!(tree.insert(1));
    /// assert!(!tree.insert(1));
    /// assert_eq!(tree.len(), 1);
    /// ```
    pub fn insert(&mut self, value: T) -> bool {
        let inserted = self.root.insert(value, &self.compare);
        if inserted {
            self.count += 1;
        }
        self.root.balance();

        log::trace!(
            "insert {}, {} entries",
            if inserted { "accepted" } else { "rejected" },
            self.count
        );
        inserted
    }

    /// Removes the payload comparing equal to `value` and rebalances. Returns
    /// `false` if there was no such payload. The tree is rebalanced either way.
    ///
    /// The removed payload is dropped, it is never passed to the destructor.
    /// Use [`Tree::take`] to get it back instead.
    ///
    /// # Examples
    ///
    /// ```
    /// use bintree::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(1);
    ///
    /// assert!(tree.delete(&1));
    /// assert!(!tree.delete(&1));
    /// assert!(tree.is_empty());
    /// ```
    pub fn delete(&mut self, value: &T) -> bool {
        self.take(value).is_some()
    }

    /// Removes the payload comparing equal to `value`, rebalances, and
    /// returns the removed payload.
    ///
    /// Removal never frees the node that held the payload. Instead payloads
    /// further down move up one node at a time and the one leaf left empty at
    /// the bottom is freed, so references obtained from
    /// [`Tree::traverse`] must be fetched again afterwards (the borrow checker
    /// already insists on that).
    ///
    /// # Examples
    ///
    /// ```
    /// use bintree::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(String::from("kept"));
    /// tree.insert(String::from("taken"));
    ///
    /// let taken = tree.take(&String::from("taken"));
    /// assert_eq!(taken.as_deref(), Some("taken"));
    /// assert_eq!(tree.len(), 1);
    /// ```
    pub fn take(&mut self, value: &T) -> Option<T> {
        let removed = self.root.delete(value, &self.compare);
        if removed.is_some() {
            self.count -= 1;
        }
        self.root.balance();

        log::trace!(
            "delete {}, {} entries",
            if removed.is_some() { "removed" } else { "missed" },
            self.count
        );
        removed
    }

    /// Whether the tree holds a payload comparing equal to `value`.
    pub fn contains(&self, value: &T) -> bool {
        self.get(value).is_some()
    }

    /// The stored payload comparing equal to `value`, if any. With an
    /// approximate comparator this may differ from `value`.
    pub fn get(&self, value: &T) -> Option<&T> {
        self.root.find(value, &self.compare).map(Node::data)
    }
}

impl<T, C, D> Tree<T, C, D>
where
    D: Destroy<T>,
{
    /// Tears the tree down, handing every payload to the destructor,
    /// children before their parents. Dropping the tree does the same.
    pub fn destroy(self) {
        drop(self);
    }

    /// Number of payloads stored.
    pub fn len(&self) -> usize {
        self.count
    }

    /// Whether the tree stores nothing.
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// The root node, `None` for an empty tree.
    pub fn root(&self) -> Option<&Node<T>> {
        self.root.node()
    }

    /// Number of levels in the tree, 0 when empty.
    pub fn height(&self) -> usize {
        self.root.depth()
    }

    /// All nodes in the given order. The result always holds exactly
    /// [`len`][Tree::len] nodes.
    ///
    /// # Examples
    ///
    /// ```
    /// use bintree::{Node, Order, Tree};
    ///
    /// let mut tree = Tree::new();
    /// for value in [4, 3, 5] {
    ///     tree.insert(value);
    /// }
    ///
    /// let data = |order| -> Vec<i32> {
    ///     tree.traverse(order).into_iter().map(Node::data).copied().collect()
    /// };
    /// assert_eq!(data(Order::PreOrder), [4, 3, 5]);
    /// assert_eq!(data(Order::InOrder), [3, 4, 5]);
    /// assert_eq!(data(Order::PostOrder), [3, 5, 4]);
    /// ```
    pub fn traverse(&self, order: Order) -> Vec<&Node<T>> {
        let nodes = self.root.traverse(order, self.count);
        debug_assert_eq!(nodes.len(), self.count);
        nodes
    }

    /// The payloads of [`Tree::traverse`].
    pub fn values(&self, order: Order) -> Vec<&T> {
        self.traverse(order).into_iter().map(Node::data).collect()
    }

    /// Whether, at every node, the depths of the two subtrees differ by at
    /// most one.
    ///
    /// Rebalancing only uses single rotations and stops when it detects that
    /// it is going in circles, so some shapes stay unbalanced:
    ///
    /// ```
    /// use bintree::Tree;
    ///
    /// let mut tree = Tree::new();
    /// for value in [1, 2, 3, 4, 5, 6] {
    ///     tree.insert(value);
    /// }
    /// assert!(tree.is_balanced());
    ///
    /// let mut tree = Tree::new();
    /// for value in [2, 0, 1] {
    ///     tree.insert(value);
    /// }
    /// assert!(!tree.is_balanced());
    /// ```
    pub fn is_balanced(&self) -> bool {
        self.root.is_balanced()
    }

    /// Rebalances the whole tree. This already happens after every insert and
    /// delete, so calling it again leaves the tree as it is.
    ///
    /// Starting at the root, each node rotates towards its shallower side
    /// while one of its subtrees is more than a level deeper than the other,
    /// then the same is done for its children. A node gives up, undoing its
    /// rotations, when a pair of subtree depths repeats within its last
    /// [`HISTORY_LEN`][crate::balance::HISTORY_LEN] rotations or after
    /// [`MAX_ROTATIONS`][crate::balance::MAX_ROTATIONS] rotations. Passes
    /// repeat until one rotates nothing, up to
    /// [`MAX_PASSES`][crate::balance::MAX_PASSES].
    pub fn balance(&mut self) {
        self.root.balance();
    }

    /// Renders the tree sideways using `to_str` for every payload. See
    /// [`crate::print`] for the layout.
    ///
    /// `to_str` writes into a buffer that is cleared before each call and cut
    /// down to [`LABEL_CAPACITY`][crate::print::LABEL_CAPACITY] bytes after.
    pub fn pretty<F>(&self, to_str: F) -> Pretty<'_, T, F>
    where
        F: Fn(&T, &mut String),
    {
        Pretty {
            root: &self.root,
            to_str,
        }
    }

    /// Prints [`Tree::pretty`] to stdout.
    pub fn print<F>(&self, to_str: F)
    where
        F: Fn(&T, &mut String),
    {
        print!("{}", self.pretty(to_str));
    }

    /// Prints the tree to stdout using each payload's [`Display`][fmt::Display]
    /// implementation.
    pub fn print_display(&self)
    where
        T: fmt::Display,
    {
        self.print(|value, buf| {
            use std::fmt::Write;
            // Writing to a `String` cannot fail.
            let _ = write!(buf, "{value}");
        });
    }
}

impl<T, C, D> Drop for Tree<T, C, D>
where
    D: Destroy<T>,
{
    fn drop(&mut self) {
        // Detach everything first so no drop below recurses, collecting in
        // node, right, left order which is post-order backwards.
        let mut pending: Vec<Box<Node<T>>> = self.root.0.take().into_iter().collect();
        let mut detached = Vec::with_capacity(self.count);
        while let Some(mut node) = pending.pop() {
            pending.extend(node.left.0.take());
            pending.extend(node.right.0.take());
            detached.push(node);
        }

        let released = detached.len();
        for node in detached.into_iter().rev() {
            self.destroy.destroy(node.data);
        }
        self.count = 0;

        log::trace!("tore down tree, released {released} payloads");
    }
}

impl<T, C, D> fmt::Debug for Tree<T, C, D>
where
    T: fmt::Debug,
    D: Destroy<T>,
{
    /// The payloads in pre-order, which pins down the shape of the tree.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tree")
            .field("count", &self.count)
            .field("pre_order", &self.values(Order::PreOrder))
            .finish()
    }
}
