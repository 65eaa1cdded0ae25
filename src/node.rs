//! Nodes, the owning links between them, and the mutation engine.
//!
//! Every `Node` owns its two subtrees outright through a [`Link`]. Nothing
//! points back up the tree, so moving a subtree is a plain ownership transfer
//! and there is nothing to fix up afterwards. All walks here use a cursor over
//! `&mut Link` instead of recursion so a badly skewed tree never deepens the
//! call stack.

use std::cmp::Ordering;
use std::fmt;
use std::mem;

use crate::compare::Compare;

/// One stored entry. `Node`s are only ever handed out by shared reference (see
/// [`Tree::traverse`][crate::Tree::traverse]) and cannot be modified from
/// outside the tree.
pub struct Node<T> {
    pub(crate) data: T,
    pub(crate) left: Link<T>,
    pub(crate) right: Link<T>,
}

/// An owned, possibly empty, subtree.
pub(crate) struct Link<T>(pub(crate) Option<Box<Node<T>>>);

/// Which subtree a collapse promotes from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Side {
    Left,
    Right,
}

impl<T> Node<T> {
    fn new_boxed(data: T) -> Box<Self> {
        Box::new(Node {
            data,
            left: Link::empty(),
            right: Link::empty(),
        })
    }

    /// The payload held by this node.
    pub fn data(&self) -> &T {
        &self.data
    }

    /// The root of the left subtree, whose payloads all compare less than
    /// [`Node::data`].
    pub fn left(&self) -> Option<&Node<T>> {
        self.left.node()
    }

    /// The root of the right subtree, whose payloads all compare greater than
    /// [`Node::data`].
    pub fn right(&self) -> Option<&Node<T>> {
        self.right.node()
    }

    /// Whether this node has no children.
    pub fn is_leaf(&self) -> bool {
        self.left.is_empty() && self.right.is_empty()
    }

    fn child(&self, side: Side) -> &Link<T> {
        match side {
            Side::Left => &self.left,
            Side::Right => &self.right,
        }
    }

    fn child_mut(&mut self, side: Side) -> &mut Link<T> {
        match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        }
    }

    /// Swaps this node's payload with its in-order neighbour on `side` (the
    /// largest payload of the left subtree, or the smallest of the right one)
    /// and returns the link holding that neighbour. The subtree on `side` must
    /// not be empty.
    ///
    /// When the child on `side` has no subtree facing back towards `self`, the
    /// neighbour is that child itself.
    fn promote_from(&mut self, side: Side) -> &mut Link<T> {
        let Node { data, left, right } = self;
        let mut link = match side {
            Side::Left => left,
            Side::Right => right,
        };

        let inward = side.opposite();
        while link.node().map_or(false, |node| !node.child(inward).is_empty()) {
            link = link
                .node_mut()
                .expect("Loop condition implies a node")
                .child_mut(inward);
        }

        let neighbour = link
            .node_mut()
            .expect("Promoting from a side implies a child there");
        mem::swap(data, &mut neighbour.data);
        link
    }
}

impl Side {
    fn opposite(self) -> Self {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

/// Shows the payload and the payloads of the two children only, so printing
/// a node never walks the whole subtree.
impl<T> fmt::Debug for Node<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("data", &self.data)
            .field("left", &self.left().map(Node::data))
            .field("right", &self.right().map(Node::data))
            .finish()
    }
}

impl<T> Link<T> {
    pub(crate) fn empty() -> Self {
        Link(None)
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.0.is_none()
    }

    pub(crate) fn node(&self) -> Option<&Node<T>> {
        self.0.as_deref()
    }

    pub(crate) fn node_mut(&mut self) -> Option<&mut Node<T>> {
        self.0.as_deref_mut()
    }

    pub(crate) fn take(&mut self) -> Self {
        Link(self.0.take())
    }

    /// Inserts `data` at the empty slot its ordering leads to. Returns `false`
    /// without touching the tree when a payload comparing equal is already
    /// present.
    pub(crate) fn insert<C>(&mut self, data: T, compare: &C) -> bool
    where
        C: Compare<T>,
    {
        let mut link = self;
        while let Link(Some(node)) = link {
            link = match compare.compare(&data, &node.data) {
                Ordering::Less => &mut node.left,
                Ordering::Greater => &mut node.right,
                Ordering::Equal => return false,
            };
        }
        *link = Link(Some(Node::new_boxed(data)));
        true
    }

    /// Finds the node whose payload compares equal to `data`.
    pub(crate) fn find<C>(&self, data: &T, compare: &C) -> Option<&Node<T>>
    where
        C: Compare<T>,
    {
        let mut link = self;
        while let Some(node) = link.node() {
            link = match compare.compare(data, &node.data) {
                Ordering::Less => &node.left,
                Ordering::Greater => &node.right,
                Ordering::Equal => return Some(node),
            };
        }
        None
    }

    /// Removes the entry comparing equal to `data` and returns its payload, or
    /// `None` if there is no such entry. See [`Link::collapse`] for how the
    /// node graph changes.
    pub(crate) fn delete<C>(&mut self, data: &T, compare: &C) -> Option<T>
    where
        C: Compare<T>,
    {
        let mut link = self;
        loop {
            let ordering = compare.compare(data, &link.node()?.data);
            link = match (ordering, link) {
                (Ordering::Equal, found) => return Some(found.collapse()),
                (Ordering::Less, Link(Some(node))) => &mut node.left,
                (Ordering::Greater, Link(Some(node))) => &mut node.right,
                (_, Link(None)) => unreachable!("`node()` just returned a node"),
            };
        }
    }

    /// Removes the payload held at this (non-empty) link by promoting
    /// payloads upward: the node takes the payload of its in-order neighbour
    /// from the left subtree if it has one, otherwise from the right subtree,
    /// and the same is repeated at the node that neighbour came from until a
    /// leaf is reached. That leaf is the only node freed.
    ///
    /// ```text
    ///      4                 3
    ///     / \               / \
    ///    3   5   collapse  2   5
    ///   /        ------>
    ///  2
    /// ```
    ///
    /// ## Panics
    ///
    /// When called on an empty link.
    fn collapse(&mut self) -> T {
        let mut link = self;
        loop {
            let side = match link.node() {
                Some(node) if !node.left.is_empty() => Side::Left,
                Some(node) if !node.right.is_empty() => Side::Right,
                _ => break,
            };
            link = link
                .node_mut()
                .expect("Collapsing only continues into children")
                .promote_from(side);
        }

        let leaf = link.0.take().expect("Cannot collapse an empty link");
        debug_assert!(leaf.is_leaf());
        leaf.data
    }
}
