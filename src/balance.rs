//! The rebalancing pass.
//!
//! Nodes cache no heights or balance factors. Whenever a pass runs, each node
//! measures the depth of its two subtrees and rotates while one side is more
//! than a level deeper than the other. Single rotations cannot fix every shape
//! (a left child that is itself right heavy just swings from one side to the
//! other) so each node keeps a short history of the depth pairs it has seen
//! and gives up as soon as one repeats, putting back whatever it rotated.
//! Passes repeat until one of them leaves the tree untouched. See [the
//! Wikipedia page][wiki] for the rotation terminology.
//!
//! [wiki]: https://en.wikipedia.org/wiki/Tree_rotation

use crate::node::{Link, Node};

/// How many of the most recent `(left_depth, right_depth)` pairs a node
/// remembers while rotating.
pub const HISTORY_LEN: usize = 5;

/// Upper bound on the rotations applied at a single node during one pass.
pub const MAX_ROTATIONS: usize = 64;

/// Upper bound on the passes a single [`Tree::balance`][crate::Tree::balance]
/// makes over the tree.
pub const MAX_PASSES: usize = 16;

/// A single rotation at one link.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Rotation {
    Left,
    Right,
}

impl Rotation {
    fn inverse(self) -> Self {
        match self {
            Rotation::Left => Rotation::Right,
            Rotation::Right => Rotation::Left,
        }
    }
}

/// Ring buffer over the last [`HISTORY_LEN`] depth pairs seen at one node.
struct DepthHistory {
    pairs: [Option<(usize, usize)>; HISTORY_LEN],
    next: usize,
}

impl DepthHistory {
    fn new() -> Self {
        Self {
            pairs: [None; HISTORY_LEN],
            next: 0,
        }
    }

    fn contains(&self, pair: (usize, usize)) -> bool {
        self.pairs.contains(&Some(pair))
    }

    fn record(&mut self, pair: (usize, usize)) {
        self.pairs[self.next] = Some(pair);
        self.next = (self.next + 1) % HISTORY_LEN;
    }
}

impl<T> Node<T> {
    /// Depths of the left and right subtrees.
    fn depths(&self) -> (usize, usize) {
        (self.left.depth(), self.right.depth())
    }
}

impl<T> Link<T> {
    /// Number of levels in this subtree, 0 when empty.
    pub(crate) fn depth(&self) -> usize {
        let mut deepest = 0;
        let mut stack: Vec<_> = self.node().into_iter().map(|n| (n, 1)).collect();
        while let Some((node, level)) = stack.pop() {
            deepest = deepest.max(level);
            stack.extend(node.left().map(|n| (n, level + 1)));
            stack.extend(node.right().map(|n| (n, level + 1)));
        }
        deepest
    }

    /// Whether every node in this subtree has subtrees whose depths differ by
    /// at most one.
    pub(crate) fn is_balanced(&self) -> bool {
        self.checked_depth().is_some()
    }

    /// The depth of this subtree if it is balanced.
    fn checked_depth(&self) -> Option<usize> {
        match self.node() {
            None => Some(0),
            Some(node) => {
                let left = node.left.checked_depth()?;
                let right = node.right.checked_depth()?;
                (left.abs_diff(right) <= 1).then(|| left.max(right) + 1)
            }
        }
    }

    /// Rebalances every node of this subtree, repeating parents-first passes
    /// until one of them leaves every node as it found it. Once that happens
    /// another call changes nothing.
    pub(crate) fn balance(&mut self) {
        for pass in 1..=MAX_PASSES {
            if !self.balance_pass() {
                return;
            }
            log::trace!("balance pass {pass} rotated nodes, going again");
        }
        log::debug!("tree still changing after {MAX_PASSES} balance passes");
    }

    /// One pass over every node, parents before children. Returns whether any
    /// node was left rotated.
    fn balance_pass(&mut self) -> bool {
        let mut rotated = false;
        let mut pending = vec![self];
        while let Some(link) = pending.pop() {
            rotated |= link.balance_root();
            if let Some(node) = link.node_mut() {
                let Node { left, right, .. } = node;
                pending.push(right);
                pending.push(left);
            }
        }
        rotated
    }

    /// Rotates at the root of this subtree until its two sides are within a
    /// level of each other and returns whether it rotated at all. When a depth
    /// pair repeats or [`MAX_ROTATIONS`] is hit the rotations made here are
    /// undone, leaving the node exactly as it was, and `false` is returned.
    fn balance_root(&mut self) -> bool {
        let mut history = DepthHistory::new();
        let mut applied = Vec::new();

        for _ in 0..MAX_ROTATIONS {
            let Some(root) = self.node() else {
                return false;
            };
            let (left_depth, right_depth) = root.depths();

            if history.contains((left_depth, right_depth)) {
                log::debug!(
                    "depths ({left_depth}, {right_depth}) repeated, leaving node unbalanced"
                );
                self.undo(&applied);
                return false;
            }

            let rotation = if right_depth > left_depth + 1 {
                Rotation::Left
            } else if left_depth > right_depth + 1 {
                Rotation::Right
            } else {
                return !applied.is_empty();
            };
            self.rotate(rotation);
            applied.push(rotation);
            history.record((left_depth, right_depth));
        }

        log::debug!("stopped rebalancing node after {MAX_ROTATIONS} rotations");
        self.undo(&applied);
        false
    }

    fn rotate(&mut self, rotation: Rotation) {
        match rotation {
            Rotation::Left => self.rotate_left(),
            Rotation::Right => self.rotate_right(),
        }
    }

    /// Reverts `applied`, most recent rotation first.
    fn undo(&mut self, applied: &[Rotation]) {
        for rotation in applied.iter().rev() {
            self.rotate(rotation.inverse());
        }
    }

    /// Rotate self to the right. This moves the left child up vertically and self down vertically.
    /// Used to rebalance the tree when the left child is too deep. As such, it must only be called
    /// when there _is_ a left child.
    ///
    /// ## Panics
    ///
    /// When called on an empty link or a node without a left child.
    ///
    /// # Diagram
    ///
    /// ```text
    ///   old_root (i.e. "self")    new_root
    ///    /     \                  /     \
    /// new_root  z     rotate ->  x    old_root
    ///  / \                               /  \
    /// x   y                             y    z
    /// ```
    pub(crate) fn rotate_right(&mut self) {
        let mut old_root = self.0.take().expect("Cannot rotate empty tree/node.");
        let mut new_root = old_root.left.0.take().expect("Rotate right => left child");

        old_root.left = new_root.right.take();
        new_root.right = Link(Some(old_root));
        self.0 = Some(new_root);
    }

    /// Mirror image of [`Link::rotate_right`]: the right child moves up and
    /// takes self as its left child.
    ///
    /// ## Panics
    ///
    /// When called on an empty link or a node without a right child.
    ///
    /// # Diagram
    ///
    /// ```text
    ///   old_root (i.e. "self")       new_root
    ///    /     \                     /     \
    ///   x    new_root  rotate ->  old_root  z
    ///         / \                   /  \
    ///        y   z                 x    y
    /// ```
    pub(crate) fn rotate_left(&mut self) {
        let mut old_root = self.0.take().expect("Rotating a tree requires a root");
        let mut new_root = old_root.right.0.take().expect("Rotate left => right child");

        old_root.right = new_root.left.take();
        new_root.left = Link(Some(old_root));
        self.0 = Some(new_root);
    }
}
