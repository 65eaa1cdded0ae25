//! Materialized walks over the node graph.

use crate::node::{Link, Node};

/// The order in which [`Tree::traverse`][crate::Tree::traverse] visits nodes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Order {
    /// A node, then its left subtree, then its right subtree.
    PreOrder,
    /// The left subtree, then the node, then the right subtree. This visits
    /// payloads in ascending order.
    InOrder,
    /// The left subtree, then the right subtree, then the node. Every node
    /// comes after all of its descendants.
    PostOrder,
}

impl Order {
    /// All three orders.
    pub const ALL: [Order; 3] = [Order::PreOrder, Order::InOrder, Order::PostOrder];
}

impl<T> Link<T> {
    /// Collects every node of this subtree in the given order. `size_hint` is
    /// only used to size the output.
    pub(crate) fn traverse(&self, order: Order, size_hint: usize) -> Vec<&Node<T>> {
        let mut out = Vec::with_capacity(size_hint);
        match order {
            Order::PreOrder => self.walk_node_first(&mut out, |n| (n.right(), n.left())),
            Order::InOrder => self.walk_in_order(&mut out),
            Order::PostOrder => {
                // Node, right, left is post-order backwards.
                self.walk_node_first(&mut out, |n| (n.left(), n.right()));
                out.reverse();
            }
        }
        out
    }

    /// Visits each node before its children. `children` returns them in the
    /// opposite order they should be visited in, because they go onto a stack.
    fn walk_node_first<'a, F>(&'a self, out: &mut Vec<&'a Node<T>>, children: F)
    where
        F: Fn(&'a Node<T>) -> (Option<&'a Node<T>>, Option<&'a Node<T>>),
    {
        let mut stack: Vec<&Node<T>> = self.node().into_iter().collect();
        while let Some(node) = stack.pop() {
            out.push(node);
            let (visit_last, visit_next) = children(node);
            stack.extend(visit_last);
            stack.extend(visit_next);
        }
    }

    fn walk_in_order<'a>(&'a self, out: &mut Vec<&'a Node<T>>) {
        let mut stack = Vec::new();
        let mut current = self.node();
        loop {
            while let Some(node) = current {
                stack.push(node);
                current = node.left();
            }
            let Some(node) = stack.pop() else {
                break;
            };
            out.push(node);
            current = node.right();
        }
    }
}
