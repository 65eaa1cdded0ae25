//! Sideways rendering of a tree for humans.
//!
//! The tree is written in order, one payload per line, indented with one tab
//! per level below the root. Reading it with your head tilted to the left
//! shows the tree shape, with the largest payloads on top:
//!
//! ```
//! use bintree::Tree;
//!
//! let mut tree = Tree::new();
//! for value in [2, 1, 3] {
//!     tree.insert(value);
//! }
//!
//! let rendered = tree.pretty(|value: &i32, buf: &mut String| buf.push_str(&value.to_string()));
//! assert_eq!(rendered.to_string(), "\n\t1\n2\n\t3\n");
//! ```

use std::fmt;

use crate::node::{Link, Node};

/// How many bytes of a single payload's rendering are kept. Anything a
/// stringify callback writes past this is cut off at the preceding char
/// boundary.
pub const LABEL_CAPACITY: usize = 128;

/// [`Display`][fmt::Display] adapter returned by
/// [`Tree::pretty`][crate::Tree::pretty].
pub struct Pretty<'a, T, F> {
    pub(crate) root: &'a Link<T>,
    pub(crate) to_str: F,
}

impl<T, F> fmt::Display for Pretty<'_, T, F>
where
    F: Fn(&T, &mut String),
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut label = String::with_capacity(LABEL_CAPACITY);
        let mut stack: Vec<(&Node<T>, usize)> = Vec::new();
        let mut current = self.root.node().map(|n| (n, 0));

        loop {
            while let Some((node, level)) = current {
                stack.push((node, level));
                current = node.left().map(|n| (n, level + 1));
            }
            let Some((node, level)) = stack.pop() else {
                break;
            };

            label.clear();
            (self.to_str)(&node.data, &mut label);
            truncate_label(&mut label);

            writeln!(f)?;
            for _ in 0..level {
                f.write_str("\t")?;
            }
            f.write_str(&label)?;

            current = node.right().map(|n| (n, level + 1));
        }

        writeln!(f)
    }
}

fn truncate_label(label: &mut String) {
    if label.len() <= LABEL_CAPACITY {
        return;
    }
    let mut end = LABEL_CAPACITY;
    while !label.is_char_boundary(end) {
        end -= 1;
    }
    label.truncate(end);
}
