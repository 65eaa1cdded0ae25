use std::cell::RefCell;
use std::rc::Rc;

use bintree::{Approx, Natural, Node, Order, Tree};

fn tree_of(values: impl IntoIterator<Item = i32>) -> Tree<i32> {
    let mut tree = Tree::new();
    for value in values {
        tree.insert(value);
    }
    tree
}

fn data(tree: &Tree<i32>, order: Order) -> Vec<i32> {
    tree.traverse(order)
        .into_iter()
        .map(Node::data)
        .copied()
        .collect()
}

#[test]
fn insert_four_three_five() {
    let tree = tree_of([4, 3, 5]);
    let root = tree.root().unwrap();

    assert_eq!(data(&tree, Order::InOrder), [3, 4, 5]);
    assert_eq!(root.data(), &4);
    assert_eq!(root.left().map(Node::data), Some(&3));
    assert_eq!(root.right().map(Node::data), Some(&5));
    assert!(root.left().unwrap().is_leaf());
}

#[test]
fn delete_a_leaf() {
    let mut tree = tree_of([4, 3, 5]);

    assert!(tree.delete(&3));
    assert_eq!(tree.len(), 2);
    assert_eq!(data(&tree, Order::InOrder), [4, 5]);
}

#[test]
fn delete_the_smallest_root() {
    let mut tree = tree_of([3, 4, 5]);

    assert!(tree.delete(&3));
    let root = tree.root().unwrap();
    assert_eq!(root.data(), &4);
    assert_eq!(root.right().map(Node::data), Some(&5));
    assert_eq!(tree.len(), 2);
}

#[test]
fn three_orders() {
    let tree = tree_of([4, 3, 5]);

    assert_eq!(data(&tree, Order::PreOrder), [4, 3, 5]);
    assert_eq!(data(&tree, Order::InOrder), [3, 4, 5]);
    assert_eq!(data(&tree, Order::PostOrder), [3, 5, 4]);
}

#[test]
fn sequential_inserts_are_rebalanced() {
    for n in 1..=64 {
        let ascending = tree_of(1..=n);
        let descending = tree_of((1..=n).rev());

        assert!(ascending.is_balanced(), "ascending 1..={n}");
        assert!(descending.is_balanced(), "descending 1..={n}");
        assert_eq!(data(&ascending, Order::InOrder), (1..=n).collect::<Vec<_>>());
    }
}

#[test]
fn interleaved_inserts_and_deletes() {
    let mut tree = tree_of(0..100);
    for value in (0..100).step_by(3) {
        assert!(tree.delete(&value));
    }
    for value in (0..100).step_by(3) {
        assert!(!tree.contains(&value));
        assert!(!tree.delete(&value));
    }

    let expected: Vec<i32> = (0..100).filter(|value| value % 3 != 0).collect();
    assert_eq!(tree.len(), expected.len());
    assert_eq!(data(&tree, Order::InOrder), expected);
}

#[test]
fn custom_comparator_orders_traversal() {
    let mut tree = Tree::with_comparator(|a: &String, b: &String| {
        a.len().cmp(&b.len()).then_with(|| a.cmp(b))
    });
    for word in ["pear", "fig", "banana", "kiwi"] {
        tree.insert(word.to_string());
    }

    let words: Vec<&str> = tree
        .values(Order::InOrder)
        .into_iter()
        .map(String::as_str)
        .collect();
    assert_eq!(words, ["fig", "kiwi", "pear", "banana"]);
}

#[test]
fn approximate_floats_reject_near_duplicates() {
    let mut tree = Tree::with_comparator(Approx::default());

    assert!(tree.insert(0.5_f64));
    assert!(!tree.insert(0.50001));
    assert!(tree.insert(0.6));
    assert!(tree.delete(&0.50002));
    assert_eq!(tree.values(Order::InOrder), [&0.6]);
}

#[test]
fn destructor_sees_what_is_left() {
    let released = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&released);
    let mut tree = Tree::with_callbacks(Natural, move |value: i32| sink.borrow_mut().push(value));
    for value in 1..=10 {
        tree.insert(value);
    }
    for value in [2, 4, 6] {
        tree.delete(&value);
    }
    let expected = data_of(&tree, Order::PostOrder);
    tree.destroy();

    assert_eq!(*released.borrow(), expected);
    let mut sorted = released.borrow().clone();
    sorted.sort_unstable();
    assert_eq!(sorted, [1, 3, 5, 7, 8, 9, 10]);
}

fn data_of<C, D>(tree: &Tree<i32, C, D>, order: Order) -> Vec<i32>
where
    D: bintree::Destroy<i32>,
{
    tree.values(order).into_iter().copied().collect()
}

#[test]
fn pretty_uses_the_stringify_callback() {
    let tree = tree_of([4, 2, 6]);
    let rendered = tree
        .pretty(|value, buf| {
            buf.push('#');
            buf.push_str(&value.to_string());
        })
        .to_string();

    assert_eq!(rendered, "\n\t#2\n#4\n\t#6\n");
}
