use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use bintree::{Order, Tree};

/// Returns how many nodes are needed to fill a binary tree with `num_levels` levels.
fn num_nodes_in_full_tree(num_levels: u32) -> usize {
    2usize.pow(num_levels) - 1
}

/// Builds a tree by inserting values in ascending order. Without rebalancing this would be a
/// single chain.
fn get_ascending_tree(num_nodes: usize) -> Tree<i32> {
    let mut tree = Tree::new();
    for x in 0..num_nodes {
        tree.insert(x as i32);
    }

    tree
}

/// Builds a tree by inserting values so that, even without any rebalancing, the resultant tree
/// is full.
fn get_full_tree(num_levels: u32) -> Tree<i32> {
    let xs = (0..num_nodes_in_full_tree(num_levels) as i32).collect::<Vec<_>>();
    let mut tree = Tree::new();
    let mut pending = vec![&xs[..]];
    while let Some(xs) = pending.pop() {
        if xs.is_empty() {
            continue;
        }
        let mid = xs.len() / 2;
        tree.insert(xs[mid]);
        pending.push(&xs[mid + 1..]);
        pending.push(&xs[..mid]);
    }

    tree
}

/// Helper to bench a function on a tree. It creates a group for the given name and closure and
/// runs it against trees of various sizes, built ascending and full, before finishing the group.
///
/// Trees cannot be cloned so every iteration rebuilds its tree outside the timed section.
fn bench_helper(c: &mut Criterion, name: &str, f: impl Fn(&mut Tree<i32>, i32)) {
    let mut group = c.benchmark_group(name);

    for num_levels in [3, 7, 9] {
        let num_nodes = num_nodes_in_full_tree(num_levels);
        let largest_element_in_tree = num_nodes - 1;

        let builders: [(&str, Box<dyn Fn() -> Tree<i32>>); 2] = [
            ("ascending", Box::new(move || get_ascending_tree(num_nodes))),
            ("full", Box::new(move || get_full_tree(num_levels))),
        ];
        for (name, build) in &builders {
            let id = BenchmarkId::new(*name, largest_element_in_tree);

            group.bench_function(id, |b| {
                b.iter_custom(|iters| {
                    let mut time = std::time::Duration::ZERO;
                    for _ in 0..iters {
                        let mut tree = black_box(build());
                        let instant = std::time::Instant::now();
                        f(&mut tree, black_box(largest_element_in_tree as i32));
                        let elapsed = instant.elapsed();
                        time += elapsed;
                    }
                    time
                })
            });
        }
    }

    group.finish();
}

pub fn criterion_benchmark(c: &mut Criterion) {
    bench_helper(c, "find", |tree, i| {
        let _value = black_box(tree.get(&i));
    });
    bench_helper(c, "delete", |tree, i| {
        tree.delete(&i);
    });
    bench_helper(c, "delete-root", |tree, _| {
        let root = tree.root().map(|node| *node.data());
        if let Some(root) = root {
            tree.delete(&root);
        }
    });

    bench_helper(c, "insert", |tree, i| {
        tree.insert(i + 1);
    });

    bench_helper(c, "find-miss", |tree, i| {
        let _value = black_box(tree.get(&(i + 1)));
    });
    bench_helper(c, "delete-miss", |tree, i| {
        tree.delete(&(i + 1));
    });

    bench_helper(c, "traverse", |tree, _| {
        for order in Order::ALL {
            black_box(tree.traverse(order));
        }
    });
    bench_helper(c, "balance", |tree, _| {
        tree.balance();
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
