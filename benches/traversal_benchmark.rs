use criterion::{black_box, criterion_group, criterion_main, Criterion};
use std::io;
use vertex_walk::{has_strictly_increasing_path, leaves, max, reachable, write_vertex_vals, Graph};

/// Binary-tree shaped graph with back edges to the root every 16 vertices.
fn tree_with_cycles(size: usize) -> Graph<u64> {
    let values = (0..size as u64).collect();
    let adjacency = (0..size)
        .map(|i| {
            let mut nbrs: Vec<usize> = [2 * i + 1, 2 * i + 2].into_iter().filter(|&c| c < size).collect();
            if i % 16 == 15 {
                nbrs.push(0);
            }
            nbrs
        })
        .collect();
    Graph::from_adjacency(values, adjacency)
}

/// Chain: 0->1->...->N
fn chain(size: usize) -> Graph<u64> {
    let values = (0..size as u64).collect();
    let adjacency = (0..size)
        .map(|i| if i + 1 < size { vec![i + 1] } else { vec![] })
        .collect();
    Graph::from_adjacency(values, adjacency)
}

fn bench_traversals(c: &mut Criterion) {
    let size = 10_000;
    let tree = tree_with_cycles(size);
    let root = tree.ids().next().unwrap();

    c.bench_function("reachable_tree_10k", |b| {
        b.iter(|| black_box(reachable(&tree, root).unwrap()));
    });

    c.bench_function("max_tree_10k", |b| {
        b.iter(|| black_box(max(&tree, root).unwrap()));
    });

    c.bench_function("leaves_tree_10k", |b| {
        b.iter(|| black_box(leaves(&tree, root).unwrap()));
    });

    c.bench_function("write_vertex_vals_tree_10k", |b| {
        b.iter(|| write_vertex_vals(&tree, root, &mut io::sink()).unwrap());
    });
}

fn bench_increasing_path(c: &mut Criterion) {
    let size = 100_000;
    let graph = chain(size);
    let start = graph.ids().next().unwrap();
    let end = graph.ids().last().unwrap();

    c.bench_function("increasing_path_chain_100k", |b| {
        b.iter(|| black_box(has_strictly_increasing_path(&graph, start, end).unwrap()));
    });
}

criterion_group!(benches, bench_traversals, bench_increasing_path);
criterion_main!(benches);
