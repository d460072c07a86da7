use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use keel::{Graph, NodeId};
use std::collections::VecDeque;

/// Grid of `side * side` nodes, each linked to its right and lower neighbor.
fn grid(side: usize) -> Graph<usize> {
    let mut graph = Graph::with_capacity(false, side * side);
    for key in 0..side * side {
        graph.add_node(key);
    }
    for row in 0..side {
        for col in 0..side {
            let key = row * side + col;
            if col + 1 < side {
                graph.add_edge(&key, &(key + 1)).unwrap();
            }
            if row + 1 < side {
                graph.add_edge(&key, &(key + side)).unwrap();
            }
        }
    }
    graph
}

fn bench_graph_build(c: &mut Criterion) {
    let size = 1000;

    c.bench_function("graph_build_chain", |b| {
        b.iter(|| {
            let mut graph: Graph<usize> = Graph::with_capacity(true, size);
            for i in 0..size {
                graph.add_node(i);
            }
            // Chain: 0->1->...->N
            for i in 0..size - 1 {
                graph.add_edge(&i, &(i + 1)).unwrap();
            }
            black_box(graph.edge_count())
        });
    });

    c.bench_function("graph_lookup", |b| {
        let graph = grid(32);
        b.iter(|| {
            let mut found = 0;
            for key in 0..graph.node_count() {
                found += usize::from(graph.get_node(black_box(&key)).is_some());
            }
            black_box(found)
        });
    });
}

fn bench_graph_traversal(c: &mut Criterion) {
    let mut group = c.benchmark_group("graph_traversal");
    for side in [16, 64, 128] {
        let graph = grid(side);

        group.bench_with_input(BenchmarkId::new("breadth", side), &graph, |b, g| {
            b.iter(|| g.traverse_breadth(black_box(&0), |node| {
                black_box(node.key());
            }))
        });

        group.bench_with_input(BenchmarkId::new("breadth_vec_deque", side), &graph, |b, g| {
            let mut queue: VecDeque<NodeId> = VecDeque::with_capacity(g.node_count());
            b.iter(|| g.traverse_breadth_with(black_box(&0), &mut queue, |node| {
                black_box(node.key());
            }))
        });

        group.bench_with_input(BenchmarkId::new("depth", side), &graph, |b, g| {
            b.iter(|| g.traverse_depth(black_box(&0), |node| {
                black_box(node.key());
            }))
        });
    }
    group.finish();
}

fn bench_graph_print(c: &mut Criterion) {
    let graph = grid(64);
    c.bench_function("graph_print", |b| b.iter(|| black_box(graph.print())));
}

criterion_group!(
    benches,
    bench_graph_build,
    bench_graph_traversal,
    bench_graph_print
);
criterion_main!(benches);
