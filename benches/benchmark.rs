use criterion::{black_box, criterion_group, criterion_main, Criterion};
use exact_vc::exact::{BranchAndBound, TreeCoverSolver};
use exact_vc::generator::random_tree;
use exact_vc::graph::OriginalGraph;

fn tree_dp(c: &mut Criterion) {
    let tree = random_tree(100_000, 42).unwrap();
    let edges: Vec<_> = (1..1_000_000).map(|v| (v, v + 1)).collect();
    let path = OriginalGraph::build(1_000_000, &edges).unwrap();

    c.bench_function("tree_dp_random_tree_100k", |b| {
        b.iter(|| TreeCoverSolver::with_graph(black_box(&tree)).compute())
    });

    c.bench_function("tree_dp_random_tree_100k_members", |b| {
        b.iter(|| {
            TreeCoverSolver::with_graph(black_box(&tree))
                .members(true)
                .compute()
        })
    });

    c.bench_function("tree_dp_path_1m", |b| {
        b.iter(|| TreeCoverSolver::with_graph(black_box(&path)).compute())
    });
}

fn branch_and_bound(c: &mut Criterion) {
    let tree = random_tree(40, 7).unwrap();
    let mut edges = vec![];
    for u in 1..=14 {
        for v in (u + 1)..=14 {
            if (u * 7 + v * 13) % 5 < 2 {
                edges.push((u, v));
            }
        }
    }
    let graph = OriginalGraph::build(14, &edges).unwrap();

    c.bench_function("branch_and_bound_random_tree_40", |b| {
        b.iter(|| BranchAndBound::with_graph(black_box(&tree)).compute())
    });

    c.bench_function("branch_and_bound_dense_14", |b| {
        b.iter(|| BranchAndBound::with_graph(black_box(&graph)).compute())
    });
}

criterion_group! {
    name = benches;
    config = Criterion::default().sample_size(10);
    targets = tree_dp, branch_and_bound
}
criterion_main!(benches);
