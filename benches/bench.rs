use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BatchSize, Criterion, Throughput};
use flattree::{FlattenOptions, NodeData, NodeId, Tree};

fn example_tree() -> Tree<&'static str> {
    let mut tree = Tree::new();
    let root = tree.insert(tree.root(), NodeData::new("<root>").identifier("<root>"));
    tree.insert(root, NodeData::new("Alpha").identifier("alpha"));
    let bravo = tree.insert(root, NodeData::new("Bravo").identifier("bravo"));
    let charlie = tree.insert(bravo, NodeData::new("Charlie").identifier("charlie"));
    let delta = tree.insert(charlie, NodeData::new("Delta").identifier("delta"));
    tree.insert(delta, NodeData::new("Echo").identifier("echo"));
    tree.insert(delta, NodeData::new("Foxtrot").identifier("foxtrot"));
    tree.insert(charlie, NodeData::new("Golf").identifier("golf"));
    let hotel = tree.insert(bravo, NodeData::new("Hotel").identifier("hotel"));
    let india = tree.insert(hotel, NodeData::new("India").identifier("india"));
    tree.insert(india, NodeData::new("Juliet").identifier("juliet"));
    tree.insert(bravo, NodeData::new("Kilo").identifier("kilo"));
    tree
}

/// Balanced tree with the given branching factor and depth.
fn generated_tree(branching: usize, depth: usize) -> (Tree<u32>, NodeId) {
    let mut tree = Tree::new();
    let mut identifier = 0_u32;
    let mut level = vec![tree.root()];
    let mut probe = tree.root();
    for _ in 0..depth {
        let mut next = Vec::new();
        for &parent in &level {
            for _ in 0..branching {
                let node = tree.insert(parent, NodeData::new("node").identifier(identifier));
                identifier += 1;
                next.push(node);
            }
        }
        probe = *next.last().expect("branching factor is non-zero");
        level = next;
    }
    (tree, probe)
}

fn flatten(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("flatten");
    group.throughput(Throughput::Elements(1));

    let open_all = FlattenOptions::<&str>::new().open_all();
    group.bench_function("empty", |bencher| {
        bencher.iter_batched(
            Tree::<&str>::new,
            |mut tree| black_box(tree.flatten(black_box(&open_all)).unwrap()),
            BatchSize::SmallInput,
        );
    });

    let tree = example_tree();
    group.bench_function("example-open-all", |bencher| {
        bencher.iter_batched(
            || tree.clone(),
            |mut tree| black_box(tree.flatten(black_box(&open_all)).unwrap()),
            BatchSize::SmallInput,
        );
    });

    let options = FlattenOptions::new().open_identifiers(["<root>", "bravo", "hotel"]);
    group.bench_function("example-open-set", |bencher| {
        bencher.iter_batched(
            || tree.clone(),
            |mut tree| black_box(tree.flatten(black_box(&options)).unwrap()),
            BatchSize::SmallInput,
        );
    });

    let (generated, _) = generated_tree(10, 4);
    let open_all = FlattenOptions::<u32>::new().open_all();
    group.bench_function("generated-11k", |bencher| {
        bencher.iter_batched(
            || generated.clone(),
            |mut tree| black_box(tree.flatten(black_box(&open_all)).unwrap()),
            BatchSize::SmallInput,
        );
    });

    group.finish();
}

fn reflatten(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("reflatten");
    group.throughput(Throughput::Elements(1));

    let open_all = FlattenOptions::<u32>::new().open_all();
    let (mut generated, probe) = generated_tree(10, 4);
    generated.flatten(&open_all).unwrap();

    group.bench_function("leaf-sibling-list", |bencher| {
        bencher.iter_batched(
            || generated.clone(),
            |mut tree| black_box(tree.reflatten(black_box(probe), black_box(&open_all)).unwrap()),
            BatchSize::SmallInput,
        );
    });

    let midpoint = generated.parent(probe).and_then(|p| generated.parent(p));
    let midpoint = midpoint.expect("generated tree is deep enough");
    group.bench_function("inner-sibling-list", |bencher| {
        bencher.iter_batched(
            || generated.clone(),
            |mut tree| {
                black_box(tree.reflatten(black_box(midpoint), black_box(&open_all)).unwrap())
            },
            BatchSize::SmallInput,
        );
    });

    group.finish();
}

/// Create flamegraphs with `cargo bench --bench bench -- --profile-time=5`
#[cfg(unix)]
fn profiled() -> Criterion {
    use pprof::criterion::{Output, PProfProfiler};
    Criterion::default().with_profiler(PProfProfiler::new(100, Output::Flamegraph(None)))
}
#[cfg(not(unix))]
fn profiled() -> Criterion {
    Criterion::default()
}

criterion_group! {
    name = benches;
    config = profiled();
    targets = flatten, reflatten
}
criterion_main!(benches);
