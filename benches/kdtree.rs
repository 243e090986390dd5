use criterion::{criterion_group, criterion_main, Criterion};
use kdsearch::kdtree::{KDTree, KDTreeBuilder, KDTreeIndex};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rstar::RTree;

fn generate_points(n: usize) -> Vec<[f64; 2]> {
    let mut rng = StdRng::seed_from_u64(42);
    (0..n)
        .map(|_| [rng.gen_range(-180.0..180.0), rng.gen_range(-90.0..90.0)])
        .collect()
}

fn construct_kdtree(points: &[[f64; 2]]) -> KDTree<[f64; 2]> {
    let mut builder = KDTreeBuilder::with_capacity(points.len());
    builder.extend(points.iter().copied());
    builder.finish().unwrap()
}

fn construct_rstar(points: Vec<[f64; 2]>) -> RTree<[f64; 2]> {
    RTree::bulk_load(points)
}

pub fn criterion_benchmark(c: &mut Criterion) {
    let points = generate_points(100_000);

    c.bench_function("construction (kdsearch)", |b| {
        b.iter(|| construct_kdtree(&points))
    });

    c.bench_function("construction (rstar bulk)", |b| {
        b.iter(|| construct_rstar(points.to_vec()))
    });

    let kdtree = construct_kdtree(&points);
    let rstar_tree = construct_rstar(points.to_vec());
    let (center, radius) = ([-111.9, 40.6], 2.5);

    c.bench_function("search (kdsearch)", |b| {
        b.iter(|| kdtree.search(&center, radius).unwrap())
    });

    c.bench_function("search (rstar)", |b| {
        b.iter(|| {
            rstar_tree
                .locate_within_distance(center, radius * radius)
                .count()
        })
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
