use criterion::{black_box, criterion_group, criterion_main, Bencher, Criterion, Throughput};
use rand::{rngs::StdRng, Rng, SeedableRng};
use rtree_geometry::prelude::*;

const NUM_ENTRIES: usize = 10_000;

struct DataSet<const D: usize> {
    points: Vec<Point<D>>,
    rectangles: Vec<Rectangle<D>>,
}

impl<const D: usize> DataSet<D> {
    fn generate(seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let points = (0..NUM_ENTRIES)
            .map(|_| Point::new(std::array::from_fn(|_| rng.random_range(-100.0..100.0))))
            .collect();
        let rectangles = (0..NUM_ENTRIES)
            .map(|_| {
                let corner = Point::new(std::array::from_fn(|_| rng.random_range(-100.0..100.0)));
                let lengths = std::array::from_fn(|_| rng.random_range(0.5..10.0));
                Rectangle::from_corner_and_lengths(corner, lengths).expect("legal rectangle")
            })
            .collect();
        DataSet { points, rectangles }
    }
}

pub fn criterion_benchmark(c: &mut Criterion) {
    let data_2d: DataSet<2> = DataSet::generate(2);
    let data_3d: DataSet<3> = DataSet::generate(3);
    pruning_bounds_benchmark(c, &data_2d, &data_3d);
    rectangle_algebra_benchmark(c, &data_2d, &data_3d);
}

fn pruning_bounds_benchmark(c: &mut Criterion, data_2d: &DataSet<2>, data_3d: &DataSet<3>) {
    let mut group = c.benchmark_group("Pruning Bounds");
    group.throughput(Throughput::Elements(NUM_ENTRIES as u64));
    group.bench_function("min_dist 2d", |b| bench_min_dist(b, data_2d));
    group.bench_function("min_dist 3d", |b| bench_min_dist(b, data_3d));
    group.bench_function("min_max_dist 2d", |b| bench_min_max_dist(b, data_2d));
    group.bench_function("min_max_dist 3d", |b| bench_min_max_dist(b, data_3d));
    group.finish();
}

fn rectangle_algebra_benchmark(c: &mut Criterion, data_2d: &DataSet<2>, data_3d: &DataSet<3>) {
    let mut group = c.benchmark_group("Rectangle Algebra");
    group.throughput(Throughput::Elements(NUM_ENTRIES as u64));
    group.bench_function("intersects 2d", |b| bench_intersects(b, data_2d));
    group.bench_function("intersects 3d", |b| bench_intersects(b, data_3d));
    group.bench_function("bound_all 2d", |b| bench_bound_all(b, data_2d));
    group.bench_function("bound_all 3d", |b| bench_bound_all(b, data_3d));
    group.finish();
}

fn bench_min_dist<const D: usize>(bencher: &mut Bencher, data: &DataSet<D>) {
    bencher.iter(|| {
        data.points
            .iter()
            .zip(data.rectangles.iter())
            .map(|(p, r)| p.min_dist(black_box(r)))
            .sum::<FloatSize>()
    })
}

fn bench_min_max_dist<const D: usize>(bencher: &mut Bencher, data: &DataSet<D>) {
    bencher.iter(|| {
        data.points
            .iter()
            .zip(data.rectangles.iter())
            .map(|(p, r)| p.min_max_dist(black_box(r)))
            .fold(FloatSize::INFINITY, FloatSize::min)
    })
}

fn bench_intersects<const D: usize>(bencher: &mut Bencher, data: &DataSet<D>) {
    let query = data.rectangles[0];
    bencher.iter(|| {
        data.rectangles
            .iter()
            .filter(|r| black_box(&query).intersects(*r))
            .count()
    })
}

fn bench_bound_all<const D: usize>(bencher: &mut Bencher, data: &DataSet<D>) {
    bencher.iter(|| Rectangle::bound_all(black_box(&data.rectangles)))
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
