use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use dggs_cells::*;

// --- Fixtures ---

fn fixed_cell_res5() -> CellIndex {
  CellIndex(0x85283473fffffff)
}

fn fixed_cell_res9() -> CellIndex {
  CellIndex(0x8928342e20fffff)
}

// --- Benchmark functions ---

fn bench_field_access(c: &mut Criterion) {
  let h = fixed_cell_res9();
  let mut group = c.benchmark_group("field_access");
  group.bench_function("get_resolution", |b| b.iter(|| get_resolution(black_box(h))));
  group.bench_function("get_base_cell", |b| b.iter(|| get_base_cell(black_box(h))));
  group.bench_function("is_pentagon", |b| b.iter(|| is_pentagon(black_box(h))));
  group.finish();
}

fn bench_cell_to_parent(c: &mut Criterion) {
  let h = fixed_cell_res9();
  let mut group = c.benchmark_group("cell_to_parent");
  for parent_res in [0, 3, 6].iter() {
    group.bench_with_input(BenchmarkId::from_parameter(parent_res), parent_res, |b, &r| {
      b.iter(|| cell_to_parent(black_box(h), black_box(r)));
    });
  }
  group.finish();
}

fn bench_children_enumeration(c: &mut Criterion) {
  let mut group = c.benchmark_group("children");

  for depth in [1, 2, 3].iter() {
    let parent = fixed_cell_res5();
    let child_res = 5 + depth;
    let count = children(parent, child_res).unwrap().count() as u64;
    group.throughput(Throughput::Elements(count));
    group.bench_with_input(BenchmarkId::new("hexagon", depth), &child_res, |b, &r| {
      b.iter(|| children(black_box(parent), black_box(r)).unwrap().count());
    });
  }

  for depth in [1, 2, 3].iter() {
    let parent = base_cell_to_index(4);
    let count = children(parent, *depth).unwrap().count() as u64;
    group.throughput(Throughput::Elements(count));
    group.bench_with_input(BenchmarkId::new("pentagon", depth), depth, |b, &r| {
      b.iter(|| children(black_box(parent), black_box(r)).unwrap().count());
    });
  }

  group.finish();
}

fn bench_string_conv(c: &mut Criterion) {
  let h = fixed_cell_res9();
  let text = cell_to_string_alloc(h);
  let mut group = c.benchmark_group("string_conv");
  group.bench_function("cell_to_string_alloc", |b| b.iter(|| cell_to_string_alloc(black_box(h))));
  group.bench_function("string_to_cell", |b| b.iter(|| string_to_cell(black_box(&text))));
  group.finish();
}

criterion_group!(
  benches,
  bench_field_access,
  bench_cell_to_parent,
  bench_children_enumeration,
  bench_string_conv
);
criterion_main!(benches);
