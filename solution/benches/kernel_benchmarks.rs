use criterion::{black_box, criterion_group, criterion_main, Criterion};
use model::Instance;
use solution::{weighted_tardiness, CompletionMatrix, Permutation};

fn make_instance(n: usize, m: usize) -> Instance {
    let p = (0..n)
        .map(|i| (0..m).map(|j| ((i * 7 + j * 3) % 23 + 1) as i64).collect())
        .collect();
    let d = (0..n).map(|i| (i * 11 % 50) as i64).collect();
    let w = (0..n).map(|i| 1.0 + (i % 5) as f64).collect();
    Instance::new(p, d, w).unwrap()
}

fn bench_completion_kernel(c: &mut Criterion) {
    let instance = make_instance(200, 10);
    let perm = Permutation::identity(200);
    let mut completion = CompletionMatrix::new(200, 10);
    c.bench_function("completion_matrix_fill_200x10", |b| {
        b.iter(|| completion.fill(black_box(&instance), black_box(perm.as_slice())))
    });
}

fn bench_weighted_tardiness(c: &mut Criterion) {
    let instance = make_instance(200, 10);
    let perm = Permutation::identity(200);
    let mut completion = CompletionMatrix::new(200, 10);
    c.bench_function("weighted_tardiness_200x10", |b| {
        b.iter(|| {
            weighted_tardiness(
                black_box(&instance),
                black_box(perm.as_slice()),
                &mut completion,
                true,
            )
        })
    });
}

criterion_group!(benches, bench_completion_kernel, bench_weighted_tardiness);
criterion_main!(benches);
