use criterion::{black_box, criterion_group, criterion_main, Criterion};
use mp_math::{betainc, beta_curve_auc, ln_gamma};

fn bench_ln_gamma(c: &mut Criterion) {
    c.bench_function("ln_gamma_mid_range", |b| {
        b.iter(|| ln_gamma(black_box(4.2)))
    });
}

fn bench_betainc(c: &mut Criterion) {
    c.bench_function("betainc_a1_sweep", |b| {
        b.iter(|| {
            let mut acc = 0.0;
            for i in 0..500 {
                let x = i as f64 / 499.0;
                acc += betainc(black_box(1.0), black_box(1.5), x).unwrap();
            }
            acc
        })
    });
}

fn bench_exact_auc(c: &mut Criterion) {
    c.bench_function("beta_curve_auc", |b| {
        b.iter(|| beta_curve_auc(black_box(1.0), black_box(2.3)))
    });
}

criterion_group!(benches, bench_ln_gamma, bench_betainc, bench_exact_auc);
criterion_main!(benches);
