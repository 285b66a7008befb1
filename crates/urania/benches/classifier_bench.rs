use criterion::{black_box, criterion_group, criterion_main, Criterion};
use urania::vedic::sidereal_placement;
use urania::western::tropical_sign;

fn bench_classifiers(c: &mut Criterion) {
    let longitudes: Vec<f64> = (0..360).map(|d| d as f64 + 0.5).collect();

    c.bench_function("sidereal_placement_360", |b| {
        b.iter(|| {
            for lon in &longitudes {
                black_box(sidereal_placement(black_box(*lon)));
            }
        })
    });

    c.bench_function("tropical_sign_360", |b| {
        b.iter(|| {
            for lon in &longitudes {
                black_box(tropical_sign(black_box(*lon)));
            }
        })
    });
}

criterion_group!(benches, bench_classifiers);
criterion_main!(benches);
