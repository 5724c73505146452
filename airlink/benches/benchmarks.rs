use airlink::{evaluate, LinkConfig, PathGeometry};
use criterion::{criterion_group, criterion_main, Criterion};

fn link_budget(c: &mut Criterion) {
    let mut group = c.benchmark_group("Link Budget");

    let config = LinkConfig::builder()
        .freq_mhz(2400.0)
        .bandwidth_mhz(10.0)
        .distance_km(100.0)
        .tx_height_m(10.0)
        .rx_height_m(100.0)
        .build()
        .unwrap();

    group.bench_with_input("brlos_100km", &config, |b, config| {
        b.iter(|| evaluate(config))
    });

    group.bench_with_input("geometry_1000pt", &config, |b, config| {
        b.iter(|| PathGeometry::new(config, 1000))
    });
}

criterion_group!(benches, link_budget);
criterion_main!(benches);
