use std::time::Duration;
use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use bonding_curve_core::curve::power::power;
use bonding_curve_core::curve::{get_price, get_supply, CurveParameters};
use bonding_curve_core::{U256, WAD};

#[inline]
fn w(n: u64) -> U256 {
    U256::from(n) * WAD
}

fn bench_power(c: &mut Criterion) {
    let mut g = c.benchmark_group("power");
    g.warm_up_time(Duration::from_secs(2));
    g.measurement_time(Duration::from_secs(5));
    g.throughput(Throughput::Elements(1));

    // (rótulo, baseN, baseD, expN, expD): cobre optimal/general log e exp
    let cases: [(&str, U256, U256, u64, u64); 5] = [
        ("opt_log_opt_exp", U256::from(2u8), U256::one(), 1, 2),
        ("opt_log_gen_exp", w(1000), WAD, 3, 1),
        ("gen_log_opt_exp", U256::from(1_000_000u32), U256::one(), 1, 3),
        ("gen_log_gen_exp", w(123_456_789), WAD, 3, 2),
        ("sub_unit", U256::one(), U256::from(4u8), 1, 2),
    ];

    for (label, bn, bd, en, ed) in cases {
        let (en, ed) = (U256::from(en), U256::from(ed));
        g.bench_function(label, |b| {
            b.iter(|| {
                let r = power(black_box(bn), black_box(bd), black_box(en), black_box(ed)).unwrap();
                black_box(r);
            });
        });
    }
    g.finish();
}

fn bench_curve(c: &mut Criterion) {
    let mut g = c.benchmark_group("curve");
    let params = CurveParameters::default();
    g.bench_function("get_price_1e6", |b| {
        b.iter(|| black_box(get_price(black_box(w(1_000_000)), &params).unwrap()));
    });
    g.bench_function("get_supply_5000", |b| {
        b.iter(|| black_box(get_supply(black_box(w(5000)), &params).unwrap()));
    });
    g.finish();
}

criterion_group!(benches, bench_power, bench_curve);
criterion_main!(benches);
