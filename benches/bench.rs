use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

const NUMS: &[f64] = &[0., -69., 123406000., 0.1234, 2.718281828459045, 1.7976931348623157e308];

const TEXTS: &[&str] = &["0", "-69", "123406000", "0.1234", "2.718281828459045", "0.000000000000000000000000000001"];

fn benchmark_id(x: f64) -> BenchmarkId {
    BenchmarkId::from_parameter(ryu::Buffer::new().format(x))
}

fn shortest(c: &mut Criterion) {
    let mut g = c.benchmark_group("shortest");

    for num in NUMS {
        g.bench_with_input(benchmark_id(*num), num, |b, &num| {
            b.iter(|| fpconv::Buffer::new().format(black_box(num)).len() );
        });
    }
    g.finish();
}

fn ryu(c: &mut Criterion) {
    let mut g = c.benchmark_group("ryu");

    for num in NUMS {
        g.bench_with_input(benchmark_id(*num), num, |b, &num| {
            b.iter(|| ryu::Buffer::new().format_finite(black_box(num)).len() );
        });
    }
    g.finish();
}

fn std_shortest(c: &mut Criterion) {
    let mut g = c.benchmark_group("std_shortest");

    use std::io::Write;
    let mut buf = [0u8; 80];
    for num in NUMS {
        g.bench_with_input(benchmark_id(*num), num, |b, &num| {
            b.iter(|| write!(buf.as_mut_slice(), "{:e}", black_box(num)) );
        });
    }
    g.finish();
}

fn fixed(c: &mut Criterion) {
    let mut g = c.benchmark_group("fixed");

    let mut buf = [0u8; 400];
    for num in NUMS {
        g.bench_with_input(benchmark_id(*num), num, |b, &num| {
            b.iter(|| fpconv::to_fixed_f64(black_box(num), 6, &mut buf) );
        });
    }
    g.finish();
}

fn std_fixed(c: &mut Criterion) {
    let mut g = c.benchmark_group("std_fixed");

    use std::io::Write;
    let mut buf = [0u8; 400];
    for num in NUMS {
        g.bench_with_input(benchmark_id(*num), num, |b, &num| {
            b.iter(|| write!(buf.as_mut_slice(), "{:.6}", black_box(num)) );
        });
    }
    g.finish();
}

fn parse(c: &mut Criterion) {
    let mut g = c.benchmark_group("parse");

    for text in TEXTS {
        g.bench_with_input(BenchmarkId::from_parameter(text), text, |b, &text| {
            b.iter(|| fpconv::parse_f64(black_box(text.as_bytes())) );
        });
    }
    g.finish();
}

fn std_parse(c: &mut Criterion) {
    let mut g = c.benchmark_group("std_parse");

    for text in TEXTS {
        g.bench_with_input(BenchmarkId::from_parameter(text), text, |b, &text| {
            b.iter(|| black_box(text).parse::<f64>() );
        });
    }
    g.finish();
}

criterion_group!(bench, shortest, ryu, std_shortest, fixed, std_fixed, parse, std_parse);

criterion_main!(bench);
