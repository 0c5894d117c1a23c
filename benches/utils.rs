//! 工具函数性能基准测试

use chrono::Utc;
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use linkgate::utils::qr::encode_png;
use linkgate::utils::url_validator::validate_url;
use linkgate::utils::{TimeParser, extract_code, generate_random_code, is_valid_short_code};

fn bench_short_codes(c: &mut Criterion) {
    let mut group = c.benchmark_group("utils/short_code");

    group.bench_function("valid", |b| {
        b.iter(|| assert!(is_valid_short_code("my-link_1")));
    });

    group.bench_function("invalid", |b| {
        b.iter(|| assert!(!is_valid_short_code("'; DROP TABLE--")));
    });

    group.bench_function("extract_from_url", |b| {
        b.iter(|| assert_eq!(extract_code("https://s.example.com/abc123"), "abc123"));
    });

    for length in [6, 8, 10] {
        group.bench_with_input(BenchmarkId::new("generate", length), &length, |b, &length| {
            b.iter(|| assert_eq!(generate_random_code(length).len(), length));
        });
    }

    group.finish();
}

fn bench_validate_url(c: &mut Criterion) {
    let mut group = c.benchmark_group("utils/validate_url");

    group.bench_function("https", |b| {
        b.iter(|| validate_url("https://example.com/path/to/page?query=1#frag").is_ok());
    });

    group.bench_function("dangerous", |b| {
        b.iter(|| validate_url("javascript:alert(1)").is_err());
    });

    let long_url = format!("https://example.com/{}", "segment/".repeat(200));
    group.bench_function("long", |b| {
        b.iter(|| validate_url(&long_url).is_ok());
    });

    group.finish();
}

fn bench_parse_expire_time(c: &mut Criterion) {
    let now = Utc::now();
    let mut group = c.benchmark_group("utils/parse_expire_time");

    for input in ["1d", "2h30m", "2031-05-20T08:15", "2031-10-01T12:00:00Z"] {
        group.bench_with_input(BenchmarkId::from_parameter(input), &input, |b, input| {
            b.iter(|| TimeParser::parse_expire_time(input, now).expect("valid input"));
        });
    }

    group.finish();
}

fn bench_qr_encode(c: &mut Criterion) {
    let mut group = c.benchmark_group("utils/qr_png");

    for size in [128u32, 256, 512] {
        group.bench_with_input(BenchmarkId::new("size", size), &size, |b, &size| {
            b.iter(|| encode_png("https://s.example.com/abc123", size).expect("encode"));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_short_codes,
    bench_validate_url,
    bench_parse_expire_time,
    bench_qr_encode,
);
criterion_main!(benches);
