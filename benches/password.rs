//! 密码校验与访问判定基准测试

use chrono::{Duration, Utc};
use criterion::{Criterion, criterion_group, criterion_main};
use linkgate::services::{AccessDecision, evaluate_access};
use linkgate::storage::ShortLink;
use linkgate::utils::password::{hash_password, verify_password};

fn protected_link(password: &str) -> ShortLink {
    ShortLink {
        id: 1,
        hash: "bench1".to_string(),
        original_url: "https://example.com".to_string(),
        password_hash: Some(hash_password(password).expect("hash should succeed")),
        expires_at: Some(Utc::now() + Duration::days(1)),
        clicks: 0,
        created_at: Utc::now(),
    }
}

fn bench_hash_password(c: &mut Criterion) {
    c.bench_function("password/hash", |b| {
        b.iter(|| hash_password("test_password_123").expect("hash should succeed"));
    });
}

fn bench_verify_password(c: &mut Criterion) {
    let hash = hash_password("correct_password").expect("hash should succeed");
    let mut group = c.benchmark_group("password/verify");

    group.bench_function("correct", |b| {
        b.iter(|| assert!(verify_password("correct_password", &hash).expect("verify")));
    });

    group.bench_function("wrong", |b| {
        b.iter(|| assert!(!verify_password("wrong_password", &hash).expect("verify")));
    });

    group.finish();
}

fn bench_evaluate_access(c: &mut Criterion) {
    let link = protected_link("secret");
    let mut expired = link.clone();
    expired.expires_at = Some(Utc::now() - Duration::days(1));
    let now = Utc::now();

    let mut group = c.benchmark_group("access/evaluate");

    // 无密码时不触发哈希校验
    group.bench_function("password_required", |b| {
        b.iter(|| assert_eq!(evaluate_access(&link, None, now), AccessDecision::PasswordRequired));
    });

    group.bench_function("expired", |b| {
        b.iter(|| {
            assert_eq!(
                evaluate_access(&expired, Some("secret"), now),
                AccessDecision::Expired
            )
        });
    });

    group.bench_function("unlock", |b| {
        b.iter(|| {
            assert_eq!(
                evaluate_access(&link, Some("secret"), now),
                AccessDecision::Resolved
            )
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_hash_password,
    bench_verify_password,
    bench_evaluate_access,
);
criterion_main!(benches);
