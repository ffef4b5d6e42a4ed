//! Benchmarks for leaderboard normalization
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use lingulu::leaderboard::{normalize, LeaderboardAction, LeaderboardState};
use serde_json::{json, Value};

/// Rows alternating between the nested and the flat shape
fn mixed_payload(count: usize) -> Value {
    let rows: Vec<Value> = (0..count)
        .map(|i| {
            if i % 2 == 0 {
                json!({
                    "user": {"userId": i, "userProfile": {"username": format!("user{}", i), "avatarUrl": null}},
                    "totalPoints": count - i,
                    "profileUrl": format!("https://cdn.lingulu.test/{}.png", i)
                })
            } else {
                json!({"name": format!("user{}", i), "points": format!("{}", count - i), "userId": i.to_string()})
            }
        })
        .collect();

    json!({
        "leaderboard": rows,
        "currentUser": {"username": "me", "xp": 12.5, "userId": 3, "rank": 4}
    })
}

fn bench_normalize(c: &mut Criterion) {
    let mut group = c.benchmark_group("normalize");

    for size in [10, 100, 1000] {
        let payload = mixed_payload(size);
        group.throughput(Throughput::Elements(size as u64));

        group.bench_function(format!("mixed_{}", size), |b| {
            b.iter(|| normalize(black_box(&payload)))
        });
    }

    group.finish();
}

fn bench_reduce(c: &mut Criterion) {
    let board = normalize(&mixed_payload(100));

    c.bench_function("state_loaded_100", |b| {
        b.iter(|| {
            LeaderboardState::new()
                .reduce(LeaderboardAction::Started)
                .reduce(LeaderboardAction::Loaded(black_box(board.clone())))
        })
    });
}

criterion_group!(benches, bench_normalize, bench_reduce);
criterion_main!(benches);
