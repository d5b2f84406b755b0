//! Selection benchmarks for reaper_core

use chrono::{NaiveDate, TimeDelta};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use reaper_core::{
    find_expired, parse_timestamp, FixedClock, IndexPattern, RetentionWindow, Silent,
};

/// Daily and hourly names spanning `days` days back from 2024-01-01
fn index_names(days: i64) -> Vec<String> {
    let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    let mut names = Vec::new();
    for offset in 0..days {
        let date = start - TimeDelta::days(offset);
        names.push(format!("logstash-{}", date.format("%Y.%m.%d")));
        for hour in 0..24 {
            names.push(format!("logstash-{}.{hour:02}", date.format("%Y.%m.%d")));
        }
    }
    names
}

fn bench_parse_timestamp(c: &mut Criterion) {
    c.bench_function("parse_timestamp_daily", |b| {
        b.iter(|| parse_timestamp(black_box("2024.03.01"), black_box(".")))
    });

    c.bench_function("parse_timestamp_hourly", |b| {
        b.iter(|| parse_timestamp(black_box("2024.03.01.17"), black_box(".")))
    });
}

fn bench_find_expired(c: &mut Criterion) {
    let mut group = c.benchmark_group("find_expired");
    let pattern = IndexPattern::default();
    let clock = FixedClock(
        NaiveDate::from_ymd_opt(2024, 1, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap(),
    );
    let window = RetentionWindow {
        days: Some(30),
        hours: Some(48),
    };

    for days in [30, 365, 1825] {
        let names = index_names(days);
        group.bench_with_input(BenchmarkId::from_parameter(names.len()), &names, |b, names| {
            b.iter(|| {
                find_expired(names.iter().cloned(), window, &clock, &pattern, &Silent).count()
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_parse_timestamp, bench_find_expired);
criterion_main!(benches);
