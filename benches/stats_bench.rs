//! Benchmarks for the stats aggregator and response normalization
//!
//! Run with: cargo bench

use chrono::{Duration, TimeZone, Utc};
use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use reviewdesk::aggregate::{property_stats, summarize, DEFAULT_RECENT_LIMIT};
use reviewdesk::normalize::unwrap_collection;
use reviewdesk::{Review, ReviewSource, ReviewStatus};

fn create_test_reviews(count: usize) -> Vec<Review> {
    let start = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    let sources = ReviewSource::ALL;
    let statuses = ReviewStatus::ALL;

    (0..count)
        .map(|i| {
            let property = format!("p{}", i % 20);
            Review::new(i.to_string(), (i % 5 + 1) as f64)
                .with_property(property.clone(), format!("Property {}", property))
                .with_source(sources[i % sources.len()].clone())
                .with_status(statuses[i % statuses.len()].clone())
                .with_date(start + Duration::hours(i as i64))
        })
        .collect()
}

fn bench_summary(c: &mut Criterion) {
    let mut group = c.benchmark_group("summary");

    for size in [100, 1000, 10000] {
        let reviews = create_test_reviews(size);
        group.throughput(Throughput::Elements(size as u64));

        group.bench_function(format!("summarize_{}", size), |b| {
            b.iter(|| summarize(black_box(&reviews)))
        });

        group.bench_function(format!("property_stats_{}", size), |b| {
            b.iter(|| property_stats(black_box(&reviews), None, DEFAULT_RECENT_LIMIT))
        });
    }

    group.finish();
}

fn bench_normalize(c: &mut Criterion) {
    let mut group = c.benchmark_group("normalize");

    let items: Vec<serde_json::Value> = (0..1000)
        .map(|i| {
            serde_json::json!({
                "id": i,
                "rating": 4,
                "publicReview": "Lovely stay, would book again",
                "guestName": "Guest",
                "listingName": "Canal Flat",
                "channel": "airbnb",
                "submittedAt": "2024-03-04 10:00:00",
            })
        })
        .collect();
    let body = serde_json::json!({ "status": "success", "result": items });

    group.throughput(Throughput::Elements(1000));
    group.bench_function("camel_case_envelope_1000", |b| {
        b.iter(|| unwrap_collection::<Review>(black_box(body.clone())))
    });

    group.finish();
}

criterion_group!(benches, bench_summary, bench_normalize);
criterion_main!(benches);
