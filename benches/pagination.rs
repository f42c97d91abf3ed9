//! Benchmarks for search result paging.
//!
//! These benchmarks measure building the pagination bar and decoding a
//! combined search page.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use movies_tui::api::{MultiResult, SearchPage};
use movies_tui::search::pagination::page_buttons;
use serde_json::json;

fn bench_page_buttons(c: &mut Criterion) {
    c.bench_function("page_buttons_middle_of_many", |b| {
        b.iter(|| page_buttons(black_box(250), black_box(500)))
    });

    c.bench_function("page_buttons_short_range", |b| {
        b.iter(|| page_buttons(black_box(2), black_box(4)))
    });
}

fn bench_decode_multi_page(c: &mut Criterion) {
    let results: Vec<serde_json::Value> = (0..20)
        .map(|i| match i % 3 {
            0 => json!({ "id": i, "media_type": "movie", "title": "Alien", "release_date": "1979-05-25" }),
            1 => json!({ "id": i, "media_type": "tv", "name": "Firefly", "first_air_date": "2002-09-20" }),
            _ => json!({ "id": i, "media_type": "person", "name": "Sigourney Weaver" }),
        })
        .collect();
    let body = json!({
        "page": 1,
        "total_pages": 12,
        "total_results": 240,
        "results": results,
    })
    .to_string();

    c.bench_function("decode_multi_search_page", |b| {
        b.iter(|| serde_json::from_str::<SearchPage<MultiResult>>(black_box(&body)))
    });
}

criterion_group!(benches, bench_page_buttons, bench_decode_multi_page);
criterion_main!(benches);
