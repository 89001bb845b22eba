//! Performance benchmarks for console rendering
//!
//! Tests render time for different record counts and context sizes.
//! Run with: cargo bench

use chrono::{DateTime, Duration, Utc};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use glimpse::buffer::RecordBuffer;
use glimpse::http::{Request, Response};
use glimpse::level::Level;
use glimpse::record::Record;
use glimpse::render::ConsoleRenderer;

fn t0() -> DateTime<Utc> {
    DateTime::from_timestamp(1_722_772_800, 0).unwrap()
}

/// Generate a populated buffer with varying record counts.
fn generate_buffer(records: usize) -> RecordBuffer {
    let levels = [Level::Debug, Level::Info, Level::Warning, Level::Error];
    let mut buffer = RecordBuffer::new();

    for i in 0..records {
        let mut record = Record::new(levels[i % levels.len()], format!("record number {i}"))
            .with_channel("bench")
            .with_context("index", i)
            .with_context("source", "benchmark");
        record.timestamp = t0() + Duration::milliseconds(i as i64);
        buffer.append(record);
    }

    buffer
}

/// Generate a request with a spread of parameters.
fn generate_request(params: usize) -> Request {
    let mut request = Request::new();
    for i in 0..params {
        request = request
            .query_param(format!("q{i}"), format!("value-{i}"))
            .cookie(format!("c{i}"), format!("cookie-{i}"));
    }
    request
}

/// Benchmark a full render cycle at varying buffer sizes.
fn bench_render_by_record_count(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_by_record_count");

    for size in [1usize, 10, 50, 200].iter() {
        let buffer = generate_buffer(*size);
        let request = generate_request(5);
        let response = Response::html();

        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{}_records", size)),
            &buffer,
            |b, buffer| {
                b.iter(|| {
                    let mut renderer = ConsoleRenderer::new();
                    let fragment = renderer
                        .render(black_box(&request), &response, black_box(buffer), t0())
                        .unwrap();
                    black_box(fragment)
                });
            },
        );
    }

    group.finish();
}

/// Benchmark a full render cycle at varying request parameter counts.
fn bench_render_by_param_count(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_by_param_count");

    for size in [0usize, 10, 100].iter() {
        let buffer = generate_buffer(10);
        let request = generate_request(*size);
        let response = Response::html();

        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{}_params", size)),
            &request,
            |b, request| {
                b.iter(|| {
                    let mut renderer = ConsoleRenderer::new();
                    let fragment = renderer
                        .render(black_box(request), &response, &buffer, t0())
                        .unwrap();
                    black_box(fragment)
                });
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_render_by_record_count,
    bench_render_by_param_count
);
criterion_main!(benches);
