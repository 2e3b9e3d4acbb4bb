//! Criterion benchmarks for rust_leveled_logger

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use rust_leveled_logger::prelude::*;
use std::io;
use std::sync::Arc;

fn null_logger(threshold: LogLevel) -> Logger {
    let sink = Arc::new(WriterSink::new("null", io::sink(), RecordStyle::Json));
    let mut builder = Logger::builder().threshold(threshold).console(false);
    for channel in Channel::ALL {
        builder = builder.sink(channel, sink.clone());
    }
    builder.build().expect("in-memory logger")
}

// ============================================================================
// Filtering Benchmarks
// ============================================================================

fn bench_filtered_calls(c: &mut Criterion) {
    let mut group = c.benchmark_group("filtered");
    group.throughput(Throughput::Elements(1));

    let logger = null_logger(LogLevel::Error);

    group.bench_function("info_below_threshold", |b| {
        b.iter(|| logger.info(black_box("Info message")));
    });

    group.bench_function("access_below_threshold", |b| {
        let meta = ResponseMeta::new("GET", "/ping", "HTTP/1.1");
        b.iter(|| logger.access(chrono::Utc::now(), black_box(&meta)));
    });

    group.finish();
}

// ============================================================================
// Rendering Benchmarks
// ============================================================================

fn bench_rendering(c: &mut Criterion) {
    let mut group = c.benchmark_group("rendering");
    group.throughput(Throughput::Elements(1));

    let formatter = RecordFormatter::new(FormatterConfig::new().shared());
    let generic: LogRecord = GenericLogRecord::new(LogLevel::Warn, "Disk almost full")
        .with_data(
            LogData::new()
                .with_field("free_mb", 12)
                .with_field("mount", "/var")
                .with_field("critical", false),
        )
        .into();
    let access: LogRecord = AccessLogRecord::completed(
        chrono::Utc::now(),
        &ResponseMeta::new("GET", "/ping", "HTTP/1.1").with_client_addr("127.0.0.1"),
    )
    .into();

    group.bench_function("generic_console", |b| {
        b.iter(|| black_box(formatter.console_line(black_box(&generic))));
    });

    group.bench_function("generic_json", |b| {
        b.iter(|| black_box(RecordFormatter::json_line(black_box(&generic))));
    });

    group.bench_function("access_console", |b| {
        b.iter(|| black_box(formatter.console_line(black_box(&access))));
    });

    group.bench_function("access_json", |b| {
        b.iter(|| black_box(RecordFormatter::json_line(black_box(&access))));
    });

    group.finish();
}

// ============================================================================
// End-to-end Benchmarks
// ============================================================================

fn bench_emitting_calls(c: &mut Criterion) {
    let mut group = c.benchmark_group("emitting");
    group.throughput(Throughput::Elements(1));

    let logger = null_logger(LogLevel::All);

    group.bench_function("error", |b| {
        b.iter(|| logger.error(black_box("Error message")));
    });

    group.bench_function("info_with_data", |b| {
        b.iter(|| {
            logger.info_with_data(
                black_box("Request processed"),
                LogData::new().with_field("status", 200).with_field("path", "/ping"),
            )
        });
    });

    group.finish();
}

criterion_group!(benches, bench_filtered_calls, bench_rendering, bench_emitting_calls);
criterion_main!(benches);
