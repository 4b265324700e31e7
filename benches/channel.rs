//! Comparison benchmarks: `gochan` against `crossbeam-channel` and
//! `std::sync::mpsc`, mirroring the shape of the teacher's
//! `benches/spsc/{oneshot,throughput,small_buffer}.rs` (ported from a
//! nightly `#[bench]` harness to stable `criterion`).
//!
//! Run with: cargo bench --bench channel

use std::sync::mpsc::sync_channel as std_sync_channel;
use std::thread;

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use crossbeam_channel::bounded as crossbeam_bounded;

use gochan::channel;

const BUFFER_SIZE: usize = 1024;
const MESSAGES: usize = 10_000;

/// One channel created, used once, dropped. Measures allocation + setup
/// cost, not steady-state throughput.
fn oneshot(c: &mut Criterion) {
    let mut group = c.benchmark_group("oneshot");

    group.bench_function("gochan", |b| {
        b.iter(|| {
            let (tx, rx) = channel::<i32>(BUFFER_SIZE).unwrap();
            tx.send(42).unwrap();
            black_box(rx.recv().unwrap())
        });
    });

    group.bench_function("crossbeam", |b| {
        b.iter(|| {
            let (tx, rx) = crossbeam_bounded::<i32>(BUFFER_SIZE);
            tx.send(42).unwrap();
            black_box(rx.recv().unwrap())
        });
    });

    group.bench_function("std_sync", |b| {
        b.iter(|| {
            let (tx, rx) = std_sync_channel::<i32>(BUFFER_SIZE);
            tx.send(42).unwrap();
            black_box(rx.recv().unwrap())
        });
    });

    group.finish();
}

/// Sustained send/recv on a long-lived buffered channel, single producer
/// thread and single consumer thread.
fn throughput(c: &mut Criterion) {
    let mut group = c.benchmark_group("throughput");
    group.throughput(criterion::Throughput::Elements(MESSAGES as u64));

    group.bench_function("gochan", |b| {
        b.iter(|| {
            let (tx, rx) = channel::<i32>(BUFFER_SIZE).unwrap();
            thread::scope(|s| {
                s.spawn(|| {
                    for i in 0..MESSAGES {
                        tx.send(i as i32).unwrap();
                    }
                });
                for _ in 0..MESSAGES {
                    black_box(rx.recv().unwrap());
                }
            });
        });
    });

    group.bench_function("crossbeam", |b| {
        b.iter(|| {
            let (tx, rx) = crossbeam_bounded::<i32>(BUFFER_SIZE);
            thread::scope(|s| {
                s.spawn(|| {
                    for i in 0..MESSAGES {
                        tx.send(i as i32).unwrap();
                    }
                });
                for _ in 0..MESSAGES {
                    black_box(rx.recv().unwrap());
                }
            });
        });
    });

    group.finish();
}

/// Unbuffered rendezvous hand-off: every send must wait for a receiver.
fn rendezvous(c: &mut Criterion) {
    let mut group = c.benchmark_group("rendezvous");
    group.throughput(criterion::Throughput::Elements(MESSAGES as u64));

    group.bench_function("gochan_unbuffered", |b| {
        b.iter(|| {
            let (tx, rx) = channel::<i32>(0).unwrap();
            thread::scope(|s| {
                s.spawn(|| {
                    for i in 0..MESSAGES {
                        tx.send(i as i32).unwrap();
                    }
                });
                for _ in 0..MESSAGES {
                    black_box(rx.recv().unwrap());
                }
            });
        });
    });

    group.bench_function("crossbeam_unbounded_as_sync", |b| {
        b.iter(|| {
            let (tx, rx) = crossbeam_bounded::<i32>(0);
            thread::scope(|s| {
                s.spawn(|| {
                    for i in 0..MESSAGES {
                        tx.send(i as i32).unwrap();
                    }
                });
                for _ in 0..MESSAGES {
                    black_box(rx.recv().unwrap());
                }
            });
        });
    });

    group.finish();
}

/// A small buffer (capacity 1) forces every send to wait on the reader,
/// stressing the condvar wake path rather than raw FIFO throughput.
fn small_buffer(c: &mut Criterion) {
    let mut group = c.benchmark_group("small_buffer");
    group.throughput(criterion::Throughput::Elements(1_000));

    group.bench_function("gochan_capacity_1", |b| {
        b.iter(|| {
            let (tx, rx) = channel::<i32>(1).unwrap();
            thread::scope(|s| {
                s.spawn(|| {
                    for i in 0..1_000 {
                        tx.send(i).unwrap();
                    }
                });
                for _ in 0..1_000 {
                    black_box(rx.recv().unwrap());
                }
            });
        });
    });

    group.finish();
}

/// Multiple producer threads (scaled to available parallelism) sharing one
/// buffered channel via `Sender::clone`, single consumer draining it.
fn contention(c: &mut Criterion) {
    let producers = num_cpus::get().max(2);
    let per_producer = MESSAGES / producers;
    let total = per_producer * producers;

    let mut group = c.benchmark_group("contention");
    group.throughput(criterion::Throughput::Elements(total as u64));

    group.bench_function("gochan", |b| {
        b.iter(|| {
            let (tx, rx) = channel::<i32>(BUFFER_SIZE).unwrap();
            thread::scope(|s| {
                for _ in 0..producers {
                    let tx = tx.clone();
                    s.spawn(move || {
                        for i in 0..per_producer {
                            tx.send(i as i32).unwrap();
                        }
                    });
                }
                for _ in 0..total {
                    black_box(rx.recv().unwrap());
                }
            });
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    oneshot,
    throughput,
    rendezvous,
    small_buffer,
    contention
);
criterion_main!(benches);
