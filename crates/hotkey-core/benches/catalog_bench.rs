//! Criterion benchmarks for catalog resolution and event construction.
//!
//! Every injected action goes through a name lookup (binding layer), a
//! catalog resolve, and a scan-code lookup before any OS call is made.  These
//! benches keep that path honest.
//!
//! Run with:
//! ```bash
//! cargo bench --package hotkey-core --bench catalog_bench
//! ```

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use hotkey_core::keymap::scan_set1;
use hotkey_core::{HotKey, InputEvent, KeyAction, KeyCatalog, Modifier, PhysicalKey};

// ── Benchmarks: catalog ───────────────────────────────────────────────────────

fn bench_catalog_resolve(c: &mut Criterion) {
    let catalog = KeyCatalog::standard();
    let mut group = c.benchmark_group("catalog");

    group.bench_function("resolve_single", |b| {
        b.iter(|| catalog.resolve(black_box(KeyAction::Press(HotKey::Enter))))
    });

    group.bench_function("resolve_all_19", |b| {
        b.iter(|| {
            KeyAction::all()
                .map(|action| catalog.resolve(black_box(action)))
                .collect::<Vec<_>>()
        })
    });

    group.finish();
}

fn bench_catalog_lookup(c: &mut Criterion) {
    let catalog = KeyCatalog::standard();
    let mut group = c.benchmark_group("catalog");

    // Name parsing is a linear scan over the stable names: the first entry, the
    // last entry, and a name outside the catalog (full scan, then error).
    for name in ["pressNum1", "releaseAlt", "pressShift"] {
        group.bench_with_input(BenchmarkId::new("lookup", name), &name, |b, &name| {
            b.iter(|| catalog.lookup(black_box(name)))
        });
    }

    group.finish();
}

// ── Benchmarks: event construction ────────────────────────────────────────────

fn bench_event_construction(c: &mut Criterion) {
    let mut group = c.benchmark_group("events");

    group.bench_function("momentary_pair", |b| {
        b.iter(|| {
            let key = black_box(PhysicalKey::F1);
            let down = InputEvent::down(key, scan_set1::scan_code(key));
            (down, down.reversed())
        })
    });

    group.bench_function("modifier_hold", |b| {
        b.iter(|| {
            let key = black_box(Modifier::Alt).physical_key();
            InputEvent::down(key, scan_set1::scan_code(key))
        })
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_catalog_resolve,
    bench_catalog_lookup,
    bench_event_construction,
);
criterion_main!(benches);
