// benches/marker.rs
use criterion::{criterion_group, criterion_main, Criterion, black_box};

use shloka_maint::core::marker;
use shloka_maint::model::{Collection, Verse};
use shloka_maint::ops;

const SHLOKA: &str = "कर्मण्येवाधिकारस्ते मा फलेषु कदाचन ।\n\
                      मा कर्मफलहेतुर्भूर्मा ते सङ्गोऽस्त्वकर्मणि ॥2-47॥";

// Roughly the size of the full text: 700 verses.
fn sample_collection() -> Collection {
    let shlokas = (0..700)
        .map(|i| Verse::new(i / 40 + 1, "", if i % 50 == 0 { "no marker" } else { SHLOKA }))
        .collect();
    Collection::new(shlokas)
}

fn bench_marker(c: &mut Criterion) {
    c.bench_function("marker_extract", |b| {
        b.iter(|| marker::extract(black_box(SHLOKA)))
    });

    c.bench_function("marker_miss", |b| {
        b.iter(|| marker::extract(black_box("धर्मक्षेत्रे कुरुक्षेत्रे समवेता युयुत्सवः")))
    });

    let base = sample_collection();
    c.bench_function("recompute_sr_700", |b| {
        b.iter(|| {
            let mut coll = base.clone();
            let report = ops::recompute_sr(black_box(&mut coll));
            black_box(report.resolved)
        })
    });
}

criterion_group!(benches, bench_marker);
criterion_main!(benches);
