// Copyright 2026 the Waymark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::{Point, Rect, Size};
use waymark_hit::{HitParams, hit_test_point, hits_in_rect};
use waymark_plan::{Hotspot, PercentRect};
use waymark_viewport::{PlanViewport, ZoomLimits};

const PAGE: Size = Size::new(3300.0, 2550.0);

/// Lays hotspots out on a regular grid covering most of the page, the
/// density pattern of a real equipment-row floor plan.
fn synthetic_spots(count: usize) -> Vec<Hotspot> {
    let cols = (count as f64).sqrt().ceil() as usize;
    (0..count)
        .map(|i| {
            let col = i % cols;
            let row = i / cols;
            let x = 2.0 + 94.0 * (col as f64) / (cols as f64);
            let y = 2.0 + 94.0 * (row as f64) / (cols as f64);
            Hotspot::new(format!("B1-{i:05}"), PercentRect::new(x, y, 0.8, 0.4), 90.0)
        })
        .collect()
}

fn viewport() -> PlanViewport {
    let mut vp = PlanViewport::with_limits(
        Rect::new(0.0, 0.0, 1280.0, 800.0),
        ZoomLimits::new(0.1, 5.0),
    );
    vp.fit_image(PAGE);
    vp
}

fn bench_hit_test_point(c: &mut Criterion) {
    let mut group = c.benchmark_group("hit/point");

    // Hypothesis: a linear scan with per-spot sanitize + enlarge stays well
    // under a frame budget even at thousands of signs; this tracks the
    // per-tap cost as pages grow.
    for len in [512_usize, 2_048, 5_000, 10_000] {
        let spots = synthetic_spots(len);
        let vp = viewport();
        let params = HitParams::default();
        // A point deep in the grid so plenty of candidates precede it.
        let at = vp.image_to_view_point(Point::new(0.5 * PAGE.width, 0.5 * PAGE.height));
        group.throughput(Throughput::Elements(len as u64));

        group.bench_with_input(BenchmarkId::from_parameter(len), &spots, |b, spots| {
            b.iter(|| black_box(hit_test_point(spots, PAGE, &vp, at, &params)));
        });
    }

    group.finish();
}

fn bench_lasso_rect(c: &mut Criterion) {
    let mut group = c.benchmark_group("hit/lasso");

    // A band across the middle of the view, the typical multi-select sweep.
    for len in [2_048_usize, 5_000] {
        let spots = synthetic_spots(len);
        let vp = viewport();
        let params = HitParams::default();
        let band = Rect::new(200.0, 300.0, 1_000.0, 500.0);
        group.throughput(Throughput::Elements(len as u64));

        group.bench_with_input(BenchmarkId::from_parameter(len), &spots, |b, spots| {
            b.iter(|| black_box(hits_in_rect(spots, PAGE, &vp, band, &params)));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_hit_test_point, bench_lasso_rect);
criterion_main!(benches);
