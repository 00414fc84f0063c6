// Copyright 2026 the Waymark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::{Point, Rect, Size};
use waymark_overlay::{OverlayConfig, build_frame};
use waymark_plan::{Hotspot, ImageState, PercentRect, SignStatus};
use waymark_viewport::{PlanViewport, Transform, ZoomLimits};

const PAGE: Size = Size::new(3300.0, 2550.0);

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

fn viewport_at_scale(scale: f64) -> PlanViewport {
    let mut vp = PlanViewport::with_limits(
        Rect::new(0.0, 0.0, 1280.0, 800.0),
        ZoomLimits::new(0.1, 5.0),
    );
    vp.set_transform(Transform {
        scale,
        translate: kurbo::Vec2::ZERO,
    });
    vp.center_on(Point::new(0.5 * PAGE.width, 0.5 * PAGE.height));
    vp
}

fn bench_build_frame_by_scale(c: &mut Criterion) {
    let mut group = c.benchmark_group("overlay/build_frame");

    // Hypothesis: frame cost is dominated by the visible subset, not the
    // page total — zoomed in (3.0), culling discards most of 5,000 spots;
    // below the LOD floor (0.2), the hotspot pass is skipped entirely.
    let spots = synthetic_spots(5_000);
    let config = OverlayConfig::default();

    for scale in [0.2_f64, 0.4, 1.0, 3.0] {
        let vp = viewport_at_scale(scale);
        group.throughput(Throughput::Elements(spots.len() as u64));

        group.bench_with_input(BenchmarkId::from_parameter(scale), &spots, |b, spots| {
            b.iter(|| {
                black_box(build_frame(
                    spots,
                    ImageState::Ready(PAGE),
                    &vp,
                    &config,
                    |_| Some(SignStatus::Installed),
                    |_| false,
                ));
            });
        });
    }

    group.finish();
}

fn bench_build_frame_by_count(c: &mut Criterion) {
    let mut group = c.benchmark_group("overlay/build_frame_full_page");

    // Whole page visible (fitted): every spot survives culling, so this is
    // the worst-case projection pass.
    let config = OverlayConfig::default();
    let mut vp = PlanViewport::with_limits(
        Rect::new(0.0, 0.0, 1280.0, 800.0),
        ZoomLimits::new(0.1, 5.0),
    );
    vp.fit_image(PAGE);

    for len in [1_024_usize, 5_000, 10_000] {
        let spots = synthetic_spots(len);
        group.throughput(Throughput::Elements(len as u64));

        group.bench_with_input(BenchmarkId::from_parameter(len), &spots, |b, spots| {
            b.iter(|| {
                black_box(build_frame(
                    spots,
                    ImageState::Ready(PAGE),
                    &vp,
                    &config,
                    |_| None,
                    |_| false,
                ));
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_build_frame_by_scale, bench_build_frame_by_count);
criterion_main!(benches);
