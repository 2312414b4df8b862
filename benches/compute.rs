use criterion::{black_box, criterion_group, criterion_main, Criterion};
use std::f64::consts::TAU;

use venue_engine::geometry::compute_venue;
use venue_engine::models::{SectionConfig, SectionKind, StageType, VenueConfig};
use venue_engine::presets;

// 50 секций по 30 рядов на 40 мест = 60k мест
fn large_venue() -> VenueConfig {
    let sections = (0..50)
        .map(|i| {
            let start = TAU * f64::from(i) / 50.0;
            SectionConfig {
                id: format!("S{}", i),
                label: format!("Section {}", i),
                color: "#3b82f6".to_string(),
                rows: 30,
                seats_per_row: 40,
                elevation: 0.5,
                tilt: 0.35,
                kind: SectionKind::Arc {
                    start_angle: start,
                    end_angle: start + TAU / 55.0,
                },
            }
        })
        .collect();

    VenueConfig {
        name: "Mega Arena".to_string(),
        stage_type: StageType::Circle,
        stage_radius: 12.0,
        stage_width: 24.0,
        stage_length: 16.0,
        row_spacing: 1.4,
        seat_spacing: 0.8,
        sections,
    }
}

fn bench_compute(c: &mut Criterion) {
    let arena = presets::grand_arena();
    c.bench_function("compute_venue/grand_arena", |b| {
        b.iter(|| compute_venue(black_box(&arena)))
    });

    let mega = large_venue();
    c.bench_function("compute_venue/60k_seats", |b| {
        b.iter(|| compute_venue(black_box(&mega)))
    });
}

criterion_group!(benches, bench_compute);
criterion_main!(benches);
