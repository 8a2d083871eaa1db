use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use glam::DVec2;
use std::hint::black_box;
use travel_map_editor::app::use_cases::spots;
use travel_map_editor::app::{build_map_scene, SpotStore};
use travel_map_editor::render::visible_tiles;
use travel_map_editor::{AppState, GeoPoint, MapViewport, MarkerIcon, Spot, SpotId};

fn build_synthetic_spots(count: usize) -> Vec<Spot> {
    (0..count)
        .map(|index| {
            let column = (index % 100) as f64;
            let row = (index / 100) as f64;
            let mut spot = Spot::new(
                SpotId::from_millis(index as u128 + 1),
                format!("Spot {index}"),
                GeoPoint::new(39.80 + row * 0.002, 116.30 + column * 0.002),
            );
            spot.icon = match index % 3 {
                0 => None,
                1 => Some("flag".to_string()),
                _ => Some(format!("number-{}", index % 120 + 1)),
            };
            spot
        })
        .collect()
}

fn state_with_spots(count: usize) -> AppState {
    let mut state = AppState::new();
    state.spots = SpotStore::from_spots(build_synthetic_spots(count));
    state.view.viewport = MapViewport::new(GeoPoint::new(39.9, 116.4), 13);
    state.view.viewport_size = [1280.0, 800.0];
    state
}

fn bench_marker_icon_resolve(c: &mut Criterion) {
    let selectors = [
        None,
        Some("default"),
        Some("flag"),
        Some("number-7"),
        Some("number-120"),
        Some("number-x"),
    ];

    c.bench_function("marker_icon_resolve", |b| {
        b.iter(|| {
            let mut numbered = 0u32;
            for selector in selectors {
                if let MarkerIcon::Numbered(n) = MarkerIcon::resolve(black_box(selector)) {
                    numbered += n;
                }
            }
            black_box(numbered)
        })
    });
}

fn bench_spot_store(c: &mut Criterion) {
    let mut group = c.benchmark_group("spot_store");

    for &count in &[100usize, 2_000usize] {
        let spots = build_synthetic_spots(count);

        group.bench_with_input(BenchmarkId::new("from_spots", count), &spots, |b, spots| {
            b.iter(|| black_box(SpotStore::from_spots(spots.clone()).len()))
        });

        let store = SpotStore::from_spots(spots.clone());
        group.bench_with_input(BenchmarkId::new("next_id", count), &store, |b, store| {
            b.iter(|| black_box(store.next_id(black_box(1))))
        });
    }

    group.finish();
}

fn bench_visible_tiles(c: &mut Criterion) {
    let mut group = c.benchmark_group("visible_tiles");

    for &zoom in &[3u8, 13u8, 18u8] {
        let viewport = MapViewport::new(GeoPoint::new(39.9, 116.4), zoom);
        group.bench_with_input(BenchmarkId::from_parameter(zoom), &viewport, |b, viewport| {
            b.iter(|| black_box(visible_tiles(viewport, DVec2::new(1920.0, 1080.0)).len()))
        });
    }

    group.finish();
}

fn bench_hit_test_and_scene(c: &mut Criterion) {
    let mut group = c.benchmark_group("map_frame");

    for &count in &[100usize, 2_000usize] {
        let state = state_with_spots(count);

        group.bench_with_input(BenchmarkId::new("hit_test", count), &state, |b, state| {
            b.iter(|| black_box(spots::hit_test(state, black_box([640.0, 400.0]))))
        });

        group.bench_with_input(BenchmarkId::new("build_scene", count), &state, |b, state| {
            b.iter(|| black_box(build_map_scene(state).spots.len()))
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_marker_icon_resolve,
    bench_spot_store,
    bench_visible_tiles,
    bench_hit_test_and_scene
);
criterion_main!(benches);
