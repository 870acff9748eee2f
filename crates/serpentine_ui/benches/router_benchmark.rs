//! # Input Router Benchmark
//!
//! The router runs inside the host's key handler, so it must stay far
//! below a frame budget even while the name field is being edited.
//!
//! Run with: `cargo bench --package serpentine_ui`

// Benchmarks don't need docs
#![allow(missing_docs)]

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use image::DynamicImage;
use serpentine_ui::{
    Control, Direction, GameHooks, InputRouter, KeyCode, KeyEvent, MemorySurface,
};

/// Counts commands so the optimiser cannot drop the dispatch.
#[derive(Default)]
struct CountingHooks {
    commands: u64,
}

impl GameHooks for CountingHooks {
    fn on_background_image_uploaded(&mut self, _image: DynamicImage, _mime_type: &str) {}
    fn on_image_uploaded(&mut self, _image: DynamicImage, _mime_type: &str) {}
    fn on_join_game(&mut self) {}
    fn on_spectate_game(&mut self) {}
    fn on_key_command(&mut self, code: u32) {
        self.commands = self.commands.wrapping_add(u64::from(code));
    }
    fn on_mute_audio_toggled(&mut self) {}
    fn on_player_name_updated(&mut self, _name: &str) {}
}

fn bench_physical_keys(c: &mut Criterion) {
    let mut router = InputRouter::new(10);
    let mut surface = MemorySurface::new();
    let mut hooks = CountingHooks::default();
    let keys = [KeyCode::UP, KeyCode::LEFT, KeyCode::DOWN, KeyCode::RIGHT, KeyCode::SPACE];

    c.bench_function("route_physical_keys", |b| {
        b.iter(|| {
            for code in keys {
                black_box(router.handle_key(KeyEvent::pressed(code), &mut surface, &mut hooks));
            }
        });
    });
}

fn bench_on_screen_arrows(c: &mut Criterion) {
    let mut router = InputRouter::new(10);
    let mut surface = MemorySurface::new();
    let mut hooks = CountingHooks::default();

    c.bench_function("route_on_screen_arrows", |b| {
        b.iter(|| {
            for direction in Direction::ALL {
                router.activate(Control::Arrow(black_box(direction)), &mut surface, &mut hooks);
            }
        });
    });
}

fn bench_absorbed_while_editing(c: &mut Criterion) {
    let mut router = InputRouter::new(10);
    let mut surface = MemorySurface::new();
    let mut hooks = CountingHooks::default();
    router.activate(Control::ChangeName, &mut surface, &mut hooks);

    c.bench_function("absorb_keys_while_editing", |b| {
        b.iter(|| black_box(router.handle_key(KeyEvent::pressed(KeyCode(65)), &mut surface, &mut hooks)));
    });
}

criterion_group!(
    benches,
    bench_physical_keys,
    bench_on_screen_arrows,
    bench_absorbed_while_editing
);
criterion_main!(benches);
