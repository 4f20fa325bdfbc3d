use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tui_dash::core::World;
use tui_dash::term::GameView;

fn bench_tick(c: &mut Criterion) {
    let mut world = World::new(120, 40);
    for _ in 0..8 {
        world.spawn_enemy();
    }

    c.bench_function("world_tick_33ms", |b| {
        b.iter(|| {
            world.tick(black_box(0.033));
        })
    });
}

fn bench_spawn(c: &mut Criterion) {
    let mut world = World::new(120, 40);

    c.bench_function("spawn_enemy", |b| {
        b.iter(|| {
            world.spawn_enemy();
        })
    });
}

fn bench_render(c: &mut Criterion) {
    let mut world = World::new(120, 40);
    for _ in 0..8 {
        world.spawn_enemy();
    }
    let view = GameView::default();

    c.bench_function("render_frame", |b| {
        b.iter(|| black_box(view.render(&world)))
    });
}

criterion_group!(benches, bench_tick, bench_spawn, bench_render);
criterion_main!(benches);
