//! Benchmark: measure step() cost under various grid conditions.
//!
//! Target: a single step on a 256x256 grid must complete in < 4 ms
//! to leave headroom for rendering within an 8.3 ms frame budget (120 Hz).
//!
//! Each benchmark uses `iter_batched` to re-seed the grid before every
//! iteration so we measure *active* simulation, not a settled grid.

use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use simulation::{Grid, Universe};

const SIZE: usize = 256;
const CHUNK: usize = 16;

/// Empty grid -- baseline cost of scanning 65K cells with nothing to do.
fn bench_step_empty(c: &mut Criterion) {
    c.bench_function("step_empty_256x256", |b| {
        let mut grid = Grid::new(SIZE, SIZE, CHUNK);
        b.iter(|| {
            grid.step();
            black_box(&grid);
        });
    });
}

/// Sand falling -- re-seed each iteration so sand is always actively moving.
fn bench_step_sand_falling(c: &mut Criterion) {
    c.bench_function("step_sand_falling_256x256", |b| {
        b.iter_batched(
            || {
                let mut grid = Grid::new(SIZE, SIZE, CHUNK);
                for y in 0..51 {
                    for x in 0..SIZE {
                        grid.set_cell(x, y, "Sand").unwrap();
                    }
                }
                grid
            },
            |mut grid| {
                grid.step();
                black_box(&grid);
            },
            BatchSize::SmallInput,
        );
    });
}

/// Water body -- water is more expensive than sand (lateral dispersion checks).
fn bench_step_water_body(c: &mut Criterion) {
    c.bench_function("step_water_body_256x256", |b| {
        b.iter_batched(
            || {
                let mut grid = Grid::new(SIZE, SIZE, CHUNK);
                for y in 128..SIZE {
                    for x in 0..SIZE {
                        grid.set_cell(x, y, "Water").unwrap();
                    }
                }
                grid
            },
            |mut grid| {
                grid.step();
                black_box(&grid);
            },
            BatchSize::SmallInput,
        );
    });
}

/// Mixed materials -- worst-case active simulation, re-seeded each iteration
/// so nothing has settled.
fn bench_step_mixed_active(c: &mut Criterion) {
    c.bench_function("step_mixed_active_256x256", |b| {
        b.iter_batched(
            || {
                let mut grid = Grid::new(SIZE, SIZE, CHUNK);
                for y in 0..SIZE {
                    for x in 0..SIZE {
                        let name = match (x + y) % 5 {
                            0 => Some("Sand"),
                            1 => Some("Water"),
                            2 => Some("Stone"),
                            3 => Some("Helium"),
                            _ => None,
                        };
                        if let Some(name) = name {
                            grid.set_cell(x, y, name).unwrap();
                        }
                    }
                }
                grid
            },
            |mut grid| {
                grid.step();
                black_box(&grid);
            },
            BatchSize::SmallInput,
        );
    });
}

/// Full Universe::step() including color-buffer refresh -- what the browser
/// actually calls. Re-seeded so we measure active work, not a settled world.
fn bench_universe_step(c: &mut Criterion) {
    c.bench_function("universe_step_mixed_256x256", |b| {
        b.iter_batched(
            || {
                let mut universe = Universe::new(SIZE, SIZE, CHUNK);
                for y in 0..SIZE {
                    for x in 0..SIZE {
                        let name = match (x * 7 + y * 13) % 6 {
                            0 => Some("Sand"),
                            1 => Some("Water"),
                            2 => Some("Stone"),
                            3 => Some("Helium"),
                            _ => None,
                        };
                        if let Some(name) = name {
                            universe.set_cell(x, y, name).unwrap();
                        }
                    }
                }
                universe
            },
            |mut universe| {
                universe.step();
                black_box(&universe);
            },
            BatchSize::SmallInput,
        );
    });
}

criterion_group!(
    benches,
    bench_step_empty,
    bench_step_sand_falling,
    bench_step_water_body,
    bench_step_mixed_active,
    bench_universe_step,
);
criterion_main!(benches);
