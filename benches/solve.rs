use criterion::{black_box, criterion_group, criterion_main, Criterion};
use mazer::{Grid, MazeGraph, PathFinder, PathFinderState};

/// Serpentine maze: `corridors` horizontal corridors of `width` pixels,
/// connected alternately at their ends, with an opening on the left border
/// of the first corridor and one on the bottom border below the last.
fn serpentine(corridors: usize, width: usize) -> Grid {
    let rows = corridors * 2 + 1;
    let columns = width + 2;
    let mut cells = vec![vec![false; columns]; rows];

    for i in 0..corridors {
        for col in 1..=width {
            cells[i * 2 + 1][col] = true;
        }
    }
    for i in 0..corridors - 1 {
        let col = if i % 2 == 0 { width } else { 1 };
        cells[i * 2 + 2][col] = true;
    }

    cells[1][0] = true;
    let last = (corridors - 1) * 2 + 1;
    let exit_col = if (corridors - 1) % 2 == 0 { width } else { 1 };
    cells[last + 1][exit_col] = true;

    Grid::from_cells(cells).unwrap()
}

fn bench_serpentine(c: &mut Criterion, corridors: usize, width: usize) {
    let grid = serpentine(corridors, width);

    c.bench_function(&format!("serpentine_{}x{}", corridors, width), |b| {
        b.iter(|| {
            let graph = MazeGraph::from_grid(black_box(&grid)).unwrap();
            let state = PathFinder::new(&graph).finish();
            assert!(matches!(state, PathFinderState::PathFound(_)));
        })
    });
}

pub fn maze_small(c: &mut Criterion) {
    bench_serpentine(c, 8, 32);
}

pub fn maze_medium(c: &mut Criterion) {
    bench_serpentine(c, 32, 128);
}

pub fn maze_large(c: &mut Criterion) {
    bench_serpentine(c, 64, 512);
}

criterion_group!(benches, maze_small, maze_medium, maze_large);
criterion_main!(benches);
