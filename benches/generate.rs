use criterion::{black_box, criterion_group, criterion_main, Criterion};
use pmaze::dims::Dims;
use pmaze::maze::{Maze, MazeSpec};

const MAZE_SPEC: MazeSpec = MazeSpec {
    origin: Dims(0, 0),
    size: Dims(100, 100),
    cell_size: Dims(10, 10),
    seed: Some(42),
};

pub fn dfs_generate(c: &mut Criterion) {
    c.bench_function("dfs_generate", |b| {
        b.iter(|| {
            let _ = Maze::new(black_box(MAZE_SPEC)).unwrap();
        })
    });
}

pub fn generate_and_solve(c: &mut Criterion) {
    c.bench_function("generate_and_solve", |b| {
        b.iter(|| {
            let mut maze = Maze::new(black_box(MAZE_SPEC)).unwrap();
            let _ = maze.solve().unwrap();
        })
    });
}

criterion_group! {name = benches; config = Criterion::default().sample_size(10); targets = dfs_generate, generate_and_solve}
criterion_main!(benches);
