use criterion::{criterion_group, criterion_main, Criterion};
use diffdrive_sim::{
    DifferentialDrive, GridPathfinder, Obstacle, ObstacleMap, RobotGeometry, RobotPose, SimConfig,
    WorldPoint,
};
use rand::{rngs::StdRng, Rng, SeedableRng};
use std::hint::black_box;

fn reference_scene(c: &mut Criterion) {
    let config = SimConfig::default();
    let map = ObstacleMap::new(config.obstacles.clone(), config.cell_size).unwrap();
    let solver = GridPathfinder::new(&map, config.width, config.height);
    c.bench_function("reference scene, 40x30 4-grid", |b| {
        b.iter(|| black_box(solver.find_path(config.start, config.goal)))
    });
}

fn random_scenes(c: &mut Criterion) {
    const CELL: f64 = 10.0;
    const N: usize = 100;
    let mut rng = StdRng::seed_from_u64(0);
    let obstacles = (0..400)
        .map(|_| {
            Obstacle::new(
                rng.gen_range(0.0..N as f64 * CELL),
                rng.gen_range(0.0..N as f64 * CELL),
                rng.gen_range(5.0..60.0),
                rng.gen_range(5.0..60.0),
            )
        })
        .collect::<Vec<_>>();
    let map = ObstacleMap::new(obstacles, CELL).unwrap();
    let side = N as f64 * CELL;
    let solver = GridPathfinder::new(&map, side, side);
    let scenarios = (0..50)
        .map(|_| {
            (
                WorldPoint::new(rng.gen_range(0.0..side), rng.gen_range(0.0..side)),
                WorldPoint::new(rng.gen_range(0.0..side), rng.gen_range(0.0..side)),
            )
        })
        .collect::<Vec<_>>();
    c.bench_function("random obstacles, 100x100 4-grid", |b| {
        b.iter(|| {
            for (start, goal) in &scenarios {
                let _ = black_box(solver.find_path(*start, *goal));
            }
        })
    });
}

fn rasterize(c: &mut Criterion) {
    let config = SimConfig::default();
    let map = ObstacleMap::new(config.obstacles.clone(), config.cell_size).unwrap();
    c.bench_function("rasterize reference scene", |b| {
        b.iter(|| black_box(GridPathfinder::new(&map, config.width, config.height)))
    });
}

fn integrate(c: &mut Criterion) {
    c.bench_function("integrate 1000 frames", |b| {
        b.iter(|| {
            let mut robot = DifferentialDrive::new(RobotGeometry::default(), RobotPose::default());
            robot.set_wheel_speeds(20.0, 15.0);
            for _ in 0..1000 {
                robot.integrate(black_box(1.0 / 60.0));
            }
            black_box(*robot.pose())
        })
    });
}

criterion_group!(benches, reference_scene, random_scenes, rasterize, integrate);
criterion_main!(benches);
