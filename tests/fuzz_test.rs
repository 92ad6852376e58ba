/// Fuzzes the pathfinder on many random obstacle scenes. Checks that a path is found exactly
/// when the goal is reachable by being part of the same connected component, that the path is
/// as short as a breadth-first search says it can be, and that the heuristic never overestimates.
use diffdrive_sim::{GridPathfinder, Obstacle, ObstacleMap, WorldPoint};
use grid_util::grid::ValueGrid;
use grid_util::point::Point;
use itertools::Itertools;
use rand::prelude::*;
use std::collections::VecDeque;

const CELL: f64 = 10.0;

fn random_scene(n: usize, rng: &mut StdRng) -> ObstacleMap {
    let mut obstacles = Vec::new();
    for x in 0..n {
        for y in 0..n {
            let corner = (x == 0 && y == 0) || (x == n - 1 && y == n - 1);
            if !corner && rng.gen_bool(0.35) {
                // Shrink some obstacles so they sit inside their cell without touching its edges.
                let inset = if rng.gen_bool(0.5) { 0.0 } else { 2.5 };
                obstacles.push(Obstacle::new(
                    x as f64 * CELL + inset,
                    y as f64 * CELL + inset,
                    CELL - 2.0 * inset,
                    CELL - 2.0 * inset,
                ));
            }
        }
    }
    ObstacleMap::new(obstacles, CELL).unwrap()
}

/// Breadth-first distances from `source` to every traversable cell.
fn bfs_distances(solver: &GridPathfinder, source: Point) -> Vec<Option<i32>> {
    let (cols, rows) = solver.grid_dimensions();
    let grid = &solver.pathing_grid().grid;
    let ix = |p: &Point| grid.get_ix_point(p);
    let mut dist = vec![None; cols * rows];
    let mut queue = VecDeque::new();
    dist[ix(&source)] = Some(0);
    queue.push_back(source);
    while let Some(p) = queue.pop_front() {
        let d = dist[ix(&p)].unwrap();
        for (n, _) in solver.pathing_grid().neighborhood_points_and_cost(&p) {
            if dist[ix(&n)].is_none() {
                dist[ix(&n)] = Some(d + 1);
                queue.push_back(n);
            }
        }
    }
    dist
}

fn visualize_grid(solver: &GridPathfinder, start: &Point, end: &Point) {
    let (cols, rows) = solver.grid_dimensions();
    for y in 0..rows as i32 {
        for x in 0..cols as i32 {
            let p = Point::new(x, y);
            if *start == p {
                print!("S");
            } else if *end == p {
                print!("G");
            } else if !solver.is_traversable(&p) {
                print!("#");
            } else {
                print!(".");
            }
        }
        println!();
    }
}

#[test]
fn fuzz() {
    const N: usize = 10;
    const N_GRIDS: usize = 2000;
    let mut rng = StdRng::seed_from_u64(0);
    let side = N as f64 * CELL;
    let start = WorldPoint::new(CELL / 2.0, CELL / 2.0);
    let goal = WorldPoint::new(side - CELL / 2.0, side - CELL / 2.0);
    for _ in 0..N_GRIDS {
        let map = random_scene(N, &mut rng);
        let solver = GridPathfinder::new(&map, side, side);
        let start_cell = solver.world_to_cell(start);
        let goal_cell = solver.world_to_cell(goal);
        let reachable = solver.pathing_grid().reachable(&start_cell, &goal_cell);
        let path = solver.find_path(start, goal).unwrap();
        // Show the grid if a path is not found
        if path.is_empty() == reachable {
            visualize_grid(&solver, &start_cell, &goal_cell);
        }
        assert_eq!(!path.is_empty(), reachable);
        if !reachable {
            continue;
        }

        let bfs = bfs_distances(&solver, start_cell);
        let goal_ix = solver.pathing_grid().grid.get_ix_point(&goal_cell);
        assert_eq!(Some(path.steps() as i32), bfs[goal_ix]);

        assert_eq!(path.first(), Some(&start));
        assert_eq!(path.last(), Some(&goal));
        for p in &path {
            let cell = solver.world_to_cell(*p);
            assert!(solver.is_traversable(&cell));
            assert_eq!(solver.cell_center(&cell), *p);
        }
        for (a, b) in path.iter().tuple_windows() {
            let steps = (a.x - b.x).abs() + (a.y - b.y).abs();
            assert_eq!(steps, CELL);
        }
    }
}

#[test]
fn heuristic_is_admissible() {
    const N: usize = 6;
    const N_GRIDS: usize = 300;
    let mut rng = StdRng::seed_from_u64(7);
    let side = N as f64 * CELL;
    for _ in 0..N_GRIDS {
        let map = random_scene(N, &mut rng);
        let solver = GridPathfinder::new(&map, side, side);
        let cells = (0..N as i32)
            .cartesian_product(0..N as i32)
            .map(|(x, y)| Point::new(x, y))
            .filter(|p| solver.is_traversable(p))
            .collect::<Vec<_>>();
        let grid = &solver.pathing_grid().grid;
        for source in &cells {
            let bfs = bfs_distances(&solver, *source);
            for target in &cells {
                if let Some(d) = bfs[grid.get_ix_point(target)] {
                    assert!(solver.heuristic(source, target) <= d);
                }
            }
        }
    }
}

#[test]
fn open_grid_paths_are_manhattan_optimal() {
    let map = ObstacleMap::new(vec![], CELL).unwrap();
    let solver = GridPathfinder::new(&map, 120.0, 80.0);
    let mut rng = StdRng::seed_from_u64(3);
    for _ in 0..200 {
        let start = WorldPoint::new(rng.gen_range(0.0..120.0), rng.gen_range(0.0..80.0));
        let goal = WorldPoint::new(rng.gen_range(0.0..120.0), rng.gen_range(0.0..80.0));
        let path = solver.find_path(start, goal).unwrap();
        let a = solver.world_to_cell(start);
        let b = solver.world_to_cell(goal);
        assert_eq!(path.steps() as i32, solver.heuristic(&a, &b));
    }
}
