use diffdrive_sim::{GridPathfinder, Obstacle, ObstacleMap, SimConfig};

// Prints the rasterized reference scene with the planned path on top, where
// - # marks a blocked cell
// - * marks a waypoint
// - S and G mark the start and goal cells
//
// A second, enclosed goal shows the empty path returned when no route exists.

fn main() {
    let config = SimConfig::default();
    let map = ObstacleMap::new(config.obstacles.clone(), config.cell_size).unwrap();
    let solver = GridPathfinder::new(&map, config.width, config.height);
    let path = solver.find_path(config.start, config.goal).unwrap();

    let mut rows = solver
        .pathing_grid()
        .to_string()
        .lines()
        .map(|l| l.chars().collect::<Vec<char>>())
        .collect::<Vec<_>>();
    for p in &path {
        let cell = solver.world_to_cell(*p);
        rows[cell.y as usize][cell.x as usize] = '*';
    }
    let start = solver.world_to_cell(config.start);
    let goal = solver.world_to_cell(config.goal);
    rows[start.y as usize][start.x as usize] = 'S';
    rows[goal.y as usize][goal.x as usize] = 'G';
    for row in rows {
        println!("{}", row.into_iter().collect::<String>());
    }
    println!("{} steps, {:.0} units", path.steps(), path.length());

    let mut walled = config.obstacles.clone();
    walled.push(Obstacle::new(660.0, 460.0, 100.0, 20.0));
    walled.push(Obstacle::new(660.0, 540.0, 100.0, 20.0));
    walled.push(Obstacle::new(660.0, 480.0, 20.0, 60.0));
    walled.push(Obstacle::new(740.0, 480.0, 20.0, 60.0));
    let walled_map = ObstacleMap::new(walled, config.cell_size).unwrap();
    let walled_solver = GridPathfinder::new(&walled_map, config.width, config.height);
    let enclosed = walled_solver.find_path(config.start, config.goal).unwrap();
    println!("Enclosed goal path is empty: {}", enclosed.is_empty());
}
