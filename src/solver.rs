//! Grid A* between world coordinates.
use crate::astar::{astar, SearchStats};
use crate::error::{Result, SimError};
use crate::obstacle_map::ObstacleMap;
use crate::pathing_grid::PathingGrid;
use crate::WorldPoint;
use grid_util::point::Point;
use itertools::Itertools;
use log::{info, warn};

/// An ordered sequence of cell-center waypoints from the start cell to the goal cell. An empty
/// path means no route exists.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Path {
    waypoints: Vec<WorldPoint>,
}

impl Path {
    pub fn new(waypoints: Vec<WorldPoint>) -> Path {
        Path { waypoints }
    }
    pub fn empty() -> Path {
        Path::default()
    }
    pub fn is_empty(&self) -> bool {
        self.waypoints.is_empty()
    }
    pub fn len(&self) -> usize {
        self.waypoints.len()
    }
    /// Number of grid steps, one less than the number of waypoints.
    pub fn steps(&self) -> usize {
        self.waypoints.len().saturating_sub(1)
    }
    pub fn waypoints(&self) -> &[WorldPoint] {
        &self.waypoints
    }
    pub fn first(&self) -> Option<&WorldPoint> {
        self.waypoints.first()
    }
    pub fn last(&self) -> Option<&WorldPoint> {
        self.waypoints.last()
    }
    pub fn iter(&self) -> std::slice::Iter<'_, WorldPoint> {
        self.waypoints.iter()
    }
    /// Polyline length in world units.
    pub fn length(&self) -> f64 {
        self.waypoints
            .iter()
            .tuple_windows()
            .map(|(a, b)| a.distance(b))
            .sum()
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a WorldPoint;
    type IntoIter = std::slice::Iter<'a, WorldPoint>;
    fn into_iter(self) -> Self::IntoIter {
        self.waypoints.iter()
    }
}

/// Plans 4-connected, unit-cost paths over the rasterized obstacle map using the Manhattan
/// distance as heuristic.
///
/// Only the start and goal are validated: both must lie inside the workspace. The start cell is
/// never checked for occupancy, so a search can originate inside an obstacle. A blocked goal is
/// never relaxed and yields an empty [Path].
#[derive(Clone, Debug)]
pub struct GridPathfinder<'a> {
    map: &'a ObstacleMap,
    grid: PathingGrid,
    world_width: f64,
    world_height: f64,
    pub max_expansions: Option<usize>,
}

impl<'a> GridPathfinder<'a> {
    pub fn new(map: &'a ObstacleMap, world_width: f64, world_height: f64) -> GridPathfinder<'a> {
        GridPathfinder {
            map,
            grid: PathingGrid::from_obstacles(map, world_width, world_height),
            world_width,
            world_height,
            max_expansions: None,
        }
    }
    pub fn with_max_expansions(mut self, max_expansions: Option<usize>) -> Self {
        self.max_expansions = max_expansions;
        self
    }

    pub fn obstacle_map(&self) -> &ObstacleMap {
        self.map
    }
    pub fn pathing_grid(&self) -> &PathingGrid {
        &self.grid
    }
    /// Grid size as (columns, rows).
    pub fn grid_dimensions(&self) -> (usize, usize) {
        (self.grid.cols(), self.grid.rows())
    }
    pub fn world_to_cell(&self, point: WorldPoint) -> Point {
        self.grid.world_to_cell(point.x, point.y)
    }
    pub fn cell_center(&self, cell: &Point) -> WorldPoint {
        let (x, y) = self.grid.cell_center(cell);
        WorldPoint::new(x, y)
    }
    /// Whether the search may enter `cell`.
    pub fn is_traversable(&self, cell: &Point) -> bool {
        self.grid.can_move_to(cell)
    }
    /// Manhattan distance in cells, which never overestimates the number of 4-connected steps.
    pub fn heuristic(&self, a: &Point, b: &Point) -> i32 {
        a.manhattan_distance(b) * crate::C
    }

    fn validate(&self, point: WorldPoint) -> Result<Point> {
        let inside = point.x.is_finite()
            && point.y.is_finite()
            && point.x >= 0.0
            && point.y >= 0.0
            && point.x < self.world_width
            && point.y < self.world_height;
        let cell = self.world_to_cell(point);
        if inside && self.grid.in_bounds(&cell) {
            Ok(cell)
        } else {
            Err(SimError::OutOfBounds {
                x: point.x,
                y: point.y,
                width: self.world_width,
                height: self.world_height,
            })
        }
    }

    /// Computes the path between the cells containing `start` and `goal`.
    pub fn find_path(&self, start: WorldPoint, goal: WorldPoint) -> Result<Path> {
        self.find_path_with_stats(start, goal).map(|(path, _)| path)
    }

    /// Like [find_path](Self::find_path), also reporting how much work the search did.
    pub fn find_path_with_stats(
        &self,
        start: WorldPoint,
        goal: WorldPoint,
    ) -> Result<(Path, SearchStats)> {
        let start_cell = self.validate(start)?;
        let goal_cell = self.validate(goal)?;
        let start_blocked = self.grid.is_blocked(&start_cell);
        if start_blocked {
            warn!("Start cell {} is blocked, searching from it anyway", start_cell);
        }
        if start_cell != goal_cell {
            if self.grid.is_blocked(&goal_cell) {
                warn!("Goal cell {} is blocked", goal_cell);
                return Ok((Path::empty(), SearchStats::default()));
            }
            // Components only describe traversable cells, so a blocked start must be searched.
            if !start_blocked && self.grid.unreachable(&start_cell, &goal_cell) {
                warn!("{} is not reachable from {}", goal_cell, start_cell);
                return Ok((Path::empty(), SearchStats::default()));
            }
        }
        info!("Computing path from {} to {}", start_cell, goal_cell);
        let (result, stats) = astar(
            &start_cell,
            |node| self.grid.neighborhood_points_and_cost(node),
            |node| self.heuristic(node, &goal_cell),
            |node| *node == goal_cell,
            self.max_expansions,
        );
        let path = match result {
            Some((cells, cost)) => {
                info!(
                    "Found path of cost {} with {} expansions",
                    cost, stats.expanded
                );
                Path::new(cells.iter().map(|cell| self.cell_center(cell)).collect())
            }
            None => {
                warn!("No path from {} to {}", start_cell, goal_cell);
                Path::empty()
            }
        };
        Ok((path, stats))
    }
}
