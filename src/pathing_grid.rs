use crate::obstacle_map::ObstacleMap;
use crate::N_SMALLVEC_SIZE;
use core::fmt;
use grid_util::grid::{BoolGrid, ValueGrid};
use grid_util::point::Point;
use log::info;
use petgraph::unionfind::UnionFind;
use smallvec::SmallVec;

/// [PathingGrid] is the rasterized form of an [ObstacleMap]. Each cell of the [BoolGrid] is
/// blocked ([true]) if the cell-sized square at its top-left corner overlaps an obstacle.
/// Connected components over the 4-neighborhood are kept in a [UnionFind] so that
/// unreachable goals can be rejected without flood-filling the grid.
#[derive(Clone, Debug)]
pub struct PathingGrid {
    pub grid: BoolGrid,
    pub components: UnionFind<usize>,
    cell_size: f64,
}

impl PathingGrid {
    /// Rasterizes `map` over a `world_width` x `world_height` workspace. Cells that would only
    /// partially fit at the far edges are clipped.
    pub fn from_obstacles(map: &ObstacleMap, world_width: f64, world_height: f64) -> PathingGrid {
        let cell_size = map.cell_size();
        let cols = (world_width / cell_size).floor().max(0.0) as usize;
        let rows = (world_height / cell_size).floor().max(0.0) as usize;
        let mut grid = BoolGrid::new(cols, rows, false);
        for x in 0..cols as i32 {
            for y in 0..rows as i32 {
                let blocked = map.is_blocked(x as f64 * cell_size, y as f64 * cell_size);
                grid.set(x, y, blocked);
            }
        }
        let mut pathing_grid = PathingGrid {
            grid,
            components: UnionFind::new(cols * rows),
            cell_size,
        };
        pathing_grid.generate_components();
        pathing_grid
    }

    pub fn cols(&self) -> usize {
        self.grid.width
    }
    pub fn rows(&self) -> usize {
        self.grid.height
    }
    pub fn cell_size(&self) -> f64 {
        self.cell_size
    }

    pub fn in_bounds(&self, point: &Point) -> bool {
        self.grid.point_in_bounds(*point)
    }
    pub fn is_blocked(&self, point: &Point) -> bool {
        self.grid.get(point.x, point.y)
    }
    /// In bounds and not blocked.
    pub fn can_move_to(&self, point: &Point) -> bool {
        self.in_bounds(point) && !self.is_blocked(point)
    }

    /// Traversable cells of the 4-neighborhood of `point`, each with unit cost.
    pub fn neighborhood_points_and_cost(
        &self,
        point: &Point,
    ) -> SmallVec<[(Point, i32); N_SMALLVEC_SIZE]> {
        point
            .neumann_neighborhood_array()
            .into_iter()
            .filter(|p| self.can_move_to(p))
            .map(|p| (p, crate::C))
            .collect()
    }

    /// Maps a world coordinate to the cell containing it. The result may be out of bounds.
    pub fn world_to_cell(&self, world_x: f64, world_y: f64) -> Point {
        Point::new(
            (world_x / self.cell_size).floor() as i32,
            (world_y / self.cell_size).floor() as i32,
        )
    }
    /// World coordinate of the center of `cell`.
    pub fn cell_center(&self, cell: &Point) -> (f64, f64) {
        let half = self.cell_size / 2.0;
        (
            cell.x as f64 * self.cell_size + half,
            cell.y as f64 * self.cell_size + half,
        )
    }

    /// Retrieves the component id a given [Point] belongs to.
    pub fn get_component(&self, point: &Point) -> usize {
        self.components.find(self.grid.get_ix_point(point))
    }
    /// Checks if start and goal are on the same component.
    pub fn reachable(&self, start: &Point, goal: &Point) -> bool {
        !self.unreachable(start, goal)
    }
    /// Checks if start and goal are not on the same component.
    pub fn unreachable(&self, start: &Point, goal: &Point) -> bool {
        if self.in_bounds(start) && self.in_bounds(goal) {
            !self
                .components
                .equiv(self.grid.get_ix_point(start), self.grid.get_ix_point(goal))
        } else {
            true
        }
    }

    /// Generates a new [UnionFind] structure and links up traversable grid neighbours to the same
    /// components. Only the right and lower neighbours need to be joined.
    pub fn generate_components(&mut self) {
        info!(
            "Generating connected components for {}x{} grid",
            self.cols(),
            self.rows()
        );
        self.components = UnionFind::new(self.cols() * self.rows());
        for x in 0..self.cols() as i32 {
            for y in 0..self.rows() as i32 {
                let point = Point::new(x, y);
                if self.is_blocked(&point) {
                    continue;
                }
                let parent_ix = self.grid.get_ix_point(&point);
                for neighbour in [Point::new(x + 1, y), Point::new(x, y + 1)] {
                    if self.can_move_to(&neighbour) {
                        let ix = self.grid.get_ix_point(&neighbour);
                        self.components.union(parent_ix, ix);
                    }
                }
            }
        }
    }
}

impl fmt::Display for PathingGrid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for y in 0..self.rows() as i32 {
            let row = (0..self.cols() as i32)
                .map(|x| if self.grid.get(x, y) { '#' } else { '.' })
                .collect::<String>();
            writeln!(f, "{}", row)?;
        }
        Ok(())
    }
}
