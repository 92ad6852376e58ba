//! Static rectangular obstacles and the occupancy queries run against them.
use crate::error::{Result, SimError};

/// An axis-aligned rectangle in world coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Obstacle {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Obstacle {
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Obstacle {
        Obstacle {
            x,
            y,
            width,
            height,
        }
    }
    pub fn left(&self) -> f64 {
        self.x
    }
    pub fn right(&self) -> f64 {
        self.x + self.width
    }
    pub fn top(&self) -> f64 {
        self.y
    }
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }
    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }
    /// Strict overlap on both axes. Rectangles that only share an edge do not
    /// intersect, and an empty rectangle intersects nothing.
    pub fn intersects(&self, other: &Obstacle) -> bool {
        !self.is_empty()
            && !other.is_empty()
            && self.left() < other.right()
            && other.left() < self.right()
            && self.top() < other.bottom()
            && other.top() < self.bottom()
    }
    /// Half-open containment: `[left, right) x [top, bottom)`.
    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.left() && x < self.right() && y >= self.top() && y < self.bottom()
    }
}

/// The fixed set of obstacles in the workspace. Read-only after construction.
#[derive(Clone, Debug)]
pub struct ObstacleMap {
    obstacles: Vec<Obstacle>,
    cell_size: f64,
}

impl ObstacleMap {
    /// Fails if `cell_size` is not a finite, positive number.
    pub fn new(obstacles: Vec<Obstacle>, cell_size: f64) -> Result<ObstacleMap> {
        if !(cell_size.is_finite() && cell_size > 0.0) {
            return Err(SimError::invalid_config(format!(
                "cell size must be positive and finite, got {}",
                cell_size
            )));
        }
        Ok(ObstacleMap {
            obstacles,
            cell_size,
        })
    }
    pub fn obstacles(&self) -> &[Obstacle] {
        &self.obstacles
    }
    pub fn cell_size(&self) -> f64 {
        self.cell_size
    }
    /// Whether the cell-sized square whose top-left corner is at
    /// (`world_x`, `world_y`) overlaps any obstacle.
    pub fn is_blocked(&self, world_x: f64, world_y: f64) -> bool {
        self.is_region_blocked(&Obstacle::new(
            world_x,
            world_y,
            self.cell_size,
            self.cell_size,
        ))
    }
    pub fn is_region_blocked(&self, region: &Obstacle) -> bool {
        self.obstacles.iter().any(|obs| obs.intersects(region))
    }
    pub fn contains_point(&self, x: f64, y: f64) -> bool {
        self.obstacles.iter().any(|obs| obs.contains(x, y))
    }
}
