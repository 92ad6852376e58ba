//! # diffdrive_sim
//!
//! A simulation of a differential-drive robot in a 2D workspace with static rectangular
//! obstacles. A reference path from start to goal is precomputed once with
//! [A*](https://en.wikipedia.org/wiki/A*_search_algorithm) over a 4-connected grid
//! rasterized from the obstacles, using the
//! [Manhattan distance](https://en.wikipedia.org/wiki/Taxicab_geometry) as heuristic.
//! Pre-computes [connected components](https://en.wikipedia.org/wiki/Component_(graph_theory))
//! to avoid flood-filling behaviour if no path exists.
//!
//! The robot itself is driven by wheel-speed commands and integrated with first-order
//! differential-drive kinematics. It does not follow the planned path; both are only overlaid
//! when a frame is drawn to a [RenderSink](render::RenderSink).
pub mod astar;
pub mod config;
pub mod drive;
pub mod error;
pub mod input;
pub mod obstacle_map;
pub mod pathing_grid;
pub mod render;
pub mod simulation;
pub mod solver;
pub mod trail;

pub use config::SimConfig;
pub use drive::{DifferentialDrive, RobotGeometry, RobotPose, WheelCommand};
pub use error::SimError;
pub use obstacle_map::{Obstacle, ObstacleMap};
pub use simulation::Simulation;
pub use solver::{GridPathfinder, Path};
pub use trail::Trail;

/// Cost of a single grid step.
pub const C: i32 = 1;
/// Inline capacity of successor lists; a cell has at most four neighbours.
pub const N_SMALLVEC_SIZE: usize = 4;

/// A position in continuous world coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct WorldPoint {
    pub x: f64,
    pub y: f64,
}

impl WorldPoint {
    pub const fn new(x: f64, y: f64) -> WorldPoint {
        WorldPoint { x, y }
    }
    pub fn distance(&self, other: &WorldPoint) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

impl From<(f64, f64)> for WorldPoint {
    fn from((x, y): (f64, f64)) -> Self {
        WorldPoint { x, y }
    }
}
