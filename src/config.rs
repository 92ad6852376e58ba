use crate::drive::RobotGeometry;
use crate::error::{Result, SimError};
use crate::obstacle_map::Obstacle;
use crate::render::Style;
use crate::trail::DEFAULT_TRAIL_CAPACITY;
use crate::WorldPoint;

/// Wheel speed magnitude, in rad/s, issued by the drive commands.
pub const DRIVE_SPEED: f64 = 20.0;
pub const TARGET_FPS: u32 = 60;

/// Initialization parameters of a simulation run. [Default] gives the reference scene.
#[derive(Clone, Debug, PartialEq)]
pub struct SimConfig {
    pub width: f64,
    pub height: f64,
    pub cell_size: f64,
    pub start: WorldPoint,
    pub goal: WorldPoint,
    pub robot: RobotGeometry,
    pub drive_speed: f64,
    pub trail_capacity: usize,
    pub target_fps: u32,
    pub obstacles: Vec<Obstacle>,
    /// Bound on A* node expansions, [None] for an exhaustive search.
    pub max_expansions: Option<usize>,
    pub style: Style,
}

impl Default for SimConfig {
    fn default() -> SimConfig {
        SimConfig {
            width: 800.0,
            height: 600.0,
            cell_size: 20.0,
            start: WorldPoint::new(100.0, 100.0),
            goal: WorldPoint::new(700.0, 500.0),
            robot: RobotGeometry::default(),
            drive_speed: DRIVE_SPEED,
            trail_capacity: DEFAULT_TRAIL_CAPACITY,
            target_fps: TARGET_FPS,
            obstacles: vec![
                Obstacle::new(200.0, 150.0, 100.0, 300.0),
                Obstacle::new(400.0, 100.0, 50.0, 400.0),
                Obstacle::new(600.0, 200.0, 100.0, 100.0),
            ],
            max_expansions: None,
            style: Style::default(),
        }
    }
}

impl SimConfig {
    /// Rejects values the grid or the kinematics cannot work with.
    pub fn validate(&self) -> Result<()> {
        let positive = |name: &str, value: f64| {
            if value.is_finite() && value > 0.0 {
                Ok(())
            } else {
                Err(SimError::invalid_config(format!(
                    "{} must be positive, got {}",
                    name, value
                )))
            }
        };
        positive("width", self.width)?;
        positive("height", self.height)?;
        positive("cell_size", self.cell_size)?;
        positive("wheel_base", self.robot.wheel_base)?;
        if self.cell_size > self.width || self.cell_size > self.height {
            return Err(SimError::invalid_config(format!(
                "cell_size {} does not fit the {}x{} workspace",
                self.cell_size, self.width, self.height
            )));
        }
        if self.trail_capacity == 0 {
            return Err(SimError::invalid_config("trail_capacity must be non-zero"));
        }
        if self.target_fps == 0 {
            return Err(SimError::invalid_config("target_fps must be non-zero"));
        }
        Ok(())
    }
}
