//! First-order differential-drive kinematics.
//!
//! Heading follows the usual convention of 0 along +x, increasing counter-clockwise, and is never
//! wrapped. With screen coordinates (y pointing down) a positive turn rate therefore appears
//! clockwise on screen.
use crate::trail::Trail;
use crate::WorldPoint;
use log::debug;
use std::f64::consts::TAU;

/// Physical dimensions of the robot.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RobotGeometry {
    /// Side length of the robot body, used for drawing.
    pub size: f64,
    pub wheel_radius: f64,
    /// Distance between the two wheel contact points. Must be positive.
    pub wheel_base: f64,
}

impl Default for RobotGeometry {
    fn default() -> RobotGeometry {
        RobotGeometry {
            size: 20.0,
            wheel_radius: 5.0,
            wheel_base: 40.0,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct RobotPose {
    pub x: f64,
    pub y: f64,
    /// Radians, unbounded.
    pub heading: f64,
}

impl RobotPose {
    pub fn new(x: f64, y: f64, heading: f64) -> RobotPose {
        RobotPose { x, y, heading }
    }
    pub fn position(&self) -> WorldPoint {
        WorldPoint::new(self.x, self.y)
    }
    /// Heading wrapped into `[0, 2π)`.
    pub fn normalized_heading(&self) -> f64 {
        self.heading.rem_euclid(TAU)
    }
}

/// Wheel angular speeds in radians per second.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct WheelCommand {
    pub left: f64,
    pub right: f64,
}

impl WheelCommand {
    pub const STOP: WheelCommand = WheelCommand {
        left: 0.0,
        right: 0.0,
    };
    pub fn new(left: f64, right: f64) -> WheelCommand {
        WheelCommand { left, right }
    }
}

/// Owns the robot pose, the current wheel command and the trail of visited positions.
#[derive(Clone, Debug)]
pub struct DifferentialDrive {
    geometry: RobotGeometry,
    pose: RobotPose,
    command: WheelCommand,
    trail: Trail,
}

impl DifferentialDrive {
    pub fn new(geometry: RobotGeometry, pose: RobotPose) -> DifferentialDrive {
        Self::with_trail(geometry, pose, Trail::default())
    }
    pub fn with_trail(geometry: RobotGeometry, pose: RobotPose, trail: Trail) -> DifferentialDrive {
        debug_assert!(geometry.wheel_base > 0.0);
        DifferentialDrive {
            geometry,
            pose,
            command: WheelCommand::STOP,
            trail,
        }
    }

    pub fn geometry(&self) -> &RobotGeometry {
        &self.geometry
    }
    pub fn pose(&self) -> &RobotPose {
        &self.pose
    }
    pub fn command(&self) -> WheelCommand {
        self.command
    }
    pub fn trail(&self) -> &Trail {
        &self.trail
    }

    /// Replaces the current command. Speeds are not range checked.
    pub fn set_wheel_speeds(&mut self, left: f64, right: f64) {
        self.command = WheelCommand::new(left, right);
    }
    pub fn set_command(&mut self, command: WheelCommand) {
        self.command = command;
    }

    /// Forward speed and turn rate of the body for the current command.
    pub fn body_velocity(&self) -> (f64, f64) {
        let v_left = self.command.left * self.geometry.wheel_radius;
        let v_right = self.command.right * self.geometry.wheel_radius;
        (
            (v_left + v_right) / 2.0,
            (v_right - v_left) / self.geometry.wheel_base,
        )
    }

    /// Advances the pose by `dt` seconds with a single Euler step and records the new position in
    /// the trail. Negative or non-finite `dt` is treated as zero.
    pub fn integrate(&mut self, dt: f64) {
        let dt = if dt.is_finite() && dt > 0.0 {
            dt
        } else {
            if dt != 0.0 {
                debug!("Ignoring invalid time step {}", dt);
            }
            0.0
        };
        let (v, omega) = self.body_velocity();
        let (sin, cos) = self.pose.heading.sin_cos();
        self.pose.x += v * cos * dt;
        self.pose.y += v * sin * dt;
        self.pose.heading += omega * dt;
        self.trail.push(self.pose.position());
    }
}
