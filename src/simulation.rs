//! The driver tying input, kinematics and presentation together.
use crate::config::SimConfig;
use crate::drive::{DifferentialDrive, RobotPose};
use crate::error::Result;
use crate::input::{InputEvent, InputSource};
use crate::obstacle_map::ObstacleMap;
use crate::render::{draw_frame, FrameSnapshot, RenderSink};
use crate::solver::{GridPathfinder, Path};
use crate::trail::Trail;
use log::{debug, info, warn};
use std::thread;
use std::time::{Duration, Instant};

/// Frame pacing. Returns the seconds elapsed since the previous tick.
pub trait Clock {
    fn tick(&mut self, target_fps: u32) -> f64;
}

/// Wall-clock pacing: sleeps out the rest of each frame and reports the measured interval.
#[derive(Debug)]
pub struct FrameClock {
    last: Instant,
}

impl Default for FrameClock {
    fn default() -> FrameClock {
        FrameClock {
            last: Instant::now(),
        }
    }
}

impl Clock for FrameClock {
    fn tick(&mut self, target_fps: u32) -> f64 {
        let frame = Duration::from_secs_f64(1.0 / target_fps.max(1) as f64);
        let elapsed = self.last.elapsed();
        if elapsed < frame {
            thread::sleep(frame - elapsed);
        }
        let now = Instant::now();
        let dt = now.duration_since(self.last).as_secs_f64();
        self.last = now;
        dt
    }
}

/// Reports the same interval on every tick without waiting.
#[derive(Clone, Copy, Debug)]
pub struct FixedClock {
    pub dt: f64,
}

impl FixedClock {
    pub fn from_fps(fps: u32) -> FixedClock {
        FixedClock {
            dt: 1.0 / fps.max(1) as f64,
        }
    }
}

impl Clock for FixedClock {
    fn tick(&mut self, _target_fps: u32) -> f64 {
        self.dt
    }
}

/// One simulation run: the static scene, the path planned at startup and the robot.
#[derive(Clone, Debug)]
pub struct Simulation {
    config: SimConfig,
    map: ObstacleMap,
    path: Path,
    robot: DifferentialDrive,
    running: bool,
    frame: u64,
}

impl Simulation {
    /// Validates `config`, builds the obstacle map and plans the start-to-goal path. Failing to
    /// find a path is not an error; the run continues without a path overlay.
    pub fn new(config: SimConfig) -> Result<Simulation> {
        config.validate()?;
        let map = ObstacleMap::new(config.obstacles.clone(), config.cell_size)?;
        let path = GridPathfinder::new(&map, config.width, config.height)
            .with_max_expansions(config.max_expansions)
            .find_path(config.start, config.goal)?;
        if path.is_empty() {
            warn!("No path from start to goal, continuing without a planned path");
        } else {
            info!(
                "Planned path with {} waypoints ({:.1} units)",
                path.len(),
                path.length()
            );
        }
        let robot = DifferentialDrive::with_trail(
            config.robot,
            RobotPose::new(config.start.x, config.start.y, 0.0),
            Trail::with_capacity(config.trail_capacity),
        );
        Ok(Simulation {
            config,
            map,
            path,
            robot,
            running: true,
            frame: 0,
        })
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }
    pub fn obstacle_map(&self) -> &ObstacleMap {
        &self.map
    }
    pub fn path(&self) -> &Path {
        &self.path
    }
    pub fn robot(&self) -> &DifferentialDrive {
        &self.robot
    }
    pub fn is_running(&self) -> bool {
        self.running
    }
    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn handle(&mut self, event: InputEvent) {
        match event {
            InputEvent::Command(command) => {
                debug!("Drive command {:?}", command);
                self.robot
                    .set_command(command.wheel_command(self.config.drive_speed));
            }
            InputEvent::Quit => {
                info!("Quit requested after {} frames", self.frame);
                self.running = false;
            }
        }
    }

    /// Advances the robot by `dt` seconds.
    pub fn step(&mut self, dt: f64) {
        self.robot.integrate(dt);
        self.frame += 1;
    }

    pub fn snapshot(&self) -> FrameSnapshot<'_> {
        FrameSnapshot {
            obstacles: self.map.obstacles(),
            path: self.path.waypoints(),
            goal: self.config.goal,
            pose: *self.robot.pose(),
            trail: self.robot.trail().to_vec(),
        }
    }

    /// Runs poll, integrate and draw until a [InputEvent::Quit] arrives. Returns the number of
    /// frames drawn.
    pub fn run<I, R, K>(&mut self, input: &mut I, sink: &mut R, clock: &mut K) -> u64
    where
        I: InputSource + ?Sized,
        R: RenderSink + ?Sized,
        K: Clock + ?Sized,
    {
        let mut drawn = 0;
        while self.running {
            for event in input.poll() {
                self.handle(event);
            }
            if !self.running {
                break;
            }
            let dt = clock.tick(self.config.target_fps);
            self.step(dt);
            draw_frame(sink, &self.snapshot(), &self.config.style);
            drawn += 1;
        }
        drawn
    }
}
