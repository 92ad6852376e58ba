//! Presentation: immutable frame snapshots and the sink they are drawn to.
//!
//! Drawing never touches simulation state. [Simulation](crate::Simulation) hands a
//! [FrameSnapshot] to [draw_frame], which translates it into primitive calls on a [RenderSink].
use crate::drive::RobotPose;
use crate::obstacle_map::Obstacle;
use crate::WorldPoint;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Color(pub u8, pub u8, pub u8);

pub const BLACK: Color = Color(0, 0, 0);
pub const RED: Color = Color(255, 0, 0);
pub const YELLOW: Color = Color(255, 255, 0);
pub const GRAY: Color = Color(100, 100, 100);
pub const GREEN: Color = Color(0, 255, 0);

/// Line widths and marker sizes used by [draw_frame].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Style {
    pub background: Color,
    pub obstacle: Color,
    pub path: Color,
    pub path_width: f64,
    pub trail: Color,
    pub trail_width: f64,
    pub goal: Color,
    pub goal_radius: f64,
    /// Sprite extent in pixels (width, height).
    pub sprite_size: (f64, f64),
}

impl Default for Style {
    fn default() -> Style {
        Style {
            background: BLACK,
            obstacle: GRAY,
            path: YELLOW,
            path_width: 3.0,
            trail: RED,
            trail_width: 2.0,
            goal: GREEN,
            goal_radius: 20.0,
            sprite_size: (80.0, 81.0),
        }
    }
}

/// The drawing primitives a display backend has to provide.
pub trait RenderSink {
    fn clear(&mut self, color: Color);
    fn fill_rect(&mut self, rect: &Obstacle, color: Color);
    fn polyline(&mut self, points: &[WorldPoint], color: Color, width: f64);
    fn fill_circle(&mut self, center: WorldPoint, radius: f64, color: Color);
    /// Robot body centered on the pose and rotated by its heading.
    fn sprite(&mut self, pose: &RobotPose, size: (f64, f64));
    /// Ends the frame.
    fn present(&mut self) {}
}

/// Everything needed to draw one frame, copied out of the simulation.
#[derive(Clone, Debug, PartialEq)]
pub struct FrameSnapshot<'a> {
    pub obstacles: &'a [Obstacle],
    pub path: &'a [WorldPoint],
    pub goal: WorldPoint,
    pub pose: RobotPose,
    pub trail: Vec<WorldPoint>,
}

/// Draws background, obstacles, planned path, goal marker, trail and robot, in that order.
/// Polylines with fewer than two points are skipped.
pub fn draw_frame<R: RenderSink + ?Sized>(sink: &mut R, frame: &FrameSnapshot, style: &Style) {
    sink.clear(style.background);
    for obstacle in frame.obstacles {
        sink.fill_rect(obstacle, style.obstacle);
    }
    if frame.path.len() > 1 {
        sink.polyline(frame.path, style.path, style.path_width);
    }
    sink.fill_circle(frame.goal, style.goal_radius, style.goal);
    if frame.trail.len() > 1 {
        sink.polyline(&frame.trail, style.trail, style.trail_width);
    }
    sink.sprite(&frame.pose, style.sprite_size);
    sink.present();
}

#[derive(Clone, Debug, PartialEq)]
pub enum DrawCall {
    Clear(Color),
    FillRect(Obstacle, Color),
    Polyline(Vec<WorldPoint>, Color, f64),
    FillCircle(WorldPoint, f64, Color),
    Sprite(RobotPose, (f64, f64)),
    Present,
}

/// Stores every call, for headless runs and tests.
#[derive(Clone, Debug, Default)]
pub struct RecordingSink {
    pub calls: Vec<DrawCall>,
    pub frames: usize,
}

impl RecordingSink {
    pub fn new() -> RecordingSink {
        RecordingSink::default()
    }
    /// Calls since the most recent clear.
    pub fn last_frame(&self) -> &[DrawCall] {
        let start = self
            .calls
            .iter()
            .rposition(|c| matches!(c, DrawCall::Clear(_)))
            .unwrap_or(0);
        &self.calls[start..]
    }
}

impl RenderSink for RecordingSink {
    fn clear(&mut self, color: Color) {
        self.calls.push(DrawCall::Clear(color));
    }
    fn fill_rect(&mut self, rect: &Obstacle, color: Color) {
        self.calls.push(DrawCall::FillRect(*rect, color));
    }
    fn polyline(&mut self, points: &[WorldPoint], color: Color, width: f64) {
        self.calls
            .push(DrawCall::Polyline(points.to_vec(), color, width));
    }
    fn fill_circle(&mut self, center: WorldPoint, radius: f64, color: Color) {
        self.calls.push(DrawCall::FillCircle(center, radius, color));
    }
    fn sprite(&mut self, pose: &RobotPose, size: (f64, f64)) {
        self.calls.push(DrawCall::Sprite(*pose, size));
    }
    fn present(&mut self) {
        self.calls.push(DrawCall::Present);
        self.frames += 1;
    }
}
