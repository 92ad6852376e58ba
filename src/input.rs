//! Discrete drive commands and the seam through which they reach the simulation.
use crate::drive::WheelCommand;
use std::collections::VecDeque;

/// The commands a keyboard-style controller can issue.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DriveCommand {
    Forward,
    Reverse,
    PivotLeft,
    PivotRight,
    /// Issued when the driving key is released.
    Stop,
}

impl DriveCommand {
    /// Wheel speeds for this command with wheel speed magnitude `speed`.
    pub fn wheel_command(self, speed: f64) -> WheelCommand {
        match self {
            DriveCommand::Forward => WheelCommand::new(speed, speed),
            DriveCommand::Reverse => WheelCommand::new(-speed, -speed),
            DriveCommand::PivotLeft => WheelCommand::new(-speed, speed),
            DriveCommand::PivotRight => WheelCommand::new(speed, -speed),
            DriveCommand::Stop => WheelCommand::STOP,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputEvent {
    Command(DriveCommand),
    Quit,
}

/// Anything that yields the input events received since the previous poll.
pub trait InputSource {
    fn poll(&mut self) -> Vec<InputEvent>;
}

/// Replays a fixed script, one batch of events per poll. Once the script runs out a
/// [InputEvent::Quit] is returned on every poll.
#[derive(Clone, Debug, Default)]
pub struct ScriptedInput {
    frames: VecDeque<Vec<InputEvent>>,
}

impl ScriptedInput {
    pub fn new(frames: Vec<Vec<InputEvent>>) -> ScriptedInput {
        ScriptedInput {
            frames: frames.into(),
        }
    }
    /// Holds `command` for `frames` polls, then releases it.
    pub fn hold(mut self, command: DriveCommand, frames: usize) -> Self {
        if frames == 0 {
            return self;
        }
        self.frames.push_back(vec![InputEvent::Command(command)]);
        self.frames.extend((1..frames).map(|_| Vec::new()));
        self.frames
            .push_back(vec![InputEvent::Command(DriveCommand::Stop)]);
        self
    }
    /// Polls that produce no events.
    pub fn idle(mut self, frames: usize) -> Self {
        self.frames.extend((0..frames).map(|_| Vec::new()));
        self
    }
    pub fn remaining(&self) -> usize {
        self.frames.len()
    }
}

impl InputSource for ScriptedInput {
    fn poll(&mut self) -> Vec<InputEvent> {
        self.frames
            .pop_front()
            .unwrap_or_else(|| vec![InputEvent::Quit])
    }
}
