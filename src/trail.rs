use crate::WorldPoint;
use std::collections::VecDeque;

/// Capacity used by the reference scene.
pub const DEFAULT_TRAIL_CAPACITY: usize = 1000;

/// Bounded history of past robot positions, oldest first. Pushing past capacity evicts the
/// oldest entry.
#[derive(Clone, Debug)]
pub struct Trail {
    points: VecDeque<WorldPoint>,
    capacity: usize,
}

impl Default for Trail {
    fn default() -> Trail {
        Trail::with_capacity(DEFAULT_TRAIL_CAPACITY)
    }
}

impl Trail {
    pub fn with_capacity(capacity: usize) -> Trail {
        Trail {
            points: VecDeque::with_capacity(capacity),
            capacity,
        }
    }
    pub fn push(&mut self, point: WorldPoint) {
        if self.capacity == 0 {
            return;
        }
        if self.points.len() == self.capacity {
            self.points.pop_front();
        }
        self.points.push_back(point);
    }
    pub fn len(&self) -> usize {
        self.points.len()
    }
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
    pub fn capacity(&self) -> usize {
        self.capacity
    }
    pub fn iter(&self) -> impl Iterator<Item = &WorldPoint> + '_ {
        self.points.iter()
    }
    pub fn latest(&self) -> Option<&WorldPoint> {
        self.points.back()
    }
    pub fn clear(&mut self) {
        self.points.clear();
    }
    /// Copies the trail out in chronological order.
    pub fn to_vec(&self) -> Vec<WorldPoint> {
        self.points.iter().copied().collect()
    }
}
