//! Entity motion: bounded vertical oscillation and world scroll
//!
//! All level geometry is stored in world coordinates. Scrolling advances the
//! player (and with it the camera) instead of moving every entity, so
//! platforms and obstacles scroll exactly like spikes do.

use serde::{Deserialize, Serialize};

/// Linear up/down mover that reflects at `start_y ± range`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Oscillator {
    /// Current y of the entity's top edge
    pub y: f32,
    /// Anchor the range is measured from
    pub start_y: f32,
    pub range: f32,
    /// Pixels per tick
    pub speed: f32,
    /// +1.0 moves down, -1.0 moves up
    pub direction: f32,
}

impl Oscillator {
    pub fn new(start_y: f32, range: f32, speed: f32) -> Self {
        Self {
            y: start_y,
            start_y,
            range: range.abs(),
            speed: speed.abs(),
            direction: 1.0,
        }
    }

    #[inline]
    pub fn min_y(&self) -> f32 {
        self.start_y - self.range
    }

    #[inline]
    pub fn max_y(&self) -> f32 {
        self.start_y + self.range
    }

    /// Advance one tick. Returns true if the direction flipped.
    ///
    /// Overshoot is clamped onto the bound so y never leaves the range, and
    /// the new direction is set (not negated) so a mover sitting on a bound
    /// cannot flip twice.
    pub fn step(&mut self) -> bool {
        self.y += self.speed * self.direction;
        if self.y > self.max_y() {
            self.y = self.max_y();
            self.direction = -1.0;
            true
        } else if self.y < self.min_y() {
            self.y = self.min_y();
            self.direction = 1.0;
            true
        } else {
            false
        }
    }
}

/// Left edge of the viewport in world coordinates
#[inline]
pub fn camera_left(player_x: f32, start_x: f32) -> f32 {
    player_x - start_x
}

/// True once a span `[x, x + width]` has scrolled fully off the left edge
#[inline]
pub fn scrolled_past(x: f32, width: f32, camera_left: f32) -> bool {
    x + width < camera_left
}
