//! Geometry predicates for hazard contact
//!
//! Only two primitives exist in a level: upward spikes (triangles sitting on
//! the ground line) and axis-aligned boxes. Everything here is pure.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Axis-aligned box in screen orientation (y grows downward)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }

    /// Corners in order: top-left, top-right, bottom-right, bottom-left
    pub fn corners(&self) -> [Vec2; 4] {
        [
            Vec2::new(self.x, self.y),
            Vec2::new(self.right(), self.y),
            Vec2::new(self.right(), self.bottom()),
            Vec2::new(self.x, self.bottom()),
        ]
    }

    /// Strict overlap test (touching edges do not overlap)
    #[inline]
    pub fn overlaps(&self, other: &Rect) -> bool {
        rect_overlap(self, other)
    }
}

/// Standard AABB overlap
#[inline]
pub fn rect_overlap(a: &Rect, b: &Rect) -> bool {
    a.x < b.x + b.w && a.x + a.w > b.x && a.y < b.y + b.h && a.y + a.h > b.y
}

/// Barycentric point-in-triangle test
///
/// Accepts `u >= 0, v >= 0, u + v < 1`, so the edge from `c` to `b` is open.
/// Collinear (zero-area) triangles never contain anything.
pub fn point_in_triangle(p: Vec2, a: Vec2, b: Vec2, c: Vec2) -> bool {
    let v0 = c - a;
    let v1 = b - a;
    let v2 = p - a;

    let dot00 = v0.dot(v0);
    let dot01 = v0.dot(v1);
    let dot02 = v0.dot(v2);
    let dot11 = v1.dot(v1);
    let dot12 = v1.dot(v2);

    let denom = dot00 * dot11 - dot01 * dot01;
    if denom == 0.0 || !denom.is_finite() {
        return false;
    }
    let inv = 1.0 / denom;
    let u = (dot11 * dot02 - dot01 * dot12) * inv;
    let v = (dot00 * dot12 - dot01 * dot02) * inv;

    u >= 0.0 && v >= 0.0 && u + v < 1.0
}

/// Spike triangle as (left base, apex, right base)
pub fn spike_triangle(x: f32, size: f32, ground_line: f32) -> [Vec2; 3] {
    [
        Vec2::new(x, ground_line),
        Vec2::new(x + size / 2.0, ground_line - size),
        Vec2::new(x + size, ground_line),
    ]
}

/// Check the player's box against a spike
///
/// Only the four box corners are sampled. A spike whose apex pokes into the
/// middle of an edge, or a box that moves past a spike between ticks, is not
/// detected.
pub fn spike_hit(player: &Rect, x: f32, size: f32, ground_line: f32) -> bool {
    if size <= 0.0 {
        return false;
    }
    let [a, b, c] = spike_triangle(x, size, ground_line);
    player
        .corners()
        .iter()
        .any(|&corner| point_in_triangle(corner, a, b, c))
}

#[cfg(test)]
mod tests {
    use super::*;

    const GROUND: f32 = 670.0;

    #[test]
    fn test_rect_overlap() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert!(a.overlaps(&Rect::new(5.0, 5.0, 10.0, 10.0)));
        // Touching edges
        assert!(!a.overlaps(&Rect::new(10.0, 0.0, 10.0, 10.0)));
        assert!(!a.overlaps(&Rect::new(0.0, 10.0, 10.0, 10.0)));
        // Contained
        assert!(a.overlaps(&Rect::new(2.0, 2.0, 1.0, 1.0)));
    }

    #[test]
    fn test_point_in_triangle() {
        let [a, b, c] = spike_triangle(100.0, 50.0, GROUND);
        assert!(point_in_triangle(Vec2::new(125.0, GROUND - 10.0), a, b, c));
        // Base edge counts
        assert!(point_in_triangle(Vec2::new(110.0, GROUND), a, b, c));
        // Beside the slope
        assert!(!point_in_triangle(Vec2::new(102.0, GROUND - 45.0), a, b, c));
        // Below the ground line
        assert!(!point_in_triangle(Vec2::new(125.0, GROUND + 1.0), a, b, c));
    }

    #[test]
    fn test_open_edge() {
        let a = Vec2::new(0.0, 0.0);
        let b = Vec2::new(0.0, 10.0);
        let c = Vec2::new(10.0, 0.0);
        // On the b-c hypotenuse: u + v == 1
        assert!(!point_in_triangle(Vec2::new(5.0, 5.0), a, b, c));
        // On the a-c edge: v == 0
        assert!(point_in_triangle(Vec2::new(5.0, 0.0), a, b, c));
    }

    #[test]
    fn test_degenerate_triangle_never_hits() {
        let a = Vec2::new(0.0, 0.0);
        let b = Vec2::new(5.0, 5.0);
        let c = Vec2::new(10.0, 10.0);
        assert!(!point_in_triangle(Vec2::new(5.0, 5.0), a, b, c));

        let player = Rect::new(100.0, GROUND - 50.0, 50.0, 50.0);
        assert!(!spike_hit(&player, 100.0, 0.0, GROUND));
        assert!(!spike_hit(&player, 100.0, -20.0, GROUND));
    }

    #[test]
    fn test_spike_hit_grounded_player() {
        let player = Rect::new(106.0, GROUND - 50.0, 50.0, 50.0);
        assert!(spike_hit(&player, 100.0, 50.0, GROUND));
    }

    #[test]
    fn test_spike_miss_above() {
        let player = Rect::new(100.0, GROUND - 120.0, 50.0, 50.0);
        assert!(!spike_hit(&player, 100.0, 50.0, GROUND));
    }

    #[test]
    fn test_corner_sampling_misses_apex_between_corners() {
        // Wide box hovering just under the apex: no corner is inside
        let player = Rect::new(80.0, GROUND - 60.0, 90.0, 15.0);
        assert!(!spike_hit(&player, 100.0, 50.0, GROUND));
    }
}
