//! Zone and bounds checks for a flying gift
//!
//! Only the gift's center point is tested. There is no swept test, so a fast
//! gift can pass over the sleigh between two ticks without landing.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle in canvas pixels (y grows downward)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
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

    /// Point lies strictly inside (edges excluded)
    pub fn contains_strict(&self, p: Vec2) -> bool {
        p.x > self.x && p.x < self.right() && p.y > self.y && p.y < self.bottom()
    }

    /// Point lies inside or on an edge
    pub fn contains_inclusive(&self, p: Vec2) -> bool {
        p.x >= self.x && p.x <= self.right() && p.y >= self.y && p.y <= self.bottom()
    }
}

/// Outcome of checking a gift after it moved
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Contact {
    /// Landed inside the sleigh
    Sleigh,
    /// Left the play area through the bottom, left or right edge
    OutOfBounds,
    /// Still flying
    None,
}

/// Check a gift position against the sleigh and the canvas.
///
/// The sleigh wins when both apply on the same tick. An already settled gift
/// never lands twice. The top edge is open: a gift thrown high keeps flying
/// and falls back in.
pub fn check_gift(pos: Vec2, settled: bool, sleigh: &Rect, bounds: Vec2) -> Contact {
    if !settled && sleigh.contains_strict(pos) {
        Contact::Sleigh
    } else if pos.y > bounds.y || pos.x < 0.0 || pos.x > bounds.x {
        Contact::OutOfBounds
    } else {
        Contact::None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::{CANVAS_HEIGHT, CANVAS_WIDTH, LAUNCH_ZONE, SLEIGH};

    const BOUNDS: Vec2 = Vec2::new(CANVAS_WIDTH, CANVAS_HEIGHT);

    #[test]
    fn test_sleigh_edges_are_exclusive() {
        assert!(SLEIGH.contains_strict(Vec2::new(675.0, 490.0)));
        assert!(!SLEIGH.contains_strict(Vec2::new(600.0, 490.0)));
        assert!(!SLEIGH.contains_strict(Vec2::new(750.0, 490.0)));
        assert!(!SLEIGH.contains_strict(Vec2::new(675.0, 450.0)));
        assert!(!SLEIGH.contains_strict(Vec2::new(675.0, 530.0)));
    }

    #[test]
    fn test_launch_zone_edges_are_inclusive() {
        assert!(LAUNCH_ZONE.contains_inclusive(Vec2::new(50.0, 500.0)));
        assert!(LAUNCH_ZONE.contains_inclusive(Vec2::new(150.0, 550.0)));
        assert!(!LAUNCH_ZONE.contains_inclusive(Vec2::new(150.5, 525.0)));
        assert!(!LAUNCH_ZONE.contains_inclusive(Vec2::new(100.0, 499.0)));
    }

    #[test]
    fn test_check_gift_outcomes() {
        assert_eq!(check_gift(Vec2::new(675.0, 490.0), false, &SLEIGH, BOUNDS), Contact::Sleigh);
        assert_eq!(check_gift(Vec2::new(400.0, 601.0), false, &SLEIGH, BOUNDS), Contact::OutOfBounds);
        assert_eq!(check_gift(Vec2::new(-1.0, 300.0), false, &SLEIGH, BOUNDS), Contact::OutOfBounds);
        assert_eq!(check_gift(Vec2::new(801.0, 300.0), false, &SLEIGH, BOUNDS), Contact::OutOfBounds);
        assert_eq!(check_gift(Vec2::new(400.0, 300.0), false, &SLEIGH, BOUNDS), Contact::None);
    }

    #[test]
    fn test_top_edge_is_open() {
        assert_eq!(check_gift(Vec2::new(400.0, -250.0), false, &SLEIGH, BOUNDS), Contact::None);
    }

    #[test]
    fn test_settled_gift_does_not_land_again() {
        assert_eq!(check_gift(Vec2::new(675.0, 490.0), true, &SLEIGH, BOUNDS), Contact::None);
    }

    #[test]
    fn test_sleigh_takes_priority_over_bounds() {
        // A sleigh poking past the canvas edge still catches the gift there
        let wide = Rect::new(700.0, 400.0, 200.0, 100.0);
        assert_eq!(check_gift(Vec2::new(850.0, 450.0), false, &wide, BOUNDS), Contact::Sleigh);
    }
}
