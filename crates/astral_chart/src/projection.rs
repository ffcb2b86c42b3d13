//! Degree/radius to drawing-plane conversion.
//!
//! [`PolarProjector`] is the single place where chart angles become pixel
//! coordinates. Every layout pass holds one projector, so every element of a
//! chart shares the same rotation.

use crate::angle::normalize_angle;
use serde::{Deserialize, Serialize};

/// Point in drawing units (y grows downward, SVG style).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Point halfway between `self` and `other`.
    pub fn lerp_mid(&self, other: &Point) -> Point {
        Point {
            x: (self.x + other.x) / 2.0,
            y: (self.y + other.y) / 2.0,
        }
    }
}

/// Projects ecliptic degrees onto a circle around `center`.
///
/// 0° points up before rotation; `rotation` then shifts the frame. With
/// `rotation = ascendant - 270` the ascendant lands at 9 o'clock.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PolarProjector {
    center: Point,
    rotation: f64,
}

impl PolarProjector {
    pub fn new(center: Point, rotation: f64) -> Self {
        Self { center, rotation }
    }

    /// Projector whose frame puts `ascendant` at 9 o'clock.
    pub fn for_ascendant(center: Point, ascendant: f64) -> Self {
        Self::new(center, ascendant - 270.0)
    }

    pub fn center(&self) -> Point {
        self.center
    }

    pub fn rotation(&self) -> f64 {
        self.rotation
    }

    /// Screen angle (degrees, clockwise from 12 o'clock) of an ecliptic degree.
    pub fn rotated_degree(&self, degree: f64) -> f64 {
        normalize_angle(degree - self.rotation)
    }

    pub fn project(&self, degree: f64, radius: f64) -> Point {
        project(self.center, degree, radius, self.rotation)
    }
}

/// Free-function form of [`PolarProjector::project`].
pub fn project(center: Point, degree: f64, radius: f64, rotation: f64) -> Point {
    let rotated = normalize_angle(degree - rotation);
    let theta = (rotated - 90.0).to_radians();
    Point {
        x: center.x + radius * theta.cos(),
        y: center.y + radius * theta.sin(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_degrees_points_up_without_rotation() {
        let p = project(Point::new(0.0, 0.0), 0.0, 10.0, 0.0);
        assert!(p.x.abs() < 1e-9);
        assert!((p.y + 10.0).abs() < 1e-9);
    }

    #[test]
    fn test_ascendant_lands_at_nine_oclock() {
        let projector = PolarProjector::for_ascendant(Point::new(200.0, 200.0), 100.0);
        assert_eq!(projector.rotation(), -170.0);
        let p = projector.project(100.0, 100.0);
        assert!((p.x - 100.0).abs() < 1e-9);
        assert!((p.y - 200.0).abs() < 1e-9);
    }

    #[test]
    fn test_lerp_mid() {
        let m = Point::new(0.0, 0.0).lerp_mid(&Point::new(4.0, -2.0));
        assert_eq!(m, Point::new(2.0, -1.0));
    }
}
