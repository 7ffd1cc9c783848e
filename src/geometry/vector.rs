use serde::{Deserialize, Serialize};
use std::f64::consts::PI;
use std::ops::{Add, Sub};

/// A point or displacement in the simulator's planar Cartesian frame.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

impl Vec2 {
    pub fn new(x: f64, y: f64) -> Self {
        Vec2 { x, y }
    }

    /// Euclidean distance between two points.
    pub fn distance(a: Vec2, b: Vec2) -> f64 {
        (b.x - a.x).hypot(b.y - a.y)
    }
}

impl Add for Vec2 {
    type Output = Vec2;
    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Vec2 {
    type Output = Vec2;
    fn sub(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// Clockwise angle from the +Y axis to `v`, in `[0, 2*PI)`.
///
/// The simulator's native frame treats +Y as "forward" and measures heading
/// clockwise to match the surrounding traffic model's compass convention.
pub fn angle_from_y_axis(v: Vec2) -> f64 {
    let len = (v.x * v.x + v.y * v.y).sqrt();
    if len == 0.0 {
        return 0.0;
    }
    // unsigned angle between v and +Y, via the dot product with (0,1)
    let cos_theta = (v.y / len).clamp(-1.0, 1.0);
    let theta = cos_theta.acos();
    if v.x > 0.0 {
        2.0 * PI - theta
    } else {
        theta
    }
}

/// Heading from `pos1` to `pos2`, using [`angle_from_y_axis`]. `0` if the
/// two positions coincide.
pub fn direction(pos1: Vec2, pos2: Vec2) -> f64 {
    let d = pos2 - pos1;
    if d.x == 0.0 && d.y == 0.0 {
        return 0.0;
    }
    angle_from_y_axis(d)
}
