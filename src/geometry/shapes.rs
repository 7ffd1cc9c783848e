use super::vector::{angle_from_y_axis, Vec2};
use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// A 2D region that can be tested for point containment. Implemented by
/// [`Circle`] and [`Rectangle`]; any future shape only needs this one method.
pub trait Area: Debug {
    fn contains(&self, x: f64, y: f64) -> bool;
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    pub center: Vec2,
    pub radius: f64,
}

impl Circle {
    pub fn new(center: Vec2, radius: f64) -> Self {
        Circle { center, radius }
    }
}

impl Area for Circle {
    fn contains(&self, x: f64, y: f64) -> bool {
        Vec2::distance(Vec2::new(x, y), self.center) <= self.radius
    }
}

/// An oriented rectangle defined by one long edge `p1 -> p2` and a `width`
/// extending away from that edge. `p3`/`p4` are derived, not stored.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Rectangle {
    pub p1: Vec2,
    pub p2: Vec2,
    pub width: f64,
}

impl Rectangle {
    pub fn new(p1: Vec2, p2: Vec2, width: f64) -> Self {
        Rectangle { p1, p2, width }
    }

    pub fn heading(&self) -> f64 {
        angle_from_y_axis(self.p2 - self.p1)
    }

    pub fn length(&self) -> f64 {
        Vec2::distance(self.p1, self.p2)
    }

    pub fn p3(&self) -> Vec2 {
        let h = self.heading();
        self.p2 + Vec2::new(self.width * h.cos(), self.width * h.sin())
    }

    pub fn p4(&self) -> Vec2 {
        let h = self.heading();
        self.p1 + Vec2::new(self.width * h.cos(), self.width * h.sin())
    }

    fn vertices(&self) -> [Vec2; 4] {
        [self.p1, self.p2, self.p3(), self.p4()]
    }
}

impl Area for Rectangle {
    fn contains(&self, x: f64, y: f64) -> bool {
        let verts = self.vertices();
        let mut inside = false;
        let n = verts.len();
        for i in 0..n {
            let a = verts[i];
            let b = verts[(i + 1) % n];
            if a.y == b.y {
                continue;
            }
            let (ymin, ymax) = (a.y.min(b.y), a.y.max(b.y));
            if y > ymin && y <= ymax && x <= a.x.max(b.x) {
                let x_at_y = a.x + (y - a.y) * (b.x - a.x) / (b.y - a.y);
                if a.x == b.x || x <= x_at_y {
                    inside = !inside;
                }
            }
        }
        inside
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn circle_contains_boundary_inclusive() {
        let c = Circle::new(Vec2::new(10.0, 10.0), 5.0);
        assert!(c.contains(12.0, 12.0));
        assert!(!c.contains(16.0, 10.0));
        assert!(c.contains(15.0, 10.0));
        assert!(c.contains(c.center.x, c.center.y));
    }

    #[test]
    fn rectangle_along_y_axis() {
        let r = Rectangle::new(Vec2::new(0.0, 0.0), Vec2::new(0.0, 100.0), 10.0);
        assert!(r.contains(3.0, 50.0));
        assert!(!r.contains(-6.0, 50.0));
        assert!(!r.contains(0.0, -1.0));
    }

    #[test]
    fn rectangle_length_and_heading() {
        let r = Rectangle::new(Vec2::new(0.0, 0.0), Vec2::new(0.0, 100.0), 10.0);
        assert_abs_diff_eq!(r.length(), 100.0);
        assert_abs_diff_eq!(r.heading(), 0.0, epsilon = 1e-9);
    }

    /// Winding-number containment test, independent of `Rectangle::contains`'s
    /// ray-casting implementation, used as an oracle below.
    fn winding_number_contains(verts: &[Vec2; 4], x: f64, y: f64) -> bool {
        let p = Vec2::new(x, y);
        let mut angle_sum = 0.0;
        for i in 0..verts.len() {
            let a = verts[i] - p;
            let b = verts[(i + 1) % verts.len()] - p;
            let cross = a.x * b.y - a.y * b.x;
            let dot = a.x * b.x + a.y * b.y;
            angle_sum += cross.atan2(dot);
        }
        angle_sum.abs() > std::f64::consts::PI
    }

    #[test]
    fn rectangle_contains_agrees_with_winding_number_on_grid() {
        let r = Rectangle::new(Vec2::new(2.0, 3.0), Vec2::new(8.0, 15.0), 6.0);
        let verts = r.vertices();
        // Half-integer offsets keep sample points off the rectangle's edges
        // (which are axis-unaligned here), avoiding boundary tie-break noise
        // between the two independent containment algorithms.
        for ix in -10..50 {
            for iy in -10..50 {
                let x = ix as f64 * 0.5 + 0.125;
                let y = iy as f64 * 0.5 + 0.125;
                assert_eq!(
                    r.contains(x, y),
                    winding_number_contains(&verts, x, y),
                    "mismatch at ({x},{y})"
                );
            }
        }
    }
}
