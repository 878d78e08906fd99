//! Shared geometry types.

/// A position in world coordinates (origin top-left, y grows downward).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Point { x, y }
    }

    pub fn distance_squared(&self, other: Point) -> f64 {
        (self.x - other.x).powi(2) + (self.y - other.y).powi(2)
    }
}

/// Anything that takes part in circle-vs-circle collision checks.
pub trait Circular {
    fn center(&self) -> Point;
    fn radius(&self) -> f64;

    /// Strict overlap test; circles that only touch do not overlap.
    fn overlaps(&self, other: &impl Circular) -> bool
    where
        Self: Sized,
    {
        let reach = self.radius() + other.radius();
        self.center().distance_squared(other.center()) < reach * reach
    }
}
