use crate::config::{BALL_PALETTE, FLOOR_SETTLE_OFFSET, FLOOR_Y, GRAVITY, WORLD_WIDTH};
use crate::types::{Circular, Point};
use ::rand::Rng;
use ::rand::seq::SliceRandom;
use macroquad::prelude::Color;

/// A projectile in flight.
///
/// `vy` is stored upward-positive, so moving subtracts it from `y`.
#[derive(Debug, Clone, PartialEq)]
pub struct Ball {
    pub position: Point,
    pub vx: f64,
    pub vy: f64,
    radius: f64,
    pub color: Color,
}

impl Ball {
    /// Creates a resting ball with a random palette color.
    pub fn new<R: Rng + ?Sized>(position: Point, radius: f64, rng: &mut R) -> Self {
        let color = *BALL_PALETTE.choose(rng).unwrap_or(&BALL_PALETTE[0]);
        Ball::with_radius(position, radius, color)
    }

    pub fn with_radius(position: Point, radius: f64, color: Color) -> Self {
        debug_assert!(radius > 0.0, "ball radius must be positive");
        Ball {
            position,
            vx: 0.0,
            vy: 0.0,
            radius,
            color,
        }
    }

    /// Advances the ball by one frame.
    ///
    /// The floor check looks one step ahead of the moved position. A ball that
    /// would reach the floor is snapped just above it and loses half of both
    /// velocity components; otherwise gravity applies. Only the right wall
    /// reflects, without energy loss.
    pub fn integrate(&mut self) {
        self.position.x += self.vx;
        self.position.y -= self.vy;

        let floor_limit = FLOOR_Y - self.radius;
        if self.position.y - self.vy >= floor_limit {
            self.position.y = floor_limit + FLOOR_SETTLE_OFFSET;
            self.vy *= -0.5;
            self.vx *= 0.5;
            crate::debug_physics!(
                "Floor bounce at x={:.1}, vx={:.2} vy={:.2}",
                self.position.x,
                self.vx,
                self.vy
            );
        } else {
            self.vy -= GRAVITY;
        }

        let wall_limit = WORLD_WIDTH - self.radius;
        if self.position.x + self.vx >= wall_limit {
            self.position.x = wall_limit;
            self.vx = -self.vx;
            crate::debug_physics!("Wall bounce at y={:.1}, vx={:.2}", self.position.y, self.vx);
        }
    }

    /// Strict circle overlap against anything with a center and radius.
    pub fn collides_with(&self, other: &impl Circular) -> bool {
        self.overlaps(other)
    }
}

impl Circular for Ball {
    fn center(&self) -> Point {
        self.position
    }

    fn radius(&self) -> f64 {
        self.radius
    }
}
