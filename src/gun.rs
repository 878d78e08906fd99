use crate::ball::Ball;
use crate::config::{
    BALL_RADIUS, BALL_SPAWN_X, BALL_SPAWN_Y, FIRED_BALL_BONUS_RADIUS, GREY, GUN_BASE_LENGTH,
    GUN_PIVOT_X, GUN_PIVOT_Y, MAX_POWER, MIN_POWER, RED,
};
use crate::game::ShotCounter;
use crate::types::Point;
use crate::utils;
use ::rand::Rng;
use macroquad::prelude::Color;

/// The player's cannon, pivoting at a fixed point on the left edge.
///
/// Pressing the pointer starts charging, releasing it fires a ball whose
/// speed equals the power built up in between.
#[derive(Debug, Clone, PartialEq)]
pub struct Gun {
    pub angle: f64, // Radians, screen space
    pub power: i32,
    pub charging: bool,
    pub color: Color,
}

impl Gun {
    pub fn new() -> Self {
        Gun {
            angle: 0.0,
            power: MIN_POWER,
            charging: false,
            color: GREY,
        }
    }

    pub fn pivot() -> Point {
        Point::new(GUN_PIVOT_X, GUN_PIVOT_Y)
    }

    pub fn spawn_point() -> Point {
        Point::new(BALL_SPAWN_X, BALL_SPAWN_Y)
    }

    pub fn begin_charge(&mut self) {
        self.charging = true;
    }

    /// Fires towards `pointer` with the current power and returns the new ball.
    ///
    /// Fires even without a preceding `begin_charge`, since presses can be
    /// swallowed while a victory is on screen.
    pub fn end_charge_and_fire<R: Rng + ?Sized>(
        &mut self,
        pointer: Point,
        shots: &mut ShotCounter,
        rng: &mut R,
    ) -> Ball {
        let spawn = Self::spawn_point();
        let mut ball = Ball::new(spawn, BALL_RADIUS + FIRED_BALL_BONUS_RADIUS, rng);

        self.angle = utils::angle_between(spawn, pointer);
        let power = self.power as f64;
        ball.vx = power * self.angle.cos();
        ball.vy = -power * self.angle.sin();

        shots.record();
        crate::debug_gun!(
            "Shot {} fired at {:.1} deg with power {}",
            shots.count(),
            utils::rad_to_deg(self.angle),
            self.power
        );

        self.charging = false;
        self.power = MIN_POWER;
        ball
    }

    /// Re-aims at `pointer` when given and refreshes the charge color.
    pub fn update_aim(&mut self, pointer: Option<Point>) {
        if let Some(pointer) = pointer {
            self.angle = utils::angle_between(Self::pivot(), pointer);
        }
        self.color = self.state_color();
    }

    /// Called once per frame; builds power while charging.
    pub fn increment_charge(&mut self) {
        if self.charging && self.power < MAX_POWER {
            self.power += 1;
        }
        self.color = self.state_color();
    }

    /// Barrel length in pixels, growing with power.
    pub fn barrel_length(&self) -> i32 {
        GUN_BASE_LENGTH + self.power / 2
    }

    pub fn muzzle(&self) -> Point {
        utils::polar_offset(Self::pivot(), self.angle, self.barrel_length() as f64)
    }

    fn state_color(&self) -> Color {
        if self.charging { RED } else { GREY }
    }
}

impl Default for Gun {
    fn default() -> Self {
        Self::new()
    }
}
