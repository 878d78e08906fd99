use crate::config::{
    RED, TARGET_RADIUS, TARGET_RESPAWN_X, TARGET_RESPAWN_Y, TARGET_SPAWN_X, TARGET_SPAWN_Y,
};
use crate::types::{Circular, Point};
use ::rand::Rng;
use macroquad::prelude::Color;

// Represents the circular target the player shoots at
#[derive(Debug, Clone, PartialEq)]
pub struct Target {
    pub x: i32,
    pub y: i32,
    pub r: i32,
    pub color: Color,
    pub points: u32, // Hits registered over the whole game
    pub alive: bool, // Only a live target can be hit
}

impl Target {
    /// Places the first target of a game.
    pub fn new<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let target = Target {
            x: rng.gen_range(TARGET_SPAWN_X.0..=TARGET_SPAWN_X.1),
            y: rng.gen_range(TARGET_SPAWN_Y.0..=TARGET_SPAWN_Y.1),
            r: rng.gen_range(TARGET_RADIUS.0..=TARGET_RADIUS.1),
            color: RED,
            points: 0,
            alive: true,
        };
        crate::debug_target!(
            "Target placed at ({}, {}) r={}",
            target.x,
            target.y,
            target.r
        );
        target
    }

    /// Moves the target to a fresh random spot and brings it back to life.
    pub fn randomize<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.x = rng.gen_range(TARGET_RESPAWN_X.0..=TARGET_RESPAWN_X.1);
        self.y = rng.gen_range(TARGET_RESPAWN_Y.0..=TARGET_RESPAWN_Y.1);
        self.r = rng.gen_range(TARGET_RADIUS.0..=TARGET_RADIUS.1);
        self.alive = true;
        crate::debug_target!(
            "Target respawned at ({}, {}) r={}",
            self.x,
            self.y,
            self.r
        );
    }

    /// Credits a hit. Leaves `alive` to the caller.
    pub fn register_hit(&mut self, points: u32) {
        self.points += points;
    }
}

impl Circular for Target {
    fn center(&self) -> Point {
        Point::new(self.x as f64, self.y as f64)
    }

    fn radius(&self) -> f64 {
        self.r as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ::rand::SeedableRng;
    use ::rand::rngs::StdRng;

    fn in_range(value: i32, range: (i32, i32)) -> bool {
        value >= range.0 && value <= range.1
    }

    #[test]
    fn test_new_target_in_spawn_zone() {
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..200 {
            let target = Target::new(&mut rng);
            assert!(in_range(target.x, TARGET_SPAWN_X));
            assert!(in_range(target.y, TARGET_SPAWN_Y));
            assert!(in_range(target.r, TARGET_RADIUS));
            assert!(target.alive);
            assert_eq!(target.points, 0);
        }
    }

    #[test]
    fn test_respawn_after_hit() {
        let mut rng = StdRng::seed_from_u64(2);
        let mut target = Target::new(&mut rng);
        for hit in 1..=200 {
            target.alive = false;
            target.register_hit(1);
            target.randomize(&mut rng);
            assert!(in_range(target.x, TARGET_RESPAWN_X));
            assert!(in_range(target.y, TARGET_RESPAWN_Y));
            assert!(in_range(target.r, TARGET_RADIUS));
            assert!(target.alive);
            assert_eq!(target.points, hit);
        }
    }

    #[test]
    fn test_register_hit_leaves_alive_flag() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut target = Target::new(&mut rng);
        target.register_hit(1);
        assert!(target.alive);
        target.alive = false;
        target.register_hit(2);
        assert!(!target.alive);
        assert_eq!(target.points, 3);
    }

    #[test]
    fn test_circular_view() {
        let mut rng = StdRng::seed_from_u64(4);
        let mut target = Target::new(&mut rng);
        target.x = 700;
        target.y = 400;
        target.r = 20;
        assert_eq!(target.center(), Point::new(700.0, 400.0));
        assert_eq!(target.radius(), 20.0);
    }
}
