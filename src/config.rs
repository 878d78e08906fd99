//! Configuration constants for the gunnery range.

use macroquad::prelude::Color;

// World and window
pub const WORLD_WIDTH: f64 = 800.0;
pub const WORLD_HEIGHT: f64 = 600.0;
pub const FLOOR_OFFSET: f64 = 50.0; // Distance of the floor line above the bottom edge
pub const FLOOR_Y: f64 = WORLD_HEIGHT - FLOOR_OFFSET;
pub const FRAME_RATE: u32 = 30; // Target frame rate

// Balls
pub const BALL_RADIUS: f64 = 10.0;
pub const FIRED_BALL_BONUS_RADIUS: f64 = 5.0; // Added to balls leaving the gun
pub const FLOOR_SETTLE_OFFSET: f64 = 0.5; // Damps jitter of a ball resting on the floor
pub const GRAVITY: f64 = 1.0; // Velocity lost per frame

// Gun
pub const GUN_PIVOT_X: f64 = 20.0;
pub const GUN_PIVOT_Y: f64 = 450.0;
pub const BALL_SPAWN_X: f64 = 40.0;
pub const BALL_SPAWN_Y: f64 = 450.0;
pub const MIN_POWER: i32 = 10;
pub const MAX_POWER: i32 = 100;
pub const GUN_BASE_LENGTH: i32 = 10;
pub const GUN_THICKNESS: f32 = 10.0;

// Target placement
pub const TARGET_SPAWN_X: (i32, i32) = (600, 750); // First target only
pub const TARGET_SPAWN_Y: (i32, i32) = (300, 550);
pub const TARGET_RESPAWN_X: (i32, i32) = (600, 780);
pub const TARGET_RESPAWN_Y: (i32, i32) = (300, 500);
pub const TARGET_RADIUS: (i32, i32) = (2, 50);

// Victory sequence
pub const VICTORY_FRAMES: u32 = 100;
pub const VICTORY_TEXT_X: f32 = 300.0;
pub const VICTORY_TEXT_Y: f32 = 300.0;
pub const VICTORY_FONT_SIZE: u16 = 24;

// Colors
pub const RED: Color = Color::new(1.0, 0.0, 0.0, 1.0);
pub const BLUE: Color = Color::new(0.0, 0.0, 1.0, 1.0);
pub const YELLOW: Color = Color::new(1.0, 0.788, 0.122, 1.0);
pub const GREEN: Color = Color::new(0.0, 1.0, 0.0, 1.0);
pub const MAGENTA: Color = Color::new(1.0, 0.012, 0.722, 1.0);
pub const CYAN: Color = Color::new(0.0, 1.0, 0.8, 1.0);
pub const BLACK: Color = Color::new(0.0, 0.0, 0.0, 1.0);
pub const WHITE: Color = Color::new(1.0, 1.0, 1.0, 1.0);
pub const GREY: Color = Color::new(0.49, 0.49, 0.49, 1.0);
pub const BALL_PALETTE: [Color; 6] = [RED, BLUE, YELLOW, GREEN, MAGENTA, CYAN];
pub const OUTLINE_THICKNESS: f32 = 1.0;
