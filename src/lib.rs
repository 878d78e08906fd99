//! Gunnery: charge a cannon with the mouse and knock down a randomly placed target.

pub mod ball;
pub mod config;
pub mod error;
pub mod game;
pub mod gun;
pub mod input;
pub mod logging;
pub mod pacing;
pub mod render;
pub mod target;
pub mod types;
pub mod utils;
