use crate::ball::Ball;
use crate::config::{
    BLACK, GUN_THICKNESS, OUTLINE_THICKNESS, VICTORY_FONT_SIZE, VICTORY_TEXT_X, VICTORY_TEXT_Y,
    WHITE,
};
use crate::game::{Game, Phase};
use crate::gun::Gun;
use crate::target::Target;
use crate::types::{Circular, Point};
use macroquad::prelude::*;

// Conversion helper
fn point_to_vec2(p: Point) -> Vec2 {
    Vec2::new(p.x as f32, p.y as f32)
}

// Handles drawing the game state using macroquad
pub struct Renderer {
    ui_font: Option<Font>, // Font for the victory message, macroquad's default when absent
}

impl Renderer {
    pub fn new() -> Self {
        Renderer { ui_font: None }
    }

    // Load a custom UI font, keeping the default one on failure
    pub async fn load_ui_font(&mut self, path: &str) {
        match load_ttf_font(path).await {
            Ok(font) => {
                log::info!("Loaded UI font {}", path);
                self.ui_font = Some(font);
            }
            Err(e) => log::error!("Failed to load UI font {}: {}", path, e),
        }
    }

    pub fn draw_frame(&self, game: &Game) {
        clear_background(WHITE);
        match &game.phase {
            Phase::Aiming => {
                Self::draw_gun(&game.gun);
                Self::draw_target(&game.target);
                for ball in &game.balls {
                    Self::draw_ball(ball);
                }
            }
            Phase::Celebrating(celebration) => {
                self.draw_announcement(&celebration.message);
                Self::draw_gun(&game.gun);
                Self::draw_ball(&celebration.ball);
            }
        }
    }

    fn draw_disc(center: Point, radius: f64, color: Color) {
        let pos = point_to_vec2(center);
        draw_circle(pos.x, pos.y, radius as f32, color);
        draw_circle_lines(pos.x, pos.y, radius as f32, OUTLINE_THICKNESS, BLACK);
    }

    fn draw_ball(ball: &Ball) {
        Self::draw_disc(ball.center(), ball.radius(), ball.color);
    }

    fn draw_target(target: &Target) {
        Self::draw_disc(target.center(), target.radius(), target.color);
    }

    fn draw_gun(gun: &Gun) {
        let start = point_to_vec2(Gun::pivot());
        let end = point_to_vec2(gun.muzzle());
        draw_line(start.x, start.y, end.x, end.y, GUN_THICKNESS, gun.color);
    }

    fn draw_announcement(&self, msg: &str) {
        let params = TextParams {
            font: self.ui_font.as_ref(),
            font_size: VICTORY_FONT_SIZE,
            color: BLACK,
            ..Default::default()
        };
        // Text is placed by its baseline, so shift down to put the top edge at the anchor
        draw_text_ex(
            msg,
            VICTORY_TEXT_X,
            VICTORY_TEXT_Y + VICTORY_FONT_SIZE as f32,
            params,
        );
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}
