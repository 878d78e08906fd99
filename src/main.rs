use clap::Parser;
use gunnery::config::{WORLD_HEIGHT, WORLD_WIDTH};
use gunnery::game::Game;
use gunnery::logging::{self, TOPICS};
use gunnery::render::Renderer;
use log::{LevelFilter, info, warn};
use macroquad::prelude::*;

// --- Command Line Arguments ---
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info", value_parser = logging::parse_log_level)]
    log_level: LevelFilter,

    /// Debug filter to specify log topics (e.g., "gun,physics")
    /// Available topics: game, gun, input, physics, target
    #[arg(long)]
    debug_filter: Option<String>,

    /// Seed for target placement and ball colors
    #[arg(long)]
    seed: Option<u64>,

    /// TrueType font for the victory message
    #[arg(long)]
    font: Option<String>,
}

fn window_conf() -> Conf {
    Conf {
        window_title: "Gunnery".to_owned(),
        window_width: WORLD_WIDTH as i32,
        window_height: WORLD_HEIGHT as i32,
        window_resizable: false,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    let args = Args::parse();

    if let Err(e) = logging::init_logger(args.log_level, args.debug_filter.clone()) {
        eprintln!("Warning: {}", gunnery::error::GameError::from(e));
    }
    if let Some(filter) = &args.debug_filter {
        for topic in filter.split(',').map(str::trim).filter(|t| !t.is_empty()) {
            if !TOPICS.contains(&topic) {
                warn!("Unknown debug topic '{}', known topics: {}", topic, TOPICS.join(", "));
            }
        }
    }

    info!("Initializing Gunnery...");
    // Closing the window is handled as a quit event by the game loop
    prevent_quit();

    let mut renderer = Renderer::new();
    if let Some(path) = &args.font {
        renderer.load_ui_font(path).await;
    }

    let mut game = Game::new(args.seed);
    game.run(&renderer).await;
}
