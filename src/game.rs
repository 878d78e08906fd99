use crate::ball::Ball;
use crate::config::{self, VICTORY_FRAMES};
use crate::gun::Gun;
use crate::input::{InputEvent, MouseInput};
use crate::pacing::FramePacer;
use crate::render::Renderer;
use crate::target::Target;
use ::rand::SeedableRng;
use ::rand::rngs::StdRng;
use log::info;
use macroquad::prelude::next_frame;
use std::mem;

/// Shots fired at the current target.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ShotCounter(u32);

impl ShotCounter {
    pub fn record(&mut self) {
        self.0 += 1;
    }

    pub fn count(&self) -> u32 {
        self.0
    }

    /// Returns the count and starts over from zero.
    pub fn take(&mut self) -> u32 {
        mem::take(&mut self.0)
    }
}

/// Whether the frame loop should keep going after an update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameFlow {
    Continue,
    Quit,
}

/// The freeze-frame shown after a target is destroyed.
#[derive(Debug, Clone, PartialEq)]
pub struct Celebration {
    pub ball: Ball, // The ball that scored; the only one still simulated
    pub message: String,
    pub frames_left: u32,
    pending: Vec<Ball>, // Rest of the frame's balls, resumed once the celebration ends
}

#[derive(Debug, Clone, PartialEq)]
pub enum Phase {
    Aiming,
    Celebrating(Celebration),
}

/// The Game struct owns all simulation state and drives the frame loop
pub struct Game {
    pub gun: Gun,
    pub target: Target,
    pub balls: Vec<Ball>,
    pub shots: ShotCounter,
    pub phase: Phase,
    pub frame: u64,
    rng: StdRng,
}

impl Game {
    /// Create a new game, seeded for reproducible play when `seed` is given
    pub fn new(seed: Option<u64>) -> Self {
        let mut rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let target = Target::new(&mut rng);
        info!(
            "Target placed at ({}, {}) with radius {}.",
            target.x, target.y, target.r
        );

        Game {
            gun: Gun::new(),
            target,
            balls: Vec::new(),
            shots: ShotCounter::default(),
            phase: Phase::Aiming,
            frame: 0,
            rng,
        }
    }

    pub fn celebration(&self) -> Option<&Celebration> {
        match &self.phase {
            Phase::Celebrating(celebration) => Some(celebration),
            Phase::Aiming => None,
        }
    }

    /// Run the main game loop using the provided renderer
    pub async fn run(&mut self, renderer: &Renderer) {
        info!("Starting main loop...");
        let mut pacer = FramePacer::new(config::FRAME_RATE);
        let mut input = MouseInput::new();

        loop {
            renderer.draw_frame(self);
            next_frame().await;
            pacer.tick();

            let events = input.poll();
            if self.update(&events) == GameFlow::Quit {
                break;
            }
        }
        info!(
            "Exiting after {} frames, {} target(s) destroyed.",
            self.frame, self.target.points
        );
    }

    /// Applies one frame of input and advances the simulation by one step
    pub fn update(&mut self, events: &[InputEvent]) -> GameFlow {
        self.frame += 1;
        match mem::replace(&mut self.phase, Phase::Aiming) {
            Phase::Aiming => self.update_aiming(events),
            Phase::Celebrating(celebration) => self.update_celebration(celebration, events),
        }
    }

    fn update_aiming(&mut self, events: &[InputEvent]) -> GameFlow {
        for event in events {
            match *event {
                InputEvent::Quit => return GameFlow::Quit,
                InputEvent::PointerDown(_) => self.gun.begin_charge(),
                InputEvent::PointerUp(pointer) => {
                    let ball = self
                        .gun
                        .end_charge_and_fire(pointer, &mut self.shots, &mut self.rng);
                    self.balls.push(ball);
                }
                InputEvent::PointerMove(pointer) => self.gun.update_aim(Some(pointer)),
            }
        }

        let snapshot = mem::take(&mut self.balls);
        self.advance_balls(snapshot, true);
        GameFlow::Continue
    }

    fn update_celebration(
        &mut self,
        mut celebration: Celebration,
        events: &[InputEvent],
    ) -> GameFlow {
        // Only quitting and aiming are honoured while the victory is on screen
        for event in events {
            match *event {
                InputEvent::Quit => return GameFlow::Quit,
                InputEvent::PointerMove(pointer) => self.gun.update_aim(Some(pointer)),
                InputEvent::PointerDown(_) | InputEvent::PointerUp(_) => {}
            }
        }

        self.balls.clear();
        celebration.ball.integrate();
        celebration.frames_left = celebration.frames_left.saturating_sub(1);

        if celebration.frames_left > 0 {
            self.phase = Phase::Celebrating(celebration);
        } else {
            crate::debug_game!(
                "Celebration over, resuming with {} stray ball(s)",
                celebration.pending.len()
            );
            // Balls left over from the scoring frame finish their step but are not kept
            self.advance_balls(celebration.pending, false);
        }
        GameFlow::Continue
    }

    /// Moves each ball in order and checks it against the target.
    ///
    /// A hit stops the pass and starts a celebration that carries the
    /// unprocessed balls. Otherwise the gun charges once the pass completes.
    fn advance_balls(&mut self, balls: Vec<Ball>, keep: bool) {
        let mut remaining = balls.into_iter();
        while let Some(mut ball) = remaining.next() {
            ball.integrate();
            if self.target.alive && ball.collides_with(&self.target) {
                let message = self.destroy_target();
                self.balls.clear();
                self.phase = Phase::Celebrating(Celebration {
                    ball,
                    message,
                    frames_left: VICTORY_FRAMES,
                    pending: remaining.collect(),
                });
                return;
            }
            if keep {
                self.balls.push(ball);
            }
        }
        self.gun.increment_charge();
    }

    /// Hit, then respawn; the new target is live before the celebration starts.
    fn destroy_target(&mut self) -> String {
        self.target.alive = false;
        self.target.register_hit(1);
        let shots = self.shots.take();
        info!(
            "Target at ({}, {}) destroyed after {} shot(s), {} total hit(s).",
            self.target.x, self.target.y, shots, self.target.points
        );
        self.target.randomize(&mut self.rng);
        format!("You destroyed the target in {} shots", shots)
    }
}
