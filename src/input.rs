use crate::types::Point;
use macroquad::prelude::{
    KeyCode, MouseButton, is_key_pressed, is_mouse_button_pressed, is_mouse_button_released,
    is_quit_requested, mouse_position,
};

/// A single input event handed to the simulation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    Quit,
    PointerDown(Point),
    PointerUp(Point),
    PointerMove(Point),
}

/// Raw pointer and window state sampled once per frame.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct InputSnapshot {
    pub pointer: Point,
    pub pressed: bool,
    pub released: bool,
    pub quit: bool,
}

const BUTTONS: [MouseButton; 3] = [MouseButton::Left, MouseButton::Right, MouseButton::Middle];

/// Turns macroquad's polled state into ordered input events.
#[derive(Debug, Default)]
pub struct MouseInput {
    last_pointer: Option<Point>,
}

impl MouseInput {
    pub fn new() -> Self {
        Default::default()
    }

    /// Drains this frame's input. Never blocks.
    pub fn poll(&mut self) -> Vec<InputEvent> {
        let (x, y) = mouse_position();
        let snapshot = InputSnapshot {
            pointer: Point::new(x as f64, y as f64),
            pressed: BUTTONS.iter().any(|b| is_mouse_button_pressed(*b)),
            released: BUTTONS.iter().any(|b| is_mouse_button_released(*b)),
            quit: is_quit_requested() || is_key_pressed(KeyCode::Escape),
        };
        self.translate(snapshot)
    }

    /// Events for one snapshot: quit first, then motion, press, release.
    ///
    /// The first snapshot only records where the pointer is; motion is
    /// reported from the second one on.
    pub fn translate(&mut self, snapshot: InputSnapshot) -> Vec<InputEvent> {
        let mut events = Vec::new();
        if snapshot.quit {
            events.push(InputEvent::Quit);
        }
        let previous = self.last_pointer.replace(snapshot.pointer);
        if previous.is_some_and(|p| p != snapshot.pointer) {
            events.push(InputEvent::PointerMove(snapshot.pointer));
        }
        if snapshot.pressed {
            events.push(InputEvent::PointerDown(snapshot.pointer));
        }
        if snapshot.released {
            events.push(InputEvent::PointerUp(snapshot.pointer));
        }
        if !events.is_empty() {
            crate::debug_input!("{:?}", events);
        }
        events
    }
}
