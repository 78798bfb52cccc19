//! Frame input collaborator
//!
//! One snapshot of discrete events and held movement keys per frame,
//! gathered before the core updates. The session never touches the
//! windowing layer directly, which keeps it steppable from tests.

use macroquad::prelude::{is_key_down, is_key_pressed, is_quit_requested, KeyCode};

/// Input snapshot for one frame
#[derive(Debug, Clone, Copy, Default)]
pub struct FrameInput {
    /// Window close / quit requested
    pub quit: bool,
    /// Jump key went down this frame
    pub jump: bool,
    /// Pause key went down this frame
    pub pause: bool,
    /// Held movement: -1.0 left, 1.0 right, 0.0 none
    pub move_dir: f32,
}

impl FrameInput {
    /// Poll macroquad's keyboard and window state
    pub fn poll() -> Self {
        let mut move_dir = 0.0;
        if is_key_down(KeyCode::Left) || is_key_down(KeyCode::A) {
            move_dir -= 1.0;
        }
        if is_key_down(KeyCode::Right) || is_key_down(KeyCode::D) {
            move_dir += 1.0;
        }
        Self {
            quit: is_quit_requested(),
            jump: is_key_pressed(KeyCode::Space)
                || is_key_pressed(KeyCode::Up)
                || is_key_pressed(KeyCode::W),
            pause: is_key_pressed(KeyCode::P) || is_key_pressed(KeyCode::Escape),
            move_dir,
        }
    }

    /// A snapshot with nothing pressed (tests, paused frames)
    pub fn idle() -> Self {
        Self::default()
    }
}
