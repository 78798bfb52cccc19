//! Player entity
//!
//! Pure state: an axis-aligned box, velocity, grounded flag and a handful of
//! cosmetic counters. All movement and collision behavior lives in the
//! physics module; the player only knows how to reset itself and maintain
//! its own trail history.

use super::geom::Rect;
use super::{VIEW_H, VIEW_W};

/// Player box side length in pixels
pub const PLAYER_SIZE: f32 = 32.0;

/// Maximum retained trail points
pub const TRAIL_CAPACITY: usize = 50;

/// Trail is sampled every this many frames
pub const TRAIL_SAMPLE_INTERVAL: u64 = 2;

/// A recorded trail position (player center, world space)
#[derive(Debug, Clone, Copy)]
pub struct TrailPoint {
    pub x: f32,
    pub y: f32,
}

#[derive(Debug, Clone)]
pub struct Player {
    pub rect: Rect,
    pub vel_x: f32,
    pub vel_y: f32,
    pub on_ground: bool,
    pub facing_right: bool,

    /// Jumps performed this run. Drives the cosmetic background stage.
    pub jump_count: u32,

    /// One free jump during the grace window right after spawn, so the
    /// player can start a run before ever having landed.
    pub initial_jump: bool,

    /// Recent center positions, newest first
    pub trail: Vec<TrailPoint>,

    /// Bottom edge at the start of the current frame, before integration.
    /// Landing resolution uses this to reject side clips.
    pub prev_bottom: f32,
}

impl Player {
    /// Spawn centered near the bottom of the viewport. The session snaps the
    /// player onto the first platform right after world seeding.
    pub fn new() -> Self {
        let rect = Rect::new(
            VIEW_W * 0.5 - PLAYER_SIZE * 0.5,
            VIEW_H - 150.0,
            PLAYER_SIZE,
            PLAYER_SIZE,
        );
        Self {
            rect,
            vel_x: 0.0,
            vel_y: 0.0,
            on_ground: true,
            facing_right: true,
            jump_count: 0,
            initial_jump: true,
            trail: Vec::new(),
            prev_bottom: rect.y + PLAYER_SIZE,
        }
    }

    /// Record the current center into the trail ring, newest first.
    /// Sampled every other frame to keep segment spacing visible.
    pub fn sample_trail(&mut self, frame: u64) {
        if frame % TRAIL_SAMPLE_INTERVAL != 0 {
            return;
        }
        self.trail.insert(
            0,
            TrailPoint {
                x: self.rect.center_x(),
                y: self.rect.center_y(),
            },
        );
        self.trail.truncate(TRAIL_CAPACITY);
    }

    /// Shift all trail points down by `dy` (world scrolled under the player)
    pub fn translate_trail(&mut self, dy: f32) {
        for p in &mut self.trail {
            p.y += dy;
        }
    }
}

impl Default for Player {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spawn_state() {
        let p = Player::new();
        assert!(p.on_ground);
        assert!(p.initial_jump);
        assert_eq!(p.jump_count, 0);
        assert_eq!(p.rect.center_x(), VIEW_W * 0.5);
    }

    #[test]
    fn test_trail_capacity_and_order() {
        let mut p = Player::new();
        for frame in 0..200 {
            p.rect.y -= 1.0;
            p.sample_trail(frame);
        }
        assert_eq!(p.trail.len(), TRAIL_CAPACITY);
        // Newest point first
        assert!(p.trail[0].y < p.trail[1].y);
    }

    #[test]
    fn test_trail_sample_interval() {
        let mut p = Player::new();
        p.sample_trail(1); // off-interval frame, skipped
        assert!(p.trail.is_empty());
        p.sample_trail(2);
        assert_eq!(p.trail.len(), 1);
    }
}
