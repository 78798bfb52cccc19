//! Helicopter entity
//!
//! A pickup that carries the player through the lift traversal mode. While
//! unused it sits anchored above its spawn platform and ages in
//! world-distance scrolled, not wall-clock time: every pixel the world moves
//! past it costs a pixel of its lifetime budget. An expired or off-screen
//! helicopter plays a short accelerating hop upward and is then removed.

use super::geom::Rect;

pub const HELI_W: f32 = 44.0;
pub const HELI_H: f32 = 24.0;

/// Unused lifetime budget at spawn, in world-distance units
pub const SPAWN_TTL: f32 = 900.0;

/// Remaining budget below which the helicopter blinks (render hint only)
pub const BLINK_BELOW: f32 = 180.0;

/// Length of the vanish hop animation
pub const VANISH_FRAMES: u8 = 24;

#[derive(Debug, Clone)]
pub struct Helicopter {
    pub rect: Rect,
    /// Remaining unused lifetime, in world-distance units
    pub ttl: f32,
    /// Set once the player has been carried
    pub used: bool,
    /// Render hint: lifetime is almost out
    pub blinking: bool,
    /// Frames left of the vanish hop; `Some(0)` means ready for removal
    pub vanish: Option<u8>,
}

impl Helicopter {
    /// Spawn anchored centered above a platform top edge
    pub fn anchored_above(platform_rect: &Rect) -> Self {
        Self {
            rect: Rect::new(
                platform_rect.center_x() - HELI_W * 0.5,
                platform_rect.y - HELI_H - 6.0,
                HELI_W,
                HELI_H,
            ),
            ttl: SPAWN_TTL,
            used: false,
            blinking: false,
            vanish: None,
        }
    }

    /// Age by the distance the world scrolled this frame, flipping the blink
    /// flag once the remaining budget drops under the threshold.
    pub fn consume_lifetime(&mut self, scrolled: f32) {
        self.ttl -= scrolled;
        if self.ttl < BLINK_BELOW {
            self.blinking = true;
        }
    }

    pub fn begin_vanish(&mut self) {
        if self.vanish.is_none() {
            self.vanish = Some(VANISH_FRAMES);
        }
    }

    /// Advance the vanish hop: an upward rise that accelerates each frame
    pub fn tick_vanish(&mut self) {
        if let Some(remaining) = &mut self.vanish {
            if *remaining > 0 {
                let elapsed = (VANISH_FRAMES - *remaining) as f32;
                self.rect.y -= 1.0 + 0.25 * elapsed;
                *remaining -= 1;
            }
        }
    }

    pub fn vanish_finished(&self) -> bool {
        self.vanish == Some(0)
    }

    pub fn is_vanishing(&self) -> bool {
        self.vanish.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blink_threshold() {
        let platform = Rect::new(100.0, 300.0, 80.0, 20.0);
        let mut h = Helicopter::anchored_above(&platform);
        h.consume_lifetime(SPAWN_TTL - BLINK_BELOW);
        assert!(!h.blinking);
        h.consume_lifetime(1.0);
        assert!(h.blinking);
    }

    #[test]
    fn test_vanish_runs_exact_frame_count() {
        let platform = Rect::new(100.0, 300.0, 80.0, 20.0);
        let mut h = Helicopter::anchored_above(&platform);
        h.begin_vanish();
        for i in 0..VANISH_FRAMES {
            assert!(!h.vanish_finished(), "finished early at frame {}", i);
            h.tick_vanish();
        }
        assert!(h.vanish_finished());
    }

    #[test]
    fn test_vanish_hop_accelerates() {
        let platform = Rect::new(100.0, 300.0, 80.0, 20.0);
        let mut h = Helicopter::anchored_above(&platform);
        h.begin_vanish();
        let y0 = h.rect.y;
        h.tick_vanish();
        let first_step = y0 - h.rect.y;
        let y1 = h.rect.y;
        h.tick_vanish();
        let second_step = y1 - h.rect.y;
        assert!(second_step > first_step);
    }

    #[test]
    fn test_begin_vanish_is_idempotent() {
        let platform = Rect::new(100.0, 300.0, 80.0, 20.0);
        let mut h = Helicopter::anchored_above(&platform);
        h.begin_vanish();
        h.tick_vanish();
        let mid = h.vanish;
        h.begin_vanish(); // must not restart the countdown
        assert_eq!(h.vanish, mid);
    }
}
