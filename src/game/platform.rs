//! Platform entity
//!
//! Platforms come in three kinds, modeled as a sum type with per-kind
//! transient state. The `counted` flag is the one-shot scoring marker: it is
//! set the first frame the player's bottom rises above the platform top and
//! is never cleared again.

use rand::Rng;

use super::geom::Rect;

pub const PLATFORM_W: f32 = 80.0;
pub const PLATFORM_H: f32 = 20.0;

/// Frames an activated Disappearing platform survives (2 s at 90 FPS)
pub const DECAY_FRAMES: u64 = 180;

/// Frames of spring compression animation
pub const SPRING_FRAMES: u8 = 10;

/// Per-kind payload. Disappearing carries its activation frame stamp,
/// Spring its compression countdown (visual only).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PlatformKind {
    Normal,
    Disappearing { activated_at: Option<u64> },
    Spring { compress_frames: u8 },
}

#[derive(Debug, Clone)]
pub struct Platform {
    pub rect: Rect,
    pub kind: PlatformKind,
    /// One-shot scoring marker, monotonic
    pub counted: bool,
}

impl Platform {
    pub fn new(x: f32, y: f32, kind: PlatformKind) -> Self {
        Self {
            rect: Rect::new(x, y, PLATFORM_W, PLATFORM_H),
            kind,
            counted: false,
        }
    }

    /// Draw a kind from the fixed categorical distribution
    /// {Normal 0.7, Disappearing 0.2, Spring 0.1}.
    pub fn random(x: f32, y: f32, rng: &mut impl Rng) -> Self {
        let roll: f32 = rng.gen();
        let kind = if roll < 0.7 {
            PlatformKind::Normal
        } else if roll < 0.9 {
            PlatformKind::Disappearing { activated_at: None }
        } else {
            PlatformKind::Spring { compress_frames: 0 }
        };
        Self::new(x, y, kind)
    }

    pub fn is_normal(&self) -> bool {
        matches!(self.kind, PlatformKind::Normal)
    }

    /// Stamp the decay start on first landing. Later contacts are ignored;
    /// the platform never re-activates.
    pub fn activate(&mut self, frame: u64) {
        if let PlatformKind::Disappearing { activated_at } = &mut self.kind {
            if activated_at.is_none() {
                *activated_at = Some(frame);
            }
        }
    }

    /// Has the fixed decay window elapsed since activation?
    pub fn decay_elapsed(&self, frame: u64) -> bool {
        match self.kind {
            PlatformKind::Disappearing {
                activated_at: Some(at),
            } => frame.saturating_sub(at) >= DECAY_FRAMES,
            _ => false,
        }
    }

    /// Remaining decay as 0.0..=1.0 for translucency rendering
    pub fn decay_remaining(&self, frame: u64) -> f32 {
        match self.kind {
            PlatformKind::Disappearing {
                activated_at: Some(at),
            } => 1.0 - (frame.saturating_sub(at) as f32 / DECAY_FRAMES as f32).min(1.0),
            _ => 1.0,
        }
    }

    /// Start the spring compression animation
    pub fn compress(&mut self) {
        if let PlatformKind::Spring { compress_frames } = &mut self.kind {
            *compress_frames = SPRING_FRAMES;
        }
    }

    /// Tick the spring animation countdown
    pub fn tick_animation(&mut self) {
        if let PlatformKind::Spring { compress_frames } = &mut self.kind {
            *compress_frames = compress_frames.saturating_sub(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_activation_is_one_shot() {
        let mut p = Platform::new(0.0, 0.0, PlatformKind::Disappearing { activated_at: None });
        p.activate(100);
        p.activate(150); // second landing must not restart the window
        assert_eq!(
            p.kind,
            PlatformKind::Disappearing {
                activated_at: Some(100)
            }
        );
    }

    #[test]
    fn test_decay_window_is_exact() {
        let mut p = Platform::new(0.0, 0.0, PlatformKind::Disappearing { activated_at: None });
        p.activate(40);
        assert!(!p.decay_elapsed(40 + DECAY_FRAMES - 1));
        assert!(p.decay_elapsed(40 + DECAY_FRAMES));
    }

    #[test]
    fn test_decay_ignores_further_contact() {
        let mut p = Platform::new(0.0, 0.0, PlatformKind::Disappearing { activated_at: None });
        p.activate(10);
        for frame in 11..10 + DECAY_FRAMES {
            p.activate(frame);
        }
        assert!(p.decay_elapsed(10 + DECAY_FRAMES));
    }

    #[test]
    fn test_spring_countdown() {
        let mut p = Platform::new(0.0, 0.0, PlatformKind::Spring { compress_frames: 0 });
        p.compress();
        for _ in 0..SPRING_FRAMES {
            p.tick_animation();
        }
        assert_eq!(p.kind, PlatformKind::Spring { compress_frames: 0 });
    }

    #[test]
    fn test_random_distribution_sanity() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut normal = 0;
        let mut disappearing = 0;
        let mut spring = 0;
        for _ in 0..2000 {
            match Platform::random(0.0, 0.0, &mut rng).kind {
                PlatformKind::Normal => normal += 1,
                PlatformKind::Disappearing { .. } => disappearing += 1,
                PlatformKind::Spring { .. } => spring += 1,
            }
        }
        assert!((1200..1600).contains(&normal));
        assert!((250..550).contains(&disappearing));
        assert!((100..300).contains(&spring));
    }
}
