//! World container
//!
//! Owns every live entity except the player and the helicopter currently
//! carrying the player (that one is moved into the lift state for the
//! duration of the ride). Camera and lift scrolling go through the single
//! `translate` below, so a frame's displacement is applied to every entity
//! class atomically; nothing can be left behind in stale camera space.

use super::coin::Coin;
use super::helicopter::Helicopter;
use super::platform::Platform;
use super::text::FloatingText;
use super::VIEW_H;

#[derive(Debug, Default)]
pub struct World {
    pub platforms: Vec<Platform>,
    pub coins: Vec<Coin>,
    pub helicopters: Vec<Helicopter>,
    pub texts: Vec<FloatingText>,
}

impl World {
    pub fn new() -> Self {
        Self::default()
    }

    /// Shift every live entity down by `dy`. The caller is responsible for
    /// displacing the player (and its trail) consistently in the same frame.
    pub fn translate(&mut self, dy: f32) {
        for p in &mut self.platforms {
            p.rect.y += dy;
        }
        for c in &mut self.coins {
            c.rect.y += dy;
        }
        for h in &mut self.helicopters {
            h.rect.y += dy;
        }
        for t in &mut self.texts {
            t.y += dy;
        }
    }

    /// Advance self-contained animation counters: coin bobbing, spring
    /// decompression, floating-text lifetimes.
    pub fn tick_animations(&mut self) {
        for c in &mut self.coins {
            c.tick_animation();
        }
        for p in &mut self.platforms {
            p.tick_animation();
        }
        for t in &mut self.texts {
            t.tick();
        }
    }

    /// The vertical position of the generation frontier: the top edge of
    /// the highest live platform, if any.
    pub fn highest_platform_y(&self) -> Option<f32> {
        self.platforms
            .iter()
            .map(|p| p.rect.y)
            .min_by(|a, b| a.total_cmp(b))
    }

    /// Remove entities that are done: platforms scrolled below the viewport
    /// or with an elapsed decay window, off-screen coins, helicopters whose
    /// vanish hop finished, expired popups.
    pub fn prune(&mut self, frame: u64) {
        self.platforms
            .retain(|p| p.rect.y <= VIEW_H && !p.decay_elapsed(frame));
        self.coins.retain(|c| c.rect.y <= VIEW_H);
        self.helicopters.retain(|h| !h.vanish_finished());
        self.texts.retain(|t| t.life > 0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::coin::CoinValue;
    use crate::game::platform::PlatformKind;

    #[test]
    fn test_translate_moves_every_entity_class() {
        let mut world = World::new();
        world
            .platforms
            .push(Platform::new(0.0, 100.0, PlatformKind::Normal));
        world.coins.push(Coin::new(10.0, 80.0, CoinValue::Common));
        let anchor = world.platforms[0].rect;
        world.helicopters.push(Helicopter::anchored_above(&anchor));
        world
            .texts
            .push(FloatingText::coin_gain(5.0, 50.0, 1, CoinValue::Common));

        let heli_y = world.helicopters[0].rect.y;
        world.translate(25.0);

        assert_eq!(world.platforms[0].rect.y, 125.0);
        assert_eq!(world.coins[0].rect.y, 105.0);
        assert_eq!(world.helicopters[0].rect.y, heli_y + 25.0);
        assert_eq!(world.texts[0].y, 75.0);
    }

    #[test]
    fn test_prune_offscreen_and_decayed() {
        let mut world = World::new();
        world
            .platforms
            .push(Platform::new(0.0, VIEW_H + 1.0, PlatformKind::Normal));
        world.platforms.push(Platform::new(
            0.0,
            100.0,
            PlatformKind::Disappearing {
                activated_at: Some(0),
            },
        ));
        world
            .platforms
            .push(Platform::new(0.0, 200.0, PlatformKind::Normal));
        world.coins.push(Coin::new(0.0, VIEW_H + 5.0, CoinValue::Rare));

        world.prune(crate::game::platform::DECAY_FRAMES);

        assert_eq!(world.platforms.len(), 1);
        assert_eq!(world.platforms[0].rect.y, 200.0);
        assert!(world.coins.is_empty());
    }

    #[test]
    fn test_highest_platform() {
        let mut world = World::new();
        assert!(world.highest_platform_y().is_none());
        world
            .platforms
            .push(Platform::new(0.0, 300.0, PlatformKind::Normal));
        world
            .platforms
            .push(Platform::new(0.0, 120.0, PlatformKind::Normal));
        assert_eq!(world.highest_platform_y(), Some(120.0));
    }
}
