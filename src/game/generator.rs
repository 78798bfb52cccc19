//! Procedural world generation
//!
//! Platforms are generated upward from the current frontier (the highest
//! live platform) at a fixed vertical gap until the frontier leaves the top
//! of the viewport. Generation is invoked once to seed a session and then
//! every frame after pruning, which keeps the world infinite without ever
//! holding more than a couple of screens of entities.

use rand::Rng;

use super::coin::{Coin, CoinValue, COIN_SIZE};
use super::helicopter::Helicopter;
use super::platform::{Platform, PlatformKind, PLATFORM_W};
use super::world::World;
use super::{VIEW_H, VIEW_W};

/// Vertical distance between consecutive platforms
pub const PLATFORM_GAP: f32 = 100.0;

/// Platforms seeded at session start
pub const SEED_COUNT: usize = 10;

/// Top edge of the session's first (centered) platform
pub const SEED_BASE_Y: f32 = VIEW_H - 50.0;

/// Chance a Normal platform carries a helicopter
const HELICOPTER_CHANCE: f32 = 0.02;

/// Chance a platform carries a coin (when it got no helicopter)
const COIN_CHANCE: f32 = 0.4;

/// Chance a spawned coin is Rare rather than Common
const RARE_CHANCE: f32 = 0.15;

/// Seed a fresh session: one centered platform at the base line, then
/// `SEED_COUNT - 1` more at the fixed gap above it. The centered platform
/// is the player's spawn perch and gets no decoration.
pub fn seed(world: &mut World, rng: &mut impl Rng) {
    let first = Platform::new(VIEW_W * 0.5 - PLATFORM_W * 0.5, SEED_BASE_Y, PlatformKind::Normal);
    world.platforms.push(first);

    for i in 1..SEED_COUNT {
        let y = SEED_BASE_Y - i as f32 * PLATFORM_GAP;
        push_platform(world, y, rng);
    }
}

/// Extend the world upward while the frontier is still inside the viewport.
/// No-op when no platforms are left (the session is already lost).
pub fn extend(world: &mut World, rng: &mut impl Rng) {
    let Some(mut highest) = world.highest_platform_y() else {
        return;
    };
    while highest > 0.0 {
        let y = highest - PLATFORM_GAP;
        push_platform(world, y, rng);
        highest = y;
    }
}

/// Create one randomized platform at the given height and roll its
/// decoration: a helicopter (Normal platforms only) or a coin, never both.
fn push_platform(world: &mut World, y: f32, rng: &mut impl Rng) {
    let x = rng.gen_range(0.0..=VIEW_W - PLATFORM_W);
    let platform = Platform::random(x, y, rng);

    if platform.is_normal() && rng.gen::<f32>() < HELICOPTER_CHANCE {
        world
            .helicopters
            .push(Helicopter::anchored_above(&platform.rect));
    } else if rng.gen::<f32>() < COIN_CHANCE {
        let value = if rng.gen::<f32>() < RARE_CHANCE {
            CoinValue::Rare
        } else {
            CoinValue::Common
        };
        world.coins.push(Coin::new(
            platform.rect.center_x() - COIN_SIZE * 0.5,
            y - COIN_SIZE - 5.0,
            value,
        ));
    }

    world.platforms.push(platform);
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn seeded_world(seed_val: u64) -> World {
        let mut world = World::new();
        let mut rng = StdRng::seed_from_u64(seed_val);
        seed(&mut world, &mut rng);
        world
    }

    #[test]
    fn test_seed_count_and_exact_gaps() {
        let world = seeded_world(1);
        assert_eq!(world.platforms.len(), SEED_COUNT);
        for (i, p) in world.platforms.iter().enumerate() {
            assert_eq!(p.rect.y, SEED_BASE_Y - i as f32 * PLATFORM_GAP);
        }
    }

    #[test]
    fn test_first_platform_centered_and_bare() {
        let world = seeded_world(2);
        let first = &world.platforms[0];
        assert_eq!(first.rect.center_x(), VIEW_W * 0.5);
        assert!(first.is_normal());
        // Nothing may be anchored to the spawn perch
        for c in &world.coins {
            assert!(c.rect.y < SEED_BASE_Y - PLATFORM_GAP);
        }
        for h in &world.helicopters {
            assert!(h.rect.y < SEED_BASE_Y - PLATFORM_GAP);
        }
    }

    #[test]
    fn test_extend_fills_to_top() {
        let mut world = seeded_world(3);
        // Simulate a scroll that drops the frontier into view
        world.translate(400.0);
        world.prune(0);
        let mut rng = StdRng::seed_from_u64(4);
        extend(&mut world, &mut rng);

        let highest = world.highest_platform_y().unwrap();
        assert!(highest <= 0.0);
        // Gaps stay exact across the old/new boundary
        let mut ys: Vec<f32> = world.platforms.iter().map(|p| p.rect.y).collect();
        ys.sort_by(|a, b| a.total_cmp(b));
        for pair in ys.windows(2) {
            assert_eq!(pair[1] - pair[0], PLATFORM_GAP);
        }
    }

    #[test]
    fn test_extend_is_deterministic_for_a_seed() {
        let mut a = World::new();
        let mut b = World::new();
        let mut rng_a = StdRng::seed_from_u64(9);
        let mut rng_b = StdRng::seed_from_u64(9);
        seed(&mut a, &mut rng_a);
        seed(&mut b, &mut rng_b);
        let xs_a: Vec<f32> = a.platforms.iter().map(|p| p.rect.x).collect();
        let xs_b: Vec<f32> = b.platforms.iter().map(|p| p.rect.x).collect();
        assert_eq!(xs_a, xs_b);
    }

    #[test]
    fn test_platforms_stay_in_viewport() {
        let mut world = World::new();
        let mut rng = StdRng::seed_from_u64(5);
        seed(&mut world, &mut rng);
        for _ in 0..50 {
            world.translate(PLATFORM_GAP);
            world.prune(0);
            extend(&mut world, &mut rng);
        }
        for p in &world.platforms {
            assert!(p.rect.x >= 0.0);
            assert!(p.rect.right() <= VIEW_W);
        }
    }

    #[test]
    fn test_helicopters_only_on_normal_and_never_with_coin() {
        let mut world = World::new();
        let mut rng = StdRng::seed_from_u64(6);
        seed(&mut world, &mut rng);
        // Generate a lot of platforms to actually hit the 2% roll
        for _ in 0..400 {
            world.translate(PLATFORM_GAP);
            // Skip pruning so everything stays observable
            extend(&mut world, &mut rng);
        }
        assert!(!world.helicopters.is_empty());
        for h in &world.helicopters {
            // The platform a helicopter is anchored to must be Normal and
            // must not also carry a coin.
            let anchor = world
                .platforms
                .iter()
                .find(|p| (p.rect.y - (h.rect.bottom() + 6.0)).abs() < 0.01
                    && (p.rect.center_x() - h.rect.center_x()).abs() < 0.01)
                .expect("helicopter has an anchor platform");
            assert!(anchor.is_normal());
            let coin_above = world.coins.iter().any(|c| {
                (c.rect.center_x() - anchor.rect.center_x()).abs() < 0.01
                    && (anchor.rect.y - c.rect.bottom() - 5.0).abs() < 0.01
            });
            assert!(!coin_above);
        }
    }
}
