//! Camera/scroll controller
//!
//! The player never actually climbs the screen: whenever its top edge rises
//! above the hold line, the whole world is pushed down by the overshoot and
//! the player with it, landing exactly on the band edge. The displacement
//! must hit every entity class in the same frame or relative positions
//! desync. The session skips this controller entirely while the lift is
//! active: the lift owns the scrolling then, and the camera acting on an
//! ascending helicopter would hold it away from the line forever.

use super::player::Player;
use super::world::World;
use super::HOLD_LINE;

/// Scroll the world down if the player overshot the hold line. Returns the
/// applied displacement (0 when the player is at or below the line).
pub fn scroll(player: &mut Player, world: &mut World) -> f32 {
    let overshoot = HOLD_LINE - player.rect.y;
    if overshoot <= 0.0 {
        return 0.0;
    }
    world.translate(overshoot);
    player.rect.y += overshoot;
    player.translate_trail(overshoot);
    overshoot
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::coin::{Coin, CoinValue};
    use crate::game::helicopter::Helicopter;
    use crate::game::platform::{Platform, PlatformKind};
    use crate::game::player::TrailPoint;
    use crate::game::text::FloatingText;

    #[test]
    fn test_no_scroll_below_band() {
        let mut player = Player::new();
        player.rect.y = HOLD_LINE + 50.0;
        let mut world = World::new();
        assert_eq!(scroll(&mut player, &mut world), 0.0);
        assert_eq!(player.rect.y, HOLD_LINE + 50.0);
    }

    #[test]
    fn test_overshoot_applied_equally_to_everything() {
        let mut player = Player::new();
        player.rect.y = HOLD_LINE - 37.0;
        player.trail.push(TrailPoint { x: 10.0, y: 300.0 });

        let mut world = World::new();
        world
            .platforms
            .push(Platform::new(0.0, 250.0, PlatformKind::Normal));
        world.coins.push(Coin::new(50.0, 220.0, CoinValue::Rare));
        let anchor = world.platforms[0].rect;
        world.helicopters.push(Helicopter::anchored_above(&anchor));
        world
            .texts
            .push(FloatingText::coin_gain(5.0, 100.0, 1, CoinValue::Common));

        let heli_y = world.helicopters[0].rect.y;
        let moved = scroll(&mut player, &mut world);

        assert_eq!(moved, 37.0);
        assert_eq!(player.rect.y, HOLD_LINE);
        assert_eq!(world.platforms[0].rect.y, 250.0 + moved);
        assert_eq!(world.coins[0].rect.y, 220.0 + moved);
        assert_eq!(world.helicopters[0].rect.y, heli_y + moved);
        assert_eq!(world.texts[0].y, 100.0 + moved);
        assert_eq!(player.trail[0].y, 300.0 + moved);
    }

    #[test]
    fn test_player_rests_exactly_on_band_edge() {
        let mut player = Player::new();
        player.rect.y = 1.5;
        let mut world = World::new();
        let moved = scroll(&mut player, &mut world);
        assert_eq!(moved, HOLD_LINE - 1.5);
        assert_eq!(player.rect.y, HOLD_LINE);
    }
}
