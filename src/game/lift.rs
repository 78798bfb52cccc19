//! Helicopter lift state machine
//!
//! A secondary traversal mode that suspends normal collision physics. The
//! carried helicopter is moved OUT of the world's live set and INTO the
//! `Active` variant here, so a lift without a helicopter cannot be
//! represented, and only one helicopter can carry the player at a time.
//!
//! Phases: the helicopter first rises to the camera hold line (`Ascending`),
//! then stays pinned there while the rest of the world scrolls past
//! (`Scrolling`). Both phases consume a randomly assigned budget of
//! world-distance; when it runs out the machine passes through `Releasing`
//! for one update and the session drops the player back into normal falling
//! physics. Splitting "ascend" from "hold-line scroll" keeps the camera
//! contract identical to normal flight: the player is always visually near
//! the hold line, but the ride is bounded rather than free flight.

use rand::Rng;

use super::helicopter::{Helicopter, BLINK_BELOW};
use super::physics::{JUMP_VELOCITY, PLAYER_SPEED, SPRING_FACTOR};
use super::player::{Player, PLAYER_SIZE};
use super::world::World;
use super::{HOLD_LINE, VIEW_W};

/// Helicopter rise per frame while ascending
pub const LIFT_SPEED: f32 = 4.0;

/// World scroll per frame while holding the line. Deliberately fractional:
/// the sub-pixel accumulator turns it into an exact integer displacement
/// stream (3, 4, 3, 4, ...) whose long-run total never drifts.
pub const SCROLL_SPEED: f32 = 3.5;

/// Assigned lift budget range, in world-distance units
pub const BUDGET_MIN: f32 = 500.0;
pub const BUDGET_MAX: f32 = 1100.0;

/// Upward velocity imposed on the player when the lift releases
pub const RELEASE_VELOCITY: f32 = JUMP_VELOCITY * SPRING_FACTOR;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LiftPhase {
    /// Helicopter below the hold line, rising toward it
    Ascending,
    /// Helicopter pinned at the hold line, world scrolling past
    Scrolling,
    /// Budget exhausted; the session resolves this into `Inactive`
    Releasing,
}

/// The running lift. Owns the carrying helicopter for its whole duration.
#[derive(Debug)]
pub struct ActiveLift {
    pub heli: Helicopter,
    pub phase: LiftPhase,
    /// Remaining world-distance quota
    pub budget: f32,
    /// Sub-pixel remainder of the scroll stream
    scroll_accum: f32,
}

#[derive(Debug, Default)]
pub enum LiftState {
    #[default]
    Inactive,
    Active(ActiveLift),
}

impl LiftState {
    pub fn is_active(&self) -> bool {
        matches!(self, LiftState::Active(_))
    }
}

impl ActiveLift {
    /// Begin a lift with a freshly picked-up helicopter. Assigns the random
    /// budget and seats the player; the caller has already zeroed the fall
    /// velocity and set the grounded flag.
    pub fn begin(mut heli: Helicopter, player: &mut Player, rng: &mut impl Rng) -> Self {
        heli.used = true;
        let phase = if heli.rect.y > HOLD_LINE {
            LiftPhase::Ascending
        } else {
            // Picked up at or above the hold line: pin immediately
            heli.rect.y = HOLD_LINE;
            LiftPhase::Scrolling
        };
        let mut lift = Self {
            heli,
            phase,
            budget: rng.gen_range(BUDGET_MIN..=BUDGET_MAX),
            scroll_accum: 0.0,
        };
        lift.seat(player);
        lift
    }

    /// Steer the helicopter horizontally; the player stays locked to it
    pub fn steer(&mut self, player: &mut Player, dir: f32) {
        self.heli.rect.x += dir * PLAYER_SPEED;
        self.heli.rect.clamp_x(0.0, VIEW_W);
        if dir > 0.0 {
            player.facing_right = true;
        } else if dir < 0.0 {
            player.facing_right = false;
        }
        self.seat(player);
    }

    /// Advance one frame. Returns the distance the world was scrolled (zero
    /// while ascending), so the session can feed helicopter lifetimes.
    pub fn advance(&mut self, player: &mut Player, world: &mut World) -> f32 {
        let scrolled = match self.phase {
            LiftPhase::Ascending => {
                let rise = LIFT_SPEED.min(self.heli.rect.y - HOLD_LINE);
                self.heli.rect.y -= rise;
                self.budget -= rise;
                if self.heli.rect.y <= HOLD_LINE {
                    self.heli.rect.y = HOLD_LINE;
                    self.phase = LiftPhase::Scrolling;
                }
                0.0
            }
            LiftPhase::Scrolling => {
                self.scroll_accum += SCROLL_SPEED;
                let dy = self.scroll_accum.floor();
                self.scroll_accum -= dy;
                world.translate(dy);
                player.translate_trail(dy);
                self.budget -= dy;
                dy
            }
            LiftPhase::Releasing => 0.0,
        };

        if self.budget < BLINK_BELOW {
            self.heli.blinking = true;
        }
        if self.budget <= 0.0 && self.phase != LiftPhase::Releasing {
            self.phase = LiftPhase::Releasing;
        }
        self.seat(player);
        scrolled
    }

    /// Keep the player sitting on the helicopter's top, centered
    fn seat(&self, player: &mut Player) {
        player.rect.x = self.heli.rect.center_x() - PLAYER_SIZE * 0.5;
        player.rect.y = self.heli.rect.y - PLAYER_SIZE;
        player.rect.clamp_x(0.0, VIEW_W);
    }
}

/// Resolve a `Releasing` lift: discard the helicopter, put the player back
/// into airborne physics with the fixed post-lift upward impulse.
pub fn release(player: &mut Player) {
    player.on_ground = false;
    player.vel_y = RELEASE_VELOCITY;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::geom::Rect;
    use crate::game::platform::{Platform, PlatformKind, PLATFORM_H, PLATFORM_W};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn heli_at(y: f32) -> Helicopter {
        Helicopter::anchored_above(&Rect::new(160.0, y, PLATFORM_W, PLATFORM_H))
    }

    fn begin_lift(heli_y: f32) -> (ActiveLift, Player) {
        let mut player = Player::new();
        let mut rng = StdRng::seed_from_u64(11);
        let lift = ActiveLift::begin(heli_at(heli_y), &mut player, &mut rng);
        (lift, player)
    }

    #[test]
    fn test_begin_marks_used_and_seats_player() {
        let (lift, player) = begin_lift(420.0);
        assert!(lift.heli.used);
        assert_eq!(lift.phase, LiftPhase::Ascending);
        assert!(lift.budget >= BUDGET_MIN && lift.budget <= BUDGET_MAX);
        assert_eq!(player.rect.bottom(), lift.heli.rect.y);
        assert_eq!(player.rect.center_x(), lift.heli.rect.center_x());
    }

    #[test]
    fn test_ascending_reaches_hold_line_then_scrolls() {
        let (mut lift, mut player) = begin_lift(420.0);
        let mut world = World::new();
        let mut frames = 0;
        while lift.phase == LiftPhase::Ascending {
            let scrolled = lift.advance(&mut player, &mut world);
            assert_eq!(scrolled, 0.0);
            frames += 1;
            assert!(frames < 200, "never reached the hold line");
        }
        assert_eq!(lift.heli.rect.y, HOLD_LINE);
        assert_eq!(lift.phase, LiftPhase::Scrolling);
        assert_eq!(player.rect.bottom(), HOLD_LINE);
    }

    #[test]
    fn test_budget_strictly_decreasing_until_release() {
        let (mut lift, mut player) = begin_lift(420.0);
        let mut world = World::new();
        world
            .platforms
            .push(Platform::new(0.0, 500.0, PlatformKind::Normal));
        let mut last = lift.budget;
        let mut frames = 0u32;
        while lift.phase != LiftPhase::Releasing {
            lift.advance(&mut player, &mut world);
            if lift.phase == LiftPhase::Releasing {
                break;
            }
            assert!(lift.budget < last, "budget must strictly decrease");
            last = lift.budget;
            frames += 1;
            assert!(
                (frames as f32) < BUDGET_MAX / 3.0 + 100.0,
                "machine must terminate within frames proportional to the budget"
            );
        }
        assert!(lift.heli.blinking);
    }

    #[test]
    fn test_scroll_accumulator_stays_exact() {
        let (mut lift, mut player) = begin_lift(420.0);
        // Fast-forward to the hold line
        let mut world = World::new();
        while lift.phase == LiftPhase::Ascending {
            lift.advance(&mut player, &mut world);
        }
        world
            .platforms
            .push(Platform::new(0.0, 500.0, PlatformKind::Normal));
        let start_y = world.platforms[0].rect.y;
        lift.budget = f32::MAX; // keep scrolling through the whole test

        let mut total = 0.0;
        for _ in 0..100 {
            total += lift.advance(&mut player, &mut world);
        }
        // 100 frames at 3.5 px/frame must displace exactly 350 px, every
        // pixel of it an integer step
        assert_eq!(total, 350.0);
        assert_eq!(world.platforms[0].rect.y, start_y + 350.0);
    }

    #[test]
    fn test_scrolling_pins_helicopter_and_moves_world_only() {
        let (mut lift, mut player) = begin_lift(420.0);
        let mut world = World::new();
        while lift.phase == LiftPhase::Ascending {
            lift.advance(&mut player, &mut world);
        }
        world
            .platforms
            .push(Platform::new(0.0, 500.0, PlatformKind::Normal));
        let heli_y = lift.heli.rect.y;
        lift.advance(&mut player, &mut world);
        assert_eq!(lift.heli.rect.y, heli_y);
        assert!(world.platforms[0].rect.y > 500.0);
    }

    #[test]
    fn test_release_imposes_post_lift_impulse() {
        let mut player = Player::new();
        player.on_ground = true;
        release(&mut player);
        assert!(!player.on_ground);
        assert_eq!(player.vel_y, JUMP_VELOCITY * SPRING_FACTOR);
    }

    #[test]
    fn test_pickup_above_hold_line_pins_immediately() {
        let (lift, player) = begin_lift(100.0);
        assert_eq!(lift.phase, LiftPhase::Scrolling);
        assert_eq!(lift.heli.rect.y, HOLD_LINE);
        assert_eq!(player.rect.bottom(), HOLD_LINE);
    }

    #[test]
    fn test_steer_clamps_to_viewport() {
        let (mut lift, mut player) = begin_lift(420.0);
        for _ in 0..200 {
            lift.steer(&mut player, 1.0);
        }
        assert_eq!(lift.heli.rect.right(), VIEW_W);
        assert!(player.facing_right);
        assert!(player.rect.right() <= VIEW_W);
    }
}
