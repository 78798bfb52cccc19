//! Game session controller
//!
//! Owns the player, the world and the lift machine, and drives one frame in
//! a fixed order:
//!
//!   quit short-circuit -> input -> jump/physics or lift steering ->
//!   landing resolution -> scoring -> coin pickup -> animation counters ->
//!   helicopter pickup -> lift update -> camera scroll -> helicopter TTL
//!   (only by the distance the world actually moved) -> prune -> extend.
//!
//! Everything is frame-stepped and clock-free; the only nondeterminism is
//! the session RNG, injected so tests can seed it.

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::profile::{Profile, RunState};
use crate::storage::ProfileStore;

use super::camera;
use super::generator;
use super::lift::{release, ActiveLift, LiftPhase, LiftState};
use super::physics;
use super::player::{Player, PLAYER_SIZE};
use super::text::FloatingText;
use super::world::World;
use super::VIEW_H;

/// What a frame left behind
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameOutcome {
    Running,
    /// Player fell below the viewport; records are already persisted
    GameOver,
    /// Quit observed during the event phase; the frame was not simulated
    Quit,
}

pub struct Session {
    pub frame: u64,
    pub player: Player,
    pub world: World,
    pub lift: LiftState,
    pub run: RunState,
    rng: StdRng,
}

impl Session {
    /// Seed the world and perch the player on the centered first platform
    pub fn new(mut rng: StdRng) -> Self {
        let mut world = World::new();
        generator::seed(&mut world, &mut rng);

        let mut player = Player::new();
        let first = &world.platforms[0];
        player.rect.y = first.rect.y - PLAYER_SIZE;
        player.prev_bottom = player.rect.bottom();
        player.on_ground = true;

        Self {
            frame: 0,
            player,
            world,
            lift: LiftState::Inactive,
            run: RunState::default(),
            rng,
        }
    }

    /// A session with OS-sourced randomness
    pub fn start() -> Self {
        Self::new(StdRng::from_entropy())
    }

    /// Advance the simulation by one frame
    pub fn tick(
        &mut self,
        input: &crate::input::FrameInput,
        profile: &mut Profile,
        store: &ProfileStore,
    ) -> FrameOutcome {
        if input.quit {
            return FrameOutcome::Quit;
        }
        self.frame += 1;

        // Physics or lift steering, depending on the traversal mode
        match &mut self.lift {
            LiftState::Inactive => {
                physics::apply_move_input(&mut self.player, input.move_dir);
                if input.jump {
                    physics::try_jump(&mut self.player, self.frame);
                }
                physics::integrate(&mut self.player);
                physics::resolve_landings(
                    &mut self.player,
                    &mut self.world.platforms,
                    self.frame,
                );
            }
            LiftState::Active(lift) => {
                lift.steer(&mut self.player, input.move_dir);
            }
        }

        if self.player.rect.y > VIEW_H {
            self.persist_records(profile, store);
            return FrameOutcome::GameOver;
        }

        // Scoring: one-shot per platform, independent of landings
        let passed = physics::count_passed(&self.player, &mut self.world.platforms);
        if passed > 0 {
            self.run.platforms_passed += passed;
            if self.run.platforms_passed > profile.max_platforms {
                profile.max_platforms = self.run.platforms_passed;
                store.save(profile);
            }
        }

        // Coin pickup: currency and run score are separate counters
        for coin in physics::collect_coins(&self.player.rect, &mut self.world.coins) {
            let gained = coin.value.points() * profile.coin_multiplier();
            self.run.score += coin.value.points();
            profile.total_coins += gained;
            if self.run.score > profile.high_score {
                profile.high_score = self.run.score;
            }
            self.world.texts.push(FloatingText::coin_gain(
                coin.rect.center_x(),
                coin.rect.y,
                gained,
                coin.value,
            ));
            store.save(profile);
        }

        // Self-contained animation counters and the player trail
        self.world.tick_animations();
        self.player.sample_trail(self.frame);

        // Helicopter pickup: at most one per frame, first hit in list order
        if !self.lift.is_active() {
            if let Some(heli) =
                physics::pickup_helicopter(&self.player.rect, &mut self.world.helicopters)
            {
                self.player.vel_y = 0.0;
                self.player.on_ground = true;
                self.lift = LiftState::Active(ActiveLift::begin(
                    heli,
                    &mut self.player,
                    &mut self.rng,
                ));
            }
        }

        // Lift update, then camera: exactly one of the two may move the
        // world in a frame
        let world_moved = match &mut self.lift {
            LiftState::Active(lift) => {
                let moved = lift.advance(&mut self.player, &mut self.world);
                if lift.phase == LiftPhase::Releasing {
                    release(&mut self.player);
                    self.lift = LiftState::Inactive;
                }
                moved
            }
            LiftState::Inactive => camera::scroll(&mut self.player, &mut self.world),
        };

        // Unused helicopters age by world distance and vanish at the bottom
        // edge or when their budget runs dry
        for heli in &mut self.world.helicopters {
            if heli.is_vanishing() {
                heli.tick_vanish();
                continue;
            }
            if world_moved > 0.0 {
                heli.consume_lifetime(world_moved);
            }
            if heli.ttl <= 0.0 || heli.rect.bottom() >= VIEW_H {
                heli.begin_vanish();
            }
        }

        self.world.prune(self.frame);
        generator::extend(&mut self.world, &mut self.rng);

        FrameOutcome::Running
    }

    fn persist_records(&self, profile: &mut Profile, store: &ProfileStore) {
        let mut dirty = false;
        if self.run.platforms_passed > profile.max_platforms {
            profile.max_platforms = self.run.platforms_passed;
            dirty = true;
        }
        if self.run.score > profile.high_score {
            profile.high_score = self.run.score;
            dirty = true;
        }
        if dirty {
            store.save(profile);
        }
    }
}
