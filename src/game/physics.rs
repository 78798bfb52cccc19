//! Physics & collision engine
//!
//! Frame-stepped, tuned for a fixed 90 FPS tick: every constant here is a
//! per-frame delta, so the simulation is deterministic given a stable frame
//! rate and never reads a clock. The session calls these in a fixed order;
//! none of them run while the helicopter lift is carrying the player.

use super::coin::Coin;
use super::geom::Rect;
use super::helicopter::Helicopter;
use super::platform::{Platform, PlatformKind};
use super::player::{Player, PLAYER_SIZE};
use super::VIEW_W;

/// Downward acceleration per frame
pub const GRAVITY: f32 = 0.5;

/// Vertical velocity set by a jump (negative is up)
pub const JUMP_VELOCITY: f32 = -12.0;

/// Spring platforms launch at this multiple of the jump impulse
pub const SPRING_FACTOR: f32 = 1.5;

/// Horizontal speed while a movement key is held
pub const PLAYER_SPEED: f32 = 6.0;

/// Frames after session start during which the initial jump is allowed
/// even though the player has not landed yet (1.5 s at 90 FPS)
pub const INITIAL_JUMP_GRACE_FRAMES: u64 = 135;

/// Apply held movement keys to horizontal velocity and facing
pub fn apply_move_input(player: &mut Player, dir: f32) {
    player.vel_x = dir * PLAYER_SPEED;
    if dir > 0.0 {
        player.facing_right = true;
    } else if dir < 0.0 {
        player.facing_right = false;
    }
}

/// Jump if grounded, or once during the spawn grace window. Returns whether
/// the jump fired.
pub fn try_jump(player: &mut Player, frame: u64) -> bool {
    let grace = frame < INITIAL_JUMP_GRACE_FRAMES && player.initial_jump;
    if !player.on_ground && !grace {
        return false;
    }
    player.vel_y = JUMP_VELOCITY;
    player.on_ground = false;
    player.initial_jump = false;
    player.jump_count += 1;
    true
}

/// Integrate one frame: gravity into velocity, velocity into position,
/// horizontal clamp to the viewport (no wraparound). Records the previous
/// bottom edge for landing resolution.
pub fn integrate(player: &mut Player) {
    player.prev_bottom = player.rect.bottom();
    player.vel_y += GRAVITY;
    player.rect.y += player.vel_y;
    player.rect.x += player.vel_x;
    player.rect.clamp_x(0.0, VIEW_W);
}

/// Resolve landings against every intersecting platform.
///
/// A landing requires downward motion AND that the previous frame's bottom
/// was at or above the platform top, which rejects side clips. On landing
/// the player snaps to the top, loses vertical velocity and becomes
/// grounded; the platform kind then gets its say: springs relaunch at 1.5x
/// the jump impulse, disappearing platforms start their decay on first
/// contact.
pub fn resolve_landings(player: &mut Player, platforms: &mut [Platform], frame: u64) {
    player.on_ground = false;
    for platform in platforms.iter_mut() {
        let landing = player.rect.overlaps(&platform.rect)
            && player.vel_y > 0.0
            && player.prev_bottom <= platform.rect.y;
        if !landing {
            continue;
        }
        player.rect.y = platform.rect.y - PLAYER_SIZE;
        player.vel_y = 0.0;
        player.on_ground = true;
        match platform.kind {
            PlatformKind::Spring { .. } => {
                player.vel_y = JUMP_VELOCITY * SPRING_FACTOR;
                player.on_ground = false;
                platform.compress();
            }
            PlatformKind::Disappearing { .. } => platform.activate(frame),
            PlatformKind::Normal => {}
        }
    }
}

/// Count platforms the player has newly cleared: bottom strictly above the
/// platform top, `counted` not yet set. Each platform scores exactly once.
pub fn count_passed(player: &Player, platforms: &mut [Platform]) -> u32 {
    let mut passed = 0;
    for platform in platforms.iter_mut() {
        if !platform.counted && player.rect.bottom() < platform.rect.y {
            platform.counted = true;
            passed += 1;
        }
    }
    passed
}

/// Remove and return every coin the player's box currently touches
pub fn collect_coins(player_rect: &Rect, coins: &mut Vec<Coin>) -> Vec<Coin> {
    let mut picked = Vec::new();
    coins.retain(|coin| {
        if player_rect.overlaps(&coin.rect) {
            picked.push(coin.clone());
            false
        } else {
            true
        }
    });
    picked
}

/// Take the first non-vanishing helicopter the player touches out of the
/// live set. List order decides ties between overlapping helicopters; that
/// order is deterministic within a generation pass.
pub fn pickup_helicopter(
    player_rect: &Rect,
    helicopters: &mut Vec<Helicopter>,
) -> Option<Helicopter> {
    let idx = helicopters
        .iter()
        .position(|h| !h.is_vanishing() && player_rect.overlaps(&h.rect))?;
    Some(helicopters.remove(idx))
}
