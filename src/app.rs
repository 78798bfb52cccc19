//! Screen flow
//!
//! Menu -> play -> game over, with the shops hanging off the menu. The play
//! loop is the only place the core session is ticked; pausing just stops
//! ticking while the loop keeps polling input, so resuming continues with
//! the state exactly as it was left.

use macroquad::prelude::{get_time, next_frame};

use crate::audio::MusicPlayer;
use crate::game::{FrameOutcome, Session, TICK_RATE};
use crate::input::FrameInput;
use crate::profile::Profile;
use crate::render::{Renderer, ViewTransform};
use crate::screens::{self, GameOverAction, MenuAction};
use crate::storage::ProfileStore;

enum PlayExit {
    Menu,
    Quit,
}

/// Top-level application loop. Returns when the player quits.
pub async fn run() {
    let store = ProfileStore::at_default_location();
    let mut profile = store.load();
    let mut music = MusicPlayer::load().await;

    loop {
        match screens::menu(&mut profile, &store, &mut music).await {
            MenuAction::Quit => break,
            MenuAction::Start => match play(&mut profile, &store, &mut music).await {
                PlayExit::Menu => {}
                PlayExit::Quit => break,
            },
        }
    }

    // Parting save so a quit from anywhere keeps the latest state
    store.save(&profile);
}

/// One or more runs, restarting in place until the player leaves
async fn play(profile: &mut Profile, store: &ProfileStore, music: &mut MusicPlayer) -> PlayExit {
    let mut session = Session::start();
    let mut renderer = Renderer::new();
    let mut paused = false;

    loop {
        let frame_start = get_time();
        music.update(profile.sound_enabled);

        let input = FrameInput::poll();
        if input.pause {
            paused = !paused;
        }

        let view = ViewTransform::fit();
        if paused {
            if input.quit {
                return PlayExit::Quit;
            }
            renderer.draw(&view, &session, profile);
            screens::draw_pause_overlay(&view);
            next_frame().await;
            continue;
        }

        match session.tick(&input, profile, store) {
            FrameOutcome::Running => {}
            FrameOutcome::Quit => return PlayExit::Quit,
            FrameOutcome::GameOver => {
                match screens::game_over(&session, &mut renderer, profile, music).await {
                    GameOverAction::Restart => {
                        session = Session::start();
                        renderer = Renderer::new();
                        continue;
                    }
                    GameOverAction::Menu => return PlayExit::Menu,
                    GameOverAction::Quit => return PlayExit::Quit,
                }
            }
        }

        renderer.draw(&view, &session, profile);
        pad_frame(frame_start);
        next_frame().await;
    }
}

/// Hold the loop to the fixed tick rate when vsync runs faster. The
/// simulation constants are per-frame deltas, so frame rate is game speed.
fn pad_frame(frame_start: f64) {
    #[cfg(not(target_arch = "wasm32"))]
    {
        let target = 1.0 / TICK_RATE as f64;
        let elapsed = get_time() - frame_start;
        if elapsed < target {
            std::thread::sleep(std::time::Duration::from_secs_f64(target - elapsed));
        }
    }
    #[cfg(target_arch = "wasm32")]
    let _ = frame_start;
}
