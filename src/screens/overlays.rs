//! In-game overlays: pause and game over

use macroquad::prelude::*;

use crate::audio::MusicPlayer;
use crate::game::geom::Rect;
use crate::game::{Session, VIEW_H, VIEW_W};
use crate::profile::Profile;
use crate::render::{Renderer, ViewTransform};

use super::Button;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOverAction {
    Restart,
    Menu,
    Quit,
}

/// Dim the frozen game and say so. The caller keeps drawing the session
/// behind this every frame; world state is not touched while paused.
pub fn draw_pause_overlay(view: &ViewTransform) {
    view.fill_rect(
        &Rect::new(0.0, 0.0, VIEW_W, VIEW_H),
        Color::new(0.0, 0.0, 0.0, 0.55),
    );
    view.text_centered("PAUSED", VIEW_W * 0.5, VIEW_H * 0.45, 40.0, WHITE);
    view.text_centered("P to resume", VIEW_W * 0.5, VIEW_H * 0.45 + 35.0, 18.0, GRAY);
}

/// Run the game-over overlay on top of the final frame until the player
/// picks restart, menu or quit
pub async fn game_over(
    session: &Session,
    renderer: &mut Renderer,
    profile: &Profile,
    music: &mut MusicPlayer,
) -> GameOverAction {
    let restart = Button::new(
        Rect::new(VIEW_W * 0.5 - 150.0, VIEW_H * 0.5 + 80.0, 120.0, 40.0),
        "Restart",
        Color::from_rgba(70, 200, 70, 255),
        Color::from_rgba(100, 255, 100, 255),
    );
    let menu = Button::new(
        Rect::new(VIEW_W * 0.5 + 30.0, VIEW_H * 0.5 + 80.0, 120.0, 40.0),
        "Menu",
        Color::from_rgba(200, 70, 70, 255),
        Color::from_rgba(255, 100, 100, 255),
    );

    loop {
        music.update(profile.sound_enabled);
        if is_quit_requested() {
            return GameOverAction::Quit;
        }

        let view = ViewTransform::fit();
        renderer.draw(&view, session, profile);
        view.fill_rect(
            &Rect::new(0.0, 0.0, VIEW_W, VIEW_H),
            Color::new(0.0, 0.0, 0.0, 0.7),
        );

        view.text_centered(
            "GAME OVER",
            VIEW_W * 0.5,
            VIEW_H * 0.5 - 100.0,
            36.0,
            Color::from_rgba(255, 50, 50, 255),
        );
        view.text_centered(
            &format!("Platforms: {}", session.run.platforms_passed),
            VIEW_W * 0.5,
            VIEW_H * 0.5 - 50.0,
            28.0,
            WHITE,
        );
        view.text_centered(
            &format!("Record: {}", profile.max_platforms),
            VIEW_W * 0.5,
            VIEW_H * 0.5 - 15.0,
            28.0,
            YELLOW,
        );
        view.text_centered(
            &format!("Total coins: {}", profile.total_coins),
            VIEW_W * 0.5,
            VIEW_H * 0.5 + 20.0,
            28.0,
            Color::from_rgba(255, 200, 100, 255),
        );

        restart.draw(&view, BLACK);
        menu.draw(&view, BLACK);

        if restart.clicked(&view) || is_key_pressed(KeyCode::Space) {
            return GameOverAction::Restart;
        }
        if menu.clicked(&view) || is_key_pressed(KeyCode::Escape) {
            return GameOverAction::Menu;
        }

        next_frame().await;
    }
}
