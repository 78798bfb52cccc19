//! Title screen

use macroquad::prelude::*;

use crate::audio::MusicPlayer;
use crate::game::geom::Rect;
use crate::game::{VIEW_H, VIEW_W};
use crate::profile::Profile;
use crate::render::ViewTransform;
use crate::storage::ProfileStore;

use super::{shop, upgrades, Button, ShopExit, ShopKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    Start,
    Quit,
}

/// Run the title screen until the player starts a run or quits. Shop
/// screens are entered and left from here without unwinding.
pub async fn menu(
    profile: &mut Profile,
    store: &ProfileStore,
    music: &mut MusicPlayer,
) -> MenuAction {
    let center = VIEW_W * 0.5;
    let start = Button::new(
        Rect::new(center - 100.0, VIEW_H * 0.5 + 10.0, 200.0, 50.0),
        "START",
        Color::from_rgba(70, 200, 70, 255),
        Color::from_rgba(100, 255, 100, 255),
    );
    let skins = Button::new(
        Rect::new(center - 100.0, VIEW_H * 0.5 + 80.0, 200.0, 50.0),
        "Skins",
        Color::from_rgba(200, 100, 200, 255),
        Color::from_rgba(255, 150, 255, 255),
    );
    let trails = Button::new(
        Rect::new(center - 100.0, VIEW_H * 0.5 + 150.0, 200.0, 50.0),
        "Trails",
        Color::from_rgba(100, 200, 200, 255),
        Color::from_rgba(150, 255, 255, 255),
    );
    let upgrades_btn = Button::new(
        Rect::new(center - 100.0, VIEW_H * 0.5 + 220.0, 200.0, 50.0),
        "Upgrades",
        Color::from_rgba(200, 170, 100, 255),
        Color::from_rgba(255, 210, 150, 255),
    );
    let sound = Rect::new(VIEW_W - 50.0, 10.0, 40.0, 40.0);

    loop {
        music.update(profile.sound_enabled);
        if is_quit_requested() {
            return MenuAction::Quit;
        }

        let view = ViewTransform::fit();
        clear_background(BLACK);
        view.fill_rect(
            &Rect::new(0.0, 0.0, VIEW_W, VIEW_H),
            Color::from_rgba(30, 30, 50, 255),
        );

        view.text_centered(
            "PIXEL HOPPER",
            center,
            VIEW_H * 0.2,
            44.0,
            Color::from_rgba(100, 255, 100, 255),
        );
        view.text_centered("Left/Right or A/D - Move", center, VIEW_H * 0.5 - 80.0, 18.0, WHITE);
        view.text_centered("Space - Jump", center, VIEW_H * 0.5 - 55.0, 18.0, WHITE);
        view.text_centered("P - Pause", center, VIEW_H * 0.5 - 30.0, 18.0, WHITE);

        view.text(
            &format!("Record: {}", profile.max_platforms),
            20.0,
            26.0,
            16.0,
            Color::from_rgba(200, 200, 255, 255),
        );
        view.text(
            &format!("Coins: {}", profile.total_coins),
            20.0,
            46.0,
            16.0,
            Color::from_rgba(255, 255, 100, 255),
        );

        start.draw(&view, BLACK);
        skins.draw(&view, BLACK);
        trails.draw(&view, BLACK);
        upgrades_btn.draw(&view, BLACK);
        draw_sound_toggle(&view, &sound, profile.sound_enabled);

        if start.clicked(&view) || is_key_pressed(KeyCode::Space) {
            return MenuAction::Start;
        }
        if skins.clicked(&view) {
            if shop(ShopKind::Skins, profile, store, music).await == ShopExit::Quit {
                return MenuAction::Quit;
            }
        } else if trails.clicked(&view) {
            if shop(ShopKind::Trails, profile, store, music).await == ShopExit::Quit {
                return MenuAction::Quit;
            }
        } else if upgrades_btn.clicked(&view) {
            if upgrades(profile, store, music).await == ShopExit::Quit {
                return MenuAction::Quit;
            }
        } else if is_mouse_button_pressed(MouseButton::Left) {
            let (mx, my) = view.mouse();
            if sound.contains(mx, my) {
                profile.sound_enabled = !profile.sound_enabled;
                store.save(profile);
            }
        }

        next_frame().await;
    }
}

fn draw_sound_toggle(view: &ViewTransform, rect: &Rect, enabled: bool) {
    let (mx, my) = view.mouse();
    let fill = if rect.contains(mx, my) {
        Color::from_rgba(100, 100, 255, 255)
    } else {
        Color::from_rgba(70, 70, 200, 255)
    };
    view.fill_rect(rect, fill);

    // Speaker body
    view.fill_rect(
        &Rect::new(rect.x + 8.0, rect.y + 15.0, 8.0, 10.0),
        WHITE,
    );
    draw_triangle(
        vec2(view.x(rect.x + 16.0), view.y(rect.y + 8.0)),
        vec2(view.x(rect.x + 16.0), view.y(rect.y + 32.0)),
        vec2(view.x(rect.x + 26.0), view.y(rect.center_y())),
        WHITE,
    );
    if !enabled {
        draw_line(
            view.x(rect.right() - 10.0),
            view.y(rect.y + 10.0),
            view.x(rect.x + 10.0),
            view.y(rect.bottom() - 10.0),
            view.len(3.0),
            Color::from_rgba(255, 70, 70, 255),
        );
    }
}
