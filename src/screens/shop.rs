//! Shop screens
//!
//! Skins and trails share one layout; the permanent upgrade gets its own
//! smaller screen. Purchases go through the profile helpers and persist
//! immediately.

use macroquad::prelude::*;

use crate::audio::MusicPlayer;
use crate::game::geom::Rect;
use crate::game::{VIEW_H, VIEW_W};
use crate::profile::{Profile, Skin, Trail, DOUBLE_COINS_PRICE};
use crate::render::ViewTransform;
use crate::storage::ProfileStore;

use super::Button;

/// How a shop screen ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShopExit {
    Back,
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShopKind {
    Skins,
    Trails,
}

/// One purchasable row
struct ShopItem {
    label: &'static str,
    price: u32,
    owned: bool,
    selected: bool,
}

fn items_for(kind: ShopKind, profile: &Profile) -> Vec<ShopItem> {
    match kind {
        ShopKind::Skins => Skin::ALL
            .iter()
            .map(|&s| ShopItem {
                label: s.label(),
                price: s.price(),
                owned: profile.owns_skin(s),
                selected: profile.current_skin == s,
            })
            .collect(),
        ShopKind::Trails => Trail::ALL
            .iter()
            .map(|&t| ShopItem {
                label: t.label(),
                price: t.price(),
                owned: profile.owns_trail(t),
                selected: profile.current_trail == t,
            })
            .collect(),
    }
}

fn select(kind: ShopKind, index: usize, profile: &mut Profile) -> bool {
    match kind {
        ShopKind::Skins => profile.select_skin(Skin::ALL[index]),
        ShopKind::Trails => profile.select_trail(Trail::ALL[index]),
    }
}

/// Run a skins or trails shop until Back is clicked
pub async fn shop(
    kind: ShopKind,
    profile: &mut Profile,
    store: &ProfileStore,
    music: &mut MusicPlayer,
) -> ShopExit {
    let title = match kind {
        ShopKind::Skins => "Skin Shop",
        ShopKind::Trails => "Trail Shop",
    };
    let back = Button::new(
        Rect::new(VIEW_W * 0.5 - 100.0, VIEW_H - 80.0, 200.0, 50.0),
        "Back",
        Color::from_rgba(200, 70, 70, 255),
        Color::from_rgba(255, 100, 100, 255),
    );

    loop {
        music.update(profile.sound_enabled);
        if is_quit_requested() {
            return ShopExit::Quit;
        }

        let view = ViewTransform::fit();
        clear_background(BLACK);
        view.fill_rect(
            &Rect::new(0.0, 0.0, VIEW_W, VIEW_H),
            Color::from_rgba(50, 50, 70, 255),
        );
        view.text_centered(title, VIEW_W * 0.5, 70.0, 32.0, WHITE);
        view.text_centered(
            &format!("Coins: {}", profile.total_coins),
            VIEW_W * 0.5,
            110.0,
            26.0,
            YELLOW,
        );

        let items = items_for(kind, profile);
        let mut clicked = None;
        for (i, item) in items.iter().enumerate() {
            let row = Rect::new(VIEW_W * 0.5 - 150.0, 150.0 + i as f32 * 95.0, 300.0, 80.0);
            let fill = if item.selected {
                Color::from_rgba(204, 255, 204, 255)
            } else if item.owned {
                Color::from_rgba(70, 70, 200, 255)
            } else {
                Color::from_rgba(100, 100, 100, 255)
            };
            view.fill_rect(&row, fill);
            view.stroke_rect(&row, 2.0, Color::from_rgba(40, 40, 40, 255));
            let label_color = if item.selected { BLACK } else { WHITE };
            view.text_centered(item.label, row.center_x(), row.y + 32.0, 22.0, label_color);

            let status_color = if item.owned {
                GREEN
            } else if item.price > profile.total_coins {
                Color::from_rgba(255, 100, 100, 255)
            } else {
                YELLOW
            };
            let status = if item.owned {
                "Owned".to_string()
            } else {
                format!("{} coins", item.price)
            };
            view.text_centered(&status, row.center_x(), row.y + 62.0, 18.0, status_color);

            let (mx, my) = view.mouse();
            if is_mouse_button_pressed(MouseButton::Left) && row.contains(mx, my) {
                clicked = Some(i);
            }
        }

        if let Some(i) = clicked {
            if select(kind, i, profile) {
                store.save(profile);
            }
        }

        back.draw(&view, WHITE);
        if back.clicked(&view) || is_key_pressed(KeyCode::Escape) {
            return ShopExit::Back;
        }

        next_frame().await;
    }
}

/// The single permanent upgrade: double coins
pub async fn upgrades(
    profile: &mut Profile,
    store: &ProfileStore,
    music: &mut MusicPlayer,
) -> ShopExit {
    let back = Button::new(
        Rect::new(VIEW_W * 0.5 - 100.0, VIEW_H - 80.0, 200.0, 50.0),
        "Back",
        Color::from_rgba(200, 70, 70, 255),
        Color::from_rgba(255, 100, 100, 255),
    );
    let upgrade_row = Rect::new(VIEW_W * 0.5 - 150.0, 220.0, 300.0, 80.0);

    loop {
        music.update(profile.sound_enabled);
        if is_quit_requested() {
            return ShopExit::Quit;
        }

        let view = ViewTransform::fit();
        clear_background(BLACK);
        view.fill_rect(
            &Rect::new(0.0, 0.0, VIEW_W, VIEW_H),
            Color::from_rgba(50, 50, 70, 255),
        );
        view.text_centered("Upgrade Shop", VIEW_W * 0.5, 80.0, 32.0, WHITE);
        view.text_centered(
            &format!("Coins: {}", profile.total_coins),
            VIEW_W * 0.5,
            120.0,
            26.0,
            YELLOW,
        );

        let fill = if profile.double_coins {
            Color::from_rgba(204, 255, 204, 255)
        } else if profile.total_coins >= DOUBLE_COINS_PRICE {
            Color::from_rgba(70, 70, 200, 255)
        } else {
            Color::from_rgba(100, 100, 100, 255)
        };
        view.fill_rect(&upgrade_row, fill);
        view.stroke_rect(&upgrade_row, 2.0, Color::from_rgba(40, 40, 40, 255));
        let label_color = if profile.double_coins { BLACK } else { WHITE };
        view.text_centered("x2 Coins", upgrade_row.center_x(), upgrade_row.y + 32.0, 22.0, label_color);
        if profile.double_coins {
            view.text_centered("Owned", upgrade_row.center_x(), upgrade_row.y + 62.0, 18.0, GREEN);
        } else {
            let color = if profile.total_coins >= DOUBLE_COINS_PRICE {
                YELLOW
            } else {
                Color::from_rgba(255, 100, 100, 255)
            };
            view.text_centered(
                &format!("{} coins", DOUBLE_COINS_PRICE),
                upgrade_row.center_x(),
                upgrade_row.y + 62.0,
                18.0,
                color,
            );
        }

        if is_mouse_button_pressed(MouseButton::Left) {
            let (mx, my) = view.mouse();
            if upgrade_row.contains(mx, my) && profile.buy_double_coins() {
                store.save(profile);
            }
        }

        back.draw(&view, WHITE);
        if back.clicked(&view) || is_key_pressed(KeyCode::Escape) {
            return ShopExit::Back;
        }

        next_frame().await;
    }
}
