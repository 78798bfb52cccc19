//! Menu, shop and overlay screens
//!
//! Simple, linear glue around the core loop: each screen runs its own
//! draw-and-poll loop and returns an action. All layout is in logical
//! viewport coordinates through the same ViewTransform the game uses.

mod menu;
mod overlays;
mod shop;

pub use menu::{menu, MenuAction};
pub use overlays::{draw_pause_overlay, game_over, GameOverAction};
pub use shop::{shop, upgrades, ShopExit, ShopKind};

use macroquad::prelude::*;

use crate::game::geom::Rect;
use crate::render::ViewTransform;

/// A clickable rectangle with a centered label
pub(crate) struct Button {
    pub rect: Rect,
    pub label: String,
    pub color: Color,
    pub hover_color: Color,
}

impl Button {
    pub fn new(rect: Rect, label: impl Into<String>, color: Color, hover_color: Color) -> Self {
        Self {
            rect,
            label: label.into(),
            color,
            hover_color,
        }
    }

    pub fn hovered(&self, view: &ViewTransform) -> bool {
        let (mx, my) = view.mouse();
        self.rect.contains(mx, my)
    }

    pub fn clicked(&self, view: &ViewTransform) -> bool {
        self.hovered(view) && is_mouse_button_pressed(MouseButton::Left)
    }

    pub fn draw(&self, view: &ViewTransform, text_color: Color) {
        let fill = if self.hovered(view) {
            self.hover_color
        } else {
            self.color
        };
        view.fill_rect(&self.rect, fill);
        view.stroke_rect(&self.rect, 2.0, Color::from_rgba(40, 40, 40, 255));
        view.text_centered(
            &self.label,
            self.rect.center_x(),
            self.rect.center_y() + 7.0,
            22.0,
            text_color,
        );
    }
}
