//! Rendering collaborator
//!
//! Draws read-only snapshots of the session every frame, back to front:
//! background, platforms, coins, helicopters, floating texts, player, HUD.
//! All sprites are procedurally drawn placeholders; there is no asset
//! pipeline to fail. The logical 400x600 viewport is letterboxed into
//! whatever window macroquad gives us.

use macroquad::prelude::*;

use crate::game::coin::{Coin, CoinValue, COIN_SIZE};
use crate::game::geom;
use crate::game::helicopter::{Helicopter, VANISH_FRAMES};
use crate::game::lift::LiftState;
use crate::game::platform::{Platform, PlatformKind, SPRING_FRAMES};
use crate::game::player::{Player, PLAYER_SIZE};
use crate::game::text::FloatingText;
use crate::game::{Session, VIEW_H, VIEW_W};
use crate::profile::{Profile, Skin, Trail};

/// Letterbox mapping from the logical viewport to the window
#[derive(Debug, Clone, Copy)]
pub struct ViewTransform {
    pub scale: f32,
    pub ox: f32,
    pub oy: f32,
}

impl ViewTransform {
    /// Fit the logical viewport into the current window, centered
    pub fn fit() -> Self {
        let scale = (screen_width() / VIEW_W).min(screen_height() / VIEW_H);
        Self {
            scale,
            ox: (screen_width() - VIEW_W * scale) * 0.5,
            oy: (screen_height() - VIEW_H * scale) * 0.5,
        }
    }

    pub fn x(&self, x: f32) -> f32 {
        self.ox + x * self.scale
    }

    pub fn y(&self, y: f32) -> f32 {
        self.oy + y * self.scale
    }

    pub fn len(&self, v: f32) -> f32 {
        v * self.scale
    }

    /// Mouse position in logical viewport coordinates
    pub fn mouse(&self) -> (f32, f32) {
        let (mx, my) = mouse_position();
        ((mx - self.ox) / self.scale, (my - self.oy) / self.scale)
    }

    pub fn fill_rect(&self, r: &geom::Rect, color: Color) {
        draw_rectangle(self.x(r.x), self.y(r.y), self.len(r.w), self.len(r.h), color);
    }

    pub fn stroke_rect(&self, r: &geom::Rect, thickness: f32, color: Color) {
        draw_rectangle_lines(
            self.x(r.x),
            self.y(r.y),
            self.len(r.w),
            self.len(r.h),
            self.len(thickness),
            color,
        );
    }

    pub fn text(&self, text: &str, x: f32, y: f32, size: f32, color: Color) {
        draw_text(text, self.x(x), self.y(y), self.len(size), color);
    }

    /// Draw text horizontally centered on `center_x`
    pub fn text_centered(&self, text: &str, center_x: f32, y: f32, size: f32, color: Color) {
        let dims = measure_text(text, None, self.len(size) as u16, 1.0);
        draw_text(
            text,
            self.x(center_x) - dims.width * 0.5,
            self.y(y),
            self.len(size),
            color,
        );
    }
}

/// Background stage colors, by jump-count milestone
const STAGE_COLORS: [Color; 3] = [
    Color::new(0.12, 0.24, 0.12, 1.0),
    Color::new(0.24, 0.12, 0.24, 1.0),
    Color::new(0.12, 0.12, 0.24, 1.0),
];

/// Alpha step per frame of the background cross-fade
const FADE_STEP: f32 = 5.0 / 255.0;

/// Draws the play screen. Holds only cosmetic state: the background
/// cross-fade between jump-count stages.
pub struct Renderer {
    stage: usize,
    fading_from: Option<usize>,
    fade: f32,
}

impl Renderer {
    pub fn new() -> Self {
        Self {
            stage: 0,
            fading_from: None,
            fade: 0.0,
        }
    }

    fn stage_for(jump_count: u32) -> usize {
        if jump_count >= 100 {
            2
        } else if jump_count >= 40 {
            1
        } else {
            0
        }
    }

    pub fn draw(&mut self, view: &ViewTransform, session: &Session, profile: &Profile) {
        self.draw_background(view, session.player.jump_count);

        for platform in &session.world.platforms {
            draw_platform(view, platform, session.frame);
        }
        for coin in &session.world.coins {
            draw_coin(view, coin);
        }
        for heli in &session.world.helicopters {
            draw_helicopter(view, heli, session.frame);
        }
        if let LiftState::Active(lift) = &session.lift {
            draw_helicopter(view, &lift.heli, session.frame);
        }
        for text in &session.world.texts {
            draw_floating_text(view, text);
        }
        draw_trail(view, &session.player, profile.current_trail, session.frame);
        draw_player(view, &session.player, profile.current_skin);

        draw_hud(view, session, profile);
    }

    fn draw_background(&mut self, view: &ViewTransform, jump_count: u32) {
        let target = Self::stage_for(jump_count);
        if target != self.stage && self.fading_from.is_none() {
            self.fading_from = Some(self.stage);
            self.stage = target;
            self.fade = 0.0;
        }

        clear_background(BLACK);
        let full = geom::Rect::new(0.0, 0.0, VIEW_W, VIEW_H);
        match self.fading_from {
            Some(from) => {
                view.fill_rect(&full, STAGE_COLORS[from]);
                let mut over = STAGE_COLORS[self.stage];
                over.a = self.fade.min(1.0);
                view.fill_rect(&full, over);
                self.fade += FADE_STEP;
                if self.fade >= 1.0 {
                    self.fading_from = None;
                }
            }
            None => view.fill_rect(&full, STAGE_COLORS[self.stage]),
        }
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

fn draw_platform(view: &ViewTransform, platform: &Platform, frame: u64) {
    let (base, top) = match platform.kind {
        PlatformKind::Normal => (
            Color::from_rgba(70, 70, 200, 255),
            Color::from_rgba(150, 150, 255, 255),
        ),
        PlatformKind::Disappearing { .. } => (
            Color::from_rgba(200, 70, 70, 255),
            Color::from_rgba(255, 150, 150, 255),
        ),
        PlatformKind::Spring { .. } => (
            Color::from_rgba(100, 255, 100, 255),
            Color::from_rgba(200, 255, 200, 255),
        ),
    };

    let alpha = platform.decay_remaining(frame);
    let mut rect = platform.rect;

    // Springs squash visually while their countdown runs
    if let PlatformKind::Spring { compress_frames } = platform.kind {
        let compression = 3.0 * compress_frames as f32 / SPRING_FRAMES as f32;
        rect.y += compression;
        rect.h -= compression;
    }

    view.fill_rect(&rect, with_alpha(base, alpha));
    let top_rect = geom::Rect::new(rect.x, rect.y, rect.w, 4.0);
    view.fill_rect(&top_rect, with_alpha(top, alpha));

    if let PlatformKind::Spring { .. } = platform.kind {
        let coil = Color::from_rgba(50, 200, 50, 255);
        for i in 0..3 {
            let y = rect.bottom() - 5.0 - i as f32 * 3.0;
            draw_line(
                view.x(rect.x + 5.0),
                view.y(y),
                view.x(rect.right() - 5.0),
                view.y(y),
                view.len(2.0),
                with_alpha(coil, alpha),
            );
        }
    }
}

fn draw_coin(view: &ViewTransform, coin: &Coin) {
    let bob = coin.bob_offset();
    let cx = coin.rect.center_x();
    let cy = coin.rect.center_y() + bob;
    match coin.value {
        CoinValue::Common => {
            draw_circle(
                view.x(cx),
                view.y(cy),
                view.len(COIN_SIZE * 0.5),
                YELLOW,
            );
            draw_circle(
                view.x(cx),
                view.y(cy),
                view.len(COIN_SIZE * 0.5 - 2.0),
                Color::from_rgba(200, 200, 0, 255),
            );
        }
        CoinValue::Rare => {
            let r = COIN_SIZE * 0.5 - 1.0;
            draw_triangle(
                vec2(view.x(cx), view.y(cy - r)),
                vec2(view.x(cx + r), view.y(cy)),
                vec2(view.x(cx - r), view.y(cy)),
                Color::from_rgba(50, 150, 255, 255),
            );
            draw_triangle(
                vec2(view.x(cx - r), view.y(cy)),
                vec2(view.x(cx + r), view.y(cy)),
                vec2(view.x(cx), view.y(cy + r)),
                Color::from_rgba(100, 200, 255, 255),
            );
        }
    }
}

fn draw_helicopter(view: &ViewTransform, heli: &Helicopter, frame: u64) {
    // Blink by skipping alternating windows once lifetime runs low
    if heli.blinking && !heli.is_vanishing() && (frame / 5) % 2 == 0 {
        return;
    }
    let alpha = match heli.vanish {
        Some(remaining) => remaining as f32 / VANISH_FRAMES as f32,
        None => 1.0,
    };

    let body = with_alpha(Color::from_rgba(210, 60, 60, 255), alpha);
    let rotor = with_alpha(Color::from_rgba(60, 60, 60, 255), alpha);
    let r = &heli.rect;

    // Cabin
    view.fill_rect(
        &geom::Rect::new(r.x + 6.0, r.y + 8.0, r.w - 12.0, r.h - 12.0),
        body,
    );
    // Tail boom
    view.fill_rect(&geom::Rect::new(r.x, r.y + 12.0, 8.0, 4.0), body);
    // Skids
    view.fill_rect(&geom::Rect::new(r.x + 4.0, r.bottom() - 2.0, r.w - 8.0, 2.0), rotor);
    // Main rotor, spinning: sweep narrows and widens with the frame counter
    let sweep = ((frame % 8) as f32 / 8.0 * std::f32::consts::PI).sin().abs();
    let half = (r.w * 0.5 - 2.0) * (0.3 + 0.7 * sweep);
    let cx = r.center_x();
    draw_line(
        view.x(cx - half),
        view.y(r.y + 4.0),
        view.x(cx + half),
        view.y(r.y + 4.0),
        view.len(2.0),
        rotor,
    );
    // Mast
    draw_line(
        view.x(cx),
        view.y(r.y + 4.0),
        view.x(cx),
        view.y(r.y + 8.0),
        view.len(2.0),
        rotor,
    );
}

fn draw_floating_text(view: &ViewTransform, text: &FloatingText) {
    let color = match text.value {
        CoinValue::Common => Color::from_rgba(255, 220, 100, 255),
        CoinValue::Rare => Color::from_rgba(120, 200, 255, 255),
    };
    view.text_centered(&text.text, text.x, text.y, 18.0, with_alpha(color, text.fade()));
}

fn draw_trail(view: &ViewTransform, player: &Player, trail: Trail, frame: u64) {
    if trail == Trail::None || player.trail.len() < 2 {
        return;
    }
    let count = player.trail.len();
    for i in 1..count {
        let progress = i as f32 / count as f32;
        let alpha = 0.86 * (1.0 - progress);
        let color = match trail {
            Trail::Red => Color::from_rgba(255, 100, 100, 255),
            Trail::Blue => Color::from_rgba(100, 100, 255, 255),
            Trail::Rainbow => hsv(((frame as f32 * 0.01) + progress) % 1.0, 0.9, 1.0),
            Trail::None => unreachable!(),
        };
        let a = player.trail[i - 1];
        let b = player.trail[i];
        draw_line(
            view.x(a.x),
            view.y(a.y),
            view.x(b.x),
            view.y(b.y),
            view.len(12.0 * (1.0 - progress)),
            with_alpha(color, alpha),
        );
    }
}

fn draw_player(view: &ViewTransform, player: &Player, skin: Skin) {
    let r = &player.rect;
    let flip = if player.facing_right { 1.0 } else { -1.0 };
    let cx = r.center_x();
    // Eye columns mirror with the facing direction
    let eye_a = cx - flip * PLAYER_SIZE / 6.0;
    let eye_b = cx + flip * PLAYER_SIZE / 3.0;

    match skin {
        Skin::Default => {
            view.fill_rect(r, Color::from_rgba(40, 200, 40, 255));
            for ex in [eye_a, eye_b] {
                draw_circle(view.x(ex), view.y(r.y + 10.0), view.len(5.0), WHITE);
                draw_circle(view.x(ex), view.y(r.y + 10.0), view.len(2.5), BLACK);
            }
        }
        Skin::Ninja => {
            view.fill_rect(r, Color::from_rgba(40, 40, 40, 255));
            // Mask slit with glowing eyes
            view.fill_rect(
                &geom::Rect::new(r.x + 4.0, r.y + 8.0, r.w - 8.0, 5.0),
                Color::from_rgba(20, 20, 20, 255),
            );
            draw_line(
                view.x(eye_a),
                view.y(r.y + 10.0),
                view.x(eye_b),
                view.y(r.y + 10.0),
                view.len(2.0),
                RED,
            );
            // Sword on the back
            draw_line(
                view.x(r.x + 4.0),
                view.y(r.y + 6.0),
                view.x(r.x + 4.0),
                view.y(r.y + 22.0),
                view.len(2.0),
                GRAY,
            );
        }
        Skin::Robot => {
            view.fill_rect(r, Color::from_rgba(150, 150, 150, 255));
            view.fill_rect(
                &geom::Rect::new(r.x + 6.0, r.y + 6.0, r.w - 12.0, 8.0),
                Color::from_rgba(0, 200, 200, 255),
            );
            // Antenna
            draw_line(
                view.x(cx),
                view.y(r.y - 4.0),
                view.x(cx),
                view.y(r.y),
                view.len(2.0),
                YELLOW,
            );
            draw_circle(view.x(cx), view.y(r.y - 5.0), view.len(2.0), YELLOW);
        }
        Skin::Zombie => {
            view.fill_rect(r, Color::from_rgba(80, 120, 80, 255));
            draw_circle(view.x(eye_a), view.y(r.y + 9.0), view.len(3.0), RED);
            draw_circle(view.x(eye_b), view.y(r.y + 9.0), view.len(3.0), BLACK);
            // Stitches
            for i in 0..3 {
                let y = r.y + 16.0 + i as f32 * 5.0;
                draw_line(
                    view.x(r.x + 4.0),
                    view.y(y),
                    view.x(r.right() - 4.0),
                    view.y(y),
                    view.len(1.0),
                    Color::from_rgba(0, 80, 0, 255),
                );
            }
        }
    }
}

fn draw_hud(view: &ViewTransform, session: &Session, profile: &Profile) {
    let panel = geom::Rect::new(6.0, 6.0, 170.0, 62.0);
    view.fill_rect(&panel, Color::new(0.0, 0.0, 0.0, 0.6));
    view.text(
        &format!("Platforms: {}", session.run.platforms_passed),
        14.0,
        24.0,
        16.0,
        WHITE,
    );
    view.text(
        &format!("Record: {}", profile.max_platforms),
        14.0,
        42.0,
        16.0,
        YELLOW,
    );
    view.text(
        &format!("Coins: {}", profile.total_coins),
        14.0,
        60.0,
        16.0,
        Color::from_rgba(255, 200, 100, 255),
    );
}

/// Multiply a color's alpha
fn with_alpha(mut color: Color, alpha: f32) -> Color {
    color.a *= alpha;
    color
}

/// Small HSV to RGB conversion for the rainbow trail
fn hsv(h: f32, s: f32, v: f32) -> Color {
    let i = (h * 6.0).floor();
    let f = h * 6.0 - i;
    let p = v * (1.0 - s);
    let q = v * (1.0 - f * s);
    let t = v * (1.0 - (1.0 - f) * s);
    let (r, g, b) = match (i as i32).rem_euclid(6) {
        0 => (v, t, p),
        1 => (q, v, p),
        2 => (p, v, t),
        3 => (p, q, v),
        4 => (t, p, v),
        _ => (v, p, q),
    };
    Color::new(r, g, b, 1.0)
}
