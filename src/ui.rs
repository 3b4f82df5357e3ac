//! Shared drawing constants and the two playback buttons.

use macroquad::prelude::*;

pub const BG_COLOR: Color = Color::new(0.12, 0.12, 0.12, 1.0);
pub const TEXT_COLOR: Color = Color::new(0.94, 0.94, 0.94, 1.0);
const BUTTON_COLOR: Color = Color::new(0.27, 0.27, 0.27, 1.0);
const BUTTON_HOVER_COLOR: Color = Color::new(0.43, 0.43, 0.43, 1.0);

pub const FONT_SIZE: f32 = 52.0;
pub const TITLE_FONT_SIZE: f32 = 72.0;

const BUTTON_WIDTH: f32 = 200.0;
const BUTTON_HEIGHT: f32 = 60.0;
const BUTTON_SPACING: f32 = 40.0;
const BUTTON_BOTTOM_MARGIN: f32 = 40.0;

/// Clickable rectangle with a centered label.
#[derive(Debug, Clone, PartialEq)]
pub struct Button {
    pub rect: Rect,
    pub label: &'static str,
}

impl Button {
    pub fn contains(&self, point: Vec2) -> bool {
        self.rect.contains(point)
    }

    pub fn draw(&self, hovered: bool) {
        let fill = if hovered {
            BUTTON_HOVER_COLOR
        } else {
            BUTTON_COLOR
        };
        draw_rectangle(self.rect.x, self.rect.y, self.rect.w, self.rect.h, fill);

        let dims = measure_text(self.label, None, FONT_SIZE as u16, 1.0);
        draw_text(
            self.label,
            self.rect.x + (self.rect.w - dims.width) / 2.0,
            self.rect.y + (self.rect.h + dims.height) / 2.0,
            FONT_SIZE,
            TEXT_COLOR,
        );
    }
}

/// Back and Replay buttons, centered as a pair above the bottom edge.
/// Pure function of the screen size; the window never resizes.
pub fn bottom_buttons(screen_w: f32, screen_h: f32) -> (Button, Button) {
    let pair_width = 2.0 * BUTTON_WIDTH + BUTTON_SPACING;
    let start_x = (screen_w - pair_width) / 2.0;
    let y = screen_h - BUTTON_HEIGHT - BUTTON_BOTTOM_MARGIN;

    let back = Button {
        rect: Rect::new(start_x, y, BUTTON_WIDTH, BUTTON_HEIGHT),
        label: "Back (B)",
    };
    let replay = Button {
        rect: Rect::new(
            start_x + BUTTON_WIDTH + BUTTON_SPACING,
            y,
            BUTTON_WIDTH,
            BUTTON_HEIGHT,
        ),
        label: "Replay (R)",
    };
    (back, replay)
}

/// Draw `text` horizontally centered at `(center_x, y)`.
pub fn draw_centered_text(text: &str, center_x: f32, y: f32, font_size: f32) {
    let dims = measure_text(text, None, font_size as u16, 1.0);
    draw_text(text, center_x - dims.width / 2.0, y, font_size, TEXT_COLOR);
}
