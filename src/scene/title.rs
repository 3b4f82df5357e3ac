use macroquad::prelude::*;

use super::{RoundScene, Scene, SceneTransition};
use crate::ui;

/// Title screen. Any key or left click starts the guessing round; the round
/// scene is built up front so startup errors surface before the window opens.
pub struct TitleScene {
    round: Option<RoundScene>,
}

impl TitleScene {
    pub fn new(round: RoundScene) -> Self {
        Self { round: Some(round) }
    }
}

impl Scene for TitleScene {
    fn update(&mut self) -> SceneTransition {
        let started =
            get_last_key_pressed().is_some() || is_mouse_button_pressed(MouseButton::Left);
        if started && let Some(mut round) = self.round.take() {
            round.start();
            return SceneTransition::Replace(Box::new(round));
        }
        SceneTransition::None
    }

    fn draw(&self) {
        clear_background(ui::BG_COLOR);

        let center_x = screen_width() / 2.0;
        let center_y = screen_height() / 2.0;
        ui::draw_centered_text(
            "CLIPQUIZ - Guess the Sound",
            center_x,
            center_y - 40.0,
            ui::TITLE_FONT_SIZE,
        );
        ui::draw_centered_text(
            "Press any key to begin",
            center_x,
            center_y + 40.0,
            ui::FONT_SIZE,
        );
    }
}
