use macroquad::prelude::*;

use super::{Scene, SceneTransition};
use crate::audio::{AudioDriver, ClipPlayer};
use crate::playlist::ClipLibrary;
use crate::session::{Phase, Session};
use crate::ui;

/// Guess and reveal passes over the shuffled playlist.
pub struct RoundScene {
    session: Session,
    library: ClipLibrary,
    player: ClipPlayer,
    audio: AudioDriver,
}

impl RoundScene {
    pub fn new(library: ClipLibrary, audio: AudioDriver, player: ClipPlayer) -> Self {
        Self {
            session: Session::new(library.len()),
            library,
            player,
            audio,
        }
    }

    /// Leave the title phase; called by the title scene on handoff.
    pub(crate) fn start(&mut self) {
        self.session.begin();
    }

    fn cue(&mut self, index: usize) {
        if let Err(e) = self.player.play(&mut self.audio, index) {
            tracing::warn!("playback failed for clip {index}: {e}");
        }
    }

    fn on_advance(&mut self) {
        if let Some(index) = self.session.advance() {
            self.cue(index);
        }
    }

    fn on_previous(&mut self) {
        if let Some(index) = self.session.previous() {
            self.cue(index);
        }
    }

    fn on_replay(&mut self) {
        if let Some(index) = self.session.replay() {
            self.cue(index);
        }
    }

    fn answer(&self) -> Option<&str> {
        let cursor = self.session.cursor();
        if cursor < 0 {
            return None;
        }
        self.library.get(cursor as usize).map(|c| c.name.as_str())
    }
}

impl Scene for RoundScene {
    fn update(&mut self) -> SceneTransition {
        if is_key_pressed(KeyCode::Escape) {
            return SceneTransition::Pop;
        }
        if is_key_pressed(KeyCode::Space) {
            self.on_advance();
        }
        if is_key_pressed(KeyCode::R) {
            self.on_replay();
        }
        if is_key_pressed(KeyCode::B) || is_key_pressed(KeyCode::Left) {
            self.on_previous();
        }
        if is_mouse_button_pressed(MouseButton::Left) {
            let point: Vec2 = mouse_position().into();
            let (back, replay) = ui::bottom_buttons(screen_width(), screen_height());
            if back.contains(point) {
                self.on_previous();
            } else if replay.contains(point) {
                self.on_replay();
            }
        }
        SceneTransition::None
    }

    fn draw(&self) {
        clear_background(ui::BG_COLOR);

        let msg = status_line(
            self.session.phase(),
            self.session.cursor(),
            self.session.total(),
            self.answer(),
        );
        ui::draw_centered_text(&msg, screen_width() / 2.0, screen_height() / 2.0, ui::FONT_SIZE);

        let mouse: Vec2 = mouse_position().into();
        let (back, replay) = ui::bottom_buttons(screen_width(), screen_height());
        back.draw(back.contains(mouse));
        replay.draw(replay.contains(mouse));
    }
}

/// Status line shown mid-screen for the guess and reveal passes.
fn status_line(phase: Phase, cursor: i32, total: usize, answer: Option<&str>) -> String {
    match phase {
        // The round scene never renders the title phase.
        Phase::Title => String::new(),
        Phase::Guessing => {
            if cursor < 0 {
                format!("Guess Round – SPACE to play clip 1 of {total}")
            } else if (cursor as usize) < total {
                format!("Guess Round – clip {}/{}.", cursor + 1, total)
            } else {
                "Switching to reveal…".to_string()
            }
        }
        Phase::Revealing => {
            if cursor < 0 {
                "Reveal Round – SPACE to replay clip 1 with answer".to_string()
            } else if (cursor as usize) < total {
                let answer = answer.unwrap_or("?");
                format!("Answer: {}  ({}/{})", answer, cursor + 1, total)
            } else {
                "All answers revealed! Press ESC to quit.".to_string()
            }
        }
    }
}
