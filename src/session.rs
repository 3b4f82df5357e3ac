//! Phase and cursor state for one play session.
//!
//! The session is pure: actions report which clip index should be
//! (stop-then-)played, and the caller issues the actual audio commands.

/// Which pass of the game is running.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Title screen, waiting for any key.
    Title,
    /// First pass: clips play unnamed.
    Guessing,
    /// Second pass: same order, answers shown.
    Revealing,
}

/// Cursor into the shuffled playlist for the current phase.
///
/// `cursor == -1` means the phase has not started; `cursor == total` means it
/// is exhausted. Everything in between is a valid clip index.
#[derive(Debug, Clone)]
pub struct Session {
    phase: Phase,
    cursor: i32,
    total: usize,
}

impl Session {
    /// Create a session over `total` clips, starting on the title screen.
    pub fn new(total: usize) -> Self {
        Self {
            phase: Phase::Title,
            cursor: -1,
            total,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn cursor(&self) -> i32 {
        self.cursor
    }

    pub fn total(&self) -> usize {
        self.total
    }

    /// Whether the current phase has walked past its last clip.
    pub fn is_exhausted(&self) -> bool {
        self.cursor == self.total as i32
    }

    /// Leave the title screen. Which key was pressed does not matter.
    pub fn begin(&mut self) {
        if self.phase == Phase::Title {
            self.phase = Phase::Guessing;
        }
    }

    /// Advance action (Space). Returns the clip index to play, if any.
    ///
    /// Pressing advance at the end of the guessing pass flips to the reveal
    /// pass and plays its first clip in the same action; the two are
    /// deliberately coupled so the boundary press never feels dead.
    pub fn advance(&mut self) -> Option<usize> {
        if self.phase == Phase::Guessing && self.cursor >= self.total as i32 - 1 {
            self.phase = Phase::Revealing;
            self.cursor = -1;
        }
        if self.cursor < self.total as i32 {
            self.cursor += 1;
        }
        let index = self.cursor as usize;
        if self.cursor >= 0 && index < self.total {
            Some(index)
        } else {
            None
        }
    }

    /// Previous action (B / Left). Returns the clip index to play, if any.
    /// Never crosses a phase boundary.
    pub fn previous(&mut self) -> Option<usize> {
        if self.cursor > 0 {
            self.cursor -= 1;
            Some(self.cursor as usize)
        } else {
            None
        }
    }

    /// Replay action (R). Returns the current clip index if one is active.
    pub fn replay(&self) -> Option<usize> {
        if self.cursor >= 0 && (self.cursor as usize) < self.total {
            Some(self.cursor as usize)
        } else {
            None
        }
    }
}
