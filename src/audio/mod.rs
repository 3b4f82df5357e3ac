//! Audio subsystem using kira.
//!
//! This module provides:
//! - [`AudioDriver`]: kira-backed implementation of the audio seam
//! - [`ClipPlayer`]: stop-then-play command layer over the playlist

mod clip_player;
mod driver;

pub use clip_player::ClipPlayer;
pub use driver::AudioDriver;
