//! Test doubles shared across unit tests.

use std::path::{Path, PathBuf};

use anyhow::Result;

use crate::playlist::{Clip, ClipLibrary};
use crate::traits::audio::{AudioBackend, SoundId};

/// Command recorded by [`MockAudio`], in issue order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AudioCall {
    Load(PathBuf),
    Play(u64),
    StopAll,
}

/// Audio backend that records commands instead of touching hardware.
pub struct MockAudio {
    pub calls: Vec<AudioCall>,
    next_id: u64,
}

impl MockAudio {
    pub fn new() -> Self {
        Self {
            calls: Vec::new(),
            next_id: 1,
        }
    }

    /// Ids played so far, in order.
    pub fn played(&self) -> Vec<u64> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                AudioCall::Play(id) => Some(*id),
                _ => None,
            })
            .collect()
    }

    pub fn stop_count(&self) -> usize {
        self.calls
            .iter()
            .filter(|c| matches!(c, AudioCall::StopAll))
            .count()
    }
}

impl AudioBackend for MockAudio {
    fn load_clip(&mut self, path: &Path) -> Result<SoundId> {
        self.calls.push(AudioCall::Load(path.to_path_buf()));
        let id = self.next_id;
        self.next_id += 1;
        Ok(SoundId(id))
    }

    fn play(&mut self, id: SoundId) -> Result<()> {
        self.calls.push(AudioCall::Play(id.0));
        Ok(())
    }

    fn stop_all(&mut self) -> Result<()> {
        self.calls.push(AudioCall::StopAll);
        Ok(())
    }
}

/// Build an in-memory library whose clip names are given in playlist order.
pub fn library_of(names: &[&str]) -> ClipLibrary {
    let clips = names
        .iter()
        .map(|name| Clip {
            path: PathBuf::from(format!("{name}.ogg")),
            name: (*name).to_string(),
        })
        .collect();
    ClipLibrary::from_clips(clips)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mock_audio_records_commands_in_order() {
        let mut audio = MockAudio::new();
        let a = audio.load_clip(Path::new("a.ogg")).unwrap();
        let b = audio.load_clip(Path::new("b.ogg")).unwrap();
        audio.stop_all().unwrap();
        audio.play(b).unwrap();
        audio.play(a).unwrap();

        assert_eq!(audio.played(), [2, 1]);
        assert_eq!(audio.stop_count(), 1);
    }
}
