use anyhow::{Context, Result};

use crate::playlist::ClipLibrary;
use crate::traits::audio::{AudioBackend, SoundId};

/// Issues playback commands for playlist entries.
///
/// Every play is preceded by a `stop_all` so clips never overlap. Clips are
/// decoded once up front; a broken file surfaces at startup rather than
/// mid-round.
pub struct ClipPlayer {
    ids: Vec<SoundId>,
}

impl ClipPlayer {
    /// Preload every clip in the library into the backend.
    pub fn load<A: AudioBackend>(backend: &mut A, library: &ClipLibrary) -> Result<Self> {
        let mut ids = Vec::with_capacity(library.len());
        for clip in library.clips() {
            let id = backend
                .load_clip(&clip.path)
                .with_context(|| format!("failed to preload clip '{}'", clip.name))?;
            ids.push(id);
        }
        Ok(Self { ids })
    }

    /// Stop everything, then start the clip at `index`.
    pub fn play<A: AudioBackend>(&self, backend: &mut A, index: usize) -> Result<()> {
        let id = self
            .ids
            .get(index)
            .copied()
            .with_context(|| format!("clip index {index} out of range"))?;
        backend.stop_all()?;
        backend.play(id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}
