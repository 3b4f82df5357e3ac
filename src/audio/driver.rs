use std::collections::HashMap;
use std::path::Path;

use anyhow::{Context, Result, anyhow};
use kira::AudioManager as KiraAudioManager;
use kira::AudioManagerSettings;
use kira::Tween;
use kira::sound::PlaybackState;
use kira::sound::static_sound::{StaticSoundData, StaticSoundHandle};

use crate::traits::audio::{AudioBackend, SoundId};

/// Audio driver backed by kira.
///
/// Clips are decoded into memory when loaded; playback handles are retained
/// so `stop_all` can silence everything before the next clip starts.
pub struct AudioDriver {
    manager: KiraAudioManager,
    sounds: HashMap<u64, StaticSoundData>,
    handles: Vec<StaticSoundHandle>,
    next_id: u64,
}

impl AudioDriver {
    pub fn new() -> Result<Self> {
        let manager = KiraAudioManager::new(AudioManagerSettings::default())
            .context("failed to create audio manager")?;
        Ok(Self {
            manager,
            sounds: HashMap::new(),
            handles: Vec::new(),
            next_id: 1,
        })
    }

    fn alloc_id(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }
}

impl AudioBackend for AudioDriver {
    fn load_clip(&mut self, path: &Path) -> Result<SoundId> {
        let data = StaticSoundData::from_file(path)
            .with_context(|| format!("failed to load clip {}", path.display()))?;
        let id = self.alloc_id();
        self.sounds.insert(id, data);
        Ok(SoundId(id))
    }

    fn play(&mut self, id: SoundId) -> Result<()> {
        // Drop handles for clips that already ran to completion.
        self.handles
            .retain(|h| h.state() == PlaybackState::Playing);

        let data = self
            .sounds
            .get(&id.0)
            .ok_or_else(|| anyhow!("unknown clip id {}", id.0))?;
        let handle = self
            .manager
            .play(data.clone())
            .map_err(|e| anyhow!("failed to start playback: {e}"))?;
        self.handles.push(handle);
        Ok(())
    }

    fn stop_all(&mut self) -> Result<()> {
        for handle in &mut self.handles {
            handle.stop(Tween::default());
        }
        self.handles.clear();
        Ok(())
    }
}
