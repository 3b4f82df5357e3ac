use std::path::Path;

use anyhow::Result;

/// Handle for referencing loaded clips.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SoundId(pub u64);

/// Abstraction over audio backends.
/// Implementations: AudioDriver (kira), MockAudio (testing).
pub trait AudioBackend {
    fn load_clip(&mut self, path: &Path) -> Result<SoundId>;

    /// Start playback of a loaded clip. Returns immediately; playback is
    /// fire-and-forget and completion is never awaited.
    fn play(&mut self, id: SoundId) -> Result<()>;

    /// Stop every clip that is currently sounding.
    fn stop_all(&mut self) -> Result<()>;
}
