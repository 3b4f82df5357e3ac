//! Clip discovery and shuffling.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use rand::Rng;
use rand::seq::SliceRandom;

/// Audio file extensions the scan picks up (the formats kira decodes).
pub const CLIP_EXTENSIONS: &[&str] = &["ogg", "wav", "mp3", "flac"];

/// One entry in the shuffled playlist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Clip {
    pub path: PathBuf,
    /// Human-readable name shown during the reveal pass (file stem).
    pub name: String,
}

/// Shuffled playlist built once at startup. Order is fixed for the session.
#[derive(Debug)]
pub struct ClipLibrary {
    clips: Vec<Clip>,
}

impl ClipLibrary {
    /// Scan `dir` (non-recursive) for audio clips and shuffle them.
    ///
    /// Fails if the directory cannot be read or contains no matching files.
    pub fn scan(dir: &Path) -> Result<Self> {
        Self::scan_with_rng(dir, &mut rand::thread_rng())
    }

    /// Same as [`scan`](Self::scan) with a caller-supplied RNG.
    pub fn scan_with_rng<R: Rng>(dir: &Path, rng: &mut R) -> Result<Self> {
        let entries = fs::read_dir(dir)
            .with_context(|| format!("cannot read clip directory {}", dir.display()))?;

        let mut clips = Vec::new();
        for entry in entries {
            let path = entry
                .with_context(|| format!("cannot read entry in {}", dir.display()))?
                .path();
            if !path.is_file() {
                continue;
            }
            let Some(ext) = path.extension().and_then(|e| e.to_str()) else {
                continue;
            };
            if !CLIP_EXTENSIONS.iter().any(|e| ext.eq_ignore_ascii_case(e)) {
                continue;
            }
            let Some(name) = path.file_stem().and_then(|s| s.to_str()) else {
                continue;
            };
            clips.push(Clip {
                name: name.to_owned(),
                path,
            });
        }

        if clips.is_empty() {
            bail!(
                "no audio clips ({}) found in {}",
                CLIP_EXTENSIONS.join("/"),
                dir.display()
            );
        }

        // read_dir order is filesystem-dependent; sort first so the shuffle
        // is the only source of randomness.
        clips.sort_by(|a, b| a.path.cmp(&b.path));
        clips.shuffle(rng);
        Ok(Self { clips })
    }

    #[cfg(test)]
    pub(crate) fn from_clips(clips: Vec<Clip>) -> Self {
        Self { clips }
    }

    pub fn len(&self) -> usize {
        self.clips.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clips.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Clip> {
        self.clips.get(index)
    }

    pub fn clips(&self) -> &[Clip] {
        &self.clips
    }
}

#[cfg(test)]
mod tests {
    use std::fs::File;

    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use tempfile::tempdir;

    use super::*;

    fn touch(dir: &Path, name: &str) {
        File::create(dir.join(name)).expect("failed to create test file");
    }

    #[test]
    fn scan_filters_by_extension() {
        let dir = tempdir().expect("failed to create temp directory");
        touch(dir.path(), "cat.ogg");
        touch(dir.path(), "dog.WAV");
        touch(dir.path(), "bird.mp3");
        touch(dir.path(), "notes.txt");
        touch(dir.path(), "README");

        let library = ClipLibrary::scan(dir.path()).expect("scan failed");
        assert_eq!(library.len(), 3);
        let mut names: Vec<&str> = library.clips().iter().map(|c| c.name.as_str()).collect();
        names.sort_unstable();
        assert_eq!(names, ["bird", "cat", "dog"]);
    }

    #[test]
    fn clip_name_is_the_file_stem() {
        let dir = tempdir().expect("failed to create temp directory");
        touch(dir.path(), "mystery sound.ogg");

        let library = ClipLibrary::scan(dir.path()).expect("scan failed");
        assert_eq!(library.get(0).expect("missing clip").name, "mystery sound");
    }

    #[test]
    fn empty_directory_is_a_startup_error() {
        let dir = tempdir().expect("failed to create temp directory");
        touch(dir.path(), "notes.txt");

        let err = ClipLibrary::scan(dir.path()).expect_err("expected scan to fail");
        assert!(err.to_string().contains("no audio clips"));
    }

    #[test]
    fn missing_directory_is_a_startup_error() {
        let dir = tempdir().expect("failed to create temp directory");
        let missing = dir.path().join("does-not-exist");

        assert!(ClipLibrary::scan(&missing).is_err());
    }

    #[test]
    fn shuffle_is_a_permutation() {
        let dir = tempdir().expect("failed to create temp directory");
        for i in 0..16 {
            touch(dir.path(), &format!("clip{i:02}.ogg"));
        }

        let mut rng = StdRng::seed_from_u64(7);
        let library = ClipLibrary::scan_with_rng(dir.path(), &mut rng).expect("scan failed");

        let mut names: Vec<&str> = library.clips().iter().map(|c| c.name.as_str()).collect();
        names.sort_unstable();
        let expected: Vec<String> = (0..16).map(|i| format!("clip{i:02}")).collect();
        assert_eq!(names, expected);
    }

    #[test]
    fn shuffled_order_differs_across_seeds() {
        let dir = tempdir().expect("failed to create temp directory");
        for i in 0..16 {
            touch(dir.path(), &format!("clip{i:02}.ogg"));
        }

        let order = |seed: u64| -> Vec<String> {
            let mut rng = StdRng::seed_from_u64(seed);
            ClipLibrary::scan_with_rng(dir.path(), &mut rng)
                .expect("scan failed")
                .clips()
                .iter()
                .map(|c| c.name.clone())
                .collect()
        };

        assert_ne!(order(1), order(2));
    }
}
