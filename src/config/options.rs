// src/config/options.rs
use std::path::{Component, Path, PathBuf};
use std::time::Duration;

use super::consts::*;
use super::sources::{Candidate, DEFAULT_SOURCES};

/// Everything one maintenance run needs. Built by the CLI (or a test) and
/// passed down explicitly; nothing is derived from the working directory.
#[derive(Clone, Debug)]
pub struct MaintainOptions {
    pub dataset: PathBuf,
    pub audio_dir: PathBuf,
    pub fetch: FetchOptions,
}

impl Default for MaintainOptions {
    fn default() -> Self {
        Self {
            dataset: PathBuf::from(DEFAULT_DATASET),
            audio_dir: PathBuf::from(DEFAULT_AUDIO_DIR),
            fetch: FetchOptions::default(),
        }
    }
}

impl MaintainOptions {
    pub fn new(dataset: impl Into<PathBuf>, audio_dir: impl Into<PathBuf>) -> Self {
        Self {
            dataset: dataset.into(),
            audio_dir: audio_dir.into(),
            ..Self::default()
        }
    }

    /// Directory holding the dataset file ("" for a bare file name).
    pub fn dataset_dir(&self) -> &Path {
        self.dataset.parent().unwrap_or(Path::new(""))
    }

    /// Where an audio file with this name lives on disk.
    pub fn audio_path(&self, file_name: &str) -> PathBuf {
        self.audio_dir.join(file_name)
    }

    /// Value stored in a verse's `audio` field for a file in the audio dir.
    ///
    /// The UI serves files relative to the dataset, so when the audio dir sits
    /// beneath the dataset's directory the reference is relative to it
    /// (`audio/02_015.mp3`). Otherwise the audio dir path is used as given.
    /// Separators are always `/`.
    pub fn audio_ref(&self, file_name: &str) -> String {
        let path = self.audio_path(file_name);
        let rel = path.strip_prefix(self.dataset_dir()).unwrap_or(&path);
        to_slash(rel)
    }

    pub fn log_path(&self) -> PathBuf {
        self.dataset_dir().join(STORE_DIR).join(LOG_FILE)
    }
}

fn to_slash(p: &Path) -> String {
    let mut out = s!();
    for comp in p.components() {
        match comp {
            Component::RootDir => out.push('/'),
            Component::CurDir => continue,
            other => {
                if !out.is_empty() && !out.ends_with('/') {
                    out.push('/');
                }
                out.push_str(&other.as_os_str().to_string_lossy());
            }
        }
    }
    out
}

/// Knobs for Acquire Remote Audio.
#[derive(Clone, Debug)]
pub struct FetchOptions {
    pub user_agent: String,
    pub timeout: Duration,
    /// Sleep after every record, hit or miss.
    pub pause: Duration,
    /// Tried in order; first verified audio wins.
    pub sources: Vec<Candidate>,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            user_agent: s!(USER_AGENT),
            timeout: Duration::from_secs(REQUEST_TIMEOUT_SECS),
            pause: Duration::from_millis(REQUEST_PAUSE_MS),
            sources: DEFAULT_SOURCES.to_vec(),
        }
    }
}
