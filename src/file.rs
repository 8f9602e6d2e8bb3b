// src/file.rs

use std::{fs, path::Path};

use crate::config::consts::AUDIO_EXT;
use crate::error::{MaintError, Result};
use crate::model::VerseId;

/// Canonical audio file name: `CC_VVV.mp3` (chapter 2 digits, verse 3).
pub fn audio_file_name(id: VerseId) -> String {
    format!("{:02}_{:03}.{AUDIO_EXT}", id.chapter, id.verse)
}

/// Inverse of [`audio_file_name`]. Strict: exactly two and three ASCII
/// digits, so `2_15.mp3` or `02_015.wav` are rejected. The extension is
/// matched the same way as [`has_audio_ext`], ignoring case.
pub fn parse_audio_file_name(name: &str) -> Option<VerseId> {
    let (stem, ext) = name.rsplit_once('.')?;
    if !ext.eq_ignore_ascii_case(AUDIO_EXT) {
        return None;
    }
    let (ch, vr) = stem.split_once('_')?;
    if ch.len() != 2 || vr.len() != 3 {
        return None;
    }
    if !ch.bytes().chain(vr.bytes()).all(|b| b.is_ascii_digit()) {
        return None;
    }
    Some(VerseId::new(ch.parse().ok()?, vr.parse().ok()?))
}

pub fn has_audio_ext(name: &str) -> bool {
    Path::new(name)
        .extension()
        .is_some_and(|e| e.eq_ignore_ascii_case(AUDIO_EXT))
}

/// Create `dir` if missing. Returns true when it had to be created.
pub fn ensure_directory(dir: &Path) -> Result<bool> {
    if dir.exists() && !dir.is_dir() {
        return Err(MaintError::NotADirectory(dir.to_path_buf()));
    }
    if dir.exists() {
        return Ok(false);
    }
    fs::create_dir_all(dir).map_err(|e| MaintError::io("could not create", dir, e))?;
    Ok(true)
}

/// One pass over the audio directory.
#[derive(Debug, Default)]
pub struct AudioScan {
    /// Well-formed files, sorted by file name.
    pub found: Vec<(VerseId, String)>,
    /// Audio-extension files whose name does not follow `CC_VVV.mp3`.
    pub skipped: Vec<String>,
}

/// List the audio dir. Non-audio entries and subdirectories are ignored.
pub fn scan_audio_dir(dir: &Path) -> Result<AudioScan> {
    if !dir.is_dir() {
        return Err(MaintError::MissingAudioDir(dir.to_path_buf()));
    }
    let entries = fs::read_dir(dir).map_err(|e| MaintError::io("could not list", dir, e))?;

    let mut names = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| MaintError::io("could not list", dir, e))?;
        if !entry.path().is_file() {
            continue;
        }
        let name = entry.file_name().to_string_lossy().into_owned();
        if has_audio_ext(&name) {
            names.push(name);
        }
    }
    names.sort();

    let mut scan = AudioScan::default();
    for name in names {
        match parse_audio_file_name(&name) {
            Some(id) => scan.found.push((id, name)),
            None => scan.skipped.push(name),
        }
    }
    Ok(scan)
}
