// src/ops/bind.rs
use std::collections::HashMap;
use std::fmt;

use crate::config::options::MaintainOptions;
use crate::file::AudioScan;
use crate::model::Collection;
use crate::progress::Progress;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BindReport {
    pub files_found: usize,
    /// Audio-extension files that did not follow `CC_VVV.mp3`.
    pub skipped: Vec<String>,
    pub updated: usize,
    /// Records with no matching file (they keep whatever audio they had).
    pub missing: usize,
}

/// Point every record that has a matching file in `scan` at it.
/// Additive only: records without a match are left untouched.
pub fn bind_local_audio(
    coll: &mut Collection,
    scan: &AudioScan,
    opts: &MaintainOptions,
    progress: &mut dyn Progress,
) -> BindReport {
    for name in &scan.skipped {
        progress.warn(&format!("Skipping: {name} (invalid format)"));
        logw!("Skipping audio file {name}: not CC_VVV.mp3");
    }

    let mut by_sr: HashMap<String, String> = HashMap::with_capacity(scan.found.len());
    for (id, name) in &scan.found {
        let sr = id.to_string();
        progress.log(&format!("Found: {name} -> {sr}"));
        by_sr.insert(sr, opts.audio_ref(name));
    }
    progress.log(&format!("\nFound {} audio files", by_sr.len()));

    let mut updated = 0;
    for verse in &mut coll.shlokas {
        if let Some(audio) = by_sr.get(&verse.sr) {
            verse.audio.clone_from(audio);
            updated += 1;
        }
    }
    logf!("Bound {updated} of {} shlokas to local audio", coll.len());

    BindReport {
        files_found: scan.found.len(),
        skipped: scan.skipped.clone(),
        updated,
        missing: coll.len() - updated,
    }
}

impl fmt::Display for BindReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rule = "=".repeat(60);
        writeln!(f, "{rule}")?;
        writeln!(f, "Updated {} shlokas with local audio paths", self.updated)?;
        writeln!(f, "Missing audio for {} shlokas", self.missing)?;
        if !self.skipped.is_empty() {
            writeln!(f, "Skipped {} badly named files", self.skipped.len())?;
        }
        writeln!(f, "{rule}")?;
        write!(f, "{}", super::MANUAL_AUDIO_HINT)
    }
}
