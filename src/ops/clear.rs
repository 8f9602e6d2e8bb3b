// src/ops/clear.rs
use std::fmt;

use crate::model::Collection;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClearReport {
    /// Every record; all of them now have empty audio.
    pub cleared: usize,
    /// How many actually had a value before.
    pub had_audio: usize,
}

/// Empty every `audio` field. Safe to repeat.
pub fn clear_audio(coll: &mut Collection) -> ClearReport {
    let mut had_audio = 0;
    for verse in &mut coll.shlokas {
        if verse.has_audio() {
            had_audio += 1;
        }
        verse.audio.clear();
    }
    logf!("Cleared audio on {} shlokas ({had_audio} had a value)", coll.len());
    ClearReport { cleared: coll.len(), had_audio }
}

impl fmt::Display for ClearReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Cleared audio URLs for {} shlokas ({} had audio)", self.cleared, self.had_audio)?;
        writeln!(f, "{}", super::MANUAL_AUDIO_HINT)?;
        writeln!(f)?;
        writeln!(f, "To add local audio:")?;
        writeln!(f, "1. Download recitations as MP3")?;
        writeln!(f, "2. Place them in the audio directory as CC_VVV.mp3 (audio/01_001.mp3 is chapter 1, verse 1)")?;
        write!(f, "3. Run `bind-audio` to link them, or paste a path/URL in the UI")
    }
}
