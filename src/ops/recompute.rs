// src/ops/recompute.rs
use std::fmt;

use crate::core::marker;
use crate::model::{Collection, VerseId};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RecomputeReport {
    pub total: usize,
    /// Records whose text carried a usable marker.
    pub resolved: usize,
    /// Records that fell back to `"{chapter}-?"`.
    pub unresolved: Vec<usize>,
    /// Records whose `sr#` differs from what was stored.
    pub changed: usize,
}

/// Re-derive every `sr#` from the marker in its shloka text.
pub fn recompute_sr(coll: &mut Collection) -> RecomputeReport {
    let mut report = RecomputeReport { total: coll.len(), ..Default::default() };

    for (idx, verse) in coll.shlokas.iter_mut().enumerate() {
        let sr = match marker::extract(&verse.shloka) {
            Some(id) => {
                report.resolved += 1;
                id.to_string()
            }
            None => {
                logw!("Record #{idx} (chapter {}): no chapter-verse marker", verse.chapter);
                report.unresolved.push(idx);
                VerseId::unresolved(verse.chapter)
            }
        };
        if sr != verse.sr {
            logd!("Record #{idx}: sr# {:?} -> {:?}", verse.sr, sr);
            report.changed += 1;
            verse.sr = sr;
        }
    }
    report
}

impl fmt::Display for RecomputeReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Updated {} shlokas with chapter-verse numbers ({} changed)", self.total, self.changed)?;
        if !self.unresolved.is_empty() {
            write!(f, "\n{} without a marker were set to \"<chapter>-?\"", self.unresolved.len())?;
        }
        Ok(())
    }
}
