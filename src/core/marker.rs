// src/core/marker.rs
//
// The chapter-verse marker embedded in a shloka's text: `॥2-47॥`.
// Assumes the pair reads chapter then verse, and that the last marker in the
// text is the one for this verse.

use std::sync::LazyLock;

use regex::Regex;

use crate::model::VerseId;

const DANDA_PAIR: char = '॥';

// `\d` is Unicode-aware, so Devanagari numerals (२-४७) match as well.
static MARKER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"॥(\d+)-(\d+)॥").expect("marker pattern is valid")
});

/// Last well-formed marker in `text`, if any.
pub fn extract(text: &str) -> Option<VerseId> {
    if !text.contains(DANDA_PAIR) {
        return None;
    }
    MARKER
        .captures_iter(text)
        .filter_map(|caps| {
            let chapter = parse_numeral(caps.get(1)?.as_str())?;
            let verse = parse_numeral(caps.get(2)?.as_str())?;
            Some(VerseId::new(chapter, verse))
        })
        .last()
}

/// `sr#` for a record: the marker if present, else the `"{chapter}-?"` placeholder.
pub fn derive_sr(text: &str, chapter: u32) -> String {
    match extract(text) {
        Some(id) => id.to_string(),
        None => VerseId::unresolved(chapter),
    }
}

/// Parse ASCII or Devanagari digits. Other scripts' digits are rejected.
// Narrower than `\d`: a marker in, say, Bengali digits counts as no marker.
fn parse_numeral(s: &str) -> Option<u32> {
    let mut value: u32 = 0;
    for ch in s.chars() {
        let d = match ch {
            '0'..='9' => ch as u32 - '0' as u32,
            '०'..='९' => ch as u32 - '०' as u32,
            _ => return None,
        };
        value = value.checked_mul(10)?.checked_add(d)?;
    }
    Some(value)
}
