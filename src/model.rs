// src/model.rs
//
// Dataset types. Only the fields the maintenance ops touch are typed; every
// other key rides along in `extra` so a load/save cycle never drops data.
// Each object also remembers the key order it was read with and is written
// back in that order, so a run only changes the values it means to change.

use std::{fmt, str::FromStr};

use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

const SHLOKAS: &str = "shlokas";
const CHAPTER: &str = "chapter";
const SR: &str = "sr#";
const SHLOKA: &str = "shloka";
const AUDIO: &str = "audio";

/// Top-level document: `{ "shlokas": [ ... ], ...anything else }`.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(try_from = "Map<String, Value>")]
pub struct Collection {
    pub shlokas: Vec<Verse>,
    pub extra: Map<String, Value>,
    key_order: Vec<String>,
}

impl Collection {
    pub fn new(shlokas: Vec<Verse>) -> Self {
        Self { shlokas, ..Self::default() }
    }

    pub fn len(&self) -> usize { self.shlokas.len() }
    pub fn is_empty(&self) -> bool { self.shlokas.is_empty() }
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(try_from = "Map<String, Value>")]
pub struct Verse {
    pub chapter: u32,
    /// The `sr#` key.
    pub sr: String,
    pub shloka: String,
    pub audio: String,
    pub extra: Map<String, Value>,
    key_order: Vec<String>,
}

impl Verse {
    pub fn new(chapter: u32, sr: impl Into<String>, shloka: impl Into<String>) -> Self {
        Self { chapter, sr: sr.into(), shloka: shloka.into(), ..Self::default() }
    }

    /// Typed view of `sr#`; `None` for the `"N-?"` placeholder or junk.
    pub fn id(&self) -> Option<VerseId> {
        self.sr.parse().ok()
    }

    pub fn has_audio(&self) -> bool { !self.audio.is_empty() }
}

/// Output key order: keys as first read, then typed keys the input lacked,
/// then extras added since.
fn ordered_keys<'a>(order: &'a [String], known: &[&'a str], extra: &'a Map<String, Value>) -> Vec<&'a str> {
    let mut keys: Vec<&str> = order
        .iter()
        .map(String::as_str)
        .filter(|k| known.contains(k) || extra.contains_key(*k))
        .collect();
    for &k in known {
        if !keys.contains(&k) {
            keys.push(k);
        }
    }
    for k in extra.keys().map(String::as_str) {
        if !known.contains(&k) && !keys.contains(&k) {
            keys.push(k);
        }
    }
    keys
}

impl Serialize for Verse {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let keys = ordered_keys(&self.key_order, &[CHAPTER, SR, SHLOKA, AUDIO], &self.extra);
        let mut map = serializer.serialize_map(Some(keys.len()))?;
        for key in keys {
            match key {
                CHAPTER => map.serialize_entry(key, &self.chapter)?,
                SR => map.serialize_entry(key, &self.sr)?,
                SHLOKA => map.serialize_entry(key, &self.shloka)?,
                AUDIO => map.serialize_entry(key, &self.audio)?,
                other => map.serialize_entry(other, &self.extra[other])?,
            }
        }
        map.end()
    }
}

impl Serialize for Collection {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let keys = ordered_keys(&self.key_order, &[SHLOKAS], &self.extra);
        let mut map = serializer.serialize_map(Some(keys.len()))?;
        for key in keys {
            match key {
                SHLOKAS => map.serialize_entry(key, &self.shlokas)?,
                other => map.serialize_entry(other, &self.extra[other])?,
            }
        }
        map.end()
    }
}

impl TryFrom<Map<String, Value>> for Verse {
    type Error = String;

    fn try_from(mut map: Map<String, Value>) -> Result<Self, Self::Error> {
        let key_order = map.keys().cloned().collect();
        let chapter = match map.remove(CHAPTER) {
            Some(v) => v
                .as_u64()
                .and_then(|n| u32::try_from(n).ok())
                .ok_or_else(|| format!("`{CHAPTER}` is not a chapter number: {v}"))?,
            None => return Err(format!("missing field `{CHAPTER}`")),
        };
        let sr = take_string(&mut map, SR)?.ok_or_else(|| format!("missing field `{SR}`"))?;
        let shloka = take_string(&mut map, SHLOKA)?.ok_or_else(|| format!("missing field `{SHLOKA}`"))?;
        let audio = take_string(&mut map, AUDIO)?.unwrap_or_default();
        Ok(Verse { chapter, sr, shloka, audio, extra: map, key_order })
    }
}

impl TryFrom<Map<String, Value>> for Collection {
    type Error = String;

    fn try_from(mut map: Map<String, Value>) -> Result<Self, Self::Error> {
        let key_order = map.keys().cloned().collect();
        let Some(Value::Array(items)) = map.remove(SHLOKAS) else {
            return Err(format!("missing array `{SHLOKAS}`"));
        };
        let shlokas = items
            .into_iter()
            .enumerate()
            .map(|(i, item)| match item {
                Value::Object(obj) => Verse::try_from(obj).map_err(|e| format!("{SHLOKAS}[{i}]: {e}")),
                other => Err(format!("{SHLOKAS}[{i}]: expected an object, got {other}")),
            })
            .collect::<Result<_, _>>()?;
        Ok(Collection { shlokas, extra: map, key_order })
    }
}

fn take_string(map: &mut Map<String, Value>, key: &str) -> Result<Option<String>, String> {
    match map.remove(key) {
        None => Ok(None),
        Some(Value::String(s)) => Ok(Some(s)),
        Some(other) => Err(format!("`{key}` is not a string: {other}")),
    }
}

/// Chapter/verse pair behind an `sr#` string.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VerseId {
    pub chapter: u32,
    pub verse: u32,
}

impl VerseId {
    pub fn new(chapter: u32, verse: u32) -> Self { Self { chapter, verse } }

    /// `sr#` for a verse whose number could not be recovered.
    pub fn unresolved(chapter: u32) -> String {
        format!("{chapter}-?")
    }
}

impl fmt::Display for VerseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.chapter, self.verse)
    }
}

impl FromStr for VerseId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (ch, vr) = s.split_once('-').ok_or_else(|| format!("no '-' in sr# {s:?}"))?;
        let chapter = ch.trim().parse().map_err(|_| format!("bad chapter in sr# {s:?}"))?;
        let verse = vr.trim().parse().map_err(|_| format!("bad verse in sr# {s:?}"))?;
        Ok(VerseId { chapter, verse })
    }
}
