// src/store.rs
//
// Whole-file load and save of the dataset. No streaming, no partial writes:
// a save serialises everything to a sibling temp file and renames it over
// the original, so an interrupted run leaves the previous version intact.

use std::{fs, path::{Path, PathBuf}};

use crate::error::{MaintError, Result};
use crate::model::Collection;

pub fn load(path: &Path) -> Result<Collection> {
    let text = fs::read_to_string(path)
        .map_err(|e| MaintError::io("could not read dataset", path, e))?;
    let coll: Collection = serde_json::from_str(&text)
        .map_err(|e| MaintError::Json { path: path.to_path_buf(), source: e })?;
    logd!("Loaded {} shlokas from {}", coll.len(), path.display());
    Ok(coll)
}

/// Pretty JSON (2-space indent), non-ASCII written as-is.
pub fn to_json(coll: &Collection) -> serde_json::Result<String> {
    serde_json::to_string_pretty(coll)
}

pub fn save(path: &Path, coll: &Collection) -> Result<()> {
    let text = to_json(coll)
        .map_err(|e| MaintError::Json { path: path.to_path_buf(), source: e })?;

    let tmp = temp_path(path);
    fs::write(&tmp, text).map_err(|e| MaintError::io("could not write", &tmp, e))?;
    if let Err(e) = fs::rename(&tmp, path) {
        let _ = fs::remove_file(&tmp);
        return Err(MaintError::io("could not replace dataset", path, e));
    }
    logd!("Saved {} shlokas to {}", coll.len(), path.display());
    Ok(())
}

fn temp_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().map(|n| n.to_os_string()).unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}
