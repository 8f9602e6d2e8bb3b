// src/ops/acquire.rs
use std::{fmt, fs, path::{Path, PathBuf}, thread};

use crate::config::options::MaintainOptions;
use crate::config::sources::Candidate;
use crate::core::net::{host_of, Fetch, FetchFailure, Payload};
use crate::core::sniff;
use crate::error::Result;
use crate::file::{audio_file_name, ensure_directory};
use crate::model::{Collection, VerseId};
use crate::progress::Progress;

/// One candidate URL that was tried and rejected.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Attempt {
    /// [`Candidate::name`] of the source.
    pub source: &'static str,
    pub url: String,
    pub failure: FetchFailure,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Miss {
    /// `sr#` is a placeholder or junk; no filename or URL can be built.
    NoVerseId,
    /// Every candidate was tried.
    Exhausted(Vec<Attempt>),
}

/// A record left without audio.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Unresolved {
    pub index: usize,
    pub sr: String,
    pub miss: Miss,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AcquireReport {
    pub total: usize,
    pub created_dir: bool,
    /// Canonical file was already on disk.
    pub existing: usize,
    pub downloaded: usize,
    /// In collection order, one entry per record.
    pub failed: Vec<Unresolved>,
}

impl AcquireReport {
    pub fn succeeded(&self) -> usize {
        self.existing + self.downloaded
    }

    pub fn failed_ids(&self) -> Vec<&str> {
        self.failed.iter().map(|u| u.sr.as_str()).collect()
    }
}

/// Download audio for every record that lacks a canonical local file.
///
/// Per record: reuse `CC_VVV.mp3` if present, otherwise walk the candidate
/// list until one returns verified audio, which is saved to that path. A
/// record nobody can serve ends with empty `audio` and a failure entry.
/// Only a failure to create the audio directory is fatal.
pub fn acquire_audio(
    coll: &mut Collection,
    opts: &MaintainOptions,
    fetcher: &dyn Fetch,
    progress: &mut dyn Progress,
) -> Result<AcquireReport> {
    let created_dir = ensure_directory(&opts.audio_dir)?;
    if created_dir {
        progress.log(&format!("Created '{}' directory", opts.audio_dir.display()));
        logf!("Created audio dir {}", opts.audio_dir.display());
    }

    let total = coll.len();
    let mut report = AcquireReport { total, created_dir, ..Default::default() };
    progress.begin(total);

    for (index, verse) in coll.shlokas.iter_mut().enumerate() {
        let Some(id) = verse.id() else {
            logw!("Record #{index}: sr# {:?} has no verse number, skipped", verse.sr);
            progress.item_failed(&verse.sr);
            verse.audio.clear();
            report.failed.push(Unresolved { index, sr: verse.sr.clone(), miss: Miss::NoVerseId });
            continue;
        };

        let file_name = audio_file_name(id);
        let path = opts.audio_path(&file_name);
        if path.exists() {
            progress.item_done(&verse.sr, "Already exists");
            verse.audio = opts.audio_ref(&file_name);
            report.existing += 1;
            continue;
        }

        progress.log(&format!("Downloading {}...", verse.sr));
        match try_candidates(id, &path, &opts.fetch.sources, fetcher) {
            Ok(url) => {
                logf!("{}: saved {} from {url}", verse.sr, path.display());
                progress.item_done(&verse.sr, &format!("Success from {}", host_of(&url)));
                verse.audio = opts.audio_ref(&file_name);
                report.downloaded += 1;
            }
            Err(attempts) => {
                for a in &attempts {
                    logd!("{}: {} {} -> {}", verse.sr, a.source, a.url, a.failure);
                }
                loge!("{}: no source could serve it ({} tried)", verse.sr, attempts.len());
                progress.item_failed(&verse.sr);
                verse.audio.clear();
                report.failed.push(Unresolved {
                    index,
                    sr: verse.sr.clone(),
                    miss: Miss::Exhausted(attempts),
                });
            }
        }

        // Only records that went to the network are rate-limited.
        if index + 1 < total && !opts.fetch.pause.is_zero() {
            thread::sleep(opts.fetch.pause);
        }
    }

    progress.finish();
    Ok(report)
}

/// First candidate whose payload verifies and saves wins; returns its URL.
fn try_candidates(
    id: VerseId,
    path: &Path,
    sources: &[Candidate],
    fetcher: &dyn Fetch,
) -> std::result::Result<String, Vec<Attempt>> {
    let mut attempts = Vec::with_capacity(sources.len());
    for candidate in sources {
        let url = candidate.url_for(id.chapter, id.verse);
        let outcome = fetcher
            .get(&url)
            .and_then(verify_audio)
            .and_then(|payload| save_payload(path, &payload));
        match outcome {
            Ok(()) => return Ok(url),
            Err(failure) => attempts.push(Attempt { source: candidate.name, url, failure }),
        }
    }
    Err(attempts)
}

fn verify_audio(payload: Payload) -> std::result::Result<Payload, FetchFailure> {
    if sniff::is_audio(payload.content_type.as_deref(), &payload.body) {
        Ok(payload)
    } else {
        Err(FetchFailure::NotAudio { content_type: payload.content_type })
    }
}

/// Write to `CC_VVV.mp3.part` and rename into place, so the canonical name
/// only ever holds a complete download.
fn save_payload(path: &Path, payload: &Payload) -> std::result::Result<(), FetchFailure> {
    let part = part_path(path);
    fs::write(&part, &payload.body)
        .and_then(|()| fs::rename(&part, path))
        .map_err(|e| {
            let _ = fs::remove_file(&part);
            FetchFailure::Write(e.to_string())
        })
}

fn part_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().map(|n| n.to_os_string()).unwrap_or_default();
    name.push(".part");
    path.with_file_name(name)
}

impl fmt::Display for AcquireReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rule = "=".repeat(60);
        writeln!(f, "{rule}")?;
        writeln!(f, "SUMMARY:")?;
        writeln!(f, "Total shlokas: {}", self.total)?;
        writeln!(f, "Successfully downloaded: {} ({} already present)", self.succeeded(), self.existing)?;
        writeln!(f, "Failed: {}", self.failed.len())?;
        if !self.failed.is_empty() {
            writeln!(f)?;
            writeln!(f, "Failed downloads: {}", self.failed_ids().join(", "))?;
            writeln!(f)?;
            writeln!(f, "{}", super::MANUAL_AUDIO_HINT)?;
        }
        write!(f, "{rule}")
    }
}
