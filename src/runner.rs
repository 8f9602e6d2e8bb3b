// src/runner.rs
//
// One maintenance run: load the whole dataset, apply one op, write it all
// back. A failed op leaves the file untouched.

use std::fmt;

use crate::{
    config::options::MaintainOptions,
    core::net::{Fetch, HttpFetcher},
    error::Result,
    file,
    model::Collection,
    ops::{self, AcquireReport, BindReport, ClearReport, RecomputeReport},
    progress::Progress,
    store,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    ClearAudio,
    AcquireAudio,
    BindAudio,
    RecomputeSr,
}

impl Command {
    pub fn name(self) -> &'static str {
        match self {
            Command::ClearAudio => "clear-audio",
            Command::AcquireAudio => "acquire-audio",
            Command::BindAudio => "bind-audio",
            Command::RecomputeSr => "recompute-sr",
        }
    }
}

/// What a run did, for the end-of-run summary.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Report {
    Cleared(ClearReport),
    Acquired(AcquireReport),
    Bound(BindReport),
    Recomputed(RecomputeReport),
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Report::Cleared(r) => fmt::Display::fmt(r, f),
            Report::Acquired(r) => fmt::Display::fmt(r, f),
            Report::Bound(r) => fmt::Display::fmt(r, f),
            Report::Recomputed(r) => fmt::Display::fmt(r, f),
        }
    }
}

/// Top-level runner: dispatch on command and run against the real network.
pub fn run(cmd: Command, opts: &MaintainOptions, progress: &mut dyn Progress) -> Result<Report> {
    logf!("Run {} on {}", cmd.name(), opts.dataset.display());
    match cmd {
        Command::ClearAudio => clear(opts),
        Command::AcquireAudio => {
            let fetcher = HttpFetcher::new(&opts.fetch)?;
            acquire(opts, &fetcher, progress)
        }
        Command::BindAudio => bind(opts, progress),
        Command::RecomputeSr => recompute(opts),
    }
}

pub fn clear(opts: &MaintainOptions) -> Result<Report> {
    with_dataset(opts, |coll| Ok(Report::Cleared(ops::clear_audio(coll))))
}

pub fn recompute(opts: &MaintainOptions) -> Result<Report> {
    with_dataset(opts, |coll| Ok(Report::Recomputed(ops::recompute_sr(coll))))
}

/// Acquire with any [`Fetch`] implementation.
pub fn acquire(
    opts: &MaintainOptions,
    fetcher: &dyn Fetch,
    progress: &mut dyn Progress,
) -> Result<Report> {
    with_dataset(opts, |coll| {
        ops::acquire_audio(coll, opts, fetcher, progress).map(Report::Acquired)
    })
}

/// The audio dir is checked before the dataset is even read.
pub fn bind(opts: &MaintainOptions, progress: &mut dyn Progress) -> Result<Report> {
    progress.log(&format!("Scanning for audio files in '{}'...\n", opts.audio_dir.display()));
    let scan = file::scan_audio_dir(&opts.audio_dir)?;
    with_dataset(opts, |coll| {
        Ok(Report::Bound(ops::bind_local_audio(coll, &scan, opts, progress)))
    })
}

fn with_dataset<F>(opts: &MaintainOptions, op: F) -> Result<Report>
where
    F: FnOnce(&mut Collection) -> Result<Report>,
{
    let mut coll = store::load(&opts.dataset)?;
    let before = coll.len();
    let report = op(&mut coll)?;
    debug_assert_eq!(before, coll.len(), "ops must not add or drop records");
    store::save(&opts.dataset, &coll)?;
    Ok(report)
}
