// tests/acquire_remote.rs
//
// Acquire Remote Audio with a scripted fetcher; nothing here hits the network.
//
use std::cell::RefCell;
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use shloka_maint::config::sources::Candidate;
use shloka_maint::core::{Fetch, FetchFailure, Payload};
use shloka_maint::ops::Miss;
use shloka_maint::progress::NullProgress;
use shloka_maint::{runner, store, MaintainOptions, Report};

fn tmp_dir(name: &str) -> PathBuf {
    let mut p = std::env::temp_dir();
    p.push(format!("shloka_acquire_{}_{}", name, std::process::id()));
    let _ = fs::remove_dir_all(&p);
    fs::create_dir_all(&p).unwrap();
    p
}

/// Replies from a fixed table; unknown URLs get a 404. Records every call.
#[derive(Default)]
struct ScriptedFetcher {
    replies: HashMap<String, Result<Payload, FetchFailure>>,
    calls: RefCell<Vec<String>>,
}

impl ScriptedFetcher {
    fn reply(mut self, url: &str, reply: Result<Payload, FetchFailure>) -> Self {
        self.replies.insert(url.to_string(), reply);
        self
    }
    fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }
}

impl Fetch for ScriptedFetcher {
    fn get(&self, url: &str) -> Result<Payload, FetchFailure> {
        self.calls.borrow_mut().push(url.to_string());
        self.replies.get(url).cloned().unwrap_or(Err(FetchFailure::Status(404)))
    }
}

fn mp3(ct: Option<&str>, body: &[u8]) -> Result<Payload, FetchFailure> {
    Ok(Payload { content_type: ct.map(str::to_string), body: body.to_vec() })
}

fn primary(ch: u32, vr: u32) -> String { format!("https://primary.test/{ch}/{vr}.mp3") }
fn mirror(ch: u32, vr: u32) -> String { format!("https://mirror.test/{ch:02}_{vr:03}.mp3") }

fn setup(name: &str, srs: &[&str]) -> MaintainOptions {
    let dir = tmp_dir(name);
    let shlokas: Vec<String> = srs
        .iter()
        .map(|sr| format!(r#"{{"chapter": 1, "sr#": "{sr}", "shloka": "", "audio": ""}}"#))
        .collect();
    let data = dir.join("gita.json");
    fs::write(&data, format!(r#"{{"shlokas": [{}]}}"#, shlokas.join(","))).unwrap();

    let mut opts = MaintainOptions::new(&data, dir.join("audio"));
    opts.fetch.pause = Duration::ZERO;
    opts.fetch.sources = vec![
        Candidate { name: "primary", url: primary },
        Candidate { name: "mirror", url: mirror },
    ];
    opts
}

fn acquire(opts: &MaintainOptions, fetcher: &ScriptedFetcher) -> shloka_maint::ops::AcquireReport {
    match runner::acquire(opts, fetcher, &mut NullProgress).unwrap() {
        Report::Acquired(r) => r,
        other => panic!("wrong report: {other:?}"),
    }
}

fn audios(opts: &MaintainOptions) -> Vec<String> {
    store::load(&opts.dataset).unwrap().shlokas.into_iter().map(|v| v.audio).collect()
}

#[test]
fn existing_file_is_never_refetched() {
    let opts = setup("existing", &["1-1"]);
    fs::create_dir_all(&opts.audio_dir).unwrap();
    fs::write(opts.audio_dir.join("01_001.mp3"), b"ID3 already here").unwrap();
    let fetcher = ScriptedFetcher::default();

    let r = acquire(&opts, &fetcher);

    assert!(fetcher.calls().is_empty());
    assert_eq!(audios(&opts), ["audio/01_001.mp3"]);
    assert_eq!((r.existing, r.downloaded, r.failed.len()), (1, 0, 0));
    assert!(!r.created_dir);
}

#[test]
fn falls_through_to_next_candidate_and_saves() {
    let opts = setup("fallthrough", &["1-2"]);
    let fetcher = ScriptedFetcher::default()
        .reply(&primary(1, 2), mp3(Some("text/html"), b"<html>not found</html>"))
        .reply(&mirror(1, 2), mp3(Some("audio/mpeg"), b"\xFF\xFBdata"));

    let r = acquire(&opts, &fetcher);

    assert_eq!(fetcher.calls(), [primary(1, 2), mirror(1, 2)]);
    assert!(r.created_dir);
    assert_eq!(r.downloaded, 1);
    assert_eq!(audios(&opts), ["audio/01_002.mp3"]);
    assert_eq!(fs::read(opts.audio_dir.join("01_002.mp3")).unwrap(), b"\xFF\xFBdata");
    assert!(!opts.audio_dir.join("01_002.mp3.part").exists());
}

#[test]
fn stops_at_first_success() {
    let opts = setup("first_wins", &["1-3"]);
    let fetcher = ScriptedFetcher::default()
        .reply(&primary(1, 3), mp3(None, b"ID3\x03tagged"))
        .reply(&mirror(1, 3), mp3(Some("audio/mpeg"), b"other"));

    acquire(&opts, &fetcher);

    assert_eq!(fetcher.calls(), [primary(1, 3)]);
    assert_eq!(fs::read(opts.audio_dir.join("01_003.mp3")).unwrap(), b"ID3\x03tagged");
}

#[test]
fn every_failure_reported_once_with_empty_audio() {
    let opts = setup("failures", &["1-4", "1-5", "1-?", "1-6"]);
    fs::create_dir_all(&opts.audio_dir).unwrap();
    let fetcher = ScriptedFetcher::default()
        .reply(&primary(1, 4), Err(FetchFailure::Transport("timed out".into())))
        .reply(&mirror(1, 5), mp3(Some("audio/mpeg"), b"ok"));

    let r = acquire(&opts, &fetcher);

    assert_eq!(r.failed_ids(), ["1-4", "1-?", "1-6"]);
    assert_eq!(audios(&opts), ["", "audio/01_005.mp3", "", ""]);
    assert_eq!(r.downloaded, 1);
    assert_eq!(r.total, 4);

    // placeholder ids never reach the network
    assert!(fetcher.calls().iter().all(|u| !u.contains('?')));
    assert_eq!(r.failed[1].miss, Miss::NoVerseId);

    match &r.failed[0].miss {
        Miss::Exhausted(attempts) => {
            assert_eq!(attempts.len(), 2);
            assert_eq!((attempts[0].source, attempts[1].source), ("primary", "mirror"));
            assert_eq!(attempts[0].failure, FetchFailure::Transport("timed out".into()));
            assert_eq!(attempts[1].failure, FetchFailure::Status(404));
        }
        other => panic!("unexpected miss: {other:?}"),
    }
    assert!(!opts.audio_dir.join("01_004.mp3").exists());
}

#[test]
fn rerun_is_a_no_op_for_fetched_records() {
    let opts = setup("rerun", &["1-7"]);
    let fetcher = ScriptedFetcher::default().reply(&primary(1, 7), mp3(Some("audio/mpeg"), b"x"));
    acquire(&opts, &fetcher);
    let after_first = fs::read_to_string(&opts.dataset).unwrap();

    let again = ScriptedFetcher::default();
    let r = acquire(&opts, &again);

    assert!(again.calls().is_empty());
    assert_eq!(r.existing, 1);
    assert_eq!(fs::read_to_string(&opts.dataset).unwrap(), after_first);
}

#[test]
fn order_and_length_survive() {
    let srs = ["1-9", "1-8", "1-10"];
    let opts = setup("order", &srs);
    let fetcher = ScriptedFetcher::default().reply(&mirror(1, 8), mp3(Some("audio/mpeg"), b"x"));

    acquire(&opts, &fetcher);

    let after: Vec<String> = store::load(&opts.dataset).unwrap().shlokas.into_iter().map(|v| v.sr).collect();
    assert_eq!(after, srs);
}

#[test]
fn pause_separates_records_that_went_to_the_network() {
    let pause = Duration::from_millis(30);
    let mut opts = setup("pause_network", &["1-11", "1-12", "1-13"]);
    opts.fetch.pause = pause;
    let fetcher = ScriptedFetcher::default().reply(&primary(1, 12), mp3(Some("audio/mpeg"), b"x"));

    let started = Instant::now();
    let r = acquire(&opts, &fetcher);
    let elapsed = started.elapsed();

    assert_eq!((r.downloaded, r.failed.len()), (1, 2));
    assert!(elapsed >= pause * 2, "three fetched records took only {elapsed:?}");
}

#[test]
fn local_hits_are_not_paused() {
    let pause = Duration::from_secs(2);
    let mut opts = setup("pause_local", &["1-11", "1-12", "1-13"]);
    opts.fetch.pause = pause;
    fs::create_dir_all(&opts.audio_dir).unwrap();
    for name in ["01_011.mp3", "01_012.mp3", "01_013.mp3"] {
        fs::write(opts.audio_dir.join(name), b"ID3").unwrap();
    }
    let fetcher = ScriptedFetcher::default();

    let started = Instant::now();
    let r = acquire(&opts, &fetcher);
    let elapsed = started.elapsed();

    assert_eq!(r.existing, 3);
    assert!(fetcher.calls().is_empty());
    assert!(elapsed < pause, "local hits were paused: {elapsed:?}");
}

#[test]
fn unwritable_target_is_a_write_failure_with_nothing_left_behind() {
    let opts = setup("write_fail", &["1-14"]);
    fs::create_dir_all(&opts.audio_dir).unwrap();
    // a directory where the download would be staged makes every write fail
    fs::create_dir_all(opts.audio_dir.join("01_014.mp3.part")).unwrap();
    let fetcher = ScriptedFetcher::default()
        .reply(&primary(1, 14), mp3(Some("audio/mpeg"), b"\xFF\xFBdata"))
        .reply(&mirror(1, 14), mp3(None, b"ID3\x03tagged"));

    let r = acquire(&opts, &fetcher);

    assert_eq!(fetcher.calls(), [primary(1, 14), mirror(1, 14)]);
    assert_eq!(r.failed_ids(), ["1-14"]);
    match &r.failed[0].miss {
        Miss::Exhausted(attempts) => {
            assert_eq!(attempts.len(), 2);
            for a in attempts {
                assert!(matches!(a.failure, FetchFailure::Write(_)), "{a:?}");
            }
        }
        other => panic!("unexpected miss: {other:?}"),
    }
    assert_eq!(audios(&opts), [""]);
    assert!(!opts.audio_dir.join("01_014.mp3").exists());
}

#[test]
fn stale_partial_download_is_not_treated_as_existing() {
    let opts = setup("stale_part", &["1-15"]);
    fs::create_dir_all(&opts.audio_dir).unwrap();
    fs::write(opts.audio_dir.join("01_015.mp3.part"), b"ID3 trunc").unwrap();
    let fetcher = ScriptedFetcher::default().reply(&primary(1, 15), mp3(Some("audio/mpeg"), b"ID3 complete"));

    let r = acquire(&opts, &fetcher);

    assert_eq!((r.existing, r.downloaded), (0, 1));
    assert_eq!(fetcher.calls(), [primary(1, 15)]);
    assert_eq!(fs::read(opts.audio_dir.join("01_015.mp3")).unwrap(), b"ID3 complete");
    assert!(!opts.audio_dir.join("01_015.mp3.part").exists());
}
