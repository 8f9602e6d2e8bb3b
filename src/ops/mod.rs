// src/ops/mod.rs
//
// The four dataset transformations. Each works on an in-memory collection,
// touches only its own field(s), and never adds, removes or reorders records.
// Loading and saving is the runner's job.

mod acquire;
mod bind;
mod clear;
mod recompute;

pub use acquire::{acquire_audio, AcquireReport, Attempt, Miss, Unresolved};
pub use bind::{bind_local_audio, BindReport};
pub use clear::{clear_audio, ClearReport};
pub use recompute::{recompute_sr, RecomputeReport};

/// Hint printed after runs that leave records without audio.
pub(crate) const MANUAL_AUDIO_HINT: &str =
    "Shlokas without audio show an input field in the UI for adding a URL manually.";
