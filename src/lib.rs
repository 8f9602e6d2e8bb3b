// src/lib.rs
// Maintenance ops for the shloka dataset: one JSON file of verses, rewritten
// in full by each run.

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod file;
pub mod model;
pub mod ops;
pub mod progress;
pub mod runner;
pub mod store;

pub use config::options::MaintainOptions;
pub use error::{MaintError, Result};
pub use model::{Collection, Verse, VerseId};
pub use runner::{Command, Report};
