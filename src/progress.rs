// src/progress.rs
/// Lightweight progress reporting for the per-record ops.
/// The CLI prints lines; tests record or ignore them.
pub trait Progress {
    /// Called at the start with the number of records.
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// Something was skipped but the run goes on.
    fn warn(&mut self, _msg: &str) {}

    /// A record was resolved; `detail` says how.
    fn item_done(&mut self, _sr: &str, _detail: &str) {}

    /// A record could not be resolved.
    fn item_failed(&mut self, _sr: &str) {}

    /// Called at the end of the pass.
    fn finish(&mut self) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}

/// Prints one line per record to stdout, warnings to stderr.
#[derive(Default)]
pub struct ConsoleProgress {
    total: usize,
}

impl Progress for ConsoleProgress {
    fn begin(&mut self, total: usize) {
        self.total = total;
        println!("Found {total} shlokas to process\n");
    }

    fn log(&mut self, msg: &str) {
        println!("{msg}");
    }

    fn warn(&mut self, msg: &str) {
        eprintln!("Warning: {msg}");
    }

    fn item_done(&mut self, sr: &str, detail: &str) {
        println!("✓ {sr}: {detail}");
    }

    fn item_failed(&mut self, sr: &str) {
        println!("✗ {sr}: Failed");
    }

    fn finish(&mut self) {
        if self.total > 0 {
            println!();
        }
    }
}
