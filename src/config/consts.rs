// src/config/consts.rs

// Dataset
pub const DEFAULT_DATASET: &str = "gita.json";

// Local audio
pub const DEFAULT_AUDIO_DIR: &str = "audio";
pub const AUDIO_EXT: &str = "mp3";

// Log file, relative to the dataset's directory
pub const STORE_DIR: &str = ".store";
pub const LOG_FILE: &str = "debug.log";

// Net
pub const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36";
pub const REQUEST_TIMEOUT_SECS: u64 = 30;
pub const REQUEST_PAUSE_MS: u64 = 500; // be polite, between records
