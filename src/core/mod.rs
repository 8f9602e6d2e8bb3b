// src/core/mod.rs

pub mod marker;
pub mod net;
pub mod sniff;

pub use net::{Fetch, FetchFailure, HttpFetcher, Payload};
