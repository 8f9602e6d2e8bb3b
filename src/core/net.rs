// src/core/net.rs

// Blocking HTTP GET for candidate audio URLs

use reqwest::blocking::Client;
use reqwest::header::CONTENT_TYPE;
use thiserror::Error;

use crate::config::options::FetchOptions;

/// Successful (2xx) response body plus its declared type.
#[derive(Clone, Debug, Default)]
pub struct Payload {
    pub content_type: Option<String>,
    pub body: Vec<u8>,
}

/// Why one candidate URL did not yield audio. Never fatal.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum FetchFailure {
    #[error("HTTP {0}")]
    Status(u16),
    #[error("not audio (content-type: {})", .content_type.as_deref().unwrap_or("none"))]
    NotAudio { content_type: Option<String> },
    #[error("{0}")]
    Transport(String),
    #[error("could not save: {0}")]
    Write(String),
}

/// Seam between the acquire loop and the network.
pub trait Fetch {
    fn get(&self, url: &str) -> Result<Payload, FetchFailure>;
}

pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new(opts: &FetchOptions) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .user_agent(opts.user_agent.as_str())
            .timeout(opts.timeout)
            .build()?;
        Ok(Self { client })
    }
}

impl Fetch for HttpFetcher {
    fn get(&self, url: &str) -> Result<Payload, FetchFailure> {
        let resp = self.client.get(url).send().map_err(|e| transport(&e))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(FetchFailure::Status(status.as_u16()));
        }
        let content_type = resp
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_owned);
        let body = resp.bytes().map_err(|e| transport(&e))?.to_vec();

        Ok(Payload { content_type, body })
    }
}

fn transport(err: &reqwest::Error) -> FetchFailure {
    let what = if err.is_timeout() {
        "timed out"
    } else if err.is_connect() {
        "connection failed"
    } else if err.is_decode() || err.is_body() {
        "bad response body"
    } else if err.is_redirect() {
        "redirect loop"
    } else {
        "request failed"
    };
    FetchFailure::Transport(format!("{what}: {err}"))
}

/// Host part of a URL, for progress lines ("Success from <host>").
pub fn host_of(url: &str) -> &str {
    let rest = url.split_once("://").map_or(url, |(_, r)| r);
    rest.split(['/', '?', '#']).next().unwrap_or(rest)
}
