// src/cli.rs
use std::{path::PathBuf, time::Duration};

use crate::config::options::MaintainOptions;
use crate::error::{MaintError, Result};
use crate::progress::ConsoleProgress;
use crate::runner::{self, Command, Report};

pub const HELP: &str = include_str!("cli_help.txt");

pub enum Mode {
    Run(Command, MaintainOptions),
    Help,
}

/// Parse everything after the program name.
pub fn parse_args<I>(args: I) -> Result<Mode>
where
    I: IntoIterator<Item = String>,
{
    let mut args = args.into_iter();
    let mut opts = MaintainOptions::default();
    let mut command = None;

    while let Some(a) = args.next() {
        match a.as_str()
        {
            "-h" | "--help" | "help" => return Ok(Mode::Help),
            "-d" | "--data" => opts.dataset = PathBuf::from(value(&mut args, &a)?),
            "-a" | "--audio-dir" => opts.audio_dir = PathBuf::from(value(&mut args, &a)?),
            "--delay-ms" => {
                let ms: u64 = number(&value(&mut args, &a)?, &a)?;
                opts.fetch.pause = Duration::from_millis(ms); }
            "--timeout-secs" => {
                let secs: u64 = number(&value(&mut args, &a)?, &a)?;
                if secs == 0 { return Err(usage("--timeout-secs must be at least 1")); }
                opts.fetch.timeout = Duration::from_secs(secs); }
            flag if flag.starts_with('-') => return Err(usage(&format!("Unknown arg: {flag}"))),
            name => {
                if command.is_some() {
                    return Err(usage(&format!("Only one command per run (got extra {name:?})")));
                }
                command = Some(parse_command(name)?);
            }
        }
    }

    match command {
        Some(cmd) => Ok(Mode::Run(cmd, opts)),
        None => Err(usage("Missing command")),
    }
}

fn parse_command(name: &str) -> Result<Command> {
    Ok(match name.to_ascii_lowercase().as_str() {
        "clear-audio" | "clear" => Command::ClearAudio,
        "acquire-audio" | "download" => Command::AcquireAudio,
        "bind-audio" | "bind" => Command::BindAudio,
        "recompute-sr" | "update-sr" => Command::RecomputeSr,
        other => return Err(usage(&format!("Unknown command: {other}"))),
    })
}

fn value(args: &mut impl Iterator<Item = String>, flag: &str) -> Result<String> {
    args.next().ok_or_else(|| usage(&format!("Missing value for {flag}")))
}

fn number(v: &str, flag: &str) -> Result<u64> {
    v.trim().parse().map_err(|_| usage(&format!("Invalid number for {flag}: {v}")))
}

fn usage(msg: &str) -> MaintError {
    MaintError::Usage(format!("{msg}\n\n{HELP}"))
}

/// Run one command with console progress, printing the summary at the end.
pub fn run(cmd: Command, opts: &MaintainOptions) -> Result<Report> {
    if let Err(e) = crate::log::init(&opts.log_path()) {
        eprintln!("Warning: debug log disabled ({e})");
    }
    let mut progress = ConsoleProgress::default();
    let report = runner::run(cmd, opts, &mut progress)?;
    println!("{report}");
    Ok(report)
}
