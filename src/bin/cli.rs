// src/bin/cli.rs
use color_eyre::eyre::{Result, WrapErr};
use shloka_maint::cli::{self, Mode};

fn main() -> Result<()> {
    color_eyre::install()?;

    match cli::parse_args(std::env::args().skip(1))? {
        Mode::Help => println!("{}", cli::HELP),
        Mode::Run(cmd, opts) => {
            cli::run(cmd, &opts)
                .wrap_err_with(|| format!("{} failed on {}", cmd.name(), opts.dataset.display()))?;
        }
    }
    Ok(())
}
