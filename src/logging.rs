//! Logging setup.
//!
//! The clock owns the whole screen, so logs only go to the file named by
//! `TUI_CLOCK_LOG_PATH` (filter from `RUST_LOG`, default `info`). Without
//! it the logger is off, even if `RUST_LOG` is set.

use std::env;
use std::fs::OpenOptions;

use anyhow::{Context, Result};
use env_logger::{Builder, Env, Target};
use log::LevelFilter;

pub const LOG_PATH_ENV: &str = "TUI_CLOCK_LOG_PATH";

pub fn init_logging() -> Result<()> {
    let path = env::var_os(LOG_PATH_ENV).filter(|p| !p.is_empty());
    let mut builder = base_builder(path.is_some());

    if let Some(path) = path {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .with_context(|| format!("opening log file {}", path.to_string_lossy()))?;
        builder.target(Target::Pipe(Box::new(file)));
    }

    // A logger may already be installed (e.g. in tests).
    let _ = builder.try_init();
    Ok(())
}

fn base_builder(to_file: bool) -> Builder {
    if to_file {
        return Builder::from_env(Env::default().default_filter_or("info"));
    }
    // stderr would draw over the alternate screen.
    let mut builder = Builder::new();
    builder.filter_level(LevelFilter::Off);
    builder
}
