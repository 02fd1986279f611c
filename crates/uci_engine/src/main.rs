mod driver;

use std::io::{self, BufRead};

use anyhow::{Context, Result};
use classical_engine::EngineConfig;
use tracing_subscriber::EnvFilter;

use crate::driver::Driver;

fn main() -> Result<()> {
    let config = match config_path() {
        Some(path) => EngineConfig::load(&path)
            .with_context(|| format!("loading engine config from {path}"))?,
        None => EngineConfig::default(),
    };

    // stdout belongs to the UCI protocol, so logs go to stderr.
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))
        .context("invalid log level")?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let mut driver = Driver::new(&config);
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    for line in stdin.lock().lines() {
        let line = line.context("reading stdin")?;
        if !driver.handle(&line, &mut stdout)? {
            break;
        }
    }
    Ok(())
}

/// Value of `--config <path>` or `--config=<path>`.
fn config_path() -> Option<String> {
    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        if arg == "--config" {
            return args.next();
        }
        if let Some(path) = arg.strip_prefix("--config=") {
            return Some(path.to_string());
        }
    }
    None
}
