use std::process::ExitCode;

use anyhow::{Context, Result};
use bao_init::Args;
use clap::Parser;
use clap::error::ErrorKind;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;
mod i18n;

use crate::commands::init::InitExit;
use crate::i18n::Messages;

const EXIT_ERROR: u8 = 1;

fn main() -> ExitCode {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(err) => return usage_exit(&err),
    };
    init_tracing();
    match run(&args) {
        Ok(exit) => ExitCode::from(exit.code()),
        Err(err) => {
            eprintln!("bao-init error: {err:#}");
            ExitCode::from(EXIT_ERROR)
        }
    }
}

/// Logs go to stderr; stdout carries the report and key material.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Exit status 2 means "not initialized" in check mode, so usage errors exit
/// 1 instead of clap's default.
fn usage_exit(err: &clap::Error) -> ExitCode {
    let _ = err.print();
    match err.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => ExitCode::SUCCESS,
        _ => ExitCode::from(EXIT_ERROR),
    }
}

fn run(args: &Args) -> Result<InitExit> {
    let messages = Messages::new(&args.lang)?;

    let runtime =
        tokio::runtime::Runtime::new().context("Failed to initialize async runtime for init")?;
    runtime.block_on(commands::init::run_init(args, &messages))
}
