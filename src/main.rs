#![allow(clippy::doc_markdown)]
#![doc = include_str!("../README.md")]

mod cli;
mod fmt;
mod tables;

use anyhow::Result;
use clap::{Parser, crate_version};
use tco::prelude::info;

use crate::cli::{Args, Command, compare, sweep, vehicles};

fn main() -> Result<()> {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt().without_time().compact().init();
    info!(version = crate_version!(), "starting…");

    match Args::parse().command {
        Command::Compare(args) => compare(&args)?,
        Command::Sweep(args) => sweep(&args)?,
        Command::Vehicles(args) => vehicles(&args)?,
    }

    info!("done!");
    Ok(())
}
