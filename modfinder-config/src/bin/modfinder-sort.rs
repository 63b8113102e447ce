use std::io;

use anyhow::Result;
use clap::Parser;
use modfinder_config::{cli::SortArgs, init_tracing};

fn main() -> Result<()> {
    init_tracing("warn");

    let args = SortArgs::parse();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    modfinder_config::cli::run(&args, &mut out)
}
