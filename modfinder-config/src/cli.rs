//! The `modfinder-sort` command.
//!
//! Argument parsing and rendering live here so the binary stays a thin
//! wrapper and the whole pipeline can be driven from tests with any writer.

use std::{
    fs,
    io::{self, Read, Write},
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use clap::Parser;
use modfinder_core::prelude::*;
use modfinder_model::ModEntry;
use tracing::info;

use crate::SortConfig;

#[derive(Parser, Debug)]
#[command(
    name = "modfinder-sort",
    about = "Sort a JSON dump of the ModFinder mod list"
)]
pub struct SortArgs {
    /// JSON array of mod entries; reads stdin when omitted or `-`
    pub input: Option<PathBuf>,
    /// Sort criteria such as `status,name:desc`; overrides the configured default
    #[arg(long, short)]
    pub sort: Option<String>,
    /// Explicit config file instead of the environment lookup
    #[arg(long)]
    pub config: Option<PathBuf>,
    /// Emit the sorted entries as JSON instead of a table
    #[arg(long)]
    pub json: bool,
}

impl SortArgs {
    /// Config named by `--config`, or the environment lookup.
    pub fn load_config(&self) -> Result<SortConfig> {
        match &self.config {
            Some(path) => SortConfig::load_from_file(path),
            None => Ok(SortConfig::load_from_env()?.0),
        }
    }

    /// `--sort` wins over the configured default.
    pub fn chain(&self, config: &SortConfig) -> Result<SortChain> {
        match &self.sort {
            Some(raw) => Ok(raw
                .parse::<SortCriteria>()
                .with_context(|| format!("invalid --sort value {raw:?}"))?
                .chain()),
            None => Ok(config.chain()),
        }
    }
}

/// Load, sort and print the entries named by `args`.
pub fn run(args: &SortArgs, out: &mut impl Write) -> Result<()> {
    let config = args.load_config()?;
    let chain = args.chain(&config)?;

    let mut entries = read_entries(args.input.as_deref())?;
    info!(target: "sort::cli", entries = entries.len(), chain = %chain, "sorting mod list");
    sort_entries_parallel(&chain, &mut entries, config.parallel_threshold);

    if args.json {
        write_json(out, &entries)
    } else {
        write_table(out, &entries)
    }
}

/// Reads a JSON array of entries from `input`, or stdin when it is `None` or `-`.
pub fn read_entries(input: Option<&Path>) -> Result<Vec<ModEntry>> {
    let raw = match input {
        Some(path) if path.as_os_str() != "-" => fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?,
        _ => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read stdin")?;
            buf
        }
    };

    parse_entries(&raw)
}

/// Parses the JSON form written by `--json`.
pub fn parse_entries(raw: &str) -> Result<Vec<ModEntry>> {
    serde_json::from_str(raw).context("input is not a JSON array of mod entries")
}

/// One row per entry: name, author, status.
pub fn render_row(entry: &ModEntry) -> String {
    format!(
        "{:<40} {:<24} {}",
        display_or_dash(&entry.name),
        display_or_dash(&entry.author),
        entry.status()
    )
}

pub fn write_table(out: &mut impl Write, entries: &[ModEntry]) -> Result<()> {
    for entry in entries {
        writeln!(out, "{}", render_row(entry))?;
    }
    Ok(())
}

/// Pretty JSON array with a trailing newline.
pub fn write_json(out: &mut impl Write, entries: &[ModEntry]) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, entries)
        .context("failed to write sorted entries")?;
    writeln!(out)?;
    Ok(())
}

fn display_or_dash(value: &str) -> &str {
    if value.is_empty() { "-" } else { value }
}
