// Copyright 2024 Logan Magee
//
// SPDX-License-Identifier: LicenseRef-Proprietary

use std::{
    fs,
    io::{self, Write},
    path::PathBuf,
    process::ExitCode,
    time::Instant,
};

use anyhow::{Context, bail};
use clap::{Parser, ValueEnum};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;
use turbobm::{Algorithm, Finder, FinderConfig};

/// Search files for an exact byte string
#[derive(Parser)]
#[command(version)]
struct Args {
    /// Search algorithm to use
    #[arg(long, value_enum, default_value_t = AlgorithmArg::Turbo)]
    algorithm: AlgorithmArg,
    /// Print the offset of every match instead of only the first
    #[arg(long, conflicts_with = "count")]
    all: bool,
    /// Print the number of matches in each file
    #[arg(long)]
    count: bool,
    /// Interpret NEEDLE as hexadecimal bytes, e.g. "7f454c46"
    #[arg(long)]
    hex: bool,
    needle: String,
    #[arg(required = true)]
    files: Vec<PathBuf>,
}

#[derive(Clone, Copy, ValueEnum)]
enum AlgorithmArg {
    Basic,
    Turbo,
}

impl From<AlgorithmArg> for Algorithm {
    fn from(value: AlgorithmArg) -> Self {
        match value {
            AlgorithmArg::Basic => Algorithm::Basic,
            AlgorithmArg::Turbo => Algorithm::Turbo,
        }
    }
}

fn main() -> anyhow::Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(tracing::Level::WARN.into())
                .from_env_lossy(),
        )
        .init();

    let args = Args::parse();

    let needle = if args.hex {
        parse_hex(&args.needle).context("Failed to parse hex needle")?
    } else {
        args.needle.into_bytes()
    };
    if needle.is_empty() {
        bail!("Needle must not be empty");
    }

    let finder = Finder::with_config(
        &needle,
        FinderConfig::new().algorithm(args.algorithm.into()),
    );
    debug!(
        needle_len = needle.len(),
        algorithm = ?finder.algorithm(),
        "Built search tables"
    );

    let mut stdout = io::stdout().lock();
    let mut found_any = false;

    for path in &args.files {
        let haystack = fs::read(path)
            .with_context(|| format!("Failed to read file '{}'", path.display()))?;

        let start = Instant::now();
        let matches = if args.count {
            let matches = finder.find_iter(&haystack).count();
            writeln!(stdout, "{}:{matches}", path.display())?;
            matches
        } else if args.all {
            let mut matches = 0;
            for offset in finder.find_iter(&haystack) {
                writeln!(stdout, "{}:{offset}", path.display())?;
                matches += 1;
            }
            matches
        } else {
            match finder.find(&haystack) {
                Some(offset) => {
                    writeln!(stdout, "{}:{offset}", path.display())?;
                    1
                }
                None => 0,
            }
        };
        debug!(elapsed = ?start.elapsed(), "Search finished");
        info!(
            path = %path.display(),
            len = haystack.len(),
            matches,
            "Searched file"
        );

        found_any |= matches > 0;
    }

    stdout.flush().context("Failed to write results")?;

    Ok(if found_any {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

/// Decodes a string of hexadecimal digit pairs, ignoring whitespace
fn parse_hex(hex: &str) -> anyhow::Result<Vec<u8>> {
    let digits = hex
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| {
            c.to_digit(16)
                .map(|digit| digit as u8)
                .with_context(|| format!("Invalid hex digit '{c}'"))
        })
        .collect::<anyhow::Result<Vec<_>>>()?;

    if digits.len() % 2 != 0 {
        bail!("Odd number of hex digits: {}", digits.len());
    }

    Ok(digits
        .chunks_exact(2)
        .map(|pair| (pair[0] << 4) | pair[1])
        .collect())
}
