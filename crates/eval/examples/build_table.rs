// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0
//
// Run with:
//
// ```bash
// $ cargo r --release --example build_table
// ...
// Classes:         7462
// Elapsed:         0.180s
//
// Straight Flush:  10      1..10
// Four of a Kind:  156     11..166
// Full House:      156     167..322
// Flush:           1277    323..1599
// Straight:        10      1600..1609
// Three of a Kind: 858     1610..2467
// Two Pair:        858     2468..3325
// One Pair:        2860    3326..6185
// High Card:       1277    6186..7462
// ```
//
// With the `parallel` feature `--tasks` splits the enumeration among threads.
use anyhow::{Result, bail};
use clap::Parser;
use std::time::Instant;

use holdem_eval::*;

#[derive(Debug, Parser)]
struct Cli {
    /// Number of tasks used to build the table.
    #[clap(long, short, default_value_t = 1)]
    tasks: usize,
}

fn main() -> Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .format_target(false)
        .format_timestamp_millis()
        .init();

    let cli = Cli::parse();

    let now = Instant::now();
    let table = build(cli.tasks)?;
    let elapsed = now.elapsed().as_secs_f64();

    println!("Classes:         {}", table.len());
    println!("Elapsed:         {:.3}s\n", elapsed);

    for category in Category::categories() {
        if let Some((first, last)) = table.category_range(category) {
            let count = last.get() - first.get() + 1;
            let label = format!("{category}:");
            println!("{label:<17}{count:<8}{first}..{last}");
        }
    }

    Ok(())
}

#[cfg(feature = "parallel")]
fn build(tasks: usize) -> Result<CanonicalTable> {
    match tasks {
        0 => bail!("At least one task is required"),
        1 => Ok(CanonicalTable::build()),
        n => Ok(CanonicalTable::par_build(n)),
    }
}

#[cfg(not(feature = "parallel"))]
fn build(tasks: usize) -> Result<CanonicalTable> {
    if tasks != 1 {
        bail!("Multiple tasks require the parallel feature");
    }

    Ok(CanonicalTable::build())
}
