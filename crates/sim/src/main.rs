// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0
use clap::Parser;
use log::error;

#[derive(Debug, Parser)]
struct Cli {
    /// Number of hands to play.
    #[clap(long, short = 'n', default_value_t = 3, value_parser = clap::value_parser!(u16).range(1..=1000))]
    hands: u16,
    /// Seed for reproducible hands.
    #[clap(long, short)]
    seed: Option<u64>,
    /// Maximum number of bets and raises per street.
    #[clap(long, default_value_t = 4, value_parser = clap::value_parser!(u8).range(1..=10))]
    max_raises: u8,
    /// Number of tasks used to build the hand table.
    #[clap(long, short, default_value_t = 1, value_parser = clap::value_parser!(u8).range(1..=64))]
    tasks: u8,
}

fn main() {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .format_target(false)
        .format_timestamp_millis()
        .init();

    let cli = Cli::parse();
    let config = holdem_sim::Config {
        hands: cli.hands as usize,
        seed: cli.seed,
        max_raises: cli.max_raises as usize,
        tasks: cli.tasks as usize,
    };

    if let Err(e) = holdem_sim::run(config) {
        error!("{e}");
        std::process::exit(1);
    }
}
