// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Hold'em heads-up simulator.
//!
//! Plays limit hands between two players that pick random legal actions and
//! ranks the showdown hands with the canonical hand table.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
use anyhow::{Result, bail};
use log::info;
use rand::{SeedableRng, rngs::StdRng};

use holdem_eval::{CanonicalTable, HandEvaluator};

pub mod betting;
pub mod simulator;
pub use simulator::{Outcome, Simulator};

use betting::Seat;

/// Simulator configuration.
#[derive(Debug)]
pub struct Config {
    /// Number of hands to play.
    pub hands: usize,
    /// Seed for cards and actions, a random seed if `None`.
    pub seed: Option<u64>,
    /// Maximum number of bets and raises per street.
    pub max_raises: usize,
    /// Number of tasks used to build the hand table.
    pub tasks: usize,
}

/// The results of a simulation.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    /// Hands won by player one.
    pub p1_wins: usize,
    /// Hands won by player two.
    pub p2_wins: usize,
    /// Hands tied at showdown.
    pub ties: usize,
    /// Streets ended by a fold.
    pub street_folds: usize,
}

impl Summary {
    fn add(&mut self, outcome: &Outcome) {
        self.street_folds += outcome.folds.len();

        match outcome.winner() {
            Some(Seat::One) => self.p1_wins += 1,
            Some(Seat::Two) => self.p2_wins += 1,
            None => self.ties += 1,
        }
    }
}

/// Builds the hand table and plays the configured number of hands.
pub fn run(config: Config) -> Result<Summary> {
    if config.max_raises == 0 {
        bail!("At least one bet per street is required");
    }

    let table = match config.tasks {
        0 => bail!("At least one task is required"),
        1 => CanonicalTable::build(),
        n => CanonicalTable::par_build(n),
    };

    let rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let mut sim = Simulator::new(HandEvaluator::new(&table), rng, config.max_raises);
    let mut summary = Summary::default();

    for hand in 1..=config.hands {
        info!("==================================================");
        info!("HAND #{hand}");
        summary.add(&sim.play_hand()?);
    }

    info!(
        "Simulation complete: {} hands, player 1 won {}, player 2 won {}, {} ties, {} street folds",
        config.hands, summary.p1_wins, summary.p2_wins, summary.ties, summary.street_folds
    );

    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn run_seeded() {
        let config = || Config {
            hands: 25,
            seed: Some(3),
            max_raises: 4,
            tasks: 2,
        };

        let summary = run(config()).unwrap();
        assert_eq!(
            summary.p1_wins + summary.p2_wins + summary.ties,
            25
        );
        assert!(summary.street_folds <= 4 * 25);

        assert_eq!(run(config()).unwrap(), summary);
    }

    #[test]
    fn run_invalid_config() {
        let config = Config {
            hands: 1,
            seed: None,
            max_raises: 0,
            tasks: 1,
        };
        assert!(run(config).is_err());

        let config = Config {
            hands: 1,
            seed: None,
            max_raises: 4,
            tasks: 0,
        };
        assert!(run(config).is_err());
    }
}
