// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Hold'em hand evaluator.
//!
//! The evaluator classifies all the five cards hands in a deck into 7462
//! distinct strength classes, the [CanonicalTable], and ranks a 5, 6, or 7
//! cards hand by the table index of its best five cards subset, index 1 for a
//! royal flush up to 7462 for 7-5-4-3-2 offsuit.
//!
//! The table is built once and then shared by reference:
//!
//! ```no_run
//! # use holdem_eval::*;
//! let table = CanonicalTable::build();
//! let eval = HandEvaluator::new(&table);
//!
//! // Straight flushes 2C..8C and 8C..AC
//! let cards = Deck::default().into_iter().take(13).collect::<Vec<_>>();
//! let v1 = eval.best_index(&cards[0..7]).unwrap();
//! let v2 = eval.best_index(&cards[6..]).unwrap();
//! assert!(v2 < v1);
//! assert_eq!(v2, HandIndex::BEST);
//! ```
//!
//! The **`parallel`** feature adds [CanonicalTable::par_build] that splits the
//! hands enumeration among threads.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod class;
pub use class::{Category, HandClass};

mod error;
pub use error::{Error, Result};

mod evaluator;
pub use evaluator::{HandEval, HandEvaluator};

mod table;
pub use table::{CanonicalTable, HandIndex};

// Reexport cards types.
pub use holdem_cards::{Card, CardError, Deck, Rank, Suit};
