// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Best hand evaluation for 5, 6, and 7 cards hands.
use crate::{CanonicalTable, Card, HandClass, HandIndex, Result, class::check_hand};

/// The evaluation of the best five cards hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HandEval {
    index: HandIndex,
    class: HandClass,
    cards: [Card; 5],
}

impl HandEval {
    /// The best hand index in the canonical table, lower is stronger.
    pub fn index(&self) -> HandIndex {
        self.index
    }

    /// The best hand class.
    pub fn class(&self) -> HandClass {
        self.class
    }

    /// The five cards that make the best hand.
    pub fn best_cards(&self) -> &[Card; 5] {
        &self.cards
    }
}

/// Evaluates hands against a canonical table.
///
/// ```no_run
/// # use holdem_eval::*;
/// let table = CanonicalTable::build();
/// let eval = HandEvaluator::new(&table);
///
/// let cards = ["AS", "KS", "QS", "JS", "TS", "2D", "7C"]
///     .iter()
///     .map(|c| c.parse().unwrap())
///     .collect::<Vec<Card>>();
/// assert_eq!(eval.best_index(&cards).unwrap(), HandIndex::BEST);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct HandEvaluator<'t> {
    table: &'t CanonicalTable,
}

impl<'t> HandEvaluator<'t> {
    /// Creates an evaluator that uses the given table.
    pub fn new(table: &'t CanonicalTable) -> Self {
        Self { table }
    }

    /// Returns the index of the best five cards hand.
    ///
    /// The hand must have 5, 6, or 7 distinct cards.
    pub fn best_index(&self, cards: &[Card]) -> Result<HandIndex> {
        self.eval(cards).map(|eval| eval.index)
    }

    /// Returns the index of the best five cards hand for cards given as raw
    /// `(rank, suit)` values, see [Card::encode].
    pub fn best_index_encoded(&self, cards: &[(u8, u8)]) -> Result<HandIndex> {
        let cards = cards
            .iter()
            .map(|&(rank, suit)| Card::encode(rank, suit))
            .collect::<std::result::Result<Vec<_>, _>>()?;
        self.best_index(&cards)
    }

    /// Evaluates the best five cards hand out of all the five cards subsets
    /// of `cards`, 21 subsets for a 7 cards hand.
    ///
    /// The hand must have 5, 6, or 7 distinct cards.
    pub fn eval(&self, cards: &[Card]) -> Result<HandEval> {
        check_hand(cards, 5..=7)?;

        let n = cards.len();
        let mut best_cards = [cards[0], cards[1], cards[2], cards[3], cards[4]];
        let mut best = HandClass::from_cards(&best_cards);

        for c1 in 0..n {
            for c2 in (c1 + 1)..n {
                for c3 in (c2 + 1)..n {
                    for c4 in (c3 + 1)..n {
                        for c5 in (c4 + 1)..n {
                            let hand = [cards[c1], cards[c2], cards[c3], cards[c4], cards[c5]];
                            let class = HandClass::from_cards(&hand);
                            if class > best {
                                best = class;
                                best_cards = hand;
                            }
                        }
                    }
                }
            }
        }

        Ok(HandEval {
            index: self.table.lookup(&best)?,
            class: best,
            cards: best_cards,
        })
    }
}
