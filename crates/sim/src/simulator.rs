// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Heads-up hand simulation.
use anyhow::{Context, Result};
use log::info;
use rand::Rng;
use std::cmp::Ordering;

use holdem_eval::{Card, Deck, HandEval, HandEvaluator};

use crate::betting::{BettingRound, Seat, Street};

/// The showdown of a hand.
///
/// A fold only ends the street it happens on, every hand is played to the
/// river and shown down.
#[derive(Debug, Clone)]
pub struct Outcome {
    /// Player one best hand.
    pub p1: HandEval,
    /// Player two best hand.
    pub p2: HandEval,
    /// The streets that ended with a fold and who folded.
    pub folds: Vec<(Street, Seat)>,
}

impl Outcome {
    /// The winner of the hand, `None` for a tie.
    pub fn winner(&self) -> Option<Seat> {
        match self.p1.index().cmp(&self.p2.index()) {
            Ordering::Less => Some(Seat::One),
            Ordering::Greater => Some(Seat::Two),
            Ordering::Equal => None,
        }
    }
}

/// Plays heads-up hands with random actions.
#[derive(Debug)]
pub struct Simulator<'t, R> {
    eval: HandEvaluator<'t>,
    rng: R,
    max_raises: usize,
}

impl<'t, R: Rng> Simulator<'t, R> {
    /// Creates a simulator that draws cards and actions from `rng`.
    pub fn new(eval: HandEvaluator<'t>, rng: R, max_raises: usize) -> Self {
        Self {
            eval,
            rng,
            max_raises,
        }
    }

    /// Deals and plays a hand.
    pub fn play_hand(&mut self) -> Result<Outcome> {
        let mut deck = Deck::new_and_shuffled(&mut self.rng);
        let p1 = [deal(&mut deck)?, deal(&mut deck)?];
        let p2 = [deal(&mut deck)?, deal(&mut deck)?];
        let mut board = Vec::with_capacity(5);
        for _ in 0..5 {
            board.push(deal(&mut deck)?);
        }

        info!("{}: {}", Seat::One, cards_to_string(&p1));
        info!("{}: {}", Seat::Two, cards_to_string(&p2));

        let mut folds = Vec::new();
        for street in Street::streets() {
            if street != Street::Preflop {
                info!("{street}: {}", cards_to_string(&board[..street.board_cards()]));
            }

            info!("-- {street} --");
            let outcome = BettingRound::new(Seat::One, self.max_raises).play(&mut self.rng);
            for (seat, action) in &outcome.actions {
                info!("{seat}: {action}");
            }

            if let Some(folded) = outcome.folded {
                info!("{folded} folded, {street} ends");
                folds.push((street, folded));
            }
        }

        let p1 = self.showdown(Seat::One, &p1, &board)?;
        let p2 = self.showdown(Seat::Two, &p2, &board)?;
        let outcome = Outcome { p1, p2, folds };

        match outcome.winner() {
            Some(winner) => info!("Result: {winner} wins (lower index is better)"),
            None => info!("Result: Tie (equal index)"),
        }

        Ok(outcome)
    }

    fn showdown(&self, seat: Seat, hole: &[Card; 2], board: &[Card]) -> Result<HandEval> {
        let mut cards = hole.to_vec();
        cards.extend_from_slice(board);

        let eval = self.eval.eval(&cards)?;
        info!(
            "{seat}: {} {} best {} index {}",
            cards_to_string(hole),
            eval.class().category(),
            cards_to_string(eval.best_cards()),
            eval.index(),
        );

        Ok(eval)
    }
}

fn deal(deck: &mut Deck) -> Result<Card> {
    deck.deal().context("Deck is empty")
}

fn cards_to_string(cards: &[Card]) -> String {
    cards
        .iter()
        .map(|c| c.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}
