// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Heads-up limit betting rounds.
//!
//! Players pick a random legal action, no chips are tracked.
use rand::Rng;
use std::fmt;

/// A betting street.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Street {
    /// Betting on the hole cards.
    Preflop,
    /// Betting after the first three board cards.
    Flop,
    /// Betting after the fourth board card.
    Turn,
    /// Betting after the last board card.
    River,
}

impl Street {
    /// Returns all streets in dealing order.
    pub fn streets() -> impl Iterator<Item = Street> {
        [Street::Preflop, Street::Flop, Street::Turn, Street::River].into_iter()
    }

    /// The number of board cards visible on this street.
    pub fn board_cards(&self) -> usize {
        match self {
            Street::Preflop => 0,
            Street::Flop => 3,
            Street::Turn => 4,
            Street::River => 5,
        }
    }
}

impl fmt::Display for Street {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Street::Preflop => "Preflop",
            Street::Flop => "Flop",
            Street::Turn => "Turn",
            Street::River => "River",
        };

        write!(f, "{name}")
    }
}

/// A seat at a heads-up table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Seat {
    /// The first player.
    One,
    /// The second player.
    Two,
}

impl Seat {
    /// The opponent seat.
    pub fn other(&self) -> Seat {
        match self {
            Seat::One => Seat::Two,
            Seat::Two => Seat::One,
        }
    }
}

impl fmt::Display for Seat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Seat::One => write!(f, "Player 1"),
            Seat::Two => write!(f, "Player 2"),
        }
    }
}

/// A player action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Player checks.
    Check,
    /// Player bets.
    Bet,
    /// Player calls.
    Call,
    /// Player raises.
    Raise,
    /// Player folds.
    Fold,
}

impl Action {
    /// The action label.
    pub fn label(&self) -> &'static str {
        match self {
            Action::Check => "CHECK",
            Action::Bet => "BET",
            Action::Call => "CALL",
            Action::Raise => "RAISE",
            Action::Fold => "FOLD",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Returns the legal actions given the street betting state.
///
/// A bet counts as the first raise.
pub fn legal_actions(has_bet: bool, raises: usize, max_raises: usize) -> &'static [Action] {
    if !has_bet {
        &[Action::Check, Action::Bet]
    } else if raises < max_raises {
        &[Action::Call, Action::Raise, Action::Fold]
    } else {
        &[Action::Call, Action::Fold]
    }
}

/// The actions taken on a street.
#[derive(Debug, Default)]
pub struct StreetOutcome {
    /// The actions in the order they were taken.
    pub actions: Vec<(Seat, Action)>,
    /// The player that folded, if any.
    pub folded: Option<Seat>,
}

/// Plays a street with random legal actions.
///
/// The street ends when a player calls or folds, when both players check, or
/// after [BettingRound::MAX_ACTIONS] actions.
#[derive(Debug, Clone, Copy)]
pub struct BettingRound {
    first: Seat,
    max_raises: usize,
}

impl BettingRound {
    /// Maximum number of actions on a street.
    pub const MAX_ACTIONS: usize = 12;

    /// Creates a round where `first` acts first.
    pub fn new(first: Seat, max_raises: usize) -> Self {
        assert!(max_raises > 0);
        Self { first, max_raises }
    }

    /// Plays the round drawing actions from `rng`.
    pub fn play<R: Rng>(&self, rng: &mut R) -> StreetOutcome {
        let mut outcome = StreetOutcome::default();
        let mut has_bet = false;
        let mut raises = 0;
        let mut current = self.first;

        while outcome.actions.len() < Self::MAX_ACTIONS {
            let allowed = legal_actions(has_bet, raises, self.max_raises);
            let action = allowed[rng.random_range(0..allowed.len())];
            outcome.actions.push((current, action));

            match action {
                Action::Bet => {
                    has_bet = true;
                    raises = 1;
                }
                Action::Raise => raises += 1,
                Action::Call => break,
                Action::Check if current != self.first => break,
                Action::Check => {}
                Action::Fold => {
                    outcome.folded = Some(current);
                    break;
                }
            }

            current = current.other();
        }

        outcome
    }
}
