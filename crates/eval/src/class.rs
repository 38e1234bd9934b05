// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Five cards hand classification.
//!
//! A [HandClass] is the strength of a five cards hand independent of the
//! suits: a [Category] and the ranks that break ties among hands of the same
//! category, two hands with the same class split the pot.
use serde::{Deserialize, Serialize};
use std::{cmp::Ordering, fmt, ops::RangeInclusive};

use crate::{Card, Error, Rank, Result};

/// Rank bits for an Ace to Five straight.
const WHEEL: u16 = 0b1_0000_0000_1111;

/// A poker hand category.
///
/// Categories are numbered from 1 for the strongest to 9 for the weakest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    /// Five consecutive ranks of the same suit.
    StraightFlush = 1,
    /// Four cards of the same rank.
    FourOfAKind,
    /// Three cards of a rank and two of another.
    FullHouse,
    /// Five cards of the same suit.
    Flush,
    /// Five consecutive ranks.
    Straight,
    /// Three cards of the same rank.
    ThreeOfAKind,
    /// Two pairs.
    TwoPair,
    /// Two cards of the same rank.
    OnePair,
    /// None of the above.
    HighCard,
}

impl Category {
    /// Returns all categories from the strongest to the weakest.
    pub fn categories() -> impl DoubleEndedIterator<Item = Category> {
        use Category::*;
        [
            StraightFlush,
            FourOfAKind,
            FullHouse,
            Flush,
            Straight,
            ThreeOfAKind,
            TwoPair,
            OnePair,
            HighCard,
        ]
        .into_iter()
    }

    /// The category number, 1 for a straight flush up to 9 for high card.
    pub fn number(&self) -> u8 {
        *self as u8
    }

    /// The category name.
    pub fn name(&self) -> &'static str {
        match self {
            Category::StraightFlush => "Straight Flush",
            Category::FourOfAKind => "Four of a Kind",
            Category::FullHouse => "Full House",
            Category::Flush => "Flush",
            Category::Straight => "Straight",
            Category::ThreeOfAKind => "Three of a Kind",
            Category::TwoPair => "Two Pair",
            Category::OnePair => "One Pair",
            Category::HighCard => "High Card",
        }
    }

    /// Number of ranks used to break ties in this category.
    pub fn num_kickers(&self) -> usize {
        match self {
            Category::StraightFlush | Category::Straight => 1,
            Category::FourOfAKind | Category::FullHouse => 2,
            Category::ThreeOfAKind | Category::TwoPair => 3,
            Category::OnePair => 4,
            Category::Flush | Category::HighCard => 5,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// The strength class of a five cards hand.
///
/// Classes are ordered by strength, a greater class beats a smaller one:
///
/// ```
/// # use holdem_eval::*;
/// let quads = HandClass::classify(&cards("9C 9D 9H 9S 2C")).unwrap();
/// let boat = HandClass::classify(&cards("AC AD AH KS KC")).unwrap();
/// assert_eq!(quads.category(), Category::FourOfAKind);
/// assert!(quads > boat);
/// # fn cards(s: &str) -> Vec<Card> {
/// #     s.split_whitespace().map(|c| c.parse().unwrap()).collect()
/// # }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HandClass {
    category: Category,
    /// Tie break ranks by decreasing significance, unused positions are 0.
    kickers: [u8; 5],
}

impl HandClass {
    /// Classifies a hand of five distinct cards.
    pub fn classify(cards: &[Card]) -> Result<Self> {
        check_hand(cards, 5..=5)?;
        Ok(Self::from_cards(cards))
    }

    /// Classifies five cards without checking the hand.
    pub(crate) fn from_cards(cards: &[Card]) -> Self {
        debug_assert_eq!(cards.len(), 5);

        let flush = cards.iter().fold(0xf, |acc, c| acc & c.suit_bit()) != 0;
        let straight = straight_top(cards.iter().fold(0, |acc, c| acc | c.rank_bit()));

        let groups = RankGroups::new(cards);
        let pairs = groups.pairs.as_slice();
        let singles = groups.singles.as_slice();

        if let (true, Some(top)) = (flush, straight) {
            Self::new(Category::StraightFlush, &[&[top]])
        } else if let Some(quad) = groups.quad {
            Self::new(Category::FourOfAKind, &[&[quad], singles])
        } else if let (Some(trip), Some(&pair)) = (groups.trip, pairs.first()) {
            Self::new(Category::FullHouse, &[&[trip, pair]])
        } else if flush {
            Self::new(Category::Flush, &[singles])
        } else if let Some(top) = straight {
            Self::new(Category::Straight, &[&[top]])
        } else if let Some(trip) = groups.trip {
            Self::new(Category::ThreeOfAKind, &[&[trip], singles])
        } else if pairs.len() == 2 {
            Self::new(Category::TwoPair, &[pairs, singles])
        } else if pairs.len() == 1 {
            Self::new(Category::OnePair, &[pairs, singles])
        } else {
            Self::new(Category::HighCard, &[singles])
        }
    }

    /// Builds a class concatenating the kickers parts.
    pub(crate) fn new(category: Category, parts: &[&[u8]]) -> Self {
        let mut kickers = [0; 5];
        let ranks = parts.iter().flat_map(|p| p.iter());
        for (k, &rank) in kickers.iter_mut().zip(ranks) {
            *k = rank;
        }

        Self { category, kickers }
    }

    /// The hand category.
    pub fn category(&self) -> Category {
        self.category
    }

    /// The tie break ranks by decreasing significance, 2 for a deuce up to
    /// 14 for an ace.
    pub fn kickers(&self) -> &[u8] {
        &self.kickers[..self.category.num_kickers()]
    }
}

impl Ord for HandClass {
    fn cmp(&self, other: &Self) -> Ordering {
        // A lower category number is stronger.
        other
            .category
            .number()
            .cmp(&self.category.number())
            .then_with(|| self.kickers.cmp(&other.kickers))
    }
}

impl PartialOrd for HandClass {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for HandClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ", self.category)?;
        for &k in self.kickers() {
            match Rank::try_from(k) {
                Ok(rank) => write!(f, "{rank}")?,
                Err(_) => write!(f, "?")?,
            }
        }

        Ok(())
    }
}

/// Checks a hand has a valid number of cards and no duplicates.
pub(crate) fn check_hand(cards: &[Card], sizes: RangeInclusive<usize>) -> Result<()> {
    if !sizes.contains(&cards.len()) {
        return Err(Error::InvalidHand(format!(
            "{} cards, expected {} to {}",
            cards.len(),
            sizes.start(),
            sizes.end()
        )));
    }

    for (pos, card) in cards.iter().enumerate() {
        if cards[pos + 1..].contains(card) {
            return Err(Error::InvalidHand(format!("duplicate card {card}")));
        }
    }

    Ok(())
}

/// Returns the top rank of a straight in the rank bits if any.
fn straight_top(rank_bits: u16) -> Option<u8> {
    const RUN: u16 = 0b11111;

    // Six high has the deuce as lowest card at bit 0.
    for top in (6..=14).rev() {
        let run = RUN << (top - 6);
        if rank_bits & run == run {
            return Some(top);
        }
    }

    (rank_bits & WHEEL == WHEEL).then_some(5)
}

/// A small stack of ranks.
#[derive(Default)]
struct Ranks {
    ranks: [u8; 5],
    len: usize,
}

impl Ranks {
    fn push(&mut self, rank: u8) {
        self.ranks[self.len] = rank;
        self.len += 1;
    }

    fn as_slice(&self) -> &[u8] {
        &self.ranks[..self.len]
    }
}

/// Hand ranks grouped by multiplicity, each group sorted by descending rank.
///
/// With five cards there can only be one quad or one trip.
#[derive(Default)]
struct RankGroups {
    quad: Option<u8>,
    trip: Option<u8>,
    pairs: Ranks,
    singles: Ranks,
}

impl RankGroups {
    fn new(cards: &[Card]) -> Self {
        let mut counts = [0u8; 15];
        for card in cards {
            counts[card.rank_value() as usize] += 1;
        }

        let mut groups = Self::default();
        for rank in (2..=14).rev() {
            match counts[rank as usize] {
                4 => groups.quad = Some(rank),
                3 => groups.trip = Some(rank),
                2 => groups.pairs.push(rank),
                1 => groups.singles.push(rank),
                _ => {}
            }
        }

        groups
    }
}
