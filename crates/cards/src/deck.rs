// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! A cards deck.
use rand::prelude::*;

use crate::{Card, Rank, Suit};

#[cfg(feature = "parallel")]
mod parallel;

/// A cards Deck
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// The number of cards in the deck.
    pub const SIZE: usize = 52;

    /// Creates a new shuffled deck.
    pub fn new_and_shuffled<R: Rng>(rng: &mut R) -> Self {
        let mut deck = Self::default();
        deck.shuffle(rng);
        deck
    }

    /// Shuffles the cards left in the deck.
    pub fn shuffle<R: Rng>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }

    /// Deals a card from the deck, returns `None` if the deck is empty.
    pub fn deal(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Checks if the deck is empty.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Number of cards in the deck.
    pub fn count(&self) -> usize {
        self.cards.len()
    }

    /// Removes a card from the deck.
    pub fn remove(&mut self, card: Card) {
        self.cards.retain(|c| c != &card);
    }

    /// Calls the `f` closure for each k-cards hand.
    ///
    /// Hands are generated in lexicographic order of the cards positions in
    /// the deck, each unordered hand exactly once.
    ///
    /// Panics if k is not 2 <= k <= 7.
    pub fn for_each<F>(&self, k: usize, mut f: F)
    where
        F: FnMut(&[Card]),
    {
        assert!((2..=7).contains(&k), "2 <= k <= 7");

        for first in 0..self.cards.len() {
            self.for_each_from(first, k, &mut f);
        }
    }

    /// Calls the `f` closure for each k-cards hand whose lowest deck position
    /// is `first`.
    ///
    /// Calling this for every `first` in `0..count()` visits the same hands
    /// as [Deck::for_each].
    ///
    /// Panics if k is not 2 <= k <= 7.
    pub fn for_each_from<F>(&self, first: usize, k: usize, mut f: F)
    where
        F: FnMut(&[Card]),
    {
        assert!((2..=7).contains(&k), "2 <= k <= 7");

        let n = self.cards.len();
        if first + k > n {
            return;
        }

        let mut h = [Card::new(Rank::Ace, Suit::Hearts); 7];
        h[0] = self.cards[first];
        self.combine(first + 1, 1, &mut h[..k], &mut f);
    }

    /// Fills positions `depth..` of `h` with cards after deck position `start`.
    fn combine<F>(&self, start: usize, depth: usize, h: &mut [Card], f: &mut F)
    where
        F: FnMut(&[Card]),
    {
        if depth == h.len() {
            f(h);
            return;
        }

        // Leave enough cards for the remaining positions.
        let end = self.cards.len() + depth + 1 - h.len();
        for pos in start..end {
            h[depth] = self.cards[pos];
            self.combine(pos + 1, depth + 1, h, f);
        }
    }
}

impl Default for Deck {
    fn default() -> Self {
        let cards = Suit::suits()
            .flat_map(|s| Rank::ranks().map(move |r| Card::new(r, s)))
            .collect::<Vec<_>>();
        Self { cards }
    }
}

impl IntoIterator for Deck {
    type Item = Card;
    type IntoIter = std::vec::IntoIter<Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ahash::HashSet;
    use rand::{SeedableRng, rngs::StdRng};

    #[test]
    fn deal_all_cards() {
        let mut cards = HashSet::default();
        let mut deck = Deck::new_and_shuffled(&mut rand::rng());
        assert_eq!(deck.count(), Deck::SIZE);

        while let Some(card) = deck.deal() {
            cards.insert(card);
        }

        assert!(deck.is_empty());
        assert_eq!(deck.deal(), None);
        assert_eq!(cards.len(), Deck::SIZE);
    }

    #[test]
    fn seeded_shuffle() {
        let d1 = Deck::new_and_shuffled(&mut StdRng::seed_from_u64(7));
        let d2 = Deck::new_and_shuffled(&mut StdRng::seed_from_u64(7));
        let d3 = Deck::new_and_shuffled(&mut StdRng::seed_from_u64(8));

        let d1 = d1.into_iter().collect::<Vec<_>>();
        assert_eq!(d1, d2.into_iter().collect::<Vec<_>>());
        assert_ne!(d1, d3.into_iter().collect::<Vec<_>>());
    }

    #[test]
    fn deck_for_each() {
        let deck = Deck::default();

        let mut hands = HashSet::default();
        deck.for_each(5, |cards| {
            assert_eq!(cards.len(), 5);
            hands.insert(cards.to_owned());
        });
        assert_eq!(hands.len(), 2_598_960);

        hands.clear();
        deck.for_each(2, |cards| {
            assert_eq!(cards.len(), 2);
            assert_ne!(cards[0], cards[1]);
            hands.insert(cards.to_owned());
        });
        assert_eq!(hands.len(), 1_326);

        hands.clear();
        deck.for_each(3, |cards| {
            assert_eq!(cards.len(), 3);
            hands.insert(cards.to_owned());
        });
        assert_eq!(hands.len(), 22_100);
    }

    #[test]
    fn deck_for_each_from() {
        let deck = Deck::default();

        // Hands starting from the first card choose 4 out of the other 51.
        let mut count = 0;
        deck.for_each_from(0, 5, |cards| {
            assert_eq!(cards[0], Card::new(Rank::Deuce, Suit::Clubs));
            count += 1;
        });
        assert_eq!(count, 249_900);

        // Not enough cards after the last four positions.
        count = 0;
        deck.for_each_from(48, 5, |_| count += 1);
        assert_eq!(count, 0);

        count = 0;
        deck.for_each_from(47, 5, |_| count += 1);
        assert_eq!(count, 1);

        let total = (0..deck.count())
            .map(|first| {
                let mut count = 0;
                deck.for_each_from(first, 5, |_| count += 1);
                count
            })
            .sum::<usize>();
        assert_eq!(total, 2_598_960);
    }

    #[test]
    fn deck_for_each_remove() {
        let mut deck = Deck::default();
        deck.remove(Card::new(Rank::Ace, Suit::Diamonds));
        deck.remove(Card::new(Rank::King, Suit::Diamonds));
        assert_eq!(deck.count(), 50);

        let mut count = 0;
        deck.for_each(5, |cards| {
            assert!(!cards.contains(&Card::new(Rank::Ace, Suit::Diamonds)));
            count += 1;
        });
        assert_eq!(count, 2_118_760);
    }

    #[test]
    #[should_panic(expected = "2 <= k <= 7")]
    fn deck_for_each_invalid_k() {
        Deck::default().for_each(8, |_| {});
    }
}
