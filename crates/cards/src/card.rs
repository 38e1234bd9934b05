// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Poker cards definitions.
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use thiserror::Error;

/// Primes used to encode a card rank.
const PRIMES: [u32; 13] = [2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41];

/// Errors returned when building a card from raw values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CardError {
    /// The rank is not in 2..=14.
    #[error("invalid rank {0}, expected 2..=14")]
    InvalidRank(u8),
    /// The suit is not in 0..=3.
    #[error("invalid suit {0}, expected 0..=3")]
    InvalidSuit(u8),
    /// The string is not a two characters card like `AS` or `Td`.
    #[error("invalid card '{0}'")]
    Parse(String),
    /// The value is not a card encoding.
    #[error("invalid card id 0x{0:08x}")]
    InvalidId(u32),
}

/// A Poker card.
///
/// A card is represented using a variant of the [Cactus Kev's][kevlink]
/// encoding with each card having the following format:
///
/// ```text
///   +--------+--------+--------+--------+
///   |xxxbbbbb|bbbbbbbb|shdcrrrr|xxpppppp|
///   +--------+--------+--------+--------+
///   p = prime number of rank (deuce=2,trey=3,four=5,five=7,...,ace=41)
///   r = rank of card (deuce=2,trey=3,four=4,five=5,...,ace=14)
///   shdc = suit bit (clubs=0x1,diamonds=0x2,hearts=0x4,spades=0x8)
///   b = bit turned on depending on rank of card (deuce=bit 16)
/// ```
///
/// [kevlink]: http://suffe.cool/poker/evaluator.html
#[derive(Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct Card(u32);

impl Card {
    /// Create a card given a suit and rank.
    pub fn new(rank: Rank, suit: Suit) -> Card {
        let (rank, suit) = (rank as u32, suit as u32);
        Self(PRIMES[rank as usize - 2] | (rank << 8) | (1 << (suit + 12)) | (1 << (rank + 14)))
    }

    /// Create a card from a raw rank in 2..=14 and a raw suit in 0..=3.
    pub fn encode(rank: u8, suit: u8) -> Result<Card, CardError> {
        Ok(Card::new(Rank::try_from(rank)?, Suit::try_from(suit)?))
    }

    /// Returns the raw rank and suit, the inverse of [Card::encode].
    pub fn decode(&self) -> (u8, u8) {
        (self.rank_value(), self.suit() as u8)
    }

    /// This card unique id.
    pub fn id(&self) -> u32 {
        self.0
    }

    /// Returns the card rank.
    pub fn rank(&self) -> Rank {
        // The encoding only ever stores valid ranks.
        Rank::ALL[self.rank_value() as usize - 2]
    }

    /// Returns the card suit.
    pub fn suit(&self) -> Suit {
        match self.suit_bit() {
            0x1 => Suit::Clubs,
            0x2 => Suit::Diamonds,
            0x4 => Suit::Hearts,
            0x8 => Suit::Spades,
            _ => panic!("Invalid suit value 0x{:x}", self.0),
        }
    }

    /// Returns the rank value, 2 for a deuce up to 14 for an ace.
    #[inline]
    pub fn rank_value(&self) -> u8 {
        ((self.0 >> 8) & 0xf) as u8
    }

    /// Returns the rank bit, bit 0 for a deuce up to bit 12 for an ace.
    #[inline]
    pub fn rank_bit(&self) -> u16 {
        (self.0 >> 16) as u16
    }

    /// Returns the suit bit.
    #[inline]
    pub fn suit_bit(&self) -> u8 {
        ((self.0 >> 12) & 0xf) as u8
    }

    /// Returns the rank prime.
    #[inline]
    pub fn prime(&self) -> u32 {
        self.0 & 0x3f
    }

    /// The long card name, for example "Ace of Spades".
    pub fn name(&self) -> String {
        format!("{} of {}", self.rank().name(), self.suit().name())
    }
}

impl TryFrom<u32> for Card {
    type Error = CardError;

    fn try_from(id: u32) -> Result<Self, Self::Error> {
        let rank = ((id >> 8) & 0xf) as u8;
        let suit = match (id >> 12) & 0xf {
            0x1 => 0,
            0x2 => 1,
            0x4 => 2,
            0x8 => 3,
            _ => return Err(CardError::InvalidId(id)),
        };

        match Card::encode(rank, suit) {
            Ok(card) if card.0 == id => Ok(card),
            _ => Err(CardError::InvalidId(id)),
        }
    }
}

impl From<Card> for u32 {
    fn from(card: Card) -> u32 {
        card.0
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank(), self.suit())
    }
}

impl fmt::Debug for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Card({}{})", self.rank(), self.suit())
    }
}

impl FromStr for Card {
    type Err = CardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let (Some(r), Some(u), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(CardError::Parse(s.to_string()));
        };

        let rank = Rank::ranks().find(|rank| rank.symbol() == r.to_ascii_uppercase());
        let suit = Suit::suits().find(|suit| suit.symbol() == u.to_ascii_uppercase());

        match (rank, suit) {
            (Some(rank), Some(suit)) => Ok(Card::new(rank, suit)),
            _ => Err(CardError::Parse(s.to_string())),
        }
    }
}

/// Card rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rank {
    /// Deuce
    Deuce = 2,
    /// Trey
    Trey,
    /// Four
    Four,
    /// Five
    Five,
    /// Six
    Six,
    /// Seven
    Seven,
    /// Eight
    Eight,
    /// Nine
    Nine,
    /// Ten
    Ten,
    /// Jack
    Jack,
    /// Queen
    Queen,
    /// King
    King,
    /// Ace
    Ace,
}

impl Rank {
    const ALL: [Rank; 13] = {
        use Rank::*;
        [
            Deuce, Trey, Four, Five, Six, Seven, Eight, Nine, Ten, Jack, Queen, King, Ace,
        ]
    };

    /// Returns all ranks.
    pub fn ranks() -> impl DoubleEndedIterator<Item = Rank> {
        Self::ALL.into_iter()
    }

    /// The rank value, 2 for a deuce up to 14 for an ace.
    pub fn value(&self) -> u8 {
        *self as u8
    }

    /// The rank name.
    pub fn name(&self) -> &'static str {
        match self {
            Rank::Deuce => "Deuce",
            Rank::Trey => "Trey",
            Rank::Four => "Four",
            Rank::Five => "Five",
            Rank::Six => "Six",
            Rank::Seven => "Seven",
            Rank::Eight => "Eight",
            Rank::Nine => "Nine",
            Rank::Ten => "Ten",
            Rank::Jack => "Jack",
            Rank::Queen => "Queen",
            Rank::King => "King",
            Rank::Ace => "Ace",
        }
    }

    fn symbol(&self) -> char {
        match self {
            Rank::Deuce => '2',
            Rank::Trey => '3',
            Rank::Four => '4',
            Rank::Five => '5',
            Rank::Six => '6',
            Rank::Seven => '7',
            Rank::Eight => '8',
            Rank::Nine => '9',
            Rank::Ten => 'T',
            Rank::Jack => 'J',
            Rank::Queen => 'Q',
            Rank::King => 'K',
            Rank::Ace => 'A',
        }
    }
}

impl TryFrom<u8> for Rank {
    type Error = CardError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            2..=14 => Ok(Self::ALL[value as usize - 2]),
            _ => Err(CardError::InvalidRank(value)),
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Card suit.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Suit {
    /// Clubs suit.
    Clubs = 0,
    /// Diamonds suit.
    Diamonds = 1,
    /// Hearts suit.
    Hearts = 2,
    /// Spades suit.
    Spades = 3,
}

impl Suit {
    /// Returns all suits.
    pub fn suits() -> impl DoubleEndedIterator<Item = Suit> {
        [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades].into_iter()
    }

    /// The suit name.
    pub fn name(&self) -> &'static str {
        match self {
            Suit::Clubs => "Clubs",
            Suit::Diamonds => "Diamonds",
            Suit::Hearts => "Hearts",
            Suit::Spades => "Spades",
        }
    }

    fn symbol(&self) -> char {
        match self {
            Suit::Clubs => 'C',
            Suit::Diamonds => 'D',
            Suit::Hearts => 'H',
            Suit::Spades => 'S',
        }
    }
}

impl TryFrom<u8> for Suit {
    type Error = CardError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Suit::Clubs),
            1 => Ok(Suit::Diamonds),
            2 => Ok(Suit::Hearts),
            3 => Ok(Suit::Spades),
            _ => Err(CardError::InvalidSuit(value)),
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ahash::HashSet;

    #[test]
    fn card_encoding() {
        let mut ids = HashSet::default();

        for suit in Suit::suits() {
            for rank in Rank::ranks() {
                let card = Card::new(rank, suit);
                assert_eq!(card.id() & 0xFF, PRIMES[rank as usize - 2]);
                assert_eq!(card.prime(), PRIMES[rank as usize - 2]);
                assert_eq!((card.id() >> 8) & 0xF, rank as u32);
                assert_eq!((card.id() >> 12) & 0xF, 1 << (suit as u32));
                assert_eq!(card.id() >> 16, 1 << (rank as u32 - 2));
                assert_eq!(card.rank(), rank);
                assert_eq!(card.suit(), suit);
                ids.insert(card.id());
            }
        }

        // Check uniquness.
        assert_eq!(ids.len(), 52);

        let kd = Card::new(Rank::King, Suit::Diamonds);
        assert_eq!(kd.id(), 0x08002d25);
        assert_eq!(kd.rank_bit(), 1 << 11);
        assert_eq!(kd.suit_bit(), 0x2);
    }

    #[test]
    fn encode_decode() {
        for rank in 2..=14 {
            for suit in 0..=3 {
                let card = Card::encode(rank, suit).unwrap();
                assert_eq!(card.decode(), (rank, suit));
                assert_eq!(card.rank_value(), rank);
            }
        }
    }

    #[test]
    fn encode_invalid() {
        assert_eq!(Card::encode(1, 0), Err(CardError::InvalidRank(1)));
        assert_eq!(Card::encode(15, 0), Err(CardError::InvalidRank(15)));
        assert_eq!(Card::encode(0, 2), Err(CardError::InvalidRank(0)));
        assert_eq!(Card::encode(10, 4), Err(CardError::InvalidSuit(4)));
    }

    #[test]
    fn card_from_id() {
        for suit in Suit::suits() {
            for rank in Rank::ranks() {
                let card = Card::new(rank, suit);
                assert_eq!(Card::try_from(card.id()), Ok(card));
                assert_eq!(u32::from(card), card.id());
            }
        }

        let kd = Card::new(Rank::King, Suit::Diamonds).id();
        for id in [0, 1, 0xffff_ffff, kd ^ 0x1, kd | 0x4000, kd ^ (1 << 20)] {
            assert_eq!(Card::try_from(id), Err(CardError::InvalidId(id)));
        }

        // Rank 0 and 15 in an otherwise valid layout.
        assert!(Card::try_from(0x1000).is_err());
        assert!(Card::try_from(0x1f00).is_err());
        assert_eq!(
            CardError::InvalidId(0x1f00).to_string(),
            "invalid card id 0x00001f00"
        );
    }

    #[test]
    fn card_to_string() {
        let c = Card::new(Rank::King, Suit::Diamonds);
        assert_eq!(c.to_string(), "KD");
        assert_eq!(c.name(), "King of Diamonds");

        let c = Card::new(Rank::Five, Suit::Spades);
        assert_eq!(c.to_string(), "5S");

        let c = Card::new(Rank::Ten, Suit::Hearts);
        assert_eq!(c.to_string(), "TH");

        let c = Card::new(Rank::Ace, Suit::Clubs);
        assert_eq!(c.to_string(), "AC");
        assert_eq!(c.name(), "Ace of Clubs");
    }

    #[test]
    fn parse_card() {
        assert_eq!("AS".parse(), Ok(Card::new(Rank::Ace, Suit::Spades)));
        assert_eq!("td".parse(), Ok(Card::new(Rank::Ten, Suit::Diamonds)));
        assert_eq!("2c".parse(), Ok(Card::new(Rank::Deuce, Suit::Clubs)));

        assert!(matches!("1S".parse::<Card>(), Err(CardError::Parse(_))));
        assert!(matches!("AX".parse::<Card>(), Err(CardError::Parse(_))));
        assert!(matches!("ASK".parse::<Card>(), Err(CardError::Parse(_))));
        assert!(matches!("".parse::<Card>(), Err(CardError::Parse(_))));
    }
}
