// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Canonical table of five cards hand classes.
//!
//! The table is built by classifying all the 2,598,960 five cards hands in a
//! deck, the distinct classes are sorted from the strongest to the weakest and
//! numbered from 1, so that a royal flush has index 1 and 7-5-4-3-2 offsuit has
//! index 7462.
use ahash::{AHashMap, AHashSet};
use log::info;
use serde::{Deserialize, Serialize};
use std::{fmt, time::Instant};

use crate::{Category, Deck, Error, HandClass, Result};

/// The position of a hand class in the canonical table.
///
/// A lower index is a stronger hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct HandIndex(u16);

impl HandIndex {
    /// The index of a royal flush.
    pub const BEST: HandIndex = HandIndex(1);

    /// The index of 7-5-4-3-2 offsuit.
    pub const WORST: HandIndex = HandIndex(CanonicalTable::SIZE as u16);

    /// The index value in 1..=7462.
    pub fn get(&self) -> u16 {
        self.0
    }
}

impl fmt::Display for HandIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// All distinct hand classes sorted from the strongest to the weakest.
///
/// The table is immutable once built and can be shared among threads.
#[derive(Debug)]
pub struct CanonicalTable {
    classes: Vec<HandClass>,
    index: AHashMap<HandClass, HandIndex>,
}

impl CanonicalTable {
    /// The number of distinct five cards hand classes.
    pub const SIZE: usize = 7462;

    /// Builds the table by classifying all five cards hands.
    ///
    /// Panics if the number of distinct classes is not [Self::SIZE].
    pub fn build() -> Self {
        let now = Instant::now();

        let mut classes = AHashSet::with_capacity(Self::SIZE);
        Deck::default().for_each(5, |hand| {
            classes.insert(HandClass::from_cards(hand));
        });

        let table = Self::from_classes(classes);
        info!(
            "Canonical table built with {} classes in {:.3}s",
            table.len(),
            now.elapsed().as_secs_f64()
        );

        table
    }

    /// Builds the table splitting the hands enumeration among `num_tasks`
    /// threads, see [Deck::par_for_each].
    ///
    /// Panics if `num_tasks` is 0 or if the number of distinct classes is not
    /// [Self::SIZE].
    #[cfg(feature = "parallel")]
    pub fn par_build(num_tasks: usize) -> Self {
        use parking_lot::Mutex;

        let now = Instant::now();

        // Per task sets, each lock is only taken by its own task.
        let task_classes = (0..num_tasks)
            .map(|_| Mutex::new(AHashSet::with_capacity(Self::SIZE)))
            .collect::<Vec<_>>();

        Deck::default().par_for_each(num_tasks, 5, |task_id, hand| {
            task_classes[task_id]
                .lock()
                .insert(HandClass::from_cards(hand));
        });

        let classes = task_classes
            .into_iter()
            .map(|set| set.into_inner())
            .inspect(|set| log::debug!("Shard found {} classes", set.len()))
            .reduce(|mut acc, set| {
                acc.extend(set);
                acc
            })
            .unwrap_or_default();

        let table = Self::from_classes(classes);
        info!(
            "Canonical table built with {} classes by {num_tasks} tasks in {:.3}s",
            table.len(),
            now.elapsed().as_secs_f64()
        );

        table
    }

    fn from_classes(classes: AHashSet<HandClass>) -> Self {
        let mut classes = classes.into_iter().collect::<Vec<_>>();
        assert_eq!(
            classes.len(),
            Self::SIZE,
            "Unexpected number of hand classes"
        );

        // Strongest first, classes are distinct so there are no ties.
        classes.sort_unstable_by(|a, b| b.cmp(a));

        let index = classes
            .iter()
            .enumerate()
            .map(|(pos, class)| (*class, HandIndex(pos as u16 + 1)))
            .collect();

        Self { classes, index }
    }

    /// Returns the index of a hand class.
    pub fn lookup(&self, class: &HandClass) -> Result<HandIndex> {
        self.index
            .get(class)
            .copied()
            .ok_or(Error::ClassNotFound(*class))
    }

    /// Returns the hand class at the given index.
    pub fn class(&self, index: HandIndex) -> Option<HandClass> {
        let pos = (index.0 as usize).checked_sub(1)?;
        self.classes.get(pos).copied()
    }

    /// Returns the first and last index for the hands of a category.
    pub fn category_range(&self, category: Category) -> Option<(HandIndex, HandIndex)> {
        let first = self.classes.iter().position(|c| c.category() == category)?;
        let last = self.classes.iter().rposition(|c| c.category() == category)?;
        Some((HandIndex(first as u16 + 1), HandIndex(last as u16 + 1)))
    }

    /// Number of classes in the table.
    pub fn len(&self) -> usize {
        self.classes.len()
    }

    /// Checks if the table is empty, a built table never is.
    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    /// Iterates the classes from the strongest to the weakest.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &HandClass> {
        self.classes.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Card;
    use std::{cmp::Ordering, sync::LazyLock};

    static TABLE: LazyLock<CanonicalTable> = LazyLock::new(CanonicalTable::build);

    fn index(s: &str) -> u16 {
        let cards = s
            .split_whitespace()
            .map(|c| c.parse().unwrap())
            .collect::<Vec<Card>>();
        let class = HandClass::classify(&cards).unwrap();
        TABLE.lookup(&class).unwrap().get()
    }

    #[test]
    fn table_size() {
        assert_eq!(TABLE.len(), CanonicalTable::SIZE);
        assert_eq!(TABLE.iter().len(), 7462);
        assert!(!TABLE.is_empty());
    }

    #[test]
    fn best_and_worst() {
        assert_eq!(index("AS KS QS JS TS"), 1);
        assert_eq!(index("KH AH QH TH JH"), 1);
        assert_eq!(index("9S KS QS JS TS"), 2);
        assert_eq!(index("7C 5D 4H 3S 2S"), 7462);
        assert_eq!(index("7C 6D 4H 3S 2S"), 7461);
        assert_eq!(index("8C 5D 4H 3S 2S"), 7458);

        // Smallest pair is right above the best high card.
        assert_eq!(index("2C 2D 3H 4S 5S"), 7462 - 1277);
        assert_eq!(index("AC KD QH JS 9S"), 7462 - 1277 + 1);
    }

    #[test]
    fn well_known_indices() {
        // Worst straight flush and best quads.
        assert_eq!(index("5H 4H 3H 2H AH"), 10);
        assert_eq!(index("AC AD AH AS KC"), 11);
        // Worst quads and best full house.
        assert_eq!(index("2C 2D 2H 2S 3C"), 166);
        assert_eq!(index("AC AD AH KS KC"), 167);
        // Best flush.
        assert_eq!(index("AD KD QD JD 9D"), 323);
        // Best straight and the wheel.
        assert_eq!(index("AC KD QH JS TS"), 1600);
        assert_eq!(index("AC 2D 3H 4S 5S"), 1609);
    }

    #[test]
    fn category_counts() {
        let expected = [10, 156, 156, 1277, 10, 858, 858, 2860, 1277];
        let mut first = 1;
        for (category, count) in Category::categories().zip(expected) {
            let n = TABLE.iter().filter(|c| c.category() == category).count();
            assert_eq!(n, count, "{category}");

            let (lo, hi) = TABLE.category_range(category).unwrap();
            assert_eq!(lo.get(), first, "{category}");
            assert_eq!((hi.get() - lo.get() + 1) as usize, count, "{category}");
            first = hi.get() + 1;
        }
    }

    #[test]
    fn strictly_decreasing() {
        // Adjacent classes are strictly ordered, which by transitivity orders
        // the whole table.
        for pair in TABLE.iter().collect::<Vec<_>>().windows(2) {
            assert_eq!(pair[0].cmp(pair[1]), Ordering::Greater);
            assert_eq!(pair[1].cmp(pair[0]), Ordering::Less);
            assert_ne!(pair[0], pair[1]);
        }

        for class in TABLE.iter() {
            assert_eq!(class.cmp(class), Ordering::Equal);
        }
    }

    #[test]
    fn ordering_is_transitive() {
        let classes = TABLE.iter().step_by(97).collect::<Vec<_>>();
        for a in &classes {
            for b in &classes {
                for c in &classes {
                    if a > b && b > c {
                        assert!(a > c);
                    }
                }
            }
        }
    }

    #[test]
    fn lookup_class_roundtrip() {
        for (pos, class) in TABLE.iter().enumerate() {
            let index = TABLE.lookup(class).unwrap();
            assert_eq!(index.get() as usize, pos + 1);
            assert_eq!(TABLE.class(index), Some(*class));
        }

        assert_eq!(TABLE.class(HandIndex(0)), None);
        assert_eq!(TABLE.class(HandIndex(7463)), None);
        assert_eq!(TABLE.class(HandIndex::BEST).unwrap().kickers(), &[14]);
    }

    #[test]
    fn lookup_missing_class() {
        // Not a valid straight flush.
        let bogus = HandClass::new(Category::StraightFlush, &[&[4]]);
        assert_eq!(TABLE.lookup(&bogus), Err(Error::ClassNotFound(bogus)));

        let bogus = HandClass::new(Category::HighCard, &[&[20, 3, 2, 1, 0]]);
        let err = TABLE.lookup(&bogus).unwrap_err();
        assert_eq!(
            err.to_string(),
            "hand class High Card ?32?? not found in the canonical table"
        );
    }

    #[test]
    fn quads_beat_every_full_house() {
        let (_, worst_quads) = TABLE.category_range(Category::FourOfAKind).unwrap();
        let (best_boat, _) = TABLE.category_range(Category::FullHouse).unwrap();
        assert!(worst_quads < best_boat);

        let quads = TABLE.iter().filter(|c| c.category() == Category::FourOfAKind);
        let weakest = quads.min().unwrap();
        assert!(
            TABLE
                .iter()
                .filter(|c| c.category() == Category::FullHouse)
                .all(|boat| weakest > boat)
        );
    }

    #[test]
    fn rebuild_is_deterministic() {
        let table = CanonicalTable::build();
        assert!(table.iter().eq(TABLE.iter()));
        for class in table.iter() {
            assert_eq!(table.lookup(class), TABLE.lookup(class));
        }
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn par_build_matches_build() {
        for num_tasks in [1, 4, 9] {
            let table = CanonicalTable::par_build(num_tasks);
            assert!(table.iter().eq(TABLE.iter()));
        }
    }
}
