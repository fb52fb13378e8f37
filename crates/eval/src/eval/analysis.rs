// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Rank and suit analysis of a five cards hand.
//!
//! All the helpers expect the cards sorted by descending rank.
use pokerhands_cards::{Card, Rank};

/// Checks if each card rank is exactly one above the following card rank.
///
/// Ace is only high, the A-5-4-3-2 wheel is not a sequence.
pub(super) fn is_sequence(cards: &[Card]) -> bool {
    cards
        .windows(2)
        .all(|w| w[0].rank().value() == w[1].rank().value() + 1)
}

/// Checks if all cards have the same suit.
pub(super) fn is_same_suit(cards: &[Card]) -> bool {
    cards.windows(2).all(|w| w[0].suit() == w[1].suit())
}

/// Checks for a straight flush.
pub(super) fn is_straight_flush(cards: &[Card]) -> bool {
    is_sequence(cards) && is_same_suit(cards)
}

/// The ranks of the cards in hand order.
pub(super) fn ranks(cards: &[Card; 5]) -> [Rank; 5] {
    std::array::from_fn(|i| cards[i].rank())
}

/// The number of cards for each rank in a hand.
///
/// Ranks are stored in order of first appearance, for a hand sorted by
/// descending rank this is descending rank order, so that equal counts
/// are always visited from the highest rank.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) struct RankCount(Vec<(Rank, u8)>);

impl RankCount {
    /// Counts the ranks in a sorted hand.
    pub fn new(cards: &[Card]) -> Self {
        let mut counts = Vec::<(Rank, u8)>::with_capacity(cards.len());
        for card in cards {
            match counts.iter_mut().find(|(r, _)| *r == card.rank()) {
                Some((_, n)) => *n += 1,
                None => counts.push((card.rank(), 1)),
            }
        }

        Self(counts)
    }

    /// The number of distinct ranks.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// The first rank that appears exactly `n` times.
    pub fn first_with(&self, n: u8) -> Option<Rank> {
        self.0.iter().find(|(_, c)| *c == n).map(|(r, _)| *r)
    }

    /// All the ranks that appear exactly `n` times.
    pub fn all_with(&self, n: u8) -> impl Iterator<Item = Rank> + '_ {
        self.0.iter().filter(move |(_, c)| *c == n).map(|(r, _)| *r)
    }

    /// The quad rank.
    pub fn four_of_a_kind(&self) -> Option<Rank> {
        self.first_with(4)
    }

    /// The trips and pair ranks if the hand is made of only a trips and a pair.
    pub fn full_house(&self) -> Option<(Rank, Rank)> {
        if self.len() != 2 {
            return None;
        }

        self.first_with(3).zip(self.first_with(2))
    }

    /// The trips rank.
    pub fn three_of_a_kind(&self) -> Option<Rank> {
        self.first_with(3)
    }

    /// Splits the ranks into pairs and singles.
    pub fn pairs(&self) -> Pairs {
        let pairs = self.all_with(2).collect::<Vec<_>>();
        let singles = self.all_with(1).collect::<Vec<_>>();

        match (pairs.as_slice(), singles.as_slice()) {
            (&[high, low], &[kicker]) => Pairs::Two { high, low, kicker },
            (&[pair], &[k1, k2, k3]) => Pairs::One {
                pair,
                kickers: [k1, k2, k3],
            },
            _ => Pairs::None,
        }
    }
}

/// The pairs in a hand with their kickers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Pairs {
    /// Two pairs and a kicker.
    Two { high: Rank, low: Rank, kicker: Rank },
    /// One pair and three kickers.
    One { pair: Rank, kickers: [Rank; 3] },
    /// No pairs or any other pattern.
    None,
}
