// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Hand ranks and their strength ordering.
use serde::{Deserialize, Serialize};
use std::{cmp::Ordering, fmt};
use thiserror::Error;

use pokerhands_cards::{Card, Rank, Suit};

/// Errors from comparing hand ranks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EvalError {
    /// One of the compared hands is not a five cards hand.
    #[error("cannot compare a {len} cards hand, only 5 cards hands have a strength")]
    NotRankable {
        /// The number of cards in the hand.
        len: usize,
    },
}

/// A hand category, from the weakest to the strongest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    /// No pattern.
    HighCard = 0,
    /// One pair.
    OnePair,
    /// Two pairs.
    TwoPair,
    /// Three cards of the same rank.
    ThreeOfAKind,
    /// Five consecutive ranks.
    Straight,
    /// Five cards of the same suit.
    Flush,
    /// Three of a kind and a pair.
    FullHouse,
    /// Four cards of the same rank.
    FourOfAKind,
    /// Five consecutive ranks of the same suit.
    StraightFlush,
    /// Ace high straight flush.
    RoyalFlush,
    /// Not a 5 cards hand.
    NotRankable,
}

impl Category {
    /// The categories that have a strength, from the weakest to the strongest.
    pub const RANKABLE: [Category; 10] = [
        Category::HighCard,
        Category::OnePair,
        Category::TwoPair,
        Category::ThreeOfAKind,
        Category::Straight,
        Category::Flush,
        Category::FullHouse,
        Category::FourOfAKind,
        Category::StraightFlush,
        Category::RoyalFlush,
    ];

    /// The category strength, 0 for high card up to 9 for royal flush.
    ///
    /// Returns None for [Category::NotRankable].
    pub fn ordinal(&self) -> Option<u8> {
        match self {
            Category::NotRankable => None,
            c => Some(*c as u8),
        }
    }

    /// The category name.
    pub fn name(&self) -> &'static str {
        match self {
            Category::HighCard => "High Card",
            Category::OnePair => "One Pair",
            Category::TwoPair => "Two Pair",
            Category::ThreeOfAKind => "Three of a Kind",
            Category::Straight => "Straight",
            Category::Flush => "Flush",
            Category::FullHouse => "Full House",
            Category::FourOfAKind => "Four of a Kind",
            Category::StraightFlush => "Straight Flush",
            Category::RoyalFlush => "Royal Flush",
            Category::NotRankable => "Not Rankable",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The rank of a five cards hand.
///
/// Each variant carries the ranks needed to break ties with a hand of the
/// same category, in the order they are compared. Hands compare by category
/// first and then by their tie breaking ranks:
///
/// ```
/// # use pokerhands_eval::*;
/// let trips = HandRank::ThreeOfAKind(Rank::Deuce);
/// let pairs = HandRank::TwoPair {
///     high: Rank::Ace,
///     low: Rank::King,
///     kicker: Rank::Queen,
/// };
/// assert!(trips > pairs);
/// ```
///
/// A [HandRank::NotRankable] hand has no strength, comparison operators
/// treat it like a float NaN: it is neither less, greater nor equal to any
/// hand including itself. Use [HandRank::try_cmp] to get an error instead.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum HandRank {
    /// Ace high straight flush, the suit doesn't break ties.
    RoyalFlush(Suit),
    /// Straight flush with its highest rank.
    StraightFlush(Rank),
    /// Four of a kind with the quad rank.
    FourOfAKind(Rank),
    /// Full house.
    FullHouse {
        /// The three of a kind rank.
        trips: Rank,
        /// The pair rank.
        pair: Rank,
    },
    /// Flush with all the ranks in descending order.
    Flush([Rank; 5]),
    /// Straight with its highest rank.
    Straight(Rank),
    /// Three of a kind with the trips rank.
    ThreeOfAKind(Rank),
    /// Two pair.
    TwoPair {
        /// The higher pair rank.
        high: Rank,
        /// The lower pair rank.
        low: Rank,
        /// The kicker rank.
        kicker: Rank,
    },
    /// One pair.
    OnePair {
        /// The pair rank.
        pair: Rank,
        /// The kickers in descending order.
        kickers: [Rank; 3],
    },
    /// High card with all the ranks in descending order.
    HighCard([Rank; 5]),
    /// The cards of a hand that doesn't have 5 cards.
    NotRankable(Vec<Card>),
}

impl HandRank {
    /// The hand category.
    pub fn category(&self) -> Category {
        match self {
            HandRank::RoyalFlush(_) => Category::RoyalFlush,
            HandRank::StraightFlush(_) => Category::StraightFlush,
            HandRank::FourOfAKind(_) => Category::FourOfAKind,
            HandRank::FullHouse { .. } => Category::FullHouse,
            HandRank::Flush(_) => Category::Flush,
            HandRank::Straight(_) => Category::Straight,
            HandRank::ThreeOfAKind(_) => Category::ThreeOfAKind,
            HandRank::TwoPair { .. } => Category::TwoPair,
            HandRank::OnePair { .. } => Category::OnePair,
            HandRank::HighCard(_) => Category::HighCard,
            HandRank::NotRankable(_) => Category::NotRankable,
        }
    }

    /// Checks if this hand has a strength.
    pub fn is_rankable(&self) -> bool {
        !matches!(self, HandRank::NotRankable(_))
    }

    /// The ranks used to break ties within the same category, in comparison
    /// order.
    pub fn tie_breaks(&self) -> Vec<Rank> {
        match self {
            HandRank::RoyalFlush(_) | HandRank::NotRankable(_) => Vec::new(),
            HandRank::StraightFlush(r)
            | HandRank::FourOfAKind(r)
            | HandRank::Straight(r)
            | HandRank::ThreeOfAKind(r) => vec![*r],
            HandRank::FullHouse { trips, pair } => vec![*trips, *pair],
            HandRank::Flush(ranks) | HandRank::HighCard(ranks) => ranks.to_vec(),
            HandRank::TwoPair { high, low, kicker } => vec![*high, *low, *kicker],
            HandRank::OnePair { pair, kickers } => {
                let mut ranks = vec![*pair];
                ranks.extend_from_slice(kickers);
                ranks
            }
        }
    }

    /// The cards of a not rankable hand.
    pub fn cards(&self) -> Option<&[Card]> {
        match self {
            HandRank::NotRankable(cards) => Some(cards),
            _ => None,
        }
    }

    /// Compares the strength of two hands.
    ///
    /// Returns an error if any of the hands is not rankable.
    pub fn try_cmp(&self, other: &HandRank) -> Result<Ordering, EvalError> {
        let lhs = self.strength()?;
        let rhs = other.strength()?;
        Ok(lhs.cmp(&rhs))
    }

    fn strength(&self) -> Result<(u8, Vec<Rank>), EvalError> {
        match self.category().ordinal() {
            Some(ordinal) => Ok((ordinal, self.tie_breaks())),
            None => Err(EvalError::NotRankable {
                len: self.cards().map_or(0, <[Card]>::len),
            }),
        }
    }
}

impl PartialEq for HandRank {
    fn eq(&self, other: &Self) -> bool {
        self.try_cmp(other) == Ok(Ordering::Equal)
    }
}

impl PartialOrd for HandRank {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.try_cmp(other).ok()
    }
}

/// Formats ranks as `K-8-6-4-2`.
fn join_ranks(ranks: &[Rank]) -> String {
    ranks
        .iter()
        .map(|r| r.to_string())
        .collect::<Vec<_>>()
        .join("-")
}

impl fmt::Display for HandRank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let category = self.category();
        match self {
            HandRank::RoyalFlush(suit) => write!(f, "{category} {}", suit.symbol()),
            HandRank::StraightFlush(r) | HandRank::Straight(r) => {
                write!(f, "{category}, {}-high", r.name())
            }
            HandRank::FourOfAKind(r) | HandRank::ThreeOfAKind(r) => {
                write!(f, "{category}, {}", r.plural())
            }
            HandRank::FullHouse { trips, pair } => {
                write!(
                    f,
                    "{category}, {} full of {}",
                    trips.plural(),
                    pair.plural()
                )
            }
            HandRank::Flush(ranks) | HandRank::HighCard(ranks) => {
                write!(f, "{category}, {}", join_ranks(ranks))
            }
            HandRank::TwoPair { high, low, kicker } => write!(
                f,
                "{category}, {} and {}, {kicker} kicker",
                high.plural(),
                low.plural()
            ),
            HandRank::OnePair { pair, kickers } => write!(
                f,
                "{category}, {}, {} kickers",
                pair.plural(),
                join_ranks(kickers)
            ),
            HandRank::NotRankable(cards) => write!(f, "{category}, {} cards", cards.len()),
        }
    }
}
