// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Five cards hand classifier.
use std::cmp::Reverse;

use pokerhands_cards::{Card, Rank};

use super::{
    HandRank,
    analysis::{self, Pairs, RankCount},
};

/// Classifies a five cards hand.
///
/// The categories are tested from the strongest to the weakest and the first
/// match is returned with its tie breaking ranks. Ace is only high so that
/// A-5-4-3-2 is not a straight.
///
/// This function never fails, a hand with a number of cards other than 5
/// returns [HandRank::NotRankable] with a copy of the cards. Cards are not
/// checked for duplicates.
///
/// ```
/// # use pokerhands_eval::*;
/// let cards = parse_cards("6S 6D 6C 4H 4S").unwrap();
/// assert!(matches!(
///     classify(&cards),
///     HandRank::FullHouse { trips: Rank::Six, pair: Rank::Four }
/// ));
/// ```
pub fn classify(cards: &[Card]) -> HandRank {
    let Ok(mut hand) = <[Card; 5]>::try_from(cards) else {
        return HandRank::NotRankable(cards.to_vec());
    };

    // Stable, cards with the same rank keep their input order.
    hand.sort_by_key(|c| Reverse(c.rank()));

    let top = hand[0];
    if analysis::is_straight_flush(&hand) {
        return match top.rank() {
            Rank::Ace => HandRank::RoyalFlush(top.suit()),
            rank => HandRank::StraightFlush(rank),
        };
    }

    let counts = RankCount::new(&hand);

    if counts.four_of_a_kind().is_some() {
        // The middle card is part of the quad for both XXXXY and YXXXX.
        return HandRank::FourOfAKind(hand[2].rank());
    }

    if let Some((trips, pair)) = counts.full_house() {
        return HandRank::FullHouse { trips, pair };
    }

    if analysis::is_same_suit(&hand) {
        return HandRank::Flush(analysis::ranks(&hand));
    }

    if analysis::is_sequence(&hand) {
        return HandRank::Straight(top.rank());
    }

    if let Some(trips) = counts.three_of_a_kind() {
        return HandRank::ThreeOfAKind(trips);
    }

    match counts.pairs() {
        Pairs::Two { high, low, kicker } => HandRank::TwoPair { high, low, kicker },
        Pairs::One { pair, kickers } => HandRank::OnePair { pair, kickers },
        Pairs::None => HandRank::HighCard(analysis::ranks(&hand)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::eval::Category;
    use ahash::HashMap;
    use pokerhands_cards::{Deck, Rank::*, Suit, parse_cards};
    use rand::prelude::*;
    use std::cmp::Ordering;

    fn classify_str(s: &str) -> HandRank {
        classify(&parse_cards(s).unwrap())
    }

    #[test]
    fn royal_flush() {
        let rank = classify_str("AS KS QS JS TS");
        assert!(matches!(rank, HandRank::RoyalFlush(Suit::Spades)));

        // Order doesn't matter.
        let rank = classify_str("TH QH AH JH KH");
        assert!(matches!(rank, HandRank::RoyalFlush(Suit::Hearts)));
    }

    #[test]
    fn straight_flush() {
        let rank = classify_str("9D 5D 8D 6D 7D");
        assert!(matches!(rank, HandRank::StraightFlush(Nine)));

        let rank = classify_str("KC QC JC TC 9C");
        assert!(matches!(rank, HandRank::StraightFlush(King)));
    }

    #[test]
    fn four_of_a_kind() {
        let rank = classify_str("9D 9C 9S 9H 2C");
        assert!(matches!(rank, HandRank::FourOfAKind(Nine)));

        let rank = classify_str("2D AC 2S 2H 2C");
        assert!(matches!(rank, HandRank::FourOfAKind(Deuce)));
    }

    #[test]
    fn full_house() {
        let rank = classify_str("6S 6D 6C 4H 4S");
        assert!(matches!(
            rank,
            HandRank::FullHouse {
                trips: Six,
                pair: Four
            }
        ));

        let rank = classify_str("KS 3D KC 3H 3S");
        assert!(matches!(
            rank,
            HandRank::FullHouse {
                trips: Trey,
                pair: King
            }
        ));
    }

    #[test]
    fn flush() {
        let rank = classify_str("2C 4C 6C 8C KC");
        assert!(matches!(
            rank,
            HandRank::Flush([King, Eight, Six, Four, Deuce])
        ));

        // The wheel is not a straight flush.
        let rank = classify_str("AD 2D 3D 4D 5D");
        assert!(matches!(rank, HandRank::Flush([Ace, Five, Four, Trey, Deuce])));
    }

    #[test]
    fn straight() {
        let rank = classify_str("AS KD QS JC TS");
        assert!(matches!(rank, HandRank::Straight(Ace)));

        let rank = classify_str("2S 3H 4D 5C 6S");
        assert!(matches!(rank, HandRank::Straight(Six)));
    }

    #[test]
    fn wheel_is_not_a_straight() {
        let rank = classify_str("AS 5H 4D 3C 2S");
        assert!(matches!(
            rank,
            HandRank::HighCard([Ace, Five, Four, Trey, Deuce])
        ));
    }

    #[test]
    fn three_of_a_kind() {
        let rank = classify_str("QS 2D QC 7H QH");
        assert!(matches!(rank, HandRank::ThreeOfAKind(Queen)));
    }

    #[test]
    fn two_pair() {
        let rank = classify_str("7D 7C 3S 3H 9C");
        assert!(matches!(
            rank,
            HandRank::TwoPair {
                high: Seven,
                low: Trey,
                kicker: Nine
            }
        ));

        let rank = classify_str("2D 4C 2S 4H AC");
        assert!(matches!(
            rank,
            HandRank::TwoPair {
                high: Four,
                low: Deuce,
                kicker: Ace
            }
        ));
    }

    #[test]
    fn one_pair() {
        let rank = classify_str("5D JC 2S 5H 9C");
        assert!(matches!(
            rank,
            HandRank::OnePair {
                pair: Five,
                kickers: [Jack, Nine, Deuce]
            }
        ));
    }

    #[test]
    fn high_card() {
        let rank = classify_str("2S 5H 9D JC KS");
        assert!(matches!(
            rank,
            HandRank::HighCard([King, Jack, Nine, Five, Deuce])
        ));
    }

    #[test]
    fn not_rankable() {
        for s in ["", "AS", "AS KS QS JS", "AS KS QS JS TS 9S"] {
            let cards = parse_cards(s).unwrap();
            match classify(&cards) {
                HandRank::NotRankable(c) => assert_eq!(c, cards),
                rank => panic!("{s} classified as {rank}"),
            }
        }
    }

    #[test]
    fn duplicate_cards_are_total() {
        // Invalid hands still get a classification.
        let rank = classify_str("AS AS AS AS AS");
        assert!(matches!(rank, HandRank::Flush([Ace, Ace, Ace, Ace, Ace])));

        let rank = classify_str("AS AH AS AH AC");
        assert!(matches!(rank, HandRank::HighCard(_)));
    }

    #[test]
    fn deterministic() {
        let cards = parse_cards("QS 2D QC 7H 8H").unwrap();
        let first = classify(&cards);
        for _ in 0..10 {
            let rank = classify(&cards);
            assert_eq!(rank.try_cmp(&first), Ok(Ordering::Equal));
            assert_eq!(rank.tie_breaks(), first.tie_breaks());
        }
    }

    #[test]
    fn all_hands_counts() {
        let mut counts = HashMap::<Category, usize>::default();
        Deck::default().for_each(5, |hand| {
            *counts.entry(classify(hand).category()).or_default() += 1;
        });

        // Ace is only high, so the 4 suited wheels are flushes and the 1020
        // unsuited wheels are high cards.
        let expected = [
            (Category::RoyalFlush, 4),
            (Category::StraightFlush, 32),
            (Category::FourOfAKind, 624),
            (Category::FullHouse, 3_744),
            (Category::Flush, 5_112),
            (Category::Straight, 9_180),
            (Category::ThreeOfAKind, 54_912),
            (Category::TwoPair, 123_552),
            (Category::OnePair, 1_098_240),
            (Category::HighCard, 1_303_560),
        ];

        for (category, count) in expected {
            assert_eq!(counts.get(&category), Some(&count), "{category}");
        }

        assert_eq!(counts.get(&Category::NotRankable), None);
        assert_eq!(counts.values().sum::<usize>(), 2_598_960);
    }

    #[test]
    fn input_order_doesnt_matter() {
        let mut rng = SmallRng::seed_from_u64(7);
        Deck::default().sample(1_000, 5, &mut rng.clone(), |hand| {
            let rank = classify(hand);

            let mut shuffled = hand.to_vec();
            shuffled.shuffle(&mut rng);
            let other = classify(&shuffled);

            assert_eq!(rank.category(), other.category());
            assert_eq!(rank.try_cmp(&other), Ok(Ordering::Equal));
        });
    }

    #[test]
    fn total_order() {
        let mut hands = Vec::new();
        Deck::default().sample(100, 5, &mut SmallRng::seed_from_u64(11), |hand| {
            hands.push(classify(hand));
        });

        for a in &hands {
            assert_eq!(a.try_cmp(a), Ok(Ordering::Equal));

            for b in &hands {
                let ab = a.try_cmp(b).unwrap();
                assert_eq!(b.try_cmp(a).unwrap(), ab.reverse());

                for c in &hands {
                    if ab == Ordering::Greater && b > c {
                        assert!(a > c, "{a} > {b} > {c}");
                    }
                }
            }
        }

        // Sorting by strength keeps categories grouped and ordered.
        hands.sort_by(|a, b| a.try_cmp(b).unwrap());
        assert!(hands.windows(2).all(|w| {
            w[0].category().ordinal() <= w[1].category().ordinal()
        }));
    }

    #[test]
    fn stronger_hand_wins() {
        let pairs = [
            ("AS KS QS JS TS", "KH QH JH TH 9H"),
            ("KH QH JH TH 9H", "AD AC AS AH KC"),
            ("2D 2C 2S 2H 3C", "AS AH AD KS KH"),
            ("3S 3H 3D 2S 2H", "AS KS QS JS 9S"),
            ("7C 5C 4C 3C 2C", "AS KD QS JC TS"),
            ("6S 5H 4D 3C 2S", "AS AH AD KS QH"),
            ("2S 2H 2D 4S 3H", "AS AH KD KS QH"),
            ("3S 3H 2D 2S 4H", "AS AH KD QS JH"),
            ("2S 2H 3D 4S 5H", "AS KH QD JS 9H"),
            ("AS KH QD JS 9H", "AD KC QH JC 8H"),
        ];

        for (strong, weak) in pairs {
            let (s, w) = (classify_str(strong), classify_str(weak));
            assert!(s > w, "{strong} > {weak}");
            assert_eq!(w.try_cmp(&s), Ok(Ordering::Less));
        }

        // Same rank multiset, different suits.
        let a = classify_str("2C 4C 6C 8C KC");
        let b = classify_str("2H 4H 6H 8H KH");
        assert_eq!(a, b);
    }
}
