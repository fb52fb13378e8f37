// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! A cards deck for dealing, sampling and enumerating hands.
use rand::prelude::*;

use crate::{Card, Rank, Suit};

/// A cards Deck
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// The number of cards in the deck.
    pub const SIZE: usize = 52;

    /// The largest hand size for [Deck::for_each] and [Deck::sample].
    pub const MAX_HAND: usize = 7;

    /// Creates a new shuffled deck.
    pub fn new_and_shuffled<R: Rng>(rng: &mut R) -> Self {
        let mut deck = Self::default();
        deck.cards.shuffle(rng);
        deck
    }

    /// Deals a card from the deck, returns None if the deck is empty.
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
    /// Hands are visited in lexicographic order of the deck positions.
    ///
    /// Panics if k is not 1 <= k <= 7.
    pub fn for_each<F>(&self, k: usize, mut f: F)
    where
        F: FnMut(&[Card]),
    {
        assert!((1..=Self::MAX_HAND).contains(&k), "1 <= k <= 7");

        let n = self.cards.len();
        if k > n {
            return;
        }

        let mut pos = (0..k).collect::<Vec<_>>();
        let mut hand = pos.iter().map(|&p| self.cards[p]).collect::<Vec<_>>();

        loop {
            f(&hand);

            // The rightmost position that can still move forward.
            let Some(i) = (0..k).rev().find(|&i| pos[i] < n - k + i) else {
                break;
            };

            pos[i] += 1;
            for j in (i + 1)..k {
                pos[j] = pos[j - 1] + 1;
            }

            for j in i..k {
                hand[j] = self.cards[pos[j]];
            }
        }
    }

    /// Calls the `f` closure for `n` random k-cards hands.
    ///
    /// Cards in a hand are distinct, hands may repeat across samples.
    ///
    /// Panics if k is not 1 <= k <= 7.
    pub fn sample<R, F>(&self, n: usize, k: usize, rng: &mut R, mut f: F)
    where
        R: Rng,
        F: FnMut(&[Card]),
    {
        assert!((1..=Self::MAX_HAND).contains(&k), "1 <= k <= 7");

        if k > self.cards.len() {
            return;
        }

        let mut hand = Vec::with_capacity(k);
        for _ in 0..n {
            hand.clear();
            hand.extend(self.cards.choose_multiple(rng, k).copied());
            f(&hand);
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
