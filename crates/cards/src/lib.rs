// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Poker hands cards types.
//!
//! This crate define types to create cards:
//!
//! ```
//! # use pokerhands_cards::{Card, Rank, Suit};
//! let ah = Card::new(Rank::Ace, Suit::Hearts);
//! let kd: Card = "KD".parse().unwrap();
//! assert!(ah.rank() > kd.rank());
//! ```
//!
//! and a [Deck] type for shuffling, sampling, and iterating cards in the deck.
//!
//! For example to iterate through all 5 cards hands:
//!
//! ```no_run
//! # use pokerhands_cards::Deck;
//! let mut counter = 0;
//! Deck::default().for_each(5, |hand| {
//!     counter += 1;
//! });
//! assert_eq!(counter, 2_598_960);
//! ```
//!
//! to sample 10 random 5-cards hands:
//!
//! ```
//! # use pokerhands_cards::Deck;
//! let mut counter = 0;
//! Deck::default().sample(10, 5, &mut rand::rng(), |hand| {
//!     assert_eq!(hand.len(), 5);
//!     counter += 1;
//! });
//! assert_eq!(counter, 10);
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod card;
pub use card::{Card, ParseCardError, Rank, Suit, parse_cards};

mod deck;
pub use deck::Deck;
