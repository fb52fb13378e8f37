// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Poker hands classifier.
//!
//! Classifies a five cards hand into one of the poker categories, from high
//! card to royal flush, and returns a [HandRank] that can be compared with
//! other hands ranks to find the strongest hand:
//!
//! ```
//! # use pokerhands_eval::*;
//! let flush = classify(&parse_cards("2C 4C 6C 8C KC").unwrap());
//! let pairs = classify(&parse_cards("7D 7C 3S 3H 9C").unwrap());
//! assert_eq!(flush.category(), Category::Flush);
//! assert!(flush > pairs);
//! ```
//!
//! Hands that don't have exactly five cards are not rejected, they are
//! classified as [HandRank::NotRankable] and cannot be compared:
//!
//! ```
//! # use pokerhands_eval::*;
//! let short = classify(&parse_cards("AS KS").unwrap());
//! let pairs = classify(&parse_cards("7D 7C 3S 3H 9C").unwrap());
//! assert!(!short.is_rankable());
//! assert!(short.try_cmp(&pairs).is_err());
//! ```
//!
//! Ace is always high, A-5-4-3-2 is not a straight.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
pub mod eval;
pub use eval::{Category, EvalError, HandRank, classify};

// Reexport cards types.
pub use pokerhands_cards::{Card, Deck, ParseCardError, Rank, Suit, parse_cards};
