// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Poker hand classifier.
//!
//! The classifier sorts a five cards hand by descending rank and tests each
//! category from the strongest to the weakest, the first match and the ranks
//! needed to break ties with hands of the same category make a [HandRank].
//!
//! The rank frequencies used by the four of a kind, full house, three of a
//! kind and pairs checks are kept in hand order, so that when two ranks have
//! the same frequency the highest is always seen first.

mod analysis;

mod classify;
pub use classify::classify;

mod rank;
pub use rank::{Category, EvalError, HandRank};
